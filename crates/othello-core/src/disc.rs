use crate::error::BoardError;

/// Represents the content of a cell, and doubles as a player color.
///
/// * `Empty` - An empty cell. Never a valid color.
/// * `Black` - A black disc, the first player (protocol code 1).
/// * `White` - A white disc, the second player (protocol code 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Empty,
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its character representation.
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Parses a cell character (`-`/`.`, `X`/`x`/`*`, `O`/`o`).
    pub fn from_char(c: char) -> Result<Disc, BoardError> {
        match c {
            '-' | '.' => Ok(Disc::Empty),
            'X' | 'x' | '*' => Ok(Disc::Black),
            'O' | 'o' => Ok(Disc::White),
            _ => Err(BoardError::InvalidCell(c)),
        }
    }

    /// Converts a game-manager cell code (0 empty, 1 black, 2 white).
    pub fn from_code(code: u8) -> Result<Disc, BoardError> {
        match code {
            0 => Ok(Disc::Empty),
            1 => Ok(Disc::Black),
            2 => Ok(Disc::White),
            _ => Err(BoardError::InvalidCellValue(code)),
        }
    }

    /// Returns the game-manager cell code.
    pub fn code(self) -> u8 {
        match self {
            Disc::Empty => 0,
            Disc::Black => 1,
            Disc::White => 2,
        }
    }

    /// Returns `true` for `Black` and `White`.
    pub fn is_color(self) -> bool {
        self != Disc::Empty
    }

    /// Returns the opposite disc.
    ///
    /// * `Disc::White` for `Disc::Black`
    /// * `Disc::Black` for `Disc::White`
    /// * `Disc::Empty` for `Disc::Empty`
    pub fn opposite(self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
            Disc::Empty => Disc::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Disc::Black.opposite(), Disc::White);
        assert_eq!(Disc::White.opposite(), Disc::Black);
        assert_eq!(Disc::Empty.opposite(), Disc::Empty);
    }

    #[test]
    fn test_codes() {
        for disc in [Disc::Empty, Disc::Black, Disc::White] {
            assert_eq!(Disc::from_code(disc.code()), Ok(disc));
            assert_eq!(Disc::from_char(disc.to_char()), Ok(disc));
        }
        assert_eq!(Disc::from_code(3), Err(BoardError::InvalidCellValue(3)));
        assert_eq!(Disc::from_char('?'), Err(BoardError::InvalidCell('?')));
    }

    #[test]
    fn test_is_color() {
        assert!(Disc::Black.is_color());
        assert!(Disc::White.is_color());
        assert!(!Disc::Empty.is_color());
    }
}
