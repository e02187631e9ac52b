//! Positional square-weight tables, one per board size.
//!
//! Corners are strongly positive, X-squares and C-squares next to the corners
//! are negative. Tables are row-major and symmetric under every board
//! symmetry.

use crate::types::Score;

#[rustfmt::skip]
const WEIGHTS_4: [Score; 16] = [
    100, -10, -10, 100,
    -10, -20, -20, -10,
    -10, -20, -20, -10,
    100, -10, -10, 100,
];

#[rustfmt::skip]
const WEIGHTS_5: [Score; 25] = [
    100, -20,  10, -20, 100,
    -20, -40,  -5, -40, -20,
     10,  -5,   0,  -5,  10,
    -20, -40,  -5, -40, -20,
    100, -20,  10, -20, 100,
];

#[rustfmt::skip]
const WEIGHTS_6: [Score; 36] = [
    120, -30,  20,  20, -30, 120,
    -30, -50, -10, -10, -50, -30,
     20, -10,   5,   5, -10,  20,
     20, -10,   5,   5, -10,  20,
    -30, -50, -10, -10, -50, -30,
    120, -30,  20,  20, -30, 120,
];

#[rustfmt::skip]
const WEIGHTS_7: [Score; 49] = [
    120, -30,  20,  20,  20, -30, 120,
    -30, -50, -10, -10, -10, -50, -30,
     20, -10,   5,   0,   5, -10,  20,
     20, -10,   0,  10,   0, -10,  20,
     20, -10,   5,   0,   5, -10,  20,
    -30, -50, -10, -10, -10, -50, -30,
    120, -30,  20,  20,  20, -30, 120,
];

#[rustfmt::skip]
const WEIGHTS_8: [Score; 64] = [
    120, -20,  20,   5,   5,  20, -20, 120,
    -20, -40,  -5,  -5,  -5,  -5, -40, -20,
     20,  -5,  15,   3,   3,  15,  -5,  20,
      5,  -5,   3,   3,   3,   3,  -5,   5,
      5,  -5,   3,   3,   3,   3,  -5,   5,
     20,  -5,  15,   3,   3,  15,  -5,  20,
    -20, -40,  -5,  -5,  -5,  -5, -40, -20,
    120, -20,  20,   5,   5,  20, -20, 120,
];

/// Returns the row-major weight table for a board of the given size.
///
/// Sizes outside 4..=8 get an empty table; `Board` never has such a size.
pub fn for_size(size: usize) -> &'static [Score] {
    match size {
        4 => &WEIGHTS_4,
        5 => &WEIGHTS_5,
        6 => &WEIGHTS_6,
        7 => &WEIGHTS_7,
        8 => &WEIGHTS_8,
        _ => &[],
    }
}
