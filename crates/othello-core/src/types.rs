//! Common type aliases used throughout the engine.

/// Remaining search depth.
pub type Depth = u32;

/// Utility value, always signed for the perspective color of a search.
pub type Score = i32;

/// Depth sentinel meaning "search until true terminal positions".
///
/// Only tractable on small boards.
pub const UNLIMITED_DEPTH: Depth = Depth::MAX;
