//! Search constants.

/// Bound used for an open alpha-beta window.
pub const INFINITY: i32 = i32::MAX;

/// Values whose magnitude exceeds this are treated as decided games.
///
/// The check is strict, so a win found one ply above the horizon
/// (`WIN_SCORE - 1`) does not stop the search early.
pub const TERMINAL_THRESHOLD: i32 = 999_999;

/// Ply limit used when none is configured.
pub const DEFAULT_DEPTH: i32 = 11;
