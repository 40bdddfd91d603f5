//! Pattern scores for Blind Omok evaluation
//!
//! A scan from one stone yields a contiguous count and the number of open
//! ends (0, 1 or 2). These constants turn that pair into a score.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row, regardless of ends
    pub const FIVE: i32 = 100_000;

    /// Four with both ends open
    pub const OPEN_FOUR: i32 = 10_000;
    /// Four with one end open
    pub const CLOSED_FOUR: i32 = 1_000;

    /// Three with both ends open
    pub const OPEN_THREE: i32 = 500;
    /// Three with one end open
    pub const CLOSED_THREE: i32 = 100;

    pub const OPEN_TWO: i32 = 50;
    pub const CLOSED_TWO: i32 = 10;

    pub const OPEN_ONE: i32 = 5;
    pub const CLOSED_ONE: i32 = 1;
}

/// Score for a scan that counted `count` stones with `open_ends` empty ends.
///
/// Anything with no open end is dead and scores zero unless it is already
/// five long.
#[must_use]
pub fn line_score(count: u32, open_ends: u32) -> i32 {
    match (count, open_ends) {
        (5.., _) => PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (1, 2) => PatternScore::OPEN_ONE,
        (1, 1) => PatternScore::CLOSED_ONE,
        _ => 0,
    }
}
