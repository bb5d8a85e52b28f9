/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based number of the question on screen.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    /// Share of questions already behind the current one, rounded to whole percent.
    pub percent: u32,
    pub time_left: u32,
    pub is_last: bool,
    pub is_complete: bool,
}

/// `round(index / total * 100)`, with halves rounding up.
#[must_use]
pub fn progress_percent(index: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (index.saturating_mul(200) + total) / total.saturating_mul(2);
    u32::try_from(rounded.min(100)).unwrap_or(100)
}
