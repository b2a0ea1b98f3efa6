use lingo_core::stats::percent;

/// Position within the filtered view, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewProgress {
    /// 1-based; 0 when the view is empty.
    pub position: usize,
    pub total: usize,
    pub percentage: u32,
}

impl ViewProgress {
    #[must_use]
    pub fn new(index: usize, total: usize) -> Self {
        if total == 0 {
            return Self::default();
        }
        let position = index.min(total - 1) + 1;
        Self {
            position,
            total,
            percentage: percent(position, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_view_guards_division() {
        assert_eq!(ViewProgress::new(0, 0), ViewProgress::default());
        assert_eq!(ViewProgress::new(3, 0).total, 0);
    }

    #[test]
    fn position_is_one_based() {
        let progress = ViewProgress::new(1, 4);
        assert_eq!(progress.position, 2);
        assert_eq!(progress.percentage, 50);
    }
}
