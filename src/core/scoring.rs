//! Scoring module - line-clear scoring, leveling, and gravity speed
//!
//! A flat per-clear bonus, not the classic multi-line tables: every cleared
//! row is worth `100 * level`, the level is
//! derived from total lines cleared (1-based), and the gravity interval
//! shrinks 100ms per level down to a 100ms floor.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_MS_PER_LEVEL, HARD_DROP_SCORE_PER_ROW,
    LINES_PER_LEVEL, LINE_SCORE_BASE,
};

/// Points for clearing `cleared` rows at the given level.
///
/// The level in effect before the clear is the one that scales the bonus.
pub fn line_clear_score(cleared: usize, level: u32) -> u32 {
    (cleared as u32) * LINE_SCORE_BASE * level
}

/// Level for a total line count: starts at 1, +1 every 10 lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, clamped at the minimum floor.
pub fn drop_interval_ms(level: u32) -> u32 {
    let step = level.saturating_sub(1).saturating_mul(DROP_MS_PER_LEVEL);
    BASE_DROP_MS.saturating_sub(step).max(DROP_INTERVAL_MIN_MS)
}

/// Points for an instantaneous drop of `rows` rows.
pub fn hard_drop_score(rows: u32) -> u32 {
    rows * HARD_DROP_SCORE_PER_ROW
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score_scales_with_level() {
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(2, 1), 200);
        assert_eq!(line_clear_score(2, 3), 600);
        assert_eq!(line_clear_score(4, 2), 800);
        assert_eq!(line_clear_score(0, 5), 0);
    }

    #[test]
    fn test_level_progression() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(23), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_drop_interval_floor() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(9), 200);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(1000), 100);
    }

    #[test]
    fn test_hard_drop_score() {
        assert_eq!(hard_drop_score(0), 0);
        assert_eq!(hard_drop_score(1), 2);
        assert_eq!(hard_drop_score(18), 36);
    }
}
