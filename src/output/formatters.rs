//! Formatting utilities for terminal output

/// Format a turn number as an English ordinal
#[must_use]
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Render a count as a fixed-width block bar
#[must_use]
pub fn count_bar(count: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (count * width / max).max(usize::from(count > 0))
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_cover_the_basic_suffixes() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(10), "10th");
    }

    #[test]
    fn teens_always_take_th() {
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(111), "111th");
        assert_eq!(ordinal(112), "112th");
    }

    #[test]
    fn later_decades_resume_the_basic_suffixes() {
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(23), "23rd");
        assert_eq!(ordinal(101), "101st");
    }

    #[test]
    fn count_bar_empty() {
        assert_eq!(count_bar(0, 100, 10), "░░░░░░░░░░");
    }

    #[test]
    fn count_bar_full() {
        assert_eq!(count_bar(100, 100, 10), "██████████");
    }

    #[test]
    fn count_bar_half() {
        assert_eq!(count_bar(50, 100, 10), "█████░░░░░");
    }

    #[test]
    fn nonzero_counts_always_show_at_least_one_block() {
        assert_eq!(count_bar(1, 1000, 10), "█░░░░░░░░░");
    }

    #[test]
    fn zero_max_renders_an_empty_bar() {
        assert_eq!(count_bar(0, 0, 10), "░░░░░░░░░░");
    }
}
