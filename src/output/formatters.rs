//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Clamped to [0, width] before the cast
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled to the most a list of `total` words allows
#[must_use]
pub fn entropy_bar(entropy: f64, total: usize, width: usize) -> String {
    let max_entropy = (total.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Information actually gained when `before` candidates became `after`
#[must_use]
pub fn bits_gained(before: usize, after: usize) -> f64 {
    if after == 0 {
        return 0.0;
    }
    (before as f64 / after as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn entropy_bar_uses_list_size() {
        // log2(16) = 4 bits is the ceiling
        assert_eq!(entropy_bar(2.0, 16, 8), "████░░░░");
        assert_eq!(entropy_bar(0.0, 1, 3), "░░░");
    }

    #[test]
    fn gained_bits() {
        assert!((bits_gained(64, 8) - 3.0).abs() < 1e-12);
        assert!(bits_gained(5, 5).abs() < 1e-12);
        assert!(bits_gained(5, 0).abs() < 1e-12);
    }
}
