//! Utility functions for rendering UI components

use ratatui::layout::Rect;

/// Vinyl animation frames, one per tick while playing
const VINYL_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn vinyl_glyph(is_playing: bool, tick: u64) -> &'static str {
    if is_playing {
        VINYL_FRAMES[(tick % VINYL_FRAMES.len() as u64) as usize]
    } else {
        "●"
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Calculate width needed for the track number column
pub fn calculate_num_width(item_count: usize) -> usize {
    if item_count == 0 {
        2
    } else {
        let digits = (item_count as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_titles() {
        assert_eq!(truncate_string("abcdefgh", 6), "abc...");
        assert_eq!(truncate_string("abc", 6), "abc");
    }

    #[test]
    fn vinyl_spins_only_while_playing() {
        assert_eq!(vinyl_glyph(false, 3), "●");
        assert_ne!(vinyl_glyph(true, 0), vinyl_glyph(true, 1));
    }

    #[test]
    fn popup_fits_inside_area() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_rect(area, 40, 4);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.y, 3);
    }
}
