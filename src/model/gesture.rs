//! Vertical swipe classification for lyric navigation

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Up,
    Down,
}

/// Classify a vertical drag. Upward motion (start below end) beyond
/// `min_distance` scrolls the lyrics up, downward motion scrolls them down.
pub fn classify_swipe(start_y: f32, end_y: f32, min_distance: f32) -> Option<Swipe> {
    let distance = start_y - end_y;
    if distance > min_distance {
        Some(Swipe::Up)
    } else if distance < -min_distance {
        Some(Swipe::Down)
    } else {
        None
    }
}
