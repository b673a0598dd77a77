//! Playback position, duration and volume bookkeeping

/// Position and duration reported by the audio driver
#[derive(Clone, Copy, Debug)]
pub struct PlaybackStatus {
    pub position_secs: f64,
    /// NaN until the driver reports metadata for the current source
    pub duration_secs: f64,
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        Self {
            position_secs: 0.0,
            duration_secs: f64::NAN,
        }
    }
}

impl PlaybackStatus {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn known_duration(&self) -> Option<f64> {
        (self.duration_secs.is_finite() && self.duration_secs > 0.0).then_some(self.duration_secs)
    }

    /// Fraction of the track already played, 0 when the duration is unknown.
    pub fn progress(&self) -> f64 {
        match self.known_duration() {
            Some(duration) if self.position_secs.is_finite() => {
                (self.position_secs / duration).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    pub fn formatted(&self) -> (String, String) {
        (format_time(self.position_secs), format_time(self.duration_secs))
    }

    /// Absolute seek target for a progress-bar fraction.
    pub fn seek_target(&self, ratio: f64) -> Option<f64> {
        let duration = self.known_duration()?;
        if !ratio.is_finite() {
            return None;
        }
        Some(ratio.clamp(0.0, 1.0) * duration)
    }

    /// Seek target relative to the current position.
    pub fn seek_offset(&self, delta_secs: f64) -> Option<f64> {
        let duration = self.known_duration()?;
        let position = if self.position_secs.is_finite() { self.position_secs } else { 0.0 };
        Some((position + delta_secs).clamp(0.0, duration))
    }
}

/// `M:SS`, minutes unbounded. Non-finite or negative input renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn clamp_volume(ratio: f32) -> f32 {
    if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_cases() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn seeking_needs_a_duration() {
        let mut status = PlaybackStatus::default();
        assert_eq!(status.seek_target(0.5), None);
        assert_eq!(status.seek_offset(5.0), None);

        status.duration_secs = 200.0;
        status.position_secs = 198.0;
        assert_eq!(status.seek_target(0.5), Some(100.0));
        assert_eq!(status.seek_target(1.7), Some(200.0));
        assert_eq!(status.seek_offset(5.0), Some(200.0));
        assert_eq!(status.seek_offset(-500.0), Some(0.0));
    }

    #[test]
    fn progress_is_clamped() {
        let status = PlaybackStatus { position_secs: 30.0, duration_secs: 120.0 };
        assert_eq!(status.progress(), 0.25);
        let status = PlaybackStatus { position_secs: 30.0, duration_secs: f64::NAN };
        assert_eq!(status.progress(), 0.0);
    }

    #[test]
    fn volume_is_clamped() {
        assert_eq!(clamp_volume(1.4), 1.0);
        assert_eq!(clamp_volume(-0.1), 0.0);
        assert_eq!(clamp_volume(f32::NAN), 0.0);
        assert_eq!(clamp_volume(0.7), 0.7);
    }
}
