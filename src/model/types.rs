//! Core type definitions shared by the playlist and lyrics engines

/// A playable entry of the playlist
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    /// Unique display name, also the lyrics lookup key
    pub name: String,
    pub url: String,
}

impl Track {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Build a track from an audio file name, dropping a trailing `.mp3`.
    pub fn from_file_name(file_name: &str, base_url: &str) -> Self {
        let name = strip_mp3(file_name).to_string();
        let url = if base_url.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", base_url.trim_end_matches('/'), file_name)
        };
        Self { name, url }
    }

    pub fn label(&self, index: usize) -> TrackLabel {
        TrackLabel::parse(&self.name, index)
    }
}

fn strip_mp3(name: &str) -> &str {
    let len = name.len();
    if len >= 4 && name.is_char_boundary(len - 4) && name[len - 4..].eq_ignore_ascii_case(".mp3") {
        &name[..len - 4]
    } else {
        name
    }
}

/// Number and title shown in the track list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackLabel {
    pub number: String,
    pub title: String,
}

impl TrackLabel {
    /// Names shaped like `track<N>_<title>` yield `N` and `title`; anything else
    /// falls back to the 1-based position and the whole name.
    pub fn parse(name: &str, index: usize) -> Self {
        Self::parse_numbered(name).unwrap_or_else(|| Self {
            number: (index + 1).to_string(),
            title: strip_mp3(name).to_string(),
        })
    }

    fn parse_numbered(name: &str) -> Option<Self> {
        let prefix = name.get(..5)?;
        if !prefix.eq_ignore_ascii_case("track") {
            return None;
        }
        let rest = &name[5..];
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let title = rest[digits..].strip_prefix('_')?;
        let title = strip_mp3(title);
        if title.is_empty() {
            return None;
        }
        Some(Self {
            number: rest[..digits].to_string(),
            title: title.to_string(),
        })
    }
}

/// Volume icon level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeLevel {
    Mute,
    Low,
    High,
}

impl VolumeLevel {
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio <= 0.0 {
            VolumeLevel::Mute
        } else if ratio < 0.5 {
            VolumeLevel::Low
        } else {
            VolumeLevel::High
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            VolumeLevel::Mute => "🔇",
            VolumeLevel::Low => "🔉",
            VolumeLevel::High => "🔊",
        }
    }
}

/// One entry of the lyrics viewport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowLine {
    pub index: usize,
    pub text: String,
    pub active: bool,
}

/// What the lyrics pane should display
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LyricsView {
    Lines(Vec<WindowLine>),
    Unavailable,
}

impl Default for LyricsView {
    fn default() -> Self {
        LyricsView::Lines(Vec::new())
    }
}
