//! Raw tag frames keyed by ID3v2 frame identifier.
//!
//! [`TagFrames`] is an insertion-ordered map from a frame key (`TIT2`,
//! `TALB`, `APIC:<description>`, ...) to its value. Picture frames carry the
//! description in the key so several pictures can live side by side.

use lofty::id3::v2::{Frame, Id3v2Tag};

/// Key prefix shared by all attached-picture frames.
pub const PICTURE_FRAME_PREFIX: &str = "APIC";

/// Separator lofty uses between multiple values of one text frame.
const TEXT_VALUE_SEPARATOR: char = '\0';

/// Value of a single tag frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameValue {
    /// Text information frame, one entry per value
    Text(Vec<String>),
    /// Attached picture payload (encoded image bytes)
    Picture(Vec<u8>),
    /// Any other frame; kept so keys stay visible but never interpreted
    Other,
}

impl FrameValue {
    /// Text values, if this is a text frame.
    pub fn text(&self) -> Option<&[String]> {
        match self {
            Self::Text(values) => Some(values),
            _ => None,
        }
    }

    /// Binary payload, if this is a picture frame.
    pub fn data(&self) -> Option<&[u8]> {
        match self {
            Self::Picture(data) => Some(data),
            _ => None,
        }
    }
}

/// Insertion-ordered mapping of frame key to frame value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFrames {
    entries: Vec<(String, FrameValue)>,
}

impl TagFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a frame. An existing key keeps its position and gets the new
    /// value.
    pub fn insert(&mut self, key: impl Into<String>, value: FrameValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FrameValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrameValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First text value of a frame, if it is a non-empty text frame.
    pub fn first_text(&self, key: &str) -> Option<&str> {
        self.get(key)?.text()?.first().map(String::as_str)
    }

    /// Build the mapping from a lofty ID3v2 tag, preserving frame order.
    pub fn from_id3v2(tag: &Id3v2Tag) -> Self {
        let mut frames = Self::new();
        for frame in tag {
            match frame {
                Frame::Text(text) => {
                    let values = text
                        .value
                        .split(TEXT_VALUE_SEPARATOR)
                        .map(str::to_string)
                        .collect();
                    frames.insert(frame.id_str(), FrameValue::Text(values));
                }
                Frame::Picture(attached) => {
                    let description = attached.picture.description().unwrap_or_default();
                    frames.insert(
                        format!("{}:{}", PICTURE_FRAME_PREFIX, description),
                        FrameValue::Picture(attached.picture.data().to_vec()),
                    );
                }
                _ => frames.insert(frame.id_str(), FrameValue::Other),
            }
        }
        frames
    }
}

impl<K: Into<String>> FromIterator<(K, FrameValue)> for TagFrames {
    fn from_iter<I: IntoIterator<Item = (K, FrameValue)>>(iter: I) -> Self {
        let mut frames = Self::new();
        for (key, value) in iter {
            frames.insert(key, value);
        }
        frames
    }
}
