//! Top-level media types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The top-level type of a media type, e.g. the `text` in `text/plain`.
///
/// The registered top-level types are matched case-insensitively and always
/// written in lower case. Anything else is kept verbatim in [`Other`], so
/// `Other("Movie")` and `Other("movie")` are different values; normalize the
/// enclosing media type first when that matters.
///
/// [`Other`]: TopLevelType::Other
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TopLevelType {
    Application,
    Audio,
    Example,
    Font,
    Haptics,
    Image,
    Message,
    Model,
    Multipart,
    Text,
    Video,
    Other(String),
}

impl TopLevelType {
    /// Parses a top-level type. Never fails: unregistered names become
    /// [`TopLevelType::Other`] holding the trimmed input.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        const REGISTERED: [(&str, TopLevelType); 11] = [
            ("application", TopLevelType::Application),
            ("audio", TopLevelType::Audio),
            ("example", TopLevelType::Example),
            ("font", TopLevelType::Font),
            ("haptics", TopLevelType::Haptics),
            ("image", TopLevelType::Image),
            ("message", TopLevelType::Message),
            ("model", TopLevelType::Model),
            ("multipart", TopLevelType::Multipart),
            ("text", TopLevelType::Text),
            ("video", TopLevelType::Video),
        ];
        REGISTERED
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, ty)| ty)
            .unwrap_or_else(|| TopLevelType::Other(s.to_string()))
    }

    /// Returns the string form of the type.
    pub fn as_str(&self) -> &str {
        match self {
            TopLevelType::Application => "application",
            TopLevelType::Audio => "audio",
            TopLevelType::Example => "example",
            TopLevelType::Font => "font",
            TopLevelType::Haptics => "haptics",
            TopLevelType::Image => "image",
            TopLevelType::Message => "message",
            TopLevelType::Model => "model",
            TopLevelType::Multipart => "multipart",
            TopLevelType::Text => "text",
            TopLevelType::Video => "video",
            TopLevelType::Other(s) => s,
        }
    }

    /// Reports whether this is one of the registered top-level types.
    pub fn is_registered(&self) -> bool {
        !matches!(self, TopLevelType::Other(_))
    }
}

impl FromStr for TopLevelType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for TopLevelType {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for TopLevelType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl fmt::Display for TopLevelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TopLevelType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TopLevelType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
