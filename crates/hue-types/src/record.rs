use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::color::ColorValue;

/// Opaque, unique identifier for a color record.
///
/// Identifiers loaded from seed data are kept verbatim. Freshly created
/// records get a time-ordered UUID v7 rendered as a string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(String);

impl ColorId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorId({})", self.0)
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A stored color record.
///
/// `id` and `timestamp` are fixed at creation; only `rating` changes
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub id: ColorId,
    pub title: String,
    pub color: ColorValue,
    #[serde(default)]
    pub rating: i32,
    pub timestamp: DateTime<Utc>,
}

impl Color {
    /// Build a record from client input: fresh id, zero rating, current time.
    pub fn create(new: NewColor) -> Self {
        Self {
            id: ColorId::generate(),
            title: new.title,
            color: new.color,
            rating: 0,
            timestamp: Utc::now(),
        }
    }

    /// Creation time as ISO-8601 with millisecond precision, e.g.
    /// `2024-05-01T12:00:00.000Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Client-supplied fields for a new record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewColor {
    pub title: String,
    pub color: ColorValue,
}

impl NewColor {
    pub fn new(title: impl Into<String>, color: ColorValue) -> Self {
        Self {
            title: title.into(),
            color,
        }
    }
}
