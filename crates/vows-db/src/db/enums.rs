//! Database enum types with Diesel serialization.
//!
//! This module provides type-safe wrappers for the loosely-typed text columns
//! (platform, category, icon, popup kind) plus the JSONB playlist on
//! `site_settings`. Each type implements `ToSql` and `FromSql` for automatic
//! conversion between Rust and `PostgreSQL`, and serializes to JSON as the same
//! string that is stored.

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::{Jsonb, Text};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use vows_core::error::CoreError;

/// Livestream hosting platform.
///
/// Maps to `livestream_info.platform` CHECK constraint.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsExpression,
    FromSqlRow,
    Serialize,
    Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum StreamPlatform {
    #[default]
    Youtube,
    Facebook,
    Zoom,
    Custom,
}

impl StreamPlatform {
    /// Returns the database string representation of this platform.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Facebook => "facebook",
            Self::Zoom => "zoom",
            Self::Custom => "custom",
        }
    }
}

impl ToSql<Text, Pg> for StreamPlatform {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for StreamPlatform {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"youtube" => Ok(Self::Youtube),
            b"facebook" => Ok(Self::Facebook),
            b"zoom" => Ok(Self::Zoom),
            b"custom" => Ok(Self::Custom),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl fmt::Display for StreamPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Popup placement on the public site. At most one popup exists per kind.
///
/// Maps to `popup.kind` UNIQUE + CHECK constraint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, FromSqlRow, Serialize, Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum PopupKind {
    Welcome,
    ScrollEnd,
}

impl PopupKind {
    /// Returns the database string representation of this popup kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::ScrollEnd => "scroll_end",
        }
    }
}

impl ToSql<Text, Pg> for PopupKind {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for PopupKind {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"welcome" => Ok(Self::Welcome),
            b"scroll_end" => Ok(Self::ScrollEnd),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl FromStr for PopupKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "welcome" => Ok(Self::Welcome),
            "scroll_end" => Ok(Self::ScrollEnd),
            other => Err(CoreError::InvalidInput(format!(
                "unknown popup kind '{other}', expected 'welcome' or 'scroll_end'"
            ))),
        }
    }
}

impl fmt::Display for PopupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gallery grouping for admin-managed photos.
///
/// Unknown stored values are preserved in `Other` rather than rejected.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, AsExpression, FromSqlRow, Serialize, Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(from = "String", into = "String")]
pub enum PhotoCategory {
    #[default]
    Gallery,
    Hero,
    Couple,
    Venue,
    Other(String),
}

impl PhotoCategory {
    /// Returns the database string representation of this category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gallery => "gallery",
            Self::Hero => "hero",
            Self::Couple => "couple",
            Self::Venue => "venue",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for PhotoCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "gallery" => Self::Gallery,
            "hero" => Self::Hero,
            "couple" => Self::Couple,
            "venue" => Self::Venue,
            _ => Self::Other(value),
        }
    }
}

impl From<PhotoCategory> for String {
    fn from(value: PhotoCategory) -> Self {
        match value {
            PhotoCategory::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl ToSql<Text, Pg> for PhotoCategory {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for PhotoCategory {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let text = std::str::from_utf8(bytes.as_bytes())?;
        Ok(Self::from(text.to_string()))
    }
}

impl fmt::Display for PhotoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon tag shown next to a schedule entry.
///
/// Unknown stored values are preserved in `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, AsExpression, FromSqlRow, Serialize, Deserialize)]
#[diesel(sql_type = Text)]
#[serde(from = "String", into = "String")]
pub enum ScheduleIcon {
    Ceremony,
    Reception,
    Dinner,
    Party,
    Photo,
    Music,
    Travel,
    Other(String),
}

impl ScheduleIcon {
    /// Returns the database string representation of this icon.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ceremony => "ceremony",
            Self::Reception => "reception",
            Self::Dinner => "dinner",
            Self::Party => "party",
            Self::Photo => "photo",
            Self::Music => "music",
            Self::Travel => "travel",
            Self::Other(other) => other,
        }
    }
}

impl From<String> for ScheduleIcon {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ceremony" => Self::Ceremony,
            "reception" => Self::Reception,
            "dinner" => Self::Dinner,
            "party" => Self::Party,
            "photo" => Self::Photo,
            "music" => Self::Music,
            "travel" => Self::Travel,
            _ => Self::Other(value),
        }
    }
}

impl From<ScheduleIcon> for String {
    fn from(value: ScheduleIcon) -> Self {
        match value {
            ScheduleIcon::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl ToSql<Text, Pg> for ScheduleIcon {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for ScheduleIcon {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let text = std::str::from_utf8(bytes.as_bytes())?;
        Ok(Self::from(text.to_string()))
    }
}

impl fmt::Display for ScheduleIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the site background playlist. A track may be unnamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Ordered background playlist stored as a JSONB array of `{url, name}`.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, AsExpression, FromSqlRow, Serialize, Deserialize,
)]
#[diesel(sql_type = Jsonb)]
#[serde(transparent)]
pub struct BackgroundPlaylist(pub Vec<PlaylistEntry>);

// JSONB wire format: a version byte (1) followed by the JSON text.
const JSONB_VERSION: u8 = 1;

impl ToSql<Jsonb, Pg> for BackgroundPlaylist {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(&[JSONB_VERSION])?;
        serde_json::to_writer(out, &self.0)?;
        Ok(IsNull::No)
    }
}

impl FromSql<Jsonb, Pg> for BackgroundPlaylist {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes().split_first() {
            Some((&JSONB_VERSION, json)) => Ok(Self(serde_json::from_slice(json)?)),
            Some(_) => Err("Unsupported JSONB encoding version".into()),
            None => Err("Empty JSONB value".into()),
        }
    }
}
