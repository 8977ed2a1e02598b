//! Create and patch bodies for the admin-managed collections.

use serde::Deserialize;
use validator::Validate;

use vows_core::date::DateLike;
use vows_core::util::patch::nullable;
use vows_db::db::enums::{PhotoCategory, PopupKind, ScheduleIcon};
use vows_db::model::music::{MusicTrackChanges, NewMusicTrack};
use vows_db::model::party::{NewWeddingPartyMember, WeddingPartyMemberChanges};
use vows_db::model::photo::{NewPhoto, PhotoChanges};
use vows_db::model::popup::{NewPopup, PopupChanges};
use vows_db::model::schedule::{NewScheduleEvent, ScheduleEventChanges};

use super::{optional_date, required_date};
use crate::error::ServiceResult;

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleEvent {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub event_time: DateLike,
    pub location: Option<String>,
    pub icon: Option<ScheduleIcon>,
    #[serde(default)]
    pub display_order: i32,
}

impl CreateScheduleEvent {
    /// ## Errors
    /// Returns `ValidationError` if `eventTime` does not parse.
    pub fn into_new(self) -> ServiceResult<NewScheduleEvent> {
        Ok(NewScheduleEvent {
            id: uuid::Uuid::now_v7(),
            title: self.title,
            description: self.description,
            event_time: required_date("eventTime", self.event_time)?,
            location: self.location,
            icon: self.icon,
            display_order: self.display_order,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchScheduleEvent {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub event_time: Option<DateLike>,
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: Option<Option<ScheduleIcon>>,
    pub display_order: Option<i32>,
}

impl PatchScheduleEvent {
    /// ## Errors
    /// Returns `ValidationError` if `eventTime` does not parse.
    pub fn into_changes(self) -> ServiceResult<ScheduleEventChanges> {
        Ok(ScheduleEventChanges {
            title: self.title,
            description: self.description,
            event_time: optional_date("eventTime", self.event_time)?,
            location: self.location,
            icon: self.icon,
            display_order: self.display_order,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhoto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub url: String,
    pub caption: Option<String>,
    #[serde(default)]
    pub category: PhotoCategory,
    #[serde(default)]
    pub display_order: i32,
}

impl CreatePhoto {
    #[must_use]
    pub fn into_new(self) -> NewPhoto {
        NewPhoto {
            id: uuid::Uuid::now_v7(),
            url: self.url,
            caption: self.caption,
            category: self.category,
            display_order: self.display_order,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchPhoto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub caption: Option<Option<String>>,
    pub category: Option<PhotoCategory>,
    pub display_order: Option<i32>,
}

impl PatchPhoto {
    #[must_use]
    pub fn into_changes(self) -> PhotoChanges {
        PhotoChanges {
            url: self.url,
            caption: self.caption,
            category: self.category,
            display_order: self.display_order,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeddingPartyMember {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub role: String,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

impl CreateWeddingPartyMember {
    #[must_use]
    pub fn into_new(self) -> NewWeddingPartyMember {
        NewWeddingPartyMember {
            id: uuid::Uuid::now_v7(),
            name: self.name,
            role: self.role,
            description: self.description,
            photo_url: self.photo_url,
            display_order: self.display_order,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchWeddingPartyMember {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub photo_url: Option<Option<String>>,
    pub display_order: Option<i32>,
}

impl PatchWeddingPartyMember {
    #[must_use]
    pub fn into_changes(self) -> WeddingPartyMemberChanges {
        WeddingPartyMemberChanges {
            name: self.name,
            role: self.role,
            description: self.description,
            photo_url: self.photo_url,
            display_order: self.display_order,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePopup {
    pub kind: PopupKind,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub image_url: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CreatePopup {
    #[must_use]
    pub fn into_new(self) -> NewPopup {
        NewPopup {
            id: uuid::Uuid::now_v7(),
            kind: self.kind,
            image_url: self.image_url,
            is_active: self.is_active,
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchPopup {
    pub kind: Option<PopupKind>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
}

impl PatchPopup {
    #[must_use]
    pub fn into_changes(self) -> PopupChanges {
        PopupChanges {
            kind: self.kind,
            image_url: self.image_url,
            is_active: self.is_active,
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMusicTrack {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub url: String,
    pub artist: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateMusicTrack {
    #[must_use]
    pub fn into_new(self) -> NewMusicTrack {
        NewMusicTrack {
            id: uuid::Uuid::now_v7(),
            title: self.title,
            url: self.url,
            artist: self.artist,
            duration_seconds: self.duration_seconds,
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchMusicTrack {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub artist: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub duration_seconds: Option<Option<i32>>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl PatchMusicTrack {
    #[must_use]
    pub fn into_changes(self) -> MusicTrackChanges {
        MusicTrackChanges {
            title: self.title,
            url: self.url,
            artist: self.artist,
            duration_seconds: self.duration_seconds,
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }
}

/// Body of the `reorder` routes: ids in their new display order.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReorderInput {
    #[validate(length(min = 1, message = "must list at least one id"))]
    pub ids: Vec<uuid::Uuid>,
}
