//! Bodies for guest submissions and the admin approval action.
//!
//! `approved` is never accepted from a submitter; the column default applies.

use serde::Deserialize;
use validator::Validate;

use vows_core::constants::{MAX_GUEST_COUNT, MAX_MESSAGE_LENGTH};
use vows_core::util::patch::nullable;
use vows_db::model::guest_photo::NewGuestPhoto;
use vows_db::model::message::NewGuestMessage;
use vows_db::model::rsvp::{NewRsvp, RsvpChanges};

const fn default_guest_count() -> i32 {
    1
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRsvp {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub guest_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub phone: Option<String>,
    pub attending: bool,
    #[serde(default = "default_guest_count")]
    #[validate(range(min = 1, max = MAX_GUEST_COUNT))]
    pub guest_count: i32,
    pub meal_preference: Option<String>,
    pub special_requirements: Option<String>,
}

impl CreateRsvp {
    #[must_use]
    pub fn into_new(self) -> NewRsvp {
        NewRsvp {
            id: uuid::Uuid::now_v7(),
            guest_name: self.guest_name,
            email: self.email,
            phone: self.phone,
            attending: self.attending,
            guest_count: self.guest_count,
            meal_preference: self.meal_preference,
            special_requirements: self.special_requirements,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchRsvp {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub guest_name: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: Option<Option<String>>,
    pub attending: Option<bool>,
    #[validate(range(min = 1, max = MAX_GUEST_COUNT))]
    pub guest_count: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub meal_preference: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub special_requirements: Option<Option<String>>,
}

impl PatchRsvp {
    #[must_use]
    pub fn into_changes(self) -> RsvpChanges {
        RsvpChanges {
            guest_name: self.guest_name,
            email: self.email,
            phone: self.phone,
            attending: self.attending,
            guest_count: self.guest_count,
            meal_preference: self.meal_preference,
            special_requirements: self.special_requirements,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestMessage {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub guest_name: String,
    #[validate(length(min = 1, max = MAX_MESSAGE_LENGTH))]
    pub message: String,
}

impl CreateGuestMessage {
    #[must_use]
    pub fn into_new(self) -> NewGuestMessage {
        NewGuestMessage {
            id: uuid::Uuid::now_v7(),
            guest_name: self.guest_name,
            message: self.message,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestPhoto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub url: String,
    pub caption: Option<String>,
    pub guest_name: Option<String>,
}

impl CreateGuestPhoto {
    #[must_use]
    pub fn into_new(self) -> NewGuestPhoto {
        NewGuestPhoto {
            id: uuid::Uuid::now_v7(),
            url: self.url,
            caption: self.caption,
            guest_name: self.guest_name,
        }
    }
}

/// Body of the approval routes.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct ApprovalInput {
    pub approved: bool,
}
