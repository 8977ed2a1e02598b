//! Upsert bodies for the singleton entities.
//!
//! A singleton POST is always patch-shaped. Fields the table requires are
//! only enforced when the first row is created (`first_*`).

use serde::Deserialize;
use validator::Validate;

use vows_core::date::DateLike;
use vows_core::util::patch::nullable;
use vows_db::db::enums::{BackgroundPlaylist, StreamPlatform};
use vows_db::model::couple::{CoupleInfoChanges, NewCoupleInfo};
use vows_db::model::livestream::{LivestreamInfoChanges, NewLivestreamInfo};
use vows_db::model::settings::{NewSiteSettings, SiteSettingsChanges};

use super::{missing, optional_date, patch_date};
use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CoupleInfoInput {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub bride_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub groom_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub bride_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub groom_description: Option<Option<String>>,
    pub wedding_date: Option<DateLike>,
    #[serde(default, deserialize_with = "nullable")]
    pub bride_photo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub groom_photo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub hero_image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub love_story: Option<Option<String>>,
}

impl CoupleInfoInput {
    /// ## Errors
    /// Returns `ValidationError` if `weddingDate` does not parse.
    pub fn into_changes(self) -> ServiceResult<CoupleInfoChanges> {
        Ok(CoupleInfoChanges {
            bride_name: self.bride_name,
            groom_name: self.groom_name,
            bride_description: self.bride_description,
            groom_description: self.groom_description,
            wedding_date: optional_date("weddingDate", self.wedding_date)?,
            bride_photo_url: self.bride_photo_url,
            groom_photo_url: self.groom_photo_url,
            hero_image_url: self.hero_image_url,
            love_story: self.love_story,
        })
    }
}

/// ## Summary
/// Builds the first couple info row from an upsert patch.
///
/// ## Errors
/// Returns `ValidationError` if `weddingDate` is missing.
pub fn first_couple_info(changes: &CoupleInfoChanges) -> ServiceResult<NewCoupleInfo> {
    let wedding_date = changes.wedding_date.ok_or_else(|| missing("weddingDate"))?;
    Ok(NewCoupleInfo {
        id: uuid::Uuid::now_v7(),
        bride_name: changes.bride_name.clone().unwrap_or_default(),
        groom_name: changes.groom_name.clone().unwrap_or_default(),
        bride_description: changes.bride_description.clone().flatten(),
        groom_description: changes.groom_description.clone().flatten(),
        wedding_date,
        bride_photo_url: changes.bride_photo_url.clone().flatten(),
        groom_photo_url: changes.groom_photo_url.clone().flatten(),
        hero_image_url: changes.hero_image_url.clone().flatten(),
        love_story: changes.love_story.clone().flatten(),
    })
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsInput {
    #[serde(default, deserialize_with = "nullable")]
    pub venue_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub venue_address: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub venue_map_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub event_start_time: Option<Option<DateLike>>,
    #[serde(default, deserialize_with = "nullable")]
    pub event_end_time: Option<Option<DateLike>>,
    pub background_music_enabled: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub background_music_url: Option<Option<String>>,
    pub background_playlist: Option<BackgroundPlaylist>,
    #[serde(default, deserialize_with = "nullable")]
    pub facebook_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub instagram_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub tiktok_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub website_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub heading_font: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub body_font: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub script_font: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub footer_text: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub bank_qr_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub bank_transfer_text: Option<Option<String>>,
}

impl SiteSettingsInput {
    /// ## Errors
    /// Returns `ValidationError` if a playlist entry has an empty URL or a
    /// date field does not parse.
    pub fn into_changes(self) -> ServiceResult<SiteSettingsChanges> {
        let empty_url = self
            .background_playlist
            .as_ref()
            .and_then(|playlist| playlist.0.iter().position(|entry| entry.url.trim().is_empty()));
        if let Some(position) = empty_url {
            return Err(ServiceError::ValidationError(format!(
                "backgroundPlaylist[{position}].url: must not be empty"
            )));
        }

        Ok(SiteSettingsChanges {
            venue_name: self.venue_name,
            venue_address: self.venue_address,
            venue_map_url: self.venue_map_url,
            event_start_time: patch_date("eventStartTime", self.event_start_time)?,
            event_end_time: patch_date("eventEndTime", self.event_end_time)?,
            background_music_enabled: self.background_music_enabled,
            background_music_url: self.background_music_url,
            background_playlist: self.background_playlist,
            facebook_url: self.facebook_url,
            instagram_url: self.instagram_url,
            tiktok_url: self.tiktok_url,
            website_url: self.website_url,
            heading_font: self.heading_font,
            body_font: self.body_font,
            script_font: self.script_font,
            footer_text: self.footer_text,
            bank_qr_url: self.bank_qr_url,
            bank_transfer_text: self.bank_transfer_text,
        })
    }
}

/// Builds the first settings row from an upsert patch. Nothing is required.
#[must_use]
pub fn first_site_settings(changes: &SiteSettingsChanges) -> NewSiteSettings {
    let changes = changes.clone();
    NewSiteSettings {
        id: uuid::Uuid::now_v7(),
        venue_name: changes.venue_name.flatten(),
        venue_address: changes.venue_address.flatten(),
        venue_map_url: changes.venue_map_url.flatten(),
        event_start_time: changes.event_start_time.flatten(),
        event_end_time: changes.event_end_time.flatten(),
        background_music_enabled: changes.background_music_enabled.unwrap_or_default(),
        background_music_url: changes.background_music_url.flatten(),
        background_playlist: changes.background_playlist.unwrap_or_default(),
        facebook_url: changes.facebook_url.flatten(),
        instagram_url: changes.instagram_url.flatten(),
        tiktok_url: changes.tiktok_url.flatten(),
        website_url: changes.website_url.flatten(),
        heading_font: changes.heading_font.flatten(),
        body_font: changes.body_font.flatten(),
        script_font: changes.script_font.flatten(),
        footer_text: changes.footer_text.flatten(),
        bank_qr_url: changes.bank_qr_url.flatten(),
        bank_transfer_text: changes.bank_transfer_text.flatten(),
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LivestreamInput {
    pub is_active: Option<bool>,
    pub platform: Option<StreamPlatform>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub stream_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub start_time: Option<Option<DateLike>>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_time: Option<Option<DateLike>>,
    #[serde(default, deserialize_with = "nullable")]
    pub thumbnail_url: Option<Option<String>>,
    pub chat_enabled: Option<bool>,
}

impl LivestreamInput {
    /// ## Errors
    /// Returns `ValidationError` if a time field does not parse.
    pub fn into_changes(self) -> ServiceResult<LivestreamInfoChanges> {
        Ok(LivestreamInfoChanges {
            is_active: self.is_active,
            platform: self.platform,
            stream_url: self.stream_url,
            title: self.title,
            description: self.description,
            start_time: patch_date("startTime", self.start_time)?,
            end_time: patch_date("endTime", self.end_time)?,
            thumbnail_url: self.thumbnail_url,
            chat_enabled: self.chat_enabled,
        })
    }
}

/// ## Summary
/// Builds the first livestream row from an upsert patch.
///
/// ## Errors
/// Returns `ValidationError` if `streamUrl` is missing.
pub fn first_livestream(changes: &LivestreamInfoChanges) -> ServiceResult<NewLivestreamInfo> {
    let stream_url = changes
        .stream_url
        .clone()
        .ok_or_else(|| missing("streamUrl"))?;
    Ok(NewLivestreamInfo {
        id: uuid::Uuid::now_v7(),
        is_active: changes.is_active.unwrap_or_default(),
        platform: changes.platform.unwrap_or_default(),
        stream_url,
        title: changes.title.clone().flatten(),
        description: changes.description.clone().flatten(),
        start_time: changes.start_time.flatten(),
        end_time: changes.end_time.flatten(),
        thumbnail_url: changes.thumbnail_url.clone().flatten(),
        chat_enabled: changes.chat_enabled.unwrap_or_default(),
    })
}
