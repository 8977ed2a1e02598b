use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::{enums::BackgroundPlaylist, schema};

/// Site-wide presentation settings. At most one row exists.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::site_settings)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub id: uuid::Uuid,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub venue_map_url: Option<String>,
    pub event_start_time: Option<chrono::DateTime<chrono::Utc>>,
    pub event_end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub background_music_enabled: bool,
    pub background_music_url: Option<String>,
    pub background_playlist: BackgroundPlaylist,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub website_url: Option<String>,
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    pub script_font: Option<String>,
    pub footer_text: Option<String>,
    pub bank_qr_url: Option<String>,
    pub bank_transfer_text: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Every settings column is optional or defaulted, so the first write can
/// always be built from whatever the patch carries.
#[derive(Debug, Clone, Default, Insertable)]
#[diesel(table_name = schema::site_settings)]
pub struct NewSiteSettings {
    pub id: uuid::Uuid,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub venue_map_url: Option<String>,
    pub event_start_time: Option<chrono::DateTime<chrono::Utc>>,
    pub event_end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub background_music_enabled: bool,
    pub background_music_url: Option<String>,
    pub background_playlist: BackgroundPlaylist,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub website_url: Option<String>,
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    pub script_font: Option<String>,
    pub footer_text: Option<String>,
    pub bank_qr_url: Option<String>,
    pub bank_transfer_text: Option<String>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::site_settings)]
pub struct SiteSettingsChanges {
    pub venue_name: Option<Option<String>>,
    pub venue_address: Option<Option<String>>,
    pub venue_map_url: Option<Option<String>>,
    pub event_start_time: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub event_end_time: Option<Option<chrono::DateTime<chrono::Utc>>>,
    pub background_music_enabled: Option<bool>,
    pub background_music_url: Option<Option<String>>,
    pub background_playlist: Option<BackgroundPlaylist>,
    pub facebook_url: Option<Option<String>>,
    pub instagram_url: Option<Option<String>>,
    pub tiktok_url: Option<Option<String>>,
    pub website_url: Option<Option<String>>,
    pub heading_font: Option<Option<String>>,
    pub body_font: Option<Option<String>>,
    pub script_font: Option<Option<String>>,
    pub footer_text: Option<Option<String>>,
    pub bank_qr_url: Option<Option<String>>,
    pub bank_transfer_text: Option<Option<String>>,
}
