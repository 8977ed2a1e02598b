use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::{enums::PhotoCategory, schema};

/// Admin-curated gallery photo. The image itself lives on the CDN.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::photo)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: uuid::Uuid,
    pub url: String,
    pub caption: Option<String>,
    pub category: PhotoCategory,
    pub display_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::photo)]
pub struct NewPhoto {
    pub id: uuid::Uuid,
    pub url: String,
    pub caption: Option<String>,
    pub category: PhotoCategory,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::photo)]
pub struct PhotoChanges {
    pub url: Option<String>,
    pub caption: Option<Option<String>>,
    pub category: Option<PhotoCategory>,
    pub display_order: Option<i32>,
}
