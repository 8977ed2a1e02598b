use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::schema;

/// A guest's attendance reply.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::rsvp)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: uuid::Uuid,
    pub guest_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub attending: bool,
    pub guest_count: i32,
    pub meal_preference: Option<String>,
    pub special_requirements: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::rsvp)]
pub struct NewRsvp {
    pub id: uuid::Uuid,
    pub guest_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub attending: bool,
    pub guest_count: i32,
    pub meal_preference: Option<String>,
    pub special_requirements: Option<String>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::rsvp)]
pub struct RsvpChanges {
    pub guest_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub attending: Option<bool>,
    pub guest_count: Option<i32>,
    pub meal_preference: Option<Option<String>>,
    pub special_requirements: Option<Option<String>>,
}
