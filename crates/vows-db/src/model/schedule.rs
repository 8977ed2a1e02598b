use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::{enums::ScheduleIcon, schema};

/// One entry of the wedding-day timeline.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::schedule_event)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: uuid::Uuid,
    pub title: String,
    pub description: Option<String>,
    pub event_time: chrono::DateTime<chrono::Utc>,
    pub location: Option<String>,
    pub icon: Option<ScheduleIcon>,
    pub display_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::schedule_event)]
pub struct NewScheduleEvent {
    pub id: uuid::Uuid,
    pub title: String,
    pub description: Option<String>,
    pub event_time: chrono::DateTime<chrono::Utc>,
    pub location: Option<String>,
    pub icon: Option<ScheduleIcon>,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::schedule_event)]
pub struct ScheduleEventChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub event_time: Option<chrono::DateTime<chrono::Utc>>,
    pub location: Option<Option<String>>,
    pub icon: Option<Option<ScheduleIcon>>,
    pub display_order: Option<i32>,
}
