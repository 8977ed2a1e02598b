use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// Server-side login session. `token_hash` is the SHA-256 digest of the
/// cookie value; the raw token is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = schema::session)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(crate::model::user::AdminUser, foreign_key = user_id))]
pub struct Session {
    pub id: uuid::Uuid,
    pub token_hash: String,
    pub user_id: uuid::Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::session)]
pub struct NewSession<'a> {
    pub id: uuid::Uuid,
    pub token_hash: &'a str,
    pub user_id: uuid::Uuid,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
