use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::schema;

pub mod session;

/// Dashboard administrator. The password hash is not part of
/// this row; it is read through `query::user::password_hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::admin_user)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::admin_user)]
pub struct NewAdminUser<'a> {
    pub id: uuid::Uuid,
    pub username: &'a str,
    pub email: Option<&'a str>,
    pub display_name: Option<&'a str>,
    pub password_hash: &'a str,
}

/// Profile fields an admin may change about themselves.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::admin_user)]
pub struct AdminUserChanges {
    pub username: Option<String>,
    pub email: Option<Option<String>>,
    pub display_name: Option<Option<String>>,
}

/// Represents an authenticated admin or public access in the depot.
#[derive(Debug, Clone)]
pub enum DepotUser {
    /// Authenticated admin
    User(AdminUser),
    /// Unauthenticated/public access
    Public,
}
