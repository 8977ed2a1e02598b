//! Queries for `guest_message`.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::guest_message;
use crate::model::message::{GuestMessage, NewGuestMessage};

type BoxedQuery<'a> = guest_message::BoxedQuery<'a, diesel::pg::Pg>;

/// List filter for guestbook messages. Bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageFilter {
    pub approved: Option<bool>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// ## Summary
/// Returns a query over all messages, most recent first.
#[must_use]
pub fn all() -> BoxedQuery<'static> {
    guest_message::table
        .order(guest_message::created_at.desc())
        .into_boxed()
}

#[must_use]
pub fn by_id(id: uuid::Uuid) -> BoxedQuery<'static> {
    guest_message::table
        .filter(guest_message::id.eq(id))
        .into_boxed()
}

#[must_use]
pub fn filtered(filter: MessageFilter) -> BoxedQuery<'static> {
    let mut query = all();
    if let Some(approved) = filter.approved {
        query = query.filter(guest_message::approved.eq(approved));
    }
    if let Some(from) = filter.from {
        query = query.filter(guest_message::created_at.ge(from));
    }
    if let Some(to) = filter.to {
        query = query.filter(guest_message::created_at.le(to));
    }
    query
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list(
    conn: &mut DbConnection<'_>,
    filter: MessageFilter,
) -> QueryResult<Vec<GuestMessage>> {
    filtered(filter)
        .select(GuestMessage::as_select())
        .load(conn)
        .await
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> QueryResult<Option<GuestMessage>> {
    by_id(id)
        .select(GuestMessage::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn count_pending(conn: &mut DbConnection<'_>) -> QueryResult<i64> {
    guest_message::table
        .filter(guest_message::approved.eq(false))
        .count()
        .get_result(conn)
        .await
}

/// ## Errors
/// Returns a database error if the insert fails.
#[tracing::instrument(skip(conn, new_message), fields(message_id = %new_message.id))]
pub async fn create(
    conn: &mut DbConnection<'_>,
    new_message: &NewGuestMessage,
) -> QueryResult<GuestMessage> {
    diesel::insert_into(guest_message::table)
        .values(new_message)
        .returning(GuestMessage::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Sets the approval flag. Only `approved` and `updated_at` change.
///
/// ## Errors
/// Returns a database error if the update fails.
#[tracing::instrument(skip(conn))]
pub async fn set_approved(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    approved: bool,
) -> QueryResult<Option<GuestMessage>> {
    diesel::update(guest_message::table.find(id))
        .set((
            guest_message::approved.eq(approved),
            guest_message::updated_at.eq(Utc::now()),
        ))
        .returning(GuestMessage::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn delete(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<usize> {
    diesel::delete(guest_message::table.find(id))
        .execute(conn)
        .await
}
