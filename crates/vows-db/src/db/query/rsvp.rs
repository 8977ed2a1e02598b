//! Queries for `rsvp`.

use chrono::{DateTime, Utc};
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::rsvp;
use crate::model::rsvp::{NewRsvp, Rsvp, RsvpChanges};

type BoxedQuery<'a> = rsvp::BoxedQuery<'a, diesel::pg::Pg>;

/// Admin list filter for replies. Date bounds apply to `created_at` and are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsvpFilter {
    pub attending: Option<bool>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Aggregate reply counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsvpTotals {
    pub attending: i64,
    pub declining: i64,
    pub total_guests: i64,
}

#[must_use]
pub fn all() -> BoxedQuery<'static> {
    rsvp::table.order(rsvp::created_at.desc()).into_boxed()
}

#[must_use]
pub fn by_id(id: uuid::Uuid) -> BoxedQuery<'static> {
    rsvp::table.filter(rsvp::id.eq(id)).into_boxed()
}

#[must_use]
pub fn filtered(filter: RsvpFilter) -> BoxedQuery<'static> {
    let mut query = all();
    if let Some(attending) = filter.attending {
        query = query.filter(rsvp::attending.eq(attending));
    }
    if let Some(from) = filter.from {
        query = query.filter(rsvp::created_at.ge(from));
    }
    if let Some(to) = filter.to {
        query = query.filter(rsvp::created_at.le(to));
    }
    query
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list(conn: &mut DbConnection<'_>, filter: RsvpFilter) -> QueryResult<Vec<Rsvp>> {
    filtered(filter).select(Rsvp::as_select()).load(conn).await
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<Option<Rsvp>> {
    by_id(id)
        .select(Rsvp::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Counts attending and declining replies and sums the guests of attending ones.
///
/// ## Errors
/// Returns a database error if a query fails.
#[tracing::instrument(skip(conn))]
pub async fn totals(conn: &mut DbConnection<'_>) -> QueryResult<RsvpTotals> {
    let attending: i64 = rsvp::table
        .filter(rsvp::attending.eq(true))
        .count()
        .get_result(conn)
        .await?;
    let declining: i64 = rsvp::table
        .filter(rsvp::attending.eq(false))
        .count()
        .get_result(conn)
        .await?;
    let total_guests: Option<i64> = rsvp::table
        .filter(rsvp::attending.eq(true))
        .select(sum(rsvp::guest_count))
        .get_result(conn)
        .await?;

    Ok(RsvpTotals {
        attending,
        declining,
        total_guests: total_guests.unwrap_or(0),
    })
}

/// ## Errors
/// Returns a database error if the insert fails.
#[tracing::instrument(skip(conn, new_rsvp), fields(rsvp_id = %new_rsvp.id))]
pub async fn create(conn: &mut DbConnection<'_>, new_rsvp: &NewRsvp) -> QueryResult<Rsvp> {
    diesel::insert_into(rsvp::table)
        .values(new_rsvp)
        .returning(Rsvp::as_returning())
        .get_result(conn)
        .await
}

/// ## Errors
/// Returns a database error if the update fails.
#[tracing::instrument(skip(conn, changes))]
pub async fn update(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    changes: &RsvpChanges,
) -> QueryResult<Option<Rsvp>> {
    diesel::update(rsvp::table.find(id))
        .set((changes, rsvp::updated_at.eq(Utc::now())))
        .returning(Rsvp::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn delete(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<usize> {
    diesel::delete(rsvp::table.find(id)).execute(conn).await
}
