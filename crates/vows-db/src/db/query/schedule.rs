//! Queries for `schedule_event`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt;

use crate::db::connection::DbConnection;
use crate::db::schema::schedule_event;
use crate::db::transaction::with_transaction;
use crate::error::DbResult;
use crate::model::schedule::{NewScheduleEvent, ScheduleEvent, ScheduleEventChanges};

type BoxedQuery<'a> = schedule_event::BoxedQuery<'a, diesel::pg::Pg>;

/// ## Summary
/// Returns a query over all events in timeline order.
#[must_use]
pub fn all() -> BoxedQuery<'static> {
    schedule_event::table
        .order((
            schedule_event::display_order.asc(),
            schedule_event::created_at.asc(),
        ))
        .into_boxed()
}

#[must_use]
pub fn by_id(id: uuid::Uuid) -> BoxedQuery<'static> {
    schedule_event::table
        .filter(schedule_event::id.eq(id))
        .into_boxed()
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list(conn: &mut DbConnection<'_>) -> QueryResult<Vec<ScheduleEvent>> {
    all().select(ScheduleEvent::as_select()).load(conn).await
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> QueryResult<Option<ScheduleEvent>> {
    by_id(id)
        .select(ScheduleEvent::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the insert fails.
#[tracing::instrument(skip(conn, new_event), fields(event_id = %new_event.id))]
pub async fn create(
    conn: &mut DbConnection<'_>,
    new_event: &NewScheduleEvent,
) -> QueryResult<ScheduleEvent> {
    diesel::insert_into(schedule_event::table)
        .values(new_event)
        .returning(ScheduleEvent::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Applies the supplied fields and bumps `updated_at`.
///
/// Returns `None` if no event has this id.
///
/// ## Errors
/// Returns a database error if the update fails.
#[tracing::instrument(skip(conn, changes))]
pub async fn update(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    changes: &ScheduleEventChanges,
) -> QueryResult<Option<ScheduleEvent>> {
    diesel::update(schedule_event::table.find(id))
        .set((changes, schedule_event::updated_at.eq(chrono::Utc::now())))
        .returning(ScheduleEvent::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Deletes the event and returns the number of rows removed (0 or 1).
///
/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn delete(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<usize> {
    diesel::delete(schedule_event::table.find(id))
        .execute(conn)
        .await
}

/// ## Summary
/// Sets `display_order` to each id's position in `ids`, in one transaction.
///
/// Unknown ids are skipped. Returns the number of rows updated.
///
/// ## Errors
/// Returns a database error if any update fails; no order is changed then.
#[tracing::instrument(skip(conn, ids), fields(count = ids.len()))]
pub async fn reorder(conn: &mut DbConnection<'_>, ids: &[uuid::Uuid]) -> DbResult<usize> {
    let ids = ids.to_vec();
    with_transaction(conn, |tx| {
        async move {
            let now = chrono::Utc::now();
            let mut updated = 0;
            for (position, id) in (0_i32..).zip(ids.iter()) {
                updated += diesel::update(schedule_event::table.find(*id))
                    .set((
                        schedule_event::display_order.eq(position),
                        schedule_event::updated_at.eq(now),
                    ))
                    .execute(tx)
                    .await?;
            }
            Ok(updated)
        }
        .scope_boxed()
    })
    .await
}
