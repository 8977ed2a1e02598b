//! Queries for `popup`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::enums::PopupKind;
use crate::db::schema::popup;
use crate::model::popup::{NewPopup, Popup, PopupChanges};

type BoxedQuery<'a> = popup::BoxedQuery<'a, diesel::pg::Pg>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopupFilter {
    pub active_only: bool,
}

/// ## Summary
/// Returns a query over all popups, most recent first.
#[must_use]
pub fn all() -> BoxedQuery<'static> {
    popup::table.order(popup::created_at.desc()).into_boxed()
}

#[must_use]
pub fn by_id(id: uuid::Uuid) -> BoxedQuery<'static> {
    popup::table.filter(popup::id.eq(id)).into_boxed()
}

#[must_use]
pub fn by_kind(kind: PopupKind) -> BoxedQuery<'static> {
    popup::table.filter(popup::kind.eq(kind)).into_boxed()
}

#[must_use]
pub fn filtered(filter: PopupFilter) -> BoxedQuery<'static> {
    let query = all();
    if filter.active_only {
        query.filter(popup::is_active.eq(true))
    } else {
        query
    }
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list(conn: &mut DbConnection<'_>, filter: PopupFilter) -> QueryResult<Vec<Popup>> {
    filtered(filter).select(Popup::as_select()).load(conn).await
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<Option<Popup>> {
    by_id(id)
        .select(Popup::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Looks up the popup shown for `kind`. The unique constraint on `kind`
/// guarantees at most one match.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get_by_kind(
    conn: &mut DbConnection<'_>,
    kind: PopupKind,
) -> QueryResult<Option<Popup>> {
    by_kind(kind)
        .select(Popup::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns `UniqueViolation` if a popup of the same kind exists.
#[tracing::instrument(skip(conn, new_popup), fields(kind = %new_popup.kind))]
pub async fn create(conn: &mut DbConnection<'_>, new_popup: &NewPopup) -> QueryResult<Popup> {
    diesel::insert_into(popup::table)
        .values(new_popup)
        .returning(Popup::as_returning())
        .get_result(conn)
        .await
}

/// ## Errors
/// Returns `UniqueViolation` if `kind` is changed to one already taken.
#[tracing::instrument(skip(conn, changes))]
pub async fn update(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    changes: &PopupChanges,
) -> QueryResult<Option<Popup>> {
    diesel::update(popup::table.find(id))
        .set((changes, popup::updated_at.eq(chrono::Utc::now())))
        .returning(Popup::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn delete(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<usize> {
    diesel::delete(popup::table.find(id)).execute(conn).await
}
