//! Queries for `wedding_party_member`.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt;

use crate::db::connection::DbConnection;
use crate::db::schema::wedding_party_member;
use crate::db::transaction::with_transaction;
use crate::error::DbResult;
use crate::model::party::{NewWeddingPartyMember, WeddingPartyMember, WeddingPartyMemberChanges};

type BoxedQuery<'a> = wedding_party_member::BoxedQuery<'a, diesel::pg::Pg>;

#[must_use]
pub fn all() -> BoxedQuery<'static> {
    wedding_party_member::table
        .order((
            wedding_party_member::display_order.asc(),
            wedding_party_member::created_at.asc(),
        ))
        .into_boxed()
}

#[must_use]
pub fn by_id(id: uuid::Uuid) -> BoxedQuery<'static> {
    wedding_party_member::table
        .filter(wedding_party_member::id.eq(id))
        .into_boxed()
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn list(conn: &mut DbConnection<'_>) -> QueryResult<Vec<WeddingPartyMember>> {
    all()
        .select(WeddingPartyMember::as_select())
        .load(conn)
        .await
}

/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn get(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> QueryResult<Option<WeddingPartyMember>> {
    by_id(id)
        .select(WeddingPartyMember::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the insert fails.
#[tracing::instrument(skip(conn, new_member), fields(member_id = %new_member.id))]
pub async fn create(
    conn: &mut DbConnection<'_>,
    new_member: &NewWeddingPartyMember,
) -> QueryResult<WeddingPartyMember> {
    diesel::insert_into(wedding_party_member::table)
        .values(new_member)
        .returning(WeddingPartyMember::as_returning())
        .get_result(conn)
        .await
}

/// ## Errors
/// Returns a database error if the update fails.
#[tracing::instrument(skip(conn, changes))]
pub async fn update(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    changes: &WeddingPartyMemberChanges,
) -> QueryResult<Option<WeddingPartyMember>> {
    diesel::update(wedding_party_member::table.find(id))
        .set((
            changes,
            wedding_party_member::updated_at.eq(chrono::Utc::now()),
        ))
        .returning(WeddingPartyMember::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn delete(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<usize> {
    diesel::delete(wedding_party_member::table.find(id))
        .execute(conn)
        .await
}

/// ## Summary
/// Sets `display_order` to each id's position in `ids`, in one transaction.
///
/// ## Errors
/// Returns a database error if any update fails.
#[tracing::instrument(skip(conn, ids), fields(count = ids.len()))]
pub async fn reorder(conn: &mut DbConnection<'_>, ids: &[uuid::Uuid]) -> DbResult<usize> {
    let ids = ids.to_vec();
    with_transaction(conn, |tx| {
        async move {
            let now = chrono::Utc::now();
            let mut updated = 0;
            for (position, id) in (0_i32..).zip(ids.iter()) {
                updated += diesel::update(wedding_party_member::table.find(*id))
                    .set((
                        wedding_party_member::display_order.eq(position),
                        wedding_party_member::updated_at.eq(now),
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
