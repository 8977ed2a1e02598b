use diesel::query_builder::QueryFragment;

/// Renders a query to its SQL text so tests can assert on clauses.
pub fn sql<Q>(query: &Q) -> String
where
    Q: QueryFragment<diesel::pg::Pg>,
{
    diesel::debug_query::<diesel::pg::Pg, _>(query).to_string()
}
