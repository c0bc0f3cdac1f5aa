//! CLI subcommand implementations.

pub mod issues;
pub mod pages;
pub mod search;

use magnet_lib::ListQuery;

/// Builds the list query shared by `issues list` and `pages list`.
pub(crate) fn list_query(
    search: Option<&str>,
    limit: Option<i64>,
    cursor: Option<&str>,
) -> ListQuery {
    let mut query = ListQuery::default();
    if let Some(search) = search {
        query = query.with_search(search);
    }
    if let Some(limit) = limit {
        query = query.with_limit(limit);
    }
    if let Some(cursor) = cursor {
        query = query.with_cursor(cursor);
    }
    query
}
