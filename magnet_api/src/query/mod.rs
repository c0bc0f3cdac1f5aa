mod common;
pub use self::common::{Query, DEFAULT_LIST_LIMIT};

mod list;
pub use self::list::ListQuery;

mod search;
pub use self::search::SearchQuery;
