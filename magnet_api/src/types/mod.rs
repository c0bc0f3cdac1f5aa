mod meta;
pub use self::meta::{CreatedResource, Envelope, Pagination, User};

mod issue;
pub use self::issue::{
    CreateIssueRequest, IssueDetail, IssueEnvelope, IssueListItem, ListIssuesResponse,
};

mod page;
pub use self::page::{CreatePageRequest, ListPagesResponse, PageDetail, PageEnvelope, PageListItem};

mod search;
pub use self::search::{ResultType, SearchResponse, SearchResult};
