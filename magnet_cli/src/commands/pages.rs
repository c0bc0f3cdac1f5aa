use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Subcommand};
use magnet_lib::types::CreatePageRequest;
use magnet_lib::MagnetClient;

use crate::output::print_json;

#[derive(Args)]
pub struct PagesArgs {
    #[command(subcommand)]
    pub command: PagesCommand,
}

#[derive(Subcommand)]
pub enum PagesCommand {
    /// List pages
    List(ListArgs),
    /// Get a page by ID
    Get(GetArgs),
    /// Create a page from markdown
    Create(CreateArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Search query
    #[arg(long)]
    pub search: Option<String>,

    /// Page size (default from API). Use with --cursor for pagination.
    #[arg(long)]
    pub limit: Option<i64>,

    /// Pagination cursor (use pagination.nextCursor from previous response)
    #[arg(long)]
    pub cursor: Option<String>,
}

#[derive(Args)]
pub struct GetArgs {
    /// Page ID
    pub id: String,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Page title
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub title: String,

    /// Page content (markdown); defaults to the title
    #[arg(long)]
    pub markdown: Option<String>,
}

pub async fn run(args: &PagesArgs, client: &MagnetClient) -> Result<()> {
    match &args.command {
        PagesCommand::List(list) => {
            let query = super::list_query(
                list.search.as_deref(),
                list.limit,
                list.cursor.as_deref(),
            );
            let resp = client.list_pages(&query).await?;
            print_json(&resp)
        }
        PagesCommand::Get(get) => {
            let page = client.get_page(&get.id).await?;
            print_json(&page)
        }
        PagesCommand::Create(create) => {
            let req = CreatePageRequest::new(&create.title, create.markdown.as_deref());
            let created = client.create_page(&req).await?;
            print_json(&created)
        }
    }
}
