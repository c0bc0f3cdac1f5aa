use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Subcommand};
use magnet_lib::types::CreateIssueRequest;
use magnet_lib::MagnetClient;

use crate::output::print_json;

#[derive(Args)]
pub struct IssuesArgs {
    #[command(subcommand)]
    pub command: IssuesCommand,
}

#[derive(Subcommand)]
pub enum IssuesCommand {
    /// List issues
    List(ListArgs),
    /// Get an issue by ID
    Get(GetArgs),
    /// Create an issue from markdown
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
    /// Issue ID
    pub id: String,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Issue description (markdown)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub description: String,

    /// Issue title
    #[arg(long)]
    pub title: Option<String>,

    /// Base branch name
    #[arg(long, default_value = "main")]
    pub base_branch: String,
}

pub async fn run(args: &IssuesArgs, client: &MagnetClient) -> Result<()> {
    match &args.command {
        IssuesCommand::List(list) => {
            let query = super::list_query(
                list.search.as_deref(),
                list.limit,
                list.cursor.as_deref(),
            );
            let resp = client.list_issues(&query).await?;
            print_json(&resp)
        }
        IssuesCommand::Get(get) => {
            let issue = client.get_issue(&get.id).await?;
            print_json(&issue)
        }
        IssuesCommand::Create(create) => {
            let mut req =
                CreateIssueRequest::from_markdown(&create.description, &create.base_branch);
            if let Some(title) = create.title.as_deref().filter(|t| !t.is_empty()) {
                req = req.with_title(title);
            }
            let created = client.create_issue(&req).await?;
            print_json(&created)
        }
    }
}
