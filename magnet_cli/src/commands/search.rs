use anyhow::Result;
use clap::Args;
use magnet_lib::{MagnetClient, SearchQuery};

use crate::output::print_json;

#[derive(Args)]
pub struct SearchArgs {
    /// Search text
    pub query: String,

    /// Comma-separated types: issue, page (default: both)
    #[arg(long)]
    pub types: Option<String>,
}

pub async fn run(args: &SearchArgs, client: &MagnetClient) -> Result<()> {
    let mut query = SearchQuery::new(&args.query);
    if let Some(types) = &args.types {
        query = query.with_types(types);
    }
    let resp = client.search(&query).await?;
    print_json(&resp)
}
