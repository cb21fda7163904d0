//! Bacon command implementation.

use bluck_graph::{KevinBaconQuery, kevin_bacon};
use tracing::debug;

use crate::cli::BaconArgs;
use crate::commands::Output;
use crate::context::ServiceContext;
use crate::error::Result;

impl From<&BaconArgs> for KevinBaconQuery {
    fn from(args: &BaconArgs) -> Self {
        KevinBaconQuery {
            star: args.star.clone(),
            title: args.title.clone(),
            director: args.director.clone(),
            depth: args.depth,
        }
    }
}

/// Execute the bacon command, printing the full [`KevinBaconReport`](bluck_graph::KevinBaconReport).
pub async fn execute(args: &BaconArgs, ctx: &ServiceContext, strict: bool) -> Result<Output> {
    let loaded = ctx.graph_checked(strict).await?;
    let query = KevinBaconQuery::from(args);
    debug!(?query, "kevin bacon search");

    let report = kevin_bacon(loaded.graph().as_ref(), &query, ctx.search_limits())?;
    Output::json(&report)
}
