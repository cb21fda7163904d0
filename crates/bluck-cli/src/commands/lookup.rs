//! Lookup command implementation.

use serde_json::json;

use crate::cli::LookupArgs;
use crate::commands::Output;
use crate::context::ServiceContext;
use crate::error::Result;

pub async fn execute(args: &LookupArgs, ctx: &ServiceContext, strict: bool) -> Result<Output> {
    let graph = ctx.graph_checked(strict).await?.graph();

    let value = if let Some(director) = &args.director {
        json!({
            "director": director,
            "movies": graph.directed_movies(director),
            "actors": graph.directed_actors(director),
        })
    } else if let Some(star) = &args.star {
        let mut co_stars = graph.starred_with(star);
        co_stars.sort();
        json!({
            "star": star,
            "movies": graph.starred_in(star),
            "co_stars": co_stars,
        })
    } else if let Some(title) = &args.title {
        serde_json::to_value(graph.movie_from_title(title)?)?
    } else {
        // clap requires one of the three
        json!(null)
    };

    Ok(Output::Json(value))
}
