//! Mood command implementation.

use serde::Serialize;

use bluck_catalog::MovieMetrics;
use bluck_mood::RankedCentroid;

use crate::cli::MoodArgs;
use crate::commands::Output;
use crate::context::ServiceContext;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct MoodMatch {
    id: usize,
    distance: f64,
    movies: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

#[derive(Debug, Serialize)]
struct MoodReport {
    mood: MovieMetrics,
    k: i64,
    centroids: Vec<MoodMatch>,
}

/// Execute the mood command.
///
/// Each returned centroid carries one randomly suggested member movie when
/// the catalog has any.
pub async fn execute(args: &MoodArgs, ctx: &ServiceContext) -> Result<Output> {
    let mood = args.metrics();
    let k = args
        .k
        .unwrap_or_else(|| i64::try_from(ctx.config().mood.default_k).unwrap_or(i64::MAX));

    let cache = ctx.centroids().await;
    let index = ctx.centroid_movies().await;

    let mut centroids = Vec::new();
    for RankedCentroid { id, distance } in cache.k_nearest_ranked(&mood, k)? {
        let movies = index.movie_ids_for_centroid(id).map_or(0, <[String]>::len);
        let suggestion = index
            .random_movie_from_centroid(id)
            .ok()
            .map(str::to_string);

        centroids.push(MoodMatch {
            id,
            distance,
            movies,
            suggestion,
        });
    }

    Output::json(&MoodReport { mood, k, centroids })
}
