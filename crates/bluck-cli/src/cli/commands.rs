use clap::{ArgGroup, Args, Subcommand};

use bluck_catalog::MovieMetrics;

/// Available bluck subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Kevin Bacon search
    ///
    /// Seeds a breadth-first co-star search with the given star, the cast of
    /// the given movie and every actor the given director worked with.
    Bacon(BaconArgs),

    /// Look up a director, star or movie title
    Lookup(LookupArgs),

    /// Find the centroids closest to a mood
    ///
    /// Unset dimensions count as 0.
    Mood(MoodArgs),

    /// Print graph and centroid totals
    Stats,

    /// Print the effective configuration as TOML
    Config,
}

/// Arguments for the bacon command
#[derive(Args, Debug, Default)]
pub struct BaconArgs {
    /// Start from this actor
    #[arg(long)]
    pub star: Option<String>,

    /// Start from the cast of this movie
    #[arg(long)]
    pub title: Option<String>,

    /// Start from every actor this director cast
    #[arg(long)]
    pub director: Option<String>,

    /// Search rounds (defaults to search.default_depth, capped at search.max_depth)
    #[arg(short, long)]
    pub depth: Option<usize>,
}

/// Arguments for the lookup command
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("key").required(true).args(["director", "star", "title"])))]
pub struct LookupArgs {
    /// Movies and actors of a director
    #[arg(long)]
    pub director: Option<String>,

    /// Movies and co-stars of an actor
    #[arg(long)]
    pub star: Option<String>,

    /// The movie with this exact title
    #[arg(long)]
    pub title: Option<String>,
}

/// Arguments for the mood command
#[derive(Args, Debug, Default)]
pub struct MoodArgs {
    #[arg(long)]
    pub acting: Option<f64>,
    #[arg(long)]
    pub action: Option<f64>,
    #[arg(long)]
    pub cinematography: Option<f64>,
    #[arg(long)]
    pub comedy: Option<f64>,
    #[arg(long)]
    pub directing: Option<f64>,
    #[arg(long)]
    pub drama: Option<f64>,
    #[arg(long)]
    pub fantasy: Option<f64>,
    #[arg(long)]
    pub horror: Option<f64>,
    #[arg(long)]
    pub romance: Option<f64>,
    #[arg(long)]
    pub story_telling: Option<f64>,
    #[arg(long)]
    pub suspense: Option<f64>,
    #[arg(long)]
    pub writing: Option<f64>,

    /// Number of centroids to return (defaults to mood.default_k)
    #[arg(short, long, allow_negative_numbers = true)]
    pub k: Option<i64>,
}

impl MoodArgs {
    /// The query vector.
    pub fn metrics(&self) -> MovieMetrics {
        let dims = [
            self.acting,
            self.action,
            self.cinematography,
            self.comedy,
            self.directing,
            self.drama,
            self.fantasy,
            self.horror,
            self.romance,
            self.story_telling,
            self.suspense,
            self.writing,
        ];
        let mut mood = MovieMetrics::default();
        for (dimension, value) in MovieMetrics::DIMENSIONS.iter().zip(dims) {
            if let Some(value) = value {
                mood.set(dimension, value);
            }
        }
        mood
    }
}
