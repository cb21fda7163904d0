//! Movie and metrics records as stored in the catalog.

use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// Only `id`, `title`, `director` and `cast` matter to the relationship graph;
/// the rest is catalog metadata carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cast: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub director: String,
    #[serde(default)]
    pub inventory: u32,
    #[serde(default)]
    pub rented: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rating: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub review: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub synopsis: String,
    #[serde(default)]
    pub metrics: MovieMetrics,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub trivia: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub year: String,
    #[serde(default)]
    pub centroid: usize,
}

impl Movie {
    /// Create a movie with the fields the graph cares about.
    pub fn new<I, S>(
        id: impl Into<String>,
        title: impl Into<String>,
        director: impl Into<String>,
        cast: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            director: director.into(),
            cast: cast.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the centroid this movie was clustered into.
    pub fn with_centroid(mut self, centroid: usize) -> Self {
        self.centroid = centroid;
        self
    }

    /// Set the mood metrics of this movie.
    pub fn with_metrics(mut self, metrics: MovieMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

/// Number of mood dimensions in [`MovieMetrics`].
pub const METRIC_DIMENSIONS: usize = 12;

/// Mood scores of a movie (or of a cluster centroid).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieMetrics {
    pub acting: f64,
    pub action: f64,
    pub cinematography: f64,
    pub comedy: f64,
    pub directing: f64,
    pub drama: f64,
    pub fantasy: f64,
    pub horror: f64,
    pub romance: f64,
    pub story_telling: f64,
    pub suspense: f64,
    pub writing: f64,
}

impl MovieMetrics {
    /// Dimension names, in the order used by [`MovieMetrics::values`].
    pub const DIMENSIONS: [&'static str; METRIC_DIMENSIONS] = [
        "acting",
        "action",
        "cinematography",
        "comedy",
        "directing",
        "drama",
        "fantasy",
        "horror",
        "romance",
        "story_telling",
        "suspense",
        "writing",
    ];

    pub fn values(&self) -> [f64; METRIC_DIMENSIONS] {
        [
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
        ]
    }

    pub fn from_values(v: [f64; METRIC_DIMENSIONS]) -> Self {
        Self {
            acting: v[0],
            action: v[1],
            cinematography: v[2],
            comedy: v[3],
            directing: v[4],
            drama: v[5],
            fantasy: v[6],
            horror: v[7],
            romance: v[8],
            story_telling: v[9],
            suspense: v[10],
            writing: v[11],
        }
    }

    /// Set a dimension by name. Returns `false` for an unknown name.
    pub fn set(&mut self, dimension: &str, value: f64) -> bool {
        let Some(index) = Self::DIMENSIONS.iter().position(|d| *d == dimension) else {
            return false;
        };
        let mut values = self.values();
        values[index] = value;
        *self = Self::from_values(values);
        true
    }

    /// `self + other * weight`, dimension by dimension.
    ///
    /// Used to fold a member's rental history into a single mood vector.
    pub fn accumulate_weighted(&self, other: &MovieMetrics, weight: u32) -> MovieMetrics {
        let weight = f64::from(weight);
        let (a, b) = (self.values(), other.values());
        Self::from_values(std::array::from_fn(|i| a[i] + b[i] * weight))
    }

    /// Divide every dimension by `count`. A count of 0 or 1 returns `self`.
    pub fn average(&self, count: u32) -> MovieMetrics {
        if count <= 1 {
            return *self;
        }
        let count = f64::from(count);
        Self::from_values(self.values().map(|v| v / count))
    }

    /// Squared distance with a per-dimension weight.
    pub fn weighted_distance(&self, other: &MovieMetrics, weights: &[f64; METRIC_DIMENSIONS]) -> f64 {
        let (a, b) = (self.values(), other.values());
        (0..METRIC_DIMENSIONS)
            .map(|i| {
                let d = a[i] - b[i];
                weights[i] * d * d
            })
            .sum()
    }

    /// Squared Euclidean distance over all twelve dimensions.
    pub fn distance(&self, other: &MovieMetrics) -> f64 {
        self.weighted_distance(other, &[1.0; METRIC_DIMENSIONS])
    }
}

/// A cluster centroid as stored in the centroid table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentroidRecord {
    pub id: usize,
    #[serde(flatten)]
    pub metrics: MovieMetrics,
}

impl CentroidRecord {
    pub fn new(id: usize, metrics: MovieMetrics) -> Self {
        Self { id, metrics }
    }
}
