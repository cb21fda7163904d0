//! Centroid id → metrics table and nearest-centroid search.

use std::collections::BTreeMap;

use bluck_catalog::{CentroidRecord, METRIC_DIMENSIONS, MovieMetrics};
use serde::Serialize;
use tracing::debug;

use crate::error::{MoodError, Result};

/// Per-dimension weights applied by [`CentroidCache::k_nearest_centroids_from_mood`].
pub const WEIGHTS: [f64; METRIC_DIMENSIONS] = [1.0; METRIC_DIMENSIONS];

/// A centroid id with its distance from a query mood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedCentroid {
    pub id: usize,
    pub distance: f64,
}

/// Cluster centroids, held in ascending id order.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CentroidCache {
    centroids: Vec<CentroidRecord>,
}

impl CentroidCache {
    /// An empty cache. Every lookup against it fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from scanned records. A repeated id keeps the last record.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CentroidRecord>,
    {
        let by_id: BTreeMap<usize, MovieMetrics> = records
            .into_iter()
            .map(|record| (record.id, record.metrics))
            .collect();

        Self {
            centroids: by_id
                .into_iter()
                .map(|(id, metrics)| CentroidRecord::new(id, metrics))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.centroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }

    /// Metrics of centroid `id`.
    ///
    /// Ids are expected to be dense in `[0, len)`; a missing id past the end
    /// is out of range, a gap inside it is not found.
    pub fn get_metrics_by_centroid(&self, id: usize) -> Result<MovieMetrics> {
        match self.centroids.binary_search_by_key(&id, |c| c.id) {
            Ok(index) => Ok(self.centroids[index].metrics),
            Err(_) if id >= self.len() => {
                debug!(id, count = self.len(), "centroid id out of range");
                Err(MoodError::CentroidOutOfRange {
                    id,
                    count: self.len(),
                })
            }
            Err(_) => {
                debug!(id, "centroid id missing from table");
                Err(MoodError::CentroidNotFound(id))
            }
        }
    }

    /// Every centroid ranked by weighted squared distance from `mood`.
    ///
    /// Equal distances keep ascending id order.
    pub fn rank_by_mood(&self, mood: &MovieMetrics) -> Vec<RankedCentroid> {
        let mut ranked: Vec<RankedCentroid> = self
            .centroids
            .iter()
            .map(|c| RankedCentroid {
                id: c.id,
                distance: mood.weighted_distance(&c.metrics, &WEIGHTS),
            })
            .collect();
        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        ranked
    }

    /// The `k` centroids nearest to `mood` with their distances, closest first.
    ///
    /// A `k` larger than the table returns every centroid.
    pub fn k_nearest_ranked(&self, mood: &MovieMetrics, k: i64) -> Result<Vec<RankedCentroid>> {
        if k <= 0 {
            return Err(MoodError::InvalidK(k));
        }
        let k = usize::try_from(k).unwrap_or(usize::MAX);

        let mut ranked = self.rank_by_mood(mood);
        ranked.truncate(k);
        Ok(ranked)
    }

    /// Ids of the `k` centroids nearest to `mood`, closest first.
    pub fn k_nearest_centroids_from_mood(&self, mood: &MovieMetrics, k: i64) -> Result<Vec<usize>> {
        Ok(self
            .k_nearest_ranked(mood, k)?
            .into_iter()
            .map(|c| c.id)
            .collect())
    }
}
