//! Breadth-first co-star traversal.

use rustc_hash::FxHashSet as HashSet;
use serde::Serialize;

use super::types::MovieGraph;

/// Visited sets shared across one or more BFS runs.
///
/// Passing the same value to several [`MovieGraph::bfs`] calls merges their
/// results; a star, title or director is never recorded twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Discovered {
    pub stars: HashSet<String>,
    pub movie_titles: HashSet<String>,
    pub directors: HashSet<String>,
}

impl Discovered {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty() && self.movie_titles.is_empty() && self.directors.is_empty()
    }

    /// Sorted copies of the three sets, for stable output.
    pub fn sorted(&self) -> (Vec<String>, Vec<String>, Vec<String>) {
        (
            sorted(&self.stars),
            sorted(&self.movie_titles),
            sorted(&self.directors),
        )
    }
}

fn sorted(set: &HashSet<String>) -> Vec<String> {
    let mut items: Vec<String> = set.iter().cloned().collect();
    items.sort();
    items
}

impl MovieGraph {
    /// Expand outward from `start` over the co-appears-in-a-movie relation.
    ///
    /// Each round visits the current frontier: an unvisited star is marked,
    /// every movie they starred in marks its director, and a movie whose title
    /// is new pushes its unvisited cast onto the next frontier. Runs at most
    /// `max_depth` rounds and stops early once the frontier is empty, so cycles
    /// in the co-star relation cannot loop.
    pub fn bfs(&self, start: &str, found: &mut Discovered, max_depth: usize) {
        let mut frontier = vec![start.to_string()];
        let mut depth = 0;

        while !frontier.is_empty() && depth < max_depth {
            depth += 1;
            let mut next = Vec::new();

            for star in frontier {
                if found.stars.contains(&star) {
                    continue;
                }

                for movie in self.starred_in.get(&star).into_iter().flatten() {
                    if !found.directors.contains(&movie.director) {
                        found.directors.insert(movie.director.clone());
                    }
                    if !found.movie_titles.insert(movie.title.clone()) {
                        continue;
                    }
                    next.extend(
                        movie
                            .cast
                            .iter()
                            .filter(|co_star| **co_star != star && !found.stars.contains(*co_star))
                            .cloned(),
                    );
                }

                found.stars.insert(star);
            }

            frontier = next;
        }
    }
}
