use std::sync::Arc;

use bluck_catalog::{JsonCatalog, PageKeys};
use bluck_graph::{GraphError, GraphInitializer, KevinBaconQuery, SearchLimits, kevin_bacon};
use tempfile::TempDir;

const CATALOG: &str = r#"{
  "A": [
    {"id": "10", "title": "Apollo 13", "director": "Ron Howard",
     "cast": ["Tom Hanks", "Kevin Bacon", "Bill Paxton"]}
  ],
  "F": [
    {"id": "20", "title": "Footloose", "director": "Herbert Ross",
     "cast": ["Kevin Bacon", "Lori Singer"], "year": "1984", "centroid": 2}
  ],
  "T": [
    {"id": "30", "title": "Twister", "director": "Jan de Bont",
     "cast": ["Helen Hunt", "Bill Paxton"]}
  ]
}"#;

fn write_catalog(dir: &TempDir) -> JsonCatalog {
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, CATALOG).unwrap();
    JsonCatalog::new(path)
}

#[tokio::test]
async fn graph_from_json_catalog() {
    let dir = TempDir::new().unwrap();
    let init = GraphInitializer::new(
        Arc::new(write_catalog(&dir)),
        PageKeys::from_chars("AFT"),
    );

    let graph = init.get().await.clone().into_result().unwrap();
    assert_eq!(graph.total_movies(), 3);
    assert_eq!(graph.movie_from_title("Footloose").unwrap().centroid, 2);

    let report = kevin_bacon(
        &*graph,
        &KevinBaconQuery::star("Lori Singer").with_depth(3),
        SearchLimits::default(),
    )
    .unwrap();
    assert_eq!(
        report.stars,
        vec!["Bill Paxton", "Kevin Bacon", "Lori Singer", "Tom Hanks"]
    );
    assert_eq!(
        report.directors,
        vec!["Herbert Ross", "Jan de Bont", "Ron Howard"]
    );
}

#[tokio::test]
async fn missing_pages_are_reported_but_not_fatal() {
    let dir = TempDir::new().unwrap();
    // "#" is not in the file
    let init = GraphInitializer::new(
        Arc::new(write_catalog(&dir)),
        PageKeys::from_chars("AF#"),
    );

    let loaded = init.get().await;
    assert_eq!(loaded.graph().total_movies(), 2);
    match loaded.error() {
        Some(GraphError::PartialBuild(failure)) => {
            assert_eq!(failure.len(), 1);
            assert_eq!(failure.failed_pages().next(), Some("#"));
        }
        other => panic!("expected partial build, got {other:?}"),
    }
}

#[tokio::test]
async fn unreadable_catalog_fails_every_page() {
    let dir = TempDir::new().unwrap();
    let init = GraphInitializer::new(
        Arc::new(JsonCatalog::new(dir.path().join("absent.json"))),
        PageKeys::from_chars("AB"),
    );

    let loaded = init.get().await;
    assert!(loaded.graph().is_empty());
    let err = loaded.error().unwrap().to_string();
    assert!(err.contains("2 page(s) failed"), "{err}");
}
