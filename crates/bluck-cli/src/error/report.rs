//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::CliError;
use bluck_graph::GraphError;
use bluck_mood::MoodError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Graph(GraphError::MovieNotFound(title)) => miette::miette!(
            help = "Titles must match exactly, including case and punctuation",
            "No movie titled '{}'",
            title
        ),
        CliError::Graph(GraphError::InvalidArguments(msg)) => miette::miette!(
            help = "Pass at least one of --star, --title or --director",
            "{}",
            msg
        ),
        CliError::Mood(MoodError::InvalidK(k)) => miette::miette!(
            help = "Use -k with a positive count",
            "k must be greater than 0, got {}",
            k
        ),
        CliError::Degraded(msg) => miette::miette!(
            help = "Run without --strict to answer from the pages that did load",
            "Catalog incomplete: {}",
            msg
        ),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Point --catalog at a JSON catalog file",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_arguments_carry_help() {
        let report = cli_error_to_miette(CliError::Graph(GraphError::InvalidArguments(
            "the Kevin Bacon search requires at least one star, movie, or director".into(),
        )));
        assert!(report.to_string().contains("requires at least one star"));
        assert!(report.help().is_some());
    }

    #[test]
    fn other_errors_keep_their_message() {
        let report = cli_error_to_miette(CliError::Mood(MoodError::NoMoviesForCentroid(4)));
        assert_eq!(report.to_string(), "cannot find movies for centroid id 4");
    }
}
