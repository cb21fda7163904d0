#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_bacon_args() {
        let cli = Cli::try_parse_from([
            "bluck",
            "bacon",
            "--director",
            "Herbert Ross",
            "--title",
            "Footloose",
            "--depth",
            "3",
        ])
        .unwrap();

        match cli.command {
            Command::Bacon(args) => {
                assert_eq!(args.director.as_deref(), Some("Herbert Ross"));
                assert_eq!(args.title.as_deref(), Some("Footloose"));
                assert!(args.star.is_none());
                assert_eq!(args.depth, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.catalog, PathBuf::from("catalog.json"));
        assert!(!cli.strict);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bluck",
            "stats",
            "--catalog",
            "movies.json",
            "--strict",
            "-v",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Stats));
        assert_eq!(cli.catalog, PathBuf::from("movies.json"));
        assert!(cli.strict);
        assert!(cli.verbose);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["bluck", "-v", "-q", "stats"]).is_err());
    }

    #[test]
    fn test_lookup_requires_exactly_one_key() {
        assert!(Cli::try_parse_from(["bluck", "lookup"]).is_err());
        assert!(
            Cli::try_parse_from(["bluck", "lookup", "--star", "A", "--title", "B"]).is_err()
        );
        assert!(Cli::try_parse_from(["bluck", "lookup", "--title", "Heat"]).is_ok());
    }

    #[test]
    fn test_mood_args_build_metrics() {
        let cli = Cli::try_parse_from([
            "bluck",
            "mood",
            "--acting",
            "15",
            "--story-telling",
            "2.5",
            "-k",
            "-1",
        ])
        .unwrap();

        let Command::Mood(args) = cli.command else {
            panic!("expected mood command");
        };
        let mood = args.metrics();
        assert_eq!(mood.acting, 15.0);
        assert_eq!(mood.story_telling, 2.5);
        assert_eq!(mood.comedy, 0.0);
        assert_eq!(args.k, Some(-1));
    }
}
