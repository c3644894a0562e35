use super::*;

#[test]
fn parses_resolve_with_multi_word_query() {
    let cli = Cli::try_parse_from(["moodmap", "resolve", "Ferry", "Building"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Resolve { ref query, json: false } if query == &["Ferry", "Building"]
    ));
}

#[test]
fn resolve_requires_a_query() {
    assert!(Cli::try_parse_from(["moodmap", "resolve"]).is_err());
}

#[test]
fn parses_discover_with_negative_coordinates() {
    let cli = Cli::try_parse_from([
        "moodmap",
        "discover",
        "--mood",
        "date",
        "--lat",
        "37.7749",
        "--lng",
        "-122.4194",
        "--json",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Discover {
            ref mood,
            lat: Some(_),
            lng: Some(_),
            json: true,
        } if mood == "date"
    ));
}

#[test]
fn discover_lat_requires_lng() {
    let result = Cli::try_parse_from(["moodmap", "discover", "--mood", "work", "--lat", "1.0"]);
    assert!(result.is_err());
}

#[test]
fn discover_without_coordinates_is_allowed() {
    let cli = Cli::try_parse_from(["moodmap", "discover", "--mood", "budget"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Discover {
            lat: None,
            lng: None,
            ..
        }
    ));
}

#[test]
fn parses_explore_defaults() {
    let cli = Cli::try_parse_from(["moodmap", "explore"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Explore {
            near: None,
            mood: None,
            json: false
        }
    ));
}

#[test]
fn parses_explore_near_and_mood() {
    let cli = Cli::try_parse_from(["moodmap", "explore", "--near", "Paris", "--mood", "quick_bite"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Explore {
            near: Some(ref n),
            mood: Some(ref m),
            ..
        } if n == "Paris" && m == "quick_bite"
    ));
}

#[test]
fn survey_concurrency_defaults_to_two() {
    let cli = Cli::try_parse_from(["moodmap", "survey"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Survey {
            near: None,
            concurrency: 2
        }
    ));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["moodmap"]).is_err());
}
