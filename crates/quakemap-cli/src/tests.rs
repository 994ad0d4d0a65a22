use super::*;

#[test]
fn parses_feed_with_default_timeframe() {
    let cli = Cli::try_parse_from(["quakemap", "feed"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Feed {
            timeframe: Timeframe::Day
        }
    ));
}

#[test]
fn parses_search_with_options() {
    let cli = Cli::try_parse_from([
        "quakemap",
        "search",
        "San Francisco",
        "--radius",
        "250",
        "--timeframe",
        "week",
        "--limit",
        "10",
    ])
    .expect("expected valid cli args");

    let Commands::Search {
        query,
        radius,
        timeframe,
        limit,
    } = cli.command
    else {
        panic!("expected search command");
    };
    assert_eq!(query, "San Francisco");
    assert_eq!(radius, Some(250.0));
    assert_eq!(timeframe, Timeframe::Week);
    assert_eq!(limit, Some(10));
}

#[test]
fn search_defaults_to_month_without_radius() {
    let cli = Cli::try_parse_from(["quakemap", "search", "Tokyo"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Search {
            radius: None,
            timeframe: Timeframe::Month,
            limit: None,
            ..
        }
    ));
}

#[test]
fn parses_country_command() {
    let cli = Cli::try_parse_from(["quakemap", "country", "usa", "--limit", "5"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Country {
            ref query,
            timeframe: Timeframe::Month,
            limit: Some(5),
        } if query == "usa"
    ));
}

#[test]
fn rejects_unknown_timeframe() {
    assert!(Cli::try_parse_from(["quakemap", "feed", "--timeframe", "year"]).is_err());
}

#[test]
fn search_requires_a_query() {
    assert!(Cli::try_parse_from(["quakemap", "search"]).is_err());
}
