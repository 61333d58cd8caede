// Command-line parsing into the library configuration.

use clap::Parser;
use deliverability_check::config::Opt;
use deliverability_check::{Config, LogFormat, LogLevel, ResolverBackend};

fn parse(args: &[&str]) -> Result<Config, clap::Error> {
    let mut argv = vec!["deliverability_check"];
    argv.extend_from_slice(args);
    Opt::try_parse_from(argv).map(Config::from)
}

#[test]
fn test_domain_is_required() {
    let err = parse(&[]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_all_flags() {
    let config = parse(&[
        "example.org",
        "--json",
        "--verbose",
        "--log-level",
        "info",
        "--log-format",
        "json",
        "--resolver",
        "system",
        "--dig-path",
        "/usr/local/bin/dig",
        "--timeout-seconds",
        "3",
        "--selectors",
        "a,b",
        "--max-concurrency",
        "2",
        "--min-score",
        "80",
    ])
    .unwrap();

    assert_eq!(config.domain, "example.org");
    assert!(config.json);
    assert!(config.verbose);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.resolver, ResolverBackend::System);
    assert_eq!(config.dig_path, "/usr/local/bin/dig");
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(config.settings.selectors, vec!["a", "b"]);
    assert_eq!(config.settings.max_concurrency, 2);
    assert_eq!(config.min_score, 80);
    // --verbose never lowers an explicit level below debug
    assert_eq!(config.effective_log_level(), log::LevelFilter::Debug);
}

#[test]
fn test_unknown_resolver_rejected() {
    let err = parse(&["example.com", "--resolver", "doh"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn test_min_score_out_of_range_rejected() {
    assert!(parse(&["example.com", "--min-score", "300"]).is_err());
}
