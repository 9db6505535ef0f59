use integration_tests::harness::{LogFile, events_with, init_test_tracing};
use loglat_core::cli::{self, AnalyzeArgs, ConfigOverrides};
use loglat_core::percentile::PercentileResult;
use loglat_core::pipeline::{AnalyzeRequest, run};
use loglat_core::report::render_summary;
use loglat_core::verbs::VerbSet;
use pretty_assertions::assert_eq;
use tracing::Level;

const ACCESS_LOG: &[&str] = &[
    "2024-01-01 10:00:00 GET /api 200 0.120",
    "2024-01-01 10:00:01 POST /api 201 0.340",
    "not a verb line 0.999",
];

#[test]
fn reports_get_post_scenario() {
    // Arrange
    let log = LogFile::plain("access.log", ACCESS_LOG);
    let request = AnalyzeRequest::new(log.path(), VerbSet::parse("GET,POST"));

    // Act
    let summary = run(&request, None).unwrap();
    let report = render_summary(&summary);

    // Assert
    let mut lines = report.lines();
    assert_eq!(
        lines.next(),
        Some("count: 2,    min: 0.120,    avg: 0.230,    max: 0.340")
    );
    assert_eq!(
        lines.next(),
        Some(
            "P0%: 0.120,    P10%: 0.120,    P50%: 0.340,    P90%: 0.340,    P99%: 0.340,    P100%: 0.340"
        )
    );
    assert_eq!(lines.next(), Some("verbs: GET=1 POST=1"));
    assert_eq!(lines.next(), Some("lines: 3 scanned, 2 matched, 0 skipped"));
}

#[test]
fn logs_and_skips_unparseable_reading() {
    // Arrange
    let events = init_test_tracing();
    let log = LogFile::plain(
        "access.log",
        &[
            "2024-01-01 10:00:00 GET /api 200 0.500",
            "2024-01-01 10:00:01 GET /api/skip-me 503 N/A",
        ],
    );
    let request = AnalyzeRequest::new(log.path(), VerbSet::parse("GET"));

    // Act
    let summary = run(&request, None).unwrap();

    // Assert
    assert_eq!(summary.result.count(), 1);
    assert_eq!(summary.skipped, 1);

    let logged = events_with(
        &events,
        "line",
        "2024-01-01 10:00:01 GET /api/skip-me 503 N/A",
    );
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].level, Level::WARN);
    assert_eq!(logged[0].field("token"), Some("N/A"));
}

#[test]
fn read_error_is_logged_with_file_name() {
    // Arrange
    let events = init_test_tracing();
    let long = "x".repeat(128);
    let log = LogFile::plain(
        "overlong.log",
        &["GET 1.0", &format!("GET {long} 2.0"), "GET 3.0"],
    );
    let mut request = AnalyzeRequest::new(log.path(), VerbSet::parse("GET"));
    request.max_line_bytes = 64;

    // Act
    let summary = run(&request, None).unwrap();

    // Assert
    assert_eq!(summary.result.count(), 1);
    let file = log.path().display().to_string();
    let logged = events_with(&events, "file", &file);
    assert!(
        logged.iter().any(|e| e.level == Level::ERROR),
        "no error event for {file}: {logged:?}"
    );
}

#[test]
fn reads_gzip_input() {
    let log = LogFile::gzip("access.log.gz", ACCESS_LOG);
    let request = AnalyzeRequest::new(log.path(), VerbSet::parse("GET,POST"));

    let summary = run(&request, None).unwrap();

    assert_eq!(summary.result.count(), 2);
}

#[test]
fn no_matches_still_produces_a_summary() {
    let log = LogFile::plain("access.log", ACCESS_LOG);
    let request = AnalyzeRequest::new(log.path(), VerbSet::parse("PATCH"));

    let summary = run(&request, None).unwrap();

    assert!(matches!(summary.result, PercentileResult::Empty { .. }));
    assert!(render_summary(&summary).starts_with("count: 0,    no readings\n"));
}

#[test]
fn cli_run_applies_config_file_and_overrides() {
    // Arrange
    let log = LogFile::plain("access.log", ACCESS_LOG);
    let config = log.sibling(
        "loglat.hcl",
        r#"
analyzer = {
  percentiles = [0, 100]
  extraction  = { strategy = "field_index", index = 4 }
}
"#,
    );
    let args = AnalyzeArgs {
        verbs: "GET,POST".to_string(),
        file: log.path().to_path_buf(),
        region_id: None,
        overrides: ConfigOverrides {
            config: Some(config),
            percentiles: Some(vec![50]),
            ..Default::default()
        },
    };

    // Act
    let summary = cli::run(args).unwrap();

    // Assert
    let stats = summary.result.stats().unwrap();
    assert_eq!(stats.min, 200.0);
    assert_eq!(stats.max, 201.0);
    assert_eq!(stats.percentiles.keys().copied().collect::<Vec<_>>(), vec![50]);
}

#[test]
fn cli_run_fails_on_missing_file() {
    let log = LogFile::plain("access.log", ACCESS_LOG);
    let args = AnalyzeArgs {
        verbs: "GET".to_string(),
        file: log.path().with_file_name("missing.log"),
        region_id: None,
        overrides: ConfigOverrides::default(),
    };

    let err = cli::run(args).unwrap_err();

    assert!(format!("{err:#}").contains("missing.log"), "{err:#}");
}

#[test]
fn cli_run_rejects_invalid_percentiles() {
    let log = LogFile::plain("access.log", ACCESS_LOG);
    let args = AnalyzeArgs {
        verbs: "GET".to_string(),
        file: log.path().to_path_buf(),
        region_id: None,
        overrides: ConfigOverrides {
            percentiles: Some(vec![50, 250]),
            ..Default::default()
        },
    };

    let err = cli::run(args).unwrap_err();

    assert!(format!("{err:#}").contains("250"), "{err:#}");
}
