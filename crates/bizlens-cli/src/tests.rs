use super::*;

use bizlens_mock::{CustomerCounts, MockGenerator};
use bizlens_wizard::WizardState;
use chrono::{TimeZone, Utc};

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["bizlens-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn generate_uses_default_counts() {
    let cli = Cli::try_parse_from(["bizlens-cli", "generate", "--seed", "9", "--out", "/tmp/x"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Generate {
            seed: Some(9),
            customers: 25,
            interactions: 60,
            complaints: 15,
            reviews: 40,
            ..
        })
    ));
}

#[test]
fn inspect_rejects_out_of_range_rating() {
    let err = Cli::try_parse_from(["bizlens-cli", "inspect", "--min-rating", "6"]);
    assert!(err.is_err());
}

#[test]
fn demo_requires_all_three_inputs() {
    assert!(Cli::try_parse_from(["bizlens-cli", "demo", "--business-name", "Shine"]).is_err());
    let cli = Cli::try_parse_from([
        "bizlens-cli",
        "demo",
        "--business-name",
        "Shine Bros",
        "--zip",
        "11211",
        "--industry",
        "car wash",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Demo { live: false, seed: None, ref zip, .. }) if zip == "11211"
    ));
}

#[test]
fn generate_then_inspect_round_trips_through_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let counts = CustomerCounts {
        customers: 5,
        interactions: 8,
        complaints: 3,
        reviews: 20,
    };
    dataset::run_generate(Some(4), counts, dir.path()).expect("generate");
    dataset::run_inspect(dir.path(), Some(4)).expect("inspect");
}

#[test]
fn inspect_without_snapshot_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(dataset::run_inspect(dir.path(), None).is_err());
}

#[test]
fn review_count_respects_min_rating() {
    let anchor = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).single().expect("anchor");
    let mut generator = MockGenerator::seeded(4, anchor);
    let store = dataset::build_store(&mut generator, CustomerCounts::default());
    let expected = store.reviews().iter().filter(|r| r.rating >= 4).count();
    let (matching, total) = dataset::count_reviews_at_least(store, 4);
    assert_eq!(matching, expected);
    assert_eq!(total, 40);
}

#[test]
fn describe_skips_input_states_and_formats_progress() {
    assert!(demo::describe(&WizardState::Idle).is_none());
    let line = demo::describe(&WizardState::Analyzing {
        step: 1,
        progress: 7,
    })
    .expect("line");
    assert_eq!(line, "[  7%] Scanning nearby competitors");
}

#[tokio::test(start_paused = true)]
async fn demo_runs_to_summary_with_mock_analyzer() {
    let input = demo::DemoInput {
        business_name: "Shine Bros".to_string(),
        zip_code: "11211".to_string(),
        industry: "car wash".to_string(),
    };
    demo::run_demo(&input, Some(3), false).await.expect("demo");
}

#[tokio::test]
async fn demo_rejects_blank_input() {
    let input = demo::DemoInput {
        business_name: "Shine Bros".to_string(),
        zip_code: "  ".to_string(),
        industry: "car wash".to_string(),
    };
    assert!(demo::run_demo(&input, Some(3), false).await.is_err());
}

#[test]
fn live_demo_builds_without_server_settings() {
    let analyzer = demo::analyzer(Some(3), true).expect("live analyzer");
    assert!(matches!(analyzer, bizlens_wizard::DemoAnalyzer::Live(_)));
}
