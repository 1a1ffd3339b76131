//! Integration tests for the demo wizard runner and analyzers.

use std::time::Duration;

use bizlens_core::{BusinessProfile, Industry, SourceSettings};
use bizlens_mock::MockGenerator;
use bizlens_sources::IntelligenceSources;
use bizlens_wizard::{
    AnalysisStep, Analyzer, DemoWizard, InsightOrigin, LiveAnalyzer, MockAnalyzer, WizardError,
    WizardField, WizardState, WizardTiming,
};
use chrono::{TimeZone, Utc};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn generator(seed: u64) -> MockGenerator {
    let anchor = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    MockGenerator::seeded(seed, anchor)
}

fn timing() -> WizardTiming {
    WizardTiming {
        tick: Duration::from_millis(100),
        ticks_per_step: 4,
        summary_delay: Duration::from_secs(3),
    }
}

fn wizard(analyzer: MockAnalyzer) -> DemoWizard<MockAnalyzer> {
    DemoWizard::new(analyzer, timing(), generator(99))
}

fn fill<A: Analyzer>(wizard: &mut DemoWizard<A>) {
    wizard.start().expect("start");
    wizard
        .set_field(WizardField::BusinessName, "Shine Auto Spa")
        .expect("name");
    wizard.set_field(WizardField::ZipCode, "11211").expect("zip");
    wizard
        .set_field(WizardField::Industry, "car-washes")
        .expect("industry");
}

#[tokio::test(start_paused = true)]
async fn submit_with_blank_fields_keeps_collecting_input() {
    let mut wizard = wizard(MockAnalyzer::new(generator(1)));
    wizard.start().expect("start");
    wizard
        .set_field(WizardField::BusinessName, "Shine Auto Spa")
        .expect("name");
    wizard.set_field(WizardField::ZipCode, "   ").expect("zip");

    let err = wizard.submit().unwrap_err();

    assert_eq!(
        err,
        WizardError::MissingFields(vec![WizardField::ZipCode, WizardField::Industry])
    );
    match wizard.state() {
        WizardState::CollectingInput { input } => {
            assert_eq!(input.business_name, "Shine Auto Spa");
        }
        other => panic!("expected collecting_input, got {}", other.name()),
    }
}

#[tokio::test(start_paused = true)]
async fn successful_analysis_reaches_complete_with_generated_insights() {
    let mut wizard = wizard(MockAnalyzer::new(generator(1)));
    fill(&mut wizard);
    let profile = wizard.submit().expect("submit");
    assert_eq!(profile.industry, Industry::CarWashes);
    assert_eq!(
        wizard.state(),
        WizardState::Analyzing {
            step: 0,
            progress: 0
        }
    );

    let outcome = wizard.run_analysis().await.expect("analysis");

    assert_eq!(outcome.origin, InsightOrigin::Generated);
    assert_eq!(outcome.insights.len(), 6);
    assert_eq!(outcome.profile.name, "Shine Auto Spa");
    assert!(matches!(wizard.state(), WizardState::Complete { .. }));
}

#[tokio::test(start_paused = true)]
async fn failing_step_completes_with_single_fallback_insight() {
    let analyzer = MockAnalyzer::new(generator(1)).failing_at(AnalysisStep::AnalyzingReviews);
    let mut wizard = wizard(analyzer);
    fill(&mut wizard);
    wizard.submit().expect("submit");

    let outcome = wizard.run_analysis().await.expect("analysis");

    assert!(outcome.is_fallback());
    assert_eq!(outcome.insights.len(), 1);
    assert_eq!(outcome.insights[0].metadata["fallback"], true);
    match &outcome.origin {
        InsightOrigin::Fallback { reason } => {
            assert!(reason.contains("Analyzing customer reviews"));
        }
        InsightOrigin::Generated => panic!("expected fallback origin"),
    }
    assert!(matches!(wizard.state(), WizardState::Complete { .. }));
}

#[tokio::test(start_paused = true)]
async fn progress_is_published_and_never_decreases() {
    let mut wizard = wizard(MockAnalyzer::new(generator(3)));
    fill(&mut wizard);
    wizard.submit().expect("submit");
    let mut rx = wizard.subscribe();

    let observer = tokio::spawn(async move {
        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            if let WizardState::Analyzing { progress, .. } = state {
                seen.push(progress);
            }
            if matches!(state, WizardState::Complete { .. }) {
                break;
            }
        }
        seen
    });

    wizard.run_analysis().await.expect("analysis");
    let seen = observer.await.expect("observer");

    assert!(!seen.is_empty());
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(seen.last().copied(), Some(100));
}

#[tokio::test(start_paused = true)]
async fn analysis_takes_one_tick_budget_per_step() {
    let mut wizard = wizard(MockAnalyzer::new(generator(4)));
    fill(&mut wizard);
    wizard.submit().expect("submit");

    let started = tokio::time::Instant::now();
    wizard.run_analysis().await.expect("analysis");

    // 5 steps x 4 ticks x 100ms
    assert_eq!(started.elapsed(), Duration::from_millis(2000));
}

#[tokio::test(start_paused = true)]
async fn run_to_summary_waits_the_summary_delay() {
    let mut wizard = wizard(MockAnalyzer::new(generator(5)));
    fill(&mut wizard);
    wizard.submit().expect("submit");

    let started = tokio::time::Instant::now();
    let outcome = wizard.run_to_summary().await.expect("summary");

    assert_eq!(started.elapsed(), Duration::from_millis(5000));
    assert_eq!(wizard.state(), WizardState::Summary { outcome });
}

#[tokio::test(start_paused = true)]
async fn out_of_order_actions_are_rejected() {
    let mut wizard = wizard(MockAnalyzer::new(generator(6)));

    assert!(matches!(
        wizard.run_analysis().await,
        Err(WizardError::InvalidTransition {
            action: "run_analysis",
            state: "idle"
        })
    ));
    assert!(wizard.set_field(WizardField::ZipCode, "10014").is_err());
    assert!(wizard.show_summary().is_err());

    fill(&mut wizard);
    assert!(wizard.start().is_err());

    wizard.reset();
    assert_eq!(wizard.state(), WizardState::Idle);
    assert!(wizard.profile().is_none());
}

#[tokio::test(start_paused = true)]
async fn same_seed_gives_same_insight_titles() {
    let titles = |outcome: bizlens_wizard::AnalysisOutcome| {
        outcome
            .insights
            .into_iter()
            .map(|i| i.title)
            .collect::<Vec<_>>()
    };

    let mut first = wizard(MockAnalyzer::new(generator(7)));
    fill(&mut first);
    first.submit().expect("submit");
    let a = titles(first.run_analysis().await.expect("first"));

    let mut second = wizard(MockAnalyzer::new(generator(7)));
    fill(&mut second);
    second.submit().expect("submit");
    let b = titles(second.run_analysis().await.expect("second"));

    assert_eq!(a, b);
}

fn settings(base: &str, key: Option<&str>) -> SourceSettings {
    let key = key.map(str::to_string);
    SourceSettings {
        timeout_secs: 5,
        user_agent: "bizlens-test".to_string(),
        news_base_url: base.to_string(),
        places_base_url: base.to_string(),
        reviews_base_url: base.to_string(),
        social_base_url: base.to_string(),
        enrichment_base_url: base.to_string(),
        places_api_key: key.clone(),
        reviews_api_key: key.clone(),
        social_api_key: key.clone(),
        enrichment_api_key: key,
    }
}

fn profile() -> BusinessProfile {
    BusinessProfile::new("Bellini's Trattoria", "10014", Industry::Restaurants)
}

#[tokio::test]
async fn live_analyzer_marks_fallback_data_without_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rss/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let sources = IntelligenceSources::from_settings(&settings(&server.uri(), None))
        .expect("sources");
    assert!(!sources.any_configured());
    let mut analyzer = LiveAnalyzer::new(sources, generator(8));

    let competitors = analyzer
        .analyze(AnalysisStep::ScanningCompetitors, &profile())
        .await
        .expect("competitors");
    assert_eq!(competitors.len(), 1);
    assert_eq!(competitors[0].metadata["data_origin"], "fallback");
    assert_eq!(
        competitors[0].metadata["fallback_reason"],
        "missing credentials"
    );

    let social = analyzer
        .analyze(AnalysisStep::MonitoringSocial, &profile())
        .await
        .expect("social");
    assert_eq!(social[0].metadata["news_origin"], "fallback");

    let generated = analyzer
        .analyze(AnalysisStep::GeneratingInsights, &profile())
        .await
        .expect("generated");
    assert_eq!(generated.len(), 2);
    assert!(generated
        .iter()
        .all(|i| i.metadata["data_origin"] == "generated"));
}

#[tokio::test]
async fn live_analyzer_uses_live_reviews() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/reviews"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "reviews": [
                    {"author": "Jo", "source": "yelp", "rating": 5, "text": "Amazing pasta"},
                    {"author": "Al", "source": "google", "rating": 1, "text": "Rude and slow"}
                ]
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let sources = IntelligenceSources::from_settings(&settings(&server.uri(), Some("live-key")))
        .expect("sources");
    assert!(sources.any_configured());
    let mut analyzer = LiveAnalyzer::new(sources, generator(9));

    let insights = analyzer
        .analyze(AnalysisStep::AnalyzingReviews, &profile())
        .await
        .expect("reviews");

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].metadata["data_origin"], "live");
    assert_eq!(insights[0].metadata["review_count"], 2);
    assert!(insights[0].title.contains("3.0 stars"));
}

#[tokio::test]
async fn live_run_against_failing_vendors_still_completes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let sources = IntelligenceSources::from_settings(&settings(&server.uri(), Some("live-key")))
        .expect("sources");
    let fast = WizardTiming {
        tick: Duration::from_millis(1),
        ticks_per_step: 1,
        summary_delay: Duration::ZERO,
    };
    let mut wizard = DemoWizard::new(LiveAnalyzer::new(sources, generator(4)), fast, generator(5));
    fill(&mut wizard);
    wizard.submit().expect("submit");

    let outcome = wizard.run_analysis().await.expect("analysis");

    assert!(matches!(wizard.state(), WizardState::Complete { .. }));
    assert!(!outcome.insights.is_empty());
    assert!(outcome
        .insights
        .iter()
        .any(|i| i.metadata["data_origin"] == "fallback"));
    assert!(outcome
        .insights
        .iter()
        .all(|i| i.metadata["data_origin"] != "live"));
    assert!(!server.received_requests().await.unwrap_or_default().is_empty());
}
