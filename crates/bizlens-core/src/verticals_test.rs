use std::path::Path;

use super::*;

fn page(industry: Industry, headline: &str) -> VerticalPage {
    VerticalPage {
        industry,
        headline: headline.to_string(),
        subheadline: "Know your market".to_string(),
        pain_points: vec![],
        features: vec![ContentBlock {
            title: "Review radar".to_string(),
            body: "Every review, one inbox.".to_string(),
        }],
        stats: vec![],
        testimonial: None,
        cta_label: "Run a free analysis".to_string(),
    }
}

#[test]
fn validate_accepts_distinct_verticals() {
    let file = VerticalsFile {
        verticals: vec![
            page(Industry::Restaurants, "Fill every table"),
            page(Industry::CarWashes, "More members, fewer churned plans"),
        ],
    };
    assert!(validate_verticals(&file).is_ok());
}

#[test]
fn validate_rejects_duplicate_industry() {
    let file = VerticalsFile {
        verticals: vec![
            page(Industry::Restaurants, "One"),
            page(Industry::Restaurants, "Two"),
        ],
    };
    let err = validate_verticals(&file).unwrap_err();
    assert!(err.to_string().contains("duplicate landing page"));
}

#[test]
fn validate_rejects_empty_headline() {
    let file = VerticalsFile {
        verticals: vec![page(Industry::Hospitality, "   ")],
    };
    let err = validate_verticals(&file).unwrap_err();
    assert!(err.to_string().contains("empty headline"));
}

#[test]
fn validate_rejects_page_without_features() {
    let mut bare = page(Industry::Contractors, "Win more bids");
    bare.features.clear();
    let file = VerticalsFile {
        verticals: vec![bare],
    };
    let err = validate_verticals(&file).unwrap_err();
    assert!(err.to_string().contains("at least one feature"));
}

#[test]
fn validate_rejects_other_industry() {
    let file = VerticalsFile {
        verticals: vec![page(Industry::Other, "Anything")],
    };
    assert!(validate_verticals(&file).is_err());
}

#[test]
fn find_returns_matching_page() {
    let file = VerticalsFile {
        verticals: vec![page(Industry::CarWashes, "Shine")],
    };
    assert_eq!(
        file.find(Industry::CarWashes).map(|p| p.headline.as_str()),
        Some("Shine")
    );
    assert!(file.find(Industry::Hospitality).is_none());
}

#[test]
fn load_verticals_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("verticals.yaml");
    assert!(
        path.exists(),
        "verticals.yaml missing at {path:?} — required for this test"
    );
    let file = load_verticals(&path).expect("verticals.yaml should load");
    for industry in Industry::VERTICALS {
        assert!(
            file.find(industry).is_some(),
            "missing landing page for {}",
            industry.slug()
        );
    }
}

#[test]
fn load_verticals_reports_missing_file() {
    let err = load_verticals(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::VerticalsFileIo { .. }));
}
