use std::collections::HashSet;

use bizlens_core::{
    BusinessProfile, BusinessSettings, ComplaintStatus, Industry, InsightCategory,
};
use bizlens_mock::{CompetitiveCounts, CustomerCounts, MockGenerator};
use bizlens_store::{
    AppStore, ComplaintFilter, CustomerFilter, InsightFilter, ReviewFilter, SnapshotStore,
    StoreError, SCHEMA_VERSION,
};
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

fn seeded_store() -> AppStore {
    let anchor = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let mut mock = MockGenerator::seeded(17, anchor);
    let data = mock.customer_dataset(CustomerCounts::default());
    let profile = BusinessProfile::new("Bellini's", "10014", Industry::Restaurants);
    let report = mock.competitive_report(&profile, CompetitiveCounts::default());

    let mut store = AppStore::new();
    store.set_customer_list(data.customers);
    store.set_interaction_list(data.interactions);
    store.set_complaint_list(data.complaints);
    store.set_review_list(data.reviews);
    store.set_insight_list(report.insights);
    store.set_competitor_list(report.competitors);
    store.set_competitor_complaint_list(report.complaints);
    store.set_opportunity_list(report.opportunities);
    store.set_threat_list(report.threats);
    store
}

#[test]
fn filtered_view_respects_min_rating() {
    let mut store = seeded_store();
    store.set_review_filter(ReviewFilter {
        min_rating: Some(4),
        ..Default::default()
    });
    let reviews = store.filtered_reviews();
    assert!(!reviews.is_empty());
    assert!(reviews.iter().all(|r| r.rating >= 4));
}

#[test]
fn filtering_is_idempotent_and_non_mutating() {
    let mut store = seeded_store();
    let canonical = store.complaints().to_vec();
    store.set_complaint_filter(ComplaintFilter {
        status: Some(ComplaintStatus::Open),
        ..Default::default()
    });
    let first = store.filtered_complaints();
    let second = store.filtered_complaints();
    assert_eq!(first, second);
    assert_eq!(store.complaints(), canonical.as_slice());
    assert!(first.iter().all(|c| c.status == ComplaintStatus::Open));
}

#[test]
fn filtered_views_are_sorted_newest_first() {
    let store = seeded_store();
    let interactions = store.filtered_interactions();
    assert!(interactions
        .windows(2)
        .all(|pair| pair[0].occurred_at >= pair[1].occurred_at));
}

#[test]
fn clearing_all_filters_restores_full_collection() {
    let mut store = seeded_store();
    let all: HashSet<_> = store.customers().iter().map(|c| c.id).collect();

    store.set_customer_filter(CustomerFilter {
        min_satisfaction: Some(9),
        ..Default::default()
    });
    store.set_insight_filter(InsightFilter {
        category: Some(InsightCategory::Pricing),
        ..Default::default()
    });
    assert!(store.filtered_customers().len() < all.len());

    store.clear_filters();
    let restored: HashSet<_> = store.filtered_customers().iter().map(|c| c.id).collect();
    assert_eq!(restored, all);
    assert_eq!(store.filtered_insights().len(), store.insights().len());
}

#[test]
fn clearing_one_filter_keeps_the_others() {
    let mut store = seeded_store();
    store.set_review_filter(ReviewFilter {
        verified: Some(true),
        ..Default::default()
    });
    store.set_customer_filter(CustomerFilter {
        min_satisfaction: Some(5),
        ..Default::default()
    });
    store.clear_review_filter();
    assert_eq!(store.filters().reviews, ReviewFilter::default());
    assert_eq!(store.filters().customers.min_satisfaction, Some(5));
}

#[test]
fn patches_accumulate() {
    let mut store = seeded_store();
    let customer_id = store.customers()[0].id;
    store.set_review_filter(ReviewFilter {
        customer_id: Some(customer_id),
        ..Default::default()
    });
    store.set_review_filter(ReviewFilter {
        min_rating: Some(2),
        ..Default::default()
    });
    let filter = &store.filters().reviews;
    assert_eq!(filter.customer_id, Some(customer_id));
    assert_eq!(filter.min_rating, Some(2));
    assert!(store
        .filtered_reviews()
        .iter()
        .all(|r| r.customer_id == customer_id && r.rating >= 2));
}

#[test]
fn dashboard_stats_reflect_canonical_collections() {
    let mut store = seeded_store();
    store.set_customer_filter(CustomerFilter {
        min_satisfaction: Some(10),
        ..Default::default()
    });
    let stats = store.dashboard_stats();
    assert_eq!(stats.customer_count, store.customers().len());
    assert!(stats.average_satisfaction >= 1.0 && stats.average_satisfaction <= 10.0);
    assert!(stats.average_rating >= 1.0 && stats.average_rating <= 5.0);
    assert!((0.0..=100.0).contains(&stats.negative_interaction_pct));
    let unresolved = store
        .complaints()
        .iter()
        .filter(|c| c.status != ComplaintStatus::Resolved)
        .count();
    assert_eq!(stats.open_complaints, unresolved);
}

#[test]
fn dashboard_stats_on_empty_store_are_zero() {
    let stats = AppStore::new().dashboard_stats();
    assert_eq!(stats.customer_count, 0);
    assert!(stats.average_satisfaction.abs() < f32::EPSILON);
    assert!(stats.average_rating.abs() < f32::EPSILON);
}

#[test]
fn snapshot_round_trip_preserves_store() {
    let tmp = TempDir::new().expect("temp dir");
    let snapshots = SnapshotStore::new(tmp.path());
    let mut store = seeded_store();
    store.set_review_filter(ReviewFilter {
        min_rating: Some(3),
        ..Default::default()
    });
    store.set_settings(BusinessSettings {
        business_name: "Bellini's".to_string(),
        ..Default::default()
    });

    snapshots.save(&store).expect("save");
    let loaded = snapshots.load().expect("load").expect("snapshot present");
    assert_eq!(loaded.schema_version, SCHEMA_VERSION);
    assert_eq!(loaded.state, store);
    assert!(!snapshots.path().with_extension("json.tmp").exists());
}

#[test]
fn missing_snapshot_loads_as_none() {
    let tmp = TempDir::new().expect("temp dir");
    let snapshots = SnapshotStore::new(tmp.path().join("not-created-yet"));
    assert!(snapshots.load().expect("load").is_none());
}

#[test]
fn mismatched_schema_version_is_reported() {
    let tmp = TempDir::new().expect("temp dir");
    let snapshots = SnapshotStore::new(tmp.path());
    std::fs::write(
        snapshots.path(),
        r#"{"schema_version": 99, "saved_at": "2025-01-01T00:00:00Z", "state": {"shape": "changed"}}"#,
    )
    .expect("write");

    let err = snapshots.load().unwrap_err();
    assert!(matches!(
        err,
        StoreError::SchemaMismatch {
            found: 99,
            expected: 1
        }
    ));
}

#[test]
fn malformed_snapshot_is_a_decode_error() {
    let tmp = TempDir::new().expect("temp dir");
    let snapshots = SnapshotStore::new(tmp.path());
    std::fs::write(snapshots.path(), "{not json").expect("write");
    assert!(matches!(snapshots.load(), Err(StoreError::Decode(_))));
}

#[test]
fn clear_removes_snapshot_and_tolerates_absence() {
    let tmp = TempDir::new().expect("temp dir");
    let snapshots = SnapshotStore::new(tmp.path());
    snapshots.save(&AppStore::new()).expect("save");
    snapshots.clear().expect("clear");
    assert!(snapshots.load().expect("load").is_none());
    snapshots.clear().expect("second clear");
}
