use chrono::TimeZone;
use rust_decimal::Decimal;

use super::*;

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).unwrap()
}

fn customer(name: &str, satisfaction: u8, day: u32, tags: &[&str]) -> Customer {
    Customer {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        preferred_channel: Channel::Email,
        satisfaction,
        lifetime_value: Decimal::new(10_000, 2),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        acquired_at: at(1),
        last_interaction_at: at(day),
    }
}

#[test]
fn empty_filter_matches_everything() {
    let filter = CustomerFilter::default();
    assert!(filter.matches(&customer("Ada", 1, 2, &[])));
}

#[test]
fn search_is_case_insensitive_substring() {
    let filter = CustomerFilter {
        search: Some("LOVE".to_string()),
        ..Default::default()
    };
    assert!(filter.matches(&customer("Ada Lovelace", 5, 2, &[])));
    assert!(!filter.matches(&customer("Grace Hopper", 5, 2, &[])));
}

#[test]
fn blank_search_is_no_constraint() {
    let filter = CustomerFilter {
        search: Some("  ".to_string()),
        ..Default::default()
    };
    assert!(filter.matches(&customer("Grace Hopper", 5, 2, &[])));
}

#[test]
fn date_range_is_inclusive() {
    let filter = CustomerFilter {
        from: Some(at(5)),
        to: Some(at(10)),
        ..Default::default()
    };
    assert!(filter.matches(&customer("a", 5, 5, &[])));
    assert!(filter.matches(&customer("b", 5, 10, &[])));
    assert!(!filter.matches(&customer("c", 5, 4, &[])));
    assert!(!filter.matches(&customer("d", 5, 11, &[])));
}

#[test]
fn tags_match_on_any_overlap() {
    let filter = CustomerFilter {
        tags: Some(vec!["vip".to_string(), "referral".to_string()]),
        ..Default::default()
    };
    assert!(filter.matches(&customer("a", 5, 2, &["new", "referral"])));
    assert!(!filter.matches(&customer("b", 5, 2, &["new"])));
}

#[test]
fn empty_tag_list_is_no_constraint() {
    let filter = CustomerFilter {
        tags: Some(vec![]),
        ..Default::default()
    };
    assert!(filter.matches(&customer("a", 5, 2, &[])));
}

#[test]
fn merge_overwrites_only_present_fields() {
    let mut current = CustomerFilter {
        search: Some("ada".to_string()),
        min_satisfaction: Some(3),
        ..Default::default()
    };
    current.merge(CustomerFilter {
        min_satisfaction: Some(8),
        channel: Some(Channel::Chat),
        ..Default::default()
    });
    assert_eq!(current.search.as_deref(), Some("ada"));
    assert_eq!(current.min_satisfaction, Some(8));
    assert_eq!(current.channel, Some(Channel::Chat));
}

#[test]
fn apply_sorts_newest_first_without_touching_input() {
    let items = vec![
        customer("old", 5, 2, &[]),
        customer("new", 5, 20, &[]),
        customer("mid", 5, 9, &[]),
    ];
    let before = items.clone();
    let sorted = apply(&items, &CustomerFilter::default());
    let names: Vec<_> = sorted.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["new", "mid", "old"]);
    assert_eq!(items, before);
}

#[test]
fn review_patch_parses_from_partial_json() {
    let patch: ReviewFilter =
        serde_json::from_str(r#"{"min_rating": 4, "platform": "yelp"}"#).expect("parse");
    assert_eq!(patch.min_rating, Some(4));
    assert_eq!(patch.platform, Some(ReviewPlatform::Yelp));
    assert!(patch.verified.is_none());
}

#[test]
fn unknown_patch_fields_are_rejected() {
    let result = serde_json::from_str::<InsightFilter>(r#"{"min_rating": 4}"#);
    assert!(result.is_err());
}
