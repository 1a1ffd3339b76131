//! `generate` and `inspect`: build a dataset into a snapshot and read it back.

use std::path::Path;

use bizlens_core::{BusinessProfile, Industry};
use bizlens_mock::{CompetitiveCounts, CustomerCounts, MockGenerator};
use bizlens_store::{AppStore, DashboardStats, ReviewFilter, SnapshotStore};
use chrono::Utc;

/// Every collection filled for one generator pass, competitive data
/// included, so the snapshot drives all dashboards.
pub(crate) fn build_store(generator: &mut MockGenerator, counts: CustomerCounts) -> AppStore {
    let dataset = generator.customer_dataset(counts);
    let profile = BusinessProfile::new("Bellini's Trattoria", "10014", Industry::Restaurants);
    let report = generator.competitive_report(&profile, CompetitiveCounts::default());

    let mut store = AppStore::new();
    store.set_customer_list(dataset.customers);
    store.set_interaction_list(dataset.interactions);
    store.set_complaint_list(dataset.complaints);
    store.set_review_list(dataset.reviews);
    store.set_insight_list(report.insights);
    store.set_competitor_list(report.competitors);
    store.set_competitor_complaint_list(report.complaints);
    store.set_opportunity_list(report.opportunities);
    store.set_threat_list(report.threats);
    store
}

/// # Errors
///
/// Returns an error if the snapshot cannot be written.
pub(crate) fn run_generate(
    seed: Option<u64>,
    counts: CustomerCounts,
    out: &Path,
) -> anyhow::Result<()> {
    let mut generator = match seed {
        Some(seed) => MockGenerator::seeded(seed, Utc::now()),
        None => MockGenerator::from_entropy(Utc::now()),
    };
    let store = build_store(&mut generator, counts);
    let snapshots = SnapshotStore::new(out);
    snapshots.save(&store)?;

    println!(
        "wrote {} (seed {}): {} customers, {} interactions, {} complaints, {} reviews",
        snapshots.path().display(),
        generator.seed(),
        store.customers().len(),
        store.interactions().len(),
        store.complaints().len(),
        store.reviews().len(),
    );
    Ok(())
}

/// # Errors
///
/// Returns an error if no snapshot exists in `dir` or it cannot be decoded.
pub(crate) fn run_inspect(dir: &Path, min_rating: Option<u8>) -> anyhow::Result<()> {
    let snapshots = SnapshotStore::new(dir);
    let snapshot = snapshots.load()?.ok_or_else(|| {
        anyhow::anyhow!(
            "no snapshot at {}; run `generate` first",
            snapshots.path().display()
        )
    })?;

    println!(
        "snapshot {} (schema v{}, saved {})",
        snapshots.path().display(),
        snapshot.schema_version,
        snapshot.saved_at.format("%Y-%m-%d %H:%M")
    );
    print_stats(&snapshot.state.dashboard_stats());

    if let Some(min_rating) = min_rating {
        let (matching, total) = count_reviews_at_least(snapshot.state, min_rating);
        println!("reviews rated {min_rating}+ : {matching} of {total}");
    }
    Ok(())
}

fn print_stats(stats: &DashboardStats) {
    println!("{:<28}{}", "customers", stats.customer_count);
    println!("{:<28}{:.1}", "avg satisfaction", stats.average_satisfaction);
    println!("{:<28}{}", "total lifetime value", stats.total_lifetime_value.round_dp(2));
    println!("{:<28}{}", "open complaints", stats.open_complaints);
    println!("{:<28}{:.1}", "avg rating", stats.average_rating);
    println!("{:<28}{:.1}%", "negative interactions", stats.negative_interaction_pct);
    println!("{:<28}{}", "insights", stats.insight_count);
}

/// Filtered and total review counts, ignoring whatever review filter the
/// snapshot was saved with.
pub(crate) fn count_reviews_at_least(mut store: AppStore, min_rating: u8) -> (usize, usize) {
    store.clear_filters();
    store.set_review_filter(ReviewFilter {
        min_rating: Some(min_rating),
        ..ReviewFilter::default()
    });
    (store.filtered_reviews().len(), store.reviews().len())
}
