//! Seeded generator of plausible demo records for every dashboard.

mod competitive;
mod customers;
mod generator;
mod pools;
mod restaurant_demo;

pub use competitive::{CompetitiveCounts, CompetitiveReport};
pub use customers::{CustomerCounts, CustomerDataset};
pub use generator::MockGenerator;
pub use restaurant_demo::{neighborhood_for_zip, MarketStats, RestaurantDemo};
