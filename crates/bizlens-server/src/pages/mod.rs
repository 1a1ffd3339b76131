//! Server-rendered HTML pages. Every page is a Leptos view rendered to a
//! string per request; there is no client runtime.

mod auth;
mod competitive;
mod dashboard;
mod demo;
mod home;
mod layout;
mod not_found;
mod restaurant_demo;
mod settings;
pub mod styles;
pub mod ui;
mod vertical;

use axum::{
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use rust_decimal::Decimal;

use crate::state::AppState;

pub use not_found::not_found;

/// Render a complete document.
pub fn render<V: IntoView>(view: V) -> Html<String> {
    Html(format!("<!DOCTYPE html>\n{}", view.to_html()))
}

/// `303 See Other` to `location`, for post/redirect/get.
pub fn see_other(location: &str) -> Response {
    (StatusCode::SEE_OTHER, [(LOCATION, location.to_string())]).into_response()
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::page))
        .route("/{vertical}", get(vertical::page))
        .route("/demo", get(demo::form).post(demo::submit))
        .route("/demo/{session_id}", get(demo::session))
        .route("/dashboard", get(dashboard::page))
        .route("/dashboard/clear", post(dashboard::clear))
        .route("/dashboard/competitive", get(competitive::page))
        .route("/dashboard/nyc-restaurant", get(restaurant_demo::page))
        .route("/settings", get(settings::form).post(settings::save))
        .route("/sign-in", get(auth::sign_in_form).post(auth::sign_in))
        .route("/sign-up", get(auth::sign_up_form).post(auth::sign_up))
        .route("/sign-out", post(auth::sign_out))
}

fn money(value: Decimal) -> String {
    let whole = value.round_dp(0).to_string();
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", whole),
    };
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}${grouped}")
}

fn short_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(Decimal::new(1_234_567_89, 2)), "$1,234,568");
        assert_eq!(money(Decimal::new(999, 0)), "$999");
        assert_eq!(money(Decimal::new(-12_000, 0)), "-$12,000");
    }
}
