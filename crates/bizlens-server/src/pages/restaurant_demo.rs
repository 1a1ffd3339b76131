use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Html,
};
use bizlens_core::Tone;
use bizlens_mock::RestaurantDemo;
use leptos::prelude::*;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::state::AppState;

use super::layout::Shell;
use super::render;
use super::ui::{Badge, Button, ButtonVariant, Card, StatCard};

const DEFAULT_ZIP: &str = "10014";

#[derive(Debug, Deserialize)]
pub(super) struct ZipQuery {
    zip: Option<String>,
}

pub(super) async fn page(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ZipQuery>,
) -> Html<String> {
    let zip = query
        .zip
        .map(|z| z.trim().to_string())
        .filter(|z| !z.is_empty())
        .unwrap_or_else(|| DEFAULT_ZIP.to_string());
    let demo = state.generator().nyc_restaurant_demo(&zip);
    render_restaurant_demo(user.email, demo)
}

fn render_restaurant_demo(user: Option<String>, demo: RestaurantDemo) -> Html<String> {
    let names: HashMap<Uuid, String> = demo
        .competitors
        .iter()
        .map(|c| (c.id, c.name.clone()))
        .collect();
    let heading = format!("Restaurants in {} ({})", demo.neighborhood, demo.zip_code);
    let top_complaint = demo
        .stats
        .top_complaint_category
        .map_or("None yet", |c| c.label());

    let complaint_rows = demo
        .complaints
        .into_iter()
        .take(12)
        .map(|c| {
            let name = names.get(&c.competitor_id).cloned().unwrap_or_default();
            view! {
                <li class="mb-2">
                    <Badge tone=c.severity.tone() label=c.severity.label() />
                    <span class="font-medium">{format!(" {name}: ")}</span>
                    <span class="text-slate-500">{c.text}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    render(view! {
        <Shell title="NYC restaurant demo" user=user>
            <div class="flex items-center justify-between mb-8">
                <h1 class="text-3xl font-bold">{heading}</h1>
                <form method="get" action="/dashboard/nyc-restaurant" class="flex items-end gap-4">
                    <label class="filter">
                        <span class="text-xs text-slate-500">"NYC zip code"</span>
                        <input type="text" name="zip" value=demo.zip_code.clone() maxlength="5" />
                    </label>
                    <Button variant=ButtonVariant::Secondary>"Analyze"</Button>
                </form>
            </div>

            <div class="grid grid-cols-3 gap-6 mb-8">
                <StatCard label="Average rating" value=format!("{:.1} ★", demo.stats.average_rating) />
                <StatCard label="Average price level" value=format!("{:.1} / 4", demo.stats.average_price_level) />
                <StatCard label="Reviews analyzed" value=demo.stats.total_reviews.to_string() />
            </div>

            <div class="grid grid-cols-2 gap-6">
                <Card title="Neighborhood competitors">
                    <table>
                        <tr>
                            <th>"Restaurant"</th>
                            <th>"Rating"</th>
                            <th>"Price"</th>
                            <th>"Distance"</th>
                        </tr>
                        {demo.competitors.into_iter().map(|c| view! {
                            <tr>
                                <td>{c.name.clone()}</td>
                                <td>{format!("{:.1}", c.rating)}</td>
                                <td>{c.price_symbol()}</td>
                                <td>{format!("{:.1} mi", c.distance_miles)}</td>
                            </tr>
                        }).collect::<Vec<_>>()}
                    </table>
                </Card>
                <Card title="What diners complain about" tone=Tone::Caution>
                    <p class="text-sm text-slate-500 mb-4">
                        {format!("Most common complaint: {top_complaint}")}
                    </p>
                    <ul>{complaint_rows}</ul>
                </Card>
            </div>

            <Card title="Insights" class="mt-8">
                {demo.insights.into_iter().map(|i| view! {
                    <div class="mb-4">
                        <Badge tone=i.impact.tone() label=i.impact.label() />
                        <h4 class="font-semibold mt-2">{i.title}</h4>
                        <p class="text-sm text-slate-500">{i.description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </Card>
        </Shell>
    })
}
