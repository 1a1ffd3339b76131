use std::collections::HashMap;

use axum::{extract::State, response::Html};
use bizlens_core::{
    BusinessProfile, Competitor, CompetitorComplaint, Insight, Opportunity, Threat, Tone,
};
use leptos::prelude::*;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::state::{demo_profile, AppState};

use super::layout::Shell;
use super::render;
use super::ui::{Badge, Card, Modal, StatCard};
use super::{money, short_date};

/// Everything the competitive dashboard shows, copied out of the store.
struct CompetitiveData {
    profile: BusinessProfile,
    competitors: Vec<Competitor>,
    complaints: Vec<CompetitorComplaint>,
    insights: Vec<Insight>,
    opportunities: Vec<Opportunity>,
    threats: Vec<Threat>,
}

pub(super) async fn page(State(state): State<AppState>, user: CurrentUser) -> Html<String> {
    let store = state.store.read().await;
    let data = CompetitiveData {
        profile: demo_profile(Some(store.settings())),
        competitors: store.competitors().to_vec(),
        complaints: store.competitor_complaints().to_vec(),
        insights: store.insights().to_vec(),
        opportunities: store.opportunities().to_vec(),
        threats: store.threats().to_vec(),
    };
    drop(store);
    render_competitive(user.email, data)
}

fn modal_id(id: Uuid) -> String {
    format!("competitor-{}", id.simple())
}

#[allow(clippy::cast_precision_loss)]
fn render_competitive(user: Option<String>, data: CompetitiveData) -> Html<String> {
    let names: HashMap<Uuid, String> = data
        .competitors
        .iter()
        .map(|c| (c.id, c.name.clone()))
        .collect();
    let average_rating = if data.competitors.is_empty() {
        0.0
    } else {
        data.competitors.iter().map(|c| c.rating).sum::<f32>() / data.competitors.len() as f32
    };
    let competitor_count = data.competitors.len();
    let complaint_count = data.complaints.len();
    let title = format!("Competitive landscape for {}", data.profile.name);
    let subtitle = format!(
        "{} near {}",
        data.profile.industry.label(),
        data.profile.zip_code
    );
    let modals = data.competitors.clone();
    let mut complaints = data.complaints;
    complaints.sort_by_key(|c| std::cmp::Reverse(c.reported_at));

    let threat_rows = data
        .threats
        .into_iter()
        .map(|t| {
            let source = t
                .competitor_id
                .and_then(|id| names.get(&id).cloned())
                .unwrap_or_else(|| "Market".to_string());
            view! {
                <div class="mb-4">
                    <div class="flex justify-between items-center">
                        <h4 class="font-semibold">{t.title}</h4>
                        <Badge tone=t.severity.tone() label=t.severity.label() />
                    </div>
                    <p class="text-sm text-slate-500">{t.description}</p>
                    <p class="text-xs text-slate-500">
                        {format!("{source} · {}% likely", t.likelihood_pct)}
                    </p>
                </div>
            }
        })
        .collect::<Vec<_>>();
    let complaint_rows = complaints
        .into_iter()
        .map(|c| {
            let name = names.get(&c.competitor_id).cloned().unwrap_or_default();
            view! {
                <tr>
                    <td>{short_date(c.reported_at)}</td>
                    <td>{name}</td>
                    <td>{c.category.label()}</td>
                    <td><Badge tone=c.severity.tone() label=c.severity.label() /></td>
                    <td>{c.text}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    render(view! {
        <Shell title="Competitive intelligence" user=user>
            <h1 class="text-3xl font-bold mb-2">{title}</h1>
            <p class="text-slate-500 mb-8">{subtitle}</p>

            <div class="grid grid-cols-3 gap-6 mb-8">
                <StatCard label="Competitors tracked" value=competitor_count.to_string() />
                <StatCard label="Average rival rating" value=format!("{average_rating:.1} ★") />
                <StatCard label="Complaints mined" value=complaint_count.to_string() />
            </div>

            <Card title="Nearby competitors" class="mb-8">
                <table>
                    <tr>
                        <th>"Name"</th>
                        <th>"Distance"</th>
                        <th>"Rating"</th>
                        <th>"Reviews"</th>
                        <th>"Price"</th>
                        <th>"Market share"</th>
                    </tr>
                    {data.competitors.into_iter().map(|c| view! {
                        <tr>
                            <td><a href=format!("#{}", modal_id(c.id)) class="text-indigo-700">{c.name.clone()}</a></td>
                            <td>{format!("{:.1} mi", c.distance_miles)}</td>
                            <td>{format!("{:.1}", c.rating)}</td>
                            <td>{c.review_count}</td>
                            <td>{c.price_symbol()}</td>
                            <td>{format!("{:.1}%", c.market_share_pct)}</td>
                        </tr>
                    }).collect::<Vec<_>>()}
                </table>
            </Card>

            <div class="grid grid-cols-2 gap-6 mb-8">
                <Card title="Opportunities" tone=Tone::Positive>
                    {data.opportunities.into_iter().map(|o| view! {
                        <div class="mb-4">
                            <div class="flex justify-between items-center">
                                <h4 class="font-semibold">{o.title}</h4>
                                <Badge tone=Tone::Info label=o.effort.label() />
                            </div>
                            <p class="text-sm text-slate-500">{o.description}</p>
                            <p class="text-xs text-slate-500">
                                {format!("{} potential · priority {}/10", money(o.revenue_potential), o.priority)}
                            </p>
                        </div>
                    }).collect::<Vec<_>>()}
                </Card>
                <Card title="Threats" tone=Tone::Critical>
                    {threat_rows}
                </Card>
            </div>

            <Card title="Insights" class="mb-8">
                <div class="grid grid-cols-2 gap-6">
                    {data.insights.into_iter().map(|i| view! {
                        <div>
                            <Badge tone=i.category.tone() label=i.category.label() />
                            <h4 class="font-semibold mt-2">{i.title}</h4>
                            <p class="text-sm text-slate-500">{i.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </Card>

            <Card title="What customers say about them">
                <table>
                    <tr>
                        <th>"Date"</th>
                        <th>"Competitor"</th>
                        <th>"Category"</th>
                        <th>"Severity"</th>
                        <th>"Complaint"</th>
                    </tr>
                    {complaint_rows}
                </table>
            </Card>

            {modals.into_iter().map(|c| view! {
                <Modal id=modal_id(c.id) title=c.name>
                    <p class="text-sm text-slate-500 mb-4">{format!("{} · {}", c.category, c.address)}</p>
                    <h4 class="font-semibold">"Strengths"</h4>
                    <ul class="mb-4">
                        {c.strengths.into_iter().map(|s| view! { <li>{s}</li> }).collect::<Vec<_>>()}
                    </ul>
                    <h4 class="font-semibold">"Weaknesses"</h4>
                    <ul>
                        {c.weaknesses.into_iter().map(|w| view! { <li>{w}</li> }).collect::<Vec<_>>()}
                    </ul>
                </Modal>
            }).collect::<Vec<_>>()}
        </Shell>
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizlens_core::Industry;
    use bizlens_mock::{CompetitiveCounts, MockGenerator};
    use chrono::{TimeZone, Utc};

    #[test]
    fn complaints_show_competitor_names_and_modals_exist() {
        let anchor = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).single().expect("anchor");
        let mut generator = MockGenerator::seeded(11, anchor);
        let profile = BusinessProfile::new("Shine Bros", "11211", Industry::CarWashes);
        let report = generator.competitive_report(&profile, CompetitiveCounts::default());
        let first = report.competitors[0].clone();

        let Html(html) = render_competitive(
            None,
            CompetitiveData {
                profile,
                competitors: report.competitors,
                complaints: report.complaints,
                insights: report.insights,
                opportunities: report.opportunities,
                threats: report.threats,
            },
        );
        assert!(html.contains("Competitive landscape for Shine Bros"));
        assert!(html.contains(&format!("id=\"{}\"", modal_id(first.id))));
        assert!(html.contains(&first.name));
    }
}
