//! Customer intelligence dashboard. Filter fields in the query string are
//! written into the store's criteria, so the view stays filtered across
//! visits. A plain link merges like a PATCH through the API; the filter form
//! replaces the fields it shows, so picking "Any" drops that criterion.

use axum::{
    extract::{Query, State},
    response::{Html, Response},
    Form,
};
use bizlens_core::{
    Channel, Complaint, ComplaintCategory, ComplaintStatus, Customer, Impact, Insight,
    InsightCategory, Interaction, InteractionCategory, Priority, Review, ReviewPlatform, Sentiment,
    Severity,
};
use bizlens_store::{
    AppStore, ComplaintFilter, CustomerFilter, DashboardStats, Filter, Filters, InsightFilter,
    InteractionFilter, ReviewFilter,
};
use leptos::prelude::*;
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::state::AppState;

use super::layout::Shell;
use super::ui::{Badge, Button, ButtonVariant, StatCard, Tab, Tabs};
use super::{money, render, see_other, short_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Customers,
    Interactions,
    Complaints,
    Reviews,
    Insights,
}

impl DashboardTab {
    const ALL: [DashboardTab; 5] = [
        DashboardTab::Customers,
        DashboardTab::Interactions,
        DashboardTab::Complaints,
        DashboardTab::Reviews,
        DashboardTab::Insights,
    ];

    fn key(self) -> &'static str {
        match self {
            DashboardTab::Customers => "customers",
            DashboardTab::Interactions => "interactions",
            DashboardTab::Complaints => "complaints",
            DashboardTab::Reviews => "reviews",
            DashboardTab::Insights => "insights",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DashboardTab::Customers => "Customers",
            DashboardTab::Interactions => "Interactions",
            DashboardTab::Complaints => "Complaints",
            DashboardTab::Reviews => "Reviews",
            DashboardTab::Insights => "Insights",
        }
    }

    fn parse(raw: Option<&str>) -> Self {
        pick(&Self::ALL, raw, Self::key).unwrap_or(DashboardTab::Customers)
    }
}

/// Query string of `/dashboard`. Empty values count as absent. The filter
/// form also sends `submitted`, which makes it authoritative for its fields.
#[derive(Debug, Default, Deserialize)]
pub(super) struct DashboardQuery {
    tab: Option<String>,
    submitted: Option<String>,
    search: Option<String>,
    channel: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    sentiment: Option<String>,
    severity: Option<String>,
    status: Option<String>,
    platform: Option<String>,
    impact: Option<String>,
    min_satisfaction: Option<String>,
    min_rating: Option<String>,
    min_confidence: Option<String>,
    verified: Option<String>,
    tag: Option<String>,
}

fn pick<T: Copy>(all: &[T], raw: Option<&str>, key: impl Fn(T) -> &'static str) -> Option<T> {
    let raw = raw?.trim();
    all.iter().copied().find(|v| key(*v) == raw)
}

fn number(raw: Option<&str>) -> Option<u8> {
    raw?.trim().parse().ok()
}

fn text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

impl DashboardQuery {
    fn tags(&self) -> Option<Vec<String>> {
        text(self.tag.as_deref()).map(|t| vec![t])
    }

    fn verified(&self) -> Option<bool> {
        match self.verified.as_deref().map(str::trim) {
            Some("true" | "yes") => Some(true),
            Some("false" | "no") => Some(false),
            _ => None,
        }
    }

    fn submitted(&self) -> bool {
        self.submitted.is_some()
    }

    /// Fold this query into the criteria for `tab`. Returns whether they
    /// changed.
    fn apply(&self, store: &mut AppStore, tab: DashboardTab) -> bool {
        let submitted = self.submitted();
        match tab {
            DashboardTab::Customers => {
                let patch = CustomerFilter {
                    search: text(self.search.as_deref()),
                    channel: pick(&Channel::ALL, self.channel.as_deref(), Channel::as_str),
                    min_satisfaction: number(self.min_satisfaction.as_deref()),
                    tags: self.tags(),
                    ..CustomerFilter::default()
                };
                let Some(next) = next_criteria(&store.filters().customers, patch, submitted, |n, p| {
                    n.search.clone_from(&p.search);
                    n.channel = p.channel;
                    n.min_satisfaction = p.min_satisfaction;
                }) else {
                    return false;
                };
                store.clear_customer_filter();
                store.set_customer_filter(next);
                true
            }
            DashboardTab::Interactions => {
                let patch = InteractionFilter {
                    channel: pick(&Channel::ALL, self.channel.as_deref(), Channel::as_str),
                    category: pick(
                        &InteractionCategory::ALL,
                        self.category.as_deref(),
                        InteractionCategory::as_str,
                    ),
                    priority: pick(&Priority::ALL, self.priority.as_deref(), Priority::as_str),
                    sentiment: pick(&Sentiment::ALL, self.sentiment.as_deref(), Sentiment::as_str),
                    tags: self.tags(),
                    ..InteractionFilter::default()
                };
                let Some(next) = next_criteria(&store.filters().interactions, patch, submitted, |n, p| {
                        n.channel = p.channel;
                        n.category = p.category;
                        n.priority = p.priority;
                        n.sentiment = p.sentiment;
                    }) else {
                    return false;
                };
                store.clear_interaction_filter();
                store.set_interaction_filter(next);
                true
            }
            DashboardTab::Complaints => {
                let patch = ComplaintFilter {
                    category: pick(
                        &ComplaintCategory::ALL,
                        self.category.as_deref(),
                        ComplaintCategory::as_str,
                    ),
                    severity: pick(&Severity::ALL, self.severity.as_deref(), Severity::as_str),
                    status: pick(
                        &ComplaintStatus::ALL,
                        self.status.as_deref(),
                        ComplaintStatus::as_str,
                    ),
                    tags: self.tags(),
                    ..ComplaintFilter::default()
                };
                let Some(next) = next_criteria(&store.filters().complaints, patch, submitted, |n, p| {
                    n.category = p.category;
                    n.severity = p.severity;
                    n.status = p.status;
                }) else {
                    return false;
                };
                store.clear_complaint_filter();
                store.set_complaint_filter(next);
                true
            }
            DashboardTab::Reviews => {
                let patch = ReviewFilter {
                    platform: pick(
                        &ReviewPlatform::ALL,
                        self.platform.as_deref(),
                        ReviewPlatform::as_str,
                    ),
                    sentiment: pick(&Sentiment::ALL, self.sentiment.as_deref(), Sentiment::as_str),
                    min_rating: number(self.min_rating.as_deref()),
                    verified: self.verified(),
                    tags: self.tags(),
                    ..ReviewFilter::default()
                };
                let Some(next) = next_criteria(&store.filters().reviews, patch, submitted, |n, p| {
                    n.platform = p.platform;
                    n.sentiment = p.sentiment;
                    n.min_rating = p.min_rating;
                    n.verified = p.verified;
                }) else {
                    return false;
                };
                store.clear_review_filter();
                store.set_review_filter(next);
                true
            }
            DashboardTab::Insights => {
                let patch = InsightFilter {
                    category: pick(
                        &InsightCategory::ALL,
                        self.category.as_deref(),
                        InsightCategory::as_str,
                    ),
                    impact: pick(&Impact::ALL, self.impact.as_deref(), Impact::as_str),
                    min_confidence: number(self.min_confidence.as_deref()),
                    ..InsightFilter::default()
                };
                let Some(next) = next_criteria(&store.filters().insights, patch, submitted, |n, p| {
                    n.category = p.category;
                    n.impact = p.impact;
                    n.min_confidence = p.min_confidence;
                }) else {
                    return false;
                };
                store.clear_insight_filter();
                store.set_insight_filter(next);
                true
            }
        }
    }
}

/// Criteria after applying `patch` to `current`, or `None` if nothing
/// changes. A submitted form owns the fields it shows (`take_shown` copies
/// them over, so "Any" removes a criterion); every other field, and every
/// field of a bare link, only changes when the patch sets it.
fn next_criteria<F: Filter + Clone + PartialEq>(
    current: &F,
    patch: F,
    submitted: bool,
    take_shown: impl FnOnce(&mut F, &F),
) -> Option<F> {
    let mut next = current.clone();
    if submitted {
        take_shown(&mut next, &patch);
    }
    next.merge(patch);
    (next != *current).then_some(next)
}

/// Rows of the active tab, already filtered.
enum TabRows {
    Customers(Vec<Customer>),
    Interactions(Vec<Interaction>),
    Complaints(Vec<Complaint>),
    Reviews(Vec<Review>),
    Insights(Vec<Insight>),
}

impl TabRows {
    fn collect(store: &AppStore, tab: DashboardTab) -> Self {
        match tab {
            DashboardTab::Customers => TabRows::Customers(store.filtered_customers()),
            DashboardTab::Interactions => TabRows::Interactions(store.filtered_interactions()),
            DashboardTab::Complaints => TabRows::Complaints(store.filtered_complaints()),
            DashboardTab::Reviews => TabRows::Reviews(store.filtered_reviews()),
            DashboardTab::Insights => TabRows::Insights(store.filtered_insights()),
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize {
        match self {
            TabRows::Customers(v) => v.len(),
            TabRows::Interactions(v) => v.len(),
            TabRows::Complaints(v) => v.len(),
            TabRows::Reviews(v) => v.len(),
            TabRows::Insights(v) => v.len(),
        }
    }
}

pub(super) async fn page(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let tab = DashboardTab::parse(query.tab.as_deref());

    let changed = query.apply(&mut *state.store.write().await, tab);
    if changed {
        tracing::debug!(tab = tab.key(), "dashboard filters updated from query");
        state.persist().await;
    }

    let store = state.store.read().await;
    let rows = TabRows::collect(&store, tab);
    let stats = store.dashboard_stats();
    let filters = store.filters().clone();
    drop(store);

    render_dashboard(user.email, tab, stats, filters, rows)
}

#[derive(Debug, Deserialize)]
pub(super) struct ClearForm {
    #[serde(default)]
    tab: Option<String>,
}

pub(super) async fn clear(State(state): State<AppState>, Form(form): Form<ClearForm>) -> Response {
    let tab = DashboardTab::parse(form.tab.as_deref());
    state.store.write().await.clear_filters();
    state.persist().await;
    see_other(&format!("/dashboard?tab={}", tab.key()))
}

fn render_dashboard(
    user: Option<String>,
    tab: DashboardTab,
    stats: DashboardStats,
    filters: Filters,
    rows: TabRows,
) -> Html<String> {
    let tabs = DashboardTab::ALL
        .into_iter()
        .map(|t| Tab {
            key: t.key(),
            label: t.label().to_string(),
            href: format!("/dashboard?tab={}", t.key()),
        })
        .collect::<Vec<_>>();
    let count = format!("{} matching {}", rows.len(), tab.label().to_lowercase());

    render(view! {
        <Shell title="Customer intelligence" user=user>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-3xl font-bold">"Customer intelligence"</h1>
                <div class="flex gap-4 text-sm">
                    <a href="/dashboard/competitive">"Competitive"</a>
                    <a href="/dashboard/nyc-restaurant">"NYC restaurant demo"</a>
                </div>
            </div>
            <StatsRow stats=stats />
            <Tabs tabs=tabs active=tab.key() />
            <div class="bg-white rounded-xl shadow p-6">
                <FilterForm tab=tab filters=filters />
                <p class="text-sm text-slate-500 mb-4">{count}</p>
                {rows_view(rows)}
            </div>
        </Shell>
    })
}

#[component]
fn StatsRow(stats: DashboardStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-6 mb-8">
            <StatCard label="Customers" value=stats.customer_count.to_string() />
            <StatCard
                label="Average satisfaction"
                value=format!("{:.1} / 10", stats.average_satisfaction)
            />
            <StatCard label="Lifetime value" value=money(stats.total_lifetime_value) />
            <StatCard label="Open complaints" value=stats.open_complaints.to_string() />
            <StatCard label="Average rating" value=format!("{:.1} ★", stats.average_rating) />
            <StatCard
                label="Negative interactions"
                value=format!("{:.0}%", stats.negative_interaction_pct)
            />
        </div>
    }
}

/// `(value, label)` pairs for a select.
type Options = Vec<(&'static str, &'static str)>;

fn options<T: Copy>(all: &[T], value: fn(T) -> &'static str, label: fn(T) -> &'static str) -> Options {
    all.iter().map(|v| (value(*v), label(*v))).collect()
}

#[component]
fn Select(
    name: &'static str,
    label: &'static str,
    options: Options,
    selected: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="filter">
            <span class="text-xs text-slate-500">{label}</span>
            <select name=name>
                <option value="">"Any"</option>
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        view! { <option value=value selected={selected == Some(value)}>{text}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
fn NumberInput(
    name: &'static str,
    label: &'static str,
    min: u8,
    max: u8,
    value: Option<u8>,
) -> impl IntoView {
    let value = value.map(|v| v.to_string()).unwrap_or_default();
    view! {
        <label class="filter">
            <span class="text-xs text-slate-500">{label}</span>
            <input
                type="number"
                name=name
                min=min.to_string()
                max=max.to_string()
                value=value
            />
        </label>
    }
}

#[component]
fn FilterForm(tab: DashboardTab, filters: Filters) -> impl IntoView {
    let fields = match tab {
        DashboardTab::Customers => {
            let f = filters.customers;
            view! {
                <label class="filter">
                    <span class="text-xs text-slate-500">"Name"</span>
                    <input type="search" name="search" value=f.search.unwrap_or_default() />
                </label>
                <Select
                    name="channel"
                    label="Preferred channel"
                    options=options(&Channel::ALL, Channel::as_str, Channel::label)
                    selected=f.channel.map(Channel::as_str)
                />
                <NumberInput
                    name="min_satisfaction"
                    label="Min satisfaction"
                    min=1
                    max=10
                    value=f.min_satisfaction
                />
            }
            .into_any()
        }
        DashboardTab::Interactions => {
            let f = filters.interactions;
            view! {
                <Select
                    name="channel"
                    label="Channel"
                    options=options(&Channel::ALL, Channel::as_str, Channel::label)
                    selected=f.channel.map(Channel::as_str)
                />
                <Select
                    name="category"
                    label="Category"
                    options=options(
                        &InteractionCategory::ALL,
                        InteractionCategory::as_str,
                        InteractionCategory::label,
                    )
                    selected=f.category.map(InteractionCategory::as_str)
                />
                <Select
                    name="priority"
                    label="Priority"
                    options=options(&Priority::ALL, Priority::as_str, Priority::label)
                    selected=f.priority.map(Priority::as_str)
                />
                <Select
                    name="sentiment"
                    label="Sentiment"
                    options=options(&Sentiment::ALL, Sentiment::as_str, Sentiment::label)
                    selected=f.sentiment.map(Sentiment::as_str)
                />
            }
            .into_any()
        }
        DashboardTab::Complaints => {
            let f = filters.complaints;
            view! {
                <Select
                    name="category"
                    label="Category"
                    options=options(
                        &ComplaintCategory::ALL,
                        ComplaintCategory::as_str,
                        ComplaintCategory::label,
                    )
                    selected=f.category.map(ComplaintCategory::as_str)
                />
                <Select
                    name="severity"
                    label="Severity"
                    options=options(&Severity::ALL, Severity::as_str, Severity::label)
                    selected=f.severity.map(Severity::as_str)
                />
                <Select
                    name="status"
                    label="Status"
                    options=options(
                        &ComplaintStatus::ALL,
                        ComplaintStatus::as_str,
                        ComplaintStatus::label,
                    )
                    selected=f.status.map(ComplaintStatus::as_str)
                />
            }
            .into_any()
        }
        DashboardTab::Reviews => {
            let f = filters.reviews;
            view! {
                <Select
                    name="platform"
                    label="Platform"
                    options=options(&ReviewPlatform::ALL, ReviewPlatform::as_str, ReviewPlatform::label)
                    selected=f.platform.map(ReviewPlatform::as_str)
                />
                <Select
                    name="sentiment"
                    label="Sentiment"
                    options=options(&Sentiment::ALL, Sentiment::as_str, Sentiment::label)
                    selected=f.sentiment.map(Sentiment::as_str)
                />
                <NumberInput name="min_rating" label="Min rating" min=1 max=5 value=f.min_rating />
                <Select
                    name="verified"
                    label="Verified"
                    options=vec![("true", "Verified only"), ("false", "Unverified only")]
                    selected=f.verified.map(|v| if v { "true" } else { "false" })
                />
            }
            .into_any()
        }
        DashboardTab::Insights => {
            let f = filters.insights;
            view! {
                <Select
                    name="category"
                    label="Category"
                    options=options(&InsightCategory::ALL, InsightCategory::as_str, InsightCategory::label)
                    selected=f.category.map(InsightCategory::as_str)
                />
                <Select
                    name="impact"
                    label="Impact"
                    options=options(&Impact::ALL, Impact::as_str, Impact::label)
                    selected=f.impact.map(Impact::as_str)
                />
                <NumberInput
                    name="min_confidence"
                    label="Min confidence"
                    min=0
                    max=100
                    value=f.min_confidence
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="flex items-end gap-4 mb-4">
            <form method="get" action="/dashboard" class="flex items-end gap-4">
                <input type="hidden" name="tab" value=tab.key() />
                <input type="hidden" name="submitted" value="1" />
                {fields}
                <Button variant=ButtonVariant::Secondary>"Apply"</Button>
            </form>
            <form method="post" action="/dashboard/clear">
                <input type="hidden" name="tab" value=tab.key() />
                <Button variant=ButtonVariant::Ghost>"Clear all filters"</Button>
            </form>
        </div>
    }
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn empty_state() -> AnyView {
    view! { <p class="text-slate-500 py-8 text-center">"Nothing matches these filters."</p> }
        .into_any()
}

fn rows_view(rows: TabRows) -> AnyView {
    if rows.is_empty() {
        return empty_state();
    }
    match rows {
        TabRows::Customers(items) => view! {
            <table>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Channel"</th>
                    <th>"Satisfaction"</th>
                    <th>"Lifetime value"</th>
                    <th>"Last contact"</th>
                </tr>
                {items.into_iter().map(|c| view! {
                    <tr>
                        <td class="font-medium">{c.name}</td>
                        <td>{c.email}</td>
                        <td><Badge tone=c.preferred_channel.tone() label=c.preferred_channel.label() /></td>
                        <td>{format!("{}/10", c.satisfaction)}</td>
                        <td>{money(c.lifetime_value)}</td>
                        <td>{short_date(c.last_interaction_at)}</td>
                    </tr>
                }).collect::<Vec<_>>()}
            </table>
        }
        .into_any(),
        TabRows::Interactions(items) => view! {
            <table>
                <tr>
                    <th>"Date"</th>
                    <th>"Summary"</th>
                    <th>"Channel"</th>
                    <th>"Category"</th>
                    <th>"Priority"</th>
                    <th>"Sentiment"</th>
                </tr>
                {items.into_iter().map(|i| view! {
                    <tr>
                        <td>{short_date(i.occurred_at)}</td>
                        <td>{i.summary}</td>
                        <td>{i.channel.label()}</td>
                        <td>{i.category.label()}</td>
                        <td><Badge tone=i.priority.tone() label=i.priority.label() /></td>
                        <td><Badge tone=i.sentiment.tone() label=i.sentiment.label() /></td>
                    </tr>
                }).collect::<Vec<_>>()}
            </table>
        }
        .into_any(),
        TabRows::Complaints(items) => view! {
            <table>
                <tr>
                    <th>"Opened"</th>
                    <th>"Description"</th>
                    <th>"Category"</th>
                    <th>"Severity"</th>
                    <th>"Status"</th>
                </tr>
                {items.into_iter().map(|c| view! {
                    <tr>
                        <td>{short_date(c.created_at)}</td>
                        <td>{c.description}</td>
                        <td>{c.category.label()}</td>
                        <td><Badge tone=c.severity.tone() label=c.severity.label() /></td>
                        <td><Badge tone=c.status.tone() label=c.status.label() /></td>
                    </tr>
                }).collect::<Vec<_>>()}
            </table>
        }
        .into_any(),
        TabRows::Reviews(items) => view! {
            <table>
                <tr>
                    <th>"Date"</th>
                    <th>"Platform"</th>
                    <th>"Rating"</th>
                    <th>"Review"</th>
                    <th>"Sentiment"</th>
                </tr>
                {items.into_iter().map(|r| view! {
                    <tr>
                        <td>{short_date(r.published_at)}</td>
                        <td>
                            {r.platform.label()}
                            {r.verified.then(|| view! { <span class="text-xs text-emerald-700">" ✓ verified"</span> })}
                        </td>
                        <td class="stars">{stars(r.rating)}</td>
                        <td>{r.text}</td>
                        <td><Badge tone=r.sentiment.tone() label=r.sentiment.label() /></td>
                    </tr>
                }).collect::<Vec<_>>()}
            </table>
        }
        .into_any(),
        TabRows::Insights(items) => view! {
            <div class="grid grid-cols-2 gap-6">
                {items.into_iter().map(|i| view! {
                    <div class="rounded-xl border border-slate-300 p-4">
                        <div class="flex justify-between items-center mb-2">
                            <Badge tone=i.category.tone() label=i.category.label() />
                            <Badge tone=i.impact.tone() label=i.impact.label() />
                        </div>
                        <h3 class="font-semibold mb-2">{i.title}</h3>
                        <p class="text-sm text-slate-500 mb-2">{i.description}</p>
                        <p class="text-xs text-slate-500">{format!("{}% confidence", i.confidence)}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &str) -> DashboardQuery {
        serde_json::from_str(pairs).expect("query")
    }

    #[test]
    fn unknown_tab_falls_back_to_customers() {
        assert_eq!(DashboardTab::parse(Some("nope")), DashboardTab::Customers);
        assert_eq!(DashboardTab::parse(Some("reviews")), DashboardTab::Reviews);
    }

    #[test]
    fn empty_fields_in_a_link_leave_criteria_untouched() {
        let mut store = AppStore::new();
        store.set_review_filter(ReviewFilter {
            min_rating: Some(4),
            ..ReviewFilter::default()
        });
        let q = query(r#"{"tab":"reviews","platform":"","min_rating":""}"#);
        assert!(!q.apply(&mut store, DashboardTab::Reviews));
        assert_eq!(store.filters().reviews.min_rating, Some(4));
    }

    #[test]
    fn query_merges_into_existing_criteria() {
        let mut store = AppStore::new();
        store.set_review_filter(ReviewFilter {
            min_rating: Some(4),
            ..ReviewFilter::default()
        });
        let q = query(r#"{"sentiment":"negative","verified":"true"}"#);
        assert!(q.apply(&mut store, DashboardTab::Reviews));
        let reviews = &store.filters().reviews;
        assert_eq!(reviews.min_rating, Some(4));
        assert_eq!(reviews.sentiment, Some(Sentiment::Negative));
        assert_eq!(reviews.verified, Some(true));
    }

    #[test]
    fn submitted_form_with_any_drops_the_criterion() {
        let mut store = AppStore::new();
        store.set_review_filter(ReviewFilter {
            platform: Some(ReviewPlatform::Yelp),
            min_rating: Some(4),
            tags: Some(vec!["vip".to_string()]),
            ..ReviewFilter::default()
        });
        let q = query(r#"{"tab":"reviews","submitted":"1","platform":"","min_rating":"4"}"#);
        assert!(q.apply(&mut store, DashboardTab::Reviews));
        let reviews = &store.filters().reviews;
        assert_eq!(reviews.platform, None);
        assert_eq!(reviews.min_rating, Some(4));
        // Not on the form, so untouched.
        assert_eq!(reviews.tags, Some(vec!["vip".to_string()]));
    }

    #[test]
    fn resubmitting_the_same_form_changes_nothing() {
        let mut store = AppStore::new();
        let q = query(r#"{"tab":"complaints","submitted":"1","severity":"critical"}"#);
        assert!(q.apply(&mut store, DashboardTab::Complaints));
        assert!(!q.apply(&mut store, DashboardTab::Complaints));
        assert_eq!(store.filters().complaints.severity, Some(Severity::Critical));
    }

    #[test]
    fn filter_form_marks_itself_as_submitted() {
        let Html(html) = render_dashboard(
            None,
            DashboardTab::Reviews,
            AppStore::new().dashboard_stats(),
            Filters::default(),
            TabRows::Reviews(vec![]),
        );
        assert!(html.contains("name=\"submitted\""));
    }

    #[test]
    fn stars_caps_at_five() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn dashboard_marks_selected_filter_option() {
        let mut filters = Filters::default();
        filters.complaints.severity = Some(Severity::Critical);
        let Html(html) = render_dashboard(
            None,
            DashboardTab::Complaints,
            AppStore::new().dashboard_stats(),
            filters,
            TabRows::Complaints(vec![]),
        );
        assert!(html.contains("Nothing matches these filters."));
        assert!(html.contains("value=\"critical\""));
        assert!(html.contains("selected"));
    }
}
