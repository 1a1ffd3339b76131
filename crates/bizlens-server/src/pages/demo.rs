//! The demo wizard in the browser: the input form, then a page that polls
//! the running session with a meta refresh until the summary is ready.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use bizlens_core::{Industry, Insight, Tone};
use bizlens_wizard::{
    AnalysisOutcome, AnalysisStep, InsightOrigin, WizardError, WizardField, WizardState,
};
use leptos::prelude::*;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::demo::{DemoRequest, SessionView};
use crate::state::AppState;

use super::layout::Shell;
use super::ui::{
    Alert, Badge, Button, ButtonVariant, Card, Field, LinkButton, ProgressBar, StatCard,
};
use super::{not_found::render_not_found, render, see_other};

#[derive(Debug, Default, Deserialize)]
pub(super) struct FormQuery {
    industry: Option<String>,
}

pub(super) async fn form(user: CurrentUser, Query(query): Query<FormQuery>) -> Html<String> {
    let prefill = DemoRequest {
        industry: query.industry.unwrap_or_default(),
        ..DemoRequest::default()
    };
    render_form(user.email, &prefill, &[])
}

/// Validate, create the session and start it straight away, then send the
/// browser to the progress page.
pub(super) async fn submit(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(request): Form<DemoRequest>,
) -> Response {
    let id = match state.sessions.create(&state, &request).await {
        Ok(id) => id,
        Err(WizardError::MissingFields(missing)) => {
            let html = render_form(user.email, &request, &missing);
            return (StatusCode::UNPROCESSABLE_ENTITY, html).into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "demo session could not be created");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if let Err(e) = state.sessions.start(id).await {
        tracing::warn!(session = %id, error = ?e, "fresh demo session did not start");
    }
    see_other(&format!("/demo/{id}"))
}

pub(super) async fn session(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(raw_id): Path<String>,
) -> Response {
    let Ok(id) = Uuid::parse_str(&raw_id) else {
        return render_not_found(user.email);
    };
    let Some(view) = state.sessions.get(id).await else {
        return render_not_found(user.email);
    };
    let summary_refresh = u32::try_from(state.timing.summary_delay.as_secs())
        .unwrap_or(u32::MAX)
        .max(1);
    render_session(user.email, view, summary_refresh).into_response()
}

fn render_form(user: Option<String>, values: &DemoRequest, missing: &[WizardField]) -> Html<String> {
    let error_for = |field: WizardField| {
        missing
            .contains(&field)
            .then(|| format!("{} is required", field.label()))
    };
    let name_error = error_for(WizardField::BusinessName);
    let zip_error = error_for(WizardField::ZipCode);
    let industry_error = error_for(WizardField::Industry);
    let summary = (!missing.is_empty()).then(|| {
        let labels = missing.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ");
        format!("Please fill in: {labels}")
    });
    let business_name = values.business_name.clone();
    let zip_code = values.zip_code.clone();
    let chosen = Industry::from_input(&values.industry);
    let has_choice = !values.industry.trim().is_empty();

    render(view! {
        <Shell title="Free business analysis" user=user>
            <div class="max-w-xl mx-auto">
                <h1 class="text-3xl font-bold mb-2">"See what bizlens finds about your business"</h1>
                <p class="text-slate-500 mb-8">
                    "Tell us who you are. We'll scan competitors, reviews and social chatter in about a minute."
                </p>
                {summary.map(|s| view! { <Alert tone=Tone::Critical>{s}</Alert> })}
                <form method="post" action="/demo" class="bg-white rounded-xl shadow p-6">
                    <Field
                        name="business_name"
                        label="Business name"
                        value=business_name
                        error=name_error
                    />
                    <Field
                        name="zip_code"
                        label="Zip code"
                        value=zip_code
                        error=zip_error
                    />
                    <label class="block mb-4">
                        <span class="block text-sm font-medium mb-1">"Industry"</span>
                        <select name="industry" class="w-full rounded-lg border border-slate-300 px-3 py-2">
                            <option value="">"Choose your industry"</option>
                            {Industry::VERTICALS
                                .into_iter()
                                .chain([Industry::Other])
                                .map(|i| view! {
                                    <option value=i.slug() selected={has_choice && i == chosen}>{i.label()}</option>
                                })
                                .collect::<Vec<_>>()}
                        </select>
                        {industry_error.map(|e| view! { <span class="block text-sm text-rose-700 mt-1">{e}</span> })}
                    </label>
                    <Button class="w-full">"Analyze my business"</Button>
                </form>
            </div>
        </Shell>
    })
}

fn render_session(user: Option<String>, session: SessionView, summary_refresh: u32) -> Html<String> {
    match session.state {
        WizardState::Analyzing { step, progress } => {
            render_progress(user, session.started, step, progress)
        }
        WizardState::Complete { outcome } => render_results(user, outcome, summary_refresh),
        WizardState::Summary { outcome } => render_summary(user, outcome),
        // Sessions are registered only after a successful submit.
        WizardState::Idle | WizardState::CollectingInput { .. } => render_progress(user, false, 0, 0),
    }
}

fn render_progress(user: Option<String>, started: bool, step: usize, progress: u8) -> Html<String> {
    let caption = if started {
        AnalysisStep::ALL
            .get(step)
            .map_or("Finishing up", |s| s.label())
            .to_string()
    } else {
        "Waiting to start".to_string()
    };
    let steps = AnalysisStep::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let (marker, class) = match i.cmp(&step) {
                std::cmp::Ordering::Less => ("✓", "step step-done"),
                std::cmp::Ordering::Equal if started => ("…", "step step-active"),
                _ => ("○", "step"),
            };
            view! { <li class=class>{format!("{marker} {}", s.label())}</li> }
        })
        .collect::<Vec<_>>();

    render(view! {
        <Shell title="Analyzing" user=user refresh_secs=1>
            <div class="max-w-xl mx-auto">
                <h1 class="text-3xl font-bold mb-8">"Analyzing your business"</h1>
                <Card>
                    <ProgressBar value=progress label=format!("{progress}% · {caption}") />
                    <ul class="mt-4">{steps}</ul>
                </Card>
            </div>
        </Shell>
    })
}

fn insight_cards(insights: Vec<Insight>) -> Vec<AnyView> {
    insights
        .into_iter()
        .map(|i| {
            view! {
                <Card tone=i.category.tone()>
                    <div class="flex justify-between items-center mb-2">
                        <Badge tone=i.category.tone() label=i.category.label() />
                        <span class="text-xs text-slate-500">{format!("{}% confidence", i.confidence)}</span>
                    </div>
                    <h3 class="font-semibold mb-2">{i.title}</h3>
                    <p class="text-sm text-slate-500">{i.description}</p>
                </Card>
            }
            .into_any()
        })
        .collect()
}

fn fallback_notice(origin: &InsightOrigin) -> Option<AnyView> {
    match origin {
        InsightOrigin::Generated => None,
        InsightOrigin::Fallback { reason } => {
            let reason = reason.clone();
            Some(
                view! {
                    <Alert tone=Tone::Caution>
                        <p class="font-semibold">"Partial results"</p>
                        <p class="text-sm">
                            "We couldn't finish every step, so this is an estimate based on similar businesses."
                        </p>
                        <p class="text-xs mt-2">{reason}</p>
                    </Alert>
                }
                .into_any(),
            )
        }
    }
}

fn render_results(user: Option<String>, outcome: AnalysisOutcome, refresh: u32) -> Html<String> {
    let heading = format!("Here's what we found for {}", outcome.profile.name);
    let notice = fallback_notice(&outcome.origin);
    let cards = insight_cards(outcome.insights);

    render(view! {
        <Shell title="Your results" user=user refresh_secs=refresh>
            <h1 class="text-3xl font-bold mb-4">{heading}</h1>
            {notice}
            <div class="grid grid-cols-2 gap-6">{cards}</div>
        </Shell>
    })
}

fn render_summary(user: Option<String>, outcome: AnalysisOutcome) -> Html<String> {
    let heading = format!("{} at a glance", outcome.profile.name);
    let subtitle = format!(
        "{} · {}",
        outcome.profile.industry.label(),
        outcome.profile.zip_code
    );
    let insight_count = outcome.insights.len();
    let high_impact = outcome
        .insights
        .iter()
        .filter(|i| i.impact == bizlens_core::Impact::High)
        .count();
    let origin = if outcome.is_fallback() {
        "Estimated"
    } else {
        "Analyzed"
    };
    let notice = fallback_notice(&outcome.origin);
    let mut top = outcome.insights;
    top.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    top.truncate(3);
    let cards = insight_cards(top);

    render(view! {
        <Shell title="Your summary" user=user>
            <h1 class="text-3xl font-bold mb-2">{heading}</h1>
            <p class="text-slate-500 mb-8">{subtitle}</p>
            {notice}
            <div class="grid grid-cols-3 gap-6 mb-8">
                <StatCard label="Insights" value=insight_count.to_string() />
                <StatCard label="High impact" value=high_impact.to_string() />
                <StatCard label="Data" value=origin />
            </div>
            <h2 class="text-2xl font-bold mb-4">"Top findings"</h2>
            <div class="grid grid-cols-3 gap-6 mb-8">{cards}</div>
            <div class="flex gap-4">
                <LinkButton href="/sign-up">"Create a free account"</LinkButton>
                <LinkButton href="/dashboard" variant=ButtonVariant::Secondary>"Explore the dashboard"</LinkButton>
                <LinkButton href="/demo" variant=ButtonVariant::Ghost>"Analyze another business"</LinkButton>
            </div>
        </Shell>
    })
}
