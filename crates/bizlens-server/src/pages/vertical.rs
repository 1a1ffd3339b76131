use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use bizlens_core::{Industry, VerticalPage};
use leptos::prelude::*;

use crate::auth::CurrentUser;
use crate::state::AppState;

use super::layout::Shell;
use super::render;
use super::ui::{ButtonVariant, Card, LinkButton, StatCard};

/// Landing page for one industry, or the not-found page for any other
/// single-segment path.
pub(super) async fn page(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(slug): Path<String>,
) -> Response {
    let content = Industry::from_slug(&slug).and_then(|i| state.verticals.find(i).cloned());
    match content {
        Some(content) => render_vertical(user.email, content).into_response(),
        None => super::not_found::render_not_found(user.email),
    }
}

fn render_vertical(user: Option<String>, page: VerticalPage) -> Html<String> {
    let industry = page.industry;
    let demo_href = format!("/demo?industry={}", industry.slug());
    render(view! {
        <Shell title=industry.label().to_string() user=user>
            <section class="hero py-16">
                <p class="text-sm font-semibold text-indigo-700 mb-2">
                    {format!("bizlens for {}", industry.label().to_lowercase())}
                </p>
                <h1 class="text-4xl font-bold mb-4">{page.headline}</h1>
                <p class="text-xl text-slate-500 mb-8">{page.subheadline}</p>
                <LinkButton href=demo_href>{page.cta_label}</LinkButton>
            </section>

            {(!page.pain_points.is_empty()).then(|| view! {
                <section class="py-8">
                    <h2 class="text-2xl font-bold mb-4">"Sound familiar?"</h2>
                    <div class="grid grid-cols-2 gap-6">
                        {page.pain_points.into_iter().map(|p| view! {
                            <Card title=p.title>
                                <p class="text-slate-500">{p.body}</p>
                            </Card>
                        }).collect::<Vec<_>>()}
                    </div>
                </section>
            })}

            <section class="py-8">
                <h2 class="text-2xl font-bold mb-4">"What you get"</h2>
                <div class="grid grid-cols-3 gap-6">
                    {page.features.into_iter().map(|f| view! {
                        <Card title=f.title>
                            <p class="text-slate-500">{f.body}</p>
                        </Card>
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            {(!page.stats.is_empty()).then(|| view! {
                <section class="py-8 grid grid-cols-3 gap-6">
                    {page.stats.into_iter().map(|s| view! {
                        <StatCard label=s.label value=s.value />
                    }).collect::<Vec<_>>()}
                </section>
            })}

            {page.testimonial.map(|t| view! {
                <section class="py-8">
                    <blockquote class="bg-white rounded-xl shadow p-6">
                        <p class="text-lg mb-4">{format!("\u{201c}{}\u{201d}", t.quote)}</p>
                        <footer class="text-sm text-slate-500">
                            {format!("{}, {}", t.author, t.business)}
                        </footer>
                    </blockquote>
                </section>
            })}

            <section class="py-8 text-center">
                <LinkButton href="/dashboard" variant=ButtonVariant::Secondary>
                    "Browse the sample dashboard"
                </LinkButton>
            </section>
        </Shell>
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizlens_core::verticals::{ContentBlock, Testimonial};

    fn hospitality() -> VerticalPage {
        VerticalPage {
            industry: Industry::Hospitality,
            headline: "Every stay, five stars".to_string(),
            subheadline: "Guest sentiment across every platform".to_string(),
            pain_points: vec![],
            features: vec![ContentBlock {
                title: "Guest radar".to_string(),
                body: "See complaints before checkout".to_string(),
            }],
            stats: vec![],
            testimonial: Some(Testimonial {
                quote: "Our rating went up".to_string(),
                author: "Sam".to_string(),
                business: "Harbor Inn".to_string(),
            }),
            cta_label: "Analyze my hotel".to_string(),
        }
    }

    #[test]
    fn vertical_page_prefills_demo_industry() {
        let Html(body) = render_vertical(None, hospitality());
        assert!(body.contains("/demo?industry=hospitality"));
        assert!(body.contains("Every stay, five stars"));
        assert!(body.contains("Harbor Inn"));
        assert!(!body.contains("Sound familiar?"));
    }
}
