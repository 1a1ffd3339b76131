use axum::{extract::State, response::Html};
use bizlens_core::VerticalPage;
use leptos::prelude::*;

use crate::auth::CurrentUser;
use crate::state::AppState;

use super::layout::Shell;
use super::render;
use super::ui::{ButtonVariant, Card, LinkButton};

pub(super) async fn page(State(state): State<AppState>, user: CurrentUser) -> Html<String> {
    render_home(user.email, state.verticals.verticals.clone())
}

fn render_home(user: Option<String>, verticals: Vec<VerticalPage>) -> Html<String> {
    render(view! {
        <Shell title="Local business intelligence" user=user>
            <section class="hero text-center py-16">
                <h1 class="text-5xl font-bold mb-4">
                    "Know your customers. Know your competitors."
                </h1>
                <p class="text-xl text-slate-500 mb-8">
                    "bizlens reads every review, complaint and mention about your business and the ones down the street, then tells you what to do next."
                </p>
                <div class="flex justify-center gap-4">
                    <LinkButton href="/demo">"Run a free analysis"</LinkButton>
                    <LinkButton href="/dashboard" variant=ButtonVariant::Secondary>
                        "See a sample dashboard"
                    </LinkButton>
                </div>
            </section>

            <section class="py-8">
                <h2 class="text-3xl font-bold text-center mb-8">"Built for your industry"</h2>
                <div class="grid grid-cols-2 gap-6">
                    {verticals
                        .into_iter()
                        .map(|v| {
                            let href = format!("/{}", v.slug());
                            view! {
                                <Card title=v.industry.label().to_string()>
                                    <p class="text-slate-500 mb-4">{v.subheadline}</p>
                                    <a href=href class="font-semibold text-indigo-700">
                                        {v.cta_label}
                                    </a>
                                </Card>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="py-8">
                <div class="grid grid-cols-3 gap-6">
                    <Card title="Customer intelligence">
                        <p class="text-slate-500">
                            "Every interaction, complaint and review in one filtered view."
                        </p>
                    </Card>
                    <Card title="Competitive intelligence">
                        <p class="text-slate-500">
                            "Ratings, price levels and complaint themes for every nearby rival."
                        </p>
                        <a href="/dashboard/competitive" class="text-indigo-700">"Open"</a>
                    </Card>
                    <Card title="NYC restaurant demo">
                        <p class="text-slate-500">
                            "A live-style market snapshot for any Manhattan or Brooklyn zip."
                        </p>
                        <a href="/dashboard/nyc-restaurant" class="text-indigo-700">"Open"</a>
                    </Card>
                </div>
            </section>
        </Shell>
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizlens_core::{verticals::ContentBlock, Industry};

    #[test]
    fn home_links_each_vertical() {
        let page = VerticalPage {
            industry: Industry::CarWashes,
            headline: "Shine".to_string(),
            subheadline: "More members".to_string(),
            pain_points: vec![],
            features: vec![ContentBlock {
                title: "Queue watch".to_string(),
                body: "b".to_string(),
            }],
            stats: vec![],
            testimonial: None,
            cta_label: "Analyze my wash".to_string(),
        };
        let Html(html) = render_home(None, vec![page]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("href=\"/car-washes\""));
        assert!(html.contains("Analyze my wash"));
        assert!(html.contains("Sign in"));
    }
}
