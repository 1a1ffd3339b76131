use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use leptos::prelude::*;

use crate::auth::CurrentUser;

use super::layout::Shell;
use super::render;
use super::ui::LinkButton;

/// Router fallback.
pub async fn not_found(user: CurrentUser) -> Response {
    render_not_found(user.email)
}

pub(super) fn render_not_found(user: Option<String>) -> Response {
    let html = render(view! {
        <Shell title="Page not found" user=user>
            <section class="text-center py-16">
                <p class="text-5xl font-bold text-indigo-700 mb-4">"404"</p>
                <h1 class="text-2xl font-bold mb-4">"We couldn't find that page"</h1>
                <p class="text-slate-500 mb-8">
                    "The link may be broken or the page may have moved."
                </p>
                <LinkButton href="/">"Back to home"</LinkButton>
            </section>
        </Shell>
    });
    (StatusCode::NOT_FOUND, html).into_response()
}
