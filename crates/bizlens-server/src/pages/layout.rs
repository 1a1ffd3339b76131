//! Document shell: head, top navigation with the signed-in user, footer.

use bizlens_core::Industry;
use leptos::prelude::*;

use super::styles::APP_CSS;

#[component]
pub fn Shell(
    #[prop(into)] title: String,
    user: Option<String>,
    /// Seconds after which the browser reloads the page.
    #[prop(optional)]
    refresh_secs: Option<u32>,
    children: Children,
) -> impl IntoView {
    let page_title = format!("{title} | bizlens");
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                {refresh_secs.map(|s| view! { <meta http-equiv="refresh" content=s.to_string() /> })}
                <title>{page_title}</title>
                <style>{APP_CSS}</style>
            </head>
            <body class="bg-slate-50 text-slate-900">
                <header class="site-header">
                    <div class="container flex items-center justify-between py-4">
                        <a href="/" class="text-xl font-bold text-indigo-700">"bizlens"</a>
                        <nav class="flex items-center gap-4 text-sm">
                            {Industry::VERTICALS
                                .into_iter()
                                .map(|i| view! { <a href=format!("/{}", i.slug())>{i.label()}</a> })
                                .collect::<Vec<_>>()}
                            <a href="/dashboard">"Dashboard"</a>
                            <a href="/demo" class="font-semibold text-indigo-700">"Try the demo"</a>
                            <UserMenu user=user />
                        </nav>
                    </div>
                </header>
                <main class="container py-8">{children()}</main>
                <footer class="container py-8 text-sm text-slate-500">
                    "bizlens is a product demo. All dashboard figures are generated sample data."
                </footer>
            </body>
        </html>
    }
}

#[component]
fn UserMenu(user: Option<String>) -> impl IntoView {
    match user {
        Some(email) => view! {
            <span class="text-slate-500">{email}</span>
            <a href="/settings">"Settings"</a>
            <form method="post" action="/sign-out" class="inline">
                <button type="submit" class="link">"Sign out"</button>
            </form>
        }
        .into_any(),
        None => view! {
            <a href="/sign-in">"Sign in"</a>
            <a href="/sign-up" class="font-semibold">"Sign up"</a>
        }
        .into_any(),
    }
}
