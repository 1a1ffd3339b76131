use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use bizlens_core::Tone;
use leptos::prelude::*;
use serde::Deserialize;

use crate::auth::{expired_session_cookie, friendly_message, session_cookie, CurrentUser};
use crate::state::AppState;

use super::layout::Shell;
use super::ui::{Alert, Button, Card, Field};
use super::{render, see_other};

#[derive(Debug, Default, Deserialize)]
pub(super) struct Credentials {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    SignUp,
}

impl Mode {
    fn title(self) -> &'static str {
        match self {
            Mode::SignIn => "Sign in",
            Mode::SignUp => "Create your account",
        }
    }

    fn action(self) -> &'static str {
        match self {
            Mode::SignIn => "/sign-in",
            Mode::SignUp => "/sign-up",
        }
    }
}

pub(super) async fn sign_in_form(user: CurrentUser) -> Html<String> {
    render_auth(user.email, Mode::SignIn, "", None)
}

pub(super) async fn sign_up_form(user: CurrentUser) -> Html<String> {
    render_auth(user.email, Mode::SignUp, "", None)
}

pub(super) async fn sign_in(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(credentials): Form<Credentials>,
) -> Response {
    let result = state
        .accounts
        .sign_in(&state.config.auth_salt, &credentials.email, &credentials.password)
        .await;
    finish(user, Mode::SignIn, &credentials, result)
}

pub(super) async fn sign_up(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(credentials): Form<Credentials>,
) -> Response {
    let result = state
        .accounts
        .sign_up(&state.config.auth_salt, &credentials.email, &credentials.password)
        .await;
    finish(user, Mode::SignUp, &credentials, result)
}

fn finish(
    user: CurrentUser,
    mode: Mode,
    credentials: &Credentials,
    result: Result<String, crate::auth::AuthError>,
) -> Response {
    match result {
        Ok(token) => {
            let mut response = see_other("/dashboard");
            if let Ok(cookie) = session_cookie(&token).parse() {
                response.headers_mut().insert(SET_COOKIE, cookie);
            }
            response
        }
        Err(e) => {
            tracing::debug!(error = %e, "demo auth rejected");
            let message = friendly_message(&e.to_string());
            let html = render_auth(user.email, mode, &credentials.email, Some(message));
            (StatusCode::UNPROCESSABLE_ENTITY, html).into_response()
        }
    }
}

pub(super) async fn sign_out(State(state): State<AppState>, user: CurrentUser) -> Response {
    if let Some(token) = &user.token {
        state.accounts.sign_out(token).await;
    }
    let mut response = see_other("/");
    if let Ok(cookie) = expired_session_cookie().parse() {
        response.headers_mut().insert(SET_COOKIE, cookie);
    }
    response
}

fn render_auth(
    user: Option<String>,
    mode: Mode,
    email: &str,
    error: Option<String>,
) -> Html<String> {
    let (switch_text, switch_href, switch_label) = match mode {
        Mode::SignIn => ("New to bizlens?", "/sign-up", "Create an account"),
        Mode::SignUp => ("Already have an account?", "/sign-in", "Sign in"),
    };
    let email = email.to_string();

    render(view! {
        <Shell title=mode.title() user=user>
            <div class="max-w-md mx-auto">
                <h1 class="text-3xl font-bold mb-8 text-center">{mode.title()}</h1>
                {error.map(|e| view! { <Alert tone=Tone::Critical>{e}</Alert> })}
                <Card>
                    <form method="post" action=mode.action()>
                        <Field name="email" label="Email" value=email kind="email" />
                        <Field name="password" label="Password" value="" kind="password" />
                        <Button class="w-full">{mode.title()}</Button>
                    </form>
                </Card>
                <p class="text-sm text-slate-500 text-center mt-4">
                    {switch_text} " " <a href=switch_href class="text-indigo-700">{switch_label}</a>
                </p>
            </div>
        </Shell>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_sign_up_keeps_email_and_shows_friendly_text() {
        let credentials = Credentials {
            email: "owner@shinebros.test".to_string(),
            password: "123".to_string(),
        };
        let response = finish(
            CurrentUser::default(),
            Mode::SignUp,
            &credentials,
            Err(crate::auth::AuthError::WeakPassword),
        );
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.headers().get(SET_COOKIE).is_none());
    }

    #[test]
    fn successful_sign_in_sets_cookie_and_redirects() {
        let response = finish(
            CurrentUser::default(),
            Mode::SignIn,
            &Credentials::default(),
            Ok("abc123".to_string()),
        );
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .expect("cookie");
        assert!(cookie.starts_with("bizlens_session=abc123"));
    }

    #[test]
    fn form_renders_error_and_switch_link() {
        let Html(html) = render_auth(
            None,
            Mode::SignIn,
            "a@b.test",
            Some("That email and password don't match an account.".to_string()),
        );
        assert!(html.contains("match an account"));
        assert!(html.contains("href=\"/sign-up\""));
        assert!(html.contains("value=\"a@b.test\""));
    }
}
