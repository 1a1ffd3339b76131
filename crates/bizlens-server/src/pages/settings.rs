use std::collections::HashMap;
use std::sync::LazyLock;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use bizlens_core::{BusinessSettings, Tone};
use leptos::prelude::*;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::state::AppState;

use super::layout::Shell;
use super::ui::{Alert, Button, Card, Field};
use super::{render, see_other};

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("valid zip regex"));
// Blank is allowed; the phone number is optional.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+?\d[\d ().-]{6,18}\d)?$").expect("valid phone regex"));

/// Raw form post. Every field arrives as text; an unchecked checkbox is
/// simply absent.
#[derive(Debug, Default, Deserialize)]
pub(super) struct SettingsInput {
    #[serde(default)]
    business_name: String,
    #[serde(default)]
    contact_email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    zip_code: String,
    #[serde(default)]
    weekly_report: Option<String>,
    #[serde(default)]
    alert_threshold: String,
}

#[derive(Debug, Validate)]
struct SettingsForm {
    #[validate(length(min = 2, max = 80, message = "Business name must be 2 to 80 characters"))]
    business_name: String,
    #[validate(email(message = "Enter a valid email address"))]
    contact_email: String,
    #[validate(regex(path = "PHONE_RE", message = "Enter a phone number like (555) 123-4567"))]
    phone: String,
    #[validate(regex(path = "ZIP_RE", message = "Zip code must be 5 digits"))]
    zip_code: String,
    weekly_report: bool,
    #[validate(range(min = 1, max = 5, message = "Alert threshold must be between 1 and 5"))]
    alert_threshold: u8,
}

impl From<SettingsInput> for SettingsForm {
    fn from(input: SettingsInput) -> Self {
        Self {
            business_name: input.business_name.trim().to_string(),
            contact_email: input.contact_email.trim().to_string(),
            phone: input.phone.trim().to_string(),
            zip_code: input.zip_code.trim().to_string(),
            weekly_report: input.weekly_report.is_some(),
            // Out-of-range sentinel so the range check reports it.
            alert_threshold: input.alert_threshold.trim().parse().unwrap_or(0),
        }
    }
}

impl From<SettingsForm> for BusinessSettings {
    fn from(form: SettingsForm) -> Self {
        Self {
            business_name: form.business_name,
            contact_email: form.contact_email,
            phone: form.phone,
            zip_code: form.zip_code,
            weekly_report: form.weekly_report,
            alert_threshold: form.alert_threshold,
        }
    }
}

/// Per-field messages, keyed by form field name.
type FieldErrors = HashMap<&'static str, String>;

fn field_errors(form: &SettingsForm) -> FieldErrors {
    let Err(errors) = form.validate() else {
        return FieldErrors::new();
    };
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let message = errs
                .first()?
                .message
                .as_ref()
                .map_or_else(|| format!("{field} is invalid"), ToString::to_string);
            Some((field, message))
        })
        .collect()
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct SavedQuery {
    saved: Option<String>,
}

pub(super) async fn form(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<SavedQuery>,
) -> Html<String> {
    let settings = state.store.read().await.settings().clone();
    render_settings(user.email, &settings, &FieldErrors::new(), query.saved.is_some())
}

pub(super) async fn save(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(input): Form<SettingsInput>,
) -> Response {
    let form = SettingsForm::from(input);
    let errors = field_errors(&form);
    if !errors.is_empty() {
        tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "settings rejected");
        let settings = BusinessSettings::from(form);
        let html = render_settings(user.email, &settings, &errors, false);
        return (StatusCode::UNPROCESSABLE_ENTITY, html).into_response();
    }

    state.store.write().await.set_settings(form.into());
    state.persist().await;
    tracing::info!("business settings saved");
    see_other("/settings?saved=1")
}

fn render_settings(
    user: Option<String>,
    settings: &BusinessSettings,
    errors: &FieldErrors,
    saved: bool,
) -> Html<String> {
    let error = |field: &str| errors.get(field).cloned();
    let business_name_error = error("business_name");
    let email_error = error("contact_email");
    let phone_error = error("phone");
    let zip_error = error("zip_code");
    let threshold_error = error("alert_threshold");
    let has_errors = !errors.is_empty();
    let business_name = settings.business_name.clone();
    let contact_email = settings.contact_email.clone();
    let phone = settings.phone.clone();
    let zip_code = settings.zip_code.clone();
    let weekly_report = settings.weekly_report;
    let threshold = settings.alert_threshold;

    render(view! {
        <Shell title="Settings" user=user>
            <div class="max-w-xl mx-auto">
                <h1 class="text-3xl font-bold mb-8">"Business settings"</h1>
                {saved.then(|| view! { <Alert tone=Tone::Positive>"Settings saved."</Alert> })}
                {has_errors.then(|| view! {
                    <Alert tone=Tone::Critical>"Please fix the highlighted fields."</Alert>
                })}
                <Card>
                    <form method="post" action="/settings">
                        <Field name="business_name" label="Business name" value=business_name error=business_name_error />
                        <Field name="contact_email" label="Contact email" value=contact_email kind="email" error=email_error />
                        <Field name="phone" label="Phone" value=phone kind="tel" error=phone_error />
                        <Field name="zip_code" label="Zip code" value=zip_code error=zip_error />
                        <label class="block mb-4">
                            <span class="block text-sm font-medium mb-1">"Alert me when a review is rated below"</span>
                            <select name="alert_threshold" class="w-full rounded-lg border border-slate-300 px-3 py-2">
                                {(1..=5u8)
                                    .map(|n| view! {
                                        <option value=n.to_string() selected={n == threshold}>{format!("{n} stars")}</option>
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                            {threshold_error.map(|e| view! { <span class="block text-sm text-rose-700 mt-1">{e}</span> })}
                        </label>
                        <label class="flex items-center gap-2 mb-6">
                            <input type="checkbox" name="weekly_report" value="on" checked=weekly_report />
                            <span class="text-sm">"Email me a weekly report"</span>
                        </label>
                        <Button>"Save settings"</Button>
                    </form>
                </Card>
            </div>
        </Shell>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> SettingsInput {
        SettingsInput {
            business_name: "Shine Bros Car Wash".to_string(),
            contact_email: "owner@shinebros.test".to_string(),
            phone: "(555) 123-4567".to_string(),
            zip_code: "11211".to_string(),
            weekly_report: Some("on".to_string()),
            alert_threshold: "3".to_string(),
        }
    }

    #[test]
    fn valid_input_has_no_errors() {
        let form = SettingsForm::from(input());
        assert!(field_errors(&form).is_empty());
        let settings = BusinessSettings::from(form);
        assert!(settings.weekly_report);
        assert_eq!(settings.alert_threshold, 3);
    }

    #[test]
    fn each_bad_field_gets_its_own_message() {
        let form = SettingsForm::from(SettingsInput {
            business_name: "X".to_string(),
            contact_email: "not-an-email".to_string(),
            phone: "call me".to_string(),
            zip_code: "1121".to_string(),
            weekly_report: None,
            alert_threshold: "9".to_string(),
        });
        let errors = field_errors(&form);
        assert_eq!(errors.len(), 5);
        assert_eq!(errors["zip_code"], "Zip code must be 5 digits");
        assert_eq!(
            errors["alert_threshold"],
            "Alert threshold must be between 1 and 5"
        );
    }

    #[test]
    fn blank_phone_is_allowed_and_garbage_threshold_is_not() {
        let form = SettingsForm::from(SettingsInput {
            phone: String::new(),
            alert_threshold: "lots".to_string(),
            ..input()
        });
        let errors = field_errors(&form);
        assert!(!errors.contains_key("phone"));
        assert!(errors.contains_key("alert_threshold"));
    }

    #[test]
    fn errors_render_under_their_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("zip_code", "Zip code must be 5 digits".to_string());
        let Html(html) = render_settings(None, &BusinessSettings::default(), &errors, false);
        assert!(html.contains("Zip code must be 5 digits"));
        assert!(html.contains("Please fix the highlighted fields."));
        assert!(!html.contains("Settings saved."));
    }
}
