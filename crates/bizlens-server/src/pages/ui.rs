//! Presentational primitives shared by every page, and the class-merging
//! helper they are built on.

use bizlens_core::Tone;
use leptos::prelude::*;

/// Merge utility class lists. Later classes win over earlier ones in the
/// same conflict group (`px-2 px-4` → `px-4`, `bg-white bg-slate-900` →
/// `bg-slate-900`); unrelated classes are kept in first-seen order and
/// duplicates collapse.
#[must_use]
pub fn cn(parts: &[&str]) -> String {
    let mut kept: Vec<(String, &str)> = Vec::new();
    for class in parts.iter().flat_map(|p| p.split_whitespace()) {
        let group = conflict_group(class);
        kept.retain(|(g, _)| *g != group);
        kept.push((group, class));
    }
    kept.into_iter()
        .map(|(_, class)| class)
        .collect::<Vec<_>>()
        .join(" ")
}

const SIZES: [&str; 9] = ["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl"];
const WEIGHTS: [&str; 4] = ["normal", "medium", "semibold", "bold"];
const DISPLAYS: [&str; 6] = ["block", "inline", "inline-block", "flex", "inline-flex", "grid"];

/// Key classes compete under. Classes with no known group compete only
/// with themselves.
fn conflict_group(class: &str) -> String {
    let (variant, base) = match class.rsplit_once(':') {
        Some((variant, base)) => (variant, base),
        None => ("", class),
    };
    let group = if DISPLAYS.contains(&base) || base == "hidden" {
        "display".to_string()
    } else if base == "border" {
        "border-width".to_string()
    } else if let Some(rest) = base.strip_prefix("border-") {
        if rest.parse::<u8>().is_ok() {
            "border-width".to_string()
        } else if rest.starts_with(['l', 'r', 't', 'b']) && rest.len() <= 3 {
            // border-l-4 and friends set one side only
            base.to_string()
        } else {
            "border-color".to_string()
        }
    } else if base == "rounded" || base.starts_with("rounded-") {
        "rounded".to_string()
    } else if base == "shadow" || base.starts_with("shadow-") {
        "shadow".to_string()
    } else if let Some(rest) = base.strip_prefix("text-") {
        if SIZES.contains(&rest) {
            "text-size".to_string()
        } else if ["left", "center", "right"].contains(&rest) {
            "text-align".to_string()
        } else {
            "text-color".to_string()
        }
    } else if let Some(rest) = base.strip_prefix("font-") {
        if WEIGHTS.contains(&rest) {
            "font-weight".to_string()
        } else {
            base.to_string()
        }
    } else {
        match base.split_once('-') {
            Some((prefix, _)) if SPACING_AND_COLOR.contains(&prefix) => prefix.to_string(),
            _ => base.to_string(),
        }
    };
    format!("{variant}:{group}")
}

/// Prefixes whose `prefix-value` classes all set the same property.
const SPACING_AND_COLOR: [&str; 18] = [
    "p", "px", "py", "pt", "pb", "m", "mx", "my", "mt", "mb", "bg", "w", "h", "gap", "justify",
    "items", "max", "grid",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-indigo-600 text-white hover:bg-indigo-700",
            ButtonVariant::Secondary => "bg-white text-slate-800 border border-slate-300",
            ButtonVariant::Ghost => "bg-transparent text-indigo-700",
            ButtonVariant::Danger => "bg-rose-600 text-white",
        }
    }
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-lg px-4 py-2 text-sm font-semibold";

/// A `<button>`. Submits its form unless `kind` says otherwise.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(default = "submit")] kind: &'static str,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = cn(&[BUTTON_BASE, variant.class(), class]);
    view! { <button type=kind class=class>{children()}</button> }
}

/// An anchor styled as a button.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = cn(&[BUTTON_BASE, variant.class(), class]);
    view! { <a href=href class=class>{children()}</a> }
}

#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] tone: Option<Tone>,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let accent = tone.map_or("", |t| t.accent_class());
    let border = if tone.is_some() { "border-l-4" } else { "" };
    let class = cn(&["bg-white rounded-xl shadow p-6", border, accent, class]);
    view! {
        <div class=class>
            {title.map(|t| view! { <h3 class="text-lg font-semibold mb-2">{t}</h3> })}
            {children()}
        </div>
    }
}

#[component]
pub fn Badge(tone: Tone, #[prop(into)] label: String) -> impl IntoView {
    let class = cn(&["inline-block rounded-full px-2 py-1 text-xs font-medium", tone.badge_class()]);
    view! { <span class=class>{label}</span> }
}

/// Headline number with a caption.
#[component]
pub fn StatCard(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-4">
            <p class="text-sm text-slate-500">{label}</p>
            <p class="text-2xl font-bold">{value}</p>
        </div>
    }
}

#[component]
pub fn ProgressBar(
    value: u8,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let value = value.min(100);
    let width = format!("width: {value}%");
    view! {
        <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=value.to_string()>
            <div class="progress-fill" style=width></div>
        </div>
        {label.map(|l| view! { <p class="text-sm text-slate-500 mt-2">{l}</p> })}
    }
}

#[component]
pub fn Alert(tone: Tone, children: Children) -> impl IntoView {
    let class = cn(&["rounded-lg p-4 mb-4 border-l-4", tone.badge_class(), tone.accent_class()]);
    view! { <div class=class role="alert">{children()}</div> }
}

/// A dialog shown while the URL fragment equals `id`. Closing clears the
/// fragment, so no script is needed.
#[component]
pub fn Modal(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=id class="modal" role="dialog" aria-modal="true">
            <div class="modal-panel bg-white rounded-xl shadow p-6">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-lg font-semibold">{title}</h3>
                    <a href="#" class="text-slate-500" aria-label="Close">"×"</a>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// One entry of a [`Tabs`] bar.
#[derive(Debug, Clone)]
pub struct Tab {
    pub key: &'static str,
    pub label: String,
    pub href: String,
}

/// Link-based tab bar; the page renders only the active panel.
#[component]
pub fn Tabs(tabs: Vec<Tab>, active: &'static str) -> impl IntoView {
    view! {
        <nav class="tabs">
            {tabs
                .into_iter()
                .map(|tab| {
                    let class = if tab.key == active { "tab tab-active" } else { "tab" };
                    view! { <a href=tab.href class=class>{tab.label}</a> }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}

/// Labelled form input with an optional error under it.
#[component]
pub fn Field(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional_no_strip)] error: Option<String>,
) -> impl IntoView {
    let input_class = cn(&[
        "w-full rounded-lg border border-slate-300 px-3 py-2",
        if error.is_some() { "border-rose-600" } else { "" },
    ]);
    view! {
        <label class="block mb-4">
            <span class="block text-sm font-medium mb-1">{label}</span>
            <input type=kind name=name.clone() id=name value=value class=input_class />
            {error.map(|e| view! { <span class="block text-sm text-rose-700 mt-1">{e}</span> })}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn cn_later_class_wins_within_group() {
        assert_eq!(cn(&["px-2 py-1", "px-4"]), "py-1 px-4");
        assert_eq!(cn(&["bg-white text-sm", "bg-slate-900"]), "text-sm bg-slate-900");
    }

    #[test]
    fn cn_keeps_text_size_and_color_apart() {
        assert_eq!(cn(&["text-sm text-slate-500", "text-lg"]), "text-slate-500 text-lg");
        assert_eq!(cn(&["text-white", "text-rose-700"]), "text-rose-700");
    }

    #[test]
    fn cn_separates_variants_and_dedupes() {
        assert_eq!(
            cn(&["bg-white hover:bg-slate-100", "", "hover:bg-indigo-50 bg-white"]),
            "hover:bg-indigo-50 bg-white"
        );
        assert_eq!(cn(&["border border-2"]), "border-2");
        assert_eq!(cn(&["flex", "hidden"]), "hidden");
    }

    #[test]
    fn button_merges_caller_classes() {
        let html = view! { <Button variant=ButtonVariant::Danger class="px-8">"Delete"</Button> }
            .to_html();
        assert!(html.contains("px-8"));
        assert!(!html.contains("px-4"));
        assert!(html.contains("bg-rose-600"));
        assert!(html.contains("Delete"));
    }

    #[test]
    fn progress_bar_clamps_to_100() {
        let html = view! { <ProgressBar value=140 /> }.to_html();
        assert!(html.contains("width: 100%"));
    }

    #[test]
    fn badge_uses_tone_classes() {
        let html = view! { <Badge tone=Tone::Critical label="Critical" /> }.to_html();
        assert!(html.contains("bg-rose-100"));
    }
}
