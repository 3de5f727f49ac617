use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Clone, Debug, Deserialize)]
struct Bundle(HashMap<String, String>);

static EN_JSON: &str = include_str!("../assets/i18n/en.json");
static FI_JSON: &str = include_str!("../assets/i18n/fi.json");
static SV_JSON: &str = include_str!("../assets/i18n/sv.json");

static BUNDLES: Lazy<HashMap<&'static str, Bundle>> = Lazy::new(|| {
    let mut m = HashMap::new();
    let parse = |s: &str| serde_json::from_str::<Bundle>(s).unwrap_or(Bundle(HashMap::new()));
    m.insert("en", parse(EN_JSON));
    m.insert("fi", parse(FI_JSON));
    m.insert("sv", parse(SV_JSON));
    m
});

#[derive(Clone)]
pub struct I18nState {
    pub lang: String,        // "en" | "fi" | "sv" | "system"
    pub date_format: String, // "YYYY-MM-DD" | "DD/MM/YYYY" | "MM/DD/YYYY" | "DD MMM YYYY"
}

impl Default for I18nState {
    fn default() -> Self {
        Self { lang: "system".into(), date_format: "YYYY-MM-DD".into() }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn detect_system_lang() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en".into())
        .split('-')
        .next()
        .unwrap_or("en")
        .to_lowercase()
}
#[cfg(not(target_arch = "wasm32"))]
pub fn detect_system_lang() -> String {
    std::env::var("LANG")
        .unwrap_or_else(|_| "en".into())
        .split('.').next().unwrap_or("en")
        .split('_').next().unwrap_or("en")
        .to_lowercase()
}

pub fn provide_i18n() {
    let sig: Signal<I18nState> = use_signal(I18nState::default);
    provide_context(sig);
}

pub fn use_i18n() -> Signal<I18nState> { use_context::<Signal<I18nState>>() }

pub fn t(key: &str) -> String {
    let st = use_i18n().read().clone();
    let lang = if st.lang == "system" { detect_system_lang() } else { st.lang.clone() };
    let bundles = &*BUNDLES;
    bundles
        .get(lang.as_str())
        .and_then(|b| b.0.get(key).cloned())
        .or_else(|| bundles.get("en").and_then(|b| b.0.get(key).cloned()))
        .unwrap_or_else(|| key.to_string())
}

/// Language the UI is currently rendering in, with "system" resolved.
pub fn effective_lang() -> String {
    let st = use_i18n().read().clone();
    if st.lang == "system" {
        let detected = detect_system_lang();
        if BUNDLES.contains_key(detected.as_str()) { detected } else { "en".into() }
    } else {
        st.lang
    }
}

pub fn set_lang(new_lang: &str) {
    let mut sig = use_i18n();
    let mut guard = sig.write();
    guard.lang = match new_lang {
        "system" | "en" | "fi" | "sv" => new_lang.to_string(),
        _ => "en".into(),
    };
}

pub fn set_date_format(fmt: &str) {
    let mut sig = use_i18n();
    let mut guard = sig.write();
    guard.date_format = fmt.to_string();
}

// ===== Weekday and month helpers =====

/// Localized weekday names, Monday first.
pub fn weekdays_for_locale() -> Vec<String> {
    vec![
        t("common.monday"),
        t("common.tuesday"),
        t("common.wednesday"),
        t("common.thursday"),
        t("common.friday"),
        t("common.saturday"),
        t("common.sunday"),
    ]
}

pub fn weekday_name_for_date(date: NaiveDate) -> String {
    let idx = date.weekday().number_from_monday() as usize; // 1..7
    let names = weekdays_for_locale();
    names[(idx - 1).min(6)].clone()
}

pub fn month_name(month: u32, short: bool) -> String {
    let key = if short {
        format!("months.short.{}", month)
    } else {
        format!("months.long.{}", month)
    };
    t(&key)
}

/// Format a date according to the configured format and locale. The month
/// name variant needs the active language, so this reads context; the
/// numeric variants are delegated to `format_ymd`.
pub fn format_date(date: NaiveDate) -> String {
    let st = use_i18n().read().clone();
    match st.date_format.as_str() {
        "DD MMM YYYY" => format!(
            "{:02} {} {:04}",
            date.day(),
            month_name(date.month(), true),
            date.year()
        ),
        fmt => format_ymd(date, fmt),
    }
}

/// Numeric date formats only; anything unknown falls back to ISO.
pub fn format_ymd(date: NaiveDate, fmt: &str) -> String {
    let (y, m, d) = (date.year(), date.month(), date.day());
    match fmt {
        "DD/MM/YYYY" => format!("{:02}/{:02}/{:04}", d, m, y),
        "MM/DD/YYYY" => format!("{:02}/{:02}/{:04}", m, d, y),
        _ => format!("{:04}-{:02}-{:02}", y, m, d),
    }
}

// === Theme application ===
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: &str) {
    use web_sys::window;
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.document_element() {
            let current = el.get_attribute("class").unwrap_or_default();
            let mut parts: Vec<&str> =
                current.split_whitespace().filter(|c| *c != "dark").collect();
            if theme.eq_ignore_ascii_case("dark") {
                parts.push("dark");
            }
            let new_cls = parts.join(" ");
            let _ = el.set_attribute("class", &new_cls);
        }
    }
}
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_theme: &str) { /* no-op on native */ }

#[cfg(test)]
mod tests {
    use super::format_ymd;
    use chrono::NaiveDate;

    #[test]
    fn numeric_formats() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
        assert_eq!(format_ymd(date, "YYYY-MM-DD"), "2023-06-05");
        assert_eq!(format_ymd(date, "DD/MM/YYYY"), "05/06/2023");
        assert_eq!(format_ymd(date, "MM/DD/YYYY"), "06/05/2023");
        // unknown formats fall back to ISO
        assert_eq!(format_ymd(date, "whatever"), "2023-06-05");
    }
}
