use dioxus::prelude::*;

use crate::components::use_toasts;
use crate::i18n::t;
use crate::store::{AppSettings, WeekStart};

#[component]
fn ToggleRow(
    label: String,
    description: Option<String>,
    value: bool,
    on_toggle: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "flex items-center justify-between gap-4 py-2",
            div {
                p { class: "text-sm font-medium text-slate-900 dark:text-white", {label} }
                {description.map(|d| rsx! {
                    p { class: "text-xs text-slate-500 dark:text-slate-400", {d} }
                })}
            }
            button {
                class: if value {
                    "relative h-6 w-11 shrink-0 rounded-full bg-blue-600 transition"
                } else {
                    "relative h-6 w-11 shrink-0 rounded-full bg-slate-300 dark:bg-slate-600 transition"
                },
                onclick: move |_| on_toggle.call(!value),
                span {
                    class: if value {
                        "absolute top-0.5 left-0.5 h-5 w-5 translate-x-5 rounded-full bg-white transition"
                    } else {
                        "absolute top-0.5 left-0.5 h-5 w-5 rounded-full bg-white transition"
                    },
                }
            }
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let mut settings: Signal<AppSettings> = use_context();
    let mut toasts = use_toasts();
    let mut draft = use_signal(|| settings.read().clone());
    let mut tab = use_signal(|| "general");

    let msg_saved = t("settings.saved");

    let on_save = move |_| {
        let next = draft.read().clone();
        crate::i18n::set_lang(&next.language);
        crate::i18n::set_date_format(&next.date_format);
        crate::i18n::apply_theme(&next.theme);
        settings.set(next);
        toasts.success(msg_saved.clone());
    };

    let tab_class = |active: bool| {
        if active {
            "rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white"
        } else {
            "rounded-md px-4 py-2 text-sm font-medium text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-700"
        }
    };

    let field_class = "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500";
    let label_class = "text-sm font-medium text-slate-700 dark:text-slate-200";
    let card_class = "rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-5 sm:p-6 space-y-5";

    rsx! {
        div { class: "space-y-6 max-w-3xl",
            div {
                h1 { class: "text-2xl sm:text-3xl font-semibold", {t("settings.title")} }
                p { class: "text-sm text-slate-500 dark:text-slate-400", {t("settings.subtitle")} }
            }

            div { class: "flex gap-1",
                button { class: tab_class(tab() == "general"), onclick: move |_| tab.set("general"),
                    {t("settings.tab_general")}
                }
                button { class: tab_class(tab() == "notifications"), onclick: move |_| tab.set("notifications"),
                    {t("settings.tab_notifications")}
                }
                button { class: tab_class(tab() == "scheduling"), onclick: move |_| tab.set("scheduling"),
                    {t("settings.tab_scheduling")}
                }
            }

            if tab() == "general" {
                div { class: card_class,
                    div { class: "space-y-1",
                        h2 { class: "text-lg font-semibold", {t("settings.general_title")} }
                        p { class: "text-sm text-slate-600 dark:text-slate-300", {t("settings.general_desc")} }
                    }
                    div { class: "flex flex-col gap-2",
                        label { class: label_class, {t("settings.company_name")} }
                        input {
                            class: field_class,
                            value: draft.read().company_name.clone(),
                            oninput: move |e| draft.write().company_name = e.value(),
                        }
                    }
                    div { class: "flex flex-col gap-2",
                        label { class: label_class, {t("settings.date_format")} }
                        select {
                            class: field_class,
                            value: draft.read().date_format.clone(),
                            oninput: move |e| draft.write().date_format = e.value(),
                            option { value: "YYYY-MM-DD", "YYYY-MM-DD (2023-06-01)" }
                            option { value: "DD/MM/YYYY", "DD/MM/YYYY (01/06/2023)" }
                            option { value: "MM/DD/YYYY", "MM/DD/YYYY (06/01/2023)" }
                            option { value: "DD MMM YYYY", "DD MMM YYYY (01 Jun 2023)" }
                        }
                    }
                    div { class: "flex flex-col gap-2",
                        label { class: label_class, {t("settings.time_format")} }
                        select {
                            class: field_class,
                            value: draft.read().time_format.clone(),
                            oninput: move |e| draft.write().time_format = e.value(),
                            option { value: "24h", {t("settings.time_24h")} }
                            option { value: "12h", {t("settings.time_12h")} }
                        }
                    }
                    div { class: "flex flex-col gap-2",
                        label { class: label_class, {t("settings.language")} }
                        select {
                            class: field_class,
                            value: draft.read().language.clone(),
                            oninput: move |e| draft.write().language = e.value(),
                            option { value: "system", {t("common.system")} }
                            option { value: "fi", "Suomi" }
                            option { value: "sv", "Svenska" }
                            option { value: "en", "English" }
                        }
                    }
                    div { class: "flex flex-col gap-2",
                        label { class: label_class, {t("settings.theme")} }
                        select {
                            class: field_class,
                            value: draft.read().theme.clone(),
                            oninput: move |e| draft.write().theme = e.value(),
                            option { value: "System", {t("common.system")} }
                            option { value: "Light", {t("common.light")} }
                            option { value: "Dark", {t("common.dark")} }
                        }
                    }
                }
            }

            if tab() == "notifications" {
                div { class: card_class,
                    div { class: "space-y-1",
                        h2 { class: "text-lg font-semibold", {t("settings.notifications_title")} }
                        p { class: "text-sm text-slate-600 dark:text-slate-300", {t("settings.notifications_desc")} }
                    }
                    ToggleRow {
                        label: t("settings.email_notifications"),
                        description: t("settings.email_notifications_desc"),
                        value: draft.read().email_notifications,
                        on_toggle: move |v| draft.write().email_notifications = v,
                    }
                    ToggleRow {
                        label: t("settings.push_notifications"),
                        description: t("settings.push_notifications_desc"),
                        value: draft.read().push_notifications,
                        on_toggle: move |v| draft.write().push_notifications = v,
                    }
                    ToggleRow {
                        label: t("settings.shift_reminders"),
                        value: draft.read().shift_reminders,
                        on_toggle: move |v| draft.write().shift_reminders = v,
                    }
                    ToggleRow {
                        label: t("settings.schedule_changes"),
                        value: draft.read().schedule_changes,
                        on_toggle: move |v| draft.write().schedule_changes = v,
                    }
                }
            }

            if tab() == "scheduling" {
                div { class: card_class,
                    div { class: "space-y-1",
                        h2 { class: "text-lg font-semibold", {t("settings.scheduling_title")} }
                        p { class: "text-sm text-slate-600 dark:text-slate-300", {t("settings.scheduling_desc")} }
                    }
                    div { class: "flex flex-col gap-2",
                        label { class: label_class, {t("settings.week_start")} }
                        select {
                            class: field_class,
                            value: draft.read().week_start.as_str(),
                            oninput: move |e| draft.write().week_start = WeekStart::parse(&e.value()),
                            for start in WeekStart::ALL {
                                option { key: "{start}", value: "{start}",
                                    {t(start.label_key())}
                                }
                            }
                        }
                    }
                    ToggleRow {
                        label: t("settings.auto_scheduling"),
                        description: t("settings.auto_scheduling_desc"),
                        value: draft.read().auto_scheduling,
                        on_toggle: move |v| draft.write().auto_scheduling = v,
                    }
                    ToggleRow {
                        label: t("settings.conflict_detection"),
                        description: t("settings.conflict_detection_desc"),
                        value: draft.read().conflict_detection,
                        on_toggle: move |v| draft.write().conflict_detection = v,
                    }
                    ToggleRow {
                        label: t("settings.employee_requests"),
                        description: t("settings.employee_requests_desc"),
                        value: draft.read().employee_requests,
                        on_toggle: move |v| draft.write().employee_requests = v,
                    }
                }
            }

            div { class: "flex justify-end",
                button {
                    class: "inline-flex items-center gap-2 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium px-4 py-2 transition",
                    onclick: on_save,
                    {t("settings.save")}
                }
            }
        }
    }
}
