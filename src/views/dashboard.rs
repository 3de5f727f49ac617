use chrono::{DateTime, Local};
use dioxus::prelude::*;

use crate::components::{ShiftCard, StatCard};
use crate::i18n::{format_date, t, weekday_name_for_date, weekdays_for_locale};
use crate::store::{sample, AppSettings, Shift, ShiftKind};
use crate::Route;

// Static dashboard figures; there is no backend to derive them from.
const WEEKLY_COVERAGE: [u32; 7] = [12, 19, 15, 22, 26, 18, 10];

fn demo_shift(id: u32, employee_index: usize, kind: ShiftKind, now: DateTime<Local>) -> Shift {
    let roster = sample::employees();
    let employee = &roster[employee_index];
    Shift {
        id,
        employee_name: employee.name.clone(),
        employee_initials: employee.initials.clone(),
        role: employee.role.clone(),
        time: kind.default_time().to_string(),
        kind,
        date: now.date_naive(),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let nav = navigator();
    let settings: Signal<AppSettings> = use_context();
    let now = use_signal(Local::now);
    let mut tab = use_signal(|| "upcoming");

    // Keep the header clock current; once a minute is plenty.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        use web_sys::wasm_bindgen::{closure::Closure, JsCast};
        let mut now = now;
        let cb = Closure::wrap(Box::new(move || {
            now.set(Local::now());
        }) as Box<dyn FnMut()>);
        if let Some(win) = web_sys::window() {
            let _ = win.set_interval_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                60_000,
            );
        }
        cb.forget();
    });

    let current = now();
    let time_label = if settings.read().time_format == "12h" {
        current.format("%I:%M %p").to_string()
    } else {
        current.format("%H:%M").to_string()
    };
    let date_line = format!(
        "{}, {} · {}",
        weekday_name_for_date(current.date_naive()),
        format_date(current.date_naive()),
        time_label
    );

    let upcoming = vec![
        demo_shift(101, 0, ShiftKind::Morning, current),
        demo_shift(102, 1, ShiftKind::Day, current),
        demo_shift(103, 4, ShiftKind::Evening, current),
    ];
    let weekdays = weekdays_for_locale();
    let max_coverage = WEEKLY_COVERAGE.iter().copied().max().unwrap_or(1).max(1);

    let tab_class = |active: bool| {
        if active {
            "rounded-md bg-blue-600 px-3 py-1.5 text-sm font-medium text-white"
        } else {
            "rounded-md px-3 py-1.5 text-sm font-medium text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-700"
        }
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "flex flex-wrap items-center justify-between gap-3",
                div {
                    h1 { class: "text-2xl sm:text-3xl font-semibold", {t("dashboard.title")} }
                    p { class: "text-sm text-slate-500 dark:text-slate-400", {date_line} }
                }
                button { class: "inline-flex items-center gap-2 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium px-4 py-2 transition",
                    {t("dashboard.create_report")}
                }
            }

            div { class: "grid gap-4 sm:grid-cols-2 xl:grid-cols-4",
                StatCard {
                    title: t("dashboard.total_employees"),
                    value: "48",
                    trend: "+2.5%",
                    caption: t("dashboard.vs_last_month"),
                }
                StatCard {
                    title: t("dashboard.scheduled_hours"),
                    value: "1,284",
                    trend: "+12.3%",
                    caption: t("dashboard.vs_last_month"),
                }
                StatCard {
                    title: t("dashboard.open_shifts"),
                    value: "23",
                    trend: "-4.1%",
                    caption: t("dashboard.vs_last_month"),
                }
                StatCard {
                    title: t("dashboard.satisfaction"),
                    value: "94.2%",
                    trend: "+1.2%",
                    caption: t("dashboard.vs_last_month"),
                }
            }

            div { class: "grid gap-4 lg:grid-cols-3",
                div { class: "rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-5 lg:col-span-2",
                    h2 { class: "text-lg font-semibold text-slate-900 dark:text-white mb-4",
                        {t("dashboard.weekly_coverage")}
                    }
                    div { class: "space-y-3",
                        for (name, staffed) in weekdays.iter().zip(WEEKLY_COVERAGE) {
                            div { key: "{name}", class: "flex items-center gap-3",
                                span { class: "w-24 shrink-0 text-sm text-slate-600 dark:text-slate-300", {name.clone()} }
                                div { class: "h-3 flex-1 rounded-full bg-slate-100 dark:bg-slate-700",
                                    div {
                                        class: "h-3 rounded-full bg-blue-600",
                                        style: format!("width: {}%", staffed * 100 / max_coverage),
                                    }
                                }
                                span { class: "w-8 text-right text-sm text-slate-500 dark:text-slate-400", {staffed.to_string()} }
                            }
                        }
                    }
                }

                div { class: "rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-5",
                    div { class: "flex items-center justify-between mb-3",
                        h2 { class: "text-lg font-semibold text-slate-900 dark:text-white",
                            {t("dashboard.todays_shifts")}
                        }
                        button {
                            class: "text-sm font-medium text-blue-600 hover:underline",
                            onclick: move |_| {
                                nav.push(Route::Schedule {});
                            },
                            {t("dashboard.show_all")}
                        }
                    }
                    div { class: "flex gap-1 mb-3",
                        button { class: tab_class(tab() == "upcoming"), onclick: move |_| tab.set("upcoming"),
                            {t("dashboard.tab_upcoming")}
                        }
                        button { class: tab_class(tab() == "ongoing"), onclick: move |_| tab.set("ongoing"),
                            {t("dashboard.tab_ongoing")}
                        }
                        button { class: tab_class(tab() == "completed"), onclick: move |_| tab.set("completed"),
                            {t("dashboard.tab_completed")}
                        }
                    }
                    {match tab() {
                        "ongoing" => rsx! {
                            p { class: "py-6 text-center text-sm text-slate-500 dark:text-slate-400",
                                {t("dashboard.no_ongoing")}
                            }
                        },
                        "completed" => rsx! {
                            p { class: "py-6 text-center text-sm text-slate-500 dark:text-slate-400",
                                {t("dashboard.no_completed")}
                            }
                        },
                        _ => rsx! {
                            div { class: "space-y-2",
                                for shift in upcoming.clone() {
                                    ShiftCard { key: "{shift.id}", shift: shift.clone() }
                                }
                            }
                        },
                    }}
                }
            }

            div { class: "rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-5",
                h2 { class: "text-lg font-semibold text-slate-900 dark:text-white mb-4",
                    {t("dashboard.recent_activity")}
                }
                ul { class: "space-y-4",
                    li { class: "flex gap-3",
                        span { class: "mt-1 h-2.5 w-2.5 shrink-0 rounded-full bg-emerald-500" }
                        div {
                            p { class: "text-sm font-medium text-slate-900 dark:text-white", {t("dashboard.activity_assignment_title")} }
                            p { class: "text-sm text-slate-600 dark:text-slate-300", {t("dashboard.activity_assignment_body")} }
                            p { class: "text-xs text-slate-400 dark:text-slate-500", {t("dashboard.activity_assignment_time")} }
                        }
                    }
                    li { class: "flex gap-3",
                        span { class: "mt-1 h-2.5 w-2.5 shrink-0 rounded-full bg-blue-500" }
                        div {
                            p { class: "text-sm font-medium text-slate-900 dark:text-white", {t("dashboard.activity_request_title")} }
                            p { class: "text-sm text-slate-600 dark:text-slate-300", {t("dashboard.activity_request_body")} }
                            p { class: "text-xs text-slate-400 dark:text-slate-500", {t("dashboard.activity_request_time")} }
                        }
                    }
                    li { class: "flex gap-3",
                        span { class: "mt-1 h-2.5 w-2.5 shrink-0 rounded-full bg-amber-500" }
                        div {
                            p { class: "text-sm font-medium text-slate-900 dark:text-white", {t("dashboard.activity_conflict_title")} }
                            p { class: "text-sm text-slate-600 dark:text-slate-300", {t("dashboard.activity_conflict_body")} }
                            p { class: "text-xs text-slate-400 dark:text-slate-500", {t("dashboard.activity_conflict_time")} }
                        }
                    }
                }
            }
        }
    }
}
