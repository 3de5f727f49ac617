use chrono::{Datelike, Duration, Local};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::components::ShiftCard;
use crate::i18n::{month_name, t, weekday_name_for_date};
use crate::store::{shifts_on, week_window, Shift, WeekStart};

//Icons
use dioxus_free_icons::icons::hi_solid_icons::HiChevronLeft;
use dioxus_free_icons::icons::hi_solid_icons::HiChevronRight;

/// Week calendar over a shift list. Owns only its reference date; all
/// mutations are delegated upward through the handlers.
#[component]
pub fn Calendar(
    shifts: Vec<Shift>,
    week_start: WeekStart,
    on_edit: EventHandler<u32>,
    on_reassign: EventHandler<u32>,
    on_delete: EventHandler<u32>,
) -> Element {
    let mut reference = use_signal(|| Local::now().date_naive());
    let today = Local::now().date_naive();
    let days = week_window(reference(), week_start);
    let heading = format!("{} {}", month_name(days[0].month(), false), days[0].year());
    let week_label = format!("{} {}", t("schedule.week"), days[0].iso_week().week());

    rsx! {
        div { class: "rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm",
            div { class: "flex flex-wrap items-center justify-between gap-3 border-b border-slate-200 dark:border-slate-700 p-4",
                div {
                    h2 { class: "text-lg font-semibold text-slate-900 dark:text-white", {heading} }
                    p { class: "text-sm text-slate-500 dark:text-slate-400", {week_label} }
                }
                div { class: "flex items-center gap-1",
                    button {
                        class: "rounded-md border border-slate-300 dark:border-slate-600 px-3 py-1.5 text-sm text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700",
                        onclick: move |_| reference.set(Local::now().date_naive()),
                        {t("common.today")}
                    }
                    button {
                        class: "rounded-md border border-slate-300 dark:border-slate-600 p-1.5 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700",
                        onclick: move |_| {
                            let prev = reference() - Duration::days(7);
                            reference.set(prev);
                        },
                        Icon { width: 16, height: 16, fill: "currentColor", icon: HiChevronLeft }
                    }
                    button {
                        class: "rounded-md border border-slate-300 dark:border-slate-600 p-1.5 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700",
                        onclick: move |_| {
                            let next = reference() + Duration::days(7);
                            reference.set(next);
                        },
                        Icon { width: 16, height: 16, fill: "currentColor", icon: HiChevronRight }
                    }
                }
            }
            div { class: "grid grid-cols-1 sm:grid-cols-7 divide-y sm:divide-y-0 sm:divide-x divide-slate-200 dark:divide-slate-700",
                for day in days {
                    div { key: "{day}", class: "min-h-[10rem] p-2 space-y-2",
                        div { class: "flex items-center justify-between",
                            span { class: "text-xs font-medium uppercase text-slate-500 dark:text-slate-400",
                                {weekday_name_for_date(day).chars().take(3).collect::<String>()}
                            }
                            span {
                                class: if day == today {
                                    "flex h-6 w-6 items-center justify-center rounded-full bg-blue-600 text-xs font-semibold text-white"
                                } else {
                                    "text-xs text-slate-500 dark:text-slate-400"
                                },
                                {day.day().to_string()}
                            }
                        }
                        {
                            let bucket = shifts_on(&shifts, day);
                            if bucket.is_empty() {
                                rsx! {
                                    p { class: "pt-4 text-center text-xs text-slate-400 dark:text-slate-500",
                                        {t("schedule.no_shifts")}
                                    }
                                }
                            } else {
                                rsx! {
                                    for shift in bucket {
                                        ShiftCard {
                                            key: "{shift.id}",
                                            shift: shift.clone(),
                                            on_edit: Some(on_edit),
                                            on_reassign: Some(on_reassign),
                                            on_delete: Some(on_delete),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
