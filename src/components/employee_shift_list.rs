use dioxus::prelude::*;

use crate::i18n::{format_date, t};
use crate::store::{group_by_employee, Shift};

/// Per-employee table of the schedule. Groups appear in the order their
/// employee first shows up in the shift list.
#[component]
pub fn EmployeeShiftList(shifts: Vec<Shift>) -> Element {
    let groups = group_by_employee(&shifts);

    rsx! {
        div { class: "overflow-x-auto rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm",
            table { class: "w-full text-left text-sm",
                thead { class: "border-b border-slate-200 dark:border-slate-700 text-xs uppercase text-slate-500 dark:text-slate-400",
                    tr {
                        th { class: "px-4 py-3", {t("schedule.list_employee")} }
                        th { class: "px-4 py-3", {t("schedule.list_role")} }
                        th { class: "px-4 py-3", {t("schedule.list_shifts")} }
                    }
                }
                tbody { class: "divide-y divide-slate-200 dark:divide-slate-700",
                    if groups.is_empty() {
                        tr {
                            td { class: "px-4 py-6 text-center text-slate-500 dark:text-slate-400", colspan: 3,
                                {t("schedule.list_empty")}
                            }
                        }
                    }
                    for (name, bucket) in groups {
                        tr { key: "{name}",
                            td { class: "px-4 py-3",
                                div { class: "flex items-center gap-2",
                                    span { class: "flex h-8 w-8 items-center justify-center rounded-full bg-blue-100 text-blue-700 text-xs font-semibold",
                                        {bucket[0].employee_initials.clone()}
                                    }
                                    span { class: "font-medium text-slate-900 dark:text-white", {name.clone()} }
                                }
                            }
                            td { class: "px-4 py-3 text-slate-600 dark:text-slate-300", {bucket[0].role.clone()} }
                            td { class: "px-4 py-3",
                                div { class: "flex flex-wrap gap-1.5",
                                    for shift in bucket {
                                        span {
                                            key: "{shift.id}",
                                            class: format!("inline-flex items-center gap-1 rounded-full border px-2 py-0.5 text-xs {}", shift.kind.card_class()),
                                            span { class: "font-medium", {format_date(shift.date)} }
                                            span { class: shift.kind.time_class(), {shift.time.clone()} }
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
