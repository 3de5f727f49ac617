use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::i18n::t;
use crate::store::{Employee, Shift, ShiftDraft, ShiftKind};

/// Modal form for creating a shift or editing an existing one. Emits a
/// draft plus the id being edited, if any; the owning view decides whether
/// that means add or update.
#[component]
pub fn AddShiftDialog(
    employees: Vec<Employee>,
    editing: Option<Shift>,
    on_submit: EventHandler<(Option<u32>, ShiftDraft)>,
    on_close: EventHandler<()>,
) -> Element {
    let editing_id = editing.as_ref().map(|s| s.id);

    let initial_employee = editing
        .as_ref()
        .and_then(|s| employees.iter().find(|e| e.name == s.employee_name))
        .map(|e| e.id.to_string())
        .unwrap_or_default();
    let initial_kind = editing
        .as_ref()
        .map(|s| s.kind.as_str().to_string())
        .unwrap_or_default();
    let initial_date = editing
        .as_ref()
        .map(|s| s.date.to_string())
        .unwrap_or_default();
    let (initial_start, initial_end) = editing
        .as_ref()
        .and_then(|s| s.time.split_once(" - "))
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .unwrap_or_default();

    let mut employee_id = use_signal(|| initial_employee);
    let mut kind = use_signal(|| initial_kind);
    let mut date = use_signal(|| initial_date);
    let mut start_time = use_signal(|| initial_start);
    let mut end_time = use_signal(|| initial_end);
    let mut error = use_signal(|| Option::<String>::None);

    // resolved once per render so the submit handler can reuse them
    let err_employee = t("shift.error_employee");
    let err_kind = t("shift.error_kind");
    let err_date = t("shift.error_date");

    let roster = employees.clone();
    let on_submit_click = move |_| {
        let selected = employee_id
            .read()
            .parse::<u32>()
            .ok()
            .and_then(|id| roster.iter().find(|e| e.id == id));
        let Some(employee) = selected else {
            error.set(Some(err_employee.clone()));
            return;
        };
        let Some(shift_kind) = ShiftKind::parse(&kind.read()) else {
            error.set(Some(err_kind.clone()));
            return;
        };
        let Ok(day) = NaiveDate::parse_from_str(&date.read(), "%Y-%m-%d") else {
            error.set(Some(err_date.clone()));
            return;
        };
        let start = start_time.read().trim().to_string();
        let end = end_time.read().trim().to_string();
        let time = (!start.is_empty() && !end.is_empty()).then(|| format!("{} - {}", start, end));

        let draft = ShiftDraft::for_employee(employee, shift_kind, day, time);
        on_submit.call((editing_id, draft));
        on_close.call(());
    };

    let title = if editing_id.is_some() { t("shift.edit_title") } else { t("shift.add_title") };
    let description = if editing_id.is_some() { t("shift.edit_desc") } else { t("shift.add_desc") };
    let submit_label = if editing_id.is_some() { t("shift.submit_save") } else { t("shift.submit_add") };

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
            div { class: "w-full max-w-md rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                div { class: "space-y-1",
                    h2 { class: "text-lg font-semibold text-slate-900 dark:text-white", {title} }
                    p { class: "text-sm text-slate-600 dark:text-slate-300", {description} }
                }
                div { class: "flex flex-col gap-2",
                    label { class: "text-sm font-medium text-slate-700 dark:text-slate-200",
                        {t("shift.employee")}
                    }
                    select {
                        class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                        value: employee_id.read().clone(),
                        oninput: move |e| employee_id.set(e.value()),
                        option { value: "", {t("shift.select_employee")} }
                        for employee in employees.clone() {
                            option { key: "{employee.id}", value: "{employee.id}",
                                "{employee.name} ({employee.role})"
                            }
                        }
                    }
                }
                div { class: "flex flex-col gap-2",
                    label { class: "text-sm font-medium text-slate-700 dark:text-slate-200",
                        {t("shift.kind")}
                    }
                    select {
                        class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                        value: kind.read().clone(),
                        oninput: move |e| kind.set(e.value()),
                        option { value: "", {t("shift.select_kind")} }
                        for k in ShiftKind::ALL {
                            option { key: "{k}", value: "{k}",
                                {format!("{} ({})", t(k.label_key()), k.default_time())}
                            }
                        }
                    }
                }
                div { class: "flex flex-col gap-2",
                    label { class: "text-sm font-medium text-slate-700 dark:text-slate-200",
                        {t("shift.date")}
                    }
                    input {
                        r#type: "date",
                        class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                        value: date.read().clone(),
                        oninput: move |e| date.set(e.value()),
                    }
                }
                div { class: "grid grid-cols-2 gap-3",
                    div { class: "flex flex-col gap-2",
                        label { class: "text-sm font-medium text-slate-700 dark:text-slate-200",
                            {t("shift.start_time")}
                        }
                        input {
                            r#type: "time",
                            class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                            value: start_time.read().clone(),
                            oninput: move |e| start_time.set(e.value()),
                        }
                    }
                    div { class: "flex flex-col gap-2",
                        label { class: "text-sm font-medium text-slate-700 dark:text-slate-200",
                            {t("shift.end_time")}
                        }
                        input {
                            r#type: "time",
                            class: "h-10 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                            value: end_time.read().clone(),
                            oninput: move |e| end_time.set(e.value()),
                        }
                    }
                }
                p { class: "text-xs text-slate-500 dark:text-slate-400", {t("shift.optional_time_hint")} }
                {error.read().as_ref().map(|e| rsx! {
                    p { class: "text-sm text-red-600", {e.clone()} }
                })}
                div { class: "flex items-center justify-end gap-2 pt-1",
                    button {
                        class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700 text-sm font-medium transition",
                        onclick: move |_| on_close.call(()),
                        {t("common.cancel")}
                    }
                    button {
                        class: "inline-flex items-center h-9 px-3 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium transition",
                        onclick: on_submit_click,
                        {submit_label}
                    }
                }
            }
        }
    }
}
