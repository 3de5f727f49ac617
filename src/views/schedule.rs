use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::components::{use_toasts, AddShiftDialog, Calendar, EmployeeShiftList};
use crate::i18n::t;
use crate::store::{sample, AppSettings, ShiftDraft, ShiftStore};

//Icons
use dioxus_free_icons::icons::hi_solid_icons::HiDownload;
use dioxus_free_icons::icons::hi_solid_icons::HiPlus;
use dioxus_free_icons::icons::hi_solid_icons::HiUpload;

/// Owns the shift store for the whole schedule area. The calendar, the
/// per-employee list and every dialog operate on this one signal.
#[component]
pub fn Schedule() -> Element {
    let settings: Signal<AppSettings> = use_context();
    let mut toasts = use_toasts();
    let mut store = use_signal(|| ShiftStore::with_shifts(sample::shifts()));
    let mut dialog_open = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<u32>::None);
    let mut reassign_id = use_signal(|| Option::<u32>::None);
    let mut confirm_delete = use_signal(|| Option::<u32>::None);
    let mut confirm_import = use_signal(|| false);
    let mut view = use_signal(|| "calendar");

    let week_start = settings.read().week_start;
    let roster = sample::employees();

    // resolved once per render so handlers can reuse them
    let msg_added = t("shift.added");
    let msg_updated = t("shift.updated");
    let msg_deleted = t("shift.deleted");
    let msg_reassigned = t("shift.reassigned");
    let msg_imported = t("schedule.imported");
    let msg_import_invalid = t("schedule.import_invalid_file");
    let msg_import_choose = t("schedule.import_choose_file");

    let on_dialog_submit = move |(editing, draft): (Option<u32>, ShiftDraft)| match editing {
        Some(id) => {
            if store.write().update(id, draft) {
                toasts.success(msg_updated.clone());
            }
        }
        None => {
            store.write().add(draft);
            toasts.success(msg_added.clone());
        }
    };

    let on_export = move |_| {
        let _json = store.read().to_json();
        #[cfg(target_arch = "wasm32")]
        {
            use web_sys::wasm_bindgen::JsCast;
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Ok(a) = doc.create_element("a") {
                    let href = format!(
                        "data:application/json;charset=utf-8,{}",
                        urlencoding::encode(&_json)
                    );
                    a.set_attribute("href", &href).ok();
                    a.set_attribute("download", "shiftwise_export.json").ok();
                    if let Ok(el) = a.dyn_into::<web_sys::HtmlElement>() {
                        el.click();
                    }
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("shiftwise_export.json");
            let _ = std::fs::write(path, _json);
        }
    };

    // Import button: trigger hidden file input (web) or go straight to the
    // confirmation (native reads from a fixed path).
    let on_import_click = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            use web_sys::wasm_bindgen::JsCast;
            use web_sys::{window, HtmlElement};
            if let Some(doc) = window().and_then(|w| w.document()) {
                if let Some(el) = doc.get_element_by_id("importShifts") {
                    if let Ok(btn) = el.dyn_into::<HtmlElement>() {
                        btn.click();
                        return;
                    }
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        confirm_import.set(true);
    };

    let do_import = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            use web_sys::wasm_bindgen::JsCast;
            use web_sys::{window, Event, FileReader, HtmlInputElement};
            if let Some(doc) = window().and_then(|w| w.document()) {
                if let Some(el) = doc.get_element_by_id("importShifts") {
                    if let Ok(input) = el.dyn_into::<HtmlInputElement>() {
                        if let Some(file) = input.files().and_then(|f| f.get(0)) {
                            if let Ok(reader) = FileReader::new() {
                                let fr = reader.clone();
                                let mut store_copy = store;
                                let mut toasts_copy = toasts;
                                let mut confirm_copy = confirm_import;
                                let ok_msg = msg_imported.clone();
                                let err_msg = msg_import_invalid.clone();
                                let onload = web_sys::wasm_bindgen::closure::Closure::wrap(
                                    Box::new(move |_e: Event| {
                                        let text = fr
                                            .result()
                                            .ok()
                                            .and_then(|v| v.as_string())
                                            .unwrap_or_default();
                                        match ShiftStore::from_json(&text) {
                                            Ok(imported) => {
                                                store_copy.set(imported);
                                                confirm_copy.set(false);
                                                toasts_copy.success(ok_msg.clone());
                                            }
                                            Err(err) => {
                                                tracing::warn!(%err, "shift import failed");
                                                confirm_copy.set(false);
                                                toasts_copy.error(err_msg.clone());
                                            }
                                        }
                                    })
                                        as Box<dyn FnMut(_)>,
                                );
                                reader.set_onload(Some(onload.as_ref().unchecked_ref()));
                                onload.forget();
                                let _ = reader.read_as_text(&file);
                                return;
                            }
                        }
                    }
                }
            }
            confirm_import.set(false);
            toasts.error(msg_import_choose.clone());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("shiftwise_export.json");
            confirm_import.set(false);
            match std::fs::read_to_string(&path) {
                Ok(text) => match ShiftStore::from_json(&text) {
                    Ok(imported) => {
                        store.set(imported);
                        toasts.success(msg_imported.clone());
                    }
                    Err(err) => {
                        tracing::warn!(%err, "shift import failed");
                        toasts.error(msg_import_invalid.clone());
                    }
                },
                Err(_) => toasts.error(msg_import_choose.clone()),
            }
        }
    };

    let view_class = |active: bool| {
        if active {
            "rounded-md bg-blue-600 px-3 py-1.5 text-sm font-medium text-white"
        } else {
            "rounded-md px-3 py-1.5 text-sm font-medium text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-700"
        }
    };

    let shifts = store.read().shifts().to_vec();

    rsx! {
        div { class: "space-y-6",
            div { class: "flex flex-wrap items-center justify-between gap-3",
                div {
                    h1 { class: "text-2xl sm:text-3xl font-semibold", {t("schedule.title")} }
                    p { class: "text-sm text-slate-500 dark:text-slate-400", {t("schedule.subtitle")} }
                }
                div { class: "flex flex-wrap items-center gap-2",
                    // Hidden file input; picking a file opens the confirmation
                    input {
                        id: "importShifts",
                        r#type: "file",
                        accept: ".json",
                        class: "hidden",
                        onchange: move |_| confirm_import.set(true),
                    }
                    button {
                        class: "inline-flex items-center gap-2 rounded-md border border-slate-300 dark:border-slate-600 px-3 py-2 text-sm font-medium text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700 transition",
                        onclick: on_export,
                        Icon { width: 16, height: 16, fill: "currentColor", icon: HiDownload }
                        {t("schedule.export")}
                    }
                    button {
                        class: "inline-flex items-center gap-2 rounded-md border border-slate-300 dark:border-slate-600 px-3 py-2 text-sm font-medium text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700 transition",
                        onclick: on_import_click,
                        Icon { width: 16, height: 16, fill: "currentColor", icon: HiUpload }
                        {t("schedule.import")}
                    }
                    div { class: "flex rounded-md border border-slate-300 dark:border-slate-600 p-0.5",
                        button { class: view_class(view() == "calendar"), onclick: move |_| view.set("calendar"),
                            {t("schedule.view_calendar")}
                        }
                        button { class: view_class(view() == "list"), onclick: move |_| view.set("list"),
                            {t("schedule.view_list")}
                        }
                    }
                    button {
                        class: "inline-flex items-center gap-2 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium px-4 py-2 transition",
                        onclick: move |_| {
                            editing_id.set(None);
                            dialog_open.set(true);
                        },
                        Icon { width: 16, height: 16, fill: "currentColor", icon: HiPlus }
                        {t("schedule.add_shift")}
                    }
                }
            }

            if view() == "calendar" {
                Calendar {
                    shifts: shifts.clone(),
                    week_start,
                    on_edit: move |id| {
                        editing_id.set(Some(id));
                        dialog_open.set(true);
                    },
                    on_reassign: move |id| reassign_id.set(Some(id)),
                    on_delete: move |id| confirm_delete.set(Some(id)),
                }
            } else {
                EmployeeShiftList { shifts: shifts.clone() }
            }

            div { class: "rounded-lg border border-blue-200 dark:border-blue-800 bg-blue-50 dark:bg-blue-900/20 px-4 py-3 text-sm text-blue-800 dark:text-blue-200",
                span { class: "font-semibold", {t("schedule.pro_tip")} }
                span { " " }
                {t("schedule.pro_tip_body")}
            }
        }

        {dialog_open().then(|| {
            let editing = editing_id().and_then(|id| store.read().get(id).cloned());
            rsx! {
                AddShiftDialog {
                    employees: roster.clone(),
                    editing,
                    on_submit: on_dialog_submit,
                    on_close: move |_| {
                        dialog_open.set(false);
                        editing_id.set(None);
                    },
                }
            }
        })}

        {reassign_id().map(|id| rsx! {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                    div { class: "space-y-1",
                        h2 { class: "text-lg font-semibold", {t("shift.reassign_title")} }
                        p { class: "text-sm text-slate-600 dark:text-slate-300", {t("shift.reassign_desc")} }
                    }
                    div { class: "max-h-64 space-y-1 overflow-y-auto",
                        for employee in roster.clone() {
                            button {
                                key: "{employee.id}",
                                class: "flex w-full items-center gap-3 rounded-md px-3 py-2 text-left hover:bg-slate-100 dark:hover:bg-slate-700",
                                onclick: {
                                    let employee = employee.clone();
                                    let msg = msg_reassigned.clone();
                                    move |_| {
                                        if store.write().reassign(id, &employee) {
                                            toasts.success(msg.clone());
                                        }
                                        reassign_id.set(None);
                                    }
                                },
                                span { class: "flex h-8 w-8 items-center justify-center rounded-full bg-blue-100 text-blue-700 text-xs font-semibold",
                                    {employee.initials.clone()}
                                }
                                div {
                                    p { class: "text-sm font-medium text-slate-900 dark:text-white", {employee.name.clone()} }
                                    p { class: "text-xs text-slate-500 dark:text-slate-400", {employee.role.clone()} }
                                }
                            }
                        }
                    }
                    div { class: "flex items-center justify-end",
                        button {
                            class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700 text-sm font-medium transition",
                            onclick: move |_| reassign_id.set(None),
                            {t("common.cancel")}
                        }
                    }
                }
            }
        })}

        {confirm_delete().map(|id| rsx! {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", {t("schedule.confirm_delete_title")} }
                    p { class: "text-sm text-slate-600 dark:text-slate-300",
                        {t("schedule.confirm_delete_message")}
                    }
                    div { class: "flex items-center justify-end gap-2",
                        button {
                            class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700 text-sm font-medium transition",
                            onclick: move |_| confirm_delete.set(None),
                            {t("common.cancel")}
                        }
                        button {
                            class: "inline-flex items-center h-9 px-3 rounded-md bg-red-600 hover:bg-red-500 text-white text-sm font-medium transition",
                            onclick: {
                                let msg = msg_deleted.clone();
                                move |_| {
                                    if store.write().remove(id).is_some() {
                                        toasts.success(msg.clone());
                                    }
                                    confirm_delete.set(None);
                                }
                            },
                            {t("common.delete")}
                        }
                    }
                }
            }
        })}

        {confirm_import().then(|| rsx! {
            div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                div { class: "w-full max-w-md rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                    h2 { class: "text-lg font-semibold", {t("schedule.confirm_import_title")} }
                    p { class: "text-sm text-slate-600 dark:text-slate-300",
                        {t("schedule.confirm_import_message")}
                    }
                    div { class: "flex items-center justify-end gap-2",
                        button {
                            class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700 text-sm font-medium transition",
                            onclick: move |_| confirm_import.set(false),
                            {t("common.cancel")}
                        }
                        button {
                            class: "inline-flex items-center h-9 px-3 rounded-md bg-red-600 hover:bg-red-500 text-white text-sm font-medium transition",
                            onclick: do_import,
                            {t("schedule.import")}
                        }
                    }
                }
            }
        })}
    }
}
