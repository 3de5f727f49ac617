use crate::i18n::t;
use crate::store::Shift;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

//Icons
use dioxus_free_icons::icons::hi_solid_icons::HiDotsHorizontal;
use dioxus_free_icons::icons::hi_solid_icons::HiPencil;
use dioxus_free_icons::icons::hi_solid_icons::HiSwitchHorizontal;
use dioxus_free_icons::icons::hi_solid_icons::HiTrash;

/// Colored card for a single shift. The action menu only shows up when
/// handlers are wired in; the dashboard renders the card read-only.
#[component]
pub fn ShiftCard(
    shift: Shift,
    on_edit: Option<EventHandler<u32>>,
    on_reassign: Option<EventHandler<u32>>,
    on_delete: Option<EventHandler<u32>>,
) -> Element {
    let mut menu_open = use_signal(|| false);
    let shift_id = shift.id;
    let has_actions = on_edit.is_some() || on_reassign.is_some() || on_delete.is_some();
    let card_class = shift.kind.card_class();
    let time_class = shift.kind.time_class();

    rsx! {
        div { class: "relative rounded-lg border p-2 text-left {card_class}",
            div { class: "flex items-start justify-between gap-1",
                div { class: "flex items-center gap-2 min-w-0",
                    span { class: "flex h-7 w-7 shrink-0 items-center justify-center rounded-full bg-white/80 dark:bg-slate-900/60 text-xs font-semibold text-slate-700 dark:text-slate-200",
                        {shift.employee_initials.clone()}
                    }
                    div { class: "min-w-0",
                        p { class: "truncate text-sm font-medium text-slate-900 dark:text-white",
                            {shift.employee_name.clone()}
                        }
                        p { class: "truncate text-xs text-slate-500 dark:text-slate-400",
                            {shift.role.clone()}
                        }
                    }
                }
                if has_actions {
                    button {
                        class: "rounded p-1 text-slate-500 hover:bg-white/60 dark:hover:bg-slate-900/40",
                        onclick: move |_| menu_open.set(!menu_open()),
                        Icon { width: 16, height: 16, fill: "currentColor", icon: HiDotsHorizontal }
                    }
                }
            }
            p { class: "mt-1 text-xs font-medium {time_class}",
                {shift.time.clone()}
            }

            {menu_open().then(|| rsx! {
                div { class: "absolute right-1 top-8 z-20 w-32 rounded-md border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg py-1",
                    if let Some(handler) = on_edit {
                        button {
                            class: "flex w-full items-center gap-2 px-3 py-1.5 text-sm text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700",
                            onclick: move |_| {
                                menu_open.set(false);
                                handler.call(shift_id);
                            },
                            Icon { width: 14, height: 14, fill: "currentColor", icon: HiPencil }
                            {t("common.edit")}
                        }
                    }
                    if let Some(handler) = on_reassign {
                        button {
                            class: "flex w-full items-center gap-2 px-3 py-1.5 text-sm text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700",
                            onclick: move |_| {
                                menu_open.set(false);
                                handler.call(shift_id);
                            },
                            Icon { width: 14, height: 14, fill: "currentColor", icon: HiSwitchHorizontal }
                            {t("shift.reassign")}
                        }
                    }
                    if let Some(handler) = on_delete {
                        button {
                            class: "flex w-full items-center gap-2 px-3 py-1.5 text-sm text-red-600 hover:bg-red-50 dark:hover:bg-red-900/30",
                            onclick: move |_| {
                                menu_open.set(false);
                                handler.call(shift_id);
                            },
                            Icon { width: 14, height: 14, fill: "currentColor", icon: HiTrash }
                            {t("common.delete")}
                        }
                    }
                }
            })}
        }
    }
}
