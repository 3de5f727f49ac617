use dioxus::prelude::*;
use dioxus_free_icons::Icon;

use crate::i18n::t;
use crate::store::sample;

//Icons
use dioxus_free_icons::icons::hi_solid_icons::HiMail;
use dioxus_free_icons::icons::hi_solid_icons::HiPhone;
use dioxus_free_icons::icons::hi_solid_icons::HiSearch;
use dioxus_free_icons::icons::hi_solid_icons::HiUserAdd;

#[component]
pub fn Employees() -> Element {
    let mut query = use_signal(String::new);
    let roster = use_memo(sample::employees);

    let filtered: Vec<_> = roster
        .read()
        .iter()
        .filter(|e| e.matches(&query.read()))
        .cloned()
        .collect();

    rsx! {
        div { class: "space-y-6",
            div { class: "flex flex-wrap items-center justify-between gap-3",
                div {
                    h1 { class: "text-2xl sm:text-3xl font-semibold", {t("employees.title")} }
                    p { class: "text-sm text-slate-500 dark:text-slate-400", {t("employees.subtitle")} }
                }
                button { class: "inline-flex items-center gap-2 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium px-4 py-2 transition",
                    Icon { width: 16, height: 16, fill: "currentColor", icon: HiUserAdd }
                    {t("employees.add")}
                }
            }

            div { class: "relative max-w-sm",
                span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-slate-400",
                    Icon { width: 16, height: 16, fill: "currentColor", icon: HiSearch }
                }
                input {
                    class: "h-10 w-full rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 pl-9 pr-3 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                    placeholder: t("employees.search_placeholder"),
                    value: query.read().clone(),
                    oninput: move |e| query.set(e.value()),
                }
            }

            div { class: "overflow-x-auto rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm",
                table { class: "w-full text-left text-sm",
                    thead { class: "border-b border-slate-200 dark:border-slate-700 text-xs uppercase text-slate-500 dark:text-slate-400",
                        tr {
                            th { class: "px-4 py-3", {t("employees.table_employee")} }
                            th { class: "px-4 py-3", {t("employees.table_contact")} }
                            th { class: "px-4 py-3", {t("employees.table_role")} }
                            th { class: "px-4 py-3", {t("employees.table_department")} }
                            th { class: "px-4 py-3", {t("employees.table_status")} }
                        }
                    }
                    tbody { class: "divide-y divide-slate-200 dark:divide-slate-700",
                        if filtered.is_empty() {
                            tr {
                                td { class: "px-4 py-6 text-center text-slate-500 dark:text-slate-400", colspan: 5,
                                    {t("employees.none_found")}
                                }
                            }
                        }
                        for employee in filtered {
                            tr { key: "{employee.id}",
                                td { class: "px-4 py-3",
                                    div { class: "flex items-center gap-3",
                                        span { class: "flex h-9 w-9 items-center justify-center rounded-full bg-blue-100 text-blue-700 text-sm font-semibold",
                                            {employee.initials.clone()}
                                        }
                                        span { class: "font-medium text-slate-900 dark:text-white",
                                            {employee.name.clone()}
                                        }
                                    }
                                }
                                td { class: "px-4 py-3",
                                    div { class: "flex flex-col gap-0.5 text-slate-600 dark:text-slate-300",
                                        span { class: "inline-flex items-center gap-1.5",
                                            Icon { width: 13, height: 13, fill: "currentColor", icon: HiMail }
                                            {employee.email.clone()}
                                        }
                                        span { class: "inline-flex items-center gap-1.5",
                                            Icon { width: 13, height: 13, fill: "currentColor", icon: HiPhone }
                                            {employee.phone.clone()}
                                        }
                                    }
                                }
                                td { class: "px-4 py-3 text-slate-600 dark:text-slate-300", {employee.role.clone()} }
                                td { class: "px-4 py-3 text-slate-600 dark:text-slate-300", {employee.department.clone()} }
                                td { class: "px-4 py-3",
                                    span { class: format!("inline-flex rounded-full px-2.5 py-0.5 text-xs font-medium {}", employee.status.badge_class()),
                                        {t(employee.status.label_key())}
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
