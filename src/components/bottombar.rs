use crate::i18n::t;
use crate::Route;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

//Icons
use dioxus_free_icons::icons::hi_solid_icons::HiCalendar;
use dioxus_free_icons::icons::hi_solid_icons::HiChartBar;
use dioxus_free_icons::icons::hi_solid_icons::HiCog;
use dioxus_free_icons::icons::hi_solid_icons::HiUsers;

#[component]
pub fn Bottombar() -> Element {
    let nav = navigator();

    rsx! {
        div { id: "navbar", class: "fixed bottom-0 left-0 z-50 w-full h-16 bg-white border-t border-slate-200 dark:bg-slate-800 dark:border-slate-700",
            div { class: "grid h-full max-w-lg grid-cols-4 mx-auto font-medium",
                button { class: "inline-flex flex-col items-center justify-center px-5 hover:bg-slate-50 dark:hover:bg-slate-700 group",
                    onclick: move |_| {
                        nav.push(Route::Dashboard {});
                    },
                    Icon { width: 24, height: 24, fill: "currentColor", icon: HiChartBar }
                    span { class: "text-xs text-slate-500 dark:text-slate-400 group-hover:text-blue-600",
                        {t("nav.dashboard")}
                    }
                }
                button { class: "inline-flex flex-col items-center justify-center px-5 hover:bg-slate-50 dark:hover:bg-slate-700 group",
                    onclick: move |_| {
                        nav.push(Route::Schedule {});
                    },
                    Icon { width: 24, height: 24, fill: "currentColor", icon: HiCalendar }
                    span { class: "text-xs text-slate-500 dark:text-slate-400 group-hover:text-blue-600",
                        {t("nav.schedule")}
                    }
                }
                button { class: "inline-flex flex-col items-center justify-center px-5 hover:bg-slate-50 dark:hover:bg-slate-700 group",
                    onclick: move |_| {
                        nav.push(Route::Employees {});
                    },
                    Icon { width: 24, height: 24, fill: "currentColor", icon: HiUsers }
                    span { class: "text-xs text-slate-500 dark:text-slate-400 group-hover:text-blue-600",
                        {t("nav.employees")}
                    }
                }
                button { class: "inline-flex flex-col items-center justify-center px-5 hover:bg-slate-50 dark:hover:bg-slate-700 group",
                    onclick: move |_| {
                        nav.push(Route::Settings {});
                    },
                    Icon { width: 24, height: 24, fill: "currentColor", icon: HiCog }
                    span { class: "text-xs text-slate-500 dark:text-slate-400 group-hover:text-blue-600",
                        {t("nav.settings")}
                    }
                }
            }
        }

        div { class: "p-4 pb-20",
            Outlet::<Route> {}
        }
    }
}
