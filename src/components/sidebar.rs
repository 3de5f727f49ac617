use crate::components::LanguageSelector;
use crate::i18n::t;
use crate::Route;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;

//Icons
use dioxus_free_icons::icons::hi_solid_icons::HiBell;
use dioxus_free_icons::icons::hi_solid_icons::HiCalendar;
use dioxus_free_icons::icons::hi_solid_icons::HiChartBar;
use dioxus_free_icons::icons::hi_solid_icons::HiClock;
use dioxus_free_icons::icons::hi_solid_icons::HiCog;
use dioxus_free_icons::icons::hi_solid_icons::HiSearch;
use dioxus_free_icons::icons::hi_solid_icons::HiUsers;

fn item_class(active: bool) -> &'static str {
    if active {
        "flex items-center gap-3 p-2 rounded-lg bg-blue-600 text-white cursor-pointer"
    } else {
        "flex items-center gap-3 p-2 text-slate-700 rounded-lg dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700 cursor-pointer"
    }
}

#[component]
pub fn Sidebar() -> Element {
    let nav = navigator();
    let route = use_route::<Route>();

    rsx! {
        aside { class: "fixed top-0 left-0 z-40 w-64 h-screen transition-transform -translate-x-full sm:translate-x-0",
            div { class: "h-full px-3 py-4 overflow-y-auto bg-white border-r border-slate-200 dark:bg-slate-800 dark:border-slate-700",
                a { class: "flex items-center gap-2 ps-2.5 mb-6",
                    span { class: "flex h-8 w-8 items-center justify-center rounded-lg bg-blue-600 text-white",
                        Icon { width: 18, height: 18, fill: "currentColor", icon: HiClock }
                    }
                    span { class: "self-center text-xl font-semibold whitespace-nowrap text-slate-900 dark:text-white",
                        {t("app.name")}
                    }
                }
                ul { class: "space-y-2 font-medium",
                    li {
                        a { class: item_class(matches!(&route, Route::Dashboard {})),
                            onclick: move |_| {
                                nav.push(Route::Dashboard {});
                            },
                            Icon { width: 22, height: 22, fill: "currentColor", icon: HiChartBar }
                            span { {t("nav.dashboard")} }
                        }
                    }
                    li {
                        a { class: item_class(matches!(&route, Route::Schedule {})),
                            onclick: move |_| {
                                nav.push(Route::Schedule {});
                            },
                            Icon { width: 22, height: 22, fill: "currentColor", icon: HiCalendar }
                            span { {t("nav.schedule")} }
                        }
                    }
                    li {
                        a { class: item_class(matches!(&route, Route::Employees {})),
                            onclick: move |_| {
                                nav.push(Route::Employees {});
                            },
                            Icon { width: 22, height: 22, fill: "currentColor", icon: HiUsers }
                            span { {t("nav.employees")} }
                        }
                    }
                    li {
                        a { class: item_class(matches!(&route, Route::Settings {})),
                            onclick: move |_| {
                                nav.push(Route::Settings {});
                            },
                            Icon { width: 22, height: 22, fill: "currentColor", icon: HiCog }
                            span { {t("nav.settings")} }
                        }
                    }
                }
                div { class: "absolute bottom-4 left-3 right-3 flex items-center gap-3 rounded-lg border border-slate-200 dark:border-slate-700 p-2",
                    span { class: "flex h-9 w-9 items-center justify-center rounded-full bg-blue-100 text-blue-700 text-sm font-semibold",
                        "JD"
                    }
                    div { class: "flex flex-col",
                        span { class: "text-sm font-medium text-slate-900 dark:text-white", "John Doe" }
                        span { class: "text-xs text-slate-500 dark:text-slate-400", {t("layout.administrator")} }
                    }
                }
            }
        }

        div { class: "sm:ml-64",
            header { class: "sticky top-0 z-30 flex h-14 items-center justify-between gap-4 border-b border-slate-200 bg-white/80 px-4 backdrop-blur dark:border-slate-700 dark:bg-slate-900/80",
                div { class: "relative flex-1 max-w-md",
                    span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-slate-400",
                        Icon { width: 16, height: 16, fill: "currentColor", icon: HiSearch }
                    }
                    input {
                        class: "h-9 w-full rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 pl-9 pr-3 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                        placeholder: t("layout.search_placeholder"),
                    }
                }
                div { class: "flex items-center gap-3",
                    button { class: "relative rounded-md p-2 text-slate-500 hover:bg-slate-100 dark:hover:bg-slate-800",
                        Icon { width: 20, height: 20, fill: "currentColor", icon: HiBell }
                        span { class: "absolute right-1.5 top-1.5 h-2 w-2 rounded-full bg-red-500" }
                    }
                    LanguageSelector {}
                }
            }
            div { class: "p-4",
                Outlet::<Route> {}
            }
        }
    }
}
