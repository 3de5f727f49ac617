use crate::i18n::{self, effective_lang};
use dioxus::prelude::*;

const LANGUAGES: [(&str, &str); 3] = [("fi", "Suomi"), ("sv", "Svenska"), ("en", "English")];

#[component]
fn Flag(lang: String) -> Element {
    match lang.as_str() {
        "fi" => rsx! {
            svg { view_box: "0 0 60 36", class: "h-4 w-6 rounded-[2px]",
                rect { width: "60", height: "36", fill: "#fff" }
                rect { x: "16", width: "10", height: "36", fill: "#002F6C" }
                rect { y: "13", width: "60", height: "10", fill: "#002F6C" }
            }
        },
        "sv" => rsx! {
            svg { view_box: "0 0 60 36", class: "h-4 w-6 rounded-[2px]",
                rect { width: "60", height: "36", fill: "#006AA7" }
                rect { x: "16", width: "8", height: "36", fill: "#FECC02" }
                rect { y: "14", width: "60", height: "8", fill: "#FECC02" }
            }
        },
        _ => rsx! {
            svg { view_box: "0 0 60 36", class: "h-4 w-6 rounded-[2px]",
                rect { width: "60", height: "36", fill: "#012169" }
                path { d: "M0,0 L60,36 M60,0 L0,36", stroke: "#fff", stroke_width: "6" }
                path { d: "M30,0 V36 M0,18 H60", stroke: "#fff", stroke_width: "12" }
                path { d: "M30,0 V36 M0,18 H60", stroke: "#C8102E", stroke_width: "7" }
            }
        },
    }
}

/// Flag dropdown in the header. Switching here only changes the active
/// language; the settings view offers the same choice plus "system".
#[component]
pub fn LanguageSelector() -> Element {
    let mut open = use_signal(|| false);
    let current = effective_lang();

    rsx! {
        div { class: "relative",
            button {
                class: "flex items-center gap-2 rounded-md border border-slate-300 dark:border-slate-600 px-2 py-1.5 hover:bg-slate-100 dark:hover:bg-slate-800",
                onclick: move |_| open.set(!open()),
                Flag { lang: current.clone() }
                span { class: "text-xs uppercase text-slate-600 dark:text-slate-300", {current.clone()} }
            }
            {open().then(|| rsx! {
                div { class: "absolute right-0 mt-1 w-36 rounded-md border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg py-1 z-50",
                    for (code, label) in LANGUAGES {
                        button {
                            key: "{code}",
                            class: "flex w-full items-center gap-2 px-3 py-1.5 text-sm text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-700",
                            onclick: move |_| {
                                i18n::set_lang(code);
                                open.set(false);
                            },
                            Flag { lang: code.to_string() }
                            span { {label} }
                        }
                    }
                }
            })}
        }
    }
}
