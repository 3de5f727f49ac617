use dioxus::prelude::*;

use crate::i18n::t;
use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = navigator();
    tracing::warn!(path = %segments.join("/"), "unknown route");

    rsx! {
        div { class: "flex min-h-[60vh] flex-col items-center justify-center gap-4 text-center",
            p { class: "text-6xl font-bold text-blue-600", "404" }
            p { class: "text-lg text-slate-600 dark:text-slate-300", {t("not_found.message")} }
            button {
                class: "inline-flex items-center gap-2 rounded-md bg-blue-600 hover:bg-blue-500 text-white text-sm font-medium px-4 py-2 transition",
                onclick: move |_| {
                    nav.push(Route::Dashboard {});
                },
                {t("not_found.back_home")}
            }
        }
    }
}
