use dioxus::prelude::*;

/// Dashboard summary tile. `trend` is a preformatted delta like "+2.5%";
/// negative deltas render red.
#[component]
pub fn StatCard(title: String, value: String, trend: String, caption: String) -> Element {
    let trend_class = if trend.starts_with('-') {
        "text-sm font-medium text-red-600"
    } else {
        "text-sm font-medium text-emerald-600"
    };

    rsx! {
        div { class: "rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-5 space-y-2",
            p { class: "text-sm text-slate-500 dark:text-slate-400", {title} }
            p { class: "text-3xl font-semibold text-slate-900 dark:text-white", {value} }
            p { class: "text-xs text-slate-500 dark:text-slate-400",
                span { class: trend_class, {trend} }
                span { " " }
                {caption}
            }
        }
    }
}
