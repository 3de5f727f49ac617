#![cfg_attr(feature = "bundle", windows_subsystem = "windows")]

use dioxus::prelude::*;

mod components;
mod i18n;
mod store;
mod views;

use components::{Layout, ToastStack, Toasts};
use store::AppSettings;
use views::{Dashboard, Employees, NotFound, Schedule, Settings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Dashboard {},
        #[route("/schedule")]
        Schedule {},
        #[route("/employees")]
        Employees {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting shiftwise");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Shared preferences; the settings view replaces the whole value on save.
    let settings = use_signal(AppSettings::default);
    provide_context(settings);
    i18n::provide_i18n();
    use_context_provider(Toasts::new);

    use_effect(move || {
        i18n::apply_theme(&settings.read().theme);
    });

    rsx! {
        document::Stylesheet { href: asset!("/assets/tailwind.css") }
        head {
            document::Meta { name: "description", content: "Staff shift scheduling" }
        }
        div { class: "app-layout flex min-h-screen",
            main { class: "main-content flex-1 bg-slate-50 dark:bg-slate-900 text-slate-900 dark:text-slate-100",
                Router::<Route> {}
            }
        }
        ToastStack {}
    }
}
