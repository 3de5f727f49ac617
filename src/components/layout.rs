use dioxus::prelude::*;

//Components
use crate::components::Bottombar;
use crate::components::Sidebar;

#[cfg(target_arch = "wasm32")]
fn is_mobile() -> bool {
    use web_sys::window;

    let user_agent_check = window()
        .and_then(|w| w.navigator().user_agent().ok())
        .map(|ua| ua.contains("Mobile") || ua.contains("Android") || ua.contains("iPhone"))
        .unwrap_or(false);

    let size_check = window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w <= 768.0)
        .unwrap_or(false);

    user_agent_check || size_check
}

#[cfg(not(target_arch = "wasm32"))]
fn is_mobile() -> bool {
    false
}

#[component]
pub fn Layout() -> Element {
    if is_mobile() {
        rsx! {
            Bottombar {}
        }
    } else {
        rsx! {
            Sidebar {}
        }
    }
}
