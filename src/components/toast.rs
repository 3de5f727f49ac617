use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// App-wide toast sink, shared through context. Signals are Copy, so the
/// handle can move into event closures freely.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    counter: Signal<u32>,
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

impl Toasts {
    pub fn new() -> Toasts {
        Toasts {
            items: Signal::new(Vec::new()),
            counter: Signal::new(0),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.write().retain(|toast| toast.id != id);
    }

    fn push(&mut self, level: ToastLevel, message: String) {
        let id = {
            let mut counter = self.counter.write();
            *counter += 1;
            *counter
        };
        self.items.write().push(Toast { id, level, message });

        // Toasts fade out on their own after a few seconds in the browser.
        #[cfg(target_arch = "wasm32")]
        {
            use web_sys::wasm_bindgen::closure::Closure;
            use web_sys::wasm_bindgen::JsCast;
            let mut items = self.items;
            let cb = Closure::wrap(Box::new(move || {
                items.write().retain(|toast| toast.id != id);
            }) as Box<dyn FnMut()>);
            if let Some(win) = web_sys::window() {
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    4000,
                );
            }
            cb.forget();
        }
    }
}

#[component]
pub fn ToastStack() -> Element {
    let toasts = use_toasts();
    let items = toasts.items.read().clone();

    rsx! {
        div { class: "fixed bottom-20 sm:bottom-6 right-4 z-[60] flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Success => "flex items-center justify-between gap-3 rounded-lg border border-emerald-200 dark:border-emerald-800 bg-emerald-50 dark:bg-emerald-900/40 text-emerald-800 dark:text-emerald-200 px-4 py-3 text-sm shadow-md",
                        ToastLevel::Error => "flex items-center justify-between gap-3 rounded-lg border border-red-200 dark:border-red-800 bg-red-50 dark:bg-red-900/40 text-red-800 dark:text-red-200 px-4 py-3 text-sm shadow-md",
                    },
                    span { {toast.message.clone()} }
                    button {
                        class: "text-lg leading-none opacity-60 hover:opacity-100",
                        onclick: {
                            let mut toasts = toasts;
                            let id = toast.id;
                            move |_| toasts.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
