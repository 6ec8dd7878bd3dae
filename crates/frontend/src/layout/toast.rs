use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

const TOAST_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub text: String,
}

/// Centralized user-facing notification service. Every error the app
/// surfaces goes through here; nothing is retried or escalated beyond the
/// toast itself.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastKind::Info, text.into());
    }

    fn push(&self, kind: ToastKind, text: String) {
        let id = Uuid::new_v4();
        self.toasts.update(|list| {
            list.push(Toast { id, kind, text });
        });

        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the active toasts in a fixed corner stack. Mounted once by the
/// shell.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.css_class()
                            on:click=move |_| service.dismiss(id)
                        >
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
