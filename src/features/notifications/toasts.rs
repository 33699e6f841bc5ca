use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::core::notifications::{Toast, ToastKind, ToastQueue};
use crate::core::Notifier;

/// App-wide toast queue. Toasts expire on their own or when clicked.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl Toasts {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(config.max_toasts)),
            duration_ms: config.toast_duration_ms,
        }
    }

    pub fn push(&self, kind: ToastKind, message: &str) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let queue = self.queue;
        let duration_ms = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    fn visible(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

impl Notifier for Toasts {
    fn notify_success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn notify_error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

pub fn provide_toasts(config: &AppConfig) -> Toasts {
    let toasts = Toasts::new(config);
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn ToastRegion() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-region" aria-live="polite">
            <For
                each=move || toasts.visible()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status" on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
