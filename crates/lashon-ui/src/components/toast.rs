//! Toast notifications.
//!
//! `ToastProvider` owns the queue and renders the viewport; descendants push
//! messages through [`use_toasts`]. Toasts dismiss themselves after a few
//! seconds or on click.

use std::time::Duration;

use dioxus::prelude::*;

use super::CloseButton;

/// How long a toast stays on screen
const DISMISS_AFTER: Duration = Duration::from_secs(4);

/// Toast severity levels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastLevel {
    /// Returns the CSS class for this level
    pub fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
        }
    }
}

/// A queued toast message
#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    /// Queue-unique id
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Handle for pushing and dismissing toasts, provided via context.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastHandle {
    /// Queue a toast; it dismisses itself after a few seconds.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        let id = {
            let mut next_id = self.next_id;
            let id = *next_id.peek();
            next_id.set(id + 1);
            id
        };
        self.toasts.write().push(Toast {
            id,
            level,
            message: message.into(),
        });

        let mut toasts = self.toasts;
        spawn(async move {
            tokio::time::sleep(DISMISS_AFTER).await;
            toasts.write().retain(|toast| toast.id != id);
        });
    }

    /// Remove a toast immediately
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}

/// Hook to push toasts from any descendant of `ToastProvider`.
pub fn use_toasts() -> ToastHandle {
    use_context::<ToastHandle>()
}

/// Properties for the ToastProvider component
#[derive(Clone, PartialEq, Props)]
pub struct ToastProviderProps {
    pub children: Element,
}

/// Provides the toast queue and renders queued toasts above the content.
#[component]
pub fn ToastProvider(props: ToastProviderProps) -> Element {
    let toasts: Signal<Vec<Toast>> = use_signal(Vec::new);
    let next_id: Signal<u64> = use_signal(|| 0);
    use_context_provider(|| ToastHandle { toasts, next_id });

    rsx! {
        {props.children}
        div { class: "toast-viewport",
            for toast in toasts() {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

/// One rendered toast with its dismiss button
#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut handle = use_toasts();
    let id = toast.id;

    rsx! {
        div { class: "toast {toast.level.class()}",
            span { class: "toast-message", "{toast.message}" }
            CloseButton {
                onclick: move |_| handle.dismiss(id),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_level_classes() {
        assert_eq!(ToastLevel::Info.class(), "toast-info");
        assert_eq!(ToastLevel::Success.class(), "toast-success");
        assert_eq!(ToastLevel::Error.class(), "toast-error");
    }

    #[test]
    fn toast_level_default_is_info() {
        assert_eq!(ToastLevel::default(), ToastLevel::Info);
    }
}
