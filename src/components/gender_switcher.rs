//! Gender selection control.
//!
//! Writes the provider's selector and persists the choice, so the next
//! launch reopens with the same inflection.

use dioxus::prelude::*;
use lashon_core::{Gender, Preferences};
use lashon_ui::{use_gender_signal, use_toasts, Button, ButtonVariant, ToastHandle, ToastLevel};

/// Update the selector and persist it.
fn choose(mut selector: Signal<Option<Gender>>, mut toasts: ToastHandle, gender: Option<Gender>) {
    selector.set(gender);
    let prefs = Preferences { gender };
    if let Err(e) = prefs.save(&crate::get_data_dir()) {
        tracing::warn!("Failed to save preferences: {}", e);
        toasts.push(ToastLevel::Error, "שמירת ההעדפה נכשלה");
    }
}

/// Pill buttons selecting the interface's grammatical gender.
#[component]
pub fn GenderSwitcher() -> Element {
    let selector = use_gender_signal();
    let toasts = use_toasts();
    let Some(selector) = selector else {
        // No provider above us: nothing to control.
        return rsx! {};
    };

    rsx! {
        div { class: "gender-switcher", role: "group", "aria-label": "בחירת לשון פנייה",
            for gender in Gender::ALL {
                Button {
                    key: "{gender}",
                    variant: ButtonVariant::Pill,
                    selected: selector() == Some(gender),
                    onclick: move |_| choose(selector, toasts, Some(gender)),
                    "{gender.label()}"
                }
            }
            Button {
                variant: ButtonVariant::Pill,
                selected: selector().is_none(),
                onclick: move |_| choose(selector, toasts, None),
                "כמו שנכתב"
            }
        }
    }
}
