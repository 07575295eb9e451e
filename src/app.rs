use dioxus::prelude::*;
use lashon_core::Preferences;
use lashon_ui::{GenderProvider, ThemeProvider, ToastProvider};

use crate::pages::{Gallery, Landing};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the gender choice
/// - `/gallery` - Component showcase
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/gallery")]
    Gallery {},
}

/// Root application component.
///
/// Provides global styles, the theme/toast/gender providers, and routing.
#[component]
pub fn App() -> Element {
    // Command line wins; otherwise the preference saved by the switcher.
    let initial = use_hook(|| {
        crate::get_initial_gender().or_else(|| {
            Preferences::load(&crate::get_data_dir())
                .map(|prefs| prefs.gender)
                .unwrap_or_else(|e| {
                    tracing::warn!("Failed to load preferences: {}", e);
                    None
                })
        })
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        ThemeProvider {
            ToastProvider {
                GenderProvider { gender: initial,
                    Router::<Route> {}
                }
            }
        }
    }
}
