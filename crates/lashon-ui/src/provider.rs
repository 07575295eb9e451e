//! Gender context provider.
//!
//! [`GenderProvider`] owns the reactive gender selector and exposes it via
//! Dioxus context. [`GenderedText`] resolves authored multi-gender text
//! against it on every selector change. Because resolution always starts
//! from the authored prop, switching selectors swaps inflections cleanly -
//! there is no already-inflected text to re-inflect.

use dioxus::prelude::*;
use lashon_core::{genderize, Gender};

/// Context value provided by [`GenderProvider`]
pub type GenderSignal = Signal<Option<Gender>>;

/// Properties for the GenderProvider component
#[derive(Clone, PartialEq, Props)]
pub struct GenderProviderProps {
    /// Grammatical gender to display; `None` shows text as authored
    #[props(default)]
    pub gender: Option<Gender>,
    /// Content whose gendered text follows the selector
    pub children: Element,
}

/// Provides the gender selector to all descendant components.
///
/// Descendants read the selector with [`use_gender`] (or render through
/// [`GenderedText`]); controls like a gender switcher write it through
/// [`use_gender_signal`]. Updating the `gender` prop updates the context.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GenderProvider { gender: Some(Gender::Female),
///         GenderedText { text: "ברוך/ה הבא/ה" }
///     }
/// }
/// ```
#[component]
pub fn GenderProvider(props: GenderProviderProps) -> Element {
    let mut selector = use_signal(|| props.gender);
    use_context_provider(|| selector);

    // Follow the prop across renders; unrelated re-renders leave the signal
    // (and every subscriber) untouched.
    use_effect(use_reactive((&props.gender,), move |(gender,)| {
        if *selector.peek() != gender {
            tracing::debug!("gender selector changed to {:?}", gender);
            selector.set(gender);
        }
    }));

    rsx! {
        {props.children}
    }
}

/// Current gender selector.
///
/// Returns `None` both when no selector is chosen and when no
/// [`GenderProvider`] is mounted above the caller - unprovided text simply
/// stays as authored.
pub fn use_gender() -> Option<Gender> {
    let signal = use_hook(try_consume_context::<GenderSignal>);
    signal.map(|s| s())
}

/// Writable handle to the provider's selector, for gender switcher controls.
///
/// Returns `None` when no [`GenderProvider`] is mounted above the caller.
pub fn use_gender_signal() -> Option<GenderSignal> {
    use_hook(try_consume_context::<GenderSignal>)
}

/// Properties for the GenderedText component
#[derive(Clone, PartialEq, Props)]
pub struct GenderedTextProps {
    /// Authored text in multi-gender spelling
    pub text: String,
}

/// Renders authored text resolved for the current gender selector.
#[component]
pub fn GenderedText(props: GenderedTextProps) -> Element {
    let gender = use_gender();
    let resolved = genderize(&props.text, gender);

    rsx! {
        span { dir: "auto", "{resolved}" }
    }
}
