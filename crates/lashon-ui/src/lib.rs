//! Lashon UI Components
//!
//! Dioxus components for right-to-left, gender-aware Hebrew interfaces.
//!
//! The heart of the crate is [`GenderProvider`]: wrap any subtree in it and
//! every [`GenderedText`] underneath renders the inflection matching the
//! current selector, re-resolving when - and only when - the selector
//! changes.
//!
//! Around it lives the presentational collection an application shell needs:
//! buttons, spinners, navigation bar, footer, avatar badge, and the toast
//! and theme providers.

pub mod components;
pub mod provider;

pub use components::*;
pub use provider::{use_gender, use_gender_signal, GenderProvider, GenderSignal, GenderedText};
