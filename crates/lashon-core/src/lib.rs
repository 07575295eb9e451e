//! Lashon Core Library
//!
//! Gender-aware text transformation for Hebrew interfaces.
//!
//! ## Overview
//!
//! Hebrew has no gender-neutral register: every second-person verb, adjective
//! and noun is inflected as either masculine or feminine. Interfaces are
//! usually authored in multi-gender spelling (`מוכן/ה`, `{אתה|את}`) and then
//! rewritten at display time to match the reader's grammatical gender.
//!
//! This crate provides:
//!
//! - A token grammar for multi-gender spellings and a pure
//!   [`genderize`](engine::genderize) function resolving them.
//! - The [`GenderEngine`](engine::GenderEngine) trait so the grammar can be
//!   swapped without touching consumers.
//! - A [`Binding`](binding::Binding) that keeps a mounted
//!   [`TextSubtree`](subtree::TextSubtree) synchronized with a reactive
//!   gender selector.
//! - [`Preferences`](prefs::Preferences) persistence for remembering the
//!   selected inflection between sessions.
//!
//! ## Quick Start
//!
//! ```
//! use lashon_core::{genderize, Gender};
//!
//! let authored = "ברוך/ה הבא/ה";
//!
//! assert_eq!(genderize(authored, Some(Gender::Male)), "ברוך הבא");
//! assert_eq!(genderize(authored, Some(Gender::Female)), "ברוכה הבאה");
//! // No selector: text stays as authored.
//! assert_eq!(genderize(authored, None), authored);
//! ```

pub mod binding;
pub mod engine;
pub mod error;
pub mod gender;
pub mod grammar;
pub mod prefs;
pub mod subtree;

// Re-exports
pub use binding::{Binding, BindingState};
pub use engine::{genderize, GenderEngine, TokenEngine};
pub use error::{LashonError, LashonResult};
pub use gender::Gender;
pub use grammar::{scan, Token};
pub use prefs::Preferences;
pub use subtree::{Fragment, Node, TextSubtree};
