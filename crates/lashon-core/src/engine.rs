//! The genderization engine.
//!
//! [`genderize`] is a pure function from authored text and a gender selector
//! to displayed text. The [`GenderEngine`] trait is the seam consumers depend
//! on, so the token grammar can be replaced without touching the binding or
//! the UI integration.

use std::borrow::Cow;

use crate::gender::Gender;
use crate::grammar;

/// A text-genderization engine.
pub trait GenderEngine {
    /// Resolve every recognized gendered token in `text` to the form matching
    /// `selector`. A `None` selector returns the text unchanged.
    fn genderize<'a>(&self, text: &'a str, selector: Option<Gender>) -> Cow<'a, str>;
}

/// Default engine over the built-in token grammar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenEngine;

impl GenderEngine for TokenEngine {
    fn genderize<'a>(&self, text: &'a str, selector: Option<Gender>) -> Cow<'a, str> {
        match selector {
            Some(gender) => grammar::replace_all(text, gender),
            None => Cow::Borrowed(text),
        }
    }
}

/// Genderize `text` with the default [`TokenEngine`].
pub fn genderize(text: &str, selector: Option<Gender>) -> Cow<'_, str> {
    TokenEngine.genderize(text, selector)
}
