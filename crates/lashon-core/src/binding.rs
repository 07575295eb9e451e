//! Binding between a mounted subtree and a gender selector.
//!
//! The binding owns the snapshot of authored text and the last-applied
//! selector. Every apply resolves from the snapshot, never from displayed
//! text, so switching selectors replaces the previous inflection instead of
//! compounding it.

use tracing::debug;

use crate::engine::{GenderEngine, TokenEngine};
use crate::gender::Gender;
use crate::subtree::TextSubtree;

/// Transformation state of a bound subtree.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BindingState {
    /// No selector applied yet; text is as authored
    #[default]
    Untransformed,
    /// Text currently shows this gender's inflection
    Transformed(Gender),
}

/// Associates a mounted subtree with the last-applied gender selector and
/// the authored text of its nodes.
///
/// The binding is created when the host mounts the subtree, updated on every
/// selector change, and simply dropped on unmount - the host owns the tree.
#[derive(Debug, Default)]
pub struct Binding<E: GenderEngine = TokenEngine> {
    engine: E,
    state: BindingState,
    originals: Vec<String>,
}

impl Binding<TokenEngine> {
    /// Binding over the default token grammar
    pub fn new() -> Binding<TokenEngine> {
        Binding::default()
    }

    /// Binding that immediately applies `selector` to a mounted container.
    pub fn mounted(container: &mut dyn TextSubtree, selector: Option<Gender>) -> Binding<TokenEngine> {
        let mut binding = Binding::new();
        binding.apply(Some(container), selector);
        binding
    }
}

impl<E: GenderEngine> Binding<E> {
    /// Binding over a custom engine
    pub fn with_engine(engine: E) -> Binding<E> {
        Binding {
            engine,
            state: BindingState::default(),
            originals: Vec::new(),
        }
    }

    /// Current transformation state
    pub fn state(&self) -> BindingState {
        self.state
    }

    /// The engine this binding resolves with
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Apply `selector` to every text node under `container`.
    ///
    /// Best-effort by contract: a `None` container (mount still pending) is
    /// skipped silently and a later call succeeds; a `None` selector leaves
    /// text untouched. Re-applying the selector already in effect is skipped
    /// without rescanning the subtree.
    pub fn apply(&mut self, container: Option<&mut dyn TextSubtree>, selector: Option<Gender>) {
        let Some(container) = container else {
            debug!("subtree not mounted yet, skipping genderize pass");
            return;
        };
        let Some(gender) = selector else {
            return;
        };

        let mut count = 0;
        container.visit_texts(&mut |_| count += 1);

        // The host may have swapped children since the last pass; a changed
        // node count invalidates the snapshot.
        let stale = count != self.originals.len();
        if !stale && self.state == BindingState::Transformed(gender) {
            return;
        }
        if stale {
            self.originals.clear();
            let originals = &mut self.originals;
            container.visit_texts(&mut |text| originals.push(text.clone()));
        }

        let engine = &self.engine;
        let originals = &self.originals;
        let mut index = 0;
        container.visit_texts(&mut |text| {
            if let Some(original) = originals.get(index) {
                let resolved = engine.genderize(original, Some(gender));
                if resolved != *text {
                    *text = resolved.into_owned();
                }
            }
            index += 1;
        });

        self.state = BindingState::Transformed(gender);
        debug!("applied {} inflection to {} text nodes", gender, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtree::{Fragment, Node};

    fn greeting() -> Fragment {
        Fragment::new(vec![
            Node::element("p", vec![Node::text("ברוך/ה הבא/ה")]),
            Node::text("{אתה|את} מוזמן/ת"),
        ])
    }

    #[test]
    fn starts_untransformed() {
        let binding = Binding::new();
        assert_eq!(binding.state(), BindingState::Untransformed);
    }

    #[test]
    fn unresolved_container_is_skipped_silently() {
        let mut binding = Binding::new();
        binding.apply(None, Some(Gender::Female));
        assert_eq!(binding.state(), BindingState::Untransformed);

        // A later call, once the container resolves, succeeds.
        let mut fragment = greeting();
        binding.apply(Some(&mut fragment), Some(Gender::Female));
        assert_eq!(binding.state(), BindingState::Transformed(Gender::Female));
        assert_eq!(fragment.texts(), vec!["ברוכה הבאה", "את מוזמנת"]);
    }

    #[test]
    fn none_selector_leaves_text_untouched() {
        let mut binding = Binding::new();
        let mut fragment = greeting();
        let before = fragment.clone();
        binding.apply(Some(&mut fragment), None);
        assert_eq!(fragment, before);
        assert_eq!(binding.state(), BindingState::Untransformed);
    }

    #[test]
    fn mounted_applies_immediately() {
        let mut fragment = greeting();
        let binding = Binding::mounted(&mut fragment, Some(Gender::Male));
        assert_eq!(binding.state(), BindingState::Transformed(Gender::Male));
        assert_eq!(fragment.texts(), vec!["ברוך הבא", "אתה מוזמן"]);
    }

    #[test]
    fn applies_male_inflection() {
        let mut binding = Binding::new();
        let mut fragment = greeting();
        binding.apply(Some(&mut fragment), Some(Gender::Male));
        assert_eq!(fragment.texts(), vec!["ברוך הבא", "אתה מוזמן"]);
    }

    #[test]
    fn selector_change_replaces_previous_inflection() {
        let mut binding = Binding::new();
        let mut fragment = greeting();

        binding.apply(Some(&mut fragment), Some(Gender::Female));
        assert_eq!(fragment.texts(), vec!["ברוכה הבאה", "את מוזמנת"]);

        // Back to the combined form, with no feminine residue.
        binding.apply(Some(&mut fragment), Some(Gender::Neutral));
        assert_eq!(fragment.texts(), vec!["ברוך/ה הבא/ה", "אתה/את מוזמן/ת"]);

        binding.apply(Some(&mut fragment), Some(Gender::Male));
        assert_eq!(fragment.texts(), vec!["ברוך הבא", "אתה מוזמן"]);
    }

    #[test]
    fn reapplying_same_selector_is_stable() {
        let mut binding = Binding::new();
        let mut fragment = greeting();
        binding.apply(Some(&mut fragment), Some(Gender::Female));
        let after_first = fragment.clone();
        binding.apply(Some(&mut fragment), Some(Gender::Female));
        assert_eq!(fragment, after_first);
    }

    #[test]
    fn host_content_swap_refreshes_snapshot() {
        let mut binding = Binding::new();
        let mut fragment = greeting();
        binding.apply(Some(&mut fragment), Some(Gender::Female));

        // Host replaces the subtree's children entirely.
        fragment.set_nodes(vec![Node::text("שלום מנהל/ת")]);
        binding.apply(Some(&mut fragment), Some(Gender::Female));
        assert_eq!(fragment.texts(), vec!["שלום מנהלת"]);
    }

    #[test]
    fn custom_engine_is_honored() {
        struct Upper;
        impl GenderEngine for Upper {
            fn genderize<'a>(
                &self,
                text: &'a str,
                selector: Option<Gender>,
            ) -> std::borrow::Cow<'a, str> {
                match selector {
                    Some(_) => std::borrow::Cow::Owned(text.to_uppercase()),
                    None => std::borrow::Cow::Borrowed(text),
                }
            }
        }

        let mut binding = Binding::with_engine(Upper);
        let mut fragment = Fragment::new(vec![Node::text("shalom")]);
        binding.apply(Some(&mut fragment), Some(Gender::Male));
        assert_eq!(fragment.texts(), vec!["SHALOM"]);
    }
}
