//! Document preview driven by the imperative binding.
//!
//! The reactive path (`GenderedText`) resolves from props; this panel shows
//! the other integration: a `Binding` applied over an in-memory subtree, the
//! way a host without per-text components would do it.

use dioxus::prelude::*;
use lashon_core::{Binding, Fragment, Node};
use lashon_ui::use_gender_signal;

fn sample_document() -> Fragment {
    Fragment::new(vec![
        Node::element("h3", vec![Node::text("הסכם שימוש")]),
        Node::element(
            "p",
            vec![Node::text("המשתמש/ת מאשר/ת שקרא/ה את התנאים במלואם.")],
        ),
        Node::element(
            "p",
            vec![Node::text("{חתום|חתמי|נא לחתום} בתחתית העמוד לפני ההמשך.")],
        ),
    ])
}

/// Renders a small legal-style document through `Binding::apply`.
#[component]
pub fn DocumentPreview() -> Element {
    let selector = use_gender_signal();
    let mut fragment = use_signal(sample_document);
    let mut binding = use_signal(Binding::new);

    // Re-apply whenever the selector changes; the binding skips passes where
    // nothing changed.
    use_effect(move || {
        let gender = selector.and_then(|s| s());
        fragment.with_mut(|fragment| {
            binding.with_mut(|binding| binding.apply(Some(fragment), gender));
        });
    });

    let texts: Vec<String> = fragment
        .read()
        .texts()
        .into_iter()
        .map(str::to_string)
        .collect();

    rsx! {
        div { class: "document-preview",
            for (i, text) in texts.into_iter().enumerate() {
                p { key: "{i}", class: if i == 0 { "document-title" } else { "document-body" },
                    "{text}"
                }
            }
        }
    }
}
