//! Navigation bar component.
//!
//! App-agnostic: the host passes links and receives navigation events, so
//! the component stays free of any router type.

use dioxus::prelude::*;

/// A single navigation entry
#[derive(Clone, PartialEq, Debug)]
pub struct NavLink {
    /// Stable identifier handed back through `onnavigate`
    pub id: String,
    /// Authored label (multi-gender spelling allowed)
    pub label: String,
}

impl NavLink {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> NavLink {
        NavLink {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// CSS class for a link, given whether it is the active one
fn link_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Properties for the NavBar component
#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    /// Brand text shown at the start (right edge in RTL)
    pub brand: String,
    /// Navigation entries, in display order
    pub links: Vec<NavLink>,
    /// Id of the currently active link
    #[props(default)]
    pub active: Option<String>,
    /// Called with the link id when a link is clicked
    pub onnavigate: EventHandler<String>,
    /// Trailing slot (status, avatar, gender switcher)
    #[props(default)]
    pub children: Element,
}

/// Horizontal navigation bar.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     NavBar {
///         brand: "לשון".to_string(),
///         links: vec![NavLink::new("home", "ראשי"), NavLink::new("about", "אודות")],
///         active: Some("home".to_string()),
///         onnavigate: move |id| navigate(id),
///     }
/// }
/// ```
#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    rsx! {
        nav { class: "navbar",
            span { class: "navbar-brand", "{props.brand}" }
            ul { class: "navbar-links",
                for link in props.links.iter() {
                    NavLinkItem {
                        key: "{link.id}",
                        link: link.clone(),
                        active: props.active.as_deref() == Some(link.id.as_str()),
                        onnavigate: props.onnavigate,
                    }
                }
            }
            div { class: "navbar-end",
                {props.children}
            }
        }
    }
}

/// One rendered navigation link
#[component]
fn NavLinkItem(link: NavLink, active: bool, onnavigate: EventHandler<String>) -> Element {
    let id = link.id.clone();

    rsx! {
        li {
            button {
                class: "{link_class(active)}",
                r#type: "button",
                onclick: move |_| onnavigate.call(id.clone()),
                "{link.label}"
            }
        }
    }
}
