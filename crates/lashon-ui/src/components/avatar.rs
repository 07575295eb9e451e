//! Avatar badge component.

use dioxus::prelude::*;

/// Avatar size variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "avatar-sm",
            AvatarSize::Medium => "avatar-md",
            AvatarSize::Large => "avatar-lg",
        }
    }
}

/// Initials displayed when no image is available: the first letter of up to
/// two words, uppercased.
fn initials(name: &str) -> String {
    let mut letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        letters.push('?');
    }
    letters
}

/// Properties for the Avatar component
#[derive(Clone, PartialEq, Props)]
pub struct AvatarProps {
    /// Display name, used for initials and the accessible label
    pub name: String,
    /// Optional image URL; initials are shown when absent
    #[props(default)]
    pub image: Option<String>,
    /// Badge size
    #[props(default)]
    pub size: AvatarSize,
    /// Show a presence dot (online/offline) when set
    #[props(default)]
    pub online: Option<bool>,
}

/// Round avatar badge with image or initials fallback and an optional
/// presence dot.
#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let class = format!("avatar {}", props.size.class());

    rsx! {
        span { class: "{class}", role: "img", "aria-label": "{props.name}",
            if let Some(src) = &props.image {
                img { class: "avatar-image", src: "{src}", alt: "{props.name}" }
            } else {
                span { class: "avatar-initials", "{initials(&props.name)}" }
            }
            if let Some(online) = props.online {
                span {
                    class: if online { "presence-dot online" } else { "presence-dot" },
                    "aria-hidden": "true",
                }
            }
        }
    }
}
