//! Theme provider.
//!
//! Owns the document direction and exposes it via context. The application
//! is RTL-first; `Ltr` exists for embedding individual components in
//! left-to-right hosts.

use dioxus::prelude::*;

/// Text/layout direction
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    /// Right-to-left, the default for Hebrew interfaces
    #[default]
    Rtl,
    /// Left-to-right
    Ltr,
}

impl Direction {
    /// Value for the HTML `dir` attribute
    pub fn as_attr(&self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}

/// Theme settings shared through context
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Theme {
    pub direction: Direction,
}

/// Current theme, falling back to defaults when no `ThemeProvider` is
/// mounted above the caller.
pub fn use_theme() -> Theme {
    use_hook(try_consume_context::<Theme>).unwrap_or_default()
}

/// Properties for the ThemeProvider component
#[derive(Clone, PartialEq, Props)]
pub struct ThemeProviderProps {
    /// Document direction
    #[props(default)]
    pub direction: Direction,
    pub children: Element,
}

/// Provides the theme and wraps children in a direction-attributed root.
#[component]
pub fn ThemeProvider(props: ThemeProviderProps) -> Element {
    let theme = Theme {
        direction: props.direction,
    };
    use_context_provider(|| theme);

    rsx! {
        div { class: "app-root", dir: "{theme.direction.as_attr()}",
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_attr_values() {
        assert_eq!(Direction::Rtl.as_attr(), "rtl");
        assert_eq!(Direction::Ltr.as_attr(), "ltr");
    }

    #[test]
    fn direction_default_is_rtl() {
        assert_eq!(Direction::default(), Direction::Rtl);
        assert_eq!(Theme::default().direction, Direction::Rtl);
    }
}
