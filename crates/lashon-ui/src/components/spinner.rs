//! Loading spinner components.

use dioxus::prelude::*;

/// Spinner style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SpinnerVariant {
    /// Rotating ring, the default
    #[default]
    Ring,
    /// Three pulsing dots
    Dots,
    /// Indeterminate horizontal bar
    Bar,
}

impl SpinnerVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            SpinnerVariant::Ring => "spinner-ring",
            SpinnerVariant::Dots => "spinner-dots",
            SpinnerVariant::Bar => "spinner-bar",
        }
    }
}

/// Properties for the Spinner component
#[derive(Clone, PartialEq, Props)]
pub struct SpinnerProps {
    /// Visual style variant
    #[props(default)]
    pub variant: SpinnerVariant,
    /// Diameter in pixels (ring), dot size scale otherwise
    #[props(default = 24)]
    pub size: u32,
    /// Accessible label announced to screen readers
    #[props(default = "בטעינה...".to_string())]
    pub label: String,
}

/// Loading indicator.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Spinner { variant: SpinnerVariant::Dots, size: 16 }
/// }
/// ```
#[component]
pub fn Spinner(props: SpinnerProps) -> Element {
    let size = props.size;
    let body = match props.variant {
        SpinnerVariant::Ring => rsx! {
            svg {
                view_box: "0 0 50 50",
                width: "{size}",
                height: "{size}",
                "aria-hidden": "true",
                circle {
                    class: "spinner-track",
                    cx: "25",
                    cy: "25",
                    r: "20",
                    fill: "none",
                    stroke_width: "5",
                }
                circle {
                    class: "spinner-arc",
                    cx: "25",
                    cy: "25",
                    r: "20",
                    fill: "none",
                    stroke_width: "5",
                    stroke_dasharray: "90 150",
                    stroke_linecap: "round",
                }
            }
        },
        SpinnerVariant::Dots => rsx! {
            span { class: "dot" }
            span { class: "dot" }
            span { class: "dot" }
        },
        SpinnerVariant::Bar => rsx! {
            div { class: "bar-track",
                div { class: "bar-fill" }
            }
        },
    };

    rsx! {
        div {
            class: "{props.variant.class()}",
            role: "status",
            "aria-label": "{props.label}",
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_variant_classes() {
        assert_eq!(SpinnerVariant::Ring.class(), "spinner-ring");
        assert_eq!(SpinnerVariant::Dots.class(), "spinner-dots");
        assert_eq!(SpinnerVariant::Bar.class(), "spinner-bar");
    }

    #[test]
    fn spinner_variant_default_is_ring() {
        assert_eq!(SpinnerVariant::default(), SpinnerVariant::Ring);
    }
}
