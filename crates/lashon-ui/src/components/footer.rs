//! Footer component.

use dioxus::prelude::*;

/// Copyright line shown in the footer
fn copyright_line(app_name: &str, year: i32) -> String {
    format!("© {} {}", year, app_name)
}

/// Properties for the Footer component
#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    /// Application name for the copyright line
    pub app_name: String,
    /// Copyright year
    pub year: i32,
    /// Extra footer content (links, credits)
    #[props(default)]
    pub children: Element,
}

/// Page footer with a copyright line and an optional content slot.
#[component]
pub fn Footer(props: FooterProps) -> Element {
    rsx! {
        footer { class: "footer",
            span { class: "footer-copyright",
                "{copyright_line(&props.app_name, props.year)}"
            }
            div { class: "footer-content",
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line_format() {
        assert_eq!(copyright_line("לשון", 2026), "© 2026 לשון");
    }
}
