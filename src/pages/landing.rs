//! Landing page - choose how the interface addresses you.

use dioxus::prelude::*;
use lashon_ui::{Button, ButtonVariant, GenderedText};

use crate::app::Route;
use crate::components::GenderSwitcher;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();

    rsx! {
        main { class: "landing",
            header { class: "landing-header",
                h1 { class: "page-title", "לשון" }
                p { class: "tagline",
                    GenderedText { text: "ממשק שפונה לכל {משתמש|משתמשת|משתמש/ת}".to_string() }
                }
            }

            section { class: "landing-choice",
                h2 { class: "section-header", "איך לפנות אליך?" }
                GenderSwitcher {}
                p { class: "body-text",
                    GenderedText {
                        text: "ברוך/ה הבא/ה! {אתה|את} מוזמן/ת לבחור את לשון הפנייה, \
                               והטקסט בכל הדפים יתאים את עצמו מיד."
                            .to_string(),
                    }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    navigator.push(Route::Gallery {});
                },
                "לגלריית הרכיבים"
            }
        }
    }
}
