//! Component showcase page.

use dioxus::prelude::*;
use lashon_ui::{
    use_toasts, Avatar, AvatarSize, Button, ButtonVariant, Footer, GenderedText, NavBar, NavLink,
    Spinner, SpinnerVariant, ToastLevel,
};

use crate::app::Route;
use crate::components::{DocumentPreview, GenderSwitcher};

/// Component showcase, grouped by section.
#[component]
pub fn Gallery() -> Element {
    let navigator = use_navigator();
    let mut toasts = use_toasts();

    rsx! {
        NavBar {
            brand: "לשון".to_string(),
            links: vec![
                NavLink::new("home", "ראשי"),
                NavLink::new("gallery", "גלריה"),
            ],
            active: Some("gallery".to_string()),
            onnavigate: move |id: String| {
                if id == "home" {
                    navigator.push(Route::Landing {});
                }
            },
            GenderSwitcher {}
        }

        main { class: "gallery",
            section { class: "gallery-section",
                h2 { class: "section-header", "טקסט מותאם" }
                p { class: "body-text",
                    GenderedText {
                        text: "{אתה|את} רואה כאן את הטקסט בלשון שבחרת. משתמשים/ות \
                               אחרים/ות יראו אותו בלשון שלהם/ן."
                            .to_string(),
                    }
                }
                DocumentPreview {}
            }

            section { class: "gallery-section",
                h2 { class: "section-header", "כפתורים" }
                div { class: "gallery-row",
                    Button { variant: ButtonVariant::Primary, "פעולה ראשית" }
                    Button { variant: ButtonVariant::Ghost, "פעולה משנית" }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| {
                            toasts.push(ToastLevel::Error, "הפעולה בוטלה");
                        },
                        "מחיקה"
                    }
                }
            }

            section { class: "gallery-section",
                h2 { class: "section-header", "מחווני טעינה" }
                div { class: "gallery-row",
                    Spinner { variant: SpinnerVariant::Ring, size: 32 }
                    Spinner { variant: SpinnerVariant::Dots }
                    Spinner { variant: SpinnerVariant::Bar }
                }
            }

            section { class: "gallery-section",
                h2 { class: "section-header", "תגי משתמש" }
                div { class: "gallery-row",
                    Avatar { name: "דנה כהן".to_string(), size: AvatarSize::Large, online: Some(true) }
                    Avatar { name: "יובל לוי".to_string() }
                    Avatar { name: "Dana Cohen".to_string(), size: AvatarSize::Small, online: Some(false) }
                }
            }

            section { class: "gallery-section",
                h2 { class: "section-header", "התראות" }
                div { class: "gallery-row",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            toasts.push(ToastLevel::Success, "ההעדפה נשמרה");
                        },
                        "הצגת הצלחה"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            toasts.push(ToastLevel::Info, "עדכון זמין");
                        },
                        "הצגת עדכון"
                    }
                }
            }
        }

        Footer { app_name: "לשון".to_string(), year: 2026 }
    }
}
