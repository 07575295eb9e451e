//! App-level components of the showcase.

mod document_preview;
mod gender_switcher;

pub use document_preview::DocumentPreview;
pub use gender_switcher::GenderSwitcher;
