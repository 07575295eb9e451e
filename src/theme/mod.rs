//! Visual theme of the showcase.

mod styles;

pub use styles::GLOBAL_STYLES;
