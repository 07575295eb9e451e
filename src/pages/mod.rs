//! Pages of the showcase application.

mod gallery;
mod landing;

pub use gallery::Gallery;
pub use landing::Landing;
