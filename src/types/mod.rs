//! Domain and request types

mod imagery;
mod message;
mod options;

pub use imagery::{GeneratedImage, ImageryCombination, ImageryPair, Interpretation};
pub use message::{Message, Role};
pub use options::{ChatOptions, ImageOptions, ResponseFormat};
