//! Blindbox — name blind-box gateway for remote generative models
//!
//! This crate turns a user-supplied name into "imagery" pairs, renders a
//! pair into an AI-generated image, and produces a short celebratory blurb.
//! All actual intelligence is delegated to two remote services: a
//! chat-completion model and a text-to-image model. The crate itself is
//! request validation, prompt templating and HTTP pass-through, with light
//! response reshaping.
//!
//! # Example
//!
//! ```rust,no_run
//! use blindbox::{BlindboxService, ChatClient, ImageClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> blindbox::Result<()> {
//!     let service = BlindboxService::new(
//!         ChatClient::new("text-key", "doubao-seed-1-6-flash-250615"),
//!         ImageClient::new("image-key", "doubao-seedream-3-0-t2i-250415"),
//!     );
//!
//!     let blindbox = service.generate_name_blindbox("孙小鱼").await?;
//!     for item in &blindbox {
//!         println!("#{}: {} × {} → {}",
//!             item.id, item.imagery1, item.imagery2, item.image_url);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod prompts;
#[cfg(feature = "server")]
pub mod server;
pub mod service;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export main types at crate root
pub use client::{ChatClient, ImageClient};
pub use error::{BlindboxError, Result};
pub use service::BlindboxService;
pub use traits::{ImageSynthesis, TextGeneration};
pub use types::{
    ChatOptions, GeneratedImage, ImageOptions, ImageryCombination, ImageryPair, Interpretation,
    Message, ResponseFormat, Role,
};
