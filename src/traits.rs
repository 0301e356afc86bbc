//! Remote generative-model trait seams

use async_trait::async_trait;

use crate::{ChatOptions, ImageOptions, Message, Result};

/// A remote chat-completion model consumed as a black-box HTTP service.
///
/// Implementations send the message list plus sampling parameters and
/// return the first choice's reply text verbatim.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Generate a single text reply for a conversation.
    async fn generate_text(&self, messages: &[Message], options: &ChatOptions) -> Result<String>;
}

/// A remote text-to-image model consumed as a black-box HTTP service.
///
/// Implementations return image locations (URLs or base64 payloads,
/// depending on the requested response format) in the order received.
/// A batch shorter than requested is valid — callers decide what a
/// missing item means.
#[async_trait]
pub trait ImageSynthesis: Send + Sync {
    /// Generate images for a prompt.
    async fn generate_images(&self, prompt: &str, options: &ImageOptions) -> Result<Vec<String>>;
}
