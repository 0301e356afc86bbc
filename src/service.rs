//! The four blind-box workflows.
//!
//! [`BlindboxService`] composes the prompt builders with the two remote
//! clients. It is generic over the client traits so tests can substitute
//! in-process fakes; production code uses [`ChatClient`](crate::ChatClient)
//! and [`ImageClient`](crate::ImageClient).

use tracing::{info, warn};

use crate::prompts;
use crate::traits::{ImageSynthesis, TextGeneration};
use crate::types::{
    ChatOptions, GeneratedImage, ImageOptions, ImageryPair, Interpretation, Message,
};
use crate::{telemetry, Result};

/// Sampling used for both text workflows. High-variance on purpose:
/// creative divergence is a design goal, not a defect.
const TEMPERATURE: f64 = 1.2;
const TOP_P: f64 = 0.9;

/// Internal image policy, owned by the workflow and not caller-configurable.
/// Count 1, 1024x1024, URL format.
fn image_policy() -> ImageOptions {
    ImageOptions::default()
}

/// Workflows over one chat-completion client and one image client.
pub struct BlindboxService<T, I> {
    text: T,
    image: I,
}

impl<T: TextGeneration, I: ImageSynthesis> BlindboxService<T, I> {
    pub fn new(text: T, image: I) -> Self {
        Self { text, image }
    }

    /// Turn a name into exactly three imagery combinations.
    ///
    /// The model reply is parsed strictly; any shape deviation fails with
    /// [`BlindboxError::ResponseParse`](crate::BlindboxError::ResponseParse)
    /// and is never retried.
    pub async fn interpret_name(&self, name: &str) -> Result<Interpretation> {
        let messages = [
            Message::system(prompts::INTERPRETER_PERSONA),
            Message::user(prompts::interpretation_prompt(name)),
        ];
        let options = ChatOptions::default().temperature(TEMPERATURE).top_p(TOP_P);

        let reply = self.text.generate_text(&messages, &options).await?;
        Interpretation::from_reply(&reply)
    }

    /// Render one imagery pair into one image URL.
    ///
    /// Returns `Ok(None)` when the service answered successfully but with an
    /// empty batch — a soft miss, left to the caller to interpret.
    pub async fn generate_image_for_pair(&self, pair: &ImageryPair) -> Result<Option<String>> {
        let prompt = prompts::image_prompt(&pair.imagery1, &pair.imagery2);
        let mut urls = self.image.generate_images(&prompt, &image_policy()).await?;

        if urls.is_empty() {
            Ok(None)
        } else {
            Ok(Some(urls.remove(0)))
        }
    }

    /// Produce the short celebratory blurb for one imagery pair.
    ///
    /// The reply is returned unprocessed; the five-aspect structure and the
    /// length cap are enforced only by the prompt, not programmatically.
    pub async fn generate_feedback(&self, pair: &ImageryPair) -> Result<String> {
        let messages = [
            Message::system(prompts::FEEDBACK_PERSONA),
            Message::user(prompts::feedback_prompt(&pair.imagery1, &pair.imagery2)),
        ];
        let options = ChatOptions::default().temperature(TEMPERATURE).top_p(TOP_P);

        self.text.generate_text(&messages, &options).await
    }

    /// The end-to-end blind box: interpret the name, then render one image
    /// per combination, strictly sequentially and in input order.
    ///
    /// A combination whose image call returns no URL is dropped from the
    /// output (logged and counted, never fatal). Any hard failure from
    /// interpretation or an image call aborts the whole batch.
    pub async fn generate_name_blindbox(&self, name: &str) -> Result<Vec<GeneratedImage>> {
        let interpretation = self.interpret_name(name).await?;

        let mut results = Vec::with_capacity(interpretation.combinations().len());
        for combination in interpretation {
            match self.generate_image_for_pair(&combination.pair()).await? {
                Some(url) => results.push(GeneratedImage::new(combination, url)),
                None => {
                    warn!(
                        id = combination.id,
                        imagery1 = %combination.imagery1,
                        imagery2 = %combination.imagery2,
                        "image service returned no URL; dropping combination from blind box"
                    );
                    metrics::counter!(telemetry::DROPPED_ITEMS_TOTAL,
                        "operation" => "blindbox")
                    .increment(1);
                }
            }
        }

        info!(name = %name, items = results.len(), "blind box assembled");
        Ok(results)
    }
}
