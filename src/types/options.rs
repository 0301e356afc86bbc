//! Request options for the remote model clients

use serde::{Deserialize, Serialize};

/// Sampling options for chat requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

impl ChatOptions {
    pub fn temperature(mut self, temp: f64) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn top_p(mut self, p: f64) -> Self {
        self.top_p = Some(p);
        self
    }
}

/// Desired encoding of generated images in the response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Downloadable link per image
    Url,
    /// Base64-encoded payload per image
    B64Json,
}

/// Options for image generation requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageOptions {
    /// Number of images requested. The remote may return fewer; that is
    /// logged, not an error.
    pub count: u32,
    /// Width and height in pixels, e.g. "1024x1024".
    pub size: String,
    pub response_format: ResponseFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    pub watermark: bool,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            count: 1,
            size: "1024x1024".to_string(),
            response_format: ResponseFormat::Url,
            seed: None,
            guidance_scale: None,
            watermark: false,
        }
    }
}

impl ImageOptions {
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn guidance_scale(mut self, scale: f64) -> Self {
        self.guidance_scale = Some(scale);
        self
    }

    pub fn watermark(mut self, watermark: bool) -> Self {
        self.watermark = watermark;
        self
    }
}
