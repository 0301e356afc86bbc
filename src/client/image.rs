//! Remote text-to-image client.
//!
//! Builds the synthesis request (prompt, size, count, format, optional
//! knobs), extracts the result locations in the order received, and maps
//! failures onto the uniform taxonomy. Two responses get a distinct
//! meaning: HTTP 429 is a rate limit, and a 400 whose body carries the
//! sensitive-content marker is a content rejection.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::traits::ImageSynthesis;
use crate::types::{ImageOptions, ResponseFormat};
use crate::{telemetry, BlindboxError, Result};

/// Default image-synthesis endpoint (Volcengine Ark).
pub const DEFAULT_IMAGE_ENDPOINT: &str =
    "https://ark.cn-beijing.volces.com/api/v3/images/generations";

/// Default text-to-image model identifier.
pub const DEFAULT_IMAGE_MODEL: &str = "doubao-seedream-3-0-t2i-250415";

/// Marker the service puts in a 400 body when it refuses a prompt.
const SENSITIVE_CONTENT_MARKER: &str = "SensitiveContentDetected";

/// Image generation takes longer than chat; wider ceiling.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for a remote text-to-image endpoint.
#[derive(Clone)]
pub struct ImageClient {
    api_key: String,
    model: String,
    endpoint: String,
    http: Client,
}

#[derive(Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
    response_format: ResponseFormat,
    watermark: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    guidance_scale: Option<f64>,
}

#[derive(Deserialize)]
struct ImageResponse {
    error: Option<serde_json::Value>,
    data: Option<Vec<ImageDatum>>,
}

#[derive(Deserialize)]
struct ImageDatum {
    url: Option<String>,
    b64_json: Option<String>,
}

impl ImageClient {
    /// Create a client against the default Ark endpoint.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, model, DEFAULT_IMAGE_ENDPOINT)
    }

    /// Create a client with a custom endpoint URL (configuration or
    /// wiremock tests).
    pub fn with_endpoint(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
            http,
        }
    }

    async fn call(&self, prompt: &str, options: &ImageOptions) -> Result<Vec<String>> {
        let payload = ImageRequest {
            model: &self.model,
            prompt,
            n: options.count,
            size: &options.size,
            response_format: options.response_format,
            watermark: options.watermark,
            seed: options.seed,
            guidance_scale: options.guidance_scale,
        };
        debug!(
            model = %self.model,
            count = options.count,
            size = %options.size,
            format = ?options.response_format,
            "calling image-synthesis service"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| BlindboxError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| BlindboxError::Network(e.to_string()))?;
            return Err(Self::map_failure_status(status.as_u16(), body));
        }

        let parsed: ImageResponse = response
            .json()
            .await
            .map_err(|e| BlindboxError::MalformedResponse(e.to_string()))?;
        debug!("image-synthesis reply received");

        if let Some(error) = parsed.error {
            return Err(BlindboxError::Api {
                status: status.as_u16(),
                message: error.to_string(),
            });
        }

        let data = parsed.data.ok_or_else(|| {
            BlindboxError::MalformedResponse("no data array in image reply".to_string())
        })?;

        let results: Vec<String> = data
            .into_iter()
            .filter_map(|item| match options.response_format {
                ResponseFormat::Url => item.url,
                ResponseFormat::B64Json => item.b64_json,
            })
            .collect();

        // Partial batches are valid; the caller decides what absence means.
        if results.len() < options.count as usize {
            warn!(
                returned = results.len(),
                requested = options.count,
                "image service returned fewer images than requested"
            );
            metrics::counter!(telemetry::SHORT_IMAGE_BATCHES_TOTAL).increment(1);
        }

        Ok(results)
    }

    fn map_failure_status(status: u16, body: String) -> BlindboxError {
        match status {
            429 => BlindboxError::RateLimited { message: body },
            400 if body.contains(SENSITIVE_CONTENT_MARKER) => BlindboxError::ContentRejected {
                reason: "input or generated content may contain sensitive information; \
                         try a different prompt"
                    .to_string(),
            },
            _ => BlindboxError::Api {
                status,
                message: body,
            },
        }
    }
}

#[async_trait]
impl ImageSynthesis for ImageClient {
    async fn generate_images(&self, prompt: &str, options: &ImageOptions) -> Result<Vec<String>> {
        let start = Instant::now();
        let result = self.call(prompt, options).await;

        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::REMOTE_CALLS_TOTAL,
            "service" => "image", "status" => status)
        .increment(1);
        metrics::histogram!(telemetry::REMOTE_CALL_DURATION_SECONDS, "service" => "image")
            .record(start.elapsed().as_secs_f64());

        result
    }
}
