//! Axum router and endpoint handlers.
//!
//! Four JSON endpoints over the four workflows. Every workflow failure
//! collapses to HTTP 500 with `{"detail": <message>}` — the baseline
//! behavior of the service this gateway fronts; the error enum keeps the
//! distinction available for a future surface change.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::service::BlindboxService;
use crate::traits::{ImageSynthesis, TextGeneration};
use crate::types::{GeneratedImage, ImageryPair, Interpretation};
use crate::BlindboxError;

/// Request body for the name-based endpoints.
#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

/// Request body for the pair-based endpoints.
#[derive(Debug, Deserialize)]
pub struct ImageryRequest {
    pub imagery1: String,
    pub imagery2: String,
}

impl ImageryRequest {
    fn into_pair(self) -> ImageryPair {
        ImageryPair::new(self.imagery1, self.imagery2)
    }
}

/// Response body for `/api/generate_image`.
#[derive(Debug, Serialize)]
pub struct ImagesResponse {
    /// Zero- or one-element by current policy.
    pub images: Vec<String>,
}

/// Response body for `/api/generate_feedback`.
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn internal_error(err: BlindboxError) -> ApiError {
    error!(error = %err, "request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            detail: err.to_string(),
        }),
    )
}

/// Build the router for a service instance.
pub fn router<T, I>(service: Arc<BlindboxService<T, I>>) -> Router
where
    T: TextGeneration + 'static,
    I: ImageSynthesis + 'static,
{
    Router::new()
        .route("/api/interpret_name", post(interpret_name::<T, I>))
        .route("/api/generate_image", post(generate_image::<T, I>))
        .route(
            "/api/generate_name_images",
            post(generate_name_images::<T, I>),
        )
        .route("/api/generate_feedback", post(generate_feedback::<T, I>))
        // Wide-open CORS, matching the frontend-facing deployment
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// POST /api/interpret_name — bare JSON array of imagery combinations.
async fn interpret_name<T: TextGeneration, I: ImageSynthesis>(
    State(service): State<Arc<BlindboxService<T, I>>>,
    Json(request): Json<NameRequest>,
) -> Result<Json<Interpretation>, ApiError> {
    let interpretation = service
        .interpret_name(&request.name)
        .await
        .map_err(internal_error)?;
    Ok(Json(interpretation))
}

/// POST /api/generate_image — `{"images": [url]}`.
async fn generate_image<T: TextGeneration, I: ImageSynthesis>(
    State(service): State<Arc<BlindboxService<T, I>>>,
    Json(request): Json<ImageryRequest>,
) -> Result<Json<ImagesResponse>, ApiError> {
    let url = service
        .generate_image_for_pair(&request.into_pair())
        .await
        .map_err(internal_error)?;
    Ok(Json(ImagesResponse {
        images: url.into_iter().collect(),
    }))
}

/// POST /api/generate_name_images — bare JSON array of blind-box items.
async fn generate_name_images<T: TextGeneration, I: ImageSynthesis>(
    State(service): State<Arc<BlindboxService<T, I>>>,
    Json(request): Json<NameRequest>,
) -> Result<Json<Vec<GeneratedImage>>, ApiError> {
    let blindbox = service
        .generate_name_blindbox(&request.name)
        .await
        .map_err(internal_error)?;
    Ok(Json(blindbox))
}

/// POST /api/generate_feedback — `{"feedback": <blurb>}`.
async fn generate_feedback<T: TextGeneration, I: ImageSynthesis>(
    State(service): State<Arc<BlindboxService<T, I>>>,
    Json(request): Json<ImageryRequest>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let feedback = service
        .generate_feedback(&request.into_pair())
        .await
        .map_err(internal_error)?;
    Ok(Json(FeedbackResponse { feedback }))
}
