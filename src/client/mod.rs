//! Reqwest clients for the two remote generative services

mod chat;
mod image;

pub use chat::{ChatClient, DEFAULT_CHAT_ENDPOINT, DEFAULT_CHAT_MODEL};
pub use image::{ImageClient, DEFAULT_IMAGE_ENDPOINT, DEFAULT_IMAGE_MODEL};
