//! Swatchd - dominant color extraction service.
//!
//! Accepts an image URL over HTTP, fetches the image, and returns its
//! "Vibrant" swatch as a hex color string.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
