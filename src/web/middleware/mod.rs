//! Middleware for the Warren web surface.

mod cors;

pub use cors::create_cors_layer;
