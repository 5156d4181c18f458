//! Transcript HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::TranscriptHandlers;
pub use routes::transcript_routes;
