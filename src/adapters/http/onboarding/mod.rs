//! Onboarding HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::OnboardingHandlers;
pub use routes::onboarding_routes;
