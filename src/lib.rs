//! Fractional Quest - Onboarding and profile service
//!
//! This crate implements the chat-based onboarding wizard for the Fractional
//! Quest platform: a five-step profile setup driven by a remote conversational
//! agent, with the profile store, agent state mirror, and progress
//! presentation behind explicit ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
