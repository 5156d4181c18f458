//! Agent runtime adapters.

mod http_gateway;
mod in_memory;

pub use http_gateway::{AgentGatewayConfig, HttpAgentGateway};
pub use in_memory::InMemoryAgentGateway;
