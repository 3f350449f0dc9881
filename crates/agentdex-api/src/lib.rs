// Agentdex API library
// Decision: Shared library for binaries (API server, upload and check tools)

// HTTP routes and router assembly
pub mod api;

// Environment configuration
pub mod config;

// Lookup service
pub mod services;
pub use services::AgentService;

// OpenAPI spec generation
pub mod openapi;

// Batch upload used by the upload-agents binary
pub mod upload;
