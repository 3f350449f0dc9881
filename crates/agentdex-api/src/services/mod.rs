// Services layer for business logic
// Services own identifier validation and error classification, calling storage directly

pub mod agent;

pub use agent::AgentService;
