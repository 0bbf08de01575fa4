//! API layer - HTTP endpoints and middleware

pub mod middleware;
pub mod predict;
pub mod router;
pub mod state;
pub mod types;
pub mod welcome;

pub use middleware::RequireApiKey;
pub use router::create_router;
pub use state::AppState;
