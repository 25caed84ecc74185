pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod prompt;
pub mod router;
pub mod state;
pub mod upstream;

pub use router::build_router;
pub use state::AppState;
