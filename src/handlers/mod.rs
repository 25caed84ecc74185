mod chat;
mod health;
mod metrics;
mod query;

pub use chat::chat_handler;
pub use health::{health_handler, root_handler};
pub use metrics::metrics_handler;
pub use query::query_handler;
