pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;

pub use error::ScoopError;
pub use router::{ScoopState, scoop_router};
