pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use self::config::{Environment, Settings};
pub use error::ApiError;
pub use router::{TRANSCRIBE_PATH, create_router};
pub use state::AppState;
