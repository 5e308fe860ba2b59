use std::path::PathBuf;
use std::sync::Arc;

use crate::booter::Booter;
use crate::core::sniff::AllowList;
use crate::server::types::AppState;
use crate::utils::constants::{DEFAULT_ALLOWED_MIME_TYPES, DEFAULT_UPLOADS_DIR};
use crate::utils::get_env::{env_var_to_vec, get_env_var_or};

pub mod booter;
pub mod core;
pub mod server;
pub mod utils;

// Initialize app state from environment variables
fn init_app_state() -> AppState {
    let uploads_root = PathBuf::from(get_env_var_or("UPLOADS_DIR", DEFAULT_UPLOADS_DIR));

    let mut allowed_types = env_var_to_vec("ALLOWED_MIME_TYPES");
    if allowed_types.is_empty() {
        allowed_types = DEFAULT_ALLOWED_MIME_TYPES
            .iter()
            .map(|t| t.to_string())
            .collect();
    }

    AppState {
        uploads_root,
        allow_list: AllowList::new(allowed_types),
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let state = Arc::new(init_app_state());
    tracing::info!("Uploads root: {}", state.uploads_root.display());

    let router = server::router(state);

    let booter = Booter::new(9001).await?;
    booter.start(router).await?;

    Ok(())
}
