use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::sniff::AllowList;

#[derive(Clone)]
pub struct AppState {
    pub uploads_root: PathBuf,
    pub allow_list: AllowList,
}

// Response structure
#[derive(Serialize, Debug, Deserialize, Clone)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub stored_as: Option<String>,
}
