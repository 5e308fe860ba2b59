use crate::core::sniff::sniff_mime;
use crate::core::store::{dest_subfolder, persist, sanitize_filename};
use crate::server::types::{AppState, UploadResponse};
use crate::utils::constants::UPLOAD_FIELD_NAME;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use serde_json::{Value, json};
use std::sync::Arc;

// server status handler
pub async fn server_status_handler() -> Json<Value> {
    Json(json!({"status": "running"}))
}

fn client_error(message: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(UploadResponse {
            success: false,
            message: message.to_string(),
            stored_as: None,
        }),
    )
        .into_response()
}

// detail is logged server-side, the client only gets a generic message
fn server_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(UploadResponse {
            success: false,
            message: "internal server error".to_string(),
            stored_as: None,
        }),
    )
        .into_response()
}

// upload handler: parse multipart form, sniff content type against the allow
// list, sanitize the client filename, persist under the uploads root
pub async fn upload_file_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut file_part: Option<(String, Bytes)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Failed to parse multipart form: {}", e);
                return client_error("Failed to parse multipart form");
            }
        };

        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        let raw_filename = field.file_name().unwrap_or_default().to_string();
        match field.bytes().await {
            Ok(data) => {
                file_part = Some((raw_filename, data));
                break;
            }
            Err(e) => {
                tracing::warn!("Failed to read file content from form: {}", e);
                return client_error("Failed to read file content from form");
            }
        }
    }

    let Some((raw_filename, data)) = file_part else {
        return client_error("Failed to retrieve file from form");
    };

    // sniffed from the leading bytes, the client-declared type is never trusted
    let mime_type = sniff_mime(&data);
    if !state.allow_list.permits(&mime_type) {
        tracing::info!(
            "Rejected upload of {:?}: sniffed type {} not allowed",
            raw_filename,
            mime_type
        );
        return client_error(&format!("{} is not allowed", mime_type));
    }

    let Some(safe_filename) = sanitize_filename(&raw_filename) else {
        tracing::info!("Rejected upload with unusable filename {:?}", raw_filename);
        return client_error("Invalid filename");
    };

    let subfolder = dest_subfolder(&mime_type);
    match persist(&state.uploads_root, subfolder, &safe_filename, &data).await {
        Ok(dest_path) => {
            tracing::info!(
                "Stored {} bytes at {} ({})",
                data.len(),
                dest_path.display(),
                mime_type
            );

            (
                StatusCode::OK,
                Json(UploadResponse {
                    success: true,
                    message: format!("File {} uploaded successfully", safe_filename),
                    stored_as: Some(format!("{}/{}", subfolder, safe_filename)),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Error persisting {:?}: {}", safe_filename, e);
            server_error()
        }
    }
}
