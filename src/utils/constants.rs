// 10 MiB request body cap, matching the multipart buffer bound
pub const SERVER_REQUEST_BODY_LIMIT: usize = 10 * 1024 * 1024;

// leading bytes read for magic-byte MIME detection
pub const SNIFF_PREFIX_LEN: usize = 512;

pub const UPLOAD_FIELD_NAME: &str = "file";

pub const DEFAULT_UPLOADS_DIR: &str = "uploads";

pub const DEFAULT_ALLOWED_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "application/pdf"];
