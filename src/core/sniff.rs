use std::collections::HashSet;

use crate::utils::constants::SNIFF_PREFIX_LEN;

// content types permitted for upload, built once at startup
#[derive(Debug, Clone)]
pub struct AllowList {
    types: HashSet<String>,
}

impl AllowList {
    pub fn new(types: Vec<String>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    pub fn permits(&self, mime_type: &str) -> bool {
        self.types.contains(mime_type)
    }
}

// sniff the MIME type from the leading bytes, never from the client-declared type.
// infer has no signature for plain text, so unrecognized UTF-8 content sniffs
// as text/plain and everything else falls back to application/octet-stream.
pub fn sniff_mime(data: &[u8]) -> String {
    let prefix = &data[..data.len().min(SNIFF_PREFIX_LEN)];

    if let Some(kind) = infer::get(prefix) {
        return kind.mime_type().to_string();
    }

    if std::str::from_utf8(prefix).is_ok() && !prefix.contains(&0) {
        return "text/plain".to_string();
    }

    "application/octet-stream".to_string()
}
