use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

// reduce a client-supplied filename to its last real path segment. Directory
// components, drive prefixes and traversal segments are all discarded, which
// is the sole defense against writing outside the uploads root.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let basename = raw
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .filter(|segment| *segment != "." && *segment != "..")
        // windows drive prefix, e.g. "C:"
        .filter(|segment| !(segment.len() == 2 && segment.ends_with(':')))
        .next_back()?;

    let basename = basename.trim();
    if basename.is_empty() {
        return None;
    }

    Some(basename.to_string())
}

// pdfs get their own subfolder, everything else lands under images
pub fn dest_subfolder(mime_type: &str) -> &'static str {
    if mime_type.contains("pdf") { "pdfs" } else { "images" }
}

// create the destination tree (exists is success) and write the full buffer.
// Same-name uploads overwrite, last write wins.
pub async fn persist(
    uploads_root: &Path,
    subfolder: &str,
    filename: &str,
    data: &[u8],
) -> std::io::Result<PathBuf> {
    let dest_dir = uploads_root.join(subfolder);
    fs::create_dir_all(&dest_dir).await?;

    let dest_path = dest_dir.join(filename);
    let mut dest = fs::File::create(&dest_path).await?;
    dest.write_all(data).await?;
    dest.flush().await?;

    Ok(dest_path)
}
