// src/utils/uploads.rs

use std::path::Path;

use crate::error::AppError;

/// URL prefix under which stored uploads are served.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// A file written to the upload directory.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// Name on disk, `<unix-millis>-<original name>`.
    pub filename: String,
    pub original_name: String,
    pub bytes: Vec<u8>,
}

impl StoredUpload {
    /// Public path, e.g. `/uploads/1700000000000-notes.txt`.
    pub fn public_path(&self) -> String {
        format!("{}/{}", UPLOADS_ROUTE, self.filename)
    }

    /// Contents as text; invalid UTF-8 becomes U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Drops any directory components a client put into the file name.
pub fn sanitize_file_name(original: &str) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or_default().trim();

    match base {
        "" | "." | ".." => "upload".to_string(),
        name => name.to_string(),
    }
}

/// Writes `bytes` into `dir` under a timestamped name.
pub async fn store_upload(
    dir: &Path,
    original_name: &str,
    bytes: Vec<u8>,
) -> Result<StoredUpload, AppError> {
    tokio::fs::create_dir_all(dir).await?;

    let filename = format!(
        "{}-{}",
        chrono::Utc::now().timestamp_millis(),
        sanitize_file_name(original_name)
    );

    tokio::fs::write(dir.join(&filename), &bytes).await?;
    tracing::info!("Stored upload {} ({} bytes)", filename, bytes.len());

    Ok(StoredUpload {
        filename,
        original_name: original_name.to_string(),
        bytes,
    })
}
