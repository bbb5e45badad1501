//! Blob path naming for uploads.

/// Build the blob path for an upload: `{category}/{timestamp}_{filename}`.
///
/// Only the final component of `original_filename` is kept, so a client
/// that sends a full path cannot place the blob outside its category
/// directory. Two uploads of the same name to the same category within
/// one second share a path and the later one wins.
pub fn upload_path(category_name: &str, unix_timestamp: i64, original_filename: &str) -> String {
    let base = original_filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_filename);
    format!("{category_name}/{unix_timestamp}_{base}")
}
