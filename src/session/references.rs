//! Document reference to image mapping.
//!
//! Retrieval responses cite handbook documents by name; each document may
//! have a companion illustration stored as `<doc_name>.png` under the
//! host's images directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A document citation returned alongside an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocReference {
    /// The retrieval index the citation came from.
    pub index_id: String,
    /// The cited document's name.
    pub doc_name: String,
}

/// Returns the image file name for a document, by naming convention.
///
/// # Examples
///
/// ```
/// use leave_engine::session::image_file_name;
///
/// assert_eq!(image_file_name("leave_policy"), "leave_policy.png");
/// ```
pub fn image_file_name(doc_name: &str) -> String {
    format!("{doc_name}.png")
}

/// Resolves the companion image for a document under `images_dir`.
///
/// Returns the full path only when the file actually exists; the caller
/// falls back to a placeholder otherwise.
pub fn resolve_image(images_dir: &Path, doc_name: &str) -> Option<PathBuf> {
    let path = images_dir.join(image_file_name(doc_name));
    path.is_file().then_some(path)
}
