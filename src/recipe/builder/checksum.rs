//! Digest of the installed package tree.

use crate::{
    bail,
    recipe::{Result, error::ErrorExt},
};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

const FILE_TAG: u8 = b'F';
const SYMLINK_TAG: u8 = b'L';

/// SHA-256 over a directory tree.
///
/// Entries are visited in sorted path order. Each contributes its path
/// relative to `dir_path`, a NUL, a kind tag, a little-endian `u64` length
/// and then its payload: file content, or the link target for symlinks.
/// Renames, content changes and retargeted links all alter the digest.
/// Entries whose relative path is in `exclude` are skipped.
pub async fn calculate_tree_sha256(dir_path: &Path, exclude: &[&str]) -> Result<String> {
    if !dir_path.is_dir() {
        bail!("Package folder is not a directory: {}", dir_path.display());
    }

    let mut entries = Vec::new();
    for entry in walkdir::WalkDir::new(dir_path).follow_links(false) {
        let entry = entry?;
        let file_type = entry.file_type();
        if file_type.is_file() || file_type.is_symlink() {
            entries.push((entry.into_path(), file_type.is_symlink()));
        }
    }
    entries.sort();

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    for (path, is_symlink) in entries {
        let rel_path = path.strip_prefix(dir_path).unwrap_or(path.as_path());
        let rel = rel_path.to_string_lossy().replace('\\', "/");
        if exclude.contains(&rel.as_str()) {
            continue;
        }
        hasher.update(rel.as_bytes());
        hasher.update([0u8]);

        if is_symlink {
            let target = tokio::fs::read_link(&path)
                .await
                .fs_context("reading symlink target", &path)?;
            let target = target.to_string_lossy().replace('\\', "/");
            hasher.update([SYMLINK_TAG]);
            hasher.update((target.len() as u64).to_le_bytes());
            hasher.update(target.as_bytes());
            continue;
        }

        let mut file = tokio::fs::File::open(&path)
            .await
            .fs_context("opening file for hashing", &path)?;
        let len = file
            .metadata()
            .await
            .fs_context("reading file metadata", &path)?
            .len();
        hasher.update([FILE_TAG]);
        hasher.update(len.to_le_bytes());
        loop {
            let n = file
                .read(&mut buffer)
                .await
                .fs_context("reading file for hash calculation", &path)?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
        }
    }

    Ok(format!("{:x}", hasher.finalize()))
}
