use std::path::{Path, PathBuf};

use crate::error::ArchiveError;
use crate::terraform::ClassifierConfig;

pub const TERRAFORM_EXTENSION: &str = ".tf";

// NOTE: config.tf is symlinked into every directory and mentions the marker in comments
const EXCLUDED_FILE: &str = "config.tf";

/// A candidate Terraform file one directory below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerraformFile {
    pub directory_name: String,
    pub file_name: String,
}

impl TerraformFile {
    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(&self.directory_name).join(&self.file_name)
    }

    /// `<directory>-<file stem>.sh`
    pub fn script_name(&self) -> String {
        let stem = self
            .file_name
            .strip_suffix(TERRAFORM_EXTENSION)
            .unwrap_or(&self.file_name);
        format!("{}-{}.sh", self.directory_name, stem)
    }
}

/// Lists `*.tf` files in the immediate child directories of `root`.
///
/// Only files whose text mentions the repository resource type or the target
/// module marker are returned. This is a cheap substring check, so returned
/// files may still contain no archived repository. Directories and files are
/// visited in name order.
pub async fn discover_terraform_files(
    root: &Path,
    config: &ClassifierConfig,
) -> Result<Vec<TerraformFile>, ArchiveError> {
    let mut results = Vec::new();

    for directory_name in list_entries(root, EntryFilter::Directories).await? {
        let directory = root.join(&directory_name);

        for file_name in list_entries(&directory, EntryFilter::NonDirectories).await? {
            if !file_name.ends_with(TERRAFORM_EXTENSION) || file_name == EXCLUDED_FILE {
                continue;
            }

            let path = directory.join(&file_name);
            let body = tokio::fs::read(&path)
                .await
                .map_err(|source| ArchiveError::FileRead {
                    path: path.clone(),
                    source,
                })?;

            if !mentions_repository(&String::from_utf8_lossy(&body), config) {
                tracing::debug!(path = %path.display(), "no repository references, skipping");
                continue;
            }

            results.push(TerraformFile {
                directory_name: directory_name.clone(),
                file_name,
            });
        }
    }

    tracing::info!(root = %root.display(), count = results.len(), "terraform files discovered");

    Ok(results)
}

fn mentions_repository(body: &str, config: &ClassifierConfig) -> bool {
    body.contains(&config.resource_type) || body.contains(&config.module_marker)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryFilter {
    Directories,
    NonDirectories,
}

async fn list_entries(dir: &Path, filter: EntryFilter) -> Result<Vec<String>, ArchiveError> {
    let read_error = |source| ArchiveError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_error)?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
        let is_dir = entry.file_type().await.map_err(read_error)?.is_dir();
        if is_dir != (filter == EntryFilter::Directories) {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    names.sort();
    Ok(names)
}
