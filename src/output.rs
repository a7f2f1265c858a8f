use std::path::{Path, PathBuf};

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::ArchiveError;
use crate::resource::ArchivedResources;

const STATE_REMOVE_COMMAND: &str = "terragrunt state rm";

/// One state removal script written to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ScriptSummary {
    #[tabled(rename = "Terraform file")]
    pub source: String,
    #[tabled(rename = "Script")]
    pub script: String,
    #[tabled(rename = "Removals")]
    pub removals: usize,
}

/// Renders the script body, one `terragrunt state rm` line per identifier.
pub fn render_script(archived: &ArchivedResources) -> String {
    archived
        .iter()
        .map(|identifier| format!("{} {}\n", STATE_REMOVE_COMMAND, identifier))
        .collect()
}

/// Writes `archived` as a removal script to `output_dir/script_name`.
pub async fn write_script(
    output_dir: &Path,
    script_name: &str,
    archived: &ArchivedResources,
) -> Result<PathBuf, ArchiveError> {
    let path = output_dir.join(script_name);

    tokio::fs::write(&path, render_script(archived))
        .await
        .map_err(|source| ArchiveError::Write {
            path: path.clone(),
            source,
        })?;

    tracing::info!(path = %path.display(), count = archived.len(), "removal script written");

    Ok(path)
}

pub async fn ensure_output_dir(output_dir: &Path) -> Result<(), ArchiveError> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|source| ArchiveError::Write {
            path: output_dir.to_path_buf(),
            source,
        })
}

pub fn render_summary(summaries: &[ScriptSummary]) -> String {
    if summaries.is_empty() {
        return "No archived repositories found".to_string();
    }

    let mut table = Table::new(summaries);
    table.with(Style::rounded());
    table.to_string()
}
