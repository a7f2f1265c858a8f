use std::path::Path;
use std::sync::Arc;

use crate::discovery::TerraformFile;
use crate::error::ArchiveError;
use crate::output::{self, ScriptSummary};
use crate::resource::ArchivedResources;
use crate::terraform::{Classifier, ConfigDocument, Evaluator};

/// Reads, parses and classifies a single Terraform file.
pub fn process_terraform_file<E: Evaluator>(
    path: &Path,
    classifier: &Classifier<E>,
) -> Result<ArchivedResources, ArchiveError> {
    let bytes = std::fs::read(path).map_err(|source| ArchiveError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8(bytes).map_err(|err| ArchiveError::Parse {
        path: path.to_path_buf(),
        source: err.into(),
    })?;

    let doc = ConfigDocument::parse(path, &content).map_err(|source| ArchiveError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    classifier.classify(&doc)
}

/// Classifies every file and writes one removal script per file with archived
/// repositories.
///
/// Files are classified concurrently, but results are handled in `files`
/// order: the first failing file stops the run, after the scripts of the
/// files before it have been written.
pub async fn generate_removal_scripts<E>(
    root: &Path,
    output_dir: &Path,
    files: Vec<TerraformFile>,
    classifier: Arc<Classifier<E>>,
) -> Result<Vec<ScriptSummary>, ArchiveError>
where
    E: Evaluator + 'static,
{
    output::ensure_output_dir(output_dir).await?;

    let tasks: Vec<_> = files
        .into_iter()
        .map(|file| {
            let path = file.path(root);
            let classifier = Arc::clone(&classifier);
            let task = tokio::task::spawn_blocking({
                let path = path.clone();
                move || process_terraform_file(&path, &classifier)
            });
            (file, path, task)
        })
        .collect();

    let mut summaries = Vec::new();

    for (file, path, task) in tasks {
        tracing::info!(path = %path.display(), "processing file");

        let archived = task.await??;

        if archived.is_empty() {
            tracing::info!(path = %path.display(), "no archived repositories found");
            continue;
        }

        let script = output::write_script(output_dir, &file.script_name(), &archived).await?;

        summaries.push(ScriptSummary {
            source: path_string(&path),
            script: path_string(&script),
            removals: archived.len(),
        });
    }

    Ok(summaries)
}

fn path_string(path: &Path) -> String {
    path.display().to_string()
}
