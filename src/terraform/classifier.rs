use crate::error::ArchiveError;
use crate::resource::{ArchivedResources, QualifiedIdentifier};

use super::{AttributeExpression, ConfigBlock, ConfigDocument, Evaluator, HclEvaluator};

pub const REPOSITORY_RESOURCE_TYPE: &str = "github_repository";
pub const TARGET_MODULE_MARKER: &str = "terraform-module-github-repository";

const ARCHIVED_ATTRIBUTE: &str = "archived";
const SOURCE_ATTRIBUTE: &str = "source";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Resource type of standalone repository declarations.
    pub resource_type: String,
    /// Substring a module `source` must contain for the module to wrap a repository.
    pub module_marker: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            resource_type: REPOSITORY_RESOURCE_TYPE.to_string(),
            module_marker: TARGET_MODULE_MARKER.to_string(),
        }
    }
}

/// Finds archived repository declarations in a parsed configuration file.
///
/// Blocks are visited in document order:
///
/// - `resource "<resource_type>" "<name>"` is emitted as `<resource_type>.<name>`
///   when its `archived` attribute is `true`.
/// - `module "<name>"` is emitted as `module.<name>` when its `source` contains
///   the module marker and its `archived` attribute is `true`.
///
/// A missing `archived` or `source` attribute skips the block. An expression
/// that cannot be evaluated fails the whole document.
#[derive(Debug, Clone)]
pub struct Classifier<E = HclEvaluator> {
    config: ClassifierConfig,
    evaluator: E,
}

impl Classifier<HclEvaluator> {
    pub fn new(config: ClassifierConfig) -> Self {
        Self::with_evaluator(config, HclEvaluator::new())
    }
}

impl<E: Evaluator> Classifier<E> {
    pub fn with_evaluator(config: ClassifierConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }

    pub fn classify(&self, doc: &ConfigDocument) -> Result<ArchivedResources, ArchiveError> {
        let mut archived = ArchivedResources::new();

        for block in doc.blocks() {
            let identifier = match block.kind() {
                "resource" => self.classify_resource(doc, block)?,
                "module" => self.classify_module(doc, block)?,
                _ => None,
            };

            if let Some(identifier) = identifier {
                tracing::debug!(
                    path = %doc.path().display(),
                    identifier = %identifier,
                    "archived repository found"
                );
                archived.push(identifier);
            }
        }

        Ok(archived)
    }

    fn classify_resource(
        &self,
        doc: &ConfigDocument,
        block: &ConfigBlock,
    ) -> Result<Option<QualifiedIdentifier>, ArchiveError> {
        if block.label(0) != Some(self.config.resource_type.as_str()) {
            return Ok(None);
        }

        let Some(name) = block.label(1) else {
            tracing::warn!(
                path = %doc.path().display(),
                block = %block,
                "resource block has no name label, skipping"
            );
            return Ok(None);
        };

        let Some(attr) = block.attribute(ARCHIVED_ATTRIBUTE) else {
            return Ok(None);
        };

        if !self.is_archived(doc, block, attr)? {
            return Ok(None);
        }

        Ok(Some(QualifiedIdentifier::resource(
            &self.config.resource_type,
            name,
        )))
    }

    fn classify_module(
        &self,
        doc: &ConfigDocument,
        block: &ConfigBlock,
    ) -> Result<Option<QualifiedIdentifier>, ArchiveError> {
        let Some(name) = block.label(0) else {
            tracing::warn!(
                path = %doc.path().display(),
                "module block has no name label, skipping"
            );
            return Ok(None);
        };

        let Some(source) = block.attribute(SOURCE_ATTRIBUTE) else {
            return Ok(None);
        };

        // NOTE: source is evaluated before the archived check, so a broken
        // source fails the file even when the module is not archived
        let source = self
            .evaluator
            .evaluate_string(source)
            .map_err(|source_err| evaluation_error(doc, block, SOURCE_ATTRIBUTE, source_err))?;
        let is_target_module = source.contains(&self.config.module_marker);

        let Some(attr) = block.attribute(ARCHIVED_ATTRIBUTE) else {
            return Ok(None);
        };

        if !is_target_module {
            tracing::debug!(
                path = %doc.path().display(),
                module = name,
                source = %source,
                "archived module does not wrap a repository, skipping"
            );
            return Ok(None);
        }

        if !self.is_archived(doc, block, attr)? {
            return Ok(None);
        }

        Ok(Some(QualifiedIdentifier::module(name)))
    }

    fn is_archived(
        &self,
        doc: &ConfigDocument,
        block: &ConfigBlock,
        attr: &AttributeExpression,
    ) -> Result<bool, ArchiveError> {
        self.evaluator
            .evaluate_bool(attr)
            .map_err(|err| evaluation_error(doc, block, ARCHIVED_ATTRIBUTE, err))
    }
}

fn evaluation_error(
    doc: &ConfigDocument,
    block: &ConfigBlock,
    attribute: &str,
    source: super::EvaluationError,
) -> ArchiveError {
    ArchiveError::Evaluation {
        path: doc.path().to_path_buf(),
        block: block.to_string(),
        attribute: attribute.to_string(),
        source,
    }
}
