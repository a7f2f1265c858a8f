use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use hcl::{Block, Expression, Structure};

use super::ParseError;

/// An unevaluated attribute expression as written in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeExpression(Expression);

impl AttributeExpression {
    pub fn new(expr: Expression) -> Self {
        Self(expr)
    }

    pub fn as_expression(&self) -> &Expression {
        &self.0
    }
}

/// A top-level block: its kind (`resource`, `module`, ...), labels and the
/// attributes declared directly in its body.
///
/// Nested blocks are not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigBlock {
    kind: String,
    labels: Vec<String>,
    attributes: HashMap<String, AttributeExpression>,
}

impl ConfigBlock {
    pub fn new(kind: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            kind: kind.into(),
            labels,
            attributes: HashMap::new(),
        }
    }

    /// Adds an attribute, rejecting keys that are already present.
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        expr: impl Into<Expression>,
    ) -> Result<Self, ParseError> {
        let key = key.into();
        if self.attributes.contains_key(&key) {
            return Err(ParseError::AttributeRedefined {
                block: self.to_string(),
                attribute: key,
            });
        }
        self.attributes
            .insert(key, AttributeExpression::new(expr.into()));
        Ok(self)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeExpression> {
        self.attributes.get(key)
    }

    fn from_hcl(block: Block) -> Result<Self, ParseError> {
        let labels = block
            .labels
            .iter()
            .map(|label| label.as_str().to_string())
            .collect();

        block
            .body
            .into_inner()
            .into_iter()
            .filter_map(|structure| match structure {
                Structure::Attribute(attr) => Some(attr),
                Structure::Block(_) => None,
            })
            .try_fold(
                ConfigBlock::new(block.identifier.as_str(), labels),
                |acc, attr| acc.with_attribute(attr.key.as_str(), attr.expr),
            )
    }
}

// NOTE: Renders the block header the way it is written in HCL, used as error context
impl fmt::Display for ConfigBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for label in &self.labels {
            write!(f, " \"{}\"", label)?;
        }
        Ok(())
    }
}

/// One parsed configuration file. Blocks keep their source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    path: PathBuf,
    blocks: Vec<ConfigBlock>,
}

impl ConfigDocument {
    pub fn new(path: impl Into<PathBuf>, blocks: Vec<ConfigBlock>) -> Self {
        Self {
            path: path.into(),
            blocks,
        }
    }

    /// Parses `content` as HCL and keeps the top-level blocks.
    ///
    /// Top-level attributes are valid HCL but carry no meaning here and are
    /// dropped.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, ParseError> {
        let body = hcl::parse(content)?;

        let blocks = body
            .into_inner()
            .into_iter()
            .filter_map(|structure| match structure {
                Structure::Block(block) => Some(ConfigBlock::from_hcl(block)),
                Structure::Attribute(_) => None,
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(path, blocks))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn blocks(&self) -> &[ConfigBlock] {
        &self.blocks
    }
}
