use std::fmt;

/// Terraform address of an archived repository declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QualifiedIdentifier {
    /// `<resource_type>.<name>`
    Resource { resource_type: String, name: String },
    /// `module.<name>`
    Module { name: String },
}

impl QualifiedIdentifier {
    pub fn resource(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Resource {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    pub fn module(name: impl Into<String>) -> Self {
        Self::Module { name: name.into() }
    }
}

impl fmt::Display for QualifiedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource {
                resource_type,
                name,
            } => write!(f, "{}.{}", resource_type, name),
            Self::Module { name } => write!(f, "module.{}", name),
        }
    }
}

/// Archived identifiers found in one file, in the order their blocks appear.
///
/// Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchivedResources {
    identifiers: Vec<QualifiedIdentifier>,
}

impl ArchivedResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, identifier: QualifiedIdentifier) {
        self.identifiers.push(identifier);
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QualifiedIdentifier> {
        self.identifiers.iter()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.identifiers.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a ArchivedResources {
    type Item = &'a QualifiedIdentifier;
    type IntoIter = std::slice::Iter<'a, QualifiedIdentifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<QualifiedIdentifier> for ArchivedResources {
    fn from_iter<I: IntoIterator<Item = QualifiedIdentifier>>(iter: I) -> Self {
        Self {
            identifiers: iter.into_iter().collect(),
        }
    }
}
