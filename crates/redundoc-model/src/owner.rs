//! The entity a doc comment documents.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    /// Class, interface, enum, record or annotation type.
    Type,
    Method,
    Constructor,
    Field,
}

/// A documented declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocOwner {
    pub kind: OwnerKind,
    /// Declared name: type, method, constructor or field name.
    pub name: String,
    /// Return type of a method or type of a field, as written without
    /// package qualifiers.
    pub declared_type: Option<String>,
}

impl DocOwner {
    /// Creates an owner without a declared type.
    pub fn new(kind: OwnerKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            declared_type: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = Some(declared_type.into());
        self
    }

    /// The type to compare documentation against: the declared type, or the
    /// owner's own name when there is none (types, constructors).
    pub fn presentable_type(&self) -> &str {
        self.declared_type.as_deref().unwrap_or(&self.name)
    }
}
