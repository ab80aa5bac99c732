//! Inventory errors and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryErrorKind {
    InvalidArguments,
    Catalog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryError {
    pub kind: InventoryErrorKind,
    pub message: String,
}

impl InventoryError {
    pub fn new(kind: InventoryErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(InventoryErrorKind::InvalidArguments, message)
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::new(InventoryErrorKind::Catalog, message)
    }
}

impl Display for InventoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for InventoryError {}
