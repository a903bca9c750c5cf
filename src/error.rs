use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    LockPoisoned(&'static str),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::LockPoisoned(operation) => {
                write!(f, "catalog lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for CatalogError {}
