use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two domains an entity list belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Base,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Base => write!(f, "base"),
            Side::Target => write!(f, "target"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Empty {0} domain: at least one entity is required")]
    EmptyDomain(Side),

    #[error("Duplicate entity in {side} domain: {entity}")]
    DuplicateEntity { side: Side, entity: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
