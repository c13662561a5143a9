//! Catalog error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no items")]
    Empty,

    #[error("aisle count must be at least 1")]
    NoAisles,

    #[error("aisle count {0} does not fit in a u8")]
    TooManyAisles(usize),

    #[error("item {0:?} appears more than once")]
    DuplicateItem(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
