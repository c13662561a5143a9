//! `gs-inventory` — what the store sells and where it is shelved.
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`catalog`] | `Catalog`, `ShoppingItem`, `GROCERY_ITEMS`            |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                    |

pub mod catalog;
pub mod error;


pub use catalog::{Catalog, ShoppingItem, GROCERY_AISLES, GROCERY_ITEMS};
pub use error::{CatalogError, CatalogResult};
