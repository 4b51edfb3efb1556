//! URL and query string helpers

pub mod query;
pub mod url;

pub use self::query::*;
pub use self::url::*;
