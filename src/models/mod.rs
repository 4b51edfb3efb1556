//! URL data types

pub mod query;
pub mod url_parts;
pub mod url_value;

pub use query::{QueryValue, QueryVars};
pub use url_parts::UrlParts;
pub use url_value::UrlValue;
