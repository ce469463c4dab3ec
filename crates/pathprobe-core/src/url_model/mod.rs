//! URL modeling: syntactic validation and path extraction.
//!
//! Validation is a cheap gate run on every debounced keystroke; only strings
//! that pass it are handed to the classifier, which parses them properly.

mod path;
mod validate;

pub use path::{has_file_extension, pathname};
pub use validate::is_valid_url;
