pub mod category;
pub mod fingerprint;
pub mod record;
pub mod summary;
#[cfg(test)]
mod testutils;

pub use category::{Category, NO_EXTENSION};
pub use fingerprint::{hash_content, hash_file};
pub use record::ClassificationResult;
pub use summary::{summary_lines, SEPARATOR};
