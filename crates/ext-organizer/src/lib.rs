pub mod config;
pub mod copy;
pub mod logging;
pub mod organizer;
pub mod prompt;
pub mod reporter;

pub use config::Config;
pub use copy::{copy_with_metadata, ensure_dir, verify_copy, CopyError, CopyOutcome};
pub use ext_organizer_core::{Category, ClassificationResult, NO_EXTENSION};
pub use logging::{init_logging, LogConfig};
pub use organizer::{exit_code, organize, FileFailure, OrganizeError, OrganizeOptions, OrganizeReport};
pub use prompt::{prompt_destination, prompt_source};
pub use reporter::{MemoryReporter, Reporter, TracingReporter};
