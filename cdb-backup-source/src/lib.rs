//! CDB Backup List Data Source
//!
//! Read-only data source for a cloud infrastructure provider: fetches the
//! backups recorded for a cloud MySQL (CDB) instance and exposes them as an
//! ordered record list with a deterministic aggregate identifier.

pub mod cloud;
pub mod config;
pub mod export;
pub mod lookup;
pub mod utils;

// Re-export commonly used types
pub use cloud::CdbClient;
pub use config::Config;
pub use lookup::{BackupListLookup, BackupRecord, LookupRequest, LookupResult};
pub use utils::errors::LookupError;
pub type Result<T> = std::result::Result<T, LookupError>;
