pub mod audit;
pub mod compromised;
pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod output;
pub mod platform;
pub mod scanner;

pub use audit::{run_audit, AuditOutcome, AuditRequest, AuditStatus};
pub use config::Config;
pub use error::{AuditError, ListingError};
pub use model::{CompromisedPackage, Finding, InstalledPackages, Location, Platform};
pub use scanner::{NpmCli, PackageManager};
