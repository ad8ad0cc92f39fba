use super::{parse_listing, PackageManager};
use crate::error::ListingError;
use crate::model::InstalledPackages;
use tracing::debug;

/// Lists the packages installed in the package manager's global tree.
///
/// # Errors
///
/// Returns an error if the listing command fails without output or prints
/// something that is not a listing. Callers auditing several scopes should
/// treat an error as an empty scope.
pub fn list_global(pm: &dyn PackageManager) -> Result<InstalledPackages, ListingError> {
    let output = pm.list_global()?;
    let installed = parse_listing(&output)?;
    debug!(count = installed.len(), "enumerated global packages");
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::testing::FakePackageManager;

    #[test]
    fn test_list_global() {
        let pm = FakePackageManager {
            global: Some(
                r#"{"dependencies":{"evil-pkg":{"version":"9.9.9"},"safe-pkg":{"version":"1.0.0"}}}"#
                    .to_string(),
            ),
            ..Default::default()
        };

        let installed = list_global(&pm).unwrap();
        assert_eq!(installed.len(), 2);
        assert_eq!(installed["evil-pkg"], "9.9.9");
        assert_eq!(pm.global_calls.get(), 1);
    }

    #[test]
    fn test_list_global_failure_is_distinct_from_empty() {
        let failing = FakePackageManager::default();
        assert!(list_global(&failing).is_err());

        let empty = FakePackageManager {
            global: Some(String::new()),
            ..Default::default()
        };
        assert!(list_global(&empty).unwrap().is_empty());
    }
}
