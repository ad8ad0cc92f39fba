//! Matching installed packages against the compromise list.

use crate::model::{CompromisedPackage, Finding, InstalledPackages, Location};
use std::collections::HashMap;

/// Returns a finding for each installed package named on the compromise list.
///
/// Names are compared exactly, case included. When several list rows share
/// a name the first row's version is reported. Versions are carried through
/// for review and never decide whether a package matches.
pub fn match_packages(
    compromised: &[CompromisedPackage],
    installed: &InstalledPackages,
    location: &Location,
) -> Vec<Finding> {
    let mut impacted: HashMap<&str, &str> = HashMap::with_capacity(compromised.len());
    for entry in compromised {
        impacted
            .entry(entry.package_name.as_str())
            .or_insert(entry.version.as_str());
    }

    installed
        .iter()
        .filter_map(|(name, version)| {
            impacted
                .get(name.as_str())
                .map(|expected| Finding::new(name, version, *expected, location.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn installed(pairs: &[(&str, &str)]) -> InstalledPackages {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_matches_by_name() {
        let list = vec![CompromisedPackage::new("evil-pkg", "9.9.9")];
        let findings = match_packages(
            &list,
            &installed(&[("evil-pkg", "9.9.9"), ("safe-pkg", "1.0.0")]),
            &Location::Global,
        );

        assert_eq!(
            findings,
            vec![Finding::new("evil-pkg", "9.9.9", "9.9.9", Location::Global)]
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let list = vec![CompromisedPackage::new("left-pad", "1.3.0")];
        let findings = match_packages(
            &list,
            &installed(&[("Left-Pad", "1.3.0")]),
            &Location::Global,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_version_does_not_affect_match() {
        let list = vec![CompromisedPackage::new("evil-pkg", "9.9.9")];
        let findings = match_packages(
            &list,
            &installed(&[("evil-pkg", "1.0.0")]),
            &Location::Global,
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].installed_version, "1.0.0");
        assert_eq!(findings[0].impacted_version_from_csv, "9.9.9");
    }

    #[test]
    fn test_first_list_row_wins() {
        let list = vec![
            CompromisedPackage::new("evil-pkg", "1.0.0"),
            CompromisedPackage::new("evil-pkg", "2.0.0"),
        ];
        let findings = match_packages(
            &list,
            &installed(&[("evil-pkg", "2.0.0")]),
            &Location::Global,
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].impacted_version_from_csv, "1.0.0");
    }

    #[test]
    fn test_scopes_do_not_mix() {
        let list = vec![CompromisedPackage::new("evil-pkg", "9.9.9")];
        let project = Location::Local(PathBuf::from("/srv/app"));

        let mut findings = match_packages(
            &list,
            &installed(&[("evil-pkg", "9.9.9")]),
            &Location::Global,
        );
        findings.extend(match_packages(
            &list,
            &installed(&[("evil-pkg", "9.9.8")]),
            &project,
        ));

        assert_eq!(
            findings,
            vec![
                Finding::new("evil-pkg", "9.9.9", "9.9.9", Location::Global),
                Finding::new("evil-pkg", "9.9.8", "9.9.9", project),
            ]
        );
    }
}
