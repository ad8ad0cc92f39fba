use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const GLOBAL_TAG: &str = "global";
const LOCAL_PREFIX: &str = "local:";

/// Scope in which an installed package was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// The package manager's global install tree.
    Global,
    /// A project directory discovered under one of the scanned roots.
    Local(PathBuf),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Global => f.write_str(GLOBAL_TAG),
            Location::Local(path) => write!(f, "{}{}", LOCAL_PREFIX, path.display()),
        }
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == GLOBAL_TAG {
            return Ok(Location::Global);
        }
        match s.strip_prefix(LOCAL_PREFIX) {
            Some(path) if !path.is_empty() => Ok(Location::Local(PathBuf::from(path))),
            _ => Err(format!(
                "Unknown location: {}. Expected 'global' or 'local:<path>'",
                s
            )),
        }
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// An installed package whose name appears on the compromise list.
///
/// Field order is the report's column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub package_name: String,
    pub installed_version: String,
    pub impacted_version_from_csv: String,
    pub location: Location,
}

impl Finding {
    pub fn new(
        package_name: impl Into<String>,
        installed_version: impl Into<String>,
        impacted_version_from_csv: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            installed_version: installed_version.into(),
            impacted_version_from_csv: impacted_version_from_csv.into(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        assert_eq!(Location::Global.to_string(), "global");
        assert_eq!(
            Location::Local(PathBuf::from("/srv/app")).to_string(),
            "local:/srv/app"
        );
    }

    #[test]
    fn test_location_parse() {
        assert_eq!("global".parse::<Location>().unwrap(), Location::Global);
        assert_eq!(
            "local:/srv/app".parse::<Location>().unwrap(),
            Location::Local(PathBuf::from("/srv/app"))
        );
        assert!("local:".parse::<Location>().is_err());
        assert!("GLOBAL".parse::<Location>().is_err());
    }
}
