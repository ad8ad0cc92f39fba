use crate::model::Finding;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Renders the end-of-run summary printed to stdout.
pub fn render_summary(
    findings: &[Finding],
    report_path: &Path,
    completed_at: DateTime<Utc>,
) -> String {
    let mut lines = vec![
        format!(
            "Scan completed at: {}",
            completed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        String::new(),
    ];

    if findings.is_empty() {
        lines.push("No impacted packages found globally or in scanned roots.".to_string());
        lines.push(format!("Wrote report to: {}", report_path.display()));
    } else {
        lines.push("== MATCHES FOUND ==".to_string());
        lines.extend(findings.iter().map(|f| {
            format!(
                "- {} | installed={} | expected(csv)={} | where={}",
                f.package_name, f.installed_version, f.impacted_version_from_csv, f.location
            )
        }));
        lines.push(String::new());
        lines.push(format!("Wrote detailed report: {}", report_path.display()));
    }

    lines.join("\n") + "\n"
}

/// Renders the message shown when npm is not installed.
pub fn render_npm_missing(report_path: &Path) -> String {
    format!(
        "npm is not installed on this machine. Wrote header-only report to: {}\n",
        report_path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Location;
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn completed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_summary_with_matches() {
        let findings = vec![
            Finding::new("evil-pkg", "9.9.9", "9.9.9", Location::Global),
            Finding::new(
                "@ctrl/tinycolor",
                "4.1.1",
                "4.1.2",
                Location::Local(PathBuf::from("/srv/app")),
            ),
        ];
        let summary = render_summary(&findings, Path::new("/tmp/npm_findings.csv"), completed_at());

        assert_eq!(
            summary,
            "Scan completed at: 2025-09-16 12:00:00 UTC\n\
             \n\
             == MATCHES FOUND ==\n\
             - evil-pkg | installed=9.9.9 | expected(csv)=9.9.9 | where=global\n\
             - @ctrl/tinycolor | installed=4.1.1 | expected(csv)=4.1.2 | where=local:/srv/app\n\
             \n\
             Wrote detailed report: /tmp/npm_findings.csv\n"
        );
    }

    #[test]
    fn test_summary_without_matches() {
        let summary = render_summary(&[], Path::new("/tmp/npm_findings.csv"), completed_at());

        assert_eq!(
            summary,
            "Scan completed at: 2025-09-16 12:00:00 UTC\n\
             \n\
             No impacted packages found globally or in scanned roots.\n\
             Wrote report to: /tmp/npm_findings.csv\n"
        );
    }

    #[test]
    fn test_npm_missing_message() {
        assert_eq!(
            render_npm_missing(Path::new("/tmp/npm_findings.csv")),
            "npm is not installed on this machine. Wrote header-only report to: /tmp/npm_findings.csv\n"
        );
    }
}
