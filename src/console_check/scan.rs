//! Marker search over changed files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Files flagged by a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Paths whose content contains the marker, as reported by version control.
    pub flagged: Vec<PathBuf>,
    /// Paths that could not be read, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

impl ScanReport {
    pub fn has_findings(&self) -> bool {
        !self.flagged.is_empty()
    }

    /// Warning lines for stderr, summary last.
    pub fn warnings(&self, marker: &str) -> Vec<String> {
        let mut lines: Vec<String> = self
            .flagged
            .iter()
            .map(|path| format!("[Hook] WARNING: {} found in {}", marker, path.display()))
            .collect();

        if self.has_findings() {
            lines.push(format!("[Hook] Remove {} statements before committing", marker));
        }

        lines
    }
}

/// Search each of `files` (relative to `root`) for `marker`.
pub fn scan(root: &Path, files: &[PathBuf], marker: &str) -> ScanReport {
    let mut report = ScanReport::default();

    for file in files {
        let bytes = match fs::read(root.join(file)) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(path = %file.display(), error = %e, "Skipping unreadable file");
                report.skipped.push((file.clone(), e.to_string()));
                continue;
            }
        };

        if String::from_utf8_lossy(&bytes).contains(marker) {
            report.flagged.push(file.clone());
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MARKER: &str = "console.log";

    #[test]
    fn test_flags_marker() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.ts"), "const x = 1;\nconsole.log(x);\n").unwrap();
        fs::write(dir.path().join("b.ts"), "export const y = 2;\n").unwrap();

        let report = scan(
            dir.path(),
            &[PathBuf::from("a.ts"), PathBuf::from("b.ts")],
            MARKER,
        );

        assert_eq!(report.flagged, vec![PathBuf::from("a.ts")]);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_other_console_methods_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "console.error('x'); console.warn('y');").unwrap();

        let report = scan(dir.path(), &[PathBuf::from("a.js")], MARKER);
        assert!(!report.has_findings());
        assert!(report.warnings(MARKER).is_empty());
    }

    #[test]
    fn test_missing_file_skipped_and_scan_continues() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("later.jsx"), "console.log('hi')").unwrap();

        let report = scan(
            dir.path(),
            &[PathBuf::from("gone.ts"), PathBuf::from("later.jsx")],
            MARKER,
        );

        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, PathBuf::from("gone.ts"));
        assert_eq!(report.flagged, vec![PathBuf::from("later.jsx")]);
    }

    #[test]
    fn test_invalid_utf8_still_scanned() {
        let dir = TempDir::new().unwrap();
        let mut content = vec![0xff, 0xfe];
        content.extend_from_slice(b"console.log(1)");
        fs::write(dir.path().join("bin.js"), content).unwrap();

        let report = scan(dir.path(), &[PathBuf::from("bin.js")], MARKER);
        assert_eq!(report.flagged, vec![PathBuf::from("bin.js")]);
    }

    #[test]
    fn test_warning_lines() {
        let report = ScanReport {
            flagged: vec![PathBuf::from("src/a.ts"), PathBuf::from("src/b.tsx")],
            skipped: Vec::new(),
        };

        assert_eq!(
            report.warnings(MARKER),
            vec![
                "[Hook] WARNING: console.log found in src/a.ts".to_string(),
                "[Hook] WARNING: console.log found in src/b.tsx".to_string(),
                "[Hook] Remove console.log statements before committing".to_string(),
            ]
        );
    }
}
