//! Files changed in the working tree relative to HEAD.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::Error;

/// Changed paths as reported by version control, relative to `root`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedFiles {
    pub root: PathBuf,
    pub paths: Vec<PathBuf>,
}

impl ChangedFiles {
    /// Paths with a matching extension that still exist on disk.
    pub fn source_files(&self, extensions: &[String]) -> Vec<PathBuf> {
        self.paths
            .iter()
            .filter(|path| is_source_file(path, extensions))
            .filter(|path| self.root.join(path).exists())
            .cloned()
            .collect()
    }
}

/// Check whether the file extension is one of `extensions`.
pub fn is_source_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e == ext))
        .unwrap_or(false)
}

/// Source of changed files.
pub trait ChangeSource {
    /// `Ok(None)` when not inside a working tree.
    fn changed_files(&self) -> Result<Option<ChangedFiles>, Error>;
}

/// Queries the `git` binary.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    cwd: Option<PathBuf>,
}

impl GitCli {
    /// Use the process working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git from `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(dir.into()),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("git");
        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    /// Repository root, or `None` outside a working tree.
    fn toplevel(&self) -> Option<PathBuf> {
        let output = match self.command().args(["rev-parse", "--show-toplevel"]).output() {
            Ok(output) => output,
            Err(e) => {
                debug!(error = %e, "git unavailable");
                return None;
            }
        };

        if !output.status.success() {
            return None;
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if root.is_empty() {
            None
        } else {
            Some(PathBuf::from(root))
        }
    }
}

impl ChangeSource for GitCli {
    fn changed_files(&self) -> Result<Option<ChangedFiles>, Error> {
        let Some(root) = self.toplevel() else {
            return Ok(None);
        };

        let output = self
            .command()
            .current_dir(&root)
            .args(["diff", "--name-only", "-z", "HEAD"])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(format!("diff failed: {}", stderr.trim())));
        }

        Ok(Some(ChangedFiles {
            root,
            paths: parse_name_list(&output.stdout),
        }))
    }
}

/// Parse NUL-separated `--name-only -z` output.
fn parse_name_list(stdout: &[u8]) -> Vec<PathBuf> {
    stdout
        .split(|b| *b == 0)
        .filter(|name| !name.is_empty())
        .map(|name| PathBuf::from(String::from_utf8_lossy(name).into_owned()))
        .collect()
}
