//! Build identity injected into the broker binary at link time.

use std::fmt;

/// Version recorded when no override is configured.
pub const DEFAULT_VERSION: &str = "0.0.0-snapshot";

/// Commit recorded when the working tree has uncommitted changes.
pub const DIRTY_MARKER: &str = "dirty";

/// Linker symbol receiving [`VersionStamp::version`].
pub const VERSION_SYMBOL: &str = "main.Version";

/// Linker symbol receiving [`VersionStamp::commit`].
pub const COMMIT_SYMBOL: &str = "main.Commit";

/// Version and commit of the source tree being built.
///
/// Computed fresh for every `build` / `run`; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStamp {
    pub version: String,
    pub commit: String,
}

impl VersionStamp {
    pub fn new(version: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            commit: commit.into(),
        }
    }

    /// Stamp for a tree with uncommitted changes.
    pub fn dirty(version: impl Into<String>) -> Self {
        Self::new(version, DIRTY_MARKER)
    }

    pub fn is_dirty(&self) -> bool {
        self.commit == DIRTY_MARKER
    }

    /// Render the stamp as a single Go toolchain argument.
    ///
    /// The argument is passed to the child process without a shell, so the
    /// single quotes are interpreted by the Go linker, not by `sh`.
    pub fn ldflags(&self) -> String {
        format!(
            "-ldflags=-X '{}={}' -X '{}={}'",
            VERSION_SYMBOL, self.version, COMMIT_SYMBOL, self.commit
        )
    }
}

impl fmt::Display for VersionStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version, self.commit)
    }
}
