//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;

use brokerctl_core::{application::ports::Filesystem, error::BrokerctlResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> BrokerctlResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> BrokerctlResult<()> {
        debug!(from = %from.display(), to = %to.display(), "Copying file");
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(to, e, &format!("copy {} to", from.display())))
    }

    fn read_to_string(&self, path: &Path) -> BrokerctlResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }
}

fn map_io_error(
    path: &Path,
    e: io::Error,
    operation: &str,
) -> brokerctl_core::error::BrokerctlError {
    use brokerctl_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
