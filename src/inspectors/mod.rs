pub mod common;
pub mod otool;

use std::io;
use thiserror::Error;

pub use common::parse_listing;
pub use otool::OtoolLister;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("cannot run `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("failed reading output of `{command}`: {source}")]
    Read {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Lists the libraries one artifact links against directly.
///
/// The walker only talks to this trait, so the real `otool` process can be
/// swapped for an in-memory table.
pub trait DependencyLister {
    fn list_direct_dependencies(&self, path: &str) -> Result<Vec<String>, InspectError>;

    fn lister_name(&self) -> &str;

    /// Command line shown by the verbose echo
    fn command_line(&self, path: &str) -> String {
        format!("{} -L {}", self.lister_name(), path)
    }
}

impl<T: DependencyLister + ?Sized> DependencyLister for &T {
    fn list_direct_dependencies(&self, path: &str) -> Result<Vec<String>, InspectError> {
        (**self).list_direct_dependencies(path)
    }

    fn lister_name(&self) -> &str {
        (**self).lister_name()
    }

    fn command_line(&self, path: &str) -> String {
        (**self).command_line(path)
    }
}
