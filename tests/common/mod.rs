#![allow(dead_code)]

use otoolrecursive::inspectors::{DependencyLister, InspectError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

/// In-memory stand-in for `otool -L`, recording every path it is asked about
#[derive(Default)]
pub struct FakeLister {
    listings: HashMap<String, Vec<String>>,
    unlaunchable: Vec<String>,
    calls: RefCell<Vec<String>>,
}

impl FakeLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, artifact: &str, dependencies: &[&str]) -> Self {
        self.listings.insert(
            artifact.to_string(),
            dependencies.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    /// Inspecting `artifact` fails as if the command could not be spawned
    pub fn failing(mut self, artifact: &str) -> Self {
        self.unlaunchable.push(artifact.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, artifact: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == artifact).count()
    }
}

impl DependencyLister for FakeLister {
    fn list_direct_dependencies(&self, path: &str) -> Result<Vec<String>, InspectError> {
        self.calls.borrow_mut().push(path.to_string());
        if self.unlaunchable.iter().any(|p| p == path) {
            return Err(InspectError::Launch {
                command: format!("otool -L {}", path),
                source: io::Error::new(io::ErrorKind::NotFound, "otool not found"),
            });
        }
        Ok(self.listings.get(path).cloned().unwrap_or_default())
    }

    fn lister_name(&self) -> &str {
        "fake"
    }
}
