//! # otoolrecursive
//!
//! Recursive dynamic-library dependency listing for Mach-O binaries.
//!
//! The walker runs `otool -L` on an artifact, follows every referenced library
//! that is neither a system framework nor under `/usr`, and sorts what it finds
//! by provenance:
//!
//! - **package**: Homebrew (`/opt/homebrew`) or MacPorts (`/opt/local`) installs
//! - **@rpath**, **@loader_path**, **@executable_path**: loader-relative references
//! - **other**: everything else
//!
//! Xcode toolchain libraries and `/System/Library/` frameworks are dropped.

pub mod cli;
pub mod core;
pub mod formatters;
pub mod inspectors;
