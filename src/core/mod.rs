pub mod classifier;
pub mod config;
pub mod graph;
pub mod walker;

pub use classifier::{Category, CategorySets, Classifier};
pub use config::PathPrefixes;
pub use graph::{DependencyGraph, GraphBuilder, Library, Link};
pub use walker::{DependencyWalker, Traversal};
