use std::collections::{BTreeSet, HashSet};
use std::io::{self, Write};

use super::classifier::{CategorySets, Classifier};
use super::config::PathPrefixes;
use super::graph::{self, DependencyGraph, GraphBuilder};
use crate::inspectors::DependencyLister;

/// Mutable state of one walk, owned by [`DependencyWalker::walk`] and threaded
/// through every recursive step
struct TraversalContext {
    root: String,
    visited: HashSet<String>,
    discovered: BTreeSet<String>,
    categories: CategorySets,
    graph: GraphBuilder,
    inspections: usize,
    failures: Vec<String>,
    echo_error: Option<io::Error>,
}

impl TraversalContext {
    fn new(root: &str) -> Self {
        let mut visited = HashSet::new();
        visited.insert(root.to_string());

        let mut graph = GraphBuilder::new();
        graph.node(root);

        Self {
            root: root.to_string(),
            visited,
            discovered: BTreeSet::new(),
            categories: CategorySets::new(),
            graph,
            inspections: 0,
            failures: Vec::new(),
            echo_error: None,
        }
    }

    fn finish(self) -> Traversal {
        let traversal = Traversal {
            root: self.root,
            discovered: self.discovered,
            categories: self.categories,
            graph: self.graph.build(),
            inspections: self.inspections,
            failures: self.failures,
        };
        if traversal.has_cycles() {
            log::info!("dependency graph of {} contains cycles", traversal.root);
        }
        traversal
    }
}

/// Result of walking one root artifact
#[derive(Debug, Clone)]
pub struct Traversal {
    pub root: String,
    /// Every reference recorded anywhere in the walk
    pub discovered: BTreeSet<String>,
    pub categories: CategorySets,
    pub graph: DependencyGraph,
    /// Number of inspection command runs, failed ones included
    pub inspections: usize,
    /// One message per inspection that could not be launched
    pub failures: Vec<String>,
}

impl Traversal {
    pub fn has_cycles(&self) -> bool {
        graph::has_cycles(&self.graph)
    }
}

/// Depth-first walk over `otool -L` style listings.
///
/// Each artifact's direct references are filtered (self, Xcode and system
/// frameworks dropped), recursed into unless they live under `/usr` or were
/// already inspected, and classified once their subtree is done.
pub struct DependencyWalker<L> {
    lister: L,
    prefixes: PathPrefixes,
    classifier: Classifier,
}

impl<L: DependencyLister> DependencyWalker<L> {
    pub fn new(lister: L, prefixes: PathPrefixes) -> Self {
        let classifier = Classifier::new(&prefixes);
        Self {
            lister,
            prefixes,
            classifier,
        }
    }

    pub fn walk(&self, root: &str) -> Traversal {
        self.walk_inner(root, &mut None).finish()
    }

    /// Like [`DependencyWalker::walk`], writing `Cmd = <command line>` to `out`
    /// before every inspection. The walk stops at the first failed write.
    pub fn walk_echoing(&self, root: &str, out: &mut dyn Write) -> io::Result<Traversal> {
        let mut context = self.walk_inner(root, &mut Some(out));
        match context.echo_error.take() {
            Some(err) => Err(err),
            None => Ok(context.finish()),
        }
    }

    fn walk_inner(&self, root: &str, echo: &mut Option<&mut dyn Write>) -> TraversalContext {
        log::debug!("walking {} with {}", root, self.lister.lister_name());
        let mut context = TraversalContext::new(root);
        self.extract(root, &mut context, echo);

        log::debug!(
            "{} libraries discovered in {} inspections",
            context.discovered.len(),
            context.inspections
        );
        context
    }

    fn extract(
        &self,
        artifact: &str,
        context: &mut TraversalContext,
        echo: &mut Option<&mut dyn Write>,
    ) {
        if let Some(out) = echo.as_mut() {
            if let Err(err) = writeln!(out, "Cmd = {}", self.lister.command_line(artifact)) {
                context.echo_error = Some(err);
                return;
            }
        }
        context.inspections += 1;

        let listing = match self.lister.list_direct_dependencies(artifact) {
            Ok(listing) => listing,
            Err(err) => {
                eprintln!("Warning: {}", err);
                context.failures.push(err.to_string());
                return;
            }
        };

        let mut dependencies = Vec::with_capacity(listing.len());
        for candidate in listing {
            if candidate == artifact || self.prefixes.is_excluded(&candidate) {
                log::trace!("{}: skipping {}", artifact, candidate);
                continue;
            }
            if candidate == context.root {
                log::info!("{} links back to {}", artifact, context.root);
                context.graph.add_link(artifact, &candidate);
                continue;
            }
            dependencies.push(candidate);
        }

        for dependency in &dependencies {
            context.graph.add_link(artifact, dependency);

            if self.prefixes.is_terminal(dependency) {
                continue;
            }
            if !context.visited.insert(dependency.clone()) {
                log::trace!("{}: {} already inspected", artifact, dependency);
                continue;
            }
            self.extract(dependency, context, echo);
            if context.echo_error.is_some() {
                return;
            }
        }

        // Post-order: an artifact's own references are classified after its subtree
        context.discovered.extend(dependencies.iter().cloned());
        self.classifier
            .classify_into(&dependencies, &mut context.categories);
    }
}
