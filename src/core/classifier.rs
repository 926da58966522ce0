use std::collections::BTreeSet;
use std::fmt;

use super::config::PathPrefixes;

/// Provenance bucket of a library reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Package,
    Rpath,
    LoaderPath,
    ExecutablePath,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Package,
        Category::Rpath,
        Category::LoaderPath,
        Category::ExecutablePath,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Package => "package",
            Category::Rpath => "rpath",
            Category::LoaderPath => "loader_path",
            Category::ExecutablePath => "executable_path",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered `(prefix, category)` table; the first matching prefix wins and
/// anything unmatched is [`Category::Other`].
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<(String, Category)>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&PathPrefixes::default())
    }
}

impl Classifier {
    pub fn new(prefixes: &PathPrefixes) -> Self {
        Self {
            rules: vec![
                (prefixes.homebrew.clone(), Category::Package),
                (prefixes.macports.clone(), Category::Package),
                (prefixes.rpath.clone(), Category::Rpath),
                (prefixes.loader_path.clone(), Category::LoaderPath),
                (prefixes.executable_path.clone(), Category::ExecutablePath),
            ],
        }
    }

    pub fn classify(&self, reference: &str) -> Category {
        self.rules
            .iter()
            .find(|(prefix, _)| reference.starts_with(prefix.as_str()))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Other)
    }

    /// Partition `references` into `sets`
    pub fn classify_into<'a, I>(&self, references: I, sets: &mut CategorySets)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for reference in references {
            sets.insert(self.classify(reference), reference.clone());
        }
    }
}

/// The five disjoint category sets, each iterated in lexicographic order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySets {
    package: BTreeSet<String>,
    rpath: BTreeSet<String>,
    loader_path: BTreeSet<String>,
    executable_path: BTreeSet<String>,
    other: BTreeSet<String>,
}

impl CategorySets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the reference was already present
    pub fn insert(&mut self, category: Category, reference: String) -> bool {
        self.get_mut(category).insert(reference)
    }

    pub fn get(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Package => &self.package,
            Category::Rpath => &self.rpath,
            Category::LoaderPath => &self.loader_path,
            Category::ExecutablePath => &self.executable_path,
            Category::Other => &self.other,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut BTreeSet<String> {
        match category {
            Category::Package => &mut self.package,
            Category::Rpath => &mut self.rpath,
            Category::LoaderPath => &mut self.loader_path,
            Category::ExecutablePath => &mut self.executable_path,
            Category::Other => &mut self.other,
        }
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All references across the five sets
    pub fn union(&self) -> BTreeSet<String> {
        Category::ALL
            .iter()
            .flat_map(|c| self.get(*c).iter().cloned())
            .collect()
    }
}
