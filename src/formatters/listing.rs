use anyhow::Result;
use std::io::Write;

use crate::core::{Category, CategorySets};

const RULE: &str = "----------------------------------------------------------------";

/// Console rendering of the category sets
pub struct ListingFormatter {
    /// Section order of the verbose report
    report_order: [Category; 5],
}

impl Default for ListingFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingFormatter {
    pub fn new() -> Self {
        Self {
            report_order: Category::ALL,
        }
    }

    pub fn heading(category: Category) -> &'static str {
        match category {
            Category::Package => "*** libs from package manager ***",
            Category::Rpath => "*** @rpath ***",
            Category::LoaderPath => "*** @loader_path ***",
            Category::ExecutablePath => "*** @executable_path ***",
            Category::Other => "*** OTHER libs ***",
        }
    }

    /// Every set under its own heading, sections separated by a dashed rule
    pub fn write_report<W: Write>(&self, sets: &CategorySets, out: &mut W) -> Result<()> {
        for &category in &self.report_order {
            writeln!(out, "{}", RULE)?;
            writeln!(out, "{}", Self::heading(category))?;
            for reference in sets.get(category) {
                writeln!(out, "{}", reference)?;
            }
        }
        writeln!(out, "{}", RULE)?;
        Ok(())
    }

    /// Plain listing, one path per line, of `categories` in the given order
    pub fn write_selection<W: Write>(
        &self,
        sets: &CategorySets,
        categories: &[Category],
        out: &mut W,
    ) -> Result<()> {
        for &category in categories {
            for reference in sets.get(category) {
                writeln!(out, "{}", reference)?;
            }
        }
        Ok(())
    }

    pub fn format_selection(&self, sets: &CategorySets, categories: &[Category]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_selection(sets, categories, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    pub fn format_report(&self, sets: &CategorySets) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_report(sets, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
