use otoolrecursive::core::{Category, CategorySets};
use otoolrecursive::formatters::ListingFormatter;

fn sample() -> CategorySets {
    let mut sets = CategorySets::new();
    sets.insert(Category::Package, "/opt/local/lib/libz.1.dylib".to_string());
    sets.insert(Category::Package, "/opt/homebrew/lib/libpng.dylib".to_string());
    sets.insert(Category::ExecutablePath, "@executable_path/libexe.dylib".to_string());
    sets
}

#[test]
fn report_has_every_section_in_order() {
    let report = ListingFormatter::new().format_report(&sample()).unwrap();

    let headings: Vec<&str> = report.lines().filter(|l| l.starts_with("***")).collect();
    assert_eq!(
        headings,
        vec![
            "*** libs from package manager ***",
            "*** @rpath ***",
            "*** @loader_path ***",
            "*** @executable_path ***",
            "*** OTHER libs ***",
        ]
    );
    assert_eq!(report.lines().filter(|l| l.starts_with("----")).count(), 6);
    assert!(report.contains(
        "*** libs from package manager ***\n/opt/homebrew/lib/libpng.dylib\n/opt/local/lib/libz.1.dylib\n"
    ));
}

#[test]
fn selection_skips_headings_and_empty_sets() {
    let listing = ListingFormatter::new()
        .format_selection(&sample(), &[Category::ExecutablePath, Category::Rpath, Category::Package])
        .unwrap();

    assert_eq!(
        listing,
        "@executable_path/libexe.dylib\n/opt/homebrew/lib/libpng.dylib\n/opt/local/lib/libz.1.dylib\n"
    );
}
