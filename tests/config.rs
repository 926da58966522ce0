use otoolrecursive::core::PathPrefixes;
use std::collections::HashMap;

#[test]
fn defaults_match_macos_layout() {
    let prefixes = PathPrefixes::default();

    assert_eq!(prefixes.homebrew, "/opt/homebrew");
    assert_eq!(prefixes.macports, "/opt/local");
    assert_eq!(prefixes.inspect_program, "otool");
    assert!(prefixes.is_excluded("/System/Library/Frameworks/AppKit.framework/AppKit"));
    assert!(prefixes.is_excluded("/Applications/Xcode.app/Contents/Frameworks/libXCTest.dylib"));
    assert!(!prefixes.is_excluded("/System/Libraryish/libz.dylib"));
    assert!(prefixes.is_terminal("/usr/lib/libz.1.dylib"));
    assert!(!prefixes.is_terminal("@rpath/libz.dylib"));
}

#[test]
fn environment_overrides_package_roots_and_program() {
    let env: HashMap<&str, &str> = [
        ("HOMEBREW_PREFIX", "/usr/local/Homebrew"),
        ("MACPORTS_PREFIX", "  "),
        ("OTOOL", "llvm-otool"),
    ]
    .into_iter()
    .collect();

    let prefixes = PathPrefixes::from_lookup(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(prefixes.homebrew, "/usr/local/Homebrew");
    assert_eq!(prefixes.macports, "/opt/local");
    assert_eq!(prefixes.inspect_program, "llvm-otool");
    assert_eq!(prefixes.rpath, "@rpath");
}

#[test]
fn inspection_command_with_arguments_is_split() {
    let prefixes = PathPrefixes::from_lookup(|key| match key {
        "OTOOL" => Some("xcrun  otool ".to_string()),
        _ => None,
    });

    assert_eq!(prefixes.inspect_program, "xcrun");
    assert_eq!(prefixes.inspect_args, vec!["otool".to_string()]);
    assert!(PathPrefixes::default().inspect_args.is_empty());
}
