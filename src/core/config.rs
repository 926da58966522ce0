/// Homebrew install root on Apple silicon
pub const HOMEBREW_PREFIX: &str = "/opt/homebrew";
/// MacPorts install root
pub const MACPORTS_PREFIX: &str = "/opt/local";
/// Libraries shipped inside the Xcode bundle are never reported
pub const XCODE_PREFIX: &str = "/Applications/Xcode.app";
/// Operating-system frameworks are never reported
pub const SYSTEM_LIBS_PREFIX: &str = "/System/Library/";
pub const RPATH_MARKER: &str = "@rpath";
pub const LOADER_PATH_MARKER: &str = "@loader_path";
pub const EXECUTABLE_PATH_MARKER: &str = "@executable_path";
/// Libraries below this root are recorded but not inspected further
pub const USR_PREFIX: &str = "/usr";
pub const DEFAULT_INSPECT_PROGRAM: &str = "otool";

/// Path-prefix configuration shared by the walker and the classifier.
///
/// `Default` yields the literal constants above. [`PathPrefixes::from_env`] lets the
/// package roots and the inspection program be relocated without rebuilding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrefixes {
    pub homebrew: String,
    pub macports: String,
    pub xcode: String,
    pub system_libs: String,
    pub rpath: String,
    pub loader_path: String,
    pub executable_path: String,
    pub usr: String,
    pub inspect_program: String,
    /// Arguments passed to the inspection program before `-L`
    pub inspect_args: Vec<String>,
}

impl Default for PathPrefixes {
    fn default() -> Self {
        Self {
            homebrew: HOMEBREW_PREFIX.to_string(),
            macports: MACPORTS_PREFIX.to_string(),
            xcode: XCODE_PREFIX.to_string(),
            system_libs: SYSTEM_LIBS_PREFIX.to_string(),
            rpath: RPATH_MARKER.to_string(),
            loader_path: LOADER_PATH_MARKER.to_string(),
            executable_path: EXECUTABLE_PATH_MARKER.to_string(),
            usr: USR_PREFIX.to_string(),
            inspect_program: DEFAULT_INSPECT_PROGRAM.to_string(),
            inspect_args: Vec::new(),
        }
    }
}

impl PathPrefixes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `HOMEBREW_PREFIX`, `MACPORTS_PREFIX` and `OTOOL`.
    ///
    /// `OTOOL` is split on whitespace into a program and leading arguments, so
    /// `OTOOL="xcrun otool"` runs `xcrun otool -L <path>`. Quoting is not interpreted.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`PathPrefixes::from_env`] with an injected variable lookup.
    /// Unset or blank values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut prefixes = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(homebrew) = read("HOMEBREW_PREFIX") {
            prefixes.homebrew = homebrew;
        }
        if let Some(macports) = read("MACPORTS_PREFIX") {
            prefixes.macports = macports;
        }
        if let Some(command) = read("OTOOL") {
            let mut words = command.split_whitespace().map(str::to_string);
            if let Some(program) = words.next() {
                prefixes.inspect_program = program;
                prefixes.inspect_args = words.collect();
            }
        }

        log::debug!(
            "package roots: {}, {}; inspection program: {} {:?}",
            prefixes.homebrew,
            prefixes.macports,
            prefixes.inspect_program,
            prefixes.inspect_args
        );
        prefixes
    }

    /// Toolchain and operating-system libraries never enter the discovered set
    pub fn is_excluded(&self, reference: &str) -> bool {
        reference.starts_with(&self.xcode) || reference.starts_with(&self.system_libs)
    }

    /// `/usr` references are terminal: recorded, never inspected
    pub fn is_terminal(&self, reference: &str) -> bool {
        reference.starts_with(&self.usr)
    }
}
