use std::{
    env,
    path::{Path, PathBuf},
};

/// Environment variable holding extra module directories, in the platform's
/// path-list syntax (`:`-separated on Unix).
pub const MODULE_PATH_VAR: &str = "QUIRK_PATH";
/// File extension of module source files.
pub const DEFAULT_EXTENSION: &str = "qk";
/// Directories searched for modules when nothing else is configured.
pub const DEFAULT_SEARCH_PATHS: &[&str] = &[".", "lang"];

/// Settings shared by an interpreter and every module interpreter it creates.
///
/// # Example
/// ```
/// use quirk::config::InterpreterConfig;
///
/// let config = InterpreterConfig::default().with_search_path("vendor");
///
/// assert_eq!(config.search_paths[0].to_str(), Some("vendor"));
/// assert_eq!(config.module_file("vendor".as_ref(), "math").to_str(),
///            Some("vendor/math.qk"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Directories searched in order for `<module>.<extension>`.
    pub search_paths: Vec<PathBuf>,
    /// Module file extension, without the dot.
    pub extension:    String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self { search_paths: DEFAULT_SEARCH_PATHS.iter().map(PathBuf::from).collect(),
               extension:    DEFAULT_EXTENSION.to_string(), }
    }
}

impl InterpreterConfig {
    /// The default configuration with the entries of `QUIRK_PATH` searched
    /// first.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(paths) = env::var_os(MODULE_PATH_VAR) {
            let mut search_paths = env::split_paths(&paths).filter(|p| !p.as_os_str().is_empty())
                                                           .collect::<Vec<_>>();
            search_paths.append(&mut config.search_paths);
            config.search_paths = search_paths;
        }
        config
    }

    /// Puts `path` in front of the search path.
    #[must_use]
    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.insert(0, path.into());
        self
    }

    /// Replaces the whole search path.
    #[must_use]
    pub fn with_search_paths<P: Into<PathBuf>>(mut self, paths: impl IntoIterator<Item = P>) -> Self {
        self.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the module file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The path of `module`'s source file inside `dir`.
    #[must_use]
    pub fn module_file(&self, dir: &Path, module: &str) -> PathBuf {
        dir.join(module).with_extension(&self.extension)
    }

    /// Finds the first existing source file for `module` on the search path.
    #[must_use]
    pub fn resolve(&self, module: &str) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .map(|dir| self.module_file(dir, module))
            .find(|path| path.is_file())
    }
}
