use crate::config::ShellConfig;
use crate::pas::commands::Application;
use crate::pas::error::ShellError;
use crate::pas::wildcard::GlobExpander;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// What one evaluation needs besides the line itself: where relative paths
/// start, which applications exist, and the user's settings.
#[derive(Clone)]
pub struct ShellContext {
    pub cwd: PathBuf,
    pub config: ShellConfig,
    registry: HashMap<String, Arc<dyn Application>>,
}

impl ShellContext {
    pub fn new() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_cwd(cwd)
    }

    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        let mut ctx = Self {
            cwd: cwd.into(),
            config: ShellConfig::default(),
            registry: HashMap::new(),
        };
        crate::pas::commands::builtins::register_all_builtins(&mut ctx);
        ctx
    }

    pub fn with_config(mut self, config: ShellConfig) -> Self {
        self.config = config;
        self
    }

    pub fn register_command(&mut self, name: &str, command: Arc<dyn Application>) {
        self.registry.insert(name.to_string(), command);
    }

    pub fn lookup(&self, name: &str) -> Result<&dyn Application, ShellError> {
        self.registry
            .get(name)
            .map(|app| app.as_ref())
            .ok_or_else(|| ShellError::InvalidApp(name.to_string()))
    }

    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.cwd.join(p)
        }
    }

    pub fn globber(&self) -> GlobExpander<'_> {
        GlobExpander::new(&self.cwd, self.config.glob.include_hidden)
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}
