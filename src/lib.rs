pub mod config;
pub mod pas;

pub use pas::context::ShellContext;
pub use pas::error::ShellError;
pub use pas::run_command_line;
