pub mod io;
pub mod text;
pub mod time;
pub mod common; // Private helpers

use crate::pas::context::ShellContext;
use std::sync::Arc;

/// Helper to register all built-in commands at once
pub fn register_all_builtins(ctx: &mut ShellContext) {
    // IO
    ctx.register_command("echo", Arc::new(io::echo::EchoCommand));
    ctx.register_command("cat", Arc::new(io::cat::CatCommand));

    // Text filters
    ctx.register_command("head", Arc::new(text::head::HeadCommand));
    ctx.register_command("tail", Arc::new(text::tail::TailCommand));
    ctx.register_command("sort", Arc::new(text::sort::SortCommand));

    // Clock
    ctx.register_command("date", Arc::new(time::date::DateCommand));
}
