mod compiler;
mod context;

pub use compiler::{compile_content_module, CompileError, EXPORT_NAMES};
pub use context::{CompileOptions, CompilerContext};

#[cfg(test)]
mod tests;
