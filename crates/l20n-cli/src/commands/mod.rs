pub mod ast;
pub mod check;
pub mod source_loader;
