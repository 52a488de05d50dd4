//! L20n resource syntax: parser, syntax tree and diagnostics.
//!
//! # Example
//!
//! ```
//! use l20n_syntax::{ResourcePrinter, parse};
//!
//! let source = r#"<greeting "Hello, world!" title: "Greeting">"#;
//!
//! match parse(source) {
//!     Ok(resource) => println!("{}", ResourcePrinter::new(&resource).dump()),
//!     Err(err) => eprintln!("{}", err.render(source)),
//! }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod diagnostics;
pub mod parser;
pub mod printer;


pub use diagnostics::{ErrorKind, ErrorPrinter, LineCol, ParseError};
pub use parser::{Parser, parse};
pub use printer::ResourcePrinter;

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;
