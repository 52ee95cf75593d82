//! Doc comment ingestion.
//!
//! Finds source files and extracts `/** ... */` comments together with the
//! declaration each one documents.
//!
//! # Example
//!
//! ```
//! use redundoc_ingest::parse_source;
//!
//! let source = parse_source(
//!     "Person.java",
//!     "class Person {\n    /** Returns the name. */\n    String getName() { return name; }\n}\n",
//! );
//! let comment = &source.comments[0];
//! assert_eq!(comment.body, "Returns the name.");
//! assert_eq!(comment.owner.as_ref().map(|o| o.name.as_str()), Some("getName"));
//! ```

#![deny(unsafe_code)]

mod declaration;
mod discovery;
mod error;
mod lines;
mod parser;
mod scanner;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{DEFAULT_EXTENSIONS, discover_sources};

// === Parsing ===
pub use declaration::parse_declaration;
pub use parser::{parse_source, read_source};
