//! Doc comment model.
//!
//! Plain data describing documentation comments found in source text: the
//! comment body, its block tags (`@param`, `@return`, ...), the entity it
//! documents and where everything sits in the original text.

#![deny(unsafe_code)]

pub mod comment;
pub mod error;
pub mod owner;
pub mod source;
pub mod span;

pub use comment::{DocComment, DocTag};
pub use error::{ModelError, Result};
pub use owner::{DocOwner, OwnerKind};
pub use source::SourceFile;
pub use span::Span;
