pub mod document;
pub mod ids;
pub mod token;

pub use document::{Document, TocEntry};
pub use ids::AnchorId;
pub use token::{Token, TokenKind};
