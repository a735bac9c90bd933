use crate::token::Token;
use serde::{Deserialize, Serialize};

/// An ordered sequence of top-level block tokens.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub tokens: Vec<Token>,
}

impl Document {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Looks up a token by its child-index path from the document root.
    pub fn get(&self, path: &[usize]) -> Option<&Token> {
        let (first, rest) = path.split_first()?;
        let mut token = self.tokens.get(*first)?;
        for &index in rest {
            token = token.children.get(index)?;
        }
        Some(token)
    }

    pub fn get_mut(&mut self, path: &[usize]) -> Option<&mut Token> {
        let (first, rest) = path.split_first()?;
        let mut token = self.tokens.get_mut(*first)?;
        for &index in rest {
            token = token.children.get_mut(index)?;
        }
        Some(token)
    }
}

impl From<Vec<Token>> for Document {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

/// An entry in the table of contents, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading level (1 = h1, 2 = h2, etc.)
    pub level: u8,
    /// The plain text of the heading.
    #[serde(alias = "content")]
    pub label: String,
}

impl TocEntry {
    pub fn new(level: u8, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }
}
