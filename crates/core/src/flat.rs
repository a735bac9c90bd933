//! A pre-order index over a document's token tree.
//!
//! The parser's notion of "the token after this one" is document order with
//! children visited right after their parent. [`FlatIndex`] records the path
//! of every token in that order so passes can scan forward by position and
//! then reach back into the tree with `Document::get_mut`.
//!
//! An index is only valid until the tree's shape changes. Passes that only
//! rewrite content or attributes, or that append children after the last
//! indexed child, can keep using it.

use docweave_types::{Document, Token};

type Path = Vec<usize>;

#[derive(Debug, Clone, Default)]
pub struct FlatIndex {
    paths: Vec<Path>,
}

impl FlatIndex {
    pub fn build(doc: &Document) -> Self {
        let mut paths = Vec::new();
        let mut prefix = Vec::new();
        for (i, token) in doc.tokens.iter().enumerate() {
            prefix.push(i);
            Self::visit(token, &mut prefix, &mut paths);
            prefix.pop();
        }
        Self { paths }
    }

    fn visit(token: &Token, prefix: &mut Path, paths: &mut Vec<Path>) {
        paths.push(prefix.clone());
        for (i, child) in token.children.iter().enumerate() {
            prefix.push(i);
            Self::visit(child, prefix, paths);
            prefix.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn path(&self, position: usize) -> Option<&[usize]> {
        self.paths.get(position).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &[usize]> + ExactSizeIterator {
        self.paths.iter().map(Vec::as_slice)
    }

    /// Positions of every token matching `predicate`, in document order.
    pub fn positions<'d>(
        &'d self,
        doc: &'d Document,
        mut predicate: impl FnMut(&Token) -> bool + 'd,
    ) -> impl Iterator<Item = usize> + 'd {
        self.paths
            .iter()
            .enumerate()
            .filter(move |(_, path)| doc.get(path).is_some_and(&mut predicate))
            .map(|(position, _)| position)
    }

    /// For each position, the nearest later position whose token has
    /// non-empty `content`.
    pub fn next_with_content(&self, doc: &Document) -> Vec<Option<usize>> {
        let mut next = vec![None; self.paths.len()];
        let mut following = None;
        for (position, path) in self.paths.iter().enumerate().rev() {
            next[position] = following;
            if doc.get(path).is_some_and(|t| !t.content.is_empty()) {
                following = Some(position);
            }
        }
        next
    }
}
