//! Traversal over documented syntax trees.

use redundoc_model::{DocComment, SourceFile};

/// A node of a caller-supplied tree that may carry a doc comment.
///
/// Parsers with a richer tree than [`SourceFile`] implement this for their
/// own node type to have every comment inspected in one pass.
pub trait DocNode {
    fn doc_comment(&self) -> Option<&DocComment> {
        None
    }

    /// Calls `visit` on each direct child, in text order.
    fn for_each_child(&self, visit: &mut dyn FnMut(&dyn DocNode));
}

impl DocNode for DocComment {
    fn doc_comment(&self) -> Option<&DocComment> {
        Some(self)
    }

    fn for_each_child(&self, _visit: &mut dyn FnMut(&dyn DocNode)) {}
}

impl DocNode for SourceFile {
    fn for_each_child(&self, visit: &mut dyn FnMut(&dyn DocNode)) {
        for comment in &self.comments {
            visit(comment);
        }
    }
}

/// Visits every doc comment under `node`, depth first, parents first.
pub fn walk(node: &dyn DocNode, visit: &mut dyn FnMut(&DocComment)) {
    if let Some(comment) = node.doc_comment() {
        visit(comment);
    }
    node.for_each_child(&mut |child: &dyn DocNode| walk(child, &mut *visit));
}
