use smallvec::SmallVec;

use crate::foundation::core::{BezPath, FixedPoint};
use crate::foundation::error::{DrawError, DrawResult};
use crate::pipeline::path::{PathSink, PathSource};

/// Kind tag of a [`PathNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathNodeKind {
    /// Subpath start.
    MoveTo,
    /// Straight segment.
    LineTo,
    /// Cubic segment.
    CurveTo,
    /// Subpath close.
    ClosePath,
}

/// One primitive segment of a delivered path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathNode {
    /// Subpath start.
    MoveTo(FixedPoint),
    /// Straight segment to the point.
    LineTo(FixedPoint),
    /// Cubic segment: two control points, then the end point.
    CurveTo([FixedPoint; 3]),
    /// Subpath close; carries no points.
    ClosePath,
}

impl PathNode {
    /// Kind tag.
    pub fn kind(&self) -> PathNodeKind {
        match self {
            PathNode::MoveTo(_) => PathNodeKind::MoveTo,
            PathNode::LineTo(_) => PathNodeKind::LineTo,
            PathNode::CurveTo(_) => PathNodeKind::CurveTo,
            PathNode::ClosePath => PathNodeKind::ClosePath,
        }
    }

    /// Points carried by the node: one, three, or none.
    pub fn points(&self) -> &[FixedPoint] {
        match self {
            PathNode::MoveTo(p) | PathNode::LineTo(p) => std::slice::from_ref(p),
            PathNode::CurveTo(pts) => pts,
            PathNode::ClosePath => &[],
        }
    }
}

/// A materialized path, owned by the descriptor that carries it.
///
/// Immutable once built; callbacks only see it through a shared reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackPath {
    nodes: SmallVec<[PathNode; 8]>,
}

impl CallbackPath {
    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Iterate nodes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathNode> {
        self.nodes.iter()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` for a path without nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node, for list-style traversal with [`NodeRef::next_node`].
    pub fn head(&self) -> Option<NodeRef<'_>> {
        (!self.nodes.is_empty()).then_some(NodeRef {
            path: self,
            index: 0,
        })
    }

    /// Convert to a `kurbo` path.
    pub fn to_bez_path(&self) -> BezPath {
        let mut out = BezPath::new();
        for node in &self.nodes {
            match *node {
                PathNode::MoveTo(p) => out.move_to(p.to_point()),
                PathNode::LineTo(p) => out.line_to(p.to_point()),
                PathNode::CurveTo([p1, p2, p3]) => {
                    out.curve_to(p1.to_point(), p2.to_point(), p3.to_point())
                }
                PathNode::ClosePath => out.close_path(),
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a CallbackPath {
    type Item = &'a PathNode;
    type IntoIter = std::slice::Iter<'a, PathNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Cursor over a [`CallbackPath`] that reads like a linked list.
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a> {
    path: &'a CallbackPath,
    index: usize,
}

impl<'a> NodeRef<'a> {
    /// The node under the cursor.
    pub fn node(&self) -> &'a PathNode {
        &self.path.nodes[self.index]
    }

    /// The following node, or `None` at the end of the list.
    pub fn next_node(&self) -> Option<NodeRef<'a>> {
        let index = self.index + 1;
        (index < self.path.nodes.len()).then_some(NodeRef {
            path: self.path,
            index,
        })
    }
}

/// Accumulates nodes during a path walk.
///
/// Dropping a materializer releases every node appended so far.
pub(crate) struct PathMaterializer {
    nodes: SmallVec<[PathNode; 8]>,
    max_nodes: Option<usize>,
}

impl PathMaterializer {
    pub(crate) fn new(max_nodes: Option<usize>) -> Self {
        Self {
            nodes: SmallVec::new(),
            max_nodes,
        }
    }

    fn append(&mut self, node: PathNode) -> DrawResult<()> {
        if let Some(max) = self.max_nodes
            && self.nodes.len() >= max
        {
            return Err(DrawError::no_memory(format!(
                "path node budget of {max} exhausted"
            )));
        }
        self.nodes.try_reserve(1)?;
        self.nodes.push(node);
        Ok(())
    }

    pub(crate) fn finish(self) -> CallbackPath {
        CallbackPath { nodes: self.nodes }
    }
}

impl PathSink for PathMaterializer {
    fn move_to(&mut self, p: FixedPoint) -> DrawResult<()> {
        self.append(PathNode::MoveTo(p))
    }

    fn line_to(&mut self, p: FixedPoint) -> DrawResult<()> {
        self.append(PathNode::LineTo(p))
    }

    fn curve_to(&mut self, p1: FixedPoint, p2: FixedPoint, p3: FixedPoint) -> DrawResult<()> {
        self.append(PathNode::CurveTo([p1, p2, p3]))
    }

    fn close_path(&mut self) -> DrawResult<()> {
        self.append(PathNode::ClosePath)
    }
}

/// Walk `source` into an owned [`CallbackPath`].
///
/// Any failure, whether from the node budget, an allocation, or the walk itself, discards
/// the partial path and is returned unchanged.
pub fn materialize(source: &dyn PathSource, max_nodes: Option<usize>) -> DrawResult<CallbackPath> {
    let mut materializer = PathMaterializer::new(max_nodes);
    source.interpret(&mut materializer)?;
    Ok(materializer.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/callback/path.rs"]
mod tests;
