use crate::geometry::Rect;

/// Read-only view of the host UI tree supplied by the integration.
///
/// Node handles are cheap to clone and compare; the core keeps at most one
/// of them (the attached surface) between events. Bounds are reported in the
/// node's own local coordinate space.
pub trait SurfaceTree {
    type Node: Clone + PartialEq;

    /// Children in the host's stable rendering order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    fn bounds(&self, node: &Self::Node) -> Rect;
    fn is_visible(&self, node: &Self::Node) -> bool;
    /// A node with no rendering children of its own.
    fn is_leaf(&self, node: &Self::Node) -> bool;
    /// Scrollable container marker (a viewport/scroll-pane equivalent).
    fn is_scrollable(&self, node: &Self::Node) -> bool;
    /// The content being scrolled by a scrollable node, if any. The scrolled
    /// content is the display surface; the scrollable node merely clips it.
    fn viewed_content(&self, node: &Self::Node) -> Option<Self::Node>;
}
