use std::collections::VecDeque;

use crate::readout::surface::SurfaceTree;

/// A candidate qualifies only when its scale factor is this close to
/// uniform across both axes.
const UNIFORMITY_THRESHOLD: f64 = 0.90;
/// Leaves are preferred over containers that merely clip them.
const LEAF_BONUS: f64 = 0.5;
/// How far `resolve_viewing_surface` walks up from the event source when no
/// scrollable ancestor exists.
const ANCESTOR_SEARCH_LEVELS: usize = 5;

/// Closeness of a candidate's scale factor to being identical in both axes.
/// `1.0` means the candidate displays the image at one consistent zoom.
pub fn uniformity(width: i32, height: i32, image_w: u32, image_h: u32) -> f64 {
    let zx = f64::from(width) / f64::from(image_w);
    let zy = f64::from(height) / f64::from(image_h);
    1.0 - (zx - zy).abs() / zx.max(zy).max(1.0)
}

/// Search the subtree under `root` for the element that actually renders the
/// bitmap.
///
/// Breadth-first scan; every visible candidate with non-zero bounds is scored
/// by `2 * uniformity + leaf bonus` and must clear the uniformity threshold
/// to qualify. The true rendering surface is usually the leaf whose pixel
/// dimensions are a near-integer multiple of the image's. First-found wins
/// ties under stable BFS order.
pub fn find_image_canvas<T: SurfaceTree>(
    tree: &T,
    root: &T::Node,
    image_w: u32,
    image_h: u32,
) -> Option<T::Node> {
    if image_w == 0 || image_h == 0 {
        return None;
    }

    let mut best: Option<T::Node> = None;
    let mut best_score = f64::NEG_INFINITY;

    let mut queue = VecDeque::new();
    queue.push_back(root.clone());
    while let Some(node) = queue.pop_front() {
        let bounds = tree.bounds(&node);
        if tree.is_visible(&node) && !bounds.is_empty() {
            let uniform = uniformity(bounds.width, bounds.height, image_w, image_h);
            let leaf_bonus = if tree.is_leaf(&node) { LEAF_BONUS } else { 0.0 };
            let score = uniform * 2.0 + leaf_bonus;
            if uniform > UNIFORMITY_THRESHOLD && score > best_score {
                best = Some(node.clone());
                best_score = score;
            }
        }
        queue.extend(tree.children(&node));
    }

    if best.is_some() {
        tracing::debug!(score = best_score, "image canvas discovered");
    }
    best
}

/// BFS for the first scrollable node's viewed content. Used on attach to
/// start discovery from the scrolled content rather than the clipping frame.
pub fn find_scrolled_content<T: SurfaceTree>(tree: &T, root: &T::Node) -> Option<T::Node> {
    let mut queue = VecDeque::new();
    queue.push_back(root.clone());
    while let Some(node) = queue.pop_front() {
        if tree.is_scrollable(&node) {
            if let Some(view) = tree.viewed_content(&node) {
                return Some(view);
            }
        }
        queue.extend(tree.children(&node));
    }
    None
}

fn scrollable_ancestor<T: SurfaceTree>(tree: &T, start: &T::Node) -> Option<T::Node> {
    let mut current = Some(start.clone());
    while let Some(node) = current {
        if tree.is_scrollable(&node) {
            return Some(node);
        }
        current = tree.parent(&node);
    }
    None
}

/// Resolve the surface that pointer coordinates should be mapped against,
/// starting from an arbitrary node (typically the event source).
///
/// Scrollable viewers commonly render the bitmap into an inner panel
/// distinct from the outer frame that receives pointer events; mapping must
/// target the inner panel's geometry, not the frame's. When a scrollable
/// ancestor exists, discovery runs inside its viewed content and falls back
/// to the viewed content itself. Otherwise discovery is retried a bounded
/// number of ancestor levels up before giving up and returning `start`.
pub fn resolve_viewing_surface<T: SurfaceTree>(
    tree: &T,
    start: &T::Node,
    image_w: u32,
    image_h: u32,
) -> T::Node {
    if let Some(scrollable) = scrollable_ancestor(tree, start) {
        if let Some(view) = tree.viewed_content(&scrollable) {
            return find_image_canvas(tree, &view, image_w, image_h).unwrap_or(view);
        }
    }

    let mut current = Some(start.clone());
    for _ in 0..ANCESTOR_SEARCH_LEVELS {
        let Some(node) = current else { break };
        if let Some(canvas) = find_image_canvas(tree, &node, image_w, image_h) {
            return canvas;
        }
        current = tree.parent(&node);
    }
    start.clone()
}

#[cfg(test)]
mod tests {
    use super::uniformity;

    #[test]
    fn uniformity_is_one_iff_scales_match() {
        assert_eq!(uniformity(200, 100, 100, 50), 1.0);
        assert_eq!(uniformity(100, 50, 100, 50), 1.0);
        assert!(uniformity(200, 120, 100, 50) < 1.0);
    }

    #[test]
    fn uniformity_never_exceeds_one() {
        for (w, h) in [(1, 999), (999, 1), (640, 480), (3, 3)] {
            assert!(uniformity(w, h, 100, 50) <= 1.0);
        }
    }
}
