use pixel_readout::bitmap::Bitmap;
use pixel_readout::geometry::Rect;
use pixel_readout::readout::SurfaceTree;

/// Arena-backed stand-in for a host UI tree. Node handles are indices.
#[derive(Debug, Default)]
pub struct MockTree {
    nodes: Vec<MockNode>,
}

#[derive(Debug)]
struct MockNode {
    bounds: Rect,
    visible: bool,
    scrollable: bool,
    viewed: Option<usize>,
    children: Vec<usize>,
    parent: Option<usize>,
}

impl MockTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, parent: Option<usize>, bounds: Rect) -> usize {
        let id = self.nodes.len();
        self.nodes.push(MockNode {
            bounds,
            visible: true,
            scrollable: false,
            viewed: None,
            children: Vec::new(),
            parent,
        });
        if let Some(p) = parent {
            self.nodes[p].children.push(id);
        }
        id
    }

    pub fn mark_scrollable(&mut self, id: usize, viewed: usize) {
        self.nodes[id].scrollable = true;
        self.nodes[id].viewed = Some(viewed);
    }

    pub fn hide(&mut self, id: usize) {
        self.nodes[id].visible = false;
    }
}

impl SurfaceTree for MockTree {
    type Node = usize;

    fn children(&self, node: &usize) -> Vec<usize> {
        self.nodes[*node].children.clone()
    }

    fn parent(&self, node: &usize) -> Option<usize> {
        self.nodes[*node].parent
    }

    fn bounds(&self, node: &usize) -> Rect {
        self.nodes[*node].bounds
    }

    fn is_visible(&self, node: &usize) -> bool {
        self.nodes[*node].visible
    }

    fn is_leaf(&self, node: &usize) -> bool {
        self.nodes[*node].children.is_empty()
    }

    fn is_scrollable(&self, node: &usize) -> bool {
        self.nodes[*node].scrollable
    }

    fn viewed_content(&self, node: &usize) -> Option<usize> {
        self.nodes[*node].viewed
    }
}

/// Fixed-size bitmap that samples the same opaque color everywhere.
pub struct SolidBitmap {
    pub width: u32,
    pub height: u32,
    pub argb: u32,
}

impl Bitmap for SolidBitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn sample(&self, x: u32, y: u32) -> Option<u32> {
        (x < self.width && y < self.height).then_some(self.argb)
    }
}

/// Bitmap whose host-side sampling always fails, e.g. a decode error.
pub struct UnsampleableBitmap {
    pub width: u32,
    pub height: u32,
}

impl Bitmap for UnsampleableBitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn sample(&self, _x: u32, _y: u32) -> Option<u32> {
        None
    }
}
