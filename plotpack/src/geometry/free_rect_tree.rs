use crate::util::FPA;

/// Index of a [`FreeRectNode`] inside a [`FreeRectTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Node of the binary free-space tree.
/// An unused node is free space. A used node holds a placed block in its top-left corner
/// and is split into two children covering the remainder.
#[derive(Clone, Debug, PartialEq)]
pub struct FreeRectNode {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// `[down, right]`, present once a block has been placed in this node
    pub children: Option<[NodeId; 2]>,
}

impl FreeRectNode {
    fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        FreeRectNode {
            x,
            y,
            width,
            height,
            children: None,
        }
    }

    pub fn is_used(&self) -> bool {
        self.children.is_some()
    }

    /// Whether a `width` x `height` block fits in this node (with a tolerance for floating point precision).
    pub fn fits(&self, width: f32, height: f32) -> bool {
        FPA(width) <= FPA(self.width) && FPA(height) <= FPA(self.height)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Binary tree of free rectangles covering a plot, stored as an index-addressed arena.
/// Cloning the tree is a plain vector copy, which makes it cheap to snapshot before a tentative placement.
#[derive(Clone, Debug)]
pub struct FreeRectTree {
    nodes: Vec<FreeRectNode>,
}

impl FreeRectTree {
    /// Creates a tree with a single free root node covering a `width` x `height` plot with its corner at the origin.
    pub fn new(width: f32, height: f32) -> Self {
        FreeRectTree {
            nodes: vec![FreeRectNode::new(0.0, 0.0, width, height)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &FreeRectNode {
        &self.nodes[id.0]
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Depth-first search for the first free node able to hold a `width` x `height` block.
    /// Used nodes are descended into `down` first, then `right`. The first match wins.
    pub fn find(&self, width: f32, height: f32) -> Option<NodeId> {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            match node.children {
                Some([down, right]) => {
                    // pushed in reverse so that `down` is explored first
                    stack.push(right);
                    stack.push(down);
                }
                None => {
                    if node.fits(width, height) {
                        return Some(id);
                    }
                }
            }
        }
        None
    }

    /// Places a `width` x `height` block in the top-left corner of free node `id` and splits the remainder:
    /// * `down`: the full width of the node, below the block
    /// * `right`: the remaining width beside the block, at the block's height
    ///
    /// Returns the top-left corner of the placed block.
    pub fn split(&mut self, id: NodeId, width: f32, height: f32) -> (f32, f32) {
        let node = self.node(id).clone();
        debug_assert!(!node.is_used(), "node {id:?} is already used");
        debug_assert!(node.fits(width, height), "block does not fit node {id:?}");

        //tolerant fits can leave a marginally negative remainder
        let down_height = f32::max(node.height - height, 0.0);
        let right_width = f32::max(node.width - width, 0.0);

        let down = FreeRectNode::new(node.x, node.y + height, node.width, down_height);
        let right = FreeRectNode::new(node.x + width, node.y, right_width, height);

        let down_id = self.push(down);
        let right_id = self.push(right);
        self.nodes[id.0].children = Some([down_id, right_id]);

        (node.x, node.y)
    }

    /// Searches a free node for the block and splits it. Returns the top-left corner of the block, if it fits anywhere.
    pub fn insert(&mut self, width: f32, height: f32) -> Option<(f32, f32)> {
        let id = self.find(width, height)?;
        Some(self.split(id, width, height))
    }

    /// Total area of all free (unused) nodes.
    pub fn free_area(&self) -> f32 {
        self.nodes
            .iter()
            .filter(|n| !n.is_used())
            .map(|n| n.area())
            .sum()
    }

    /// All free (unused) nodes of the tree.
    pub fn free_nodes(&self) -> impl Iterator<Item = &FreeRectNode> {
        self.nodes.iter().filter(|n| !n.is_used())
    }

    fn push(&mut self, node: FreeRectNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}
