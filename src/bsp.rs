use std::collections::HashMap;

/// A node in the binary space partition tree: a leaf holds one window id, an
/// internal node splits its frame between exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BspNode {
    Leaf(u64),
    Internal {
        left: Box<BspNode>,
        right: Box<BspNode>,
    },
}

/// Axis-aligned rectangle in integer screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Split 50/50 along the longer axis: wider-than-tall frames split into
    /// left/right halves, otherwise top/bottom. Odd sizes give the extra
    /// pixel to the second half so the halves tile exactly.
    fn split(self) -> (Rect, Rect) {
        if self.width > self.height {
            let half = self.width / 2;
            (
                Rect {
                    width: half,
                    ..self
                },
                Rect {
                    x: self.x + half,
                    width: self.width - half,
                    ..self
                },
            )
        } else {
            let half = self.height / 2;
            (
                Rect {
                    height: half,
                    ..self
                },
                Rect {
                    y: self.y + half,
                    height: self.height - half,
                    ..self
                },
            )
        }
    }
}

/// bspwm-style tiling layout.
///
/// The first window fills the screen; each subsequent window splits the last
/// focused tile 50/50 (falling back to the right-most leaf when no focused
/// tile is in the tree). Removal rebuilds the tree from the remaining
/// windows in insertion order, which keeps the structure simple and the
/// result deterministic.
#[derive(Debug, Clone, Default)]
pub struct BspLayout {
    windows: Vec<u64>,
    root: Option<BspNode>,
    last_focused: Option<u64>,
}

impl BspLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracked window ids in insertion order
    pub fn windows(&self) -> &[u64] {
        &self.windows
    }

    /// Record `id` as the focused window; later adds split its tile.
    pub fn focus(&mut self, id: u64) {
        self.last_focused = Some(id);
    }

    /// Add a window by splitting the focused leaf, or the right-most leaf
    /// when the focused window is not in the tree. Ids already tracked are
    /// ignored.
    pub fn add_window(&mut self, id: u64) {
        if self.windows.contains(&id) {
            return;
        }
        self.windows.push(id);

        self.root = match self.root.take() {
            None => Some(BspNode::Leaf(id)),
            Some(mut root) => {
                let split = self
                    .last_focused
                    .is_some_and(|focused| split_leaf(&mut root, focused, id));
                Some(if split { root } else { insert_at_end(root, id) })
            }
        };
    }

    /// Remove a window and rebuild the tree from the remaining windows.
    pub fn remove_window(&mut self, id: u64) {
        self.windows.retain(|w| *w != id);
        self.root = build_tree(&self.windows, self.last_focused);
    }

    /// Swap two tracked windows' positions and rebuild. Ignored unless both
    /// ids are tracked.
    pub fn swap_windows(&mut self, a: u64, b: u64) {
        let idx_a = self.windows.iter().position(|w| *w == a);
        let idx_b = self.windows.iter().position(|w| *w == b);
        if let (Some(idx_a), Some(idx_b)) = (idx_a, idx_b) {
            self.windows.swap(idx_a, idx_b);
            self.root = build_tree(&self.windows, self.last_focused);
        }
    }

    /// Compute the frame of every window by walking the tree, halving the
    /// frame at each internal node.
    pub fn frames(&self, screen: Rect) -> HashMap<u64, Rect> {
        let mut out = HashMap::new();
        if let Some(root) = &self.root {
            assign_frames(root, screen, &mut out);
        }
        out
    }
}

/// Replace the leaf holding `target` with an internal node whose left child
/// is the old leaf and whose right child is a new leaf for `new_id`. Returns
/// false if no leaf holds `target`.
fn split_leaf(node: &mut BspNode, target: u64, new_id: u64) -> bool {
    match node {
        BspNode::Leaf(id) if *id == target => {
            let old = *id;
            *node = BspNode::Internal {
                left: Box::new(BspNode::Leaf(old)),
                right: Box::new(BspNode::Leaf(new_id)),
            };
            true
        }
        BspNode::Leaf(_) => false,
        BspNode::Internal { left, right } => {
            split_leaf(left, target, new_id) || split_leaf(right, target, new_id)
        }
    }
}

/// Split the right-most leaf, making the new window its sibling.
fn insert_at_end(node: BspNode, new_id: u64) -> BspNode {
    match node {
        BspNode::Leaf(old) => BspNode::Internal {
            left: Box::new(BspNode::Leaf(old)),
            right: Box::new(BspNode::Leaf(new_id)),
        },
        BspNode::Internal { left, right } => BspNode::Internal {
            left,
            right: Box::new(insert_at_end(*right, new_id)),
        },
    }
}

/// Rebuild a tree from windows in order: the first becomes the root leaf,
/// the rest split the last focused tile when it is present, otherwise the
/// right-most leaf.
fn build_tree(windows: &[u64], last_focused: Option<u64>) -> Option<BspNode> {
    let (&first, rest) = windows.split_first()?;
    let mut root = BspNode::Leaf(first);

    for &id in rest {
        let split = last_focused.is_some_and(|focused| split_leaf(&mut root, focused, id));
        if !split {
            root = insert_at_end(root, id);
        }
    }

    Some(root)
}

fn assign_frames(node: &BspNode, frame: Rect, out: &mut HashMap<u64, Rect>) {
    match node {
        BspNode::Leaf(id) => {
            out.insert(*id, frame);
        }
        BspNode::Internal { left, right } => {
            let (first, second) = frame.split();
            assign_frames(left, first, out);
            assign_frames(right, second, out);
        }
    }
}
