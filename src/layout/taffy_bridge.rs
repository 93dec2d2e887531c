//! Taffy Bridge - Lay out a view tree with Taffy.
//!
//! Builds a Taffy tree mirroring the subviews of a root view, computes
//! layout, and extracts every view's frame relative to its superview.
//!
//! Hidden views are laid out with `Display::None`.

use std::collections::HashMap;

use taffy::{AvailableSpace, Display, NodeId, Size, TaffyTree};

use crate::error::LayoutError;
use crate::types::ViewId;
use crate::view::View;

/// Position and size of a view, relative to its superview.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Frames of every view in a laid out tree.
#[derive(Debug, Clone, Default)]
pub struct ComputedLayout {
    frames: HashMap<ViewId, Frame>,
}

impl ComputedLayout {
    pub fn frame(&self, view: &View) -> Result<Frame, LayoutError> {
        self.frames
            .get(&view.id())
            .copied()
            .ok_or(LayoutError::NotInTree(view.id()))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Lay out `root` and everything below it within `width` x `height`.
pub fn compute_layout(root: &View, width: f32, height: f32) -> Result<ComputedLayout, LayoutError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let mut nodes: Vec<(View, NodeId)> = Vec::new();

    let root_node = build_node(&mut tree, root, &mut nodes)?;

    let available = Size {
        width: AvailableSpace::Definite(width),
        height: AvailableSpace::Definite(height),
    };
    tree.compute_layout(root_node, available)?;

    let mut result = ComputedLayout::default();
    for (view, node) in &nodes {
        let layout = tree.layout(*node)?;
        result.frames.insert(
            view.id(),
            Frame {
                x: layout.location.x,
                y: layout.location.y,
                width: layout.size.width,
                height: layout.size.height,
            },
        );
    }

    tracing::trace!(views = result.len(), "layout computed");
    Ok(result)
}

/// Create the node for `view` and, recursively, its subviews.
fn build_node(
    tree: &mut TaffyTree<()>,
    view: &View,
    nodes: &mut Vec<(View, NodeId)>,
) -> Result<NodeId, LayoutError> {
    let children = view
        .subviews()
        .iter()
        .map(|subview| build_node(tree, subview, nodes))
        .collect::<Result<Vec<_>, _>>()?;

    let mut style = view.style().clone();
    if view.is_hidden() {
        style.display = Display::None;
    }

    let node = tree.new_with_children(style, &children)?;
    nodes.push((view.clone(), node));
    Ok(node)
}
