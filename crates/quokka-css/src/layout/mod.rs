//! Layout tree counterpart of styled elements.
//!
//! [CSS Display § 2](https://www.w3.org/TR/css-display-3/#the-display-properties)
//!
//! This tree carries styles, not geometry: each node owns the computed
//! style of its element plus the layout-derived values the resolved-value
//! engine needs (the used line height, and a link to the node's paint-tree
//! counterpart). Box dimensions are out of scope.
//!
//! `display: none` elements and their descendants generate no layout nodes
//! ([§ 2.6](https://www.w3.org/TR/css-display-3/#valdef-display-none)
//! "The element and its descendants generate no boxes or text runs"),
//! which is exactly the case the resolved-value query driver falls back to
//! a standalone style computation for.

use std::collections::HashMap;

use quokka_dom::{DomTree, NodeId, NodeType};

use crate::paint::PaintNodeId;
use crate::style::{BackgroundLayerData, ComputedStyle};

/// A type-safe index into the layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutNodeId(pub usize);

/// One layout node: a styled element's box-tree counterpart.
///
/// Owned by the [`LayoutTree`]; the CSSOM layer only ever looks nodes up
/// by DOM id, it never takes ownership.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// The DOM element this node was generated for.
    dom_node: NodeId,
    /// The element's computed style at layout time.
    style: ComputedStyle,
    /// Used line height in pixels.
    line_height: f64,
    /// The node's paint-tree counterpart, once paint state exists.
    paintable: Option<PaintNodeId>,
}

impl LayoutNode {
    /// The DOM element this node belongs to.
    #[must_use]
    pub fn dom_node(&self) -> NodeId {
        self.dom_node
    }

    /// The element's computed values.
    #[must_use]
    pub fn computed_values(&self) -> &ComputedStyle {
        &self.style
    }

    /// Per-layer background position data.
    #[must_use]
    pub fn background_layers(&self) -> &[BackgroundLayerData] {
        self.style.background_layers()
    }

    /// The used line height in pixels.
    ///
    /// [CSS Inline § 4.2](https://www.w3.org/TR/css-inline-3/#line-height-property)
    /// This is the layout-derived number, not the computed
    /// keyword/multiplier.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// The node's paint-tree counterpart, if paint state has been built.
    #[must_use]
    pub fn paintable(&self) -> Option<PaintNodeId> {
        self.paintable
    }
}

/// The layout tree: one node per connected, rendered element.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
    by_dom_node: HashMap<NodeId, LayoutNodeId>,
}

impl LayoutTree {
    /// Build the layout tree from a DOM tree and its computed styles.
    ///
    /// Walks the connected tree from the document node; element nodes with
    /// a computed style and `display` other than `none` get a layout node.
    /// A `display: none` element prunes its whole subtree. Text and
    /// comment nodes carry no style of their own here and are skipped.
    #[must_use]
    pub fn build(dom: &DomTree, styles: &HashMap<NodeId, ComputedStyle>) -> Self {
        let mut tree = LayoutTree::default();
        tree.build_subtree(dom, styles, dom.root());
        tree
    }

    fn build_subtree(
        &mut self,
        dom: &DomTree,
        styles: &HashMap<NodeId, ComputedStyle>,
        id: NodeId,
    ) {
        let Some(node) = dom.get(id) else { return };

        match &node.node_type {
            NodeType::Element(_) => {
                let Some(style) = styles.get(&id) else { return };
                if style.display_none() {
                    // No boxes for the element or its descendants.
                    return;
                }
                let line_height = style.line_height().used_px(style.font_size());
                let layout_id = LayoutNodeId(self.nodes.len());
                self.nodes.push(LayoutNode {
                    dom_node: id,
                    style: style.clone(),
                    line_height,
                    paintable: None,
                });
                let _ = self.by_dom_node.insert(id, layout_id);
                for &child in dom.children(id) {
                    self.build_subtree(dom, styles, child);
                }
            }
            NodeType::Document => {
                for &child in dom.children(id) {
                    self.build_subtree(dom, styles, child);
                }
            }
            NodeType::Text(_) | NodeType::Comment(_) => {}
        }
    }

    /// Get a layout node by its ID.
    #[must_use]
    pub fn get(&self, id: LayoutNodeId) -> Option<&LayoutNode> {
        self.nodes.get(id.0)
    }

    /// Get the layout node generated for a DOM element, if any.
    #[must_use]
    pub fn node_for_dom(&self, dom_node: NodeId) -> Option<LayoutNodeId> {
        self.by_dom_node.get(&dom_node).copied()
    }

    /// The number of layout nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes with their IDs, in build order.
    pub fn iter(&self) -> impl Iterator<Item = (LayoutNodeId, &LayoutNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (LayoutNodeId(index), node))
    }

    /// Record a node's paint-tree counterpart (called by the paint build).
    pub(crate) fn set_paintable(&mut self, id: LayoutNodeId, paintable: PaintNodeId) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.paintable = Some(paintable);
        }
    }

    /// Re-sync each node's style snapshot from a fresh style pass.
    ///
    /// A style-only update must not rebuild boxes, but the values carried
    /// by existing boxes have to reflect the new cascade output (computed
    /// values are conceptually shared between an element and its box).
    /// Topology changes (e.g. an element becoming `display: none`) still
    /// require a layout rebuild.
    pub(crate) fn refresh_styles(&mut self, styles: &HashMap<NodeId, ComputedStyle>) {
        for node in &mut self.nodes {
            if let Some(style) = styles.get(&node.dom_node) {
                node.line_height = style.line_height().used_px(style.font_size());
                node.style = style.clone();
            }
        }
    }
}
