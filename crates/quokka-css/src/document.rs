//! The document aggregate: DOM, declared styles, computed styles, layout
//! and paint state, with the forcing functions that keep them fresh.
//!
//! [CSSOM § dom-window-getcomputedstyle](https://www.w3.org/TR/cssom-1/#dom-window-getcomputedstyle)
//!
//! # Concurrency
//!
//! Everything here is single-threaded and synchronous. [`Document::update_style`]
//! and [`Document::update_layout`] mutate document-wide shared state in
//! line before a read proceeds; resolved-value queries therefore take
//! `&mut Document`, which makes the no-concurrent-queries contract a
//! compile-time fact rather than a comment.

use std::collections::HashMap;

use quokka_dom::{DomTree, ElementData, NodeId, NodeType};

use crate::layout::{LayoutNode, LayoutNodeId, LayoutTree};
use crate::paint::{PaintNode, PaintNodeId, PaintTree};
use crate::property::PropertyID;
use crate::style::{ComputedStyle, DeclaredStyles, StyleComputer};
use crate::value::StyleValue;

/// A document: the owning aggregate for one page's DOM and style state.
///
/// Layout and paint trees are rebuilt lazily: mutations only mark the
/// document dirty, and the next forcing call recomputes whatever is stale.
/// Both forcing functions are idempotent.
#[derive(Debug)]
pub struct Document {
    dom: DomTree,
    declared: DeclaredStyles,
    styles: HashMap<NodeId, ComputedStyle>,
    layout: Option<LayoutTree>,
    paint: Option<PaintTree>,
    style_dirty: bool,
    layout_dirty: bool,
    style_computer: StyleComputer,
}

impl Document {
    /// Create an empty document (just the Document DOM node).
    #[must_use]
    pub fn new() -> Self {
        Document {
            dom: DomTree::new(),
            declared: DeclaredStyles::new(),
            styles: HashMap::new(),
            layout: None,
            paint: None,
            style_dirty: true,
            layout_dirty: true,
            style_computer: StyleComputer::new(),
        }
    }

    /// The document's DOM tree.
    #[must_use]
    pub fn dom(&self) -> &DomTree {
        &self.dom
    }

    /// Per-element declared values.
    #[must_use]
    pub fn declared_styles(&self) -> &DeclaredStyles {
        &self.declared
    }

    /// The document's style computer.
    #[must_use]
    pub fn style_computer(&self) -> &StyleComputer {
        &self.style_computer
    }

    /// Allocate a new, not yet connected element.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.mark_dirty();
        self.dom.alloc(NodeType::Element(ElementData::new(tag_name)))
    }

    /// Allocate a new, not yet connected text node.
    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        self.mark_dirty();
        self.dom.alloc(NodeType::Text(text.to_string()))
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.mark_dirty();
        self.dom.append_child(parent, child);
    }

    /// Detach `child` from `parent`, leaving it disconnected.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        self.mark_dirty();
        self.dom.remove_child(parent, child);
    }

    /// Set an element's declared values (longhand property/value pairs, in
    /// application order), replacing any previous declarations.
    pub fn set_declared_styles(
        &mut self,
        element: NodeId,
        declarations: Vec<(PropertyID, StyleValue)>,
    ) {
        self.mark_dirty();
        let _ = self.declared.insert(element, declarations);
    }

    /// Recompute computed styles for the connected tree, if stale.
    ///
    /// Blocking and idempotent: a clean document returns immediately.
    /// A style recompute invalidates layout (the next
    /// [`Document::update_layout`] rebuilds it).
    pub fn update_style(&mut self) {
        if !self.style_dirty {
            return;
        }
        let mut styles = HashMap::new();
        let root_style = ComputedStyle::default();
        self.compute_subtree_styles(self.dom.root(), &root_style, &mut styles);
        self.styles = styles;
        // Boxes keep their topology until the next layout pass, but the
        // styles they carry must reflect this cascade output.
        if let Some(layout) = self.layout.as_mut() {
            layout.refresh_styles(&self.styles);
        }
        self.style_dirty = false;
    }

    fn compute_subtree_styles(
        &self,
        id: NodeId,
        inherited: &ComputedStyle,
        styles: &mut HashMap<NodeId, ComputedStyle>,
    ) {
        let Some(node) = self.dom.get(id) else { return };
        match &node.node_type {
            NodeType::Element(_) => {
                let computed = self
                    .style_computer
                    .cascade(self.declared.get(&id).map(Vec::as_slice), inherited);
                for &child in self.dom.children(id) {
                    self.compute_subtree_styles(child, &computed, styles);
                }
                let _ = styles.insert(id, computed);
            }
            NodeType::Document => {
                for &child in self.dom.children(id) {
                    self.compute_subtree_styles(child, inherited, styles);
                }
            }
            NodeType::Text(_) | NodeType::Comment(_) => {}
        }
    }

    /// Recompute the layout and paint trees, if stale.
    ///
    /// Forces style first. Blocking and idempotent. Stacking contexts are
    /// not built here; they are built on demand by
    /// [`Document::build_stacking_context_tree_if_needed`].
    pub fn update_layout(&mut self) {
        self.update_style();
        if !self.layout_dirty && self.layout.is_some() {
            return;
        }
        let mut layout = LayoutTree::build(&self.dom, &self.styles);
        let paint = PaintTree::build(&mut layout);
        self.layout = Some(layout);
        self.paint = Some(paint);
        self.layout_dirty = false;
    }

    /// Build stacking contexts for the current paint generation, if they
    /// are not built yet. Idempotent; a no-op before layout exists.
    pub fn build_stacking_context_tree_if_needed(&mut self) {
        if let (Some(paint), Some(layout)) = (self.paint.as_mut(), self.layout.as_ref()) {
            paint.build_stacking_context_tree_if_needed(layout);
        }
    }

    /// The computed style of an element, from the last style pass.
    #[must_use]
    pub fn computed_style(&self, element: NodeId) -> Option<&ComputedStyle> {
        self.styles.get(&element)
    }

    /// The layout node generated for an element, if any.
    ///
    /// `display: none` elements and disconnected elements have none.
    #[must_use]
    pub fn layout_node_id(&self, element: NodeId) -> Option<LayoutNodeId> {
        self.layout.as_ref()?.node_for_dom(element)
    }

    /// Get a layout node by its ID.
    #[must_use]
    pub fn layout_node(&self, id: LayoutNodeId) -> Option<&LayoutNode> {
        self.layout.as_ref()?.get(id)
    }

    /// Get a paint node by its ID.
    #[must_use]
    pub fn paint_node(&self, id: PaintNodeId) -> Option<&PaintNode> {
        self.paint.as_ref()?.get(id)
    }

    /// The paint tree, once layout has run.
    #[must_use]
    pub fn paint_tree(&self) -> Option<&PaintTree> {
        self.paint.as_ref()
    }

    fn mark_dirty(&mut self) {
        self.style_dirty = true;
        self.layout_dirty = true;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
