//! The cascade: declared values + inheritance → computed records.
//!
//! [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
//!
//! Selector matching and specificity are out of scope for this crate:
//! declarations arrive per-element, already typed, and in application
//! order. What remains of the cascade is inheritance plus applying those
//! declarations over the initial values.

use std::collections::HashMap;

use thiserror::Error;

use quokka_dom::{DomTree, NodeId, NodeType};

use crate::property::PropertyID;
use crate::style::computed::ComputedStyle;
use crate::value::StyleValue;

/// Per-element declared values, in application order.
///
/// The key is the element's DOM node; the declarations are longhand
/// property/value pairs (see [`ComputedStyle::apply`]).
pub type DeclaredStyles = HashMap<NodeId, Vec<(PropertyID, StyleValue)>>;

/// Why a standalone style computation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeStyleError {
    /// The node id does not exist in the document's tree.
    #[error("style computation requested for unknown node {0:?}")]
    UnknownNode(NodeId),
    /// The node exists but is not an element (text, comment, document).
    #[error("style computation requested for non-element node {0:?}")]
    NotAnElement(NodeId),
}

/// Computes styles for elements.
///
/// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
///
/// Used two ways: the document's style pass calls [`StyleComputer::cascade`]
/// per element in tree order, and the resolved-value query driver calls
/// [`StyleComputer::compute_style`] directly for elements that have no
/// layout node (e.g. `display: none` subtrees).
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleComputer;

impl StyleComputer {
    /// Create a style computer.
    #[must_use]
    pub fn new() -> Self {
        StyleComputer
    }

    /// Compute the style of a single element, standalone.
    ///
    /// Walks the ancestor chain to establish inherited values, then applies
    /// the element's own declarations. Unlike the document-wide style pass
    /// this does not require (or produce) any layout state.
    ///
    /// # Errors
    ///
    /// Fails if `element` is not an element node of `dom`.
    pub fn compute_style(
        &self,
        dom: &DomTree,
        declared: &DeclaredStyles,
        element: NodeId,
    ) -> Result<ComputedStyle, ComputeStyleError> {
        let node = dom
            .get(element)
            .ok_or(ComputeStyleError::UnknownNode(element))?;
        if !matches!(node.node_type, NodeType::Element(_)) {
            return Err(ComputeStyleError::NotAnElement(element));
        }

        // Inherit from the nearest element ancestor, computing it on the
        // fly. Longhands of a chain are computed parent-first, so inherited
        // values flow downward exactly as in the document-wide pass.
        let inherited = match dom.parent(element).filter(|&p| dom.as_element(p).is_some()) {
            Some(parent) => self.compute_style(dom, declared, parent)?,
            None => ComputedStyle::default(),
        };

        Ok(self.cascade(declared.get(&element).map(Vec::as_slice), &inherited))
    }

    /// One cascade step: start from the inherited record, apply the
    /// element's declarations in order.
    #[must_use]
    pub fn cascade(
        &self,
        declarations: Option<&[(PropertyID, StyleValue)]>,
        inherited: &ComputedStyle,
    ) -> ComputedStyle {
        let mut computed = ComputedStyle::inherited_from(inherited);
        if let Some(declarations) = declarations {
            for (property_id, value) in declarations {
                computed.apply(*property_id, value);
            }
        }
        computed
    }
}
