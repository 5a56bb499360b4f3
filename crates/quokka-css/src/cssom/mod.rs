//! Read-only resolved-style declarations.
//!
//! [CSSOM § Resolved Values](https://www.w3.org/TR/cssom-1/#resolved-values)
//! [CSSOM § the CSSStyleDeclaration interface](https://www.w3.org/TR/cssom-1/#the-cssstyledeclaration-interface)
//!
//! A [`ResolvedStyleDeclaration`] is what a `getComputedStyle`-style query
//! hands back: a declaration whose "computed flag" is permanently set. It
//! answers per-property reads through the resolved-value engine and rejects
//! every mutation entry point with a fixed error; the immutability is also
//! a type-level fact, since the type exposes no mutating access to any
//! style at all.

/// Per-property resolved-value computation (factories + dispatcher).
pub mod resolved_value;

use serde::Serialize;
use thiserror::Error;

use quokka_common::warning::warn_once;

use quokka_dom::NodeId;

use crate::document::Document;
use crate::property::PropertyID;
use crate::value::StyleValue;

pub use resolved_value::{
    style_value_for_color, style_value_for_length_percentage, style_value_for_property,
    style_value_for_sided_shorthand, style_value_for_size,
};

/// A property/value pair: the unit a successful resolved-value query
/// returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleProperty {
    /// The property that was queried.
    pub property_id: PropertyID,
    /// Its resolved value.
    pub value: StyleValue,
}

/// The fixed error every mutation entry point of a resolved declaration
/// fails with.
///
/// [CSSOM § dom-cssstyledeclaration-setproperty](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-setproperty)
/// "If the computed flag is set, then throw a NoModificationAllowedError
/// exception."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot modify the result of a resolved style query")]
pub struct ModificationError;

/// The declaration object returned for a resolved-style query on one
/// element.
///
/// Holds only the element's identity; every read re-runs against the
/// document's current state, forcing style or layout freshness first as
/// the queried property requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyleDeclaration {
    element: NodeId,
}

impl ResolvedStyleDeclaration {
    /// Create the resolved declaration for an element.
    #[must_use]
    pub fn for_element(element: NodeId) -> Self {
        ResolvedStyleDeclaration { element }
    }

    /// The element this declaration reads from.
    #[must_use]
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// The number of declarations.
    ///
    /// Enumeration of resolved declarations is intentionally unimplemented:
    /// this always returns 0. A documented gap, not a crash.
    #[must_use]
    pub fn length(&self) -> usize {
        0
    }

    /// The property name at an index.
    ///
    /// See [`ResolvedStyleDeclaration::length`]: always empty.
    #[must_use]
    pub fn item(&self, _index: usize) -> String {
        String::new()
    }

    /// Resolve one property for this declaration's element.
    ///
    /// [CSSOM § dom-window-getcomputedstyle](https://www.w3.org/TR/cssom-1/#dom-window-getcomputedstyle)
    ///
    /// - A disconnected element yields no result.
    /// - A layout-affecting property forces a full layout pass first; a
    ///   purely cosmetic one forces only the cascade.
    /// - An element without a layout node (e.g. `display: none`) falls back
    ///   to a standalone style computation and answers from the plain
    ///   computed value, with none of the per-property special cases (no
    ///   layout or paint data exists to special-case against).
    ///
    /// Queries never fail hard: anything unresolvable is `None`.
    pub fn property(
        &self,
        document: &mut Document,
        property_id: PropertyID,
    ) -> Option<StyleProperty> {
        // "If elt is connected, ..." - a disconnected element has no
        // resolved style at all.
        if !document.dom().is_connected(self.element) {
            return None;
        }

        if property_id.affects_layout() {
            document.update_layout();
        } else {
            document.update_style();
        }

        let Some(layout_node) = document.layout_node_id(self.element) else {
            // No layout representation (e.g. display: none): compute a
            // standalone style and read the plain computed value.
            let style = match document.style_computer().compute_style(
                document.dom(),
                document.declared_styles(),
                self.element,
            ) {
                Ok(style) => style,
                Err(error) => {
                    warn_once(
                        "CSS",
                        &format!("standalone style computation failed: {error}"),
                    );
                    return None;
                }
            };
            let Some(value) = style.property(property_id) else {
                warn_once(
                    "CSS",
                    &format!("no computed value for '{property_id}' in standalone style"),
                );
                return None;
            };
            return Some(StyleProperty {
                property_id,
                value: value.clone(),
            });
        };

        let value = style_value_for_property(document, layout_node, property_id)?;
        Some(StyleProperty { property_id, value })
    }

    /// Always fails: resolved declarations cannot be modified.
    ///
    /// # Errors
    ///
    /// Always [`ModificationError`]; no mutation is ever performed.
    pub fn set_property(
        &self,
        _property_id: PropertyID,
        _value: &str,
    ) -> Result<(), ModificationError> {
        // "If the computed flag is set, then throw a
        // NoModificationAllowedError exception."
        Err(ModificationError)
    }

    /// Always fails: resolved declarations cannot be modified.
    ///
    /// # Errors
    ///
    /// Always [`ModificationError`]; no mutation is ever performed.
    pub fn remove_property(&self, _property_id: PropertyID) -> Result<String, ModificationError> {
        Err(ModificationError)
    }

    /// Always fails: resolved declarations cannot be modified.
    ///
    /// # Errors
    ///
    /// Always [`ModificationError`]; no mutation is ever performed.
    pub fn set_css_text(&self, _css_text: &str) -> Result<(), ModificationError> {
        Err(ModificationError)
    }

    /// Serialize the declaration block.
    ///
    /// [CSSOM § dom-cssstyledeclaration-csstext](https://www.w3.org/TR/cssom-1/#dom-cssstyledeclaration-csstext)
    /// "If the computed flag is set, then return the empty string." - and
    /// for a resolved declaration the computed flag is always set.
    #[must_use]
    pub fn serialized(&self) -> String {
        String::new()
    }
}
