//! CSS object model and resolved-value computation for the Quokka renderer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Property identifiers** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/))
//!   - The closed set of longhand and shorthand properties the engine knows
//!   - Shorthand → longhand metadata
//! - **Style values** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - An immutable, structurally-comparable value object covering colors,
//!     lengths, percentages, keywords, positions, lists, shorthands, and
//!     transform functions
//!   - Canonical CSS-text serialization
//! - **Computed styles** ([§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed))
//!   - The per-element computed-value record and a minimal cascade
//! - **Layout and paint trees** (interface-level)
//!   - Just enough box/paint structure to resolve layout- and
//!     paint-dependent values (used line height, transform matrices)
//! - **Resolved values** ([CSSOM § Resolved Values](https://www.w3.org/TR/cssom-1/#resolved-values))
//!   - The read-only declaration returned by a `getComputedStyle`-style
//!     query, including per-property special cases and on-the-fly shorthand
//!     reconstruction
//!
//! # Not Yet Implemented
//!
//! - CSS text parsing (declared values enter this crate already typed)
//! - Selector matching and specificity (declarations are per-element)
//! - Box geometry (the layout tree carries styles, not dimensions)
//! - Iteration over resolved declarations (`length`/`item` are empty by
//!   design, matching the incompleteness of the resolved-style object)

/// Read-only resolved-style declarations per [CSSOM](https://www.w3.org/TR/cssom-1/#resolved-values).
pub mod cssom;
/// The document aggregate owning DOM, styles, layout, and paint state.
pub mod document;
/// Layout tree counterpart of styled elements.
pub mod layout;
/// Paint tree and stacking contexts per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod paint;
/// Property identifiers and shorthand metadata per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod property;
/// Computed style records and the cascade per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod style;
/// CSS value objects per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
pub mod value;

// Re-exports for convenience
pub use cssom::{ModificationError, ResolvedStyleDeclaration, StyleProperty};
pub use document::Document;
pub use layout::{LayoutNode, LayoutNodeId, LayoutTree};
pub use paint::{AffineTransform, PaintNode, PaintNodeId, PaintTree, StackingContext};
pub use property::PropertyID;
pub use style::{
    BackgroundLayerData, BorderData, ComputeStyleError, ComputedStyle, DeclaredStyles, LineHeight,
    SideValues, StyleComputer, TransformOperation,
};
pub use value::{
    ColorValue, EdgeValue, LengthPercentage, LengthValue, PositionEdge, Separator, Size,
    StyleValue, TransformFunction, ValueID, DEFAULT_FONT_SIZE_PX,
};
