//! Paint tree and stacking contexts.
//!
//! [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)
//! [CSS Transforms § 6](https://www.w3.org/TR/css-transforms-1/#transform-functions)
//!
//! Each layout node gets a paint-tree counterpart. Nodes whose style has a
//! non-empty transform list establish a stacking context, which carries the
//! accumulated 2-D affine matrix of those transform functions. That matrix
//! is what a `transform` resolved-value query serializes
//! ([§ Serialization of the computed value](https://www.w3.org/TR/css-transforms-1/#serialization-of-the-computed-value)).
//!
//! Stacking contexts are built on demand and memoized per paint-tree
//! generation: repeated queries after the same layout pass reuse the same
//! contexts.

use serde::Serialize;

use crate::layout::{LayoutNodeId, LayoutTree};
use crate::style::TransformOperation;

/// A type-safe index into the paint tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaintNodeId(pub usize);

/// A 2-D affine transform matrix.
///
/// [CSS Transforms § 9](https://www.w3.org/TR/css-transforms-1/#mathematical-description)
/// "A 2D 3x2 transformation matrix... described by six values
/// a, b, c, d, e, f."
///
/// Column layout: `[a c e; b d f]`. NOTE: 3-D matrices are not modeled;
/// everything serializes as the 2-D `matrix()` function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffineTransform {
    /// Horizontal scale component.
    pub a: f64,
    /// Vertical shear component.
    pub b: f64,
    /// Horizontal shear component.
    pub c: f64,
    /// Vertical scale component.
    pub d: f64,
    /// Horizontal translation component.
    pub e: f64,
    /// Vertical translation component.
    pub f: f64,
}

impl AffineTransform {
    /// The identity matrix.
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Matrix product `self × other` (apply `other` first, then `self`).
    #[must_use]
    pub fn multiply(&self, other: &AffineTransform) -> AffineTransform {
        AffineTransform {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// The matrix of a single transform operation.
    ///
    /// [CSS Transforms § 9](https://www.w3.org/TR/css-transforms-1/#mathematical-description)
    #[must_use]
    pub fn from_operation(operation: &TransformOperation) -> AffineTransform {
        let mut matrix = AffineTransform::IDENTITY;
        match operation {
            TransformOperation::Matrix(a, b, c, d, e, f) => {
                matrix = AffineTransform {
                    a: *a,
                    b: *b,
                    c: *c,
                    d: *d,
                    e: *e,
                    f: *f,
                };
            }
            TransformOperation::Translate(x, y) => {
                matrix.e = x.to_px();
                matrix.f = y.to_px();
            }
            TransformOperation::TranslateX(x) => matrix.e = x.to_px(),
            TransformOperation::TranslateY(y) => matrix.f = y.to_px(),
            TransformOperation::Scale(x, y) => {
                matrix.a = *x;
                matrix.d = *y;
            }
            TransformOperation::ScaleX(x) => matrix.a = *x,
            TransformOperation::ScaleY(y) => matrix.d = *y,
            TransformOperation::Rotate(degrees) => {
                let radians = degrees.to_radians();
                matrix.a = radians.cos();
                matrix.b = radians.sin();
                matrix.c = -radians.sin();
                matrix.d = radians.cos();
            }
            TransformOperation::SkewX(degrees) => matrix.c = degrees.to_radians().tan(),
            TransformOperation::SkewY(degrees) => matrix.b = degrees.to_radians().tan(),
        }
        matrix
    }

    /// Accumulate an operation list into a single matrix.
    ///
    /// [§ The Transform Rendering Model](https://www.w3.org/TR/css-transforms-1/#transform-rendering)
    /// "Post-multiply... in the order provided."
    #[must_use]
    pub fn from_operations(operations: &[TransformOperation]) -> AffineTransform {
        operations
            .iter()
            .fold(AffineTransform::IDENTITY, |accumulated, operation| {
                accumulated.multiply(&AffineTransform::from_operation(operation))
            })
    }
}

/// A stacking context: accumulated compositing state for an element
/// subtree. Only the transform matrix is modeled here.
#[derive(Debug, Clone, PartialEq)]
pub struct StackingContext {
    transform: AffineTransform,
}

impl StackingContext {
    /// The accumulated 2-D affine transform matrix.
    #[must_use]
    pub fn affine_transform_matrix(&self) -> AffineTransform {
        self.transform
    }
}

/// The paint-tree counterpart of a layout node.
#[derive(Debug, Clone)]
pub struct PaintNode {
    /// The layout node this paint node was generated for.
    layout_node: LayoutNodeId,
    /// The node's stacking context, if it establishes one.
    stacking_context: Option<StackingContext>,
}

impl PaintNode {
    /// The layout node this paint node belongs to.
    #[must_use]
    pub fn layout_node(&self) -> LayoutNodeId {
        self.layout_node
    }

    /// The node's stacking context, once the context tree is built.
    #[must_use]
    pub fn stacking_context(&self) -> Option<&StackingContext> {
        self.stacking_context.as_ref()
    }
}

/// The paint tree: one node per layout node, plus lazily built stacking
/// contexts.
#[derive(Debug, Clone, Default)]
pub struct PaintTree {
    nodes: Vec<PaintNode>,
    stacking_contexts_built: bool,
}

impl PaintTree {
    /// Build the paint tree for a layout tree, linking each layout node to
    /// its paint counterpart. Stacking contexts are not built yet.
    #[must_use]
    pub fn build(layout: &mut LayoutTree) -> Self {
        let layout_ids: Vec<LayoutNodeId> = layout.iter().map(|(id, _)| id).collect();
        let mut nodes = Vec::with_capacity(layout_ids.len());
        for layout_id in layout_ids {
            let paint_id = PaintNodeId(nodes.len());
            nodes.push(PaintNode {
                layout_node: layout_id,
                stacking_context: None,
            });
            layout.set_paintable(layout_id, paint_id);
        }
        PaintTree {
            nodes,
            stacking_contexts_built: false,
        }
    }

    /// Build stacking contexts for every transformed node, once per paint
    /// generation. Idempotent: calling this again is a no-op until the
    /// paint tree is rebuilt.
    pub fn build_stacking_context_tree_if_needed(&mut self, layout: &LayoutTree) {
        if self.stacking_contexts_built {
            return;
        }
        for node in &mut self.nodes {
            let Some(layout_node) = layout.get(node.layout_node) else {
                continue;
            };
            let operations = layout_node.computed_values().transformations();
            if !operations.is_empty() {
                node.stacking_context = Some(StackingContext {
                    transform: AffineTransform::from_operations(operations),
                });
            }
        }
        self.stacking_contexts_built = true;
    }

    /// Whether stacking contexts have been built for this paint generation.
    #[must_use]
    pub fn stacking_context_tree_built(&self) -> bool {
        self.stacking_contexts_built
    }

    /// Get a paint node by its ID.
    #[must_use]
    pub fn get(&self, id: PaintNodeId) -> Option<&PaintNode> {
        self.nodes.get(id.0)
    }

    /// The number of paint nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
