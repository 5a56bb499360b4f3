//! Per-property resolved-value computation.
//!
//! [CSSOM § Resolved Values](https://www.w3.org/TR/cssom-1/#resolved-values)
//!
//! "The resolved value for a given longhand property can be determined as
//! follows: ..."
//!
//! A limited number of properties have special rules for producing their
//! resolved value, and shorthands have to be reconstructed from their
//! longhands on the fly; everything else uses the plain computed value.
//! [`style_value_for_property`] is the single dispatch point, and matches
//! the property set exhaustively so an unhandled property is a build-time
//! error rather than a silent fallback.

use quokka_common::warning::warn_once;

use crate::document::Document;
use crate::layout::{LayoutNode, LayoutNodeId};
use crate::property::PropertyID;
use crate::style::BackgroundLayerData;
use crate::value::{
    ColorValue, EdgeValue, LengthPercentage, LengthValue, PositionEdge, Separator, Size,
    StyleValue, TransformFunction, ValueID,
};

// ─────────────────────────────────────────────────────────────────────────────
// Value factories
// ─────────────────────────────────────────────────────────────────────────────

/// Wrap a computed `<length-percentage> | auto` into a style value.
#[must_use]
pub fn style_value_for_length_percentage(length_percentage: &LengthPercentage) -> StyleValue {
    match length_percentage {
        LengthPercentage::Auto => StyleValue::Identifier(ValueID::Auto),
        LengthPercentage::Percentage(percentage) => StyleValue::Percentage(*percentage),
        LengthPercentage::Length(length) => StyleValue::Length(*length),
        // an already-simplified calculation passes through unchanged
        LengthPercentage::Calculated(expression) => StyleValue::Calculated(expression.clone()),
    }
}

/// Wrap a computed sizing value into a style value.
///
/// # Panics
///
/// `fit-content(<length>)` has no resolved-value serialization yet; hitting
/// it halts rather than producing a silently wrong value.
#[must_use]
pub fn style_value_for_size(size: &Size) -> StyleValue {
    match size {
        Size::None => StyleValue::Identifier(ValueID::None),
        Size::Percentage(percentage) => StyleValue::Percentage(*percentage),
        Size::Length(length) => StyleValue::Length(*length),
        Size::Auto => StyleValue::Identifier(ValueID::Auto),
        Size::Calculated(expression) => StyleValue::Calculated(expression.clone()),
        Size::MinContent => StyleValue::Identifier(ValueID::MinContent),
        Size::MaxContent => StyleValue::Identifier(ValueID::MaxContent),
        Size::FitContent => StyleValue::Identifier(ValueID::FitContent),
        Size::FitContentLength(_) => todo!("serialize fit-content(<length>) sizes"),
    }
}

/// Wrap a fully resolved color into a style value.
///
/// Colors have no fallback logic here: resolution (currentColor, system
/// colors) happens upstream in the cascade.
#[must_use]
pub fn style_value_for_color(color: ColorValue) -> StyleValue {
    StyleValue::Color(color)
}

// ─────────────────────────────────────────────────────────────────────────────
// Shorthand reconstruction
// ─────────────────────────────────────────────────────────────────────────────

/// Collapse four resolved side values into the shortest serialization CSS
/// allows for sided shorthands.
///
/// [CSS Box § 6.1](https://www.w3.org/TR/css-box-4/#margin-shorthand)
/// "If there is only one component value, it applies to all sides. If
/// there are two values, the top and bottom margins are set to the first
/// value and the right and left margins are set to the second. ..."
///
/// Equality is the structural [`StyleValue`] equality.
#[must_use]
pub fn style_value_for_sided_shorthand(
    top: StyleValue,
    right: StyleValue,
    bottom: StyleValue,
    left: StyleValue,
) -> StyleValue {
    let top_and_bottom_same = top == bottom;
    let left_and_right_same = left == right;

    if top_and_bottom_same && left_and_right_same && top == left {
        return top;
    }

    if top_and_bottom_same && left_and_right_same {
        return StyleValue::list(vec![top, right], Separator::Space);
    }

    if left_and_right_same {
        return StyleValue::list(vec![top, right, bottom], Separator::Space);
    }

    StyleValue::list(vec![top, right, bottom, left], Separator::Space)
}

/// Resolve a per-background-layer property: the default when there are no
/// layers, the single layer's value directly, or a comma-separated list
/// with one entry per layer.
fn style_value_for_background_property<L, D>(
    layout_node: &LayoutNode,
    layer_value: L,
    default_value: D,
) -> StyleValue
where
    L: Fn(&BackgroundLayerData) -> StyleValue,
    D: FnOnce() -> StyleValue,
{
    let layers = layout_node.background_layers();
    if layers.is_empty() {
        return default_value();
    }
    if layers.len() == 1 {
        return layer_value(&layers[0]);
    }
    let values: Vec<StyleValue> = layers.iter().map(layer_value).collect();
    StyleValue::list(values, Separator::Comma)
}

// ─────────────────────────────────────────────────────────────────────────────
// The dispatcher
// ─────────────────────────────────────────────────────────────────────────────

/// Produce the resolved value of `property_id` for a laid-out element.
///
/// [CSSOM § Resolved Values](https://www.w3.org/TR/cssom-1/#resolved-values)
///
/// Returns `None` when no resolved value exists: custom properties, and
/// shorthands with no faithful single serialization (a `border` whose
/// sides differ).
///
/// Pure given a fully built layout tree, with one declared exception: the
/// `transform` case builds the document's stacking contexts on demand
/// (idempotent per paint generation).
///
/// # Panics
///
/// Panics if a transformed element's paint node or stacking context is
/// missing; this path is only reachable once layout and paint exist, so
/// their absence is an engine invariant violation, not a user error.
#[must_use]
pub fn style_value_for_property(
    document: &mut Document,
    layout_node: LayoutNodeId,
    property_id: PropertyID,
) -> Option<StyleValue> {
    let node = document.layout_node(layout_node)?;

    match property_id {
        // -> background-color
        // -> border-bottom-color
        // -> border-left-color
        // -> border-right-color
        // -> border-top-color
        // -> color
        // -> outline-color
        // -> text-decoration-color
        //    The resolved value is the used value.
        PropertyID::BackgroundColor => Some(style_value_for_color(
            node.computed_values().background_color(),
        )),
        PropertyID::BorderBottomColor => {
            Some(style_value_for_color(node.computed_values().border().bottom.color))
        }
        PropertyID::BorderLeftColor => {
            Some(style_value_for_color(node.computed_values().border().left.color))
        }
        PropertyID::BorderRightColor => {
            Some(style_value_for_color(node.computed_values().border().right.color))
        }
        PropertyID::BorderTopColor => {
            Some(style_value_for_color(node.computed_values().border().top.color))
        }
        PropertyID::Color => Some(style_value_for_color(node.computed_values().color())),
        PropertyID::OutlineColor => {
            Some(style_value_for_color(node.computed_values().outline_color()))
        }
        PropertyID::TextDecorationColor => Some(style_value_for_color(
            node.computed_values().text_decoration_color(),
        )),

        // -> line-height
        //    The resolved value is normal if the computed value is normal,
        //    or the used value otherwise.
        PropertyID::LineHeight => {
            let raw = node.computed_values().property(PropertyID::LineHeight)?;
            if raw.is_identifier(ValueID::Normal) {
                return Some(raw.clone());
            }
            Some(StyleValue::Length(LengthValue::Px(node.line_height())))
        }

        // -> height
        // -> width
        //    The spec wants the used value when the element participates in
        //    layout and display is not none/contents; this engine returns
        //    the computed value in all cases (known conformance gap).
        PropertyID::Height => Some(style_value_for_size(node.computed_values().height())),
        PropertyID::Width => Some(style_value_for_size(node.computed_values().width())),

        // -> margin-* / padding-*
        //    Same simplification as width/height: computed value always.
        PropertyID::MarginBottom => Some(style_value_for_length_percentage(
            &node.computed_values().margin().bottom,
        )),
        PropertyID::MarginLeft => Some(style_value_for_length_percentage(
            &node.computed_values().margin().left,
        )),
        PropertyID::MarginRight => Some(style_value_for_length_percentage(
            &node.computed_values().margin().right,
        )),
        PropertyID::MarginTop => Some(style_value_for_length_percentage(
            &node.computed_values().margin().top,
        )),
        PropertyID::PaddingBottom => Some(style_value_for_length_percentage(
            &node.computed_values().padding().bottom,
        )),
        PropertyID::PaddingLeft => Some(style_value_for_length_percentage(
            &node.computed_values().padding().left,
        )),
        PropertyID::PaddingRight => Some(style_value_for_length_percentage(
            &node.computed_values().padding().right,
        )),
        PropertyID::PaddingTop => Some(style_value_for_length_percentage(
            &node.computed_values().padding().top,
        )),

        // -> bottom / left / right / top
        //    Used-value promotion for positioned boxes is not implemented;
        //    the computed inset is returned as-is.
        PropertyID::Bottom => Some(style_value_for_length_percentage(
            &node.computed_values().inset().bottom,
        )),
        PropertyID::Left => Some(style_value_for_length_percentage(
            &node.computed_values().inset().left,
        )),
        PropertyID::Right => Some(style_value_for_length_percentage(
            &node.computed_values().inset().right,
        )),
        PropertyID::Top => Some(style_value_for_length_percentage(
            &node.computed_values().inset().top,
        )),

        // -> transform
        //    The computed value serializes as a single `matrix(...)` value
        //    instead of the original list of transform functions.
        //    https://www.w3.org/TR/css-transforms-1/#serialization-of-the-computed-value
        PropertyID::Transform => {
            if node.computed_values().transformations().is_empty() {
                return Some(StyleValue::Identifier(ValueID::None));
            }

            // The transform matrix is held by the stacking context, so make
            // sure those exist for this paint generation first.
            document.build_stacking_context_tree_if_needed();

            let node = document.layout_node(layout_node)?;
            let paintable = node
                .paintable()
                .expect("transformed layout node has no paint node");
            let paint_node = document
                .paint_node(paintable)
                .expect("layout node's paintable id is stale");
            let stacking_context = paint_node
                .stacking_context()
                .expect("transformed paint node has no stacking context");

            // NOTE: a 3-D transformation should serialize as matrix3d();
            // this engine does not distinguish 3-D matrices yet.
            let matrix = stacking_context.affine_transform_matrix();

            let parameters = vec![
                StyleValue::Number(matrix.a),
                StyleValue::Number(matrix.b),
                StyleValue::Number(matrix.c),
                StyleValue::Number(matrix.d),
                StyleValue::Number(matrix.e),
                StyleValue::Number(matrix.f),
            ];
            let matrix_function = StyleValue::Transformation {
                function: TransformFunction::Matrix,
                parameters,
            };
            // The transform property's value is stored as a list of
            // transformation values everywhere else, so keep that shape
            // here for consistency even though only one function remains.
            Some(StyleValue::list(vec![matrix_function], Separator::Space))
        }

        // Everything below is a shorthand that requires manual
        // construction from longhands (or, for background-position, from
        // per-layer data).
        PropertyID::BackgroundPosition => Some(style_value_for_background_property(
            node,
            |layer| StyleValue::Position {
                horizontal: EdgeValue::new(layer.position_edge_x, layer.position_offset_x.clone()),
                vertical: EdgeValue::new(layer.position_edge_y, layer.position_offset_y.clone()),
            },
            || StyleValue::Position {
                horizontal: EdgeValue::new(PositionEdge::Left, LengthPercentage::Percentage(0.0)),
                vertical: EdgeValue::new(PositionEdge::Top, LengthPercentage::Percentage(0.0)),
            },
        )),
        PropertyID::Border => {
            let width = style_value_for_property(document, layout_node, PropertyID::BorderWidth)?;
            let style = style_value_for_property(document, layout_node, PropertyID::BorderStyle)?;
            let color = style_value_for_property(document, layout_node, PropertyID::BorderColor)?;
            // `border` only has a reasonable value if all four sides are
            // the same.
            if width.is_list() || style.is_list() || color.is_list() {
                return None;
            }
            Some(StyleValue::shorthand(
                PropertyID::Border,
                vec![
                    PropertyID::BorderWidth,
                    PropertyID::BorderStyle,
                    PropertyID::BorderColor,
                ],
                vec![width, style, color],
            ))
        }
        PropertyID::BorderColor => {
            let top = style_value_for_property(document, layout_node, PropertyID::BorderTopColor)?;
            let right =
                style_value_for_property(document, layout_node, PropertyID::BorderRightColor)?;
            let bottom =
                style_value_for_property(document, layout_node, PropertyID::BorderBottomColor)?;
            let left =
                style_value_for_property(document, layout_node, PropertyID::BorderLeftColor)?;
            Some(style_value_for_sided_shorthand(top, right, bottom, left))
        }
        PropertyID::BorderStyle => {
            let top = style_value_for_property(document, layout_node, PropertyID::BorderTopStyle)?;
            let right =
                style_value_for_property(document, layout_node, PropertyID::BorderRightStyle)?;
            let bottom =
                style_value_for_property(document, layout_node, PropertyID::BorderBottomStyle)?;
            let left =
                style_value_for_property(document, layout_node, PropertyID::BorderLeftStyle)?;
            Some(style_value_for_sided_shorthand(top, right, bottom, left))
        }
        PropertyID::BorderWidth => {
            let top = style_value_for_property(document, layout_node, PropertyID::BorderTopWidth)?;
            let right =
                style_value_for_property(document, layout_node, PropertyID::BorderRightWidth)?;
            let bottom =
                style_value_for_property(document, layout_node, PropertyID::BorderBottomWidth)?;
            let left =
                style_value_for_property(document, layout_node, PropertyID::BorderLeftWidth)?;
            Some(style_value_for_sided_shorthand(top, right, bottom, left))
        }
        PropertyID::Margin => {
            let top = style_value_for_property(document, layout_node, PropertyID::MarginTop)?;
            let right = style_value_for_property(document, layout_node, PropertyID::MarginRight)?;
            let bottom =
                style_value_for_property(document, layout_node, PropertyID::MarginBottom)?;
            let left = style_value_for_property(document, layout_node, PropertyID::MarginLeft)?;
            Some(style_value_for_sided_shorthand(top, right, bottom, left))
        }
        PropertyID::Padding => {
            let top = style_value_for_property(document, layout_node, PropertyID::PaddingTop)?;
            let right = style_value_for_property(document, layout_node, PropertyID::PaddingRight)?;
            let bottom =
                style_value_for_property(document, layout_node, PropertyID::PaddingBottom)?;
            let left = style_value_for_property(document, layout_node, PropertyID::PaddingLeft)?;
            Some(style_value_for_sided_shorthand(top, right, bottom, left))
        }

        PropertyID::Invalid => Some(StyleValue::Identifier(ValueID::Invalid)),
        PropertyID::Custom => {
            warn_once("CSS", "resolved value requested for a custom property");
            None
        }

        // -> Any other property
        //    The resolved value is the computed value; remaining shorthands
        //    are wrapped generically from their longhands.
        //
        // The variants are spelled out so that adding a property without
        // deciding its resolution rule fails to build.
        PropertyID::BackgroundImage
        | PropertyID::BorderBottomStyle
        | PropertyID::BorderBottomWidth
        | PropertyID::BorderLeftStyle
        | PropertyID::BorderLeftWidth
        | PropertyID::BorderRightStyle
        | PropertyID::BorderRightWidth
        | PropertyID::BorderTopStyle
        | PropertyID::BorderTopWidth
        | PropertyID::ColumnGap
        | PropertyID::Display
        | PropertyID::FontSize
        | PropertyID::Opacity
        | PropertyID::OverflowX
        | PropertyID::OverflowY
        | PropertyID::RowGap
        | PropertyID::ZIndex
        | PropertyID::Background
        | PropertyID::BorderBottom
        | PropertyID::BorderLeft
        | PropertyID::BorderRight
        | PropertyID::BorderTop
        | PropertyID::Gap
        | PropertyID::Inset
        | PropertyID::Overflow => {
            if !property_id.is_shorthand() {
                return node.computed_values().property(property_id).cloned();
            }

            let longhands = property_id.longhands();
            let mut values = Vec::with_capacity(longhands.len());
            for &longhand in longhands {
                values.push(style_value_for_property(document, layout_node, longhand)?);
            }
            Some(StyleValue::shorthand(
                property_id,
                longhands.to_vec(),
                values,
            ))
        }
    }
}
