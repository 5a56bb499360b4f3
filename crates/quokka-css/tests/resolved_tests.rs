//! Integration tests for the resolved-value engine: per-property special
//! cases, shorthand reconstruction, the query driver's state machine, and
//! the read-only declaration surface.

use quokka_css::cssom::style_value_for_sided_shorthand;
use quokka_css::{
    ColorValue, Document, EdgeValue, LengthPercentage, LengthValue, ModificationError,
    PositionEdge, PropertyID, ResolvedStyleDeclaration, Separator, StyleValue, TransformFunction,
    ValueID,
};
use quokka_dom::NodeId;

// ========== helpers ==========

fn px(value: f64) -> StyleValue {
    StyleValue::Length(LengthValue::Px(value))
}

fn red() -> ColorValue {
    ColorValue {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    }
}

fn blue() -> ColorValue {
    ColorValue {
        r: 0,
        g: 0,
        b: 255,
        a: 255,
    }
}

fn position(horizontal_pct: f64, vertical_pct: f64) -> StyleValue {
    StyleValue::Position {
        horizontal: EdgeValue::new(
            PositionEdge::Left,
            LengthPercentage::Percentage(horizontal_pct),
        ),
        vertical: EdgeValue::new(
            PositionEdge::Top,
            LengthPercentage::Percentage(vertical_pct),
        ),
    }
}

/// A document with a connected `<html><body>` skeleton; returns the body.
fn document_with_body() -> (Document, NodeId) {
    let mut document = Document::new();
    let html = document.create_element("html");
    document.append_child(NodeId::ROOT, html);
    let body = document.create_element("body");
    document.append_child(html, body);
    (document, body)
}

/// A connected `<div>` under `parent` with the given declarations.
fn styled_div(
    document: &mut Document,
    parent: NodeId,
    declarations: Vec<(PropertyID, StyleValue)>,
) -> NodeId {
    let element = document.create_element("div");
    document.append_child(parent, element);
    document.set_declared_styles(element, declarations);
    element
}

fn resolve(
    document: &mut Document,
    element: NodeId,
    property_id: PropertyID,
) -> Option<StyleValue> {
    ResolvedStyleDeclaration::for_element(element)
        .property(document, property_id)
        .map(|property| property.value)
}

// ========== sided-shorthand collapse ==========

#[test]
fn test_sided_collapse_all_equal_returns_single_value() {
    let value = style_value_for_sided_shorthand(px(5.0), px(5.0), px(5.0), px(5.0));
    assert_eq!(value, px(5.0));
    assert!(!value.is_list());
}

#[test]
fn test_sided_collapse_two_value_form() {
    let value = style_value_for_sided_shorthand(px(1.0), px(2.0), px(1.0), px(2.0));
    assert_eq!(
        value,
        StyleValue::list(vec![px(1.0), px(2.0)], Separator::Space)
    );
}

#[test]
fn test_sided_collapse_three_value_form() {
    let value = style_value_for_sided_shorthand(px(1.0), px(2.0), px(3.0), px(2.0));
    assert_eq!(
        value,
        StyleValue::list(vec![px(1.0), px(2.0), px(3.0)], Separator::Space)
    );
}

#[test]
fn test_sided_collapse_four_value_form() {
    let value = style_value_for_sided_shorthand(px(1.0), px(2.0), px(3.0), px(4.0));
    assert_eq!(
        value,
        StyleValue::list(vec![px(1.0), px(2.0), px(3.0), px(4.0)], Separator::Space)
    );
}

#[test]
fn test_margin_shorthand_collapses_uniform_sides() {
    let (mut document, body) = document_with_body();
    let element = styled_div(
        &mut document,
        body,
        vec![
            (PropertyID::MarginTop, px(10.0)),
            (PropertyID::MarginRight, px(10.0)),
            (PropertyID::MarginBottom, px(10.0)),
            (PropertyID::MarginLeft, px(10.0)),
        ],
    );
    assert_eq!(resolve(&mut document, element, PropertyID::Margin), Some(px(10.0)));
}

#[test]
fn test_margin_shorthand_two_value_form() {
    let (mut document, body) = document_with_body();
    let element = styled_div(
        &mut document,
        body,
        vec![
            (PropertyID::MarginTop, px(1.0)),
            (PropertyID::MarginRight, px(2.0)),
            (PropertyID::MarginBottom, px(1.0)),
            (PropertyID::MarginLeft, px(2.0)),
        ],
    );
    assert_eq!(
        resolve(&mut document, element, PropertyID::Margin),
        Some(StyleValue::list(vec![px(1.0), px(2.0)], Separator::Space))
    );
}

#[test]
fn test_margin_auto_collapses_to_keyword() {
    let (mut document, body) = document_with_body();
    let auto = StyleValue::Identifier(ValueID::Auto);
    let element = styled_div(
        &mut document,
        body,
        vec![
            (PropertyID::MarginTop, auto.clone()),
            (PropertyID::MarginRight, auto.clone()),
            (PropertyID::MarginBottom, auto.clone()),
            (PropertyID::MarginLeft, auto.clone()),
        ],
    );
    assert_eq!(resolve(&mut document, element, PropertyID::Margin), Some(auto));
}

#[test]
fn test_padding_shorthand_four_value_form() {
    let (mut document, body) = document_with_body();
    let element = styled_div(
        &mut document,
        body,
        vec![
            (PropertyID::PaddingTop, px(1.0)),
            (PropertyID::PaddingRight, px(2.0)),
            (PropertyID::PaddingBottom, px(3.0)),
            (PropertyID::PaddingLeft, px(4.0)),
        ],
    );
    assert_eq!(
        resolve(&mut document, element, PropertyID::Padding),
        Some(StyleValue::list(
            vec![px(1.0), px(2.0), px(3.0), px(4.0)],
            Separator::Space
        ))
    );
}

// ========== border ==========

fn uniform_border_declarations() -> Vec<(PropertyID, StyleValue)> {
    let solid = StyleValue::Identifier(ValueID::Solid);
    vec![
        (PropertyID::BorderTopWidth, px(2.0)),
        (PropertyID::BorderRightWidth, px(2.0)),
        (PropertyID::BorderBottomWidth, px(2.0)),
        (PropertyID::BorderLeftWidth, px(2.0)),
        (PropertyID::BorderTopStyle, solid.clone()),
        (PropertyID::BorderRightStyle, solid.clone()),
        (PropertyID::BorderBottomStyle, solid.clone()),
        (PropertyID::BorderLeftStyle, solid),
        (PropertyID::BorderTopColor, StyleValue::Color(red())),
        (PropertyID::BorderRightColor, StyleValue::Color(red())),
        (PropertyID::BorderBottomColor, StyleValue::Color(red())),
        (PropertyID::BorderLeftColor, StyleValue::Color(red())),
    ]
}

#[test]
fn test_border_shorthand_with_uniform_sides() {
    let (mut document, body) = document_with_body();
    let element = styled_div(&mut document, body, uniform_border_declarations());
    assert_eq!(
        resolve(&mut document, element, PropertyID::Border),
        Some(StyleValue::shorthand(
            PropertyID::Border,
            vec![
                PropertyID::BorderWidth,
                PropertyID::BorderStyle,
                PropertyID::BorderColor,
            ],
            vec![
                px(2.0),
                StyleValue::Identifier(ValueID::Solid),
                StyleValue::Color(red()),
            ],
        ))
    );
}

#[test]
fn test_border_shorthand_with_non_uniform_color_has_no_value() {
    let (mut document, body) = document_with_body();
    let mut declarations = uniform_border_declarations();
    declarations.push((PropertyID::BorderLeftColor, StyleValue::Color(blue())));
    let element = styled_div(&mut document, body, declarations);

    // border-color itself resolves to a list...
    assert_eq!(
        resolve(&mut document, element, PropertyID::BorderColor),
        Some(StyleValue::list(
            vec![
                StyleValue::Color(red()),
                StyleValue::Color(red()),
                StyleValue::Color(red()),
                StyleValue::Color(blue()),
            ],
            Separator::Space
        ))
    );
    // ...so the border triple has no faithful single value.
    assert_eq!(resolve(&mut document, element, PropertyID::Border), None);
}

#[test]
fn test_border_shorthand_with_non_uniform_style_has_no_value() {
    let (mut document, body) = document_with_body();
    let mut declarations = uniform_border_declarations();
    declarations.push((
        PropertyID::BorderBottomStyle,
        StyleValue::Identifier(ValueID::Dashed),
    ));
    let element = styled_div(&mut document, body, declarations);

    // top == bottom fails, left == right holds: the three-value form
    assert_eq!(
        resolve(&mut document, element, PropertyID::BorderStyle),
        Some(StyleValue::list(
            vec![
                StyleValue::Identifier(ValueID::Solid),
                StyleValue::Identifier(ValueID::Solid),
                StyleValue::Identifier(ValueID::Dashed),
            ],
            Separator::Space
        ))
    );
    assert_eq!(resolve(&mut document, element, PropertyID::Border), None);
}

#[test]
fn test_border_shorthand_with_non_uniform_width_has_no_value() {
    let (mut document, body) = document_with_body();
    let mut declarations = uniform_border_declarations();
    declarations.push((PropertyID::BorderTopWidth, px(9.0)));
    let element = styled_div(&mut document, body, declarations);
    assert_eq!(resolve(&mut document, element, PropertyID::Border), None);
}

// ========== background-position ==========

#[test]
fn test_background_position_with_no_layers_is_default_position() {
    let (mut document, body) = document_with_body();
    let element = styled_div(&mut document, body, vec![]);
    document.update_layout();
    assert_eq!(
        resolve(&mut document, element, PropertyID::BackgroundPosition),
        Some(position(0.0, 0.0))
    );
}

#[test]
fn test_background_position_with_single_layer_is_unwrapped() {
    let (mut document, body) = document_with_body();
    let element = styled_div(
        &mut document,
        body,
        vec![(PropertyID::BackgroundPosition, position(25.0, 75.0))],
    );
    document.update_layout();
    assert_eq!(
        resolve(&mut document, element, PropertyID::BackgroundPosition),
        Some(position(25.0, 75.0))
    );
}

#[test]
fn test_background_position_with_multiple_layers_is_comma_list() {
    let (mut document, body) = document_with_body();
    let declared = StyleValue::list(
        vec![position(0.0, 0.0), position(100.0, 50.0)],
        Separator::Comma,
    );
    let element = styled_div(
        &mut document,
        body,
        vec![(PropertyID::BackgroundPosition, declared.clone())],
    );
    document.update_layout();
    // per-layer positions come back in layer order
    assert_eq!(
        resolve(&mut document, element, PropertyID::BackgroundPosition),
        Some(declared)
    );
}

// ========== transform ==========

#[test]
fn test_transform_none_resolves_to_keyword() {
    let (mut document, body) = document_with_body();
    let element = styled_div(&mut document, body, vec![]);
    assert_eq!(
        resolve(&mut document, element, PropertyID::Transform),
        Some(StyleValue::Identifier(ValueID::None))
    );
}

#[test]
fn test_transform_resolves_to_single_matrix_function() {
    let (mut document, body) = document_with_body();
    let declared = StyleValue::list(
        vec![
            StyleValue::Transformation {
                function: TransformFunction::Translate,
                parameters: vec![px(10.0), px(20.0)],
            },
            StyleValue::Transformation {
                function: TransformFunction::Scale,
                parameters: vec![StyleValue::Number(2.0), StyleValue::Number(3.0)],
            },
        ],
        Separator::Space,
    );
    let element = styled_div(&mut document, body, vec![(PropertyID::Transform, declared)]);

    let expected_matrix = StyleValue::Transformation {
        function: TransformFunction::Matrix,
        parameters: vec![
            StyleValue::Number(2.0),
            StyleValue::Number(0.0),
            StyleValue::Number(0.0),
            StyleValue::Number(3.0),
            StyleValue::Number(10.0),
            StyleValue::Number(20.0),
        ],
    };
    assert_eq!(
        resolve(&mut document, element, PropertyID::Transform),
        Some(StyleValue::list(vec![expected_matrix], Separator::Space))
    );
}

#[test]
fn test_transform_stacking_contexts_are_memoized_per_layout() {
    let (mut document, body) = document_with_body();
    let declared = StyleValue::list(
        vec![StyleValue::Transformation {
            function: TransformFunction::TranslateX,
            parameters: vec![px(5.0)],
        }],
        Separator::Space,
    );
    let element = styled_div(&mut document, body, vec![(PropertyID::Transform, declared)]);

    let first = resolve(&mut document, element, PropertyID::Transform);
    assert!(document.paint_tree().unwrap().stacking_context_tree_built());

    // A repeated query after the same layout reuses the built contexts.
    let second = resolve(&mut document, element, PropertyID::Transform);
    assert_eq!(first, second);
    assert!(document.paint_tree().unwrap().stacking_context_tree_built());
}

// ========== colors, line-height, sizing ==========

#[test]
fn test_color_properties_resolve_to_used_color() {
    let (mut document, body) = document_with_body();
    let element = styled_div(
        &mut document,
        body,
        vec![
            (PropertyID::Color, StyleValue::Color(red())),
            (PropertyID::BackgroundColor, StyleValue::Color(blue())),
        ],
    );
    document.update_layout();
    assert_eq!(
        resolve(&mut document, element, PropertyID::Color),
        Some(StyleValue::Color(red()))
    );
    assert_eq!(
        resolve(&mut document, element, PropertyID::BackgroundColor),
        Some(StyleValue::Color(blue()))
    );
    // initial text-decoration-color is the (resolved) black
    assert_eq!(
        resolve(&mut document, element, PropertyID::TextDecorationColor),
        Some(StyleValue::Color(ColorValue::BLACK))
    );
}

#[test]
fn test_line_height_normal_passes_through() {
    let (mut document, body) = document_with_body();
    let element = styled_div(&mut document, body, vec![]);
    assert_eq!(
        resolve(&mut document, element, PropertyID::LineHeight),
        Some(StyleValue::Identifier(ValueID::Normal))
    );
}

#[test]
fn test_line_height_multiplier_resolves_to_used_pixels() {
    let (mut document, body) = document_with_body();
    let element = styled_div(
        &mut document,
        body,
        vec![
            (PropertyID::FontSize, px(20.0)),
            (PropertyID::LineHeight, StyleValue::Number(1.5)),
        ],
    );
    assert_eq!(
        resolve(&mut document, element, PropertyID::LineHeight),
        Some(px(30.0))
    );
}

#[test]
fn test_width_resolves_computed_value() {
    let (mut document, body) = document_with_body();
    let element = styled_div(
        &mut document,
        body,
        vec![(PropertyID::Width, StyleValue::Percentage(50.0))],
    );
    assert_eq!(
        resolve(&mut document, element, PropertyID::Width),
        Some(StyleValue::Percentage(50.0))
    );
    // height was not declared: initial `auto`
    assert_eq!(
        resolve(&mut document, element, PropertyID::Height),
        Some(StyleValue::Identifier(ValueID::Auto))
    );
}

#[test]
fn test_width_keyword_sizes_resolve_to_identifiers() {
    let (mut document, body) = document_with_body();
    let element = styled_div(
        &mut document,
        body,
        vec![(PropertyID::Width, StyleValue::Identifier(ValueID::MinContent))],
    );
    assert_eq!(
        resolve(&mut document, element, PropertyID::Width),
        Some(StyleValue::Identifier(ValueID::MinContent))
    );
}

#[test]
fn test_inset_longhands_default_to_auto() {
    let (mut document, body) = document_with_body();
    let element = styled_div(&mut document, body, vec![]);
    assert_eq!(
        resolve(&mut document, element, PropertyID::Top),
        Some(StyleValue::Identifier(ValueID::Auto))
    );
}

// ========== generic shorthand wrapping ==========

#[test]
fn test_generic_shorthand_round_trip() {
    let (mut document, body) = document_with_body();
    let element = styled_div(
        &mut document,
        body,
        vec![
            (PropertyID::Top, px(1.0)),
            (PropertyID::Right, px(2.0)),
            (PropertyID::Bottom, px(3.0)),
            (PropertyID::Left, px(4.0)),
        ],
    );

    let shorthand = resolve(&mut document, element, PropertyID::Inset).unwrap();

    // Resolving each longhand independently and wrapping by hand must
    // produce a structurally equal value.
    let longhands = PropertyID::Inset.longhands().to_vec();
    let values: Vec<StyleValue> = longhands
        .iter()
        .map(|&longhand| resolve(&mut document, element, longhand).unwrap())
        .collect();
    let manual = StyleValue::shorthand(PropertyID::Inset, longhands, values);

    assert_eq!(shorthand, manual);
}

#[test]
fn test_overflow_shorthand_wraps_longhands() {
    let (mut document, body) = document_with_body();
    let element = styled_div(&mut document, body, vec![]);
    assert_eq!(
        resolve(&mut document, element, PropertyID::Overflow),
        Some(StyleValue::shorthand(
            PropertyID::Overflow,
            vec![PropertyID::OverflowX, PropertyID::OverflowY],
            vec![
                StyleValue::Identifier(ValueID::Visible),
                StyleValue::Identifier(ValueID::Visible),
            ],
        ))
    );
}

// ========== query driver states ==========

#[test]
fn test_disconnected_element_has_no_resolved_values() {
    let mut document = Document::new();
    let element = document.create_element("div");
    document.set_declared_styles(element, vec![(PropertyID::Color, StyleValue::Color(red()))]);

    for property_id in [
        PropertyID::Color,
        PropertyID::Width,
        PropertyID::Margin,
        PropertyID::Transform,
        PropertyID::Custom,
        PropertyID::Invalid,
    ] {
        assert_eq!(resolve(&mut document, element, property_id), None);
        // and again: the answer is idempotent
        assert_eq!(resolve(&mut document, element, property_id), None);
    }
}

#[test]
fn test_display_none_element_falls_back_to_computed_values() {
    let (mut document, body) = document_with_body();
    let element = styled_div(
        &mut document,
        body,
        vec![
            (PropertyID::Display, StyleValue::Identifier(ValueID::None)),
            (PropertyID::Color, StyleValue::Color(red())),
            (PropertyID::Width, StyleValue::Percentage(50.0)),
        ],
    );
    document.update_layout();
    assert!(document.layout_node_id(element).is_none());

    // the fallback reads the plain computed value
    assert_eq!(
        resolve(&mut document, element, PropertyID::Color),
        Some(StyleValue::Color(red()))
    );
    assert_eq!(
        resolve(&mut document, element, PropertyID::Width),
        Some(StyleValue::Percentage(50.0))
    );
    // no shorthand reconstruction happens on this path
    assert_eq!(resolve(&mut document, element, PropertyID::Margin), None);
}

#[test]
fn test_custom_property_yields_no_value() {
    let (mut document, body) = document_with_body();
    let element = styled_div(&mut document, body, vec![]);
    document.update_layout();
    assert_eq!(resolve(&mut document, element, PropertyID::Custom), None);
}

#[test]
fn test_invalid_property_resolves_to_invalid_keyword() {
    let (mut document, body) = document_with_body();
    let element = styled_div(&mut document, body, vec![]);
    document.update_layout();
    assert_eq!(
        resolve(&mut document, element, PropertyID::Invalid),
        Some(StyleValue::Identifier(ValueID::Invalid))
    );
}

#[test]
fn test_style_change_is_visible_without_layout_rebuild() {
    let (mut document, body) = document_with_body();
    let element = styled_div(
        &mut document,
        body,
        vec![(PropertyID::Color, StyleValue::Color(red()))],
    );
    document.update_layout();
    assert_eq!(
        resolve(&mut document, element, PropertyID::Color),
        Some(StyleValue::Color(red()))
    );

    document.set_declared_styles(element, vec![(PropertyID::Color, StyleValue::Color(blue()))]);

    // color does not force layout, but the fresh cascade must be visible
    // through the existing boxes
    assert_eq!(
        resolve(&mut document, element, PropertyID::Color),
        Some(StyleValue::Color(blue()))
    );
    assert!(document.layout_node_id(element).is_some());
}

// ========== the read-only declaration surface ==========

#[test]
fn test_mutation_entry_points_always_fail() {
    let (mut document, body) = document_with_body();
    let connected = styled_div(&mut document, body, vec![]);
    let disconnected = document.create_element("div");

    for element in [connected, disconnected] {
        let declaration = ResolvedStyleDeclaration::for_element(element);
        assert_eq!(
            declaration.set_property(PropertyID::Color, "red"),
            Err(ModificationError)
        );
        assert_eq!(
            declaration.remove_property(PropertyID::Margin),
            Err(ModificationError)
        );
        assert_eq!(
            declaration.set_css_text("color: red"),
            Err(ModificationError)
        );
    }
}

#[test]
fn test_enumeration_is_intentionally_empty() {
    let (mut document, body) = document_with_body();
    let element = styled_div(&mut document, body, vec![]);
    let declaration = ResolvedStyleDeclaration::for_element(element);

    assert_eq!(declaration.length(), 0);
    assert_eq!(declaration.item(0), "");
    assert_eq!(declaration.item(17), "");
    // resolved declarations never serialize a non-empty cssText
    assert_eq!(declaration.serialized(), "");

    // and none of that changed the document's ability to answer queries
    assert!(resolve(&mut document, element, PropertyID::Color).is_some());
}

#[test]
fn test_resolved_property_reports_its_property_id() {
    let (mut document, body) = document_with_body();
    let element = styled_div(&mut document, body, vec![]);
    let declaration = ResolvedStyleDeclaration::for_element(element);
    let property = declaration
        .property(&mut document, PropertyID::Height)
        .unwrap();
    assert_eq!(property.property_id, PropertyID::Height);
    assert_eq!(property.value, StyleValue::Identifier(ValueID::Auto));
}
