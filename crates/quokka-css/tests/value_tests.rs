//! Integration tests for CSS value types: structural equality, property
//! name lookup, and canonical serialization.

use quokka_css::{
    ColorValue, EdgeValue, LengthPercentage, LengthValue, PositionEdge, PropertyID, Separator,
    StyleValue, TransformFunction, ValueID,
};

// ========== colors ==========

#[test]
fn test_color_from_hex_6() {
    let color = ColorValue::from_hex("#ff0000").unwrap();
    assert_eq!(
        color,
        ColorValue {
            r: 255,
            g: 0,
            b: 0,
            a: 255
        }
    );
}

#[test]
fn test_color_from_hex_3() {
    let color = ColorValue::from_hex("#f0a").unwrap();
    assert_eq!(
        color,
        ColorValue {
            r: 255,
            g: 0,
            b: 170,
            a: 255
        }
    );
}

#[test]
fn test_color_from_hex_8_with_alpha() {
    let color = ColorValue::from_hex("#11223344").unwrap();
    assert_eq!(
        color,
        ColorValue {
            r: 0x11,
            g: 0x22,
            b: 0x33,
            a: 0x44
        }
    );
}

#[test]
fn test_color_from_hex_invalid_length() {
    assert_eq!(ColorValue::from_hex("#12345"), None);
}

#[test]
fn test_color_to_hex_string() {
    assert_eq!(ColorValue::BLACK.to_hex_string(), "#000000");
    assert_eq!(
        ColorValue {
            r: 255,
            g: 165,
            b: 0,
            a: 255
        }
        .to_hex_string(),
        "#ffa500"
    );
    // alpha only serializes when not fully opaque
    assert_eq!(ColorValue::TRANSPARENT.to_hex_string(), "#00000000");
}

// ========== property name lookup ==========

#[test]
fn test_property_from_name_round_trips_all_longhands() {
    for &property_id in PropertyID::ALL_LONGHANDS {
        let name = property_id.to_string();
        assert_eq!(
            PropertyID::from_name(&name),
            property_id,
            "failed to round-trip '{name}'"
        );
    }
}

#[test]
fn test_property_from_name_is_case_insensitive() {
    assert_eq!(PropertyID::from_name("COLOR"), PropertyID::Color);
    assert_eq!(PropertyID::from_name("Margin-Top"), PropertyID::MarginTop);
}

#[test]
fn test_property_from_name_custom() {
    assert_eq!(PropertyID::from_name("--accent"), PropertyID::Custom);
    assert_eq!(PropertyID::from_name("--x"), PropertyID::Custom);
}

#[test]
fn test_property_from_name_unknown_is_invalid() {
    assert_eq!(PropertyID::from_name("marign"), PropertyID::Invalid);
    assert_eq!(PropertyID::from_name(""), PropertyID::Invalid);
}

#[test]
fn test_property_display_is_kebab_case() {
    assert_eq!(PropertyID::BackgroundColor.to_string(), "background-color");
    assert_eq!(PropertyID::OverflowX.to_string(), "overflow-x");
    assert_eq!(PropertyID::ZIndex.to_string(), "z-index");
}

#[test]
fn test_shorthand_metadata() {
    assert!(PropertyID::Margin.is_shorthand());
    assert!(!PropertyID::MarginTop.is_shorthand());
    assert_eq!(
        PropertyID::Margin.longhands(),
        &[
            PropertyID::MarginTop,
            PropertyID::MarginRight,
            PropertyID::MarginBottom,
            PropertyID::MarginLeft,
        ]
    );
    // longhands of a shorthand are never themselves shorthands (except the
    // border triple, which expands to sided groups)
    for &longhand in PropertyID::Inset.longhands() {
        assert!(!longhand.is_shorthand());
    }
    assert_eq!(PropertyID::MarginTop.longhands(), &[] as &[PropertyID]);
}

#[test]
fn test_affects_layout_classification() {
    assert!(PropertyID::Width.affects_layout());
    assert!(PropertyID::MarginLeft.affects_layout());
    assert!(PropertyID::Transform.affects_layout());
    assert!(!PropertyID::Color.affects_layout());
    assert!(!PropertyID::BackgroundColor.affects_layout());
    assert!(!PropertyID::Opacity.affects_layout());
    assert!(!PropertyID::ZIndex.affects_layout());
}

// ========== structural equality ==========

#[test]
fn test_style_value_equality_is_structural() {
    let a = StyleValue::Length(LengthValue::Px(10.0));
    let b = StyleValue::Length(LengthValue::Px(10.0));
    let c = StyleValue::Length(LengthValue::Px(11.0));
    assert_eq!(a, b);
    assert_ne!(a, c);
    // same number, different variant
    assert_ne!(
        StyleValue::Percentage(10.0),
        StyleValue::Length(LengthValue::Px(10.0))
    );
    // same number, different unit
    assert_ne!(
        StyleValue::Length(LengthValue::Px(10.0)),
        StyleValue::Length(LengthValue::Em(10.0))
    );
}

#[test]
fn test_list_equality_includes_separator() {
    let values = vec![
        StyleValue::Identifier(ValueID::Auto),
        StyleValue::Percentage(50.0),
    ];
    let spaces = StyleValue::list(values.clone(), Separator::Space);
    let commas = StyleValue::list(values, Separator::Comma);
    assert_ne!(spaces, commas);
}

// ========== serialization ==========

#[test]
fn test_length_to_css_string() {
    assert_eq!(StyleValue::Length(LengthValue::Px(10.0)).to_css_string(), "10px");
    assert_eq!(
        StyleValue::Length(LengthValue::Em(1.5)).to_css_string(),
        "1.5em"
    );
}

#[test]
fn test_percentage_and_number_to_css_string() {
    assert_eq!(StyleValue::Percentage(50.0).to_css_string(), "50%");
    assert_eq!(StyleValue::Number(1.0).to_css_string(), "1");
    assert_eq!(StyleValue::Number(0.5).to_css_string(), "0.5");
}

#[test]
fn test_identifier_to_css_string() {
    assert_eq!(
        StyleValue::Identifier(ValueID::MinContent).to_css_string(),
        "min-content"
    );
    assert_eq!(StyleValue::Identifier(ValueID::Auto).to_css_string(), "auto");
}

#[test]
fn test_edge_to_css_string() {
    let edge = StyleValue::Edge(EdgeValue::new(
        PositionEdge::Bottom,
        LengthPercentage::Length(LengthValue::Px(8.0)),
    ));
    assert_eq!(edge.to_css_string(), "bottom 8px");
}

#[test]
fn test_position_to_css_string() {
    let position = StyleValue::Position {
        horizontal: EdgeValue::new(PositionEdge::Left, LengthPercentage::Percentage(25.0)),
        vertical: EdgeValue::new(PositionEdge::Top, LengthPercentage::Percentage(75.0)),
    };
    assert_eq!(position.to_css_string(), "left 25% top 75%");
}

#[test]
fn test_list_to_css_string() {
    let list = StyleValue::list(
        vec![
            StyleValue::Length(LengthValue::Px(1.0)),
            StyleValue::Length(LengthValue::Px(2.0)),
        ],
        Separator::Space,
    );
    assert_eq!(list.to_css_string(), "1px 2px");

    let layers = StyleValue::list(
        vec![
            StyleValue::Percentage(0.0),
            StyleValue::Percentage(100.0),
        ],
        Separator::Comma,
    );
    assert_eq!(layers.to_css_string(), "0%, 100%");
}

#[test]
fn test_matrix_transformation_to_css_string() {
    let matrix = StyleValue::Transformation {
        function: TransformFunction::Matrix,
        parameters: vec![
            StyleValue::Number(1.0),
            StyleValue::Number(0.0),
            StyleValue::Number(0.0),
            StyleValue::Number(1.0),
            StyleValue::Number(10.0),
            StyleValue::Number(20.0),
        ],
    };
    assert_eq!(matrix.to_css_string(), "matrix(1, 0, 0, 1, 10, 20)");
}

#[test]
fn test_transform_function_names() {
    assert_eq!(TransformFunction::Matrix.to_string(), "matrix");
    assert_eq!(TransformFunction::TranslateX.to_string(), "translateX");
    assert_eq!(TransformFunction::SkewY.to_string(), "skewY");
}

#[test]
fn test_shorthand_to_css_string() {
    let shorthand = StyleValue::shorthand(
        PropertyID::Gap,
        vec![PropertyID::RowGap, PropertyID::ColumnGap],
        vec![
            StyleValue::Length(LengthValue::Px(4.0)),
            StyleValue::Length(LengthValue::Px(8.0)),
        ],
    );
    assert_eq!(shorthand.to_css_string(), "4px 8px");
}

#[test]
fn test_calculated_passes_through() {
    let calc = StyleValue::Calculated("calc(100% - 20px)".to_string());
    assert_eq!(calc.to_css_string(), "calc(100% - 20px)");
}

#[test]
#[should_panic(expected = "shorthand longhand ids and values must match")]
fn test_shorthand_with_mismatched_vectors_panics() {
    let _ = StyleValue::shorthand(
        PropertyID::Gap,
        vec![PropertyID::RowGap, PropertyID::ColumnGap],
        vec![StyleValue::Length(LengthValue::Px(4.0))],
    );
}
