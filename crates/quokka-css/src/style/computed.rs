//! Per-element computed style records.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//! "The computed value is the result of resolving the specified value..."
//!
//! A [`ComputedStyle`] carries two views of the same cascade output:
//!
//! - a generic per-property [`StyleValue`] map, which is what the resolved
//!   value engine's default path and its no-layout-node fallback read, and
//! - typed fields (colors, box sides, sizing, transform operations, ...),
//!   which the per-property special cases read.
//!
//! [`ComputedStyle::apply`] keeps both views consistent: every declared
//! value lands in the map, and the recognized ones are mirrored into their
//! typed field.

use std::collections::HashMap;

use serde::Serialize;

use quokka_common::warning::warn_once;

use crate::property::PropertyID;
use crate::value::{
    ColorValue, DEFAULT_FONT_SIZE_PX, EdgeValue, LengthPercentage, LengthValue, PositionEdge,
    Separator, Size, StyleValue, TransformFunction, ValueID,
};

// ─────────────────────────────────────────────────────────────────────────────
// Supporting value groups
// ─────────────────────────────────────────────────────────────────────────────

/// A per-side group of values (top/right/bottom/left), the order CSS sided
/// shorthands serialize in.
///
/// [CSS Box § 6.1](https://www.w3.org/TR/css-box-4/#margin-shorthand)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideValues<T> {
    /// The top side.
    pub top: T,
    /// The right side.
    pub right: T,
    /// The bottom side.
    pub bottom: T,
    /// The left side.
    pub left: T,
}

impl<T: Clone> SideValues<T> {
    /// Build a group with the same value on all four sides.
    pub fn uniform(value: T) -> Self {
        SideValues {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }
}

/// Computed border data for one side.
///
/// [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderData {
    /// [§ 4.3 border-width](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    pub width: LengthValue,
    /// [§ 4.2 border-style](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    pub style: ValueID,
    /// [§ 4.1 border-color](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    pub color: ColorValue,
}

impl Default for BorderData {
    fn default() -> Self {
        BorderData {
            // "medium" border width, resolved to the conventional 3px
            width: LengthValue::Px(3.0),
            style: ValueID::None,
            color: ColorValue::BLACK,
        }
    }
}

/// The computed value of `line-height`.
///
/// [CSS Inline § 4.2](https://www.w3.org/TR/css-inline-3/#line-height-property)
/// "normal | `<number>` | `<length-percentage>`"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LineHeight {
    /// The `normal` keyword. Its used value is font-dependent.
    Normal,
    /// A unitless multiplier of the element's font size.
    Number(f64),
    /// An explicit length.
    Length(LengthValue),
}

impl LineHeight {
    /// The used line height in pixels.
    ///
    /// NOTE: `normal` resolves as 1.2 × font-size, the conventional
    /// user-agent factor; real font metrics are out of scope here.
    #[must_use]
    pub fn used_px(&self, font_size: f64) -> f64 {
        match self {
            LineHeight::Normal => font_size * 1.2,
            LineHeight::Number(multiplier) => font_size * multiplier,
            LineHeight::Length(length) => length.to_px(),
        }
    }

    /// The raw computed value as a [`StyleValue`].
    #[must_use]
    pub fn to_style_value(&self) -> StyleValue {
        match self {
            LineHeight::Normal => StyleValue::Identifier(ValueID::Normal),
            LineHeight::Number(multiplier) => StyleValue::Number(*multiplier),
            LineHeight::Length(length) => StyleValue::Length(*length),
        }
    }
}

/// One entry of a computed `transform` list.
///
/// [CSS Transforms § 6](https://www.w3.org/TR/css-transforms-1/#transform-functions)
///
/// Angles are stored in degrees. Converting an operation list into the
/// accumulated affine matrix is the paint tree's job (see
/// [`crate::paint::AffineTransform::from_operations`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TransformOperation {
    /// `matrix(a, b, c, d, e, f)`
    Matrix(f64, f64, f64, f64, f64, f64),
    /// `translate(x, y)`
    Translate(LengthValue, LengthValue),
    /// `translateX(x)`
    TranslateX(LengthValue),
    /// `translateY(y)`
    TranslateY(LengthValue),
    /// `scale(x, y)`
    Scale(f64, f64),
    /// `scaleX(x)`
    ScaleX(f64),
    /// `scaleY(y)`
    ScaleY(f64),
    /// `rotate(angle)`, degrees
    Rotate(f64),
    /// `skewX(angle)`, degrees
    SkewX(f64),
    /// `skewY(angle)`, degrees
    SkewY(f64),
}

impl TransformOperation {
    /// Convert a single [`StyleValue::Transformation`] into a typed
    /// operation, if its parameters have the expected shape.
    #[must_use]
    pub fn from_style_value(value: &StyleValue) -> Option<TransformOperation> {
        let StyleValue::Transformation {
            function,
            parameters,
        } = value
        else {
            return None;
        };

        let number = |index: usize| -> Option<f64> {
            match parameters.get(index) {
                Some(StyleValue::Number(n)) => Some(*n),
                _ => None,
            }
        };
        let length = |index: usize| -> Option<LengthValue> {
            match parameters.get(index) {
                Some(StyleValue::Length(l)) => Some(*l),
                _ => None,
            }
        };

        match function {
            TransformFunction::Matrix => Some(TransformOperation::Matrix(
                number(0)?,
                number(1)?,
                number(2)?,
                number(3)?,
                number(4)?,
                number(5)?,
            )),
            TransformFunction::Translate => {
                // translate(x) is translate(x, 0)
                let x = length(0)?;
                let y = length(1).unwrap_or(LengthValue::Px(0.0));
                Some(TransformOperation::Translate(x, y))
            }
            TransformFunction::TranslateX => Some(TransformOperation::TranslateX(length(0)?)),
            TransformFunction::TranslateY => Some(TransformOperation::TranslateY(length(0)?)),
            TransformFunction::Scale => {
                // scale(s) is scale(s, s)
                let x = number(0)?;
                let y = number(1).unwrap_or(x);
                Some(TransformOperation::Scale(x, y))
            }
            TransformFunction::ScaleX => Some(TransformOperation::ScaleX(number(0)?)),
            TransformFunction::ScaleY => Some(TransformOperation::ScaleY(number(0)?)),
            TransformFunction::Rotate => Some(TransformOperation::Rotate(number(0)?)),
            TransformFunction::SkewX => Some(TransformOperation::SkewX(number(0)?)),
            TransformFunction::SkewY => Some(TransformOperation::SkewY(number(0)?)),
        }
    }
}

/// Computed position data for one background layer.
///
/// [§ 3.6 background-position](https://www.w3.org/TR/css-backgrounds-3/#background-position)
///
/// Only position data is modeled; the remaining per-layer channels (image,
/// repeat, size) resolve through the generic per-property path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundLayerData {
    /// Which horizontal edge the layer position is measured from.
    pub position_edge_x: PositionEdge,
    /// Offset from that horizontal edge.
    pub position_offset_x: LengthPercentage,
    /// Which vertical edge the layer position is measured from.
    pub position_edge_y: PositionEdge,
    /// Offset from that vertical edge.
    pub position_offset_y: LengthPercentage,
}

impl Default for BackgroundLayerData {
    fn default() -> Self {
        // "Initial: 0% 0%" - the top-left corner
        BackgroundLayerData {
            position_edge_x: PositionEdge::Left,
            position_offset_x: LengthPercentage::Percentage(0.0),
            position_edge_y: PositionEdge::Top,
            position_offset_y: LengthPercentage::Percentage(0.0),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Initial values
// ─────────────────────────────────────────────────────────────────────────────

/// The initial computed value of a longhand property.
///
/// [§ 7.3 Initial Values](https://www.w3.org/TR/css-cascade-4/#initial-values)
/// "Each property has an initial value, defined in the property's
/// definition table."
///
/// Returns `None` for shorthands and sentinels, which have no computed
/// value of their own.
#[must_use]
pub fn initial_value(property_id: PropertyID) -> Option<StyleValue> {
    let value = match property_id {
        PropertyID::BackgroundColor => StyleValue::Color(ColorValue::TRANSPARENT),
        PropertyID::BackgroundImage | PropertyID::Transform => {
            StyleValue::Identifier(ValueID::None)
        }
        PropertyID::BorderBottomColor
        | PropertyID::BorderLeftColor
        | PropertyID::BorderRightColor
        | PropertyID::BorderTopColor
        | PropertyID::Color
        | PropertyID::OutlineColor
        | PropertyID::TextDecorationColor => StyleValue::Color(ColorValue::BLACK),
        PropertyID::BorderBottomStyle
        | PropertyID::BorderLeftStyle
        | PropertyID::BorderRightStyle
        | PropertyID::BorderTopStyle => StyleValue::Identifier(ValueID::None),
        PropertyID::BorderBottomWidth
        | PropertyID::BorderLeftWidth
        | PropertyID::BorderRightWidth
        | PropertyID::BorderTopWidth => StyleValue::Length(LengthValue::Px(3.0)),
        PropertyID::Bottom
        | PropertyID::Height
        | PropertyID::Left
        | PropertyID::Right
        | PropertyID::Top
        | PropertyID::Width
        | PropertyID::ZIndex => StyleValue::Identifier(ValueID::Auto),
        PropertyID::ColumnGap | PropertyID::LineHeight | PropertyID::RowGap => {
            StyleValue::Identifier(ValueID::Normal)
        }
        PropertyID::Display => StyleValue::Identifier(ValueID::Inline),
        PropertyID::FontSize => StyleValue::Length(LengthValue::Px(DEFAULT_FONT_SIZE_PX)),
        PropertyID::MarginBottom
        | PropertyID::MarginLeft
        | PropertyID::MarginRight
        | PropertyID::MarginTop
        | PropertyID::PaddingBottom
        | PropertyID::PaddingLeft
        | PropertyID::PaddingRight
        | PropertyID::PaddingTop => StyleValue::Length(LengthValue::Px(0.0)),
        PropertyID::Opacity => StyleValue::Number(1.0),
        PropertyID::OverflowX | PropertyID::OverflowY => StyleValue::Identifier(ValueID::Visible),
        PropertyID::BackgroundPosition => StyleValue::Position {
            horizontal: EdgeValue::new(PositionEdge::Left, LengthPercentage::Percentage(0.0)),
            vertical: EdgeValue::new(PositionEdge::Top, LengthPercentage::Percentage(0.0)),
        },
        _ => return None,
    };
    Some(value)
}

// ─────────────────────────────────────────────────────────────────────────────
// ComputedStyle
// ─────────────────────────────────────────────────────────────────────────────

/// Computed styles for an element.
///
/// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
///
/// All fields are private; the resolved-value engine only ever reads a
/// record through the accessors, and only the cascade
/// ([`crate::style::StyleComputer`]) writes one, through
/// [`ComputedStyle::apply`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedStyle {
    /// [CSS Color § 3.1 color](https://www.w3.org/TR/css-color-4/#the-color-property)
    color: ColorValue,
    /// [§ 3.2 background-color](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    background_color: ColorValue,
    /// [CSS UI § outline-color](https://www.w3.org/TR/css-ui-4/#outline-color)
    outline_color: ColorValue,
    /// [CSS Text Decoration § text-decoration-color](https://www.w3.org/TR/css-text-decor-3/#text-decoration-color-property)
    text_decoration_color: ColorValue,
    /// Per-side border width/style/color.
    border: SideValues<BorderData>,
    /// Per-side margins.
    margin: SideValues<LengthPercentage>,
    /// Per-side paddings.
    padding: SideValues<LengthPercentage>,
    /// Per-side box insets (`top`/`right`/`bottom`/`left`).
    inset: SideValues<LengthPercentage>,
    /// [CSS2 § 10.2 width](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    width: Size,
    /// [CSS2 § 10.5 height](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    height: Size,
    /// Font size in pixels; drives the used line height.
    font_size: f64,
    /// The raw computed `line-height` value.
    line_height: LineHeight,
    /// Whether `display` computed to `none` (no boxes are generated).
    display_none: bool,
    /// The computed `transform` operation list, empty for `none`.
    transformations: Vec<TransformOperation>,
    /// Per-layer background position data.
    background_layers: Vec<BackgroundLayerData>,
    /// Every longhand's computed value, keyed by property.
    properties: HashMap<PropertyID, StyleValue>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        let mut properties = HashMap::new();
        for &property_id in PropertyID::ALL_LONGHANDS {
            if let Some(value) = initial_value(property_id) {
                let _ = properties.insert(property_id, value);
            }
        }
        ComputedStyle {
            color: ColorValue::BLACK,
            background_color: ColorValue::TRANSPARENT,
            outline_color: ColorValue::BLACK,
            text_decoration_color: ColorValue::BLACK,
            border: SideValues::uniform(BorderData::default()),
            margin: SideValues::uniform(LengthPercentage::Length(LengthValue::Px(0.0))),
            padding: SideValues::uniform(LengthPercentage::Length(LengthValue::Px(0.0))),
            inset: SideValues::uniform(LengthPercentage::Auto),
            width: Size::Auto,
            height: Size::Auto,
            font_size: DEFAULT_FONT_SIZE_PX,
            line_height: LineHeight::Normal,
            display_none: false,
            transformations: Vec::new(),
            background_layers: Vec::new(),
            properties,
        }
    }
}

impl ComputedStyle {
    /// Create a record inheriting the inherited properties from a parent.
    ///
    /// [§ 7.1 Inherited Properties](https://www.w3.org/TR/css-cascade-4/#inherited-property)
    /// "Some properties are inherited from an ancestor element to its
    /// descendants."
    ///
    /// Only the inherited properties this engine tracks in typed form are
    /// carried over: `color`, `font-size`, and `line-height`.
    #[must_use]
    pub fn inherited_from(parent: &ComputedStyle) -> ComputedStyle {
        let mut style = ComputedStyle::default();
        style.apply(PropertyID::Color, &StyleValue::Color(parent.color));
        style.apply(
            PropertyID::FontSize,
            &StyleValue::Length(LengthValue::Px(parent.font_size)),
        );
        style.apply(PropertyID::LineHeight, &parent.line_height.to_style_value());
        style
    }

    /// Apply one declared longhand value, updating both the per-property
    /// map and the typed mirror fields.
    ///
    /// Declared values arrive already typed; a value whose shape doesn't
    /// fit the property updates only the map (the typed mirror keeps its
    /// previous state). Shorthand declarations are not expanded here and
    /// are ignored with a warning.
    pub fn apply(&mut self, property_id: PropertyID, value: &StyleValue) {
        if property_id.is_shorthand() {
            warn_once(
                "CSS",
                &format!("ignoring declared shorthand '{property_id}' (declarations must be longhands)"),
            );
            return;
        }

        match property_id {
            PropertyID::Color => {
                if let StyleValue::Color(color) = value {
                    self.color = *color;
                }
            }
            PropertyID::BackgroundColor => {
                if let StyleValue::Color(color) = value {
                    self.background_color = *color;
                }
            }
            PropertyID::OutlineColor => {
                if let StyleValue::Color(color) = value {
                    self.outline_color = *color;
                }
            }
            PropertyID::TextDecorationColor => {
                if let StyleValue::Color(color) = value {
                    self.text_decoration_color = *color;
                }
            }
            PropertyID::BorderTopColor => {
                if let StyleValue::Color(color) = value {
                    self.border.top.color = *color;
                }
            }
            PropertyID::BorderRightColor => {
                if let StyleValue::Color(color) = value {
                    self.border.right.color = *color;
                }
            }
            PropertyID::BorderBottomColor => {
                if let StyleValue::Color(color) = value {
                    self.border.bottom.color = *color;
                }
            }
            PropertyID::BorderLeftColor => {
                if let StyleValue::Color(color) = value {
                    self.border.left.color = *color;
                }
            }
            PropertyID::BorderTopWidth => {
                if let StyleValue::Length(length) = value {
                    self.border.top.width = *length;
                }
            }
            PropertyID::BorderRightWidth => {
                if let StyleValue::Length(length) = value {
                    self.border.right.width = *length;
                }
            }
            PropertyID::BorderBottomWidth => {
                if let StyleValue::Length(length) = value {
                    self.border.bottom.width = *length;
                }
            }
            PropertyID::BorderLeftWidth => {
                if let StyleValue::Length(length) = value {
                    self.border.left.width = *length;
                }
            }
            PropertyID::BorderTopStyle => {
                if let StyleValue::Identifier(style) = value {
                    self.border.top.style = *style;
                }
            }
            PropertyID::BorderRightStyle => {
                if let StyleValue::Identifier(style) = value {
                    self.border.right.style = *style;
                }
            }
            PropertyID::BorderBottomStyle => {
                if let StyleValue::Identifier(style) = value {
                    self.border.bottom.style = *style;
                }
            }
            PropertyID::BorderLeftStyle => {
                if let StyleValue::Identifier(style) = value {
                    self.border.left.style = *style;
                }
            }
            PropertyID::MarginTop => {
                if let Some(lp) = length_percentage_from_value(value) {
                    self.margin.top = lp;
                }
            }
            PropertyID::MarginRight => {
                if let Some(lp) = length_percentage_from_value(value) {
                    self.margin.right = lp;
                }
            }
            PropertyID::MarginBottom => {
                if let Some(lp) = length_percentage_from_value(value) {
                    self.margin.bottom = lp;
                }
            }
            PropertyID::MarginLeft => {
                if let Some(lp) = length_percentage_from_value(value) {
                    self.margin.left = lp;
                }
            }
            PropertyID::PaddingTop => {
                if let Some(lp) = length_percentage_from_value(value) {
                    self.padding.top = lp;
                }
            }
            PropertyID::PaddingRight => {
                if let Some(lp) = length_percentage_from_value(value) {
                    self.padding.right = lp;
                }
            }
            PropertyID::PaddingBottom => {
                if let Some(lp) = length_percentage_from_value(value) {
                    self.padding.bottom = lp;
                }
            }
            PropertyID::PaddingLeft => {
                if let Some(lp) = length_percentage_from_value(value) {
                    self.padding.left = lp;
                }
            }
            PropertyID::Top => {
                if let Some(lp) = length_percentage_from_value(value) {
                    self.inset.top = lp;
                }
            }
            PropertyID::Right => {
                if let Some(lp) = length_percentage_from_value(value) {
                    self.inset.right = lp;
                }
            }
            PropertyID::Bottom => {
                if let Some(lp) = length_percentage_from_value(value) {
                    self.inset.bottom = lp;
                }
            }
            PropertyID::Left => {
                if let Some(lp) = length_percentage_from_value(value) {
                    self.inset.left = lp;
                }
            }
            PropertyID::Width => {
                if let Some(size) = size_from_value(value) {
                    self.width = size;
                }
            }
            PropertyID::Height => {
                if let Some(size) = size_from_value(value) {
                    self.height = size;
                }
            }
            PropertyID::FontSize => {
                if let StyleValue::Length(length) = value {
                    self.font_size = length.to_px();
                }
            }
            PropertyID::LineHeight => {
                self.line_height = match value {
                    StyleValue::Number(multiplier) => LineHeight::Number(*multiplier),
                    StyleValue::Length(length) => LineHeight::Length(*length),
                    // anything else (notably `normal`) keeps keyword form
                    _ => LineHeight::Normal,
                };
            }
            PropertyID::Display => {
                self.display_none = value.is_identifier(ValueID::None);
            }
            PropertyID::Transform => {
                self.transformations = transform_operations_from_value(value);
            }
            PropertyID::BackgroundPosition => {
                if let Some(layers) = background_layers_from_value(value) {
                    self.background_layers = layers;
                }
            }
            _ => {}
        }

        let _ = self.properties.insert(property_id, value.clone());
    }

    /// The computed value for a longhand property, if the record has one.
    ///
    /// This is the generic read the resolved-value engine's default path
    /// uses; shorthands and sentinels have no entry.
    #[must_use]
    pub fn property(&self, property_id: PropertyID) -> Option<&StyleValue> {
        self.properties.get(&property_id)
    }

    /// The computed `color`.
    #[must_use]
    pub fn color(&self) -> ColorValue {
        self.color
    }

    /// The computed `background-color`.
    #[must_use]
    pub fn background_color(&self) -> ColorValue {
        self.background_color
    }

    /// The computed `outline-color`.
    #[must_use]
    pub fn outline_color(&self) -> ColorValue {
        self.outline_color
    }

    /// The computed `text-decoration-color`.
    #[must_use]
    pub fn text_decoration_color(&self) -> ColorValue {
        self.text_decoration_color
    }

    /// Per-side border data.
    #[must_use]
    pub fn border(&self) -> &SideValues<BorderData> {
        &self.border
    }

    /// Per-side computed margins.
    #[must_use]
    pub fn margin(&self) -> &SideValues<LengthPercentage> {
        &self.margin
    }

    /// Per-side computed paddings.
    #[must_use]
    pub fn padding(&self) -> &SideValues<LengthPercentage> {
        &self.padding
    }

    /// Per-side computed insets (`top`/`right`/`bottom`/`left`).
    #[must_use]
    pub fn inset(&self) -> &SideValues<LengthPercentage> {
        &self.inset
    }

    /// The computed `width`.
    #[must_use]
    pub fn width(&self) -> &Size {
        &self.width
    }

    /// The computed `height`.
    #[must_use]
    pub fn height(&self) -> &Size {
        &self.height
    }

    /// The font size in pixels.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// The raw computed `line-height`.
    #[must_use]
    pub fn line_height(&self) -> &LineHeight {
        &self.line_height
    }

    /// Whether `display` computed to `none`.
    #[must_use]
    pub fn display_none(&self) -> bool {
        self.display_none
    }

    /// The computed transform operation list (empty for `none`).
    #[must_use]
    pub fn transformations(&self) -> &[TransformOperation] {
        &self.transformations
    }

    /// Per-layer background position data.
    #[must_use]
    pub fn background_layers(&self) -> &[BackgroundLayerData] {
        &self.background_layers
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Declared-value conversions
// ─────────────────────────────────────────────────────────────────────────────

/// Read a declared value as a `<length-percentage> | auto`.
fn length_percentage_from_value(value: &StyleValue) -> Option<LengthPercentage> {
    match value {
        StyleValue::Identifier(ValueID::Auto) => Some(LengthPercentage::Auto),
        StyleValue::Length(length) => Some(LengthPercentage::Length(*length)),
        StyleValue::Percentage(percentage) => Some(LengthPercentage::Percentage(*percentage)),
        StyleValue::Calculated(expression) => {
            Some(LengthPercentage::Calculated(expression.clone()))
        }
        _ => None,
    }
}

/// Read a declared value as a sizing value.
fn size_from_value(value: &StyleValue) -> Option<Size> {
    match value {
        StyleValue::Identifier(ValueID::Auto) => Some(Size::Auto),
        StyleValue::Identifier(ValueID::None) => Some(Size::None),
        StyleValue::Identifier(ValueID::MinContent) => Some(Size::MinContent),
        StyleValue::Identifier(ValueID::MaxContent) => Some(Size::MaxContent),
        StyleValue::Identifier(ValueID::FitContent) => Some(Size::FitContent),
        StyleValue::Length(length) => Some(Size::Length(*length)),
        StyleValue::Percentage(percentage) => Some(Size::Percentage(*percentage)),
        StyleValue::Calculated(expression) => Some(Size::Calculated(expression.clone())),
        _ => None,
    }
}

/// Read a declared `transform` value as an operation list.
///
/// The computed `transform` is always stored as a space-separated list of
/// transformation values (or the `none` keyword), so those are the only
/// shapes accepted; anything else warns and leaves the list empty.
fn transform_operations_from_value(value: &StyleValue) -> Vec<TransformOperation> {
    if value.is_identifier(ValueID::None) {
        return Vec::new();
    }
    let StyleValue::List { values, .. } = value else {
        warn_once("CSS", "declared transform is neither 'none' nor a list");
        return Vec::new();
    };
    let mut operations = Vec::with_capacity(values.len());
    for entry in values {
        match TransformOperation::from_style_value(entry) {
            Some(operation) => operations.push(operation),
            None => {
                warn_once("CSS", "unsupported transform function in declared value");
                return Vec::new();
            }
        }
    }
    operations
}

/// Read a declared `background-position` value as per-layer data.
///
/// A single `<position>` declares one layer; a comma-separated list of
/// positions declares one layer each.
fn background_layers_from_value(value: &StyleValue) -> Option<Vec<BackgroundLayerData>> {
    fn layer_from_position(value: &StyleValue) -> Option<BackgroundLayerData> {
        let StyleValue::Position {
            horizontal,
            vertical,
        } = value
        else {
            return None;
        };
        Some(BackgroundLayerData {
            position_edge_x: horizontal.edge,
            position_offset_x: horizontal.offset.clone(),
            position_edge_y: vertical.edge,
            position_offset_y: vertical.offset.clone(),
        })
    }

    match value {
        StyleValue::Position { .. } => Some(vec![layer_from_position(value)?]),
        StyleValue::List {
            values,
            separator: Separator::Comma,
        } => values.iter().map(layer_from_position).collect(),
        _ => None,
    }
}
