//! CSS value objects and their canonical serialization.
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSSOM § Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values)
//!
//! [`StyleValue`] is the tagged-variant value object the resolved-value
//! engine hands back to callers. Instances are never mutated after
//! construction; any "change" produces a new instance, and equality is
//! structural (derived), which is what the sided-shorthand collapse keys on.

use serde::Serialize;
use strum_macros::Display;

use crate::property::PropertyID;

/// User agent default font size.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
/// "Initial: medium" - we define medium as 16px per common browser convention.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

// ─────────────────────────────────────────────────────────────────────────────
// Keyword Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Keyword identifiers the engine stores or emits as computed/resolved values.
///
/// [§ 4.2 Keywords](https://www.w3.org/TR/css-values-4/#keywords)
/// "Keywords... are normalized to lowercase for serialization."
///
/// The set is closed: only keywords some recognized property can actually
/// produce are listed, so an identifier value is always serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
pub enum ValueID {
    /// [§ 4.4 auto](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
    Auto,
    /// `display: block` outer display type
    Block,
    /// `border-style: dashed`
    Dashed,
    /// `border-style: dotted`
    Dotted,
    /// [CSS Sizing § fit-content](https://www.w3.org/TR/css-sizing-3/#valdef-width-fit-content)
    FitContent,
    /// `display: inline` outer display type
    Inline,
    /// Sentinel keyword for the [`PropertyID::Invalid`] property.
    Invalid,
    /// [CSS Sizing § max-content](https://www.w3.org/TR/css-sizing-3/#valdef-width-max-content)
    MaxContent,
    /// [CSS Sizing § min-content](https://www.w3.org/TR/css-sizing-3/#valdef-width-min-content)
    MinContent,
    /// `none` (display, border-style, transform, background-image, ...)
    None,
    /// `normal` (line-height, gap, ...)
    Normal,
    /// `border-style: solid`
    Solid,
    /// `overflow: visible`
    Visible,
}

// ─────────────────────────────────────────────────────────────────────────────
// Length Values
// ─────────────────────────────────────────────────────────────────────────────

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in
/// the property definitions."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthValue {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px(f64),
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element"
    Em(f64),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    Vw(f64),
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vh = 1% of viewport height"
    Vh(f64),
}

impl LengthValue {
    /// Get the value in pixels for non-viewport units.
    ///
    /// NOTE: For viewport units (vw, vh), this returns 0.0 as a fallback,
    /// since this crate carries no viewport geometry. Layout-derived used
    /// values (line height, transform translation) only ever reach this
    /// with px/em lengths.
    #[must_use]
    pub fn to_px(&self) -> f64 {
        match self {
            LengthValue::Px(px) => *px,
            LengthValue::Em(em) => *em * DEFAULT_FONT_SIZE_PX,
            LengthValue::Vw(_) | LengthValue::Vh(_) => 0.0,
        }
    }

    /// Serialize with the unit suffix, e.g. `10px` or `1.5em`.
    ///
    /// [§ Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values)
    #[must_use]
    pub fn to_css_string(&self) -> String {
        match self {
            LengthValue::Px(v) => format!("{v}px"),
            LengthValue::Em(v) => format!("{v}em"),
            LengthValue::Vw(v) => format!("{v}vw"),
            LengthValue::Vh(v) => format!("{v}vh"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color Values
// ─────────────────────────────────────────────────────────────────────────────

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
///
/// Colors reaching the resolved-value engine are always fully resolved
/// upstream; there is no `currentColor` or system-color indirection here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl ColorValue {
    /// Fully opaque black, the initial value of `color`.
    pub const BLACK: ColorValue = ColorValue {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Fully transparent, the initial value of `background-color`.
    pub const TRANSPARENT: ColorValue = ColorValue {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a `<hex-color>` is a `<hash-token>` token whose value
    /// consists of 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            // "The three-digit RGB notation (#RGB) is converted into six-digit
            // form (#RRGGBB) by replicating digits, not by adding zeros."
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(ColorValue { r, g, b, a: 255 })
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(ColorValue { r, g, b, a: 255 })
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(ColorValue { r, g, b, a })
            }
            _ => None,
        }
    }

    /// Convert to hex string notation (#RRGGBB, or #RRGGBBAA if alpha != 255).
    ///
    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Length-Percentage and Size
// ─────────────────────────────────────────────────────────────────────────────

/// [§ 4.5 Mixing percentages and dimensions](https://www.w3.org/TR/css-values-4/#mixed-percentages)
///
/// "`<length-percentage>` = `<length>` | `<percentage>`"
///
/// The computed value of a margin/padding/inset side: `auto`, a length, a
/// percentage, or an already-simplified `calc()` expression carried through
/// opaquely (its canonical text).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LengthPercentage {
    /// [§ 4.4 auto](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
    Auto,
    /// A specific length value (px, em, ...).
    Length(LengthValue),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// Stored as the percentage number, i.e. `50.0` for `50%`.
    Percentage(f64),
    /// [§ 8.1 calc()](https://www.w3.org/TR/css-values-4/#calc-notation)
    /// An already-simplified calculation, kept as its canonical text.
    Calculated(String),
}

impl LengthPercentage {
    /// Serialize to canonical CSS text.
    #[must_use]
    pub fn to_css_string(&self) -> String {
        match self {
            LengthPercentage::Auto => "auto".to_string(),
            LengthPercentage::Length(length) => length.to_css_string(),
            LengthPercentage::Percentage(percentage) => format!("{percentage}%"),
            LengthPercentage::Calculated(expression) => expression.clone(),
        }
    }
}

/// [CSS Sizing Level 3 § 3](https://www.w3.org/TR/css-sizing-3/#sizing-properties)
///
/// The computed value of `width`/`height`: everything a
/// `<length-percentage>` can be, plus the sizing keywords.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Size {
    /// `auto`
    Auto,
    /// `none` (only valid for max sizing, but representable uniformly)
    None,
    /// A specific length value.
    Length(LengthValue),
    /// A percentage of the containing block, as the percentage number.
    Percentage(f64),
    /// An already-simplified calculation, kept as its canonical text.
    Calculated(String),
    /// `min-content`
    MinContent,
    /// `max-content`
    MaxContent,
    /// Parameterless `fit-content`
    FitContent,
    /// `fit-content(<length>)` — representable, but producing a resolved
    /// value for it is not implemented and fails fast (see
    /// [`crate::cssom::style_value_for_size`]).
    FitContentLength(LengthValue),
}

// ─────────────────────────────────────────────────────────────────────────────
// Positions and Edges
// ─────────────────────────────────────────────────────────────────────────────

/// [CSS Values § 6.1 Position](https://www.w3.org/TR/css-values-4/#position)
///
/// The edge a positional offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
pub enum PositionEdge {
    /// Offset from the top edge.
    Top,
    /// Offset from the right edge.
    Right,
    /// Offset from the bottom edge.
    Bottom,
    /// Offset from the left edge.
    Left,
}

/// One component of a `<position>`: an edge plus an offset from it,
/// e.g. `left 25%`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeValue {
    /// The edge the offset is measured from.
    pub edge: PositionEdge,
    /// The offset from that edge.
    pub offset: LengthPercentage,
}

impl EdgeValue {
    /// Create an edge/offset pair.
    #[must_use]
    pub fn new(edge: PositionEdge, offset: LengthPercentage) -> Self {
        EdgeValue { edge, offset }
    }

    /// Serialize as `<edge> <offset>`, e.g. `left 25%`.
    #[must_use]
    pub fn to_css_string(&self) -> String {
        format!("{} {}", self.edge, self.offset.to_css_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transform Functions
// ─────────────────────────────────────────────────────────────────────────────

/// [CSS Transforms § 6 Transform Functions](https://www.w3.org/TR/css-transforms-1/#transform-functions)
///
/// The function kind tag of a [`StyleValue::Transformation`]. Serialization
/// matches the CSS function names (`matrix`, `translateX`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "camelCase")]
pub enum TransformFunction {
    /// `matrix(a, b, c, d, e, f)`
    Matrix,
    /// `translate(x, y)`
    Translate,
    /// `translateX(x)`
    TranslateX,
    /// `translateY(y)`
    TranslateY,
    /// `scale(x, y)`
    Scale,
    /// `scaleX(x)`
    ScaleX,
    /// `scaleY(y)`
    ScaleY,
    /// `rotate(angle)`
    Rotate,
    /// `skewX(angle)`
    SkewX,
    /// `skewY(angle)`
    SkewY,
}

// ─────────────────────────────────────────────────────────────────────────────
// StyleValue
// ─────────────────────────────────────────────────────────────────────────────

/// Separator between elements of a [`StyleValue::List`].
///
/// [§ Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values)
/// "If the value is a list, serialize each item and join them with the
/// list's separator."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Separator {
    /// Space-separated, e.g. the 2–4 value forms of sided shorthands.
    Space,
    /// Comma-separated, e.g. per-layer background values.
    Comma,
}

/// An immutable, structurally-comparable CSS value.
///
/// [§ Resolved Values](https://www.w3.org/TR/cssom-1/#resolved-values)
///
/// This is the canonical value object a resolved-style query produces.
/// Two values are equal iff their variant and payload match; the
/// sided-shorthand collapse (`margin: 1px 2px` vs four longhands) is
/// defined entirely in terms of this equality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StyleValue {
    /// A fully resolved sRGB color.
    Color(ColorValue),
    /// A `<length>` with its unit.
    Length(LengthValue),
    /// A `<percentage>`, as the percentage number (`50.0` for `50%`).
    Percentage(f64),
    /// A CSS-wide or property-specific keyword.
    Identifier(ValueID),
    /// A plain `<number>`.
    Number(f64),
    /// One `<position>` component: edge + offset.
    Edge(EdgeValue),
    /// A full `<position>`: horizontal and vertical edge/offset pairs.
    Position {
        /// The horizontal component (`left ...` / `right ...`).
        horizontal: EdgeValue,
        /// The vertical component (`top ...` / `bottom ...`).
        vertical: EdgeValue,
    },
    /// An ordered sequence of values with a separator.
    List {
        /// The list elements, in order.
        values: Vec<StyleValue>,
        /// How the elements are joined when serialized.
        separator: Separator,
    },
    /// A shorthand reconstructed from its longhands. The id and value
    /// vectors have equal length and matching order.
    Shorthand {
        /// The shorthand property this value belongs to.
        property: PropertyID,
        /// The longhand ids, in canonical order.
        longhands: Vec<PropertyID>,
        /// The resolved longhand values, in the same order.
        values: Vec<StyleValue>,
    },
    /// A single transform function with its numeric parameters.
    Transformation {
        /// Which transform function this is.
        function: TransformFunction,
        /// The function's parameters, in order.
        parameters: Vec<StyleValue>,
    },
    /// An already-simplified `calc()` expression, carried through unchanged
    /// as its canonical text.
    Calculated(String),
}

impl StyleValue {
    /// Build a list value.
    #[must_use]
    pub fn list(values: Vec<StyleValue>, separator: Separator) -> Self {
        StyleValue::List { values, separator }
    }

    /// Build a shorthand value.
    ///
    /// # Panics
    /// Panics if the longhand id and value vectors have different lengths;
    /// a shorthand with mismatched vectors is unrepresentable by contract.
    #[must_use]
    pub fn shorthand(
        property: PropertyID,
        longhands: Vec<PropertyID>,
        values: Vec<StyleValue>,
    ) -> Self {
        assert_eq!(
            longhands.len(),
            values.len(),
            "shorthand longhand ids and values must match"
        );
        StyleValue::Shorthand {
            property,
            longhands,
            values,
        }
    }

    /// Check whether this value is a list.
    ///
    /// The `border` shorthand rule keys on this: a sided longhand group that
    /// collapsed to a list means the sides were not uniform.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, StyleValue::List { .. })
    }

    /// Check whether this value is the given keyword.
    #[must_use]
    pub fn is_identifier(&self, id: ValueID) -> bool {
        matches!(self, StyleValue::Identifier(value) if *value == id)
    }

    /// Serialize to canonical CSS text.
    ///
    /// [§ Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values)
    #[must_use]
    pub fn to_css_string(&self) -> String {
        match self {
            StyleValue::Color(color) => color.to_hex_string(),
            StyleValue::Length(length) => length.to_css_string(),
            StyleValue::Percentage(percentage) => format!("{percentage}%"),
            StyleValue::Identifier(id) => id.to_string(),
            StyleValue::Number(number) => format!("{number}"),
            StyleValue::Edge(edge) => edge.to_css_string(),
            StyleValue::Position {
                horizontal,
                vertical,
            } => format!("{} {}", horizontal.to_css_string(), vertical.to_css_string()),
            StyleValue::List { values, separator } => {
                let joined: Vec<String> = values.iter().map(StyleValue::to_css_string).collect();
                match separator {
                    Separator::Space => joined.join(" "),
                    Separator::Comma => joined.join(", "),
                }
            }
            StyleValue::Shorthand { values, .. } => {
                let joined: Vec<String> = values.iter().map(StyleValue::to_css_string).collect();
                joined.join(" ")
            }
            StyleValue::Transformation {
                function,
                parameters,
            } => {
                let joined: Vec<String> =
                    parameters.iter().map(StyleValue::to_css_string).collect();
                format!("{function}({})", joined.join(", "))
            }
            StyleValue::Calculated(expression) => expression.clone(),
        }
    }
}
