//! Property identifiers and shorthand metadata.
//!
//! - [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/)
//! - [CSSOM § Resolved Values](https://www.w3.org/TR/cssom-1/#resolved-values)
//!
//! [`PropertyID`] is a closed, compile-time fixed enumeration of every
//! property the engine recognizes, plus the `Invalid` and `Custom`
//! sentinels. The resolved-value dispatcher matches on it exhaustively, so
//! adding a property without deciding its resolution rule is a build-time
//! error rather than a silent fallback.

use serde::Serialize;
use strum_macros::Display;

/// A CSS property identifier.
///
/// [§ 6.4 Cascade](https://www.w3.org/TR/css-cascade-4/)
///
/// Serialization is the kebab-case property name (`background-color`,
/// `overflow-x`, ...). `Invalid` and `Custom` are sentinels: `Invalid` is
/// what unknown names map to, and `Custom` stands for any `--*` custom
/// property (whose name is not retained here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
pub enum PropertyID {
    // ── Longhands ────────────────────────────────────────────────────────
    /// [§ 3.2 background-color](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    BackgroundColor,
    /// [§ 3.1 background-image](https://www.w3.org/TR/css-backgrounds-3/#background-image)
    BackgroundImage,
    /// [§ 4.1 border-color longhand](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderBottomColor,
    /// [§ 4.2 border-style longhand](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    BorderBottomStyle,
    /// [§ 4.3 border-width longhand](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderBottomWidth,
    /// [§ 4.1 border-color longhand](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderLeftColor,
    /// [§ 4.2 border-style longhand](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    BorderLeftStyle,
    /// [§ 4.3 border-width longhand](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderLeftWidth,
    /// [§ 4.1 border-color longhand](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderRightColor,
    /// [§ 4.2 border-style longhand](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    BorderRightStyle,
    /// [§ 4.3 border-width longhand](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderRightWidth,
    /// [§ 4.1 border-color longhand](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderTopColor,
    /// [§ 4.2 border-style longhand](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    BorderTopStyle,
    /// [§ 4.3 border-width longhand](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderTopWidth,
    /// [CSS Position § inset longhand](https://www.w3.org/TR/css-position-3/#insets)
    Bottom,
    /// [CSS Color § 3.1 color](https://www.w3.org/TR/css-color-4/#the-color-property)
    Color,
    /// [CSS Align § column-gap](https://www.w3.org/TR/css-align-3/#column-row-gap)
    ColumnGap,
    /// [CSS Display § 2 display](https://www.w3.org/TR/css-display-3/#the-display-properties)
    Display,
    /// [CSS Fonts § 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
    FontSize,
    /// [CSS2 § 10.5 height](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    Height,
    /// [CSS Position § inset longhand](https://www.w3.org/TR/css-position-3/#insets)
    Left,
    /// [CSS Inline § 4.2 line-height](https://www.w3.org/TR/css-inline-3/#line-height-property)
    LineHeight,
    /// [CSS Box § 6.1 margin longhand](https://www.w3.org/TR/css-box-4/#margin-physical)
    MarginBottom,
    /// [CSS Box § 6.1 margin longhand](https://www.w3.org/TR/css-box-4/#margin-physical)
    MarginLeft,
    /// [CSS Box § 6.1 margin longhand](https://www.w3.org/TR/css-box-4/#margin-physical)
    MarginRight,
    /// [CSS Box § 6.1 margin longhand](https://www.w3.org/TR/css-box-4/#margin-physical)
    MarginTop,
    /// [CSS Color § 4 opacity](https://www.w3.org/TR/css-color-4/#transparency)
    Opacity,
    /// [CSS UI § outline-color](https://www.w3.org/TR/css-ui-4/#outline-color)
    OutlineColor,
    /// [CSS Overflow § overflow longhand](https://www.w3.org/TR/css-overflow-3/#propdef-overflow-x)
    OverflowX,
    /// [CSS Overflow § overflow longhand](https://www.w3.org/TR/css-overflow-3/#propdef-overflow-y)
    OverflowY,
    /// [CSS Box § 6.2 padding longhand](https://www.w3.org/TR/css-box-4/#padding-physical)
    PaddingBottom,
    /// [CSS Box § 6.2 padding longhand](https://www.w3.org/TR/css-box-4/#padding-physical)
    PaddingLeft,
    /// [CSS Box § 6.2 padding longhand](https://www.w3.org/TR/css-box-4/#padding-physical)
    PaddingRight,
    /// [CSS Box § 6.2 padding longhand](https://www.w3.org/TR/css-box-4/#padding-physical)
    PaddingTop,
    /// [CSS Position § inset longhand](https://www.w3.org/TR/css-position-3/#insets)
    Right,
    /// [CSS Align § row-gap](https://www.w3.org/TR/css-align-3/#column-row-gap)
    RowGap,
    /// [CSS Text Decoration § text-decoration-color](https://www.w3.org/TR/css-text-decor-3/#text-decoration-color-property)
    TextDecorationColor,
    /// [CSS Position § inset longhand](https://www.w3.org/TR/css-position-3/#insets)
    Top,
    /// [CSS Transforms § 5 transform](https://www.w3.org/TR/css-transforms-1/#transform-property)
    Transform,
    /// [CSS2 § 10.2 width](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    Width,
    /// [CSS2 § 9.9.1 z-index](https://www.w3.org/TR/CSS2/visuren.html#z-index)
    ZIndex,

    // ── Shorthands ───────────────────────────────────────────────────────
    /// [§ 3.10 background](https://www.w3.org/TR/css-backgrounds-3/#the-background)
    Background,
    /// [§ 3.6 background-position](https://www.w3.org/TR/css-backgrounds-3/#background-position)
    ///
    /// NOTE: Resolved from per-layer position data rather than from
    /// longhands, so it is classified as a longhand here (see
    /// [`PropertyID::is_shorthand`]).
    BackgroundPosition,
    /// [§ 4.5 border](https://www.w3.org/TR/css-backgrounds-3/#the-border-shorthands)
    Border,
    /// [§ 4.5 border-bottom](https://www.w3.org/TR/css-backgrounds-3/#the-border-shorthands)
    BorderBottom,
    /// [§ 4.1 border-color](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    BorderColor,
    /// [§ 4.5 border-left](https://www.w3.org/TR/css-backgrounds-3/#the-border-shorthands)
    BorderLeft,
    /// [§ 4.5 border-right](https://www.w3.org/TR/css-backgrounds-3/#the-border-shorthands)
    BorderRight,
    /// [§ 4.2 border-style](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    BorderStyle,
    /// [§ 4.5 border-top](https://www.w3.org/TR/css-backgrounds-3/#the-border-shorthands)
    BorderTop,
    /// [§ 4.3 border-width](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    BorderWidth,
    /// [CSS Align § gap](https://www.w3.org/TR/css-align-3/#gap-shorthand)
    Gap,
    /// [CSS Position § inset](https://www.w3.org/TR/css-position-3/#inset-shorthands)
    Inset,
    /// [CSS Box § 6.1 margin](https://www.w3.org/TR/css-box-4/#margin-shorthand)
    Margin,
    /// [CSS Overflow § overflow](https://www.w3.org/TR/css-overflow-3/#propdef-overflow)
    Overflow,
    /// [CSS Box § 6.2 padding](https://www.w3.org/TR/css-box-4/#padding-shorthand)
    Padding,

    // ── Sentinels ────────────────────────────────────────────────────────
    /// Unknown property names map here.
    Invalid,
    /// Any `--*` custom property. The custom name itself is not retained.
    Custom,
}

impl PropertyID {
    /// Every recognized longhand, in canonical order.
    ///
    /// The cascade seeds a computed-style record with an initial value for
    /// each of these, so a computed record always answers
    /// [`crate::style::ComputedStyle::property`] for any longhand.
    pub const ALL_LONGHANDS: &'static [PropertyID] = &[
        PropertyID::BackgroundColor,
        PropertyID::BackgroundImage,
        PropertyID::BackgroundPosition,
        PropertyID::BorderBottomColor,
        PropertyID::BorderBottomStyle,
        PropertyID::BorderBottomWidth,
        PropertyID::BorderLeftColor,
        PropertyID::BorderLeftStyle,
        PropertyID::BorderLeftWidth,
        PropertyID::BorderRightColor,
        PropertyID::BorderRightStyle,
        PropertyID::BorderRightWidth,
        PropertyID::BorderTopColor,
        PropertyID::BorderTopStyle,
        PropertyID::BorderTopWidth,
        PropertyID::Bottom,
        PropertyID::Color,
        PropertyID::ColumnGap,
        PropertyID::Display,
        PropertyID::FontSize,
        PropertyID::Height,
        PropertyID::Left,
        PropertyID::LineHeight,
        PropertyID::MarginBottom,
        PropertyID::MarginLeft,
        PropertyID::MarginRight,
        PropertyID::MarginTop,
        PropertyID::Opacity,
        PropertyID::OutlineColor,
        PropertyID::OverflowX,
        PropertyID::OverflowY,
        PropertyID::PaddingBottom,
        PropertyID::PaddingLeft,
        PropertyID::PaddingRight,
        PropertyID::PaddingTop,
        PropertyID::Right,
        PropertyID::RowGap,
        PropertyID::TextDecorationColor,
        PropertyID::Top,
        PropertyID::Transform,
        PropertyID::Width,
        PropertyID::ZIndex,
    ];

    /// Look up a property by name, case-insensitively.
    ///
    /// [CSS Variables § 2](https://www.w3.org/TR/css-variables-1/#defining-variables)
    /// "A custom property is any property whose name starts with two
    /// dashes."
    ///
    /// Custom properties map to [`PropertyID::Custom`]; anything else
    /// unrecognized maps to [`PropertyID::Invalid`].
    #[must_use]
    pub fn from_name(name: &str) -> PropertyID {
        if name.starts_with("--") {
            return PropertyID::Custom;
        }
        match name.to_ascii_lowercase().as_str() {
            "background" => PropertyID::Background,
            "background-color" => PropertyID::BackgroundColor,
            "background-image" => PropertyID::BackgroundImage,
            "background-position" => PropertyID::BackgroundPosition,
            "border" => PropertyID::Border,
            "border-bottom" => PropertyID::BorderBottom,
            "border-bottom-color" => PropertyID::BorderBottomColor,
            "border-bottom-style" => PropertyID::BorderBottomStyle,
            "border-bottom-width" => PropertyID::BorderBottomWidth,
            "border-color" => PropertyID::BorderColor,
            "border-left" => PropertyID::BorderLeft,
            "border-left-color" => PropertyID::BorderLeftColor,
            "border-left-style" => PropertyID::BorderLeftStyle,
            "border-left-width" => PropertyID::BorderLeftWidth,
            "border-right" => PropertyID::BorderRight,
            "border-right-color" => PropertyID::BorderRightColor,
            "border-right-style" => PropertyID::BorderRightStyle,
            "border-right-width" => PropertyID::BorderRightWidth,
            "border-style" => PropertyID::BorderStyle,
            "border-top" => PropertyID::BorderTop,
            "border-top-color" => PropertyID::BorderTopColor,
            "border-top-style" => PropertyID::BorderTopStyle,
            "border-top-width" => PropertyID::BorderTopWidth,
            "border-width" => PropertyID::BorderWidth,
            "bottom" => PropertyID::Bottom,
            "color" => PropertyID::Color,
            "column-gap" => PropertyID::ColumnGap,
            "display" => PropertyID::Display,
            "font-size" => PropertyID::FontSize,
            "gap" => PropertyID::Gap,
            "height" => PropertyID::Height,
            "inset" => PropertyID::Inset,
            "left" => PropertyID::Left,
            "line-height" => PropertyID::LineHeight,
            "margin" => PropertyID::Margin,
            "margin-bottom" => PropertyID::MarginBottom,
            "margin-left" => PropertyID::MarginLeft,
            "margin-right" => PropertyID::MarginRight,
            "margin-top" => PropertyID::MarginTop,
            "opacity" => PropertyID::Opacity,
            "outline-color" => PropertyID::OutlineColor,
            "overflow" => PropertyID::Overflow,
            "overflow-x" => PropertyID::OverflowX,
            "overflow-y" => PropertyID::OverflowY,
            "padding" => PropertyID::Padding,
            "padding-bottom" => PropertyID::PaddingBottom,
            "padding-left" => PropertyID::PaddingLeft,
            "padding-right" => PropertyID::PaddingRight,
            "padding-top" => PropertyID::PaddingTop,
            "right" => PropertyID::Right,
            "row-gap" => PropertyID::RowGap,
            "text-decoration-color" => PropertyID::TextDecorationColor,
            "top" => PropertyID::Top,
            "transform" => PropertyID::Transform,
            "width" => PropertyID::Width,
            "z-index" => PropertyID::ZIndex,
            _ => PropertyID::Invalid,
        }
    }

    /// Check whether this property is a shorthand.
    ///
    /// NOTE: `background-position` is treated as a longhand here: its
    /// resolved value is reconstructed from per-layer position data, not
    /// from longhand properties.
    #[must_use]
    pub fn is_shorthand(self) -> bool {
        matches!(
            self,
            PropertyID::Background
                | PropertyID::Border
                | PropertyID::BorderBottom
                | PropertyID::BorderColor
                | PropertyID::BorderLeft
                | PropertyID::BorderRight
                | PropertyID::BorderStyle
                | PropertyID::BorderTop
                | PropertyID::BorderWidth
                | PropertyID::Gap
                | PropertyID::Inset
                | PropertyID::Margin
                | PropertyID::Overflow
                | PropertyID::Padding
        )
    }

    /// The longhands a shorthand expands to, in canonical order.
    ///
    /// [§ 5.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
    /// "Shorthand properties... allow several properties to be set
    /// simultaneously."
    ///
    /// Returns an empty slice for longhands and sentinels. Longhands of a
    /// shorthand are never themselves shorthands, so resolving a shorthand
    /// recurses at most one level.
    #[must_use]
    pub fn longhands(self) -> &'static [PropertyID] {
        match self {
            PropertyID::Background => &[
                PropertyID::BackgroundColor,
                PropertyID::BackgroundImage,
                PropertyID::BackgroundPosition,
            ],
            PropertyID::Border => &[
                PropertyID::BorderWidth,
                PropertyID::BorderStyle,
                PropertyID::BorderColor,
            ],
            PropertyID::BorderBottom => &[
                PropertyID::BorderBottomWidth,
                PropertyID::BorderBottomStyle,
                PropertyID::BorderBottomColor,
            ],
            PropertyID::BorderColor => &[
                PropertyID::BorderTopColor,
                PropertyID::BorderRightColor,
                PropertyID::BorderBottomColor,
                PropertyID::BorderLeftColor,
            ],
            PropertyID::BorderLeft => &[
                PropertyID::BorderLeftWidth,
                PropertyID::BorderLeftStyle,
                PropertyID::BorderLeftColor,
            ],
            PropertyID::BorderRight => &[
                PropertyID::BorderRightWidth,
                PropertyID::BorderRightStyle,
                PropertyID::BorderRightColor,
            ],
            PropertyID::BorderStyle => &[
                PropertyID::BorderTopStyle,
                PropertyID::BorderRightStyle,
                PropertyID::BorderBottomStyle,
                PropertyID::BorderLeftStyle,
            ],
            PropertyID::BorderTop => &[
                PropertyID::BorderTopWidth,
                PropertyID::BorderTopStyle,
                PropertyID::BorderTopColor,
            ],
            PropertyID::BorderWidth => &[
                PropertyID::BorderTopWidth,
                PropertyID::BorderRightWidth,
                PropertyID::BorderBottomWidth,
                PropertyID::BorderLeftWidth,
            ],
            PropertyID::Gap => &[PropertyID::RowGap, PropertyID::ColumnGap],
            PropertyID::Inset => &[
                PropertyID::Top,
                PropertyID::Right,
                PropertyID::Bottom,
                PropertyID::Left,
            ],
            PropertyID::Margin => &[
                PropertyID::MarginTop,
                PropertyID::MarginRight,
                PropertyID::MarginBottom,
                PropertyID::MarginLeft,
            ],
            PropertyID::Overflow => &[PropertyID::OverflowX, PropertyID::OverflowY],
            PropertyID::Padding => &[
                PropertyID::PaddingTop,
                PropertyID::PaddingRight,
                PropertyID::PaddingBottom,
                PropertyID::PaddingLeft,
            ],
            _ => &[],
        }
    }

    /// Check whether querying this property's resolved value requires a
    /// full layout pass, or only an up-to-date cascade.
    ///
    /// [CSSOM § dom-window-getcomputedstyle](https://www.w3.org/TR/cssom-1/#dom-window-getcomputedstyle)
    ///
    /// Purely cosmetic properties (colors, opacity, stacking order,
    /// background placement) never change box geometry, so forcing layout
    /// for them would be wasted work.
    #[must_use]
    pub fn affects_layout(self) -> bool {
        !matches!(
            self,
            PropertyID::Background
                | PropertyID::BackgroundColor
                | PropertyID::BackgroundImage
                | PropertyID::BackgroundPosition
                | PropertyID::BorderBottomColor
                | PropertyID::BorderColor
                | PropertyID::BorderLeftColor
                | PropertyID::BorderRightColor
                | PropertyID::BorderTopColor
                | PropertyID::Color
                | PropertyID::Opacity
                | PropertyID::OutlineColor
                | PropertyID::TextDecorationColor
                | PropertyID::ZIndex
                | PropertyID::Invalid
                | PropertyID::Custom
        )
    }
}
