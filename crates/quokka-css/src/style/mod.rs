//! Computed style records and the cascade.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//! "The computed value is the result of resolving the specified value..."

/// Per-element computed style records.
pub mod computed;
/// The cascade: declared values + inheritance → computed records.
pub mod computer;

pub use computed::{
    BackgroundLayerData, BorderData, ComputedStyle, LineHeight, SideValues, TransformOperation,
    initial_value,
};
pub use computer::{ComputeStyleError, DeclaredStyles, StyleComputer};
