// SPDX-License-Identifier: MIT

//!
//! Primitives
//!

use crate::{Point, PositionAndSize, Style};
use serde::Serialize;

/// The logical layer a draw command belongs to (a hook for styling, e.g. a CSS
/// class)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// The axis, ticks, and year labels
    #[display("background")]
    Background,

    #[display("event")]
    Event,

    #[display("span")]
    Span,
}

/// Something a backend can draw
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        style: Style,
    },
    Circle {
        centre: Point,
        radius: f64,
        style: Style,
    },
    Rect {
        position_and_size: PositionAndSize,
        corner_radius: f64,
        style: Style,
    },
    /// Text positioned by its anchor point (see the style's `text-anchor`)
    Text {
        position: Point,
        text: String,
        style: Style,
    },
}

impl Primitive {
    /// Whether every coordinate & size is a finite number
    pub fn is_finite(&self) -> bool {
        match self {
            Primitive::Line { from, to, .. } => from.is_finite() && to.is_finite(),
            Primitive::Circle { centre, radius, .. } => centre.is_finite() && radius.is_finite(),
            Primitive::Rect {
                position_and_size,
                corner_radius,
                ..
            } => position_and_size.is_finite() && corner_radius.is_finite(),
            Primitive::Text { position, .. } => position.is_finite(),
        }
    }
}

/// A [`Primitive`] and the layer it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCommand {
    pub layer: Layer,

    #[serde(flatten)]
    pub primitive: Primitive,
}

impl DrawCommand {
    pub fn line(layer: Layer, from: Point, to: Point, style: &Style) -> Self {
        DrawCommand {
            layer,
            primitive: Primitive::Line {
                from,
                to,
                style: style.clone(),
            },
        }
    }

    pub fn circle(layer: Layer, centre: Point, radius: f64, style: &Style) -> Self {
        DrawCommand {
            layer,
            primitive: Primitive::Circle {
                centre,
                radius,
                style: style.clone(),
            },
        }
    }

    pub fn rect(
        layer: Layer,
        position_and_size: PositionAndSize,
        corner_radius: f64,
        style: &Style,
    ) -> Self {
        DrawCommand {
            layer,
            primitive: Primitive::Rect {
                position_and_size,
                corner_radius,
                style: style.clone(),
            },
        }
    }

    pub fn text<S: ToString>(layer: Layer, position: Point, text: S, style: &Style) -> Self {
        DrawCommand {
            layer,
            primitive: Primitive::Text {
                position,
                text: text.to_string(),
                style: style.clone(),
            },
        }
    }

    pub fn is_finite(&self) -> bool {
        self.primitive.is_finite()
    }
}
