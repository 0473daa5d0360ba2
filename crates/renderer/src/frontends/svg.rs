// SPDX-License-Identifier: MIT

//!
//! The SVG frontend
//!
//! Writes an SVG document as text.  Each run of commands in the same layer is
//! wrapped in a `<g>` whose class is the layer name, so the output can be
//! styled with CSS.
//!

use crate::{Canvas, DrawCommand, Layer, LayoutParams, Primitive, Style};
use std::fmt::Write;

/// A [`Canvas`] that builds an SVG document
#[derive(Debug, Clone, PartialEq)]
pub struct SvgCanvas {
    width: f64,
    height: f64,

    /// Everything inside the `<svg>` element so far
    body: String,

    /// The layer of the group currently open (if any)
    open_layer: Option<Layer>,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            open_layer: None,
        }
    }

    /// A canvas the size of the surface described by the layout params
    pub fn for_layout_params(layout_params: &LayoutParams) -> Self {
        Self::new(layout_params.outer_width, layout_params.outer_height)
    }

    /// Close any open group and return the complete document
    pub fn finish(mut self) -> String {
        self.close_group();
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{body}</svg>"#,
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }

    fn close_group(&mut self) {
        if self.open_layer.take().is_some() {
            self.body.push_str("</g>");
        }
    }

    fn enter_layer(&mut self, layer: Layer) {
        if self.open_layer == Some(layer) {
            return;
        }
        self.close_group();
        let _ = write!(self.body, r#"<g class="{layer}">"#);
        self.open_layer = Some(layer);
    }
}

impl Canvas for SvgCanvas {
    fn draw(&mut self, command: &DrawCommand) {
        self.enter_layer(command.layer);

        // Writing to a `String` can't fail
        let _ = match &command.primitive {
            Primitive::Line { from, to, style } => write!(
                self.body,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                attributes(style)
            ),
            Primitive::Circle {
                centre,
                radius,
                style,
            } => write!(
                self.body,
                r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
                centre.x,
                centre.y,
                radius,
                attributes(style)
            ),
            Primitive::Rect {
                position_and_size,
                corner_radius,
                style,
            } => write!(
                self.body,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{corner_radius}" ry="{corner_radius}"{}/>"#,
                position_and_size.position.x,
                position_and_size.position.y,
                position_and_size.width,
                position_and_size.height,
                attributes(style)
            ),
            Primitive::Text {
                position,
                text,
                style,
            } => write!(
                self.body,
                r#"<text x="{}" y="{}"{}>{}</text>"#,
                position.x,
                position.y,
                attributes(style),
                escape(text)
            ),
        };
    }
}

/// The style as SVG attributes (each preceded by a space)
fn attributes(style: &Style) -> String {
    style
        .iter()
        .map(|(key, value)| format!(r#" {}="{}""#, escape(key), escape(value)))
        .collect()
}

/// Escape text for use in element content & attribute values
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
