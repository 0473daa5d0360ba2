// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::{
    DEFAULT_OUTER_HEIGHT, DEFAULT_OUTER_WIDTH, DEFAULT_PADDING, LayoutError, Position,
};
use serde::{Deserialize, Serialize};

/// Layout parameters that users can adjust.  Only the outer width usually
/// changes (it's whatever the host has available).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// The full width of the drawing surface
    pub outer_width: f64,

    /// The full height of the drawing surface
    pub outer_height: f64,

    /// Space left and right of the axis
    pub padding_x: f64,

    /// Space above and below everything drawn
    pub padding_y: f64,

    /// Radius of the circle drawn for an event
    pub event_radius: f64,

    /// Height of the box drawn for a span
    pub span_height: f64,
    pub span_corner_radius: f64,

    /// How far above the item baseline a span's box starts
    pub span_offset_y: f64,

    /// How far above the item baseline event & span labels are drawn
    pub label_offset_y: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            outer_width: DEFAULT_OUTER_WIDTH,
            outer_height: DEFAULT_OUTER_HEIGHT,
            padding_x: DEFAULT_PADDING,
            padding_y: DEFAULT_PADDING,
            event_radius: 5.0,
            span_height: 7.0,
            span_corner_radius: 5.0,
            span_offset_y: 4.0,
            label_offset_y: 8.0,
        }
    }
}

impl LayoutParams {
    /// The default params for a surface of the given width
    pub fn with_width(outer_width: f64) -> Self {
        LayoutParams {
            outer_width,
            ..Default::default()
        }
    }

    /// The width available to the axis (outer width less padding)
    pub fn drawable_width(&self) -> f64 {
        self.outer_width - (2.0 * self.padding_x)
    }

    /// The height available (outer height less padding)
    pub fn drawable_height(&self) -> f64 {
        self.outer_height - (2.0 * self.padding_y)
    }

    /// Make sure the params describe a surface that something can be drawn on
    pub(crate) fn check(&self) -> Result<(), LayoutError> {
        let drawable_width = self.drawable_width();
        if !drawable_width.is_finite() || drawable_width < 0.0 {
            return Err(LayoutError::InvalidWidth(self.outer_width));
        }
        let all_finite = [
            self.outer_height,
            self.padding_y,
            self.event_radius,
            self.span_height,
            self.span_corner_radius,
            self.span_offset_y,
            self.label_offset_y,
        ]
        .iter()
        .all(|value| value.is_finite());
        if !all_finite {
            return Err(LayoutError::NonFiniteGeometry);
        }
        Ok(())
    }
}

/// A box that specifies the location and size of something (e.g. the bar
/// drawn for a span)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionAndSize {
    /// The smallest x/y values (boxes grow down and to the right from here)
    pub position: Position,

    /// The width of the box (from which the largest x value can be derived)
    pub width: f64,

    /// The height of the box
    pub height: f64,
}

impl PositionAndSize {
    /// Calculate the largest x value of the box
    pub fn max_x(&self) -> f64 {
        self.position.x + self.width
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// The vertical positions everything is drawn at.  These depend only on the
/// layout params and the timeline's tick & text heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VerticalGuides {
    /// The horizontal axis line (offset by half a pixel for crisp 1px lines)
    pub baseline_y: f64,

    /// Top of each tick line
    pub tick_top_y: f64,

    /// Bottom of each tick line
    pub tick_bottom_y: f64,

    /// Where year labels are drawn
    pub tick_label_y: f64,

    /// Centre line of event circles
    pub item_y: f64,
}

impl VerticalGuides {
    pub fn new(layout_params: &LayoutParams, tick_height: f64, text_height: f64) -> Self {
        let bottom = layout_params.drawable_height() + layout_params.padding_y;
        VerticalGuides {
            baseline_y: bottom - text_height - tick_height - 0.5,
            tick_top_y: bottom - text_height - tick_height,
            tick_bottom_y: bottom - text_height,
            tick_label_y: bottom,
            item_y: layout_params.drawable_height() - text_height - tick_height
                + layout_params.padding_y,
        }
    }
}
