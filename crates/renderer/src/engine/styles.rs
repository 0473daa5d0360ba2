// SPDX-License-Identifier: MIT

//!
//! Styles
//!

use crate::colour::Colour;
use serde::Serialize;
use std::collections::BTreeMap;

/// How text is positioned relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    #[display("start")]
    Start,
    #[display("middle")]
    Middle,
    #[display("end")]
    End,
}

/// An open set of style properties (e.g. `fill`, `stroke-width`).  Keys
/// follow SVG attribute names, but any key can be set and backends ignore
/// what they don't understand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set any property
    pub fn with<K: ToString, V: ToString>(mut self, key: K, value: V) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    pub fn fill(self, colour: Colour) -> Self {
        self.with("fill", colour)
    }

    pub fn stroke(self, colour: Colour) -> Self {
        self.with("stroke", colour)
    }

    pub fn stroke_width(self, width: f64) -> Self {
        self.with("stroke-width", width)
    }

    pub fn font_size(self, size: f64) -> Self {
        self.with("font-size", size)
    }

    pub fn text_anchor(self, anchor: TextAnchor) -> Self {
        self.with("text-anchor", anchor)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Every property, ordered by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// The styles of everything drawn on a timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineStyles {
    /// The horizontal axis line
    pub baseline: Style,

    /// Each year's tick line
    pub tick: Style,

    /// The year printed under a major tick
    pub tick_label: Style,

    /// The circle drawn for an event
    pub event_marker: Style,
    pub event_label: Style,

    /// The rounded box drawn for a span
    pub span_bar: Style,
    pub span_label: Style,
}

impl TimelineStyles {
    /// The default styles, drawn in the given colour rather than black
    pub fn with_ink(colour: Colour) -> Self {
        let line = Style::new().stroke(colour).stroke_width(1.0);
        let label = Style::new()
            .fill(colour)
            .font_size(12.0)
            .text_anchor(TextAnchor::Middle);
        let marker = Style::new().fill(colour);
        Self {
            baseline: line.clone(),
            tick: line,
            tick_label: label.clone(),
            event_marker: marker.clone(),
            event_label: label.clone(),
            span_bar: marker,
            span_label: label,
        }
    }
}

impl Default for TimelineStyles {
    fn default() -> Self {
        Self::with_ink(Colour::black())
    }
}
