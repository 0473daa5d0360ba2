// SPDX-License-Identifier: MIT

//!
//! Timeline configuration, either deserialised or built up fluently
//!

use crate::{
    CategoryData, DEFAULT_MAJOR_TICKS, DEFAULT_MINOR_TICKS, DEFAULT_TEXT_HEIGHT,
    DEFAULT_TICK_HEIGHT, TickUnit, Timeline, TimelineError,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// The (unparsed) range of a [`TimelineConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    #[serde(default)]
    pub start: Option<String>,

    #[serde(default)]
    pub end: Option<String>,
}

/// The (unchecked) tick settings of a [`TimelineConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicksConfig {
    #[serde(alias = "number")]
    pub count: i64,

    #[serde(alias = "type")]
    pub unit: TickUnit,
}

/// Everything needed to create a [`Timeline`].  Nothing is checked until the
/// timeline is created (see [`Timeline::from_config()`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineConfig {
    #[serde(default)]
    pub range: RangeConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_ticks: Option<TicksConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor_ticks: Option<TicksConfig>,

    #[serde(default = "default_tick_height")]
    pub tick_height: f64,

    #[serde(default = "default_text_height")]
    pub text_height: f64,

    #[serde(default)]
    pub categories: Vec<CategoryData>,
}

fn default_tick_height() -> f64 {
    DEFAULT_TICK_HEIGHT
}

fn default_text_height() -> f64 {
    DEFAULT_TEXT_HEIGHT
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            range: RangeConfig::default(),
            major_ticks: None,
            minor_ticks: None,
            tick_height: DEFAULT_TICK_HEIGHT,
            text_height: DEFAULT_TEXT_HEIGHT,
            categories: Vec::new(),
        }
    }
}

impl TimelineConfig {
    /// Read a config from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Timeline {
    /// Create a timeline from a config, checking every value.  Returns the
    /// first problem found.
    pub fn from_config(config: TimelineConfig) -> Result<Self, TimelineError> {
        let mut timeline = Timeline::new();
        if let Some(start) = &config.range.start {
            timeline.set_start(start)?;
        }
        if let Some(end) = &config.range.end {
            timeline.set_end(end)?;
        }
        if let Some(ticks) = config.major_ticks {
            timeline.set_major_ticks(ticks.count, ticks.unit)?;
        }
        if let Some(ticks) = config.minor_ticks {
            timeline.set_minor_ticks(ticks.count, ticks.unit)?;
        }
        timeline.set_tick_height(config.tick_height);
        timeline.set_text_height(config.text_height);
        for category in config.categories {
            timeline.add_category(category)?;
        }
        debug!(
            "created timeline with {} categories",
            timeline.categories().len()
        );
        Ok(timeline)
    }

    /// Start building a timeline fluently
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::new()
    }
}

/// Builds a [`Timeline`] one setting at a time
///
/// ```
/// use timeframe_core::{CategoryData, EventData, TickUnit, Timeline};
///
/// let timeline = Timeline::builder()
///     .range("1960-01-01", "1980-01-01")
///     .major_ticks(10, TickUnit::Year)
///     .category(CategoryData::new("Launches").with_event(EventData::new("Apollo 11", "1969-07-20")))
///     .build()
///     .unwrap();
/// assert_eq!(timeline.categories().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineBuilder {
    config: TimelineConfig,
}

impl From<TimelineConfig> for TimelineBuilder {
    fn from(config: TimelineConfig) -> Self {
        Self { config }
    }
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<S: ToString>(mut self, start: S) -> Self {
        self.config.range.start = Some(start.to_string());
        self
    }

    pub fn end<S: ToString>(mut self, end: S) -> Self {
        self.config.range.end = Some(end.to_string());
        self
    }

    pub fn range<S: ToString, E: ToString>(self, start: S, end: E) -> Self {
        self.start(start).end(end)
    }

    pub fn major_ticks(mut self, count: i64, unit: TickUnit) -> Self {
        self.config.major_ticks = Some(TicksConfig { count, unit });
        self
    }

    pub fn minor_ticks(mut self, count: i64, unit: TickUnit) -> Self {
        self.config.minor_ticks = Some(TicksConfig { count, unit });
        self
    }

    /// Explicitly use the default major & minor ticks (overriding anything
    /// set previously)
    pub fn auto_ticks(self) -> Self {
        self.major_ticks(
            i64::from(DEFAULT_MAJOR_TICKS.count().value()),
            DEFAULT_MAJOR_TICKS.unit(),
        )
        .minor_ticks(
            i64::from(DEFAULT_MINOR_TICKS.count().value()),
            DEFAULT_MINOR_TICKS.unit(),
        )
    }

    pub fn tick_height(mut self, tick_height: f64) -> Self {
        self.config.tick_height = tick_height;
        self
    }

    pub fn text_height(mut self, text_height: f64) -> Self {
        self.config.text_height = text_height;
        self
    }

    pub fn category(mut self, category: CategoryData) -> Self {
        self.config.categories.push(category);
        self
    }

    /// The config built up so far
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Check everything and create the timeline
    pub fn build(self) -> Result<Timeline, TimelineError> {
        Timeline::from_config(self.config)
    }
}
