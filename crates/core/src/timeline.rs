// SPDX-License-Identifier: MIT

//!
//! The timeline model: the range, ticks, and everything that will be drawn
//!

use crate::{
    Category, CategoryData, CategoryHandle, Date, Event, EventData, RangeProblem, ResolvedTicks,
    Span, SpanData, TickConfig, TickSpec, TickUnit, TimelineError, Year, parse_date_string,
};
use log::{debug, trace};
use serde::Serialize;
use std::ops::RangeInclusive;

/// The height (px) of a tick line
pub const DEFAULT_TICK_HEIGHT: f64 = 8.0;

/// The height (px) reserved for the year labels under the ticks
pub const DEFAULT_TEXT_HEIGHT: f64 = 10.0;

/// A pair of dates.  Not necessarily ordered (see [`Timeline::range()`] for a
/// checked range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeRange {
    pub start: Date,
    pub end: Date,
}

impl TimeRange {
    /// Every calendar year touched by the range, in ascending order
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start.year().value()..=self.end.year().value()
    }

    /// Whether the range has no extent
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Holds everything needed to lay out a timeline.
///
/// Categories, events and spans can only be added.  Every method that changes
/// the timeline either succeeds completely or leaves it as it was.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    /// The first day shown
    start: Option<Date>,

    /// The last day shown
    end: Option<Date>,

    /// Major & minor tick specs (either may be unset)
    ticks: TickConfig,

    /// The height of a tick line
    tick_height: f64,

    /// The height reserved for the year labels
    text_height: f64,

    /// The categories in the order they were added
    categories: Vec<Category>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    /// Create an empty timeline with no range set
    pub fn new() -> Self {
        Self {
            start: None,
            end: None,
            ticks: TickConfig::default(),
            tick_height: DEFAULT_TICK_HEIGHT,
            text_height: DEFAULT_TEXT_HEIGHT,
            categories: Vec::new(),
        }
    }

    /// Set both ends of the range.  Neither end is changed unless both parse.
    /// The order of the dates isn't checked here.
    pub fn set_range(&mut self, start: &str, end: &str) -> Result<TimeRange, TimelineError> {
        let start = parse_date_string(start)?;
        let end = parse_date_string(end)?;
        debug!("set range {start} -> {end}");
        self.start = Some(start);
        self.end = Some(end);
        Ok(TimeRange { start, end })
    }

    /// Set the first day shown
    pub fn set_start(&mut self, start: &str) -> Result<Date, TimelineError> {
        let start = parse_date_string(start)?;
        debug!("set start {start}");
        self.start = Some(start);
        Ok(start)
    }

    /// Set the last day shown
    pub fn set_end(&mut self, end: &str) -> Result<Date, TimelineError> {
        let end = parse_date_string(end)?;
        debug!("set end {end}");
        self.end = Some(end);
        Ok(end)
    }

    pub fn start(&self) -> Option<Date> {
        self.start
    }

    pub fn end(&self) -> Option<Date> {
        self.end
    }

    /// The range, if both ends are set and the start isn't after the end
    pub fn range(&self) -> Result<TimeRange, TimelineError> {
        match (self.start, self.end) {
            (None, _) => Err(TimelineError::InvalidRange(RangeProblem::StartUnset)),
            (_, None) => Err(TimelineError::InvalidRange(RangeProblem::EndUnset)),
            (Some(start), Some(end)) if start > end => Err(TimelineError::InvalidRange(
                RangeProblem::Reversed { start, end },
            )),
            (Some(start), Some(end)) => Ok(TimeRange { start, end }),
        }
    }

    pub fn set_major_ticks(&mut self, count: i64, unit: TickUnit) -> Result<(), TimelineError> {
        let spec = TickSpec::new(count, unit)?;
        debug!("set major ticks {spec:?}");
        self.ticks.major = Some(spec);
        Ok(())
    }

    /// Minor ticks are stored but don't (yet) change what is drawn
    pub fn set_minor_ticks(&mut self, count: i64, unit: TickUnit) -> Result<(), TimelineError> {
        let spec = TickSpec::new(count, unit)?;
        debug!("set minor ticks {spec:?}");
        self.ticks.minor = Some(spec);
        Ok(())
    }

    /// The tick specs as set (either may still be `None`)
    pub fn ticks(&self) -> TickConfig {
        self.ticks
    }

    /// The tick specs that will be used, defaults included
    pub fn resolved_ticks(&self) -> ResolvedTicks {
        self.ticks.resolved()
    }

    /// Use the default for whichever of major & minor ticks was never set
    pub fn resolve_tick_defaults(&mut self) {
        self.ticks.resolve_defaults();
    }

    /// Whether the given year gets a major (labelled) tick
    pub fn is_major_tick(&self, year: Year) -> bool {
        self.resolved_ticks().major.falls_on(year)
    }

    pub fn tick_height(&self) -> f64 {
        self.tick_height
    }

    pub fn set_tick_height(&mut self, tick_height: f64) {
        self.tick_height = tick_height;
    }

    pub fn text_height(&self) -> f64 {
        self.text_height
    }

    pub fn set_text_height(&mut self, text_height: f64) {
        self.text_height = text_height;
    }

    /// Add a category, along with any events & spans it has inline.  If any of
    /// them is invalid nothing is added.
    pub fn add_category(&mut self, data: CategoryData) -> Result<CategoryHandle, TimelineError> {
        debug!(
            "add category `{}` ({} events, {} spans)",
            data.name,
            data.events.len(),
            data.spans.len()
        );
        let category = Category::from_data(data)?;
        let handle = CategoryHandle::from_index(self.categories.len());
        self.categories.push(category);
        Ok(handle)
    }

    /// Add an event to an existing category
    pub fn add_event(
        &mut self,
        data: EventData,
        handle: CategoryHandle,
    ) -> Result<(), TimelineError> {
        let category = self.category_mut(handle)?;
        let event = Event::from_data(data)?;
        trace!("add event `{}` on {}", event.name(), event.date());
        category.push_event(event);
        Ok(())
    }

    /// Add a span to an existing category
    pub fn add_span(&mut self, data: SpanData, handle: CategoryHandle) -> Result<(), TimelineError> {
        let category = self.category_mut(handle)?;
        let span = Span::from_data(data)?;
        trace!("add span `{}` {} -> {}", span.name(), span.start(), span.end());
        category.push_span(span);
        Ok(())
    }

    /// All categories in the order they were added
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, handle: CategoryHandle) -> Option<&Category> {
        self.categories.get(handle.index())
    }

    fn category_mut(&mut self, handle: CategoryHandle) -> Result<&mut Category, TimelineError> {
        self.categories
            .get_mut(handle.index())
            .ok_or(TimelineError::UnknownCategory(handle))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{DEFAULT_MAJOR_TICKS, DEFAULT_MINOR_TICKS, DateError, date};

    #[test]
    fn set_range() {
        let mut timeline = Timeline::new();
        let range = timeline.set_range("2000-01-01", "2020-01-01").unwrap();
        assert_eq!(range.start, date!("2000-01-01"));
        assert_eq!(range.end, date!("2020-01-01"));
        assert_eq!(timeline.range().unwrap(), range);
        assert_eq!(range.years().count(), 21);
    }

    #[test]
    fn set_range_is_all_or_nothing() {
        let mut timeline = Timeline::new();
        timeline.set_range("2000-01-01", "2020-01-01").unwrap();
        assert!(timeline.set_range("1990-01-01", "2020-13-01").is_err());
        assert_eq!(timeline.start(), Some(date!("2000-01-01")));
        assert_eq!(timeline.end(), Some(date!("2020-01-01")));
    }

    #[test]
    fn set_range_does_not_check_order() {
        let mut timeline = Timeline::new();
        assert!(timeline.set_range("2020-01-01", "2000-01-01").is_ok());
        assert!(matches!(
            timeline.range(),
            Err(TimelineError::InvalidRange(RangeProblem::Reversed { .. }))
        ));
    }

    #[test]
    fn unset_range() {
        let mut timeline = Timeline::new();
        assert_eq!(
            timeline.range(),
            Err(TimelineError::InvalidRange(RangeProblem::StartUnset))
        );
        timeline.set_start("2000-01-01").unwrap();
        assert_eq!(
            timeline.range(),
            Err(TimelineError::InvalidRange(RangeProblem::EndUnset))
        );
        timeline.set_end("2000-01-01").unwrap();
        assert!(timeline.range().unwrap().is_degenerate());
    }

    #[test]
    fn ticks_resolve_per_axis() {
        let mut timeline = Timeline::new();
        timeline.set_minor_ticks(2, TickUnit::Year).unwrap();
        timeline.resolve_tick_defaults();
        let ticks = timeline.ticks();
        assert_eq!(ticks.major, Some(DEFAULT_MAJOR_TICKS));
        assert_eq!(ticks.minor, Some(TickSpec::new(2, TickUnit::Year).unwrap()));
        assert_ne!(ticks.minor, Some(DEFAULT_MINOR_TICKS));
    }

    #[test]
    fn invalid_tick_count() {
        let mut timeline = Timeline::new();
        assert_eq!(
            timeline.set_major_ticks(0, TickUnit::Year),
            Err(TimelineError::InvalidTickCount(0))
        );
        assert_eq!(timeline.ticks().major, None);
    }

    #[test]
    fn is_major_tick() {
        let mut timeline = Timeline::new();
        let year = Year::try_from(2010).unwrap();
        assert!(timeline.is_major_tick(year));
        timeline.set_major_ticks(20, TickUnit::Year).unwrap();
        assert!(!timeline.is_major_tick(year));
    }

    #[test]
    fn add_category_with_items() {
        let mut timeline = Timeline::new();
        let data = CategoryData::new("Launches")
            .with_event(EventData::new("Apollo 11", "1969-07-20"))
            .with_span(SpanData::new("Skylab", "1973-05-14", "1979-07-11"));
        let handle = timeline.add_category(data).unwrap();
        assert_eq!(handle.index(), 0);

        timeline
            .add_event(EventData::new("Apollo 13", "1970-04-11"), handle)
            .unwrap();
        timeline
            .add_span(SpanData::new("Mir", "1986-02-20", "2001-03-23"), handle)
            .unwrap();

        let category = timeline.category(handle).unwrap();
        let names: Vec<&str> = category.events().iter().map(|event| event.name()).collect();
        assert_eq!(names, ["Apollo 11", "Apollo 13"]);
        assert_eq!(category.spans().len(), 2);
    }

    #[test]
    fn add_category_is_all_or_nothing() {
        let mut timeline = Timeline::new();
        let data = CategoryData::new("Launches")
            .with_event(EventData::new("Sputnik 1", "1957-10-04"))
            .with_span(SpanData::new("Skylab", "1979-07-11", "1973-05-14"));
        assert!(matches!(
            timeline.add_category(data),
            Err(TimelineError::InvalidSpan { .. })
        ));
        assert!(timeline.categories().is_empty());
    }

    #[test]
    fn malformed_event_leaves_timeline_unchanged() {
        let mut timeline = Timeline::new();
        let handle = timeline
            .add_category(
                CategoryData::new("Launches").with_event(EventData::new("Apollo 11", "1969-07-20")),
            )
            .unwrap();
        let before = timeline.clone();

        let result = timeline.add_event(EventData::new("Apollo 12", "2020/03/15"), handle);
        assert!(matches!(
            result,
            Err(TimelineError::InvalidDateFormat(DateError::Format(_)))
        ));
        assert_eq!(timeline, before);
    }

    #[test]
    fn malformed_span_leaves_timeline_unchanged() {
        let mut timeline = Timeline::new();
        let handle = timeline
            .add_category(
                CategoryData::new("Stations")
                    .with_span(SpanData::new("Skylab", "1973-05-14", "1979-07-11")),
            )
            .unwrap();
        let before = timeline.clone();

        let result = timeline.add_span(SpanData::new("Mir", "1986-02-20", "2020/03/15"), handle);
        assert!(matches!(
            result,
            Err(TimelineError::InvalidDateFormat(DateError::Format(_)))
        ));
        let result = timeline.add_span(SpanData::new("Mir", "2020/03/15", "2001-03-23"), handle);
        assert!(matches!(
            result,
            Err(TimelineError::InvalidDateFormat(DateError::Format(_)))
        ));
        assert_eq!(timeline, before);
        assert_eq!(timeline.category(handle).unwrap().spans().len(), 1);
    }

    #[test]
    fn unknown_category() {
        let mut timeline = Timeline::new();
        let mut other = Timeline::new();
        let handle = other.add_category(CategoryData::new("Elsewhere")).unwrap();

        assert_eq!(
            timeline.add_event(EventData::new("Apollo 11", "1969-07-20"), handle),
            Err(TimelineError::UnknownCategory(handle))
        );
        assert_eq!(
            timeline.add_span(SpanData::new("Skylab", "1973-05-14", "1979-07-11"), handle),
            Err(TimelineError::UnknownCategory(handle))
        );
        assert!(timeline.category(handle).is_none());
    }
}
