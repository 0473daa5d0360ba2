// SPDX-License-Identifier: MIT

//!
//! Categories and the events & spans they group
//!

use crate::{Date, TimelineError, parse_date_string};
use serde::{Deserialize, Serialize};

/// Refers to a [`Category`] that has been added to a
/// [`Timeline`](crate::Timeline).  Only meaningful for the timeline that
/// returned it.
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct CategoryHandle(usize);

impl CategoryHandle {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// The position of the category (in insertion order)
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The unparsed description of an [`Event`] (e.g. as found in a config file)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    pub name: String,
    pub date: String,
}

impl EventData {
    pub fn new<N: ToString, D: ToString>(name: N, date: D) -> Self {
        Self {
            name: name.to_string(),
            date: date.to_string(),
        }
    }
}

/// The unparsed description of a [`Span`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanData {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl SpanData {
    pub fn new<N: ToString, S: ToString, E: ToString>(name: N, start: S, end: E) -> Self {
        Self {
            name: name.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// The unparsed description of a [`Category`], optionally with its events and
/// spans inline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    pub name: String,

    #[serde(default, alias = "color", skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,

    #[serde(default)]
    pub events: Vec<EventData>,

    #[serde(default)]
    pub spans: Vec<SpanData>,
}

impl CategoryData {
    pub fn new<N: ToString>(name: N) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_colour<C: ToString>(mut self, colour: C) -> Self {
        self.colour = Some(colour.to_string());
        self
    }

    pub fn with_event(mut self, event: EventData) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_span(mut self, span: SpanData) -> Self {
        self.spans.push(span);
        self
    }
}

/// An instantaneous point on the timeline
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    name: String,
    date: Date,
}

impl Event {
    /// Create an event if the date can be parsed
    pub fn from_data(data: EventData) -> Result<Self, TimelineError> {
        Ok(Self {
            date: parse_date_string(&data.date)?,
            name: data.name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> Date {
        self.date
    }
}

/// A duration on the timeline.  Never ends before it starts, but may start
/// and end on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    name: String,
    start: Date,
    end: Date,
}

impl Span {
    /// Create a span if both dates can be parsed and the span doesn't end
    /// before it starts
    pub fn from_data(data: SpanData) -> Result<Self, TimelineError> {
        let start = parse_date_string(&data.start)?;
        let end = parse_date_string(&data.end)?;
        if end < start {
            return Err(TimelineError::InvalidSpan {
                name: data.name,
                start,
                end,
            });
        }
        Ok(Self {
            name: data.name,
            start,
            end,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }
}

/// A named group of events & spans
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    name: String,

    /// Not used when laying out (a hook for styling)
    colour: Option<String>,

    events: Vec<Event>,
    spans: Vec<Span>,
}

impl Category {
    /// Create a category along with all of its inline events & spans.  Fails
    /// on the first event or span that isn't valid.
    pub fn from_data(data: CategoryData) -> Result<Self, TimelineError> {
        let events = data
            .events
            .into_iter()
            .map(Event::from_data)
            .collect::<Result<Vec<_>, _>>()?;
        let spans = data
            .spans
            .into_iter()
            .map(Span::from_data)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: data.name,
            colour: data.colour,
            events,
            spans,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colour(&self) -> Option<&str> {
        self.colour.as_deref()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub(crate) fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub(crate) fn push_span(&mut self, span: Span) {
        self.spans.push(span);
    }
}
