// SPDX-License-Identifier: MIT

//!
//! The `timeframe-renderer` engine
//!

mod consts;
mod helpers;
mod layout_params;
mod point;
mod primitives;
mod projection;
mod styles;
mod ticks;

pub(crate) use helpers::*;
pub(crate) use layout_params::VerticalGuides;

pub use consts::*;
pub use layout_params::{LayoutParams, PositionAndSize};
pub use point::*;
pub use primitives::*;
pub use projection::*;
pub use styles::*;
pub use ticks::*;

use crate::frontends::Canvas;
use log::{debug, trace};
use thiserror::Error;
use timeframe_core::{Category, Timeline, TimelineError};

/// Errors that can arise when laying out a timeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error(transparent)]
    Timeline(#[from] TimelineError),

    #[error("an outer width of {0} leaves no room to draw the axis")]
    InvalidWidth(f64),

    #[error("layout produced a coordinate or size that isn't a finite number")]
    NonFiniteGeometry,
}

/// The core `timeframe-renderer` engine.  It turns a [`Timeline`] into an
/// ordered list of [`DrawCommand`]s for a given surface size.  The engine
/// holds no timeline state and never modifies the timeline it lays out.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    /// Sizes & spacing
    layout_params: LayoutParams,

    /// What everything looks like
    styles: TimelineStyles,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_layout_params(LayoutParams::default())
    }
}

impl Engine {
    /// Create an engine for a surface of the given width (using the default
    /// height, padding and styles)
    pub fn new(outer_width: f64) -> Self {
        Self::with_layout_params(LayoutParams::with_width(outer_width))
    }

    pub fn with_layout_params(layout_params: LayoutParams) -> Self {
        Self {
            layout_params,
            styles: TimelineStyles::default(),
        }
    }

    pub fn layout_params(&self) -> &LayoutParams {
        &self.layout_params
    }

    pub fn set_layout_params(&mut self, layout_params: LayoutParams) {
        debug!("engine set layout params");
        self.layout_params = layout_params;
    }

    /// To be called when the host's available width changes
    pub fn set_outer_width(&mut self, outer_width: f64) {
        debug!("engine set outer width to {outer_width}");
        self.layout_params.outer_width = outer_width;
    }

    pub fn styles(&self) -> &TimelineStyles {
        &self.styles
    }

    pub fn set_styles(&mut self, styles: TimelineStyles) {
        debug!("engine set styles");
        self.styles = styles;
    }

    /// The date to x projection for the timeline at the current width
    pub fn projection(&self, timeline: &Timeline) -> Result<Projection, LayoutError> {
        self.layout_params.check()?;
        let projection = Projection::new(
            timeline.range()?,
            self.layout_params.drawable_width(),
            self.layout_params.padding_x,
        )?;
        Ok(projection)
    }

    /// The ticks along the axis (tick defaults are applied to a copy of the
    /// timeline's tick config)
    pub fn ticks(&self, timeline: &Timeline) -> Result<Vec<Tick>, LayoutError> {
        let projection = self.projection(timeline)?;
        Ok(generate_ticks(&projection, &timeline.resolved_ticks())?)
    }

    /// Lay out the timeline.  Either every command is returned, or none are.
    pub fn layout(&self, timeline: &Timeline) -> Result<Vec<DrawCommand>, LayoutError> {
        let projection = self.projection(timeline)?;
        let ticks = generate_ticks(&projection, &timeline.resolved_ticks())?;
        let guides = VerticalGuides::new(
            &self.layout_params,
            timeline.tick_height(),
            timeline.text_height(),
        );
        debug!(
            "laying out {} categories with {} ticks at width {}",
            timeline.categories().len(),
            ticks.len(),
            self.layout_params.outer_width
        );

        let mut commands = self.background(&ticks, &guides);
        for category in timeline.categories() {
            self.category(category, &projection, &guides, &mut commands);
        }

        if !commands.iter().all(DrawCommand::is_finite) {
            return Err(LayoutError::NonFiniteGeometry);
        }
        Ok(commands)
    }

    /// Lay out the timeline and pass every command to the canvas.  Nothing is
    /// drawn if the layout fails.
    pub fn draw<C: Canvas>(&self, timeline: &Timeline, canvas: &mut C) -> Result<(), LayoutError> {
        for command in self.layout(timeline)? {
            canvas.draw(&command);
        }
        Ok(())
    }

    /// The baseline, then each tick's label (for major ticks) and line
    fn background(&self, ticks: &[Tick], guides: &VerticalGuides) -> Vec<DrawCommand> {
        let padding_x = self.layout_params.padding_x;
        let mut commands = Vec::with_capacity(1 + 2 * ticks.len());
        commands.push(DrawCommand::line(
            Layer::Background,
            Point::new(padding_x, guides.baseline_y),
            Point::new(self.layout_params.drawable_width() + padding_x, guides.baseline_y),
            &self.styles.baseline,
        ));
        for tick in ticks {
            trace!("tick {} ({:?}) at x {}", tick.year, tick.kind, tick.x);
            if tick.is_major() {
                commands.push(DrawCommand::text(
                    Layer::Background,
                    Point::new(tick.x, guides.tick_label_y),
                    tick.year,
                    &self.styles.tick_label,
                ));
            }
            commands.push(DrawCommand::line(
                Layer::Background,
                Point::new(tick.x, guides.tick_top_y),
                Point::new(tick.x, guides.tick_bottom_y),
                &self.styles.tick,
            ));
        }
        commands
    }

    /// A category's events, then its spans
    fn category(
        &self,
        category: &Category,
        projection: &Projection,
        guides: &VerticalGuides,
        commands: &mut Vec<DrawCommand>,
    ) {
        let params = &self.layout_params;
        let label_y = guides.item_y - params.label_offset_y;

        for event in category.events() {
            let x = projection.x(event.date());
            trace!("event `{}` at x {x}", event.name());
            commands.push(DrawCommand::circle(
                Layer::Event,
                Point::new(x, guides.item_y),
                params.event_radius,
                &self.styles.event_marker,
            ));
            commands.push(DrawCommand::text(
                Layer::Event,
                Point::new(x, label_y),
                event.name(),
                &self.styles.event_label,
            ));
        }

        for span in category.spans() {
            let start_x = projection.x(span.start());
            let end_x = projection.x(span.end());
            trace!("span `{}` from x {start_x} to {end_x}", span.name());
            let bar = PositionAndSize {
                position: Point::new(start_x, guides.item_y - params.span_offset_y),
                width: end_x - start_x,
                height: params.span_height,
            };
            commands.push(DrawCommand::rect(
                Layer::Span,
                bar,
                params.span_corner_radius,
                &self.styles.span_bar,
            ));
            commands.push(DrawCommand::text(
                Layer::Span,
                Point::new(midpoint(start_x, end_x), label_y),
                span.name(),
                &self.styles.span_label,
            ));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use timeframe_core::{CategoryData, EventData, RangeProblem, SpanData, TickUnit};

    fn timeline(start: &str, end: &str) -> Timeline {
        let mut timeline = Timeline::new();
        timeline.set_range(start, end).unwrap();
        timeline
    }

    fn apollo() -> Timeline {
        let mut timeline = timeline("1960-01-01", "1980-01-01");
        timeline
            .add_category(
                CategoryData::new("Launches").with_event(EventData::new("Apollo 11", "1969-07-20")),
            )
            .unwrap();
        timeline
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|command| match &command.primitive {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
        assert_send_sync::<Timeline>();
        assert_send_sync::<DrawCommand>();
    }

    #[test]
    fn no_categories() {
        let commands = Engine::new(400.0)
            .layout(&timeline("2000-01-01", "2020-01-01"))
            .unwrap();
        assert!(commands.iter().all(|command| command.layer == Layer::Background));

        // Baseline + 21 tick lines + 5 labels
        assert_eq!(commands.len(), 27);
        let lines = commands
            .iter()
            .filter(|command| matches!(command.primitive, Primitive::Line { .. }))
            .count();
        assert_eq!(lines, 22);
        assert_eq!(texts(&commands), ["2000", "2005", "2010", "2015", "2020"]);
    }

    #[test]
    fn background_order() {
        let commands = Engine::new(400.0)
            .layout(&timeline("2000-01-01", "2001-01-01"))
            .unwrap();

        // Baseline, 2000 label, 2000 tick, 2001 tick
        assert_eq!(commands.len(), 4);
        assert_eq!(
            commands[0].primitive,
            Primitive::Line {
                from: Point::new(20.0, 61.5),
                to: Point::new(380.0, 61.5),
                style: TimelineStyles::default().baseline,
            }
        );
        assert!(matches!(
            &commands[1].primitive,
            Primitive::Text { position, text, .. }
                if *position == Point::new(20.5, 80.0) && text == "2000"
        ));
        assert!(matches!(
            commands[2].primitive,
            Primitive::Line { from, to, .. }
                if from == Point::new(20.5, 62.0) && to == Point::new(20.5, 70.0)
        ));
        assert!(matches!(
            commands[3].primitive,
            Primitive::Line { from, .. } if from == Point::new(380.5, 62.0)
        ));
    }

    #[test]
    fn one_event() {
        let commands = Engine::new(400.0).layout(&apollo()).unwrap();
        let items: Vec<&DrawCommand> = commands
            .iter()
            .filter(|command| command.layer == Layer::Event)
            .collect();
        assert_eq!(items.len(), 2);

        let Primitive::Circle { centre, radius, .. } = items[0].primitive else {
            panic!("expected a circle, got {:?}", items[0]);
        };
        assert!(centre.x > 20.0 && centre.x < 380.0);
        assert_eq!(centre.y, 62.0);
        assert_eq!(radius, 5.0);

        let Primitive::Text { position, text, .. } = &items[1].primitive else {
            panic!("expected text, got {:?}", items[1]);
        };
        assert_eq!(text, "Apollo 11");
        assert_eq!(*position, Point::new(centre.x, 54.0));
    }

    #[test]
    fn span_geometry() {
        let mut timeline = timeline("2000-01-01", "2020-01-01");
        timeline
            .add_category(
                CategoryData::new("Decade")
                    .with_span(SpanData::new("2000s", "2000-01-01", "2010-01-01")),
            )
            .unwrap();
        let commands = Engine::new(400.0).layout(&timeline).unwrap();
        let spans: Vec<&DrawCommand> = commands
            .iter()
            .filter(|command| command.layer == Layer::Span)
            .collect();
        assert_eq!(spans.len(), 2);

        let Primitive::Rect {
            position_and_size,
            corner_radius,
            ..
        } = spans[0].primitive
        else {
            panic!("expected a rect, got {:?}", spans[0]);
        };
        assert_eq!(position_and_size.position, Point::new(20.0, 58.0));
        assert_eq!(position_and_size.height, 7.0);
        assert_eq!(corner_radius, 5.0);

        let Primitive::Text { position, .. } = &spans[1].primitive else {
            panic!("expected text, got {:?}", spans[1]);
        };
        assert_eq!(position.x, midpoint(20.0, position_and_size.max_x()));
        assert_eq!(position.y, 54.0);
    }

    #[test]
    fn zero_width_span() {
        let mut timeline = timeline("2000-01-01", "2020-01-01");
        timeline
            .add_category(
                CategoryData::new("Moments")
                    .with_span(SpanData::new("Instant", "2010-06-01", "2010-06-01")),
            )
            .unwrap();
        let commands = Engine::new(400.0).layout(&timeline).unwrap();
        let rect = commands
            .iter()
            .find_map(|command| match command.primitive {
                Primitive::Rect {
                    position_and_size, ..
                } => Some(position_and_size),
                _ => None,
            })
            .unwrap();
        assert_eq!(rect.width, 0.0);
    }

    #[test]
    fn item_order() {
        let mut timeline = timeline("2000-01-01", "2020-01-01");
        timeline
            .add_category(
                CategoryData::new("First")
                    .with_span(SpanData::new("A span", "2001-01-01", "2002-01-01"))
                    .with_event(EventData::new("An event", "2003-01-01")),
            )
            .unwrap();
        let second = timeline.add_category(CategoryData::new("Second")).unwrap();
        timeline
            .add_event(EventData::new("Later event", "2004-01-01"), second)
            .unwrap();

        let commands = Engine::new(400.0).layout(&timeline).unwrap();
        let items: Vec<DrawCommand> = commands
            .into_iter()
            .filter(|command| command.layer != Layer::Background)
            .collect();
        assert_eq!(texts(&items), ["An event", "A span", "Later event"]);
        let layers: Vec<Layer> = items.iter().map(|command| command.layer).collect();
        assert_eq!(
            layers,
            [
                Layer::Event,
                Layer::Event,
                Layer::Span,
                Layer::Span,
                Layer::Event,
                Layer::Event
            ]
        );
    }

    #[test]
    fn explicit_major_ticks() {
        let mut timeline = timeline("2000-01-01", "2020-01-01");
        timeline.set_major_ticks(10, TickUnit::Year).unwrap();
        let commands = Engine::new(400.0).layout(&timeline).unwrap();
        assert_eq!(texts(&commands), ["2000", "2010", "2020"]);
    }

    #[test]
    fn range_errors() {
        let engine = Engine::new(400.0);

        assert_eq!(
            engine.layout(&Timeline::new()),
            Err(LayoutError::Timeline(TimelineError::InvalidRange(
                RangeProblem::StartUnset
            )))
        );

        let mut no_end = Timeline::new();
        no_end.set_start("2000-01-01").unwrap();
        assert_eq!(
            engine.layout(&no_end),
            Err(LayoutError::Timeline(TimelineError::InvalidRange(
                RangeProblem::EndUnset
            )))
        );

        assert!(matches!(
            engine.layout(&timeline("2020-01-01", "2000-01-01")),
            Err(LayoutError::Timeline(TimelineError::InvalidRange(
                RangeProblem::Reversed { .. }
            )))
        ));

        assert!(matches!(
            engine.layout(&timeline("2000-01-01", "2000-01-01")),
            Err(LayoutError::Timeline(TimelineError::DegenerateRange(_)))
        ));
    }

    #[test]
    fn invalid_width() {
        let timeline = apollo();
        for width in [f64::NAN, f64::INFINITY, -1.0, 39.0] {
            assert!(matches!(
                Engine::new(width).layout(&timeline),
                Err(LayoutError::InvalidWidth(_))
            ));
        }

        // Everything collapses onto the padding, but it's still drawable
        assert!(Engine::new(40.0).layout(&timeline).is_ok());
    }

    #[test]
    fn non_finite_geometry() {
        let mut timeline = apollo();
        timeline.set_text_height(f64::NAN);
        assert_eq!(
            Engine::new(400.0).layout(&timeline),
            Err(LayoutError::NonFiniteGeometry)
        );
    }

    #[test]
    fn layout_leaves_timeline_alone() {
        let timeline = apollo();
        let before = timeline.clone();
        let engine = Engine::new(400.0);
        let first = engine.layout(&timeline).unwrap();
        let second = engine.layout(&timeline).unwrap();
        assert_eq!(first, second);
        assert_eq!(timeline, before);
        assert_eq!(timeline.ticks().major, None);
    }

    #[test]
    fn width_changes() {
        let timeline = apollo();
        let mut engine = Engine::new(400.0);
        let narrow = engine.ticks(&timeline).unwrap();
        engine.set_outer_width(800.0);
        let wide = engine.ticks(&timeline).unwrap();
        assert_eq!(narrow.len(), wide.len());
        assert!(narrow.last().unwrap().x < wide.last().unwrap().x);
    }

    #[test]
    fn draw_feeds_canvas() {
        let timeline = apollo();
        let engine = Engine::new(400.0);
        let mut canvas: Vec<DrawCommand> = Vec::new();
        engine.draw(&timeline, &mut canvas).unwrap();
        assert_eq!(canvas, engine.layout(&timeline).unwrap());
    }

    #[test]
    fn draw_nothing_on_error() {
        let mut canvas: Vec<DrawCommand> = Vec::new();
        let result = Engine::new(400.0).draw(&Timeline::new(), &mut canvas);
        assert!(result.is_err());
        assert!(canvas.is_empty());
    }
}
