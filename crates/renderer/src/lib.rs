// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Timeframe project*
//!
//! This crate lays out timelines.  The core of the crate is a platform
//! independent engine responsible for:
//!
//! - Projecting dates onto x values
//! - Generating the year ticks along the axis
//! - Turning a [`Timeline`](timeframe_core::Timeline) into an ordered list of
//!   backend-agnostic [`DrawCommand`]s
//!
//! The rest of the crate holds frontends that draw those commands.  There is
//! currently only an SVG frontend, but anything implementing [`Canvas`] can be
//! drawn on.
//!
//! ## Usage
//!
//! ```
//! use timeframe_core::{CategoryData, EventData, Timeline};
//! use timeframe_renderer::{Engine, SvgCanvas};
//!
//! let mut timeline = Timeline::new();
//! timeline.set_range("1960-01-01", "1980-01-01").unwrap();
//! timeline
//!     .add_category(
//!         CategoryData::new("Launches").with_event(EventData::new("Apollo 11", "1969-07-20")),
//!     )
//!     .unwrap();
//!
//! let engine = Engine::new(800.0);
//! let mut canvas = SvgCanvas::for_layout_params(engine.layout_params());
//! engine.draw(&timeline, &mut canvas).unwrap();
//! let svg = canvas.finish();
//! assert!(svg.contains("Apollo 11"));
//! ```
//!

pub mod colour;
pub mod engine;
pub mod frontends;

pub use colour::*;
pub use engine::*;
pub use frontends::Canvas;
pub use frontends::svg::SvgCanvas;
