// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Timeframe project*
//!
//! This crate defines the timeline model: the date range, the tick settings,
//! and the categories of events & spans that are to be laid out.  It also
//! holds the one date parser used for every date Timeframe reads.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.  The layout itself
//! lives in the `timeframe-renderer` crate.
//!
//! ```
//! use timeframe_core::{CategoryData, EventData, Timeline};
//!
//! let mut timeline = Timeline::new();
//! timeline.set_range("1960-01-01", "1980-01-01").unwrap();
//! let launches = timeline.add_category(CategoryData::new("Launches")).unwrap();
//! timeline
//!     .add_event(EventData::new("Apollo 11", "1969-07-20"), launches)
//!     .unwrap();
//! ```
//!

mod category;
mod config;
mod date;
mod error;
mod ticks;
mod timeline;

pub use category::*;
pub use config::*;
pub use date::*;
pub use error::*;
pub use ticks::*;
pub use timeline::*;

/// Create a [`Date`] using `date!("YYYY-MM-DD")`, with compile time checking of
/// the value.  [`Date`] must be in scope.
pub use timeframe_macros::date;
