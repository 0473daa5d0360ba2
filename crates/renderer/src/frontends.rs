// SPDX-License-Identifier: MIT

//!
//! Frontends (things the engine can draw on)
//!

pub mod svg;

use crate::DrawCommand;

/// A drawing surface.  The engine hands over commands in order, one at a time,
/// and only once the whole timeline has been laid out.
pub trait Canvas {
    fn draw(&mut self, command: &DrawCommand);
}

/// Collects the commands (handy for tests and for serializing a layout)
impl Canvas for Vec<DrawCommand> {
    fn draw(&mut self, command: &DrawCommand) {
        self.push(command.clone());
    }
}
