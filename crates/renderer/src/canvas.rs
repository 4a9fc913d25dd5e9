//! Paint target abstraction

use ring_charts_shared::Rgb;

use crate::geometry::ArcPath;

/// Anything that can fill an arc-ring region with a solid color.
pub trait RingCanvas {
    fn fill_path(&mut self, path: &ArcPath, color: Rgb);
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub path: ArcPath,
    pub color: Rgb,
}

/// Canvas that records fills, for hosts that replay draw lists.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RingCanvas for RecordingCanvas {
    fn fill_path(&mut self, path: &ArcPath, color: Rgb) {
        self.commands.push(DrawCommand { path: *path, color });
    }
}
