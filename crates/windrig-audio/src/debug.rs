//! Debug visualization of the wind effect.
//!
//! Three lines are emitted per tick: listener to source in white, and each
//! ear to the source tinted by that ear's volume. Drawing only happens in
//! debug builds.

use glam::{Vec3, Vec4};

use crate::controller::WindEffect;

/// A colored line segment in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub start: Vec3,
    pub end: Vec3,
    /// RGBA color
    pub color: Vec4,
}

/// World positions the debug lines are anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DebugAnchors {
    pub listener: Vec3,
    pub source: Vec3,
    pub left_ear: Vec3,
    pub right_ear: Vec3,
}

/// Line renderer provided by the host.
pub trait DebugDraw {
    fn draw_line(&mut self, line: DebugLine);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDebugDraw;

impl DebugDraw for NullDebugDraw {
    fn draw_line(&mut self, _line: DebugLine) {}
}

/// Collects lines for a renderer to consume once per frame.
#[derive(Debug, Clone, Default)]
pub struct DebugLineBuffer {
    lines: Vec<DebugLine>,
}

impl DebugLineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[DebugLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Take the collected lines, leaving the buffer empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, DebugLine> {
        self.lines.drain(..)
    }
}

impl DebugDraw for DebugLineBuffer {
    fn draw_line(&mut self, line: DebugLine) {
        self.lines.push(line);
    }
}

impl WindEffect {
    /// Lines visualizing this effect: listener, left ear, right ear.
    pub fn debug_lines(&self, anchors: &DebugAnchors) -> [DebugLine; 3] {
        let tint = |volume: f32| Vec4::new(0.0, volume, volume, 1.0);
        [
            DebugLine {
                start: anchors.listener,
                end: anchors.source,
                color: Vec4::ONE,
            },
            DebugLine {
                start: anchors.left_ear,
                end: anchors.source,
                color: tint(self.left.volume),
            },
            DebugLine {
                start: anchors.right_ear,
                end: anchors.source,
                color: tint(self.right.volume),
            },
        ]
    }
}

/// Emit the debug lines of `effect` into `draw`. No-op in release builds.
pub fn draw_wind_lines(effect: &WindEffect, anchors: &DebugAnchors, draw: &mut impl DebugDraw) {
    if !cfg!(debug_assertions) {
        return;
    }
    for line in effect.debug_lines(anchors) {
        draw.draw_line(line);
    }
}
