//! Axis-aligned rectangle geometry
//!
//! Screen-space convention: x grows rightward, y grows downward, so `top`
//! is the smaller y coordinate and `bottom` the larger one.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rectangle from its center point
    pub fn from_center(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Strict-overlap test; rectangles that merely share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Move the rectangle so its right edge sits at `x`
    pub fn clamp_right_to(&mut self, x: f32) {
        self.x = x - self.w;
    }

    /// Move the rectangle so its left edge sits at `x`
    pub fn clamp_left_to(&mut self, x: f32) {
        self.x = x;
    }

    /// Move the rectangle so its bottom edge sits at `y`
    pub fn clamp_bottom_to(&mut self, y: f32) {
        self.y = y - self.h;
    }

    /// Move the rectangle so its top edge sits at `y`
    pub fn clamp_top_to(&mut self, y: f32) {
        self.y = y;
    }
}
