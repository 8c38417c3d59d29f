//! Rectangle and viewport geometry
//!
//! The viewport is a vertically scrolling window over a document laid out in
//! absolute coordinates. Visible-ratio math lives here so the observer crate
//! only deals in ratios, never raw pixels.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Intersection with another rect, or `None` if they don't overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.width).min(other.x + other.width);
        let y1 = (self.y + self.height).min(other.y + other.height);

        if x1 > x0 && y1 > y0 {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        } else {
            None
        }
    }
}

/// The scrolling window the observer measures elements against.
///
/// Only vertical scrolling is modelled; `scroll_y` is the document-space
/// coordinate of the viewport's top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// Scroll so the viewport's top edge sits at `y`.
    pub fn scroll_to(&mut self, y: f32) {
        self.scroll_y = y;
    }

    /// Scroll by a delta (positive = down the page).
    pub fn scroll_by(&mut self, dy: f32) {
        self.scroll_y += dy;
    }

    /// The viewport as a rect in document coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.height)
    }

    /// Fraction of `rect`'s area currently inside the viewport, in `[0, 1]`.
    ///
    /// Zero-area rects report 0.0 so degenerate elements never trigger.
    pub fn visible_ratio(&self, rect: &Rect) -> f32 {
        let area = rect.area();
        if area <= 0.0 {
            return 0.0;
        }
        match self.rect().intersect(rect) {
            Some(overlap) => (overlap.area() / area).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}
