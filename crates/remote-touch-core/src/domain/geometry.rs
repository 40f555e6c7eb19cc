//! Geometry primitives.
//!
//! Two coordinate spaces are in play:
//!
//! - **View space** – logical points of the local viewport that shows the
//!   remote video.  [`Point`], [`Size`], and [`Vector`] live here.
//! - **Normalized remote space** – `[0, 1] × [0, 1]` over the whole remote
//!   screen, origin top-left.  [`NormalizedPoint`] lives here and is the only
//!   coordinate type ever sent to the remote host.

use serde::{Deserialize, Serialize};

/// A position in local view space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `v`.
    pub fn offset_by(self, v: Vector) -> Self {
        Self {
            x: self.x + v.dx,
            y: self.y + v.dy,
        }
    }
}

/// A width/height pair in local view space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` when both dimensions are finite and strictly positive.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Width divided by height, or `None` for an unusable size.
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.is_usable().then(|| self.width / self.height)
    }
}

/// A displacement in local view space (pan offset, gesture translation,
/// fixed cursor offsets).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Component-wise sum.
    pub fn plus(self, other: Vector) -> Self {
        Self {
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
        }
    }

    /// Divides both components by `factor`.
    pub fn scaled_down(self, factor: f64) -> Self {
        Self {
            dx: self.dx / factor,
            dy: self.dy / factor,
        }
    }
}

/// An axis-aligned rectangle in local view space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Returns `true` if `p` lies inside the rectangle (edges inclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x <= self.origin.x + self.size.width
            && p.y <= self.origin.y + self.size.height
    }

    /// Converts a point in the enclosing container's space into this
    /// rectangle's local space.
    pub fn to_local(&self, p: Point) -> Point {
        Point::new(p.x - self.origin.x, p.y - self.origin.y)
    }
}

/// A position on the remote screen in normalized coordinates.
///
/// Values produced by the mapping functions may lie outside `[0, 1]` (a touch
/// near the top edge combined with the upward cursor lead, for example).
/// [`NormalizedPoint::clamped`] is the authoritative clamp applied before any
/// coordinate leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    /// The centre of the remote screen.
    pub const CENTER: NormalizedPoint = NormalizedPoint { x: 0.5, y: 0.5 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point with each axis clamped to `[0.0, 1.0]`.
    ///
    /// `NaN` components collapse to `0.0` so that a degenerate upstream
    /// computation can never reach the remote host as a non-number.
    pub fn clamped(self) -> Self {
        Self {
            x: clamp_unit(self.x),
            y: clamp_unit(self.y),
        }
    }

    /// Returns `true` if both axes are already inside `[0.0, 1.0]`.
    pub fn is_within_bounds(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl Default for NormalizedPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
