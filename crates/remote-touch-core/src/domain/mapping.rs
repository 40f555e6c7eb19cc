//! Conversions between touch points in the local viewport and normalized
//! coordinates on the remote screen.
//!
//! # Two offsets, two artifacts (for beginners)
//!
//! A finger covers the spot it touches.  If the remote cursor were placed
//! exactly under the fingertip the user could never see it, so every touch
//! point is shifted by a **screen lead** (up and to the left by default)
//! before being normalized.  The lead is divided by the current zoom so it
//! stays the same *physical* distance on the glass at any magnification.
//!
//! The locally drawn cursor indicator needs a second, different correction:
//! the rendered arrow glyph's visual hotspot sits a few points below and to the
//! right of its tip.  That **visual hotspot** offset is added to the already
//! lead-adjusted point and is *not* scaled.
//!
//! The two results are intentionally computed separately:
//!
//! | Output        | Formula                                          |
//! |---------------|--------------------------------------------------|
//! | `transmitted` | `(touch + lead / scale) / viewport`              |
//! | `overlay`     | `(touch + lead / scale + hotspot) / viewport`    |
//!
//! Neither output is clamped here.  The transmitted coordinate is clamped
//! when it is encoded for the wire; the overlay is left to the renderer.

use thiserror::Error;

use crate::domain::geometry::{NormalizedPoint, Point, Rect, Size, Vector};
use crate::domain::view_transform::ViewTransform;

/// Error type for coordinate mapping.
#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    /// The viewport has a zero, negative, or non-finite dimension.
    #[error("viewport size {width}x{height} is not usable for mapping")]
    EmptyViewport { width: f64, height: f64 },

    /// The zoom factor is zero, negative, or non-finite.
    #[error("invalid zoom scale: {0}")]
    InvalidScale(f64),

    /// The remote aspect ratio is zero, negative, or non-finite.
    #[error("invalid aspect ratio: {0}")]
    InvalidAspectRatio(f64),
}

/// The fixed view-space corrections applied when mapping a touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorOffsets {
    /// Lead applied to the transmitted coordinate, divided by the zoom scale.
    pub screen_lead: Vector,
    /// Unscaled offset from the cursor tip to the glyph's visual hotspot.
    pub visual_hotspot: Vector,
}

impl CursorOffsets {
    pub const DEFAULT_SCREEN_LEAD: Vector = Vector::new(-20.0, -50.0);
    pub const DEFAULT_VISUAL_HOTSPOT: Vector = Vector::new(10.0, 10.0);
}

impl Default for CursorOffsets {
    fn default() -> Self {
        Self {
            screen_lead: Self::DEFAULT_SCREEN_LEAD,
            visual_hotspot: Self::DEFAULT_VISUAL_HOTSPOT,
        }
    }
}

/// The two normalized positions derived from one touch sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappedPoint {
    /// Coordinate for the remote host (unclamped).
    pub transmitted: NormalizedPoint,
    /// Position of the local cursor indicator (unclamped).
    pub overlay: NormalizedPoint,
}

/// Maps a touch location in viewport space to normalized remote coordinates.
///
/// # Errors
///
/// Returns [`MappingError`] if the viewport is unusable or `scale` is not a
/// positive finite number.
///
/// # Examples
///
/// ```rust
/// use remote_touch_core::{point_to_normalized, CursorOffsets, Point, Size};
///
/// let mapped = point_to_normalized(
///     Point::new(500.0, 500.0),
///     Size::new(1000.0, 1000.0),
///     &CursorOffsets::default(),
///     1.0,
/// )
/// .unwrap();
/// assert!((mapped.transmitted.x - 0.48).abs() < 1e-12);
/// assert!((mapped.transmitted.y - 0.45).abs() < 1e-12);
/// ```
pub fn point_to_normalized(
    touch: Point,
    viewport: Size,
    offsets: &CursorOffsets,
    scale: f64,
) -> Result<MappedPoint, MappingError> {
    check_viewport(viewport)?;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(MappingError::InvalidScale(scale));
    }

    let adjusted = touch.offset_by(offsets.screen_lead.scaled_down(scale));
    let transmitted = NormalizedPoint::new(
        adjusted.x / viewport.width,
        adjusted.y / viewport.height,
    );

    let hotspot = adjusted.offset_by(offsets.visual_hotspot);
    let overlay = NormalizedPoint::new(hotspot.x / viewport.width, hotspot.y / viewport.height);

    Ok(MappedPoint {
        transmitted,
        overlay,
    })
}

/// Returns the normalized coordinate currently shown at the geometric centre
/// of the viewport: `0.5 - offset / (viewport * scale)` per axis.
///
/// # Errors
///
/// Returns [`MappingError::EmptyViewport`] for an unusable viewport.
pub fn center_point_from_transform(
    viewport: Size,
    transform: &ViewTransform,
) -> Result<NormalizedPoint, MappingError> {
    check_viewport(viewport)?;
    let scale = transform.scale();
    let offset = transform.offset();
    Ok(NormalizedPoint::new(
        0.5 - offset.dx / (viewport.width * scale),
        0.5 - offset.dy / (viewport.height * scale),
    ))
}

/// The pan offset that puts `center` at the middle of the viewport at the
/// given `scale`.  Inverse of [`center_point_from_transform`].
///
/// # Errors
///
/// Returns [`MappingError`] for an unusable viewport or scale.
pub fn offset_for_center(
    viewport: Size,
    scale: f64,
    center: NormalizedPoint,
) -> Result<Vector, MappingError> {
    check_viewport(viewport)?;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(MappingError::InvalidScale(scale));
    }
    Ok(Vector::new(
        (0.5 - center.x) * viewport.width * scale,
        (0.5 - center.y) * viewport.height * scale,
    ))
}

/// Computes the largest frame with the remote screen's `aspect_ratio` that
/// fits inside `container`, centred on both axes.
///
/// The video feed is shown aspect-fit, so touches must be normalized against
/// this frame rather than against the whole container.
///
/// # Errors
///
/// Returns [`MappingError`] if the container or the ratio is unusable.
pub fn fit_viewport(container: Size, aspect_ratio: f64) -> Result<Rect, MappingError> {
    check_viewport(container)?;
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Err(MappingError::InvalidAspectRatio(aspect_ratio));
    }

    let container_ratio = container.width / container.height;
    let size = if container_ratio > aspect_ratio {
        // Container is wider: pillarbox.
        Size::new(container.height * aspect_ratio, container.height)
    } else {
        // Container is taller: letterbox.
        Size::new(container.width, container.width / aspect_ratio)
    };
    let origin = Point::new(
        (container.width - size.width) / 2.0,
        (container.height - size.height) / 2.0,
    );
    Ok(Rect::new(origin, size))
}

fn check_viewport(viewport: Size) -> Result<(), MappingError> {
    if viewport.is_usable() {
        Ok(())
    } else {
        Err(MappingError::EmptyViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
