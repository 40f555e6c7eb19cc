//! Pan/zoom state of the local viewport that displays the remote video.
//!
//! # How pan and zoom interact (for beginners)
//!
//! The platform gesture recognizer reports *cumulative* values for a gesture:
//! a two-finger pan reports the total translation since the fingers went down,
//! and a pinch reports the total magnification since it started.  To turn
//! those into persistent state we keep a **baseline** for each family:
//!
//! - Pan: `offset = last_offset + translation`; when the gesture ends the
//!   current offset becomes the new baseline.
//! - Zoom: the scale is multiplied by the ratio between successive pinch
//!   samples (`sample / last_sample`), so each sample only contributes its
//!   incremental change.
//!
//! Pan and zoom keep independent baselines so that both gestures can be live
//! at the same time.
//!
//! The transform always satisfies `scale == 1.0 ⇒ offset == (0, 0)`: a fully
//! zoomed-out view has nothing to pan.

use crate::domain::geometry::Vector;

/// Smallest allowed magnification (the un-zoomed view).
pub const MIN_SCALE: f64 = 1.0;

/// Largest allowed magnification.
pub const MAX_SCALE: f64 = 5.0;

/// Current magnification and pan offset of the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    offset: Vector,
    /// Offset at the end of the last committed pan.
    last_offset: Vector,
    /// Magnification reported by the previous pinch sample of this gesture.
    last_zoom_sample: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: MIN_SCALE,
            offset: Vector::ZERO,
            last_offset: Vector::ZERO,
            last_zoom_sample: 1.0,
        }
    }
}

impl ViewTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current magnification, always inside `[MIN_SCALE, MAX_SCALE]`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current pan offset in view points.
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Returns `true` while the view is magnified and therefore pannable.
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_SCALE
    }

    /// Applies a live two-finger pan sample.
    ///
    /// `translation` is the cumulative translation since the pan began.  Has
    /// no effect at 1× zoom.
    pub fn apply_pan(&mut self, translation: Vector) {
        if self.is_zoomed() {
            self.offset = self.last_offset.plus(translation);
        }
    }

    /// Ends a pan gesture, making the current offset the new baseline.
    pub fn commit_pan(&mut self) {
        if self.is_zoomed() {
            self.last_offset = self.offset;
        }
    }

    /// Applies a live pinch sample.
    ///
    /// `sample` is the cumulative magnification reported by the recognizer
    /// since the pinch began.  Non-positive or non-finite samples are ignored.
    pub fn apply_zoom(&mut self, sample: f64) {
        if !sample.is_finite() || sample <= 0.0 {
            return;
        }
        let ratio = sample / self.last_zoom_sample;
        self.last_zoom_sample = sample;
        self.scale = (self.scale * ratio).clamp(MIN_SCALE, MAX_SCALE);
        if self.scale <= MIN_SCALE {
            self.reset_pan();
        }
    }

    /// Ends a pinch gesture.
    ///
    /// Resets the sample baseline for the next pinch and snaps back to the
    /// origin when the view ended up un-magnified.
    pub fn commit_zoom(&mut self) {
        self.last_zoom_sample = 1.0;
        if self.scale <= MIN_SCALE {
            self.scale = MIN_SCALE;
            self.reset_pan();
        }
    }

    /// Replaces the pan offset and its baseline, e.g. when restoring a
    /// previously computed centre.  Ignored at 1× zoom.
    pub fn set_offset(&mut self, offset: Vector) {
        if self.is_zoomed() {
            self.offset = offset;
            self.last_offset = offset;
        }
    }

    /// Returns to 1× with no pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn reset_pan(&mut self) {
        self.offset = Vector::ZERO;
        self.last_offset = Vector::ZERO;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn zoomed_to(scale: f64) -> ViewTransform {
        let mut t = ViewTransform::new();
        t.apply_zoom(scale);
        t.commit_zoom();
        t
    }

    #[test]
    fn test_new_transform_is_identity() {
        let t = ViewTransform::new();
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.offset(), Vector::ZERO);
        assert!(!t.is_zoomed());
    }

    #[test]
    fn test_apply_pan_has_no_effect_at_unit_scale() {
        // Arrange
        let mut t = ViewTransform::new();

        // Act
        t.apply_pan(Vector::new(40.0, -25.0));
        t.commit_pan();

        // Assert
        assert_eq!(t.offset(), Vector::ZERO);
    }

    #[test]
    fn test_apply_pan_adds_translation_to_committed_baseline() {
        // Arrange
        let mut t = zoomed_to(2.0);

        // Act – two consecutive pan gestures
        t.apply_pan(Vector::new(10.0, 5.0));
        t.apply_pan(Vector::new(20.0, 10.0));
        t.commit_pan();
        t.apply_pan(Vector::new(-5.0, 0.0));

        // Assert
        assert_eq!(t.offset(), Vector::new(15.0, 10.0));
    }

    #[test]
    fn test_apply_zoom_uses_incremental_ratio_between_samples() {
        // Arrange
        let mut t = ViewTransform::new();

        // Act – cumulative samples 1.5 then 3.0 mean a total of 3×
        t.apply_zoom(1.5);
        t.apply_zoom(3.0);

        // Assert
        assert!((t.scale() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_second_pinch_multiplies_previous_scale() {
        let mut t = zoomed_to(2.0);
        t.apply_zoom(1.5);
        t.commit_zoom();
        assert!((t.scale() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_zoom_clamps_to_max_scale() {
        let mut t = ViewTransform::new();
        t.apply_zoom(12.0);
        assert_eq!(t.scale(), MAX_SCALE);
    }

    #[test]
    fn test_apply_zoom_ignores_non_positive_and_nan_samples() {
        let mut t = zoomed_to(2.0);
        t.apply_zoom(0.0);
        t.apply_zoom(-1.0);
        t.apply_zoom(f64::NAN);
        assert_eq!(t.scale(), 2.0);
    }

    #[test]
    fn test_commit_zoom_below_one_snaps_to_origin() {
        // Arrange – zoom in and pan away from the origin
        let mut t = zoomed_to(3.0);
        t.apply_pan(Vector::new(100.0, -60.0));
        t.commit_pan();

        // Act – pinch out past 1×
        t.apply_zoom(0.1);
        t.commit_zoom();

        // Assert
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.offset(), Vector::ZERO);

        // The pan baseline is gone too: a later zoom-and-pan starts from zero.
        t.apply_zoom(2.0);
        t.apply_pan(Vector::new(1.0, 1.0));
        assert_eq!(t.offset(), Vector::new(1.0, 1.0));
    }

    #[test]
    fn test_pan_and_zoom_can_run_concurrently() {
        // Arrange
        let mut t = zoomed_to(2.0);

        // Act – interleaved samples from the same two-finger session
        t.apply_pan(Vector::new(10.0, 0.0));
        t.apply_zoom(1.25);
        t.apply_pan(Vector::new(20.0, 4.0));
        t.apply_zoom(1.5);
        t.commit_pan();
        t.commit_zoom();

        // Assert
        assert!((t.scale() - 3.0).abs() < 1e-12);
        assert_eq!(t.offset(), Vector::new(20.0, 4.0));
    }

    #[test]
    fn test_set_offset_ignored_when_not_zoomed() {
        let mut t = ViewTransform::new();
        t.set_offset(Vector::new(5.0, 5.0));
        assert_eq!(t.offset(), Vector::ZERO);
    }

    #[test]
    fn test_reset_restores_identity() {
        let mut t = zoomed_to(4.0);
        t.apply_pan(Vector::new(3.0, 3.0));
        t.reset();
        assert_eq!(t, ViewTransform::new());
    }
}
