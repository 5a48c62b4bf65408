//! Pure calculation functions for framing and collage geometry.
//!
//! All functions here are pure and testable without any I/O or pixels.
//! They compute target dimensions, border insets, letterbox padding, and
//! collage layout metrics; the transform and collage modules turn the
//! numbers into buffers.

/// Layout axis for collages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Symmetric padding added around an image — totals per axis, half on each
/// side when blitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub width: u32,
    pub height: u32,
}

impl Insets {
    pub fn is_zero(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

/// Largest size within `max_w` x `max_h` that preserves the image's ratio.
///
/// Landscape images (`img_w/img_h > 1`) clamp width to `max_w`; everything
/// else clamps height to `max_h`. The scaled axis never collapses to zero.
pub fn adapted_size(max_w: u32, max_h: u32, img_w: u32, img_h: u32) -> (u32, u32) {
    let aspect = img_w as f64 / img_h as f64;
    if aspect > 1.0 {
        let w = max_w;
        let h = (w as f64 / aspect).round().max(1.0) as u32;
        (w, h)
    } else {
        let h = max_h;
        let w = (h as f64 * aspect).round().max(1.0) as u32;
        (w, h)
    }
}

/// Total inset a border adds per axis.
///
/// A positive pixel width wins over a percentage. The pixel width is the
/// per-side thickness, so the total inset doubles it; percentages scale each
/// axis by the image's own dimension (integer floor).
pub fn border_insets(width_px: Option<u32>, percent: Option<u32>, img_w: u32, img_h: u32) -> Insets {
    if let Some(px) = width_px.filter(|&px| px > 0) {
        return Insets {
            width: px * 2,
            height: px * 2,
        };
    }
    if let Some(pct) = percent.filter(|&pct| pct > 0) {
        return Insets {
            width: (img_w as u64 * pct as u64 / 100) as u32,
            height: (img_h as u64 * pct as u64 / 100) as u32,
        };
    }
    Insets::default()
}

const RATIO_EPSILON: f64 = 1e-9;

/// Symmetric padding needed to letterbox an image to `ratio_x:ratio_y`
/// without cropping.
///
/// `None` means no-op: a ratio component is zero (the sentinel) or negative,
/// the image is the empty sentinel, or it already has the target ratio.
/// Exactly one axis is ever padded; the other keeps the original size.
pub fn canvas_letterbox_insets(
    ratio_x: f64,
    ratio_y: f64,
    img_w: u32,
    img_h: u32,
) -> Option<Insets> {
    if ratio_x <= 0.0 || ratio_y <= 0.0 || img_w == 0 || img_h == 0 {
        return None;
    }
    let current = img_w as f64 / img_h as f64;
    let target = ratio_x / ratio_y;
    if (target - current).abs() < RATIO_EPSILON {
        return None;
    }
    if target < current {
        // Image is too wide for the target: pad top and bottom.
        let new_h = img_w as f64 / target;
        Some(Insets {
            width: 0,
            height: (new_h - img_h as f64).round() as u32,
        })
    } else {
        let new_w = img_h as f64 * target;
        Some(Insets {
            width: (new_w - img_w as f64).round() as u32,
            height: 0,
        })
    }
}

/// Elementwise minimum width and height across an image set. Used as the
/// clamp when no explicit max size is configured, so no member is ever
/// upscaled past its native resolution.
pub fn collage_minimum_size(sizes: &[(u32, u32)]) -> (u32, u32) {
    let min_w = sizes.iter().map(|&(w, _)| w).min().unwrap_or(0);
    let min_h = sizes.iter().map(|&(_, h)| h).min().unwrap_or(0);
    (min_w, min_h)
}

/// Per-member size after normalizing on the orientation-perpendicular axis.
///
/// Vertical collages set every width to `clamp`; horizontal collages every
/// height. The other axis scales to preserve the member's own ratio.
pub fn normalized_member_size(
    orientation: Orientation,
    clamp: u32,
    img_w: u32,
    img_h: u32,
) -> (u32, u32) {
    match orientation {
        Orientation::Vertical => {
            let h = (clamp as f64 * img_h as f64 / img_w as f64).round().max(1.0) as u32;
            (clamp, h)
        }
        Orientation::Horizontal => {
            let w = (clamp as f64 * img_w as f64 / img_h as f64).round().max(1.0) as u32;
            (w, clamp)
        }
    }
}

/// Canvas size for normalized members placed along the layout axis.
///
/// Gaps go only *between* members: `n - 1` gaps for `n` members, never
/// before the first or after the last. The perpendicular extent is the
/// minimum across members; normalized members all share it already.
pub fn collage_canvas_size(
    orientation: Orientation,
    sizes: &[(u32, u32)],
    gap_px: u32,
) -> (u32, u32) {
    if sizes.is_empty() {
        return (0, 0);
    }
    let gaps = gap_px * (sizes.len() as u32 - 1);
    match orientation {
        Orientation::Vertical => {
            let width = sizes.iter().map(|&(w, _)| w).min().unwrap_or(0);
            let height = sizes.iter().map(|&(_, h)| h).sum::<u32>() + gaps;
            (width, height)
        }
        Orientation::Horizontal => {
            let width = sizes.iter().map(|&(w, _)| w).sum::<u32>() + gaps;
            let height = sizes.iter().map(|&(_, h)| h).min().unwrap_or(0);
            (width, height)
        }
    }
}

/// Rescale a nominal gap by how much the member set shrank along the layout
/// axis, so gap thickness stays visually consistent at output scale.
///
/// Vertical: `gap * (sum of adapted heights) / (sum of native heights)`;
/// horizontal mirrors on width. A display value, hence `f64`.
pub fn resized_gap(
    gap_px: u32,
    orientation: Orientation,
    sizes: &[(u32, u32)],
    max_size: u32,
) -> f64 {
    if sizes.is_empty() || gap_px == 0 {
        return 0.0;
    }
    let (clamp_w, clamp_h) = if max_size == 0 {
        collage_minimum_size(sizes)
    } else {
        (max_size, max_size)
    };
    let (adapted_sum, native_sum) = match orientation {
        Orientation::Vertical => (
            sizes
                .iter()
                .map(|&(w, h)| clamp_w as f64 * h as f64 / w as f64)
                .sum::<f64>(),
            sizes.iter().map(|&(_, h)| h as f64).sum::<f64>(),
        ),
        Orientation::Horizontal => (
            sizes
                .iter()
                .map(|&(w, h)| clamp_h as f64 * w as f64 / h as f64)
                .sum::<f64>(),
            sizes.iter().map(|&(w, _)| w as f64).sum::<f64>(),
        ),
    };
    gap_px as f64 * adapted_sum / native_sum
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // adapted_size tests
    // =========================================================================

    #[test]
    fn adapted_landscape_clamps_width() {
        // 2000x1000 into 800x800: width clamps, height follows the ratio.
        assert_eq!(adapted_size(800, 800, 2000, 1000), (800, 400));
    }

    #[test]
    fn adapted_portrait_clamps_height() {
        assert_eq!(adapted_size(800, 800, 1000, 2000), (400, 800));
    }

    #[test]
    fn adapted_square_clamps_height() {
        // Ratio exactly 1 goes down the portrait branch.
        assert_eq!(adapted_size(300, 500, 1000, 1000), (500, 500));
    }

    #[test]
    fn adapted_preserves_ratio_within_epsilon() {
        let (w, h) = adapted_size(777, 777, 1234, 567);
        let original = 1234.0 / 567.0;
        let adapted = w as f64 / h as f64;
        assert!((original - adapted).abs() < 0.01);
    }

    #[test]
    fn adapted_never_returns_zero_axis() {
        // Extreme ratio: the scaled axis still comes out >= 1.
        let (_, h) = adapted_size(100, 100, 100_000, 7);
        assert!(h >= 1);
        let (w, _) = adapted_size(100, 100, 7, 100_000);
        assert!(w >= 1);
    }

    // =========================================================================
    // border_insets tests
    // =========================================================================

    #[test]
    fn border_pixel_width_doubles() {
        let insets = border_insets(Some(40), None, 1000, 800);
        assert_eq!(insets, Insets { width: 80, height: 80 });
    }

    #[test]
    fn border_pixel_width_wins_over_percent() {
        let insets = border_insets(Some(10), Some(50), 1000, 800);
        assert_eq!(insets, Insets { width: 20, height: 20 });
    }

    #[test]
    fn border_zero_pixel_width_falls_back_to_percent() {
        let insets = border_insets(Some(0), Some(10), 1000, 800);
        assert_eq!(insets, Insets { width: 100, height: 80 });
    }

    #[test]
    fn border_percent_scales_each_axis() {
        let insets = border_insets(None, Some(5), 200, 1000);
        assert_eq!(insets, Insets { width: 10, height: 50 });
    }

    #[test]
    fn border_percent_floors() {
        // 3% of 50 = 1.5, floors to 1.
        let insets = border_insets(None, Some(3), 50, 50);
        assert_eq!(insets, Insets { width: 1, height: 1 });
    }

    #[test]
    fn border_neither_set_is_zero() {
        assert!(border_insets(None, None, 1000, 800).is_zero());
        assert!(border_insets(Some(0), Some(0), 1000, 800).is_zero());
    }

    // =========================================================================
    // canvas_letterbox_insets tests
    // =========================================================================

    #[test]
    fn letterbox_zero_ratio_is_noop() {
        assert_eq!(canvas_letterbox_insets(0.0, 16.0, 100, 100), None);
        assert_eq!(canvas_letterbox_insets(9.0, 0.0, 100, 100), None);
    }

    #[test]
    fn letterbox_negative_ratio_is_noop() {
        assert_eq!(canvas_letterbox_insets(-1.0, 1.0, 100, 100), None);
    }

    #[test]
    fn letterbox_matching_ratio_is_noop() {
        assert_eq!(canvas_letterbox_insets(4.0, 3.0, 800, 600), None);
        assert_eq!(canvas_letterbox_insets(1.0, 1.0, 500, 500), None);
    }

    #[test]
    fn letterbox_wider_image_pads_height_only() {
        // 1080 wide landscape to 9:16 portrait: height grows to 1920.
        let insets = canvas_letterbox_insets(9.0, 16.0, 1080, 720).unwrap();
        assert_eq!(insets.width, 0);
        assert_eq!(insets.height, 1920 - 720);
    }

    #[test]
    fn letterbox_taller_image_pads_width_only() {
        // 600x800 portrait to 1:1: width grows to 800.
        let insets = canvas_letterbox_insets(1.0, 1.0, 600, 800).unwrap();
        assert_eq!(insets, Insets { width: 200, height: 0 });
    }

    #[test]
    fn letterbox_exactly_one_axis_padded() {
        for &(rx, ry, w, h) in &[(16.0, 9.0, 500, 500), (2.0, 3.0, 500, 500), (1.0, 2.0, 900, 300)]
        {
            let insets = canvas_letterbox_insets(rx, ry, w, h).unwrap();
            assert!(
                (insets.width == 0) != (insets.height == 0),
                "expected one padded axis for {rx}:{ry} on {w}x{h}, got {insets:?}"
            );
        }
    }

    #[test]
    fn letterbox_empty_image_is_noop() {
        assert_eq!(canvas_letterbox_insets(1.0, 1.0, 0, 100), None);
    }

    // =========================================================================
    // collage sizing tests
    // =========================================================================

    #[test]
    fn minimum_size_is_elementwise() {
        let sizes = [(100, 200), (150, 200), (100, 100)];
        assert_eq!(collage_minimum_size(&sizes), (100, 100));
    }

    #[test]
    fn minimum_size_of_empty_set_is_zero() {
        assert_eq!(collage_minimum_size(&[]), (0, 0));
    }

    #[test]
    fn normalized_vertical_sets_width() {
        assert_eq!(normalized_member_size(Orientation::Vertical, 100, 150, 200), (100, 133));
    }

    #[test]
    fn normalized_horizontal_sets_height() {
        assert_eq!(
            normalized_member_size(Orientation::Horizontal, 100, 200, 150),
            (133, 100)
        );
    }

    #[test]
    fn canvas_size_vertical_sums_heights_with_gaps() {
        let sizes = [(100, 200), (100, 133), (100, 100)];
        assert_eq!(
            collage_canvas_size(Orientation::Vertical, &sizes, 10),
            (100, 200 + 133 + 100 + 20)
        );
    }

    #[test]
    fn canvas_size_horizontal_sums_widths_with_gaps() {
        let sizes = [(200, 100), (133, 100), (100, 100)];
        assert_eq!(
            collage_canvas_size(Orientation::Horizontal, &sizes, 10),
            (200 + 133 + 100 + 20, 100)
        );
    }

    #[test]
    fn canvas_size_single_member_has_no_gap() {
        assert_eq!(collage_canvas_size(Orientation::Vertical, &[(50, 80)], 10), (50, 80));
    }

    #[test]
    fn canvas_size_zero_gap() {
        let sizes = [(100, 100), (100, 100)];
        assert_eq!(collage_canvas_size(Orientation::Vertical, &sizes, 0), (100, 200));
    }

    // =========================================================================
    // resized_gap tests
    // =========================================================================

    #[test]
    fn resized_gap_scales_with_shrink_factor() {
        // Two 200x400 images clamped to width 100: heights halve, so the
        // gap halves too.
        let sizes = [(200, 400), (200, 400)];
        let gap = resized_gap(10, Orientation::Vertical, &sizes, 0);
        assert!((gap - 5.0).abs() < 1e-9);
    }

    #[test]
    fn resized_gap_identity_at_native_scale() {
        let sizes = [(100, 100), (100, 100)];
        let gap = resized_gap(10, Orientation::Vertical, &sizes, 0);
        assert!((gap - 10.0).abs() < 1e-9);
    }

    #[test]
    fn resized_gap_horizontal_mirrors() {
        let sizes = [(400, 200), (400, 200)];
        let gap = resized_gap(10, Orientation::Horizontal, &sizes, 100);
        assert!((gap - 5.0).abs() < 1e-9);
    }

    #[test]
    fn resized_gap_zero_for_empty_or_zero_gap() {
        assert_eq!(resized_gap(0, Orientation::Vertical, &[(10, 10)], 0), 0.0);
        assert_eq!(resized_gap(10, Orientation::Vertical, &[], 0), 0.0);
    }

    #[test]
    fn resized_gap_uses_explicit_max_size() {
        let sizes = [(200, 400), (200, 400)];
        // Clamp width 50: heights scale by 0.25.
        let gap = resized_gap(10, Orientation::Vertical, &sizes, 50);
        assert!((gap - 2.5).abs() < 1e-9);
    }
}
