mod types;


pub use types::{AxisRange, PixelPoint, Point, Viewport};

/// Horizontal data range of the plot. Fixed, not user-configurable.
pub const X_RANGE: AxisRange = AxisRange {
    min: -10.0,
    max: 10.0,
};

/// Vertical data range of the plot. Fixed, not user-configurable.
pub const Y_RANGE: AxisRange = AxisRange {
    min: -10.0,
    max: 10.0,
};

/// Map a raw pointer position to data coordinates under a fixed axis range.
///
/// Pixel y grows downward while data y grows upward, so the vertical axis is
/// inverted. Positions that land outside the axis ranges return `None`; a
/// click outside the plotted area must not register, so out-of-range results
/// are rejected rather than clamped.
pub fn to_data(
    pixel: PixelPoint,
    viewport: Viewport,
    x_range: AxisRange,
    y_range: AxisRange,
) -> Option<Point> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }

    let x = x_range.min + (pixel.x - viewport.x) / viewport.width * x_range.span();
    let y = y_range.max - (pixel.y - viewport.y) / viewport.height * y_range.span();

    if !x_range.contains(x) || !y_range.contains(y) {
        return None;
    }

    Some(Point { x, y })
}
