
/// An HSL color as handed to the chart layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, [0, 360).
    pub hue: f64,
    /// Saturation percentage.
    pub saturation: f64,
    /// Lightness percentage.
    pub lightness: f64,
}

impl Hsl {
    /// Render as a CSS color string, e.g. `hsl(120, 100%, 50%)`.
    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Derive one color per cluster index by spreading hues evenly around the
/// wheel at full saturation and mid lightness.
///
/// Pure function of (i, k): re-deriving with an unchanged k reproduces the
/// exact same palette, so colors stay stable across runs.
pub fn cluster_colors(k: usize) -> Vec<Hsl> {
    (0..k)
        .map(|i| Hsl {
            hue: (i as f64) * 360.0 / (k as f64),
            saturation: 100.0,
            lightness: 50.0,
        })
        .collect()
}
