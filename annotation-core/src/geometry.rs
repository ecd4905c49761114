/// Horizontal placement of a marker, in percent of the media duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerGeometry {
    pub left: f64,
    pub width: f64,
}

impl MarkerGeometry {
    /// Returns `None` while the duration is unknown, zero or not finite.
    pub fn compute(start: f64, end: f64, duration: Option<f64>) -> Option<Self> {
        let duration = duration.filter(|d| d.is_finite() && *d > 0.0)?;
        let left = round2(100.0 * start / duration);
        let right = round2(100.0 * end / duration);
        let width = round2(right - left);

        if !left.is_finite() || !width.is_finite() {
            return None;
        }
        Some(Self { left, width })
    }

    pub fn left_style(&self) -> String {
        format!("{:.2}%", self.left)
    }

    pub fn width_style(&self) -> String {
        format!("{:.2}%", self.width)
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
