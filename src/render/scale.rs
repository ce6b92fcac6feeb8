// Scales mapping data values onto chart coordinates.

/// Continuous linear map from a domain interval onto a range interval.
///
/// A degenerate domain (both ends equal) maps every value to the middle of
/// the range instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }
}

/// Ordinal scale dividing a range into equal bands, one per domain entry.
///
/// Uses the same padding fraction inside and outside the bands and centres
/// the bands in the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        Self {
            count,
            range,
            padding: padding.clamp(0.0, 1.0),
        }
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let slots = (self.count as f64 + self.padding).max(1.0);
        (r1 - r0) / slots
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Start coordinate of band `index`, or None past the end of the domain.
    pub fn position(&self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        let (r0, r1) = self.range;
        let step = self.step();
        let used = step * (self.count as f64 - self.padding);
        let start = r0 + (r1 - r0 - used) * 0.5;
        Some(start + step * index as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_maps_endpoints() {
        let scale = LinearScale::new((10.0, 20.0), (0.1, 1.0));
        assert!((scale.apply(10.0) - 0.1).abs() < 1e-12);
        assert!((scale.apply(20.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_degenerate_domain() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 10.0));
        assert_eq!(scale.apply(5.0), 5.0);
    }

    #[test]
    fn test_band_layout() {
        // 3 bands over 340 units with padding 0.4: step = 340 / 3.4 = 100
        let scale = BandScale::new(3, (0.0, 340.0), 0.4);
        assert!((scale.step() - 100.0).abs() < 1e-9);
        assert!((scale.bandwidth() - 60.0).abs() < 1e-9);
        assert!((scale.position(0).unwrap() - 40.0).abs() < 1e-9);
        assert!((scale.position(2).unwrap() - 240.0).abs() < 1e-9);
        assert!(scale.position(3).is_none());
    }
}
