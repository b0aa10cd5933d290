//! Single-pass accumulation of the sums behind the closed-form line fit.
//!
//! The normal equations for `y = m·x + b` only need five numbers:
//!
//! ```text
//! n, Σx, Σy, Σxy, Σx²
//! ```
//!
//! Summing raw values loses everything to cancellation once the data sits far
//! from zero (x around 1e8 already breaks `n·Σx² − (Σx)²`). The slope is
//! invariant under shifting x and y, so we accumulate `dx = x − x₀` and
//! `dy = y − y₀` relative to the first sample and shift the intercept back
//! at the end.
//!
//! We also track the raw x/y ranges while we are walking the data. They are
//! used to detect the two degenerate cases exactly (all x identical, all y
//! identical) and double as dataset stats for reporting.

use crate::domain::DatasetStats;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSums {
    pub n: usize,
    /// First sample; every sum below is taken relative to it.
    pub origin_x: f64,
    pub origin_y: f64,
    pub sum_dx: f64,
    pub sum_dy: f64,
    pub sum_dxdy: f64,
    pub sum_dx2: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for LineSums {
    fn default() -> Self {
        Self {
            n: 0,
            origin_x: 0.0,
            origin_y: 0.0,
            sum_dx: 0.0,
            sum_dy: 0.0,
            sum_dxdy: 0.0,
            sum_dx2: 0.0,
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        }
    }
}

impl LineSums {
    pub fn push(&mut self, x: f64, y: f64) {
        if self.n == 0 {
            self.origin_x = x;
            self.origin_y = y;
        }
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;

        self.n += 1;
        self.sum_dx += dx;
        self.sum_dy += dy;
        self.sum_dxdy += dx * dy;
        self.sum_dx2 += dx * dx;
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Accumulate two equal-length slices. Extra elements of the longer slice are ignored;
    /// callers validate lengths first.
    pub fn from_slices(x: &[f64], y: &[f64]) -> Self {
        let mut sums = Self::default();
        for (&xi, &yi) in x.iter().zip(y) {
            sums.push(xi, yi);
        }
        sums
    }

    /// `n·Σdx² − (Σdx)²`, i.e. `n²·Var(x)`.
    pub fn x_denominator(&self) -> f64 {
        let n = self.n as f64;
        n * self.sum_dx2 - self.sum_dx * self.sum_dx
    }

    /// `n·Σdxdy − Σdx·Σdy`.
    pub fn xy_numerator(&self) -> f64 {
        let n = self.n as f64;
        n * self.sum_dxdy - self.sum_dx * self.sum_dy
    }

    /// Intercept of the line with `slope` in raw coordinates.
    pub fn intercept_for(&self, slope: f64) -> f64 {
        let shifted = (self.sum_dy - slope * self.sum_dx) / self.n as f64;
        shifted + self.origin_y - slope * self.origin_x
    }

    /// Mean of `dy`; add `origin_y` for the mean of `y`.
    pub fn mean_dy(&self) -> f64 {
        self.sum_dy / self.n as f64
    }

    pub fn x_is_constant(&self) -> bool {
        self.n > 0 && self.x_min == self.x_max
    }

    pub fn y_is_constant(&self) -> bool {
        self.n > 0 && self.y_min == self.y_max
    }

    pub fn stats(&self) -> Option<DatasetStats> {
        if self.n == 0 {
            return None;
        }
        Some(DatasetStats {
            n_points: self.n,
            x_min: self.x_min,
            x_max: self.x_max,
            y_min: self.y_min,
            y_max: self.y_max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_sums_relative_to_first_sample() {
        // dx = [0,1,2,3,4], dy = [0,-1,2,1,3]
        let sums = LineSums::from_slices(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 1.0, 4.0, 3.0, 5.0]);
        assert_eq!(sums.n, 5);
        assert_eq!((sums.origin_x, sums.origin_y), (1.0, 2.0));
        assert_eq!(sums.sum_dx, 10.0);
        assert_eq!(sums.sum_dy, 5.0);
        assert_eq!(sums.sum_dxdy, 18.0);
        assert_eq!(sums.sum_dx2, 30.0);
        assert_eq!(sums.x_denominator(), 50.0);
        assert_eq!(sums.xy_numerator(), 40.0);
        assert_eq!(sums.mean_dy(), 1.0);
        assert!((sums.intercept_for(0.8) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn large_offset_keeps_exact_denominator() {
        let x: Vec<f64> = (0..5).map(|i| 1e9 + i as f64).collect();
        let sums = LineSums::from_slices(&x, &[2.0, 1.0, 4.0, 3.0, 5.0]);
        assert_eq!(sums.x_denominator(), 50.0);
        assert_eq!(sums.xy_numerator(), 40.0);
    }

    #[test]
    fn detects_constant_columns() {
        let sums = LineSums::from_slices(&[0.1, 0.1, 0.1], &[1.0, 2.0, 3.0]);
        assert!(sums.x_is_constant());
        assert!(!sums.y_is_constant());

        let empty = LineSums::default();
        assert!(!empty.x_is_constant());
        assert!(empty.stats().is_none());
    }

    #[test]
    fn stats_track_ranges() {
        let sums = LineSums::from_slices(&[3.0, -1.0, 2.0], &[0.5, 7.0, -2.0]);
        let stats = sums.stats().unwrap();
        assert_eq!(stats.n_points, 3);
        assert_eq!((stats.x_min, stats.x_max), (-1.0, 3.0));
        assert_eq!((stats.y_min, stats.y_max), (-2.0, 7.0));
    }
}
