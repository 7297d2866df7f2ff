use crate::error::SplineError;

const UNIFORM_TOLERANCE: f64 = 1e-12;

/// Normalized knot placement over the path parameter domain `[0, 1]`.
///
/// - `dt` - length of each segment, summing to 1,
/// - `starts` - cumulative segment start offsets, `starts[0] == 0` and `starts[N-1] == 1`,
/// - `is_uniform` - all segments have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Spacing {
    dt: Vec<f64>,
    starts: Vec<f64>,
    is_uniform: bool,
}

impl Spacing {
    /// Equal segments for `number_of_points` points.
    pub fn uniform(number_of_points: usize) -> Self {
        let number_of_segments = number_of_points.saturating_sub(1).max(1);
        let step = 1.0 / number_of_segments as f64;

        let dt = vec![step; number_of_segments];
        let mut starts: Vec<f64> = (0..number_of_segments)
            .map(|i| i as f64 / number_of_segments as f64)
            .collect();
        starts.push(1.0);

        Spacing { dt, starts, is_uniform: true }
    }

    /// Normalizes relative segment lengths given for `number_of_points` points.
    /// # Errors
    /// [SplineError::DimensionMismatch] when `lengths` does not hold exactly one value per segment,
    /// [SplineError::InvalidSpacing] when a value is not finite, not positive, or so small
    /// relative to the others that its segment would have no extent in the path parameter.
    pub fn from_lengths(lengths: &[f64], number_of_points: usize) -> Result<Self, SplineError> {
        let number_of_segments = number_of_points.saturating_sub(1);
        if number_of_segments == 0 {
            return Err(SplineError::InsufficientPoints {
                required: 2,
                actual: number_of_points,
                context: "spacing",
            });
        }
        if lengths.len() != number_of_segments {
            return Err(SplineError::DimensionMismatch {
                expected: number_of_segments,
                actual: lengths.len(),
                context: "spacing length",
            });
        }

        if let Some((index, value)) = lengths
            .iter()
            .enumerate()
            .find(|(_, l)| !l.is_finite() || **l <= 0.0)
        {
            return Err(SplineError::InvalidSpacing { index, value: *value });
        }

        // scale by the longest segment first so the sum cannot overflow
        let longest = lengths.iter().copied().fold(0.0, f64::max);
        let total: f64 = lengths.iter().map(|l| l / longest).sum();
        let dt: Vec<f64> = lengths.iter().map(|l| l / longest / total).collect();

        let mut starts = Vec::with_capacity(number_of_points);
        let mut offset = 0.0;
        for segment in dt.iter().take(dt.len() - 1) {
            starts.push(offset);
            offset += segment;
        }
        starts.push(offset);
        starts.push(1.0);

        // every segment must keep a resolvable share and a distinct start in f64
        if let Some(index) = (0..number_of_segments)
            .find(|i| dt[*i] < f64::EPSILON || starts[i + 1] <= starts[*i])
        {
            return Err(SplineError::InvalidSpacing { index, value: lengths[index] });
        }

        let is_uniform = dt
            .windows(2)
            .all(|w| (w[1] - w[0]).abs() <= UNIFORM_TOLERANCE * w[0]);

        Ok(Spacing { dt, starts, is_uniform })
    }

    pub fn dt(&self) -> &[f64] {
        &self.dt
    }

    pub fn starts(&self) -> &[f64] {
        &self.starts
    }

    pub fn is_uniform(&self) -> bool {
        self.is_uniform
    }

    pub fn number_of_segments(&self) -> usize {
        self.dt.len()
    }

    pub fn is_in_range(&self, t: f64) -> bool {
        (0.0..=1.0).contains(&t)
    }

    /// Owning segment of `t` and the local parameter within it.
    ///
    /// `t == 1` belongs to the last segment with local parameter 1.
    pub fn locate(&self, t: f64) -> Result<(usize, f64), SplineError> {
        let index = self.find_segment_index(t)?;
        Ok((index, self.local_parameter(index, t)))
    }

    /// Like [Spacing::locate] but tries `index_hint` and its successor before searching,
    /// which makes ordered batches linear.
    pub fn locate_with_hint(&self, index_hint: usize, t: f64) -> Result<(usize, f64), SplineError> {
        if !self.is_in_range(t) {
            return Err(SplineError::OutOfDomain { t });
        }

        let last = self.number_of_segments() - 1;
        let index = if t >= 1.0 {
            last
        } else if index_hint <= last && self.is_in_segment(index_hint, t) {
            index_hint
        } else if index_hint < last && self.is_in_segment(index_hint + 1, t) {
            index_hint + 1
        } else {
            self.find_segment_index(t)?
        };
        Ok((index, self.local_parameter(index, t)))
    }

    fn local_parameter(&self, index: usize, t: f64) -> f64 {
        if t >= 1.0 {
            return 1.0;
        }
        (t - self.starts[index]) / self.dt[index]
    }

    fn is_in_segment(&self, index: usize, t: f64) -> bool {
        self.starts[index] <= t && t < self.starts[index + 1]
    }

    fn find_segment_index(&self, t: f64) -> Result<usize, SplineError> {
        if !self.is_in_range(t) {
            return Err(SplineError::OutOfDomain { t });
        }

        let last = self.number_of_segments() - 1;
        if t >= 1.0 {
            return Ok(last);
        }

        if self.is_uniform {
            Ok(self.find_segment_index_uniform(t))
        } else {
            Ok(self.find_segment_index_bisect(t))
        }
    }

    fn find_segment_index_bisect(&self, t: f64) -> usize {
        let mut min = 0;
        let mut max = self.starts.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if t < self.starts[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_segment_index_uniform(&self, t: f64) -> usize {
        let last = self.number_of_segments() - 1;
        let mut index = ((t * self.number_of_segments() as f64).floor() as usize).min(last);

        // floor may land one segment off the stored starts
        if t < self.starts[index] {
            index -= 1;
        } else if index < last && t >= self.starts[index + 1] {
            index += 1;
        }
        index
    }
}
