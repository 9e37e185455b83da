//! Annual time series and the profile override mechanism.
//!
//! Pure computation module — every cost and production profile in the data
//! model is a [`TimeSeries`], and the generators are built out of the three
//! operations here: merge, cumulative sum, and total.

use serde::{Deserialize, Serialize};

/// Annual series of values. Index *i* maps to year `start_year + i`.
///
/// Start years are offsets from the owning case's DG4 year rather than
/// absolute calendar years; none of the arithmetic depends on the datum.
/// Missing years inside a range only ever arise through [`merge`](Self::merge)
/// and are treated as zero — they are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries<T> {
    #[serde(default)]
    pub start_year: i32,
    #[serde(default)]
    pub values: Vec<T>,
}

impl<T> Default for TimeSeries<T> {
    fn default() -> Self {
        Self {
            start_year: 0,
            values: Vec::new(),
        }
    }
}

impl<T> TimeSeries<T> {
    pub fn new(start_year: i32, values: Vec<T>) -> Self {
        Self { start_year, values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exclusive end year: the first year after the series.
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn end_year(&self) -> i32 {
        self.start_year + self.values.len() as i32
    }
}

impl<T> TimeSeries<T>
where
    T: Copy + Default + std::ops::Add<Output = T>,
{
    /// Year-aligned sum of two series.
    ///
    /// The result covers the union of both year ranges; a year missing from
    /// one input contributes zero. An empty series is a left/right identity,
    /// regardless of its (meaningless) start year.
    #[allow(clippy::cast_sign_loss)]
    pub fn merge(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let start_year = self.start_year.min(other.start_year);
        let end_year = self.end_year().max(other.end_year());
        let mut values = vec![T::default(); (end_year - start_year) as usize];

        for (i, v) in self.values.iter().enumerate() {
            let idx = (self.start_year - start_year) as usize + i;
            values[idx] = values[idx] + *v;
        }
        for (i, v) in other.values.iter().enumerate() {
            let idx = (other.start_year - start_year) as usize + i;
            values[idx] = values[idx] + *v;
        }

        Self { start_year, values }
    }

    /// Fold [`merge`](Self::merge) over any number of series.
    pub fn merge_all<'a, I>(series: I) -> Self
    where
        T: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        series
            .into_iter()
            .fold(Self::default(), |acc, s| acc.merge(s))
    }

    /// Running sum: `out[i] = values[0] + … + values[i]`.
    ///
    /// Same start year and length as the input. Converts discrete
    /// "wells drilled this year" counts into "wells active from this year
    /// forward" for intervention-cost allocation.
    pub fn cumulative(&self) -> Self {
        let mut sum = T::default();
        let values = self
            .values
            .iter()
            .map(|v| {
                sum = sum + *v;
                sum
            })
            .collect();
        Self {
            start_year: self.start_year,
            values,
        }
    }
}

impl TimeSeries<f64> {
    /// Total over all years.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Multiply every value by a constant factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            start_year: self.start_year,
            values: self.values.iter().map(|v| v * factor).collect(),
        }
    }
}

impl TimeSeries<i32> {
    /// Widen an integer series (e.g. a drilling schedule) to `f64`.
    pub fn to_f64(&self) -> TimeSeries<f64> {
        TimeSeries {
            start_year: self.start_year,
            values: self.values.iter().map(|v| f64::from(*v)).collect(),
        }
    }
}

/// A generator-computed profile the operator may pin by hand.
///
/// `computed` is replaced every time the owning generator runs; `manual`,
/// when present, wins in every consumer. The original data model carried an
/// `override: bool` beside a nullable series — folding the flag into the
/// presence of `manual` removes the "flag set, no series" state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverridableProfile {
    #[serde(default)]
    pub computed: TimeSeries<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual: Option<TimeSeries<f64>>,
}

impl OverridableProfile {
    pub fn from_computed(computed: TimeSeries<f64>) -> Self {
        Self {
            computed,
            manual: None,
        }
    }

    /// The series consumers must use: the manual override when present,
    /// otherwise the computed one.
    pub fn effective(&self) -> &TimeSeries<f64> {
        self.manual.as_ref().unwrap_or(&self.computed)
    }

    pub fn is_overridden(&self) -> bool {
        self.manual.is_some()
    }

    /// Replace the computed series, leaving any manual override in place.
    pub fn refresh(&mut self, computed: TimeSeries<f64>) {
        self.computed = computed;
    }
}

/// Refresh the computed side of an optional profile slot in place.
pub fn refresh_slot(slot: &mut Option<OverridableProfile>, computed: TimeSeries<f64>) {
    match slot {
        Some(profile) => profile.refresh(computed),
        None => *slot = Some(OverridableProfile::from_computed(computed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(start_year: i32, values: &[f64]) -> TimeSeries<f64> {
        TimeSeries::new(start_year, values.to_vec())
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let a = series(3, &[1.0, 2.0, 3.0]);
        let empty = TimeSeries::default();

        let left = empty.merge(&a);
        let right = a.merge(&empty);

        assert_eq!(left, a);
        assert_eq!(right, a);
    }

    #[test]
    fn test_merge_empty_identity_ignores_start_year() {
        let a = series(-2, &[5.0]);
        // An empty series with a nonsense start year must not widen the result.
        let empty = TimeSeries::new(100, Vec::new());

        assert_eq!(a.merge(&empty), a);
        assert_eq!(empty.merge(&a), a);
    }

    #[test]
    fn test_merge_overlapping_years() {
        let a = series(0, &[1.0, 2.0, 3.0]);
        let b = series(1, &[10.0, 10.0, 10.0]);

        let merged = a.merge(&b);

        assert_eq!(merged.start_year, 0);
        assert_eq!(merged.values, vec![1.0, 12.0, 13.0, 10.0]);
    }

    #[test]
    fn test_merge_is_commutative() {
        let a = series(-3, &[1.0, 2.0, 3.0, 4.0]);
        let b = series(-1, &[0.5, 0.5, 0.5, 0.5, 0.5]);

        assert_eq!(a.merge(&b), b.merge(&a));
    }

    #[test]
    fn test_merge_disjoint_ranges_fills_gap_with_zero() {
        let a = series(0, &[1.0]);
        let b = series(3, &[2.0]);

        let merged = a.merge(&b);

        assert_eq!(merged.start_year, 0);
        assert_eq!(merged.values, vec![1.0, 0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_merge_all() {
        let parts = [
            series(0, &[1.0, 1.0]),
            series(1, &[1.0, 1.0]),
            series(2, &[1.0, 1.0]),
        ];

        let merged = TimeSeries::merge_all(&parts);

        assert_eq!(merged.start_year, 0);
        assert_eq!(merged.values, vec![1.0, 2.0, 2.0, 1.0]);
    }

    #[test]
    fn test_cumulative_running_sum() {
        let schedule = TimeSeries::new(-5, vec![1, 0, 2, 1]);

        let cumulative = schedule.cumulative();

        assert_eq!(cumulative.start_year, -5);
        assert_eq!(cumulative.values, vec![1, 1, 3, 4]);
    }

    #[test]
    fn test_cumulative_is_non_decreasing_for_non_negative_input() {
        let schedule = TimeSeries::new(0, vec![3, 0, 0, 5, 1, 0, 2]);

        let cumulative = schedule.cumulative();

        for pair in cumulative.values.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert_eq!(cumulative.values.len(), schedule.values.len());
    }

    #[test]
    fn test_cumulative_empty() {
        let schedule: TimeSeries<i32> = TimeSeries::new(2, Vec::new());
        assert!(schedule.cumulative().is_empty());
    }

    #[test]
    fn test_end_year_exclusive() {
        let a = series(2, &[1.0, 1.0, 1.0]);
        assert_eq!(a.end_year(), 5);
        assert_eq!(TimeSeries::<f64>::default().end_year(), 0);
    }

    #[test]
    fn test_effective_prefers_manual() {
        let mut profile = OverridableProfile::from_computed(series(0, &[1.0, 2.0]));
        assert!(!profile.is_overridden());
        assert_eq!(profile.effective().values, vec![1.0, 2.0]);

        profile.manual = Some(series(0, &[9.0]));
        assert!(profile.is_overridden());
        assert_eq!(profile.effective().values, vec![9.0]);

        // Refreshing the computed side never disturbs the override.
        profile.refresh(series(0, &[5.0, 5.0]));
        assert_eq!(profile.effective().values, vec![9.0]);
        assert_eq!(profile.computed.values, vec![5.0, 5.0]);
    }
}
