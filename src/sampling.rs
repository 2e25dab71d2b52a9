//! Uniform sampling of the plotted function.

use std::sync::Arc;

use crate::function::evaluate;
use crate::geom::Point;
use crate::params::{PlotParams, YClamp};
use crate::view::Range;

/// Slack added to the upper bound so the closing sample survives rounding.
pub const BOUNDARY_EPSILON: f64 = 1e-12;

/// Index-aligned samples of the function.
///
/// `xs` is strictly increasing and both sequences hold only finite values.
/// Undefined points are omitted from both sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleSet {
    /// Create an empty sample set.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let mut set = Self::new();
        for &(x, y) in pairs {
            set.push(x, y);
        }
        set
    }

    fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Sampled X values.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Function values, aligned with [`xs`](Self::xs).
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Check whether no sample survived.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// A curve needs at least two samples.
    pub fn is_plottable(&self) -> bool {
        self.len() >= 2
    }

    /// Iterate samples as points, applying the Y clamp.
    pub fn points(&self, clamp: YClamp) -> impl Iterator<Item = Point> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(move |(&x, &y)| Point::new(x, clamp.apply(y)))
    }

    /// Range of the sampled X values.
    pub fn x_range(&self) -> Option<Range> {
        let first = *self.xs.first()?;
        let last = *self.xs.last()?;
        Some(Range::new(first, last))
    }

    /// Range of the (optionally clamped) Y values.
    pub fn y_range(&self, clamp: YClamp) -> Option<Range> {
        let mut values = self.ys.iter().map(|&y| clamp.apply(y));
        let first = values.next()?;
        let mut range = Range::new(first, first);
        for y in values {
            range.expand_to_include(y);
        }
        Some(range)
    }
}

/// Sample the function over `params` without caching.
///
/// Invalid parameters are not rejected here: a reversed domain or a
/// non-positive step yields at most one sample, and the sample count is not
/// bounded. [`SampleProvider::samples`] validates first.
pub fn sample(params: PlotParams) -> SampleSet {
    let mut set = SampleSet::new();
    let limit = params.x_max + BOUNDARY_EPSILON;
    if !(params.step > 0.0) || !params.x_min.is_finite() || !limit.is_finite() {
        if let Some(y) = evaluate(params.x_min).filter(|_| params.x_min <= limit) {
            set.push(params.x_min, y);
        }
        return set;
    }
    let mut index: u64 = 0;
    let mut previous: Option<f64> = None;
    loop {
        let x = params.x_min + index as f64 * params.step;
        index += 1;
        if x > limit {
            break;
        }
        // Steps below the float spacing at x repeat grid positions.
        if previous.is_some_and(|prev| x <= prev) {
            continue;
        }
        previous = Some(x);
        if let Some(y) = evaluate(x) {
            set.push(x, y);
        }
    }
    set
}

/// Owner of the sampling parameters with a memoized sample set.
#[derive(Debug, Clone, Default)]
pub struct SampleProvider {
    params: PlotParams,
    cache: Option<Arc<SampleSet>>,
    generation: u64,
}

impl SampleProvider {
    /// Create a provider for the given domain and step.
    pub fn new(x_min: f64, x_max: f64, step: f64) -> Self {
        Self::with_params(PlotParams::new(x_min, x_max, step))
    }

    /// Create a provider from a parameter set.
    pub fn with_params(params: PlotParams) -> Self {
        Self {
            params,
            cache: None,
            generation: 0,
        }
    }

    /// Current parameters.
    pub fn params(&self) -> PlotParams {
        self.params
    }

    /// Lower domain bound.
    pub fn x_min(&self) -> f64 {
        self.params.x_min
    }

    /// Upper domain bound.
    pub fn x_max(&self) -> f64 {
        self.params.x_max
    }

    /// Sampling interval.
    pub fn step(&self) -> f64 {
        self.params.step
    }

    /// Parameter generation (increments whenever a value changes).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Set the lower domain bound.
    pub fn set_x_min(&mut self, x_min: f64) {
        self.set_params(PlotParams { x_min, ..self.params });
    }

    /// Set the upper domain bound.
    pub fn set_x_max(&mut self, x_max: f64) {
        self.set_params(PlotParams { x_max, ..self.params });
    }

    /// Set the sampling interval.
    pub fn set_step(&mut self, step: f64) {
        self.set_params(PlotParams { step, ..self.params });
    }

    /// Replace all parameters at once.
    pub fn set_params(&mut self, params: PlotParams) {
        if params == self.params {
            return;
        }
        self.params = params;
        self.cache = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Samples for the current parameters.
    ///
    /// The set is computed on first use and shared until a setter changes a
    /// parameter. Parameters rejected by [`PlotParams::validate`] yield an
    /// empty set without sampling.
    pub fn samples(&mut self) -> Arc<SampleSet> {
        if let Some(cached) = &self.cache {
            return Arc::clone(cached);
        }
        let set = match self.params.validate() {
            Ok(()) => Arc::new(sample(self.params)),
            Err(err) => {
                tracing::debug!(%err, "skipped sampling of rejected parameters");
                Arc::new(SampleSet::new())
            }
        };
        tracing::debug!(
            x_min = self.params.x_min,
            x_max = self.params.x_max,
            step = self.params.step,
            samples = set.len(),
            "sampled function"
        );
        self.cache = Some(Arc::clone(&set));
        set
    }
}
