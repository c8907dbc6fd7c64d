//! Piecewise-linear value mapping
//!
//! Maps an animated input (typically a drag offset) through a fixed set of
//! control points. Curves are `const` and evaluate without allocating, so
//! they can run every frame.

/// Linear interpolation between two values
pub trait Interpolate: Copy {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// What happens to inputs outside the first/last control point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Continue the slope of the outermost segment
    #[default]
    Extend,
    /// Hold the outermost output value
    Clamp,
}

/// A curve through `N` control points
///
/// `input` must be strictly increasing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiecewiseLinear<const N: usize> {
    input: [f32; N],
    output: [f32; N],
    extrapolate: Extrapolate,
}

impl<const N: usize> PiecewiseLinear<N> {
    pub const fn new(input: [f32; N], output: [f32; N]) -> Self {
        assert!(N >= 2, "a curve needs at least two control points");
        Self {
            input,
            output,
            extrapolate: Extrapolate::Extend,
        }
    }

    pub const fn clamped(mut self) -> Self {
        self.extrapolate = Extrapolate::Clamp;
        self
    }

    pub fn extrapolate(&self) -> Extrapolate {
        self.extrapolate
    }

    /// Evaluate the curve at `x`
    pub fn map(&self, x: f32) -> f32 {
        let last = N - 1;
        if self.extrapolate == Extrapolate::Clamp {
            if x <= self.input[0] {
                return self.output[0];
            }
            if x >= self.input[last] {
                return self.output[last];
            }
        }

        // Segment whose right edge is the first control point >= x; inputs
        // beyond either end fall into the outermost segment.
        let mut hi = 1;
        while hi < last && x > self.input[hi] {
            hi += 1;
        }
        let lo = hi - 1;

        let t = (x - self.input[lo]) / (self.input[hi] - self.input[lo]);
        self.output[lo].lerp(&self.output[hi], t)
    }
}
