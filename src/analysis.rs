//! Fitting measured running times against theoretical complexity terms.
//!
//! For one algorithm, each timed run gives a sample `(n, h, t)`. The scaling
//! constant `K` is the mean of `t / f(n, h)` over the samples where the
//! theoretical term `f` is meaningfully non-zero; `K * f(n, h)` is then the
//! adjusted theoretical time that can be compared row by row with `t`.

use std::fmt;

/// Theoretical values at or below this are ignored when fitting.
pub const MIN_THEORETICAL: f64 = 1e-6;

/// Complexity term an algorithm is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Complexity {
    /// `n * h`
    NTimesH,
    /// `n * log2(n)`
    NLogN,
    /// `n * log2(h)`
    NLogH,
    /// `n`
    Linear,
}

impl Complexity {
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::NTimesH => "O(N * H)",
            Complexity::NLogN => "O(N log N)",
            Complexity::NLogH => "O(N log H)",
            Complexity::Linear => "O(N)",
        }
    }

    /// Value of the complexity term for input size `n` and frontier size `h`.
    ///
    /// Logarithmic terms are zero when their argument is at most one.
    pub fn theoretical(&self, n: usize, h: usize) -> f64 {
        let nf = n as f64;
        match self {
            Complexity::NTimesH => nf * h as f64,
            Complexity::NLogN if n > 1 => nf * nf.log2(),
            Complexity::NLogH if n > 1 && h > 1 => nf * (h as f64).log2(),
            Complexity::NLogN | Complexity::NLogH => 0.0,
            Complexity::Linear => nf,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One timed run of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Input size.
    pub n: usize,
    /// Frontier size.
    pub h: usize,
    /// Wall-clock time in microseconds.
    pub elapsed_us: f64,
}

/// Mean of `elapsed_us / theoretical` over the qualifying samples, or `1.0`
/// if none qualifies.
pub fn scaling_constant(complexity: Complexity, samples: &[Sample]) -> f64 {
    let ratios: Vec<f64> = samples
        .iter()
        .filter_map(|s| {
            let theo = complexity.theoretical(s.n, s.h);
            (theo > MIN_THEORETICAL).then(|| s.elapsed_us / theo)
        })
        .collect();
    if ratios.is_empty() {
        1.0
    } else {
        ratios.iter().sum::<f64>() / ratios.len() as f64
    }
}

/// A single row of a fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRow {
    pub n: usize,
    pub h: usize,
    pub experimental_us: f64,
    pub theoretical: f64,
    /// `k_avg * theoretical`, in microseconds.
    pub adjusted_us: f64,
}

/// An algorithm's samples fitted against one complexity term.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingFit {
    pub complexity: Complexity,
    pub k_avg: f64,
    pub rows: Vec<FitRow>,
}

impl ScalingFit {
    pub fn fit(complexity: Complexity, samples: &[Sample]) -> Self {
        let k_avg = scaling_constant(complexity, samples);
        let rows = samples
            .iter()
            .map(|s| {
                let theoretical = complexity.theoretical(s.n, s.h);
                FitRow {
                    n: s.n,
                    h: s.h,
                    experimental_us: s.elapsed_us,
                    theoretical,
                    adjusted_us: k_avg * theoretical,
                }
            })
            .collect();
        Self {
            complexity,
            k_avg,
            rows,
        }
    }

    /// Mean measured time over all rows; zero for an empty fit.
    pub fn mean_experimental_us(&self) -> f64 {
        mean(self.rows.iter().map(|r| r.experimental_us))
    }

    /// Mean theoretical value over all rows; zero for an empty fit.
    pub fn mean_theoretical(&self) -> f64 {
        mean(self.rows.iter().map(|r| r.theoretical))
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let len = values.len();
    if len == 0 {
        0.0
    } else {
        values.sum::<f64>() / len as f64
    }
}
