use std::{f64::consts::PI, io::Write};

use crate::error::{BenchError, Result};

/// Running moments of a sample
#[derive(Debug, Default, Clone, Copy)]
pub struct Summary {
    n: usize,
    sum: f64,
    sum_sq: f64,
}

impl Summary {
    #[inline]
    pub fn push(&mut self, x: f64) {
        self.n += 1;
        self.sum += x;
        self.sum_sq += x * x;
    }

    pub fn mean(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.sum / self.n as f64
    }

    pub fn variance(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        let mean = self.mean();
        self.sum_sq / self.n as f64 - mean * mean
    }
}

pub struct Histogram {
    pub minv: f64,
    pub binwidth: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn from_samples(samples: &[f64], nb: usize) -> Result<Self> {
        if nb == 0 {
            return Err(BenchError::InvalidArgument("bins must be positive".into()));
        }
        if samples.is_empty() {
            return Err(BenchError::InvalidArgument("no samples to bin".into()));
        }

        let (minv, maxv) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let binwidth = ((maxv - minv) / nb as f64).max(f64::MIN_POSITIVE);

        let mut counts = vec![0usize; nb];
        for &v in samples {
            let j = (((v - minv) / binwidth).floor() as usize).min(nb - 1);
            counts[j] += 1;
        }

        Ok(Self {
            minv,
            binwidth,
            counts,
        })
    }

    pub fn centre(&self, i: usize) -> f64 {
        self.binwidth * (i as f64 + 0.5) + self.minv
    }

    /// Expected count in bin `i` for `n` draws of N(0, sigma^2)
    pub fn expected(&self, i: usize, n: usize, sigma: f64) -> f64 {
        let x = self.centre(i);
        let a = n as f64 * self.binwidth / (sigma * (2.0 * PI).sqrt());
        a * (-0.5 * x * x / (sigma * sigma)).exp()
    }

    pub fn write_to<W: Write>(&self, out: &mut W, n: usize, sigma: f64) -> Result<()> {
        for (i, count) in self.counts.iter().enumerate() {
            writeln!(
                out,
                "{:.6} {} {:.1}",
                self.centre(i),
                count,
                self.expected(i, n, sigma)
            )?;
        }
        Ok(())
    }
}
