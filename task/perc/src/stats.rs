use log::*;
use rand::Rng;

use crate::{Error, Percolation, Result};

////////////////////////////////////////////////////////////////////////////////

/// Critical value of the standard normal distribution for a 95% interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Percolation threshold estimate gathered from independent trials on an
/// `n` x `n` grid.
///
/// Each trial opens uniformly random blocked sites until the system
/// percolates and records the fraction of sites that ended up open.
#[derive(Clone, Debug)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

impl PercolationStats {
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::with_rng(n, trials, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        check_arguments(n, trials)?;

        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let system = run_until_percolation(n, rng)?;
            debug!(
                "trial #{trial}: {} sites open, threshold {:.6}",
                system.number_of_open_sites(),
                system.open_fraction()
            );
            trace!("trial #{trial} grid:\n{system}");
            thresholds.push(system.open_fraction());
        }

        let stats = Self { thresholds };
        info!(
            "{trials} trials on {n}x{n} grid, mean threshold {:.6}",
            stats.mean()
        );
        Ok(stats)
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        mean(&self.thresholds)
    }

    /// Sample standard deviation of the percolation threshold.
    /// A single trial has no spread, so it yields `0.0`.
    pub fn stddev(&self) -> f64 {
        sample_stddev(&self.thresholds)
    }

    pub fn confidence_low(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_high(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}

fn run_until_percolation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Percolation> {
    let mut system = Percolation::new(n)?;
    while !system.percolates() {
        let row = rng.gen_range(0..n);
        let col = rng.gen_range(0..n);
        if !system.is_open(row, col)? {
            system.open(row, col)?;
        }
    }
    Ok(system)
}

////////////////////////////////////////////////////////////////////////////////

/// Returns an estimate of the probability that an `n` x `n` grid, in which
/// every site is open independently with probability `site_probability`,
/// percolates.
pub fn estimate_percolation_probability<R: Rng + ?Sized>(
    n: usize,
    site_probability: f64,
    trials: usize,
    rng: &mut R,
) -> Result<f64> {
    check_arguments(n, trials)?;
    if !(0.0..=1.0).contains(&site_probability) {
        return Err(Error::InvalidArgument(format!(
            "site probability {site_probability} is not in [0, 1]"
        )));
    }

    let mut percolated = 0;
    for _ in 0..trials {
        let mut system = Percolation::new(n)?;
        for row in 0..n {
            for col in 0..n {
                if rng.gen_bool(site_probability) {
                    system.open(row, col)?;
                }
            }
        }
        if system.percolates() {
            percolated += 1;
        }
    }

    let probability = percolated as f64 / trials as f64;
    debug!("p = {site_probability}: {percolated} of {trials} grids percolate");
    Ok(probability)
}

////////////////////////////////////////////////////////////////////////////////

fn check_arguments(n: usize, trials: usize) -> Result<()> {
    if n == 0 || trials == 0 {
        return Err(Error::InvalidArgument(format!(
            "grid size and trials must be greater than zero, got n = {n}, trials = {trials}"
        )));
    }
    Ok(())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let squares = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    (squares / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sample_statistics() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert!((sample_stddev(&values) - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(sample_stddev(&[0.5]), 0.0);
    }
}
