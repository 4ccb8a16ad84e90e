use crate::error::{FuzzyError, Result};

/// Evenly spaced points over a closed interval, like numpy.linspace
pub struct Linspace {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Linspace {
    pub fn new(min: f64, max: f64, n: usize) -> Self {
        let step = if n > 1 {
            let num_steps = (n - 1) as f64;
            (max - min) / num_steps
        } else {
            0.
        };
        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * i as f64)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Linspace {}

fn check_range(start: f64, end: f64, step: f64) -> Result<()> {
    if !(start.is_finite() && end.is_finite() && step.is_finite()) {
        return Err(FuzzyError::invalid("universe bounds and step must be finite"));
    }
    if step <= 0. {
        return Err(FuzzyError::invalid(format!("step must be positive, got {step}")));
    }
    if end < start {
        return Err(FuzzyError::invalid(format!("universe end {end} is before start {start}")));
    }

    Ok(())
}

/// `n` points starting at `start`, `step` apart
fn stepped(start: f64, step: f64, n: usize) -> Vec<f64> {
    let end = start + step * n.saturating_sub(1) as f64;

    Linspace::new(start, end, n).collect()
}

/// Discretizes `[min, max]` with the given step. The last point is `max` only when
/// the step divides the range, and the division `(max - min) / step` itself can
/// round just under a whole number: `universe(0., 0.3, 0.1)` stops at `0.2`.
pub fn universe(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    check_range(min, max, step)?;

    // floor drops a trailing partial step
    let num = ((max - min) / step).floor() as usize + 1;

    Ok(stepped(min, step, num))
}

/// Half open `[start, stop)` stepped by `step`, like numpy.arange
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>> {
    check_range(start, stop, step)?;

    let num = ((stop - start) / step).ceil() as usize;

    Ok(stepped(start, step, num))
}

#[test]
fn test_linspace() {
    let points: Vec<_> = Linspace::new(0., 1., 5).collect();

    assert_eq!(points, vec![0., 0.25, 0.5, 0.75, 1.]);
    assert_eq!(Linspace::new(3., 9., 1).collect::<Vec<_>>(), vec![3.]);
    assert_eq!(Linspace::new(3., 9., 0).count(), 0);
    assert_eq!(Linspace::new(0., 10., 11).len(), 11);
}

#[test]
fn test_universe() {
    let u = universe(0., 100., 1.).unwrap();

    assert_eq!(u.len(), 101);
    assert_eq!(u[0], 0.);
    assert_eq!(u[100], 100.);

    assert_eq!(universe(0., 1., 0.3).unwrap().len(), 4);
    assert_eq!(universe(5., 5., 1.).unwrap(), vec![5.]);
    assert_eq!(universe(-1., 1., 0.5).unwrap(), vec![-1., -0.5, 0., 0.5, 1.]);
    // 0.3 / 0.1 is 2.9999999999999996, so the endpoint is lost
    assert_eq!(universe(0., 0.3, 0.1).unwrap().len(), 3);
    assert!(universe(0., 1., 0.).is_err());
    assert!(universe(1., 0., 0.1).is_err());
    assert!(universe(0., f64::NAN, 0.1).is_err());
}

#[test]
fn test_arange() {
    assert_eq!(arange(150., 155., 1.).unwrap(), vec![150., 151., 152., 153., 154.]);
    assert_eq!(arange(0., 11., 0.1).unwrap().len(), 110);
    assert!(arange(0., 0., 1.).unwrap().is_empty());
    assert!(arange(0., 1., -1.).is_err());
}
