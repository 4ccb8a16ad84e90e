use num::Float;

/// Similar to numpy.interp. `xp` must be ascending, non empty and as long as `fp`.
pub(crate) fn interp<F: Float>(x_input: impl IntoIterator<Item = F>, xp: &[F], fp: &[F]) -> Vec<F> {
    debug_assert!(!xp.is_empty());
    debug_assert_eq!(xp.len(), fp.len());

    x_input.into_iter().map(|x| interp_one(x, xp, fp)).collect()
}

pub(crate) fn interp_one<F: Float>(x: F, xp: &[F], fp: &[F]) -> F {
    let last = xp.len() - 1;

    // Base cases
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }

    for i in 0..last {
        let (x1, x2) = (xp[i], xp[i + 1]);

        if x1 <= x && x <= x2 {
            let (y1, y2) = (fp[i], fp[i + 1]);

            if x == x2 {
                return y2;
            }

            return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
        }
    }

    // Only NaN gets here
    F::nan()
}

/// Running total of `values`
pub(crate) fn cumsum<F: Float>(values: &[F]) -> Vec<F> {
    values
        .iter()
        .scan(F::zero(), |total, v| {
            *total = *total + *v;
            Some(*total)
        })
        .collect()
}

#[test]
fn test_interp() {
    let x = [0., 1., 1.5, 2.72, 3.24];
    let xs = [1., 2., 3.];
    let ys = [3., 2., 0.];

    assert_eq!(interp(x, &xs, &ys), vec![3., 3., 2.5, 0.5599999999999996, 0.]);

    let x = [2.5, -1., 7.5];
    let xs = [0., 1., 2., 3., 4.5];
    let ys = [0., 2., 5., 3., 2.];

    assert_eq!(interp(x, &xs, &ys), vec![4., 0., 2.]);
    assert!(interp_one(f64::NAN, &xs, &ys).is_nan());
    assert_eq!(interp_one(7., &[3.], &[0.25]), 0.25);
}

#[test]
fn test_cumsum() {
    assert_eq!(cumsum(&[1., 2., 3.5]), vec![1., 3., 6.5]);
    assert!(cumsum::<f64>(&[]).is_empty());
}
