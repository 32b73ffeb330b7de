//! Parity tests against an independent Lagrange-basis derivative.
//!
//! Both stencils are the derivative of the quadratic interpolating three
//! nodes, so the closed-form weights below must agree with the library to
//! rounding error on any grid.

use findiff_rs::prelude::*;

/// Derivative at `at` of the quadratic through `(nodes, values)`.
fn lagrange_derivative(nodes: [f64; 3], values: [f64; 3], at: f64) -> f64 {
    let mut sum = 0.0;
    for j in 0..3 {
        let (a, b) = match j {
            0 => (nodes[1], nodes[2]),
            1 => (nodes[0], nodes[2]),
            _ => (nodes[0], nodes[1]),
        };
        let weight = ((at - a) + (at - b)) / ((nodes[j] - a) * (nodes[j] - b));
        sum += weight * values[j];
    }
    sum
}

fn lagrange_fd2(x: &[f64], f: &[f64]) -> Vec<f64> {
    let n = x.len();
    (0..n)
        .map(|i| {
            let j = i.clamp(1, n - 2) - 1;
            lagrange_derivative(
                [x[j], x[j + 1], x[j + 2]],
                [f[j], f[j + 1], f[j + 2]],
                x[i],
            )
        })
        .collect()
}

fn wobbly_grid(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 + 0.3 * (i as f64).sin()).collect();
    let f: Vec<f64> = x.iter().map(|v| v.sin() * (-0.1 * v).exp()).collect();
    (x, f)
}

#[test]
fn test_matches_lagrange_weights() {
    let (x, f) = wobbly_grid(60);
    let expected = lagrange_fd2(&x, &f);
    let actual = fd2(&x, &f).unwrap();
    assert!(agrees_within(&actual, &expected, 1e-10).unwrap());
}

#[test]
fn test_matches_lagrange_on_reversed_grid() {
    let (mut x, mut f) = wobbly_grid(40);
    x.reverse();
    f.reverse();
    let expected = lagrange_fd2(&x, &f);
    let actual = fd2(&x, &f).unwrap();
    assert!(agrees_within(&actual, &expected, 1e-10).unwrap());
}

#[test]
fn test_matches_lagrange_on_three_points() {
    let x = [0.1, 0.7, 0.75];
    let f = [2.0, -1.0, 0.5];
    let expected = lagrange_fd2(&x, &f);
    let actual = fd2(&x, &f).unwrap();
    assert!(agrees_within(&actual, &expected, 1e-9).unwrap());
}

#[test]
fn test_public_stencils_compose_to_fd2() {
    let (x, f) = wobbly_grid(12);
    let n = x.len();
    let dfdx = fd2(&x, &f).unwrap();

    assert_eq!(dfdx[0], one_sided_fd2(&StencilWindow::leading(&x, &f)));
    assert_eq!(dfdx[n - 1], one_sided_fd2(&StencilWindow::trailing(&x, &f)));
    for i in 1..n - 1 {
        assert_eq!(dfdx[i], centered_fd2(&x, &f, i));
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_pass_is_bit_identical() {
    let (x, f) = wobbly_grid(20_000);
    let sequential = fd2(&x, &f).unwrap();
    let parallel = Fd2::new()
        .parallel(true)
        .adapter(Batch)
        .build()
        .unwrap()
        .differentiate(&x, &f)
        .unwrap();

    let bits = |v: &[f64]| v.iter().map(|d| d.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&parallel.dfdx), bits(&sequential));
}
