//! Symmetric quadrature rules on the reference triangle.

use crate::types::RealScalar;
use lazy_static::lazy_static;
use std::collections::HashMap;
use thiserror::Error;

/// Quadrature rule lookup failure.
#[derive(Error, Debug)]
pub enum QuadratureError {
    /// No embedded rule with the requested number of points.
    #[error("no triangle rule with {0} points")]
    RuleNotFound(usize),
}

/// A quadrature rule on the reference triangle.
///
/// The same rule is applied to the test and the trial side of a double
/// integral.
pub struct TriangleQuadratureRule<T: RealScalar> {
    /// Polynomial degree the rule integrates exactly.
    pub order: usize,

    /// The number of points of the rule.
    pub npoints: usize,

    /// The point coordinates, stored consecutively: the first point starts
    /// at position zero, the second at position two.
    pub points: Vec<T>,

    /// One weight per point; the weights sum to the reference triangle
    /// area 1/2.
    pub weights: Vec<T>,
}

lazy_static! {
    static ref TRIANGLE_RULE_DEFINITIONS: HashMap<usize, (usize, Vec<f64>, Vec<f64>)> =
        HashMap::from([
            (
                1,
                (
                    1,
                    vec![1.0 / 3.0, 1.0 / 3.0],
                    vec![0.5],
                ),
            ),
            (
                3,
                (
                    2,
                    vec![
                        1.0 / 6.0,
                        1.0 / 6.0,
                        2.0 / 3.0,
                        1.0 / 6.0,
                        1.0 / 6.0,
                        2.0 / 3.0,
                    ],
                    vec![1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0],
                ),
            ),
            (
                6,
                (
                    4,
                    vec![
                        0.445948490915965,
                        0.445948490915965,
                        0.108103018168070,
                        0.445948490915965,
                        0.445948490915965,
                        0.108103018168070,
                        0.091576213509771,
                        0.091576213509771,
                        0.816847572980459,
                        0.091576213509771,
                        0.091576213509771,
                        0.816847572980459,
                    ],
                    vec![
                        0.111690794839005,
                        0.111690794839005,
                        0.111690794839005,
                        0.054975871827661,
                        0.054975871827661,
                        0.054975871827661,
                    ],
                ),
            ),
        ]);
}

/// Return the embedded symmetric triangle rule with the given number of
/// points.
///
/// If no such rule is embedded, [`QuadratureError::RuleNotFound`] is
/// returned.
pub fn triangle_rule<T: RealScalar>(
    npoints: usize,
) -> Result<TriangleQuadratureRule<T>, QuadratureError> {
    if let Some((order, points, weights)) = TRIANGLE_RULE_DEFINITIONS.get(&npoints) {
        Ok(TriangleQuadratureRule {
            order: *order,
            npoints,
            points: points
                .iter()
                .map(|p| num::cast::<f64, T>(*p).unwrap())
                .collect(),
            weights: weights
                .iter()
                .map(|w| num::cast::<f64, T>(*w).unwrap())
                .collect(),
        })
    } else {
        Err(QuadratureError::RuleNotFound(npoints))
    }
}

/// The numbers of points for which triangle rules are embedded.
pub fn available_rules() -> Vec<usize> {
    let mut npoints = TRIANGLE_RULE_DEFINITIONS
        .keys()
        .copied()
        .collect::<Vec<_>>();
    npoints.sort_unstable();
    npoints
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use paste::paste;

    macro_rules! test_volume {
        ($($npoints:literal),+) => {
            $(
                paste! {
                    #[test]
                    fn [<test_weights_sum_to_volume_ $npoints>]() {
                        let rule = triangle_rule::<f64>($npoints).unwrap();
                        assert_eq!(rule.npoints, $npoints);
                        assert_eq!(rule.weights.len(), $npoints);
                        assert_eq!(rule.points.len(), 2 * $npoints);
                        let sum: f64 = rule.weights.iter().sum();
                        assert_relative_eq!(sum, 0.5, max_relative = 1e-14);
                    }
                }
            )*
        };
    }

    test_volume!(1, 3, 6);

    fn integrate(rule: &TriangleQuadratureRule<f64>, f: impl Fn(f64, f64) -> f64) -> f64 {
        rule.points
            .chunks_exact(2)
            .zip(&rule.weights)
            .map(|(p, w)| w * f(p[0], p[1]))
            .sum()
    }

    #[test]
    fn test_three_point_rule_is_degree_two() {
        let rule = triangle_rule::<f64>(3).unwrap();
        // Exact monomial integrals over the reference triangle.
        assert_relative_eq!(integrate(&rule, |x, _| x), 1.0 / 6.0, max_relative = 1e-14);
        assert_relative_eq!(
            integrate(&rule, |x, y| x * y),
            1.0 / 24.0,
            max_relative = 1e-14
        );
        assert_relative_eq!(
            integrate(&rule, |x, _| x * x),
            1.0 / 12.0,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_six_point_rule_is_degree_four() {
        let rule = triangle_rule::<f64>(6).unwrap();
        assert_relative_eq!(
            integrate(&rule, |x, y| x * x * y * y),
            1.0 / 180.0,
            max_relative = 1e-13
        );
        assert_relative_eq!(
            integrate(&rule, |x, _| x * x * x * x),
            1.0 / 30.0,
            max_relative = 1e-13
        );
    }

    #[test]
    fn test_missing_rule() {
        assert!(triangle_rule::<f64>(2).is_err());
        assert_eq!(available_rules(), vec![1, 3, 6]);
    }
}
