//! Green's function kernel evaluators for regular element pairs.
//!
//! Each kernel evaluates one test point against a lane group of `W` trial
//! points and fills `C` real result components per lane: one for real
//! kernels, an interleaved (re, im) pair for complex kernels and six for the
//! Helmholtz gradient. Complex arithmetic is carried as parallel real lanes
//! in expanded `(a c - b d, a d + b c)` form so the evaluators stay usable
//! on targets without complex number support; the tests pin this expansion
//! against reference complex arithmetic.
//!
//! Every kernel runs one loop body per lane, so the scalar (`W = 1`)
//! evaluation and the wider ones perform identical operations in identical
//! order. None of the kernels guard against coincident points: `r = 0`
//! produces infinities or NaNs.

pub mod helmholtz;
pub mod laplace;
pub mod modified_helmholtz;

use crate::types::RealScalar;
use num::traits::FloatConst;

/// A Green's function kernel evaluated at one test point against a lane
/// group of trial points.
///
/// `C` is the number of real components produced per lane.
pub trait RegularKernel<T: RealScalar, const C: usize>: Sync {
    /// Evaluate the kernel for every lane of a trial group.
    ///
    /// Trial data is laid out coordinate-lane, matching
    /// [`crate::grid::TriangleGrid::corners_group`].
    fn evaluate<const W: usize>(
        &self,
        test_point: &[T; 3],
        trial_points: &[[T; W]; 3],
        test_normal: &[T; 3],
        trial_normals: &[[T; W]; 3],
        result: &mut [[T; W]; C],
    );
}

pub(crate) fn m_inv_4pi<T: RealScalar>() -> T {
    num::cast::<f64, T>(0.25 * f64::FRAC_1_PI()).unwrap()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RegularKernel;
    use approx::assert_relative_eq;
    use rand::prelude::*;

    /// A reproducible test configuration: one test point with unit normal
    /// and a lane group of trial points kept at distance >= 1 from it.
    pub(crate) struct SampledPair<const W: usize> {
        pub test_point: [f64; 3],
        pub test_normal: [f64; 3],
        pub trial_points: [[f64; W]; 3],
        pub trial_normals: [[f64; W]; 3],
    }

    fn random_unit_vector(rng: &mut StdRng) -> [f64; 3] {
        let v: [f64; 3] = std::array::from_fn(|_| rng.gen_range(-1.0..1.0));
        let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        [v[0] / length, v[1] / length, v[2] / length]
    }

    pub(crate) fn sample_pair<const W: usize>(seed: u64) -> SampledPair<W> {
        let mut rng = StdRng::seed_from_u64(seed);
        let test_point = std::array::from_fn(|_| rng.gen_range(-0.5..0.5));
        let test_normal = random_unit_vector(&mut rng);
        let mut trial_points = [[0.0; W]; 3];
        let mut trial_normals = [[0.0; W]; 3];
        for lane in 0..W {
            // Shift along x keeps every trial point well separated.
            let point = [
                2.0 + rng.gen_range(0.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            ];
            let normal = random_unit_vector(&mut rng);
            for coord in 0..3 {
                trial_points[coord][lane] = point[coord];
                trial_normals[coord][lane] = normal[coord];
            }
        }
        SampledPair {
            test_point,
            test_normal,
            trial_points,
            trial_normals,
        }
    }

    fn extract_lane<const W: usize>(group: &[[f64; W]; 3], lane: usize) -> [[f64; 1]; 3] {
        std::array::from_fn(|coord| [group[coord][lane]])
    }

    /// Check that a width-`W` evaluation agrees lane by lane with the scalar
    /// evaluator.
    pub(crate) fn check_width_equivalence<const W: usize, const C: usize>(
        kernel: &impl RegularKernel<f64, C>,
        seed: u64,
    ) {
        let pair = sample_pair::<W>(seed);
        let mut wide = [[0.0; W]; C];
        kernel.evaluate(
            &pair.test_point,
            &pair.trial_points,
            &pair.test_normal,
            &pair.trial_normals,
            &mut wide,
        );
        for lane in 0..W {
            let mut narrow = [[0.0; 1]; C];
            kernel.evaluate(
                &pair.test_point,
                &extract_lane(&pair.trial_points, lane),
                &pair.test_normal,
                &extract_lane(&pair.trial_normals, lane),
                &mut narrow,
            );
            for component in 0..C {
                assert_relative_eq!(
                    wide[component][lane],
                    narrow[component][0],
                    max_relative = 1e-15
                );
            }
        }
    }
}
