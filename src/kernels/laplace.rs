//! Laplace layer potential kernels.

use super::{m_inv_4pi, RegularKernel};
use crate::types::RealScalar;

/// Laplace single layer kernel `1 / (4 pi r)`.
pub struct LaplaceSingleLayer;

impl<T: RealScalar> RegularKernel<T, 1> for LaplaceSingleLayer {
    fn evaluate<const W: usize>(
        &self,
        test_point: &[T; 3],
        trial_points: &[[T; W]; 3],
        _test_normal: &[T; 3],
        _trial_normals: &[[T; W]; 3],
        result: &mut [[T; W]; 1],
    ) {
        let m_inv_4pi = m_inv_4pi::<T>();
        for lane in 0..W {
            let diff0 = trial_points[0][lane] - test_point[0];
            let diff1 = trial_points[1][lane] - test_point[1];
            let diff2 = trial_points[2][lane] - test_point[2];
            let dist = num::Float::sqrt(diff0 * diff0 + diff1 * diff1 + diff2 * diff2);
            result[0][lane] = m_inv_4pi / dist;
        }
    }
}

/// Laplace double layer kernel `-(d . n_trial) / (4 pi r^3)`.
pub struct LaplaceDoubleLayer;

impl<T: RealScalar> RegularKernel<T, 1> for LaplaceDoubleLayer {
    fn evaluate<const W: usize>(
        &self,
        test_point: &[T; 3],
        trial_points: &[[T; W]; 3],
        _test_normal: &[T; 3],
        trial_normals: &[[T; W]; 3],
        result: &mut [[T; W]; 1],
    ) {
        let m_inv_4pi = m_inv_4pi::<T>();
        for lane in 0..W {
            let diff0 = trial_points[0][lane] - test_point[0];
            let diff1 = trial_points[1][lane] - test_point[1];
            let diff2 = trial_points[2][lane] - test_point[2];
            let dist = num::Float::sqrt(diff0 * diff0 + diff1 * diff1 + diff2 * diff2);
            let inner = diff0 * trial_normals[0][lane]
                + diff1 * trial_normals[1][lane]
                + diff2 * trial_normals[2][lane];
            // The factor is divided out first so the Helmholtz kernels reduce
            // to this one exactly at wavenumber zero.
            let factor = m_inv_4pi / (dist * dist * dist);
            result[0][lane] = -(factor * inner);
        }
    }
}

/// Laplace adjoint double layer kernel `(d . n_test) / (4 pi r^3)`.
pub struct LaplaceAdjointDoubleLayer;

impl<T: RealScalar> RegularKernel<T, 1> for LaplaceAdjointDoubleLayer {
    fn evaluate<const W: usize>(
        &self,
        test_point: &[T; 3],
        trial_points: &[[T; W]; 3],
        test_normal: &[T; 3],
        _trial_normals: &[[T; W]; 3],
        result: &mut [[T; W]; 1],
    ) {
        let m_inv_4pi = m_inv_4pi::<T>();
        for lane in 0..W {
            let diff0 = trial_points[0][lane] - test_point[0];
            let diff1 = trial_points[1][lane] - test_point[1];
            let diff2 = trial_points[2][lane] - test_point[2];
            let dist = num::Float::sqrt(diff0 * diff0 + diff1 * diff1 + diff2 * diff2);
            let inner =
                diff0 * test_normal[0] + diff1 * test_normal[1] + diff2 * test_normal[2];
            let factor = m_inv_4pi / (dist * dist * dist);
            result[0][lane] = factor * inner;
        }
    }
}
