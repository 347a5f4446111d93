//! Modified Helmholtz (real exponent) kernels.

use super::{m_inv_4pi, RegularKernel};
use crate::types::RealScalar;

/// Modified Helmholtz single layer kernel `exp(-omega r) / (4 pi r)`.
pub struct ModifiedHelmholtzSingleLayer<T: RealScalar> {
    /// The real exponent of the kernel.
    pub omega: T,
}

impl<T: RealScalar> RegularKernel<T, 1> for ModifiedHelmholtzSingleLayer<T> {
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
            result[0][lane] = m_inv_4pi * num::Float::exp(-(self.omega * dist)) / dist;
        }
    }
}
