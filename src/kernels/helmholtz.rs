//! Helmholtz layer potential kernels.
//!
//! Values are (re, im) pairs of real lanes. The double layer, adjoint double
//! layer and gradient kernels share one decomposition of the radial
//! derivative of the oscillatory kernel: a magnitude factor
//! `exp(i k r) / (4 pi r^3)` and a correction factor `(-1, k r)`, multiplied
//! in expanded complex form. A configured damping component multiplies the
//! magnitude by `exp(-k_im r)` and shifts the real part of the correction by
//! `-k_im r`; when no damping is configured those operations are skipped
//! entirely, which makes the wavenumber-zero case reduce exactly to the
//! Laplace kernels.

use super::{m_inv_4pi, RegularKernel};
use crate::types::RealScalar;

/// Wavenumber of a Helmholtz kernel, with an optional damping (imaginary)
/// component.
#[derive(Clone, Copy, Debug)]
pub struct Wavenumber<T: RealScalar> {
    /// Oscillation rate.
    pub re: T,
    /// Damping component; `None` configures the undamped kernel.
    pub im: Option<T>,
}

impl<T: RealScalar> Wavenumber<T> {
    /// A purely real wavenumber.
    pub fn real(re: T) -> Self {
        Self { re, im: None }
    }

    /// A complex wavenumber with damping component `im`.
    pub fn damped(re: T, im: T) -> Self {
        Self { re, im: Some(im) }
    }
}

/// The magnitude and correction factors of the derivative kernels at
/// distance `dist`, in (re, im) pairs.
#[inline]
fn derivative_factors<T: RealScalar>(wavenumber: &Wavenumber<T>, dist: T) -> (T, T, T, T) {
    let m_inv_4pi = m_inv_4pi::<T>();
    let kr = wavenumber.re * dist;
    let dist_cubed = dist * dist * dist;
    let mut factor1_re = m_inv_4pi * num::Float::cos(kr) / dist_cubed;
    let mut factor1_im = m_inv_4pi * num::Float::sin(kr) / dist_cubed;
    let mut factor2_re = -T::one();
    let factor2_im = kr;
    if let Some(damping) = wavenumber.im {
        let attenuation = num::Float::exp(-(damping * dist));
        factor1_re = factor1_re * attenuation;
        factor1_im = factor1_im * attenuation;
        factor2_re = factor2_re - damping * dist;
    }
    (factor1_re, factor1_im, factor2_re, factor2_im)
}

/// Helmholtz single layer kernel `exp(i k r) / (4 pi r)`.
pub struct HelmholtzSingleLayer<T: RealScalar> {
    /// The wavenumber of the kernel.
    pub wavenumber: Wavenumber<T>,
}

impl<T: RealScalar> RegularKernel<T, 2> for HelmholtzSingleLayer<T> {
    fn evaluate<const W: usize>(
        &self,
        test_point: &[T; 3],
        trial_points: &[[T; W]; 3],
        _test_normal: &[T; 3],
        _trial_normals: &[[T; W]; 3],
        result: &mut [[T; W]; 2],
    ) {
        let m_inv_4pi = m_inv_4pi::<T>();
        for lane in 0..W {
            let diff0 = trial_points[0][lane] - test_point[0];
            let diff1 = trial_points[1][lane] - test_point[1];
            let diff2 = trial_points[2][lane] - test_point[2];
            let dist = num::Float::sqrt(diff0 * diff0 + diff1 * diff1 + diff2 * diff2);
            let kr = self.wavenumber.re * dist;
            let mut value_re = m_inv_4pi * num::Float::cos(kr) / dist;
            let mut value_im = m_inv_4pi * num::Float::sin(kr) / dist;
            if let Some(damping) = self.wavenumber.im {
                let attenuation = num::Float::exp(-(damping * dist));
                value_re = value_re * attenuation;
                value_im = value_im * attenuation;
            }
            result[0][lane] = value_re;
            result[1][lane] = value_im;
        }
    }
}

/// Helmholtz double layer kernel: the radial derivative factors times
/// `(d . n_trial)`.
pub struct HelmholtzDoubleLayer<T: RealScalar> {
    /// The wavenumber of the kernel.
    pub wavenumber: Wavenumber<T>,
}

impl<T: RealScalar> RegularKernel<T, 2> for HelmholtzDoubleLayer<T> {
    fn evaluate<const W: usize>(
        &self,
        test_point: &[T; 3],
        trial_points: &[[T; W]; 3],
        _test_normal: &[T; 3],
        trial_normals: &[[T; W]; 3],
        result: &mut [[T; W]; 2],
    ) {
        for lane in 0..W {
            let diff0 = trial_points[0][lane] - test_point[0];
            let diff1 = trial_points[1][lane] - test_point[1];
            let diff2 = trial_points[2][lane] - test_point[2];
            let dist = num::Float::sqrt(diff0 * diff0 + diff1 * diff1 + diff2 * diff2);
            let inner = diff0 * trial_normals[0][lane]
                + diff1 * trial_normals[1][lane]
                + diff2 * trial_normals[2][lane];
            let (factor1_re, factor1_im, factor2_re, factor2_im) =
                derivative_factors(&self.wavenumber, dist);
            result[0][lane] = (factor1_re * factor2_re - factor1_im * factor2_im) * inner;
            result[1][lane] = (factor1_re * factor2_im + factor1_im * factor2_re) * inner;
        }
    }
}

/// Helmholtz adjoint double layer kernel: the radial derivative factors
/// times `-(d . n_test)`.
pub struct HelmholtzAdjointDoubleLayer<T: RealScalar> {
    /// The wavenumber of the kernel.
    pub wavenumber: Wavenumber<T>,
}

impl<T: RealScalar> RegularKernel<T, 2> for HelmholtzAdjointDoubleLayer<T> {
    fn evaluate<const W: usize>(
        &self,
        test_point: &[T; 3],
        trial_points: &[[T; W]; 3],
        test_normal: &[T; 3],
        _trial_normals: &[[T; W]; 3],
        result: &mut [[T; W]; 2],
    ) {
        for lane in 0..W {
            let diff0 = trial_points[0][lane] - test_point[0];
            let diff1 = trial_points[1][lane] - test_point[1];
            let diff2 = trial_points[2][lane] - test_point[2];
            let dist = num::Float::sqrt(diff0 * diff0 + diff1 * diff1 + diff2 * diff2);
            let inner =
                -(diff0 * test_normal[0] + diff1 * test_normal[1] + diff2 * test_normal[2]);
            let (factor1_re, factor1_im, factor2_re, factor2_im) =
                derivative_factors(&self.wavenumber, dist);
            result[0][lane] = (factor1_re * factor2_re - factor1_im * factor2_im) * inner;
            result[1][lane] = (factor1_re * factor2_im + factor1_im * factor2_re) * inner;
        }
    }
}

/// Negated trial-point gradient of the Helmholtz kernel: the negated
/// product of the derivative factors, scaled per component by `d`.
///
/// The six components are interleaved (re, im) pairs for x, y, z.
pub struct HelmholtzGradient<T: RealScalar> {
    /// The wavenumber of the kernel.
    pub wavenumber: Wavenumber<T>,
}

impl<T: RealScalar> RegularKernel<T, 6> for HelmholtzGradient<T> {
    fn evaluate<const W: usize>(
        &self,
        test_point: &[T; 3],
        trial_points: &[[T; W]; 3],
        _test_normal: &[T; 3],
        _trial_normals: &[[T; W]; 3],
        result: &mut [[T; W]; 6],
    ) {
        for lane in 0..W {
            let diff = [
                trial_points[0][lane] - test_point[0],
                trial_points[1][lane] - test_point[1],
                trial_points[2][lane] - test_point[2],
            ];
            let dist =
                num::Float::sqrt(diff[0] * diff[0] + diff[1] * diff[1] + diff[2] * diff[2]);
            let (factor1_re, factor1_im, factor2_re, factor2_im) =
                derivative_factors(&self.wavenumber, dist);
            let product_re = -(factor1_re * factor2_re - factor1_im * factor2_im);
            let product_im = -(factor1_re * factor2_im + factor1_im * factor2_re);
            for coord in 0..3 {
                result[2 * coord][lane] = product_re * diff[coord];
                result[2 * coord + 1][lane] = product_im * diff[coord];
            }
        }
    }
}
