//! Dense regular-pair operator assembly for the boundary element method.
//!
//! This crate evaluates the entries of a dense boundary integral operator
//! matrix for pairs of well-separated flat triangles: a double surface
//! integral of a Green's function kernel against piecewise-constant basis
//! functions, approximated by product Gauss quadrature. Trial elements are
//! processed in fixed-width lane groups so that one unit of work produces a
//! whole group of matrix columns; units of work are independent and write to
//! disjoint parts of the output.
//!
//! Element pairs that touch or coincide make the kernel integrand singular
//! and are not handled here: routing such a pair through this crate silently
//! produces IEEE infinities or NaNs in the affected entries. Classifying
//! pairs is the caller's job.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod assembly;
pub mod geometry;
pub mod grid;
pub mod kernels;
pub mod quadrature;
pub mod types;

#[cfg(test)]
mod test {
    extern crate blas_src;
    extern crate lapack_src;
}
