//! Differential geometry of flat triangles.
//!
//! A triangle with corners `c0`, `c1`, `c2` is parametrised over the
//! reference triangle by `x(p) = c0 + p0 (c1 - c0) + p1 (c2 - c0)`. The
//! Jacobian of this map is constant, so normals and integration elements are
//! computed once per element. The grouped variants run the identical
//! operations per lane, which keeps results independent of the lane width.

use crate::types::RealScalar;

/// Tangential Jacobian columns `c1 - c0` and `c2 - c0`.
pub fn jacobian<T: RealScalar>(corners: &[[T; 3]; 3]) -> [[T; 3]; 2] {
    [
        std::array::from_fn(|coord| corners[1][coord] - corners[0][coord]),
        std::array::from_fn(|coord| corners[2][coord] - corners[0][coord]),
    ]
}

/// Unit normal and integration element of a flat triangle.
///
/// The integration element is the norm of the cross product of the Jacobian
/// columns. A degenerate triangle has a zero cross product and yields NaN
/// normals; no check is made here.
pub fn normal_and_integration_element<T: RealScalar>(jacobian: &[[T; 3]; 2]) -> ([T; 3], T) {
    let cross = [
        jacobian[0][1] * jacobian[1][2] - jacobian[0][2] * jacobian[1][1],
        jacobian[0][2] * jacobian[1][0] - jacobian[0][0] * jacobian[1][2],
        jacobian[0][0] * jacobian[1][1] - jacobian[0][1] * jacobian[1][0],
    ];
    let length = num::Float::sqrt(cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2]);
    (
        [cross[0] / length, cross[1] / length, cross[2] / length],
        length,
    )
}

/// Map a reference point to the physical triangle.
pub fn global_point<T: RealScalar>(corners: &[[T; 3]; 3], point: &[T; 2]) -> [T; 3] {
    std::array::from_fn(|coord| {
        corners[0][coord]
            + point[0] * (corners[1][coord] - corners[0][coord])
            + point[1] * (corners[2][coord] - corners[0][coord])
    })
}

/// Grouped form of [`jacobian`].
pub fn jacobian_group<T: RealScalar, const W: usize>(
    corners: &[[[T; W]; 3]; 3],
) -> [[[T; W]; 3]; 2] {
    let mut result = [[[T::zero(); W]; 3]; 2];
    for coord in 0..3 {
        for lane in 0..W {
            result[0][coord][lane] = corners[1][coord][lane] - corners[0][coord][lane];
            result[1][coord][lane] = corners[2][coord][lane] - corners[0][coord][lane];
        }
    }
    result
}

/// Grouped form of [`normal_and_integration_element`].
pub fn normals_and_integration_elements_group<T: RealScalar, const W: usize>(
    jacobian: &[[[T; W]; 3]; 2],
) -> ([[T; W]; 3], [T; W]) {
    let mut normals = [[T::zero(); W]; 3];
    let mut integration_elements = [T::zero(); W];
    for lane in 0..W {
        let cross = [
            jacobian[0][1][lane] * jacobian[1][2][lane]
                - jacobian[0][2][lane] * jacobian[1][1][lane],
            jacobian[0][2][lane] * jacobian[1][0][lane]
                - jacobian[0][0][lane] * jacobian[1][2][lane],
            jacobian[0][0][lane] * jacobian[1][1][lane]
                - jacobian[0][1][lane] * jacobian[1][0][lane],
        ];
        let length =
            num::Float::sqrt(cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2]);
        normals[0][lane] = cross[0] / length;
        normals[1][lane] = cross[1] / length;
        normals[2][lane] = cross[2] / length;
        integration_elements[lane] = length;
    }
    (normals, integration_elements)
}

/// Grouped form of [`global_point`]: one reference point mapped through a
/// whole lane group of triangles.
pub fn global_points_group<T: RealScalar, const W: usize>(
    corners: &[[[T; W]; 3]; 3],
    point: &[T; 2],
) -> [[T; W]; 3] {
    let mut result = [[T::zero(); W]; 3];
    for coord in 0..3 {
        for lane in 0..W {
            result[coord][lane] = corners[0][coord][lane]
                + point[0] * (corners[1][coord][lane] - corners[0][coord][lane])
                + point[1] * (corners[2][coord][lane] - corners[0][coord][lane]);
        }
    }
    result
}
