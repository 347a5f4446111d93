use bem_dense::assembly::{ColumnBlock, RegularAssembler};
use bem_dense::grid::{TriangleGrid, TriangleGridBuilder};
use bem_dense::kernels::helmholtz::{HelmholtzSingleLayer, Wavenumber};
use bem_dense::kernels::laplace::LaplaceSingleLayer;
use bem_dense::quadrature::triangle_rule;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

extern crate blas_src;
extern crate lapack_src;

fn strip_grid(n: usize, z: f64) -> TriangleGrid<f64> {
    let mut builder = TriangleGridBuilder::new();
    for i in 0..n {
        let x = 2.0 * i as f64;
        builder.add_point(3 * i, [x, 0.0, z]);
        builder.add_point(3 * i + 1, [x + 1.0, 0.0, z]);
        builder.add_point(3 * i + 2, [x, 1.0, z]);
        builder.add_cell([3 * i, 3 * i + 1, 3 * i + 2]);
    }
    builder.create_grid()
}

pub fn dense_assembly_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_assembly");
    group.sample_size(20);

    let cells = 512;
    let test_grid = strip_grid(cells, 0.0);
    let trial_grid = strip_grid(cells, 3.0);
    let block = ColumnBlock {
        offset: 0,
        columns: cells,
    };

    let laplace = RegularAssembler::new(LaplaceSingleLayer, triangle_rule(6).unwrap());
    let mut real_output = vec![0.0; cells * cells];
    group.bench_function(
        format!("Laplace single layer {cells}x{cells}, lane width 1"),
        |b| {
            b.iter(|| {
                laplace
                    .assemble_into::<1>(
                        &test_grid,
                        &trial_grid,
                        block,
                        black_box(&mut real_output),
                        cells,
                    )
                    .unwrap()
            })
        },
    );
    group.bench_function(
        format!("Laplace single layer {cells}x{cells}, lane width 8"),
        |b| {
            b.iter(|| {
                laplace
                    .assemble_into::<8>(
                        &test_grid,
                        &trial_grid,
                        block,
                        black_box(&mut real_output),
                        cells,
                    )
                    .unwrap()
            })
        },
    );

    let helmholtz = RegularAssembler::new(
        HelmholtzSingleLayer {
            wavenumber: Wavenumber::real(2.5),
        },
        triangle_rule(6).unwrap(),
    );
    let mut complex_output = vec![0.0; 2 * cells * cells];
    group.bench_function(
        format!("Helmholtz single layer {cells}x{cells}, lane width 8"),
        |b| {
            b.iter(|| {
                helmholtz
                    .assemble_into::<8>(
                        &test_grid,
                        &trial_grid,
                        block,
                        black_box(&mut complex_output),
                        cells,
                    )
                    .unwrap()
            })
        },
    );
    group.finish();
}

criterion_group!(benches, dense_assembly_benchmark);
criterion_main!(benches);
