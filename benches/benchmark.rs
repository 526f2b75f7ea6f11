use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkGroup,
    Criterion,
    SamplingMode
};
use criterion::measurement::WallTime;

use sudoku_deduction::{Coord, Grid, SolveOutcome};

use std::time::Duration;

// Explanation of benchmark classes:
//
// construction: Building a grid from known cells, including the initial
//               candidate eliminations triggered by the knowns.
// solve: The full deductive solve loop on a puzzle solvable without search.
// stall: The solve loop on a puzzle on which deduction makes some progress
//        and then stalls, measuring the cost of detecting a fixed point.

const MEASUREMENT_TIME_SECS: u64 = 10;
const SAMPLE_SIZE: usize = 100;

fn reference_knowns() -> Vec<(Coord, usize)> {
    [
        (1, 7, 3), (1, 8, 5),
        (2, 3, 7), (2, 9, 6),
        (3, 1, 5), (3, 2, 2), (3, 3, 8), (3, 5, 4),
        (4, 3, 5), (4, 6, 1),
        (5, 1, 4), (5, 4, 2), (5, 7, 8),
        (6, 2, 6), (6, 5, 5), (6, 9, 3),
        (7, 2, 7), (7, 4, 6), (7, 8, 9),
        (8, 2, 9), (8, 4, 4), (8, 5, 7),
        (9, 8, 4), (9, 9, 8)
    ].iter()
        .map(|&(row, column, value)| (Coord::new(row, column), value))
        .collect()
}

fn sparse_knowns() -> Vec<(Coord, usize)> {
    [
        (1, 1, 1), (2, 4, 2), (4, 7, 3), (5, 5, 9), (7, 2, 6), (9, 9, 5)
    ].iter()
        .map(|&(row, column, value)| (Coord::new(row, column), value))
        .collect()
}

fn configure(group: &mut BenchmarkGroup<WallTime>) {
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);
}

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    configure(&mut group);

    let knowns = reference_knowns();
    group.bench_function("9x9 with 24 knowns",
        |b| b.iter(|| Grid::new(9, &knowns).unwrap()));
    group.bench_function("16x16 empty",
        |b| b.iter(|| Grid::new(16, &[]).unwrap()));
}

fn benchmark_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    configure(&mut group);

    let knowns = reference_knowns();
    group.bench_function("9x9 reference puzzle", |b| b.iter(|| {
        let mut grid = Grid::new(9, &knowns).unwrap();
        assert_eq!(SolveOutcome::Solved, grid.solve());
    }));
}

fn benchmark_stall(c: &mut Criterion) {
    let mut group = c.benchmark_group("stall");
    configure(&mut group);

    let knowns = sparse_knowns();
    group.bench_function("9x9 underconstrained puzzle", |b| b.iter(|| {
        let mut grid = Grid::new(9, &knowns).unwrap();

        if let SolveOutcome::Solved = grid.solve() {
            panic!("underconstrained puzzle must stall");
        }
    }));
}

criterion_group!(all_groups,
    benchmark_construction,
    benchmark_solve,
    benchmark_stall);
criterion_main!(all_groups);
