#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::num::NonZero;

    use itertools::Itertools;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use strum::VariantArray;

    use crate::backtrack::CoverSearch;
    use crate::builder::{BuilderInvalidReason, ConstraintRole, PixelBoardBuilder};
    use crate::cover::{PathCover, TransportError};
    use crate::exact;
    use crate::graph::PixelGraph;
    use crate::location::{CellId, Grid, Location};
    use crate::partition::Partition;
    use crate::score::{Level, Score};
    use crate::shape::{GridShape, KingStep, Step};
    use crate::solver::{Constraints, DegreeOrder, SolveOptions};

    fn grid(width: usize) -> Grid {
        Grid::with_width(NonZero::new(width).unwrap()).unwrap()
    }

    fn cells_of(width: usize, art: &str) -> Vec<CellId> {
        let grid = grid(width);
        art.lines()
            .enumerate()
            .flat_map(|(y, row)| row.chars().enumerate().filter(|(_, c)| *c == '#').map(move |(x, _)| (x, y)))
            .map(|(x, y)| grid.cell_at(Location(x, y)).unwrap())
            .collect_vec()
    }

    fn assert_partition(cover: &PathCover, cells: &[CellId], grid: Grid) {
        let covered = cover.paths().iter().flatten().copied().collect_vec();
        let distinct: HashSet<CellId> = covered.iter().copied().collect();
        assert_eq!(covered.len(), distinct.len(), "a cell appears twice in {:?}", cover.paths());
        assert_eq!(distinct, cells.iter().copied().collect::<HashSet<_>>());
        assert!(cover.paths().iter().all(|path| !path.is_empty()));
        assert!(cover.is_continuous(grid), "path jumps between cells in {:?}", cover.paths());
    }

    /// A random 8-connected blob of `n` cells grown inside a `size`×`size` box.
    fn random_blob(rng: &mut SmallRng, n: usize, size: usize) -> Vec<CellId> {
        let grid = grid(size);
        let mut cells = vec![grid.cell_at(Location(size / 2, size / 2)).unwrap()];
        while cells.len() < n {
            let from = grid.location_of(cells[rng.gen_range(0..cells.len())]);
            let step = KingStep::VARIANTS[rng.gen_range(0..KingStep::VARIANTS.len())];
            let location = step.attempt_from(from);
            if location.1 >= size {
                continue;
            }
            if let Some(cell) = grid.cell_at(location) {
                if !cells.contains(&cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    /// Whether some Hamiltonian path over `neighbors` honors `start` and `end`, by plain exhaustive search.
    fn brute_force_path_exists(neighbors: &[Vec<usize>], start: Option<usize>, end: Option<usize>) -> bool {
        fn extend(neighbors: &[Vec<usize>], node: usize, visited: &mut Vec<bool>, depth: usize, end: Option<usize>) -> bool {
            if depth == neighbors.len() {
                return end.map_or(true, |end| end == node);
            }
            for &next in &neighbors[node] {
                if !visited[next] {
                    visited[next] = true;
                    let found = extend(neighbors, next, visited, depth + 1, end);
                    visited[next] = false;
                    if found {
                        return true;
                    }
                }
            }
            false
        }

        let n = neighbors.len();
        let starts = match start {
            Some(start) => vec![start],
            None => (0..n).collect_vec(),
        };
        starts.into_iter().any(|s| {
            let mut visited = vec![false; n];
            visited[s] = true;
            extend(neighbors, s, &mut visited, 1, end)
        })
    }

    #[test]
    fn board_display() {
        let board = PixelBoardBuilder::with_width(NonZero::new(4).unwrap())
            .add_cells([0, 1, 6, 9, 9])
            .build()
            .unwrap();

        assert_eq!(format!("{}", board), "##..
..#.
.#..
");
        assert_eq!(board.cells(), &[0, 1, 6, 9]);
    }

    #[test]
    fn empty_input_gives_empty_cover() {
        let board = PixelBoardBuilder::with_width(NonZero::new(8).unwrap())
            .build()
            .unwrap();

        let cover = board.solve();
        assert!(cover.is_empty());
        assert_eq!(cover.to_flat(), vec![0]);
        assert_eq!(cover.render(board.grid()), "");
    }

    #[test]
    fn small_square_is_one_stroke() {
        let board = PixelBoardBuilder::with_width(NonZero::new(3).unwrap())
            .add_cells([0, 1, 3, 4])
            .build()
            .unwrap();

        let cover = board.solve();
        assert_eq!(cover.len(), 1);
        assert_eq!(cover.render(board.grid()), "Aa.
aA.
");
        assert_eq!(cover.paths(), &[vec![4, 3, 1, 0]]);
    }

    #[test]
    fn strip_with_start_and_end() {
        let board = PixelBoardBuilder::with_width(NonZero::new(4).unwrap())
            .add_cells([2, 0, 3, 1])
            .start(0)
            .end(3)
            .build()
            .unwrap();

        let cover = board.solve();
        assert_eq!(cover.paths(), &[vec![0, 1, 2, 3]]);
        assert_eq!(cover.endpoints().collect_vec(), vec![(0, 3)]);
        assert_eq!(cover.render(board.grid()), "AaaA
");
    }

    #[test]
    fn strip_reversed_by_constraints() {
        let board = PixelBoardBuilder::with_width(NonZero::new(4).unwrap())
            .add_cells([0, 1, 2, 3])
            .start(3)
            .end(0)
            .build()
            .unwrap();

        assert_eq!(board.solve().paths(), &[vec![3, 2, 1, 0]]);
    }

    #[test]
    fn far_cells_are_separate_components() {
        let board = PixelBoardBuilder::with_width(NonZero::new(6).unwrap())
            .add_cells([0, 5])
            .build()
            .unwrap();

        let cover = board.solve();
        assert_eq!(cover.paths(), &[vec![0], vec![5]]);
        assert_eq!(cover.render(board.grid()), "A....B
");
    }

    #[test]
    fn rows_do_not_wrap() {
        // (3, 0) and (0, 1) are consecutive ids but not neighbors
        let board = PixelBoardBuilder::with_width(NonZero::new(4).unwrap())
            .add_cells([3, 4])
            .build()
            .unwrap();

        let cover = board.solve();
        assert_eq!(cover.len(), 2);
        assert_eq!(cover.render(board.grid()), "...A
B...
");
    }

    #[test]
    fn diagonal_neighbors_connect() {
        let board = PixelBoardBuilder::with_width(NonZero::new(3).unwrap())
            .add_cells([0, 4, 8])
            .build()
            .unwrap();

        let cover = board.solve();
        assert_eq!(cover.len(), 1);
        assert_partition(&cover, &[0, 4, 8], board.grid());
    }

    #[test]
    fn start_in_the_middle_falls_back_to_cover() {
        // no single path over a strip can begin at its middle cell
        let board = PixelBoardBuilder::with_width(NonZero::new(3).unwrap())
            .add_cells([0, 1, 2])
            .start(1)
            .build()
            .unwrap();

        let cover = board.solve();
        assert_eq!(cover.paths(), &[vec![1, 2], vec![0]]);
        assert_eq!(cover.render(board.grid()), "BAA
");
    }

    #[test]
    fn anchor_in_the_middle_splits_the_strip() {
        let board = PixelBoardBuilder::with_width(NonZero::new(4).unwrap())
            .add_cells([0, 1, 2, 3])
            .add_anchor(1)
            .build()
            .unwrap();

        let cover = board.solve();
        assert_eq!(cover.paths(), &[vec![0, 1], vec![2, 3]]);
        assert_eq!(cover.render(board.grid()), "AABB
");
    }

    #[test]
    fn constraints_apply_per_component() {
        let width = 10;
        let cells = cells_of(width, "###.....##
.........#
");
        let board = PixelBoardBuilder::with_width(NonZero::new(width).unwrap())
            .add_cells(cells.iter().copied())
            .start(2)
            .end(19)
            .build()
            .unwrap();

        let cover = board.solve();
        assert_eq!(cover.paths(), &[vec![2, 1, 0], vec![9, 8, 19]]);
    }

    #[test]
    fn long_stroke_beyond_exact_threshold() {
        let width = 16;
        let cells = cells_of(width, "################
...............#
...............#
...............#
...............#
...............#
...............#
");
        assert!(cells.len() > exact::EXACT_LIMIT);

        let end = *cells.last().unwrap();
        let board = PixelBoardBuilder::with_width(NonZero::new(width).unwrap())
            .add_cells(cells.iter().copied())
            .start(0)
            .end(end)
            .build()
            .unwrap();

        let cover = board.solve();
        assert_eq!(cover.len(), 1);
        assert_eq!(cover.endpoints().collect_vec(), vec![(0, end)]);
        assert_partition(&cover, &cells, board.grid());
    }

    #[test]
    fn block_beyond_exact_threshold_is_one_stroke() {
        let width = 6;
        let cells = (0..36).collect_vec();
        let board = PixelBoardBuilder::with_width(NonZero::new(width).unwrap())
            .add_cells(cells.iter().copied())
            .build()
            .unwrap();

        let cover = board.solve();
        assert_eq!(cover.len(), 1);
        assert_partition(&cover, &cells, board.grid());
    }

    #[test]
    fn block_with_opposite_corners() {
        let width = 5;
        let cells = (0..25).collect_vec();
        let board = PixelBoardBuilder::with_width(NonZero::new(width).unwrap())
            .add_cells(cells.iter().copied())
            .start(0)
            .end(24)
            .build()
            .unwrap();

        let cover = board.solve();
        assert_eq!(cover.len(), 1);
        assert_eq!(cover.endpoints().collect_vec(), vec![(0, 24)]);
        assert_partition(&cover, &cells, board.grid());
    }

    #[test]
    fn exhausted_budget_still_covers_everything() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..10 {
            let cells = random_blob(&mut rng, 40, 12);
            let board = PixelBoardBuilder::with_width(NonZero::new(12).unwrap())
                .add_cells(cells.iter().copied())
                .start(cells[0])
                .end(cells[cells.len() - 1])
                .exact_threshold(0)
                .step_budget(1)
                .build()
                .unwrap();

            assert_partition(&board.solve(), &cells, board.grid());
        }
    }

    #[test]
    fn random_blobs_obey_partition_law() {
        let mut rng = SmallRng::seed_from_u64(0xb10b);
        for round in 0..40 {
            let size = 10;
            let n = rng.gen_range(1..60);
            let mut cells = random_blob(&mut rng, n, size);
            // a second, possibly overlapping or touching blob
            cells.extend(random_blob(&mut rng, n / 2 + 1, size).into_iter().map(|cell| cell + 3));

            let order = DegreeOrder::VARIANTS[round % 2];
            let board = PixelBoardBuilder::with_width(NonZero::new(size + 3).unwrap())
                .add_cells(cells.iter().copied())
                .degree_order(order)
                .step_budget(20_000)
                .build()
                .unwrap();

            let cover = board.solve();
            assert_partition(&cover, board.cells(), board.grid());

            // repeated solves may differ in order but never in coverage
            assert_partition(&board.solve(), board.cells(), board.grid());
        }
    }

    #[test]
    fn exact_matches_brute_force() {
        let mut rng = SmallRng::seed_from_u64(12);
        for _ in 0..200 {
            let n = rng.gen_range(1..=12);
            let cells = random_blob(&mut rng, n, 8);
            let pixels = PixelGraph::build(grid(8), cells.iter().copied());
            let partition = Partition::of(&pixels);
            assert_eq!(partition.components.len(), 1);
            let neighbors = &partition.components[0].neighbors;

            let start = rng.gen_bool(0.5).then(|| rng.gen_range(0..n));
            let end = rng.gen_bool(0.5).then(|| rng.gen_range(0..n));

            let found = exact::hamiltonian_path(neighbors, start, end);
            assert_eq!(found.is_some(), brute_force_path_exists(neighbors, start, end), "cells {:?}", cells);

            if let Some(path) = found {
                assert_eq!(path.len(), n);
                assert_eq!(path.iter().unique().count(), n);
                assert!(path.iter().tuple_windows().all(|(a, b)| neighbors[*a].contains(b)));
                assert!(start.map_or(true, |s| path[0] == s));
                assert!(end.map_or(true, |e| path[n - 1] == e));
            }
        }
    }

    #[test]
    fn exact_rejects_impossible_end() {
        // 0 - 1 - 2
        let neighbors = vec![vec![1], vec![0, 2], vec![1]];
        assert_eq!(exact::hamiltonian_path(&neighbors, None, Some(1)), None);
        assert_eq!(exact::hamiltonian_path(&neighbors, None, None), Some(vec![2, 1, 0]));
        assert_eq!(exact::hamiltonian_path(&neighbors, Some(2), None), Some(vec![2, 1, 0]));
        assert_eq!(exact::hamiltonian_path(&neighbors, None, Some(2)), Some(vec![0, 1, 2]));
    }

    #[test]
    fn neighbors_sorted_by_degree() {
        let width = 5;
        let cells = cells_of(width, "#....
.#...
..###
");
        let pixels = PixelGraph::build(grid(width), cells.iter().copied());
        for adjacent in &pixels.neighbors {
            assert!(adjacent.iter().map(|nb| pixels.neighbors[*nb].len()).tuple_windows().all(|(a, b)| a <= b));
        }
        // (1, 1) touches (0, 0) and (2, 2); the corner pixel has fewer neighbors
        let middle = pixels.index_of[&6];
        assert_eq!(pixels.neighbors[middle], vec![pixels.index_of[&0], pixels.index_of[&12]]);
        assert_eq!(pixels.graph.edge_count(), 4);
    }

    #[test]
    fn partition_numbers_components_by_lowest_node() {
        let width = 8;
        let pixels = PixelGraph::build(grid(width), [7, 0, 15, 1, 4]);
        let partition = Partition::of(&pixels);

        assert_eq!(partition.components.iter().map(|c| c.nodes.clone()).collect_vec(), vec![vec![0, 2], vec![1, 3], vec![4]]);
        assert_eq!(partition.component_of, vec![0, 1, 0, 1, 2]);
    }

    #[test]
    fn degree_order_is_respected() {
        let mut rng = SmallRng::seed_from_u64(3);
        for order in DegreeOrder::VARIANTS.iter().copied() {
            for _ in 0..10 {
                let cells = random_blob(&mut rng, 35, 9);
                let pixels = PixelGraph::build(grid(9), cells.iter().copied());
                let partition = Partition::of(&pixels);
                let options = SolveOptions {
                    degree_order: order,
                    step_budget: 5_000,
                    ..Default::default()
                };
                let constraints = Constraints::default();

                let outcome = CoverSearch::new(&partition.components[0].neighbors, &constraints, &options)
                    .record_choices()
                    .run();

                let trace = outcome.trace.unwrap();
                assert!(!trace.is_empty());
                for choices in trace {
                    let degrees = choices.iter().map(|(_, degree)| *degree).collect_vec();
                    match order {
                        DegreeOrder::Ascending => assert!(degrees.iter().tuple_windows().all(|(a, b)| a <= b)),
                        DegreeOrder::Descending => assert!(degrees.iter().tuple_windows().all(|(a, b)| a >= b)),
                    }
                }
            }
        }
    }

    #[test]
    fn memoization_never_hides_a_single_stroke() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut compared = 0;
        for _ in 0..20 {
            let n = rng.gen_range(21..28);
            let cells = random_blob(&mut rng, n, 9);
            let pixels = PixelGraph::build(grid(9), cells.iter().copied());
            let partition = Partition::of(&pixels);
            let neighbors = &partition.components[0].neighbors;
            let constraints = Constraints::new(Some(0), Some(n - 1), []);

            let run = |memoize| {
                let options = SolveOptions {
                    memoize,
                    step_budget: 100_000,
                    ..Default::default()
                };
                CoverSearch::new(neighbors, &constraints, &options).run()
            };
            let with = run(true);
            let without = run(false);
            if with.exhausted || without.exhausted {
                continue;
            }

            compared += 1;
            assert_eq!(with.score.level == Level::Complete, without.score.level == Level::Complete, "cells {:?}", cells);
        }
        assert!(compared > 0);
    }

    #[test]
    fn scores_rank_level_then_paths_then_anchors() {
        let required = [0, 5];
        let single_full = Score::of(&[vec![0, 1, 2, 3, 4, 5]], &required);
        let single_half = Score::of(&[vec![0, 1, 2, 3, 5, 4]], &required);
        let single_none = Score::of(&[vec![1, 0, 2, 3, 5, 4]], &required);
        let split_both = Score::of(&[vec![0, 1, 2], vec![3, 4, 5]], &required);
        let split_one = Score::of(&[vec![0, 1, 2], vec![3, 5, 4]], &required);
        let split_three = Score::of(&[vec![0, 1], vec![2, 3], vec![4, 5]], &required);

        assert_eq!(single_full.level, Level::Complete);
        assert_eq!(single_half.level, Level::Partial);
        assert_eq!(single_none.level, Level::Untouched);
        assert_eq!(split_both.level, Level::Touched);

        assert!(single_full.beats(&single_half));
        assert!(single_half.beats(&split_both));
        assert!(split_both.beats(&split_one));
        assert!(split_both.beats(&split_three));
        assert!(split_one.beats(&single_none));
        assert!(!split_both.beats(&split_both));

        assert!(single_full.is_final(2));
        assert!(!single_half.is_final(2));
        assert!(single_half.is_final(1));

        assert!(split_both.beatable_with(1, 2));
        assert!(!split_both.beatable_with(2, 2));
        assert!(split_one.beatable_with(2, 2));
        assert!(single_none.beatable_with(4, 2));
        assert!(!Score::of(&[vec![0], vec![1]], &[]).beatable_with(2, 0));
    }

    #[test]
    fn flat_layout() {
        let cover = PathCover::from(vec![vec![4, 3, 1], vec![7]]);
        assert_eq!(cover.to_flat(), vec![2, 3, 4, 3, 1, 1, 7]);
        assert_eq!(PathCover::from_flat(&cover.to_flat()), Ok(cover));
        assert_eq!(PathCover::from_flat(&[0]), Ok(PathCover::default()));
    }

    #[test]
    fn flat_decoding_errors() {
        assert_eq!(PathCover::from_flat(&[]), Err(TransportError::Empty));
        assert_eq!(PathCover::from_flat(&[2, 1, 5]), Err(TransportError::MissingLength(1)));
        assert_eq!(PathCover::from_flat(&[1, 0]), Err(TransportError::EmptyPath(0)));
        assert_eq!(
            PathCover::from_flat(&[1, 3, 5, 6]),
            Err(TransportError::Truncated { path: 0, declared: 3, available: 2 }),
        );
        assert_eq!(PathCover::from_flat(&[1, 1, 5, 6, 7]), Err(TransportError::TrailingData(2)));
    }

    #[test]
    fn constraints_outside_pixels_are_rejected() {
        let result = PixelBoardBuilder::with_width(NonZero::new(4).unwrap())
            .add_cells([0, 1])
            .start(0)
            .end(9)
            .add_anchor(2)
            .build();

        assert_eq!(result.unwrap_err(), vec![
            BuilderInvalidReason::ConstraintOutsidePixels { role: ConstraintRole::End, cell: 9 },
            BuilderInvalidReason::ConstraintOutsidePixels { role: ConstraintRole::Anchor, cell: 2 },
        ]);
        assert_eq!(
            BuilderInvalidReason::ConstraintOutsidePixels { role: ConstraintRole::End, cell: 9 }.to_string(),
            "end cell 9 is not one of the pixels",
        );
    }

    #[test]
    fn invalid_builder_settings() {
        let mut builder = PixelBoardBuilder::with_width(NonZero::new(4).unwrap());
        builder.exact_threshold(exact::EXACT_LIMIT + 1).add_cell(0);
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::ThresholdTooLarge(exact::EXACT_LIMIT + 1)]));
        assert!(builder.build().is_err());

        let wide = PixelBoardBuilder::with_width(NonZero::new(70_000).unwrap());
        assert_eq!(wide.build().unwrap_err(), vec![BuilderInvalidReason::WidthOutOfRange(NonZero::new(70_000).unwrap())]);
    }

    #[test]
    fn grid_encoding() {
        let grid = grid(7);
        assert_eq!(grid.cell_at(Location(3, 2)), Some(17));
        assert_eq!(grid.location_of(17), Location(3, 2));
        assert_eq!(grid.cell_at(Location(7, 0)), None);
        assert_eq!(grid.cell_at(KingStep::Up.attempt_from(Location(0, 0))), None);
        assert_eq!(grid.cell_at(KingStep::Left.attempt_from(Location(0, 3))), None);
        assert_eq!(KingStep::direction_to(Location(1, 1), Location(2, 0)), Some(KingStep::UpRight));
        assert_eq!(KingStep::UpLeft.ensure_forward(), KingStep::DownRight);
    }

    #[test]
    fn single_anchor_ends_the_stroke_on_a_large_block() {
        let width = 6;
        let cells = (0..30).collect_vec();
        let board = PixelBoardBuilder::with_width(NonZero::new(width).unwrap())
            .add_cells(cells.iter().copied())
            .add_anchor(14)
            .build()
            .unwrap();
        assert!(cells.len() > board.options().exact_threshold);

        let cover = board.solve();
        assert_eq!(cover.len(), 1);
        let (first, last) = cover.endpoints().next().unwrap();
        assert!(first == 14 || last == 14, "anchor is inside {:?}", cover.paths());
        assert_partition(&cover, &cells, board.grid());
    }

    #[test]
    fn three_anchors_keep_two_at_the_ends() {
        let width = 6;
        let cells = (0..30).collect_vec();
        let anchors = [0, 5, 29];
        let board = PixelBoardBuilder::with_width(NonZero::new(width).unwrap())
            .add_cells(cells.iter().copied())
            .add_anchors(anchors)
            .step_budget(50_000)
            .build()
            .unwrap();

        // one path has only two ends, so a single stroke can honor at most two anchors
        let cover = board.solve();
        assert_eq!(cover.len(), 1);
        let (first, last) = cover.endpoints().next().unwrap();
        assert!(anchors.contains(&first) && anchors.contains(&last), "ends {first} and {last}");
        assert_partition(&cover, &cells, board.grid());

        let pixels = PixelGraph::build(grid(width), cells.iter().copied());
        let partition = Partition::of(&pixels);
        let options = SolveOptions {
            step_budget: 50_000,
            ..Default::default()
        };
        let constraints = Constraints::new(None, None, [0, 5, 29]);
        let outcome = CoverSearch::new(&partition.components[0].neighbors, &constraints, &options).run();

        assert_eq!(outcome.score.level, Level::Partial);
        assert_eq!(outcome.score.anchor_count, 2);
        assert!(outcome.exhausted);
    }

    #[test]
    fn memoization_agrees_under_anchors() {
        let mut rng = SmallRng::seed_from_u64(41);
        let mut compared = 0;
        for _ in 0..60 {
            let n = rng.gen_range(6..16);
            let cells = random_blob(&mut rng, n, 7);
            let pixels = PixelGraph::build(grid(7), cells.iter().copied());
            let partition = Partition::of(&pixels);
            let neighbors = &partition.components[0].neighbors;

            let start = rng.gen_bool(0.3).then(|| rng.gen_range(0..n));
            let anchor_count = rng.gen_range(1..5);
            let anchors = (0..anchor_count).map(|_| rng.gen_range(0..n)).collect_vec();
            let constraints = Constraints::new(start, None, anchors);

            let run = |memoize| {
                let options = SolveOptions {
                    memoize,
                    step_budget: 200_000,
                    ..Default::default()
                };
                CoverSearch::new(neighbors, &constraints, &options).run()
            };
            let with = run(true);
            let without = run(false);
            if with.exhausted || without.exhausted {
                continue;
            }

            compared += 1;
            assert_eq!(with.score, without.score, "cells {:?} required {:?}", cells, constraints.required);
        }
        assert!(compared > 0);
    }

    #[test]
    fn render_starts_at_the_first_covered_row() {
        let board = PixelBoardBuilder::with_width(NonZero::new(3).unwrap())
            .add_cells([6, 7])
            .build()
            .unwrap();

        assert_eq!(format!("{}", board), "##.
");
        assert_eq!(board.solve().render(board.grid()), "AA.
");

        let far = PixelBoardBuilder::with_width(NonZero::new(1).unwrap())
            .add_cell(u32::MAX)
            .build()
            .unwrap();
        assert_eq!(format!("{}", far), "#
");
        assert_eq!(far.solve().render(far.grid()), "A
");
    }

    #[cfg(feature = "wasm")]
    #[test]
    fn flat_entry_point_honors_exact_threshold() {
        use crate::wasm::solve_flat;

        assert_eq!(solve_flat(3, &[0, 1, 3, 4], None, None, &[], false, None).unwrap(), vec![1, 4, 4, 3, 1, 0]);
        // a zero threshold sends every component to the cover search
        assert_eq!(solve_flat(3, &[0, 1, 3, 4], None, None, &[], false, Some(0)).unwrap(), vec![1, 4, 0, 1, 4, 3]);
    }
}
