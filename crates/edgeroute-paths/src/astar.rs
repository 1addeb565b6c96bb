use std::collections::BinaryHeap;

use edgeroute_core::Point;

use crate::PathRange;
use crate::pathrange::{Node, NodeRef};
use crate::traits::AstarPather;

impl PathRange {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists within the current range. When `from == to` the path is the
    /// single cell `[from]`.
    ///
    /// The frontier pops the node with the lowest estimated total cost; among
    /// equal estimates the node opened first wins. Closed nodes are never
    /// reopened. Together with the pather's neighbor order this makes the
    /// returned path a pure function of the grid, the endpoints and the
    /// pather.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        self.begin_search();
        let cur_gen = self.generation;

        // The start node carries zero cost and zero heuristic.
        self.nodes[start_idx] = Node {
            generation: cur_gen,
            ..Node::default()
        };
        let mut next_order: u32 = 1;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: 0.0,
            order: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip entries superseded by a cheaper re-push.
            if self.nodes[ci].closed {
                continue;
            }
            self.nodes[ci].closed = true;
            self.expanded += 1;

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_point, np);

                let n = &mut self.nodes[ni];
                if n.generation != cur_gen {
                    let h = pather.estimate(np, to);
                    *n = Node {
                        g: tentative_g,
                        h,
                        f: tentative_g + h,
                        parent: ci,
                        order: next_order,
                        generation: cur_gen,
                        closed: false,
                    };
                    next_order += 1;
                } else if n.closed || tentative_g >= n.g {
                    continue;
                } else {
                    n.g = tentative_g;
                    n.f = tentative_g + n.h;
                    n.parent = ci;
                }

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    order: n.order,
                });
            }
        };

        self.nbuf = nbuf;
        log::trace!(
            "astar {from} -> {to}: {} expanded, found = {found}",
            self.expanded
        );

        if !found {
            return None;
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }

    /// Start a new search generation, lazily invalidating all nodes.
    fn begin_search(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale nodes could alias the new generation.
            self.nodes.fill(Node::default());
            self.generation = 1;
        }
        self.expanded = 0;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::f64::consts::SQRT_2;

    use edgeroute_core::{Range, WalkGrid};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::{MovementPolicy, Pather, WeightedPather, octile, push_neighbors};

    struct TestPather<'a> {
        grid: &'a WalkGrid,
        policy: MovementPolicy,
    }

    impl Pather for TestPather<'_> {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            push_neighbors(buf, self.policy, p, |n| self.grid.is_walkable(n));
        }
    }

    impl WeightedPather for TestPather<'_> {
        fn cost(&self, from: Point, to: Point) -> f64 {
            self.policy.step_cost(from, to)
        }
    }

    impl AstarPather for TestPather<'_> {
        fn estimate(&self, from: Point, to: Point) -> f64 {
            self.policy.heuristic(from, to)
        }
    }

    fn search(grid: &WalkGrid, policy: MovementPolicy, from: Point, to: Point) -> Option<Vec<Point>> {
        let mut pr = PathRange::new(grid.bounds());
        pr.astar_path(&TestPather { grid, policy }, from, to)
    }

    fn path_cost(path: &[Point]) -> f64 {
        path.windows(2)
            .map(|w| MovementPolicy::Diagonal.step_cost(w[0], w[1]))
            .sum()
    }

    fn random_grid(rng: &mut StdRng, width: i32, height: i32) -> WalkGrid {
        let mut grid = WalkGrid::new(width, height);
        for p in grid.bounds().iter() {
            if rng.random_range(0..100) < 30 {
                grid.set_walkable(p, false);
            }
        }
        grid
    }

    fn bfs_distance(grid: &WalkGrid, from: Point, to: Point) -> Option<usize> {
        let mut dist = vec![usize::MAX; grid.bounds().len()];
        let idx = |p: Point| (p.y * grid.width() + p.x) as usize;
        let mut queue = VecDeque::from([from]);
        dist[idx(from)] = 0;
        let mut buf = Vec::new();
        while let Some(p) = queue.pop_front() {
            if p == to {
                return Some(dist[idx(p)]);
            }
            buf.clear();
            push_neighbors(&mut buf, MovementPolicy::Orthogonal, p, |n| grid.is_walkable(n));
            for &n in &buf {
                if dist[idx(n)] == usize::MAX {
                    dist[idx(n)] = dist[idx(p)] + 1;
                    queue.push_back(n);
                }
            }
        }
        None
    }

    #[test]
    fn straight_line_on_open_grid() {
        let grid = WalkGrid::new(10, 5);
        let path = search(&grid, MovementPolicy::Diagonal, Point::new(1, 2), Point::new(8, 2)).unwrap();
        assert_eq!(path.len(), 8);
        assert!(path.iter().all(|p| p.y == 2));
    }

    #[test]
    fn single_cell_path_when_start_is_goal() {
        let grid = WalkGrid::new(3, 3);
        let mut pr = PathRange::new(grid.bounds());
        let pather = TestPather {
            grid: &grid,
            policy: MovementPolicy::Diagonal,
        };
        let p = Point::new(1, 1);
        assert_eq!(pr.astar_path(&pather, p, p), Some(vec![p]));
        assert_eq!(pr.astar_cost(p), Some(0.0));
        assert_eq!(pr.expanded(), 1);
    }

    #[test]
    fn out_of_range_endpoint_yields_none() {
        let grid = WalkGrid::new(3, 3);
        assert!(search(&grid, MovementPolicy::Diagonal, Point::new(0, 0), Point::new(5, 5)).is_none());
    }

    #[test]
    fn walled_goal_is_unreachable() {
        let mut grid = WalkGrid::new(7, 7);
        grid.block(Range::new(2, 2, 5, 5));
        grid.set_walkable(Point::new(3, 3), true);
        for policy in [MovementPolicy::Orthogonal, MovementPolicy::Diagonal] {
            assert!(search(&grid, policy, Point::new(0, 0), Point::new(3, 3)).is_none());
        }
    }

    #[test]
    fn diagonal_slips_past_orthogonal_wall() {
        // Goal blocked on its four sides but open on a diagonal.
        let mut grid = WalkGrid::new(5, 5);
        for p in [Point::new(2, 1), Point::new(3, 2), Point::new(2, 3), Point::new(1, 2)] {
            grid.set_walkable(p, false);
        }
        let goal = Point::new(2, 2);
        assert!(search(&grid, MovementPolicy::Orthogonal, Point::new(0, 0), goal).is_none());
        let path = search(&grid, MovementPolicy::Diagonal, Point::new(0, 0), goal).unwrap();
        assert_eq!(path, vec![Point::new(0, 0), Point::new(1, 1), goal]);
    }

    #[test]
    fn detours_around_wall() {
        let mut grid = WalkGrid::new(9, 9);
        grid.block(Range::new(4, 0, 5, 8));
        let path = search(&grid, MovementPolicy::Orthogonal, Point::new(0, 0), Point::new(8, 0)).unwrap();
        assert!(path.iter().all(|&p| grid.is_walkable(p)));
        assert!(path.iter().any(|p| p.y == 8));
        assert_eq!(path.len() - 1, 8 + 2 * 8);
    }

    #[test]
    fn orthogonal_paths_have_no_diagonal_steps() {
        let grid = WalkGrid::new(8, 8);
        let path = search(&grid, MovementPolicy::Orthogonal, Point::new(0, 0), Point::new(6, 5)).unwrap();
        assert_eq!(path.len() - 1, 11);
        assert!(path.windows(2).all(|w| !w[0].is_diagonal_to(w[1])));
    }

    #[test]
    fn open_grid_diagonal_cost_is_octile() {
        let grid = WalkGrid::new(12, 12);
        let mut pr = PathRange::new(grid.bounds());
        let pather = TestPather {
            grid: &grid,
            policy: MovementPolicy::Diagonal,
        };
        let (from, to) = (Point::new(1, 1), Point::new(10, 5));
        let path = pr.astar_path(&pather, from, to).unwrap();
        let cost = pr.astar_cost(to).unwrap();
        assert!((cost - octile(from, to)).abs() < 1e-9);
        assert!((cost - (5.0 + 4.0 * SQRT_2)).abs() < 1e-9);
        assert!((path_cost(&path) - cost).abs() < 1e-9);
    }

    #[test]
    fn ties_resolve_in_neighbor_order() {
        // Both routes around the pillar cost the same; ↑ is enumerated
        // before ↓ so the upper route's cells are opened first.
        let mut grid = WalkGrid::new(5, 3);
        grid.set_walkable(Point::new(2, 1), false);
        let path = search(&grid, MovementPolicy::Orthogonal, Point::new(0, 1), Point::new(4, 1)).unwrap();
        assert_eq!(path.len(), 7);
        assert!(path.contains(&Point::new(2, 0)));
    }

    #[test]
    fn random_grids_match_bfs_and_stay_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..40 {
            let grid = random_grid(&mut rng, 16, 12);
            let from = Point::new(rng.random_range(0..16), rng.random_range(0..12));
            let to = Point::new(rng.random_range(0..16), rng.random_range(0..12));
            if !grid.is_walkable(from) || !grid.is_walkable(to) {
                continue;
            }
            let first = search(&grid, MovementPolicy::Orthogonal, from, to);
            let second = search(&grid, MovementPolicy::Orthogonal, from, to);
            assert_eq!(first, second);
            let expected = bfs_distance(&grid, from, to);
            assert_eq!(first.as_ref().map(|p| p.len() - 1), expected);
        }
    }

    #[test]
    fn random_grids_cost_equals_step_sum() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..40 {
            let mut grid = random_grid(&mut rng, 20, 14);
            let from = Point::new(0, 0);
            let to = Point::new(19, 13);
            grid.set_walkable(from, true);
            grid.set_walkable(to, true);
            let mut pr = PathRange::new(grid.bounds());
            let pather = TestPather {
                grid: &grid,
                policy: MovementPolicy::Diagonal,
            };
            let Some(path) = pr.astar_path(&pather, from, to) else {
                assert_eq!(pr.astar_cost(to), None);
                continue;
            };
            assert_eq!(path.first(), Some(&from));
            assert_eq!(path.last(), Some(&to));
            assert!(path.iter().all(|&p| grid.is_walkable(p)));
            let cost = pr.astar_cost(to).unwrap();
            assert!((path_cost(&path) - cost).abs() < 1e-9);
            assert!(cost + 1e-9 >= octile(from, to));
        }
    }

    #[test]
    fn reused_range_does_not_leak_state() {
        let mut open = WalkGrid::new(6, 6);
        let mut pr = PathRange::new(open.bounds());
        {
            let pather = TestPather {
                grid: &open,
                policy: MovementPolicy::Diagonal,
            };
            assert!(pr.astar_path(&pather, Point::new(0, 0), Point::new(5, 5)).is_some());
        }
        open.block(Range::new(0, 2, 6, 3));
        let pather = TestPather {
            grid: &open,
            policy: MovementPolicy::Diagonal,
        };
        assert!(pr.astar_path(&pather, Point::new(0, 0), Point::new(5, 5)).is_none());
        assert_eq!(pr.astar_cost(Point::new(5, 5)), None);
    }
}
