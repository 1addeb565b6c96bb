use edgeroute_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal node for A* searches
// ---------------------------------------------------------------------------

/// Per-cell search metadata. Only meaningful while `generation` matches the
/// owning [`PathRange`]'s current search.
#[derive(Clone)]
pub(crate) struct Node {
    /// Cost from start.
    pub(crate) g: f64,
    /// Heuristic cost to goal, computed once when the node is first opened.
    pub(crate) h: f64,
    /// Estimated total cost `g + h`.
    pub(crate) f: f64,
    pub(crate) parent: usize,
    /// Position in first-opened order, used as the frontier tie-break.
    pub(crate) order: u32,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            h: 0.0,
            f: 0.0,
            parent: usize::MAX,
            order: 0,
            generation: 0,
            closed: false,
        }
    }
}

/// Frontier entry, ordered for use in `BinaryHeap` so that the lowest `f`
/// pops first and equal `f` values pop in first-opened order.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) order: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, order) first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for pathfinding on a grid rectangle.
///
/// `PathRange` owns the search metadata for every cell of its range as a
/// side-table, separate from the grid being searched. Each search bumps a
/// generation counter, so metadata from an earlier search is never read by a
/// later one, and the grid itself is never mutated by a search.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) expanded: usize,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            expanded: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of nodes the most recent search closed.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Cost from start recorded for `p` by the most recent search.
    ///
    /// Returns `None` unless `p` was closed (finalized) by that search.
    pub fn astar_cost(&self, p: Point) -> Option<f64> {
        let n = &self.nodes[self.idx(p)?];
        (self.generation != 0 && n.generation == self.generation && n.closed).then_some(n.g)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}
