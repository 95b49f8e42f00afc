use schema::Weight;

/// Subset of the remaining locations picked by one knapsack solve
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Indices into the solved weight list, highest index first
    pub indices: Vec<usize>,
    pub total_weight: Weight,
}

/// 0/1 knapsack table where each item's value is its own weight.
///
/// Cell `(i, c)` holds the heaviest total reachable with the first `i` items
/// inside capacity `c`. Rows are stored back to back in one buffer.
pub struct KnapsackTable {
    width: usize,
    cells: Vec<Weight>,
}

impl KnapsackTable {
    /// Fills the table for `weights` up to `capacity`.
    ///
    /// Returns `None` if the table cannot be allocated, whether its size overflows
    /// or the allocator refuses it.
    pub fn build(weights: &[Weight], capacity: usize) -> Option<Self> {
        let width = capacity.checked_add(1)?;
        let rows = weights.len().checked_add(1)?;
        let len = rows.checked_mul(width)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, 0);

        for (i, &weight) in weights.iter().enumerate() {
            let (previous, current) = cells.split_at_mut((i + 1) * width);
            let previous = &previous[i * width..];
            let current = &mut current[..width];

            // a weight beyond `usize` fits no capacity in the table
            let w = usize::try_from(weight).unwrap_or(usize::MAX);
            current[..w.min(width)].copy_from_slice(&previous[..w.min(width)]);
            for c in w..width {
                current[c] = previous[c].max(previous[c - w] + weight);
            }
        }

        Some(Self { width, cells })
    }

    fn rows(&self) -> usize {
        self.cells.len() / self.width
    }

    fn get(&self, i: usize, c: usize) -> Weight {
        self.cells[i * self.width + c]
    }

    /// Walks back from the full table to recover the chosen items.
    ///
    /// An item also counts as chosen when the cell equals its own weight, even if
    /// the row above holds the same total: an exact fit at the current cut wins
    /// over the earlier items that reach the same value.
    pub fn select(&self, weights: &[Weight]) -> Selection {
        debug_assert_eq!(weights.len() + 1, self.rows());

        let mut selection = Selection::default();
        let mut c = self.width - 1;

        for i in (1..self.rows()).rev() {
            let weight = weights[i - 1];
            let best = self.get(i, c);

            if best != self.get(i - 1, c) || best == weight {
                // either branch implies `weight <= best <= c`
                c -= weight as usize;
                selection.indices.push(i - 1);
                selection.total_weight += weight;
            }

            if c == 0 {
                break;
            }
        }

        selection
    }
}
