//! Minimum-cost assignment (Hungarian algorithm) over sparse bipartite costs.
//!
//! The solver always produces a *full* assignment: every vertex of the smaller
//! side is matched. Cells without an edge are priced so that the solver only
//! falls back on them when no arrangement of real edges covers the smaller
//! side, and such pairs are left out of the returned pairing.

/// Row-major cost matrix where `None` marks a missing edge
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Option<f64>>,
}

impl CostMatrix {
    /// A `rows x cols` matrix with no edges
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build a dense matrix from nested rows
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        let mut matrix = Self::new(rows.len(), cols);
        for (i, row) in rows.into_iter().enumerate() {
            debug_assert_eq!(row.len(), cols, "ragged cost matrix");
            for (j, cost) in row.into_iter().enumerate().take(cols) {
                if let Some(cost) = cost {
                    matrix.set(i, j, cost);
                }
            }
        }
        matrix
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cost: f64) {
        self.cells[row * self.cols + col] = Some(cost);
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Solve the assignment problem, returning `(row, col)` pairs sorted by row.
///
/// Only pairs backed by an actual edge are returned.
pub fn solve_assignment(costs: &CostMatrix) -> Vec<(usize, usize)> {
    if costs.rows == 0 || costs.cols == 0 || costs.edge_count() == 0 {
        return Vec::new();
    }

    // Hungarian below needs rows <= cols.
    let transposed = costs.rows > costs.cols;
    let (n, m) = if transposed {
        (costs.cols, costs.rows)
    } else {
        (costs.rows, costs.cols)
    };
    let cell = |i: usize, j: usize| {
        if transposed {
            costs.get(j, i)
        } else {
            costs.get(i, j)
        }
    };

    // A missing cell must cost more than any full set of real edges.
    let max_real = costs
        .cells
        .iter()
        .flatten()
        .fold(0.0f64, |acc, &c| acc.max(c.abs()));
    let missing = (max_real + 1.0) * (n as f64 + 1.0);

    let mut dense = vec![0.0f64; n * m];
    for i in 0..n {
        for j in 0..m {
            dense[i * m + j] = cell(i, j).unwrap_or(missing);
        }
    }

    let assignment = hungarian(&dense, n, m);

    let mut pairs: Vec<(usize, usize)> = assignment
        .into_iter()
        .enumerate()
        .filter(|&(i, j)| cell(i, j).is_some())
        .map(|(i, j)| if transposed { (j, i) } else { (i, j) })
        .collect();
    pairs.sort_unstable();
    pairs
}

/// Potentials-based Hungarian algorithm for an `n x m` dense matrix, `n <= m`.
/// Returns the column assigned to each row.
fn hungarian(cost: &[f64], n: usize, m: usize) -> Vec<usize> {
    // 1-based: index 0 is the virtual start column / unassigned row.
    let mut u = vec![0.0f64; n + 1];
    let mut v = vec![0.0f64; m + 1];
    let mut p = vec![0usize; m + 1];
    let mut way = vec![0usize; m + 1];

    for i in 1..=n {
        p[0] = i;
        let mut j0 = 0usize;
        let mut minv = vec![f64::INFINITY; m + 1];
        let mut used = vec![false; m + 1];

        loop {
            used[j0] = true;
            let i0 = p[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0usize;

            for j in 1..=m {
                if used[j] {
                    continue;
                }
                let reduced = cost[(i0 - 1) * m + (j - 1)] - u[i0] - v[j];
                if reduced < minv[j] {
                    minv[j] = reduced;
                    way[j] = j0;
                }
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = j;
                }
            }

            for j in 0..=m {
                if used[j] {
                    u[p[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if p[j0] == 0 {
                break;
            }
        }

        // Flip the augmenting path.
        loop {
            let j1 = way[j0];
            p[j0] = p[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0usize; n];
    for j in 1..=m {
        if p[j] != 0 {
            assignment[p[j] - 1] = j - 1;
        }
    }
    assignment
}
