/// One (u, v) cell of a resolution x resolution grid. `u` runs along a row,
/// `v` selects the row.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct GridCell { pub u: u32, pub v: u32 }

/// Linear index -> cell. `resolution` must be non-zero.
#[inline]
pub fn cell_of(i: u32, resolution: u32) -> GridCell {
    debug_assert!(resolution > 0, "cell_of on an empty grid");
    let v = i / resolution;
    GridCell { u: i - resolution * v, v }
}

/// Cell -> linear index. The cell must lie inside the grid.
#[inline]
pub fn index_of(c: GridCell, resolution: u32) -> u32 {
    debug_assert!(c.u < resolution && c.v < resolution, "{c:?} outside {resolution}x{resolution} grid");
    c.u + resolution * c.v
}

/// All cells in linear index order.
pub fn cells(resolution: u32) -> impl Iterator<Item = GridCell> {
    (0..resolution.saturating_mul(resolution)).map(move |i| cell_of(i, resolution))
}
