/// A sheet as delivered by the data source: one header row plus data rows of strings.
///
/// Cells are positional; `rows[n][i]` belongs to `headers[i]`. Rows may be
/// shorter than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Builds a table from a header-first grid, as returned by a sheet export.
    pub fn from_grid(mut grid: Vec<Vec<String>>) -> Self {
        if grid.is_empty() {
            return Self::default();
        }

        let headers = grid.remove(0);

        Self { headers, rows: grid }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
