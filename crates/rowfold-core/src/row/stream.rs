///
/// RowStream
///
/// Destructive, non-restartable cursor over a row source with a pushback
/// stack. Drivers that stop at a group boundary return the boundary row here
/// so the next head extraction starts on it.
///

pub struct RowStream<I: Iterator> {
    rows: I,
    pending: Vec<I::Item>,
    rows_read: u64,
}

impl<I: Iterator> RowStream<I> {
    pub fn new(rows: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            rows: rows.into_iter(),
            pending: Vec::new(),
            rows_read: 0,
        }
    }

    /// Take the next row, preferring a pushed-back row.
    pub fn next_row(&mut self) -> Option<I::Item> {
        let row = self.pending.pop().or_else(|| self.rows.next())?;
        self.rows_read += 1;

        Some(row)
    }

    /// Return one row to the front of the stream, ahead of any row already
    /// pending.
    pub fn push_back(&mut self, row: I::Item) {
        self.pending.push(row);
        self.rows_read = self.rows_read.saturating_sub(1);
    }

    /// Number of rows handed out and not pushed back.
    #[must_use]
    pub const fn rows_read(&self) -> u64 {
        self.rows_read
    }

    /// Return true when no further row can be produced.
    pub fn is_exhausted(&mut self) -> bool {
        if !self.pending.is_empty() {
            return false;
        }
        match self.rows.next() {
            Some(row) => {
                self.pending.push(row);
                false
            }
            None => true,
        }
    }
}

impl<I: Iterator> Iterator for RowStream<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row()
    }
}
