/// Outcome of an update or delete addressed by id.
///
/// A missing row is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affected {
    Updated(usize),
    NotFound,
}

impl Affected {
    pub fn from_rows(rows: usize) -> Self {
        if rows == 0 {
            Affected::NotFound
        } else {
            Affected::Updated(rows)
        }
    }

    pub fn rows(&self) -> usize {
        match self {
            Affected::Updated(n) => *n,
            Affected::NotFound => 0,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Affected::Updated(_))
    }
}
