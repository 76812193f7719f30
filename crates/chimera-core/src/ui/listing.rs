//! Empty-versus-populated split for list-backed components.

/// A list classified once per render.
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a, T> {
    Empty,
    Populated(&'a [T]),
}

impl<'a, T> Listing<'a, T> {
    pub fn of(items: &'a [T]) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Populated(items)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    /// Number of items; zero for `Empty`.
    pub fn len(&self) -> usize {
        match self {
            Listing::Empty => 0,
            Listing::Populated(items) => items.len(),
        }
    }
}
