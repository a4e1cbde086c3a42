//! Pagination window for goal listings.

/// A clamped `(start, count)` window over the goals table.
///
/// ## Constraints
///
/// - `count` is in `1..=10`; anything else (or nothing) becomes 10
/// - `start` is non-negative; anything negative (or nothing) becomes 0
///
/// ## Examples
///
/// ```
/// use todo_api_core::Page;
///
/// assert_eq!(Page::new(None, None), Page::new(Some(0), Some(10)));
/// assert_eq!(Page::new(Some(-5), Some(50)).count(), 10);
/// assert_eq!(Page::new(Some(-5), Some(3)).start(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    start: i64,
    count: i64,
}

impl Page {
    /// Largest number of goals returned by a single listing.
    pub const MAX_COUNT: i64 = 10;

    /// Build a page, clamping out-of-range values.
    #[must_use]
    pub fn new(start: Option<i64>, count: Option<i64>) -> Self {
        let count = match count {
            Some(c) if (1..=Self::MAX_COUNT).contains(&c) => c,
            _ => Self::MAX_COUNT,
        };
        let start = start.filter(|s| *s >= 0).unwrap_or(0);
        Self { start, count }
    }

    /// Build a page from raw query-string values.
    ///
    /// Values that are not integers are treated as absent.
    #[must_use]
    pub fn from_query(start: Option<&str>, count: Option<&str>) -> Self {
        let parse = |v: Option<&str>| v.and_then(|s| s.trim().parse::<i64>().ok());
        Self::new(parse(start), parse(count))
    }

    /// Row offset (SQL `OFFSET`).
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Row limit (SQL `LIMIT`).
    #[must_use]
    pub const fn count(&self) -> i64 {
        self.count
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}
