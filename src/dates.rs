use ahash::AHashMap;
use anyhow::{bail, Result};

/// An ordered sequence of date keys for one loaded dataset.
///
/// Insertion order is chronological order; keys are opaque to the core
/// (ISO `yyyy-mm-dd` strings in practice, but any unique keys work).
/// Built once per dataset load and immutable afterward — never a shared
/// singleton, so multiple datasets with different reporting calendars
/// can coexist.
#[derive(Debug, Clone)]
pub struct DateSequence {
    keys: Vec<String>,
    index: AHashMap<String, usize>, // key -> position in `keys`
}

impl DateSequence {
    /// Build a sequence from keys in chronological order.
    /// Fails on duplicate keys, which would make "previous date" ambiguous.
    pub fn new<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let mut index = AHashMap::with_capacity(keys.len());
        for (i, key) in keys.iter().enumerate() {
            if index.insert(key.clone(), i).is_some() {
                bail!("[DateSequence] duplicate date key: {key}");
            }
        }
        Ok(Self { keys, index })
    }

    /// Number of dates in the sequence.
    #[inline] pub fn len(&self) -> usize { self.keys.len() }

    /// Check if the sequence has no dates.
    #[inline] pub fn is_empty(&self) -> bool { self.keys.is_empty() }

    /// Position of `date` in the sequence, if present.
    #[inline]
    pub fn position(&self, date: &str) -> Option<usize> {
        self.index.get(date).copied()
    }

    /// Date key at `pos`.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&str> {
        self.keys.get(pos).map(String::as_str)
    }

    /// Earliest date in the sequence.
    #[inline] pub fn first(&self) -> Option<&str> { self.get(0) }

    /// Latest date in the sequence.
    #[inline]
    pub fn last(&self) -> Option<&str> {
        self.keys.last().map(String::as_str)
    }

    /// Iterate over the keys in chronological order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// The date immediately before `date`, or `None` if `date` is the
    /// first key or absent from the sequence. Window walks rely on the
    /// absent case stopping the walk rather than erroring.
    pub fn previous(&self, date: &str) -> Option<&str> {
        match self.position(date) {
            Some(0) | None => None,
            Some(pos) => self.get(pos - 1),
        }
    }

    /// The date `n` steps before `date`, or `None` if the walk runs off
    /// the front of the sequence.
    pub fn nth_previous(&self, date: &str, n: usize) -> Option<&str> {
        let pos = self.position(date)?;
        if n > pos {
            return None;
        }
        self.get(pos - n)
    }

    /// The latest key `<=` the query under the keys' natural order, or
    /// the first key when the query precedes the whole sequence. Used to
    /// snap slider positions to reporting dates.
    pub fn nearest(&self, date: &str) -> Option<&str> {
        let mut best = None;
        for key in self.iter() {
            if key <= date {
                best = Some(key);
            } else {
                break;
            }
        }
        best.or_else(|| self.first())
    }
}

#[cfg(test)]
mod tests {
    use super::DateSequence;

    fn seq() -> DateSequence {
        DateSequence::new(["2020-03-01", "2020-03-02", "2020-03-04", "2020-03-05"]).unwrap()
    }

    #[test]
    fn duplicate_keys_rejected() {
        assert!(DateSequence::new(["2020-03-01", "2020-03-01"]).is_err());
    }

    #[test]
    fn previous_walks_in_insertion_order() {
        let dates = seq();
        assert_eq!(dates.previous("2020-03-05"), Some("2020-03-04"));
        assert_eq!(dates.previous("2020-03-04"), Some("2020-03-02"));
        assert_eq!(dates.previous("2020-03-01"), None);
    }

    #[test]
    fn previous_of_unknown_date_is_none() {
        assert_eq!(seq().previous("2020-03-03"), None);
    }

    #[test]
    fn nth_previous_stops_at_front() {
        let dates = seq();
        assert_eq!(dates.nth_previous("2020-03-05", 2), Some("2020-03-02"));
        assert_eq!(dates.nth_previous("2020-03-05", 3), Some("2020-03-01"));
        assert_eq!(dates.nth_previous("2020-03-05", 4), None);
        assert_eq!(dates.nth_previous("2020-03-05", 0), Some("2020-03-05"));
    }

    #[test]
    fn nearest_snaps_to_reporting_dates() {
        let dates = seq();
        assert_eq!(dates.nearest("2020-03-03"), Some("2020-03-02"));
        assert_eq!(dates.nearest("2020-03-05"), Some("2020-03-05"));
        assert_eq!(dates.nearest("2020-02-01"), Some("2020-03-01"));
        assert_eq!(dates.nearest("2021-01-01"), Some("2020-03-05"));
    }

    #[test]
    fn accessors() {
        let dates = seq();
        assert_eq!(dates.len(), 4);
        assert!(!dates.is_empty());
        assert_eq!(dates.first(), Some("2020-03-01"));
        assert_eq!(dates.last(), Some("2020-03-05"));
        assert_eq!(dates.position("2020-03-04"), Some(2));
        assert_eq!(dates.position("2019-01-01"), None);
    }
}
