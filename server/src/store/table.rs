use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// An entity kind the store can hold.
///
/// Each kind names its insert shape (all required fields, optional ones
/// defaulted on create) and its patch shape (every field optional, merged
/// field by field on update).
pub trait Record: Clone + Send + Sync + 'static {
    type Insert;
    type Patch;

    /// Human label used in responses and logs, e.g. "Belief".
    const KIND: &'static str;

    fn id(&self) -> i64;
    fn sort_order(&self) -> i64;
    fn is_active(&self) -> bool;
    fn updated_at(&self) -> DateTime<Utc>;

    /// Build the stored record. Unset optionals take their defaults:
    /// sort order 0, active, text fields empty.
    fn from_insert(id: i64, insert: Self::Insert, now: DateTime<Utc>) -> Self;

    /// Overwrite only the fields present in `patch` and stamp `updated_at`.
    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

/// One entity kind's rows, keyed by an id that is never reused.
pub struct Table<R: Record> {
    rows: DashMap<i64, R>,
    next_id: AtomicI64,
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Table<R> {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn get(&self, id: i64) -> Option<R> {
        self.rows.get(&id).map(|row| row.value().clone())
    }

    /// Every row, ascending by sort order. Equal sort orders keep insertion order.
    pub fn all(&self) -> Vec<R> {
        self.filter(|_| true)
    }

    /// Same ordering as [`Table::all`], restricted to active rows.
    pub fn active(&self) -> Vec<R> {
        self.filter(R::is_active)
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<R>
    where
        F: Fn(&R) -> bool,
    {
        let mut rows: Vec<R> = self
            .rows
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        // Ids are handed out in insertion order, so they break sort-order ties.
        rows.sort_by_key(|row| (row.sort_order(), row.id()));
        rows
    }

    pub fn create(&self, insert: R::Insert) -> R {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = R::from_insert(id, insert, Utc::now());
        self.rows.insert(id, row.clone());
        row
    }

    /// Merge `patch` into the row with this id. `None` when the id is unknown.
    pub fn update(&self, id: i64, patch: R::Patch) -> Option<R> {
        let mut entry = self.rows.get_mut(&id)?;
        let row = entry.value_mut();
        let now = next_timestamp(row.updated_at());
        row.apply(patch, now);
        Some(row.clone())
    }

    /// Returns whether the row existed.
    pub fn delete(&self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Wall-clock now, nudged forward if the clock has not moved past `previous`.
fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
