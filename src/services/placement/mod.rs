//! Item placement index.
//!
//! Buckets scheduled items by calendar day once per render so each grid cell
//! can look up its items without rescanning the full list.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::item::ScheduledItem;

#[derive(Debug, Default)]
pub struct DayIndex<'a> {
    by_day: HashMap<NaiveDate, Vec<&'a ScheduledItem>>,
    unscheduled: usize,
}

impl<'a> DayIndex<'a> {
    pub fn build(items: &'a [ScheduledItem]) -> Self {
        let mut index = Self::default();
        for item in items {
            match item.scheduled_day() {
                Some(day) => index.by_day.entry(day).or_default().push(item),
                None => index.unscheduled += 1,
            }
        }
        for bucket in index.by_day.values_mut() {
            bucket.sort_by_key(|item| (item.scheduled_at, item.id));
        }
        index
    }

    /// Items landing on `day`, ordered by publish time.
    pub fn items_for(&self, day: NaiveDate) -> &[&'a ScheduledItem] {
        self.by_day.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn unscheduled_count(&self) -> usize {
        self.unscheduled
    }

    pub fn scheduled_count(&self) -> usize {
        self.by_day.values().map(Vec::len).sum()
    }
}

/// Linear-scan lookup for a single day.
pub fn items_for_day(items: &[ScheduledItem], day: NaiveDate) -> Vec<&ScheduledItem> {
    items
        .iter()
        .filter(|item| item.scheduled_day() == Some(day))
        .collect()
}

pub fn unscheduled_count(items: &[ScheduledItem]) -> usize {
    items.iter().filter(|item| !item.is_scheduled()).count()
}

/// The inline portion of a cell's items plus how many were left out.
#[derive(Debug, Clone, Copy)]
pub struct CellPreview<'i, 'a> {
    pub visible: &'i [&'a ScheduledItem],
    pub overflow: usize,
}

impl<'i, 'a> CellPreview<'i, 'a> {
    pub fn new(items: &'i [&'a ScheduledItem], cap: usize) -> Self {
        let shown = items.len().min(cap);
        Self {
            visible: &items[..shown],
            overflow: items.len() - shown,
        }
    }

    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{} more", self.overflow))
    }
}
