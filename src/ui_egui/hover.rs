//! Debounced hover preview for item chips.
//!
//! Each calendar owns one `HoverPreview`. egui has no timers, so the pending
//! hover is a deadline that the view polls every frame with the current
//! `Instant`, requesting a repaint for the remaining time.

use egui::Pos2;
use std::time::{Duration, Instant};

use crate::models::item::ItemId;

pub const HOVER_DELAY: Duration = Duration::from_millis(400);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tooltip {
    pub item_id: ItemId,
    /// Pointer position when the delay elapsed; not re-tracked afterwards.
    pub anchor: Pos2,
}

#[derive(Clone, Copy, Debug)]
struct PendingHover {
    item_id: ItemId,
    started_at: Instant,
}

#[derive(Debug)]
pub struct HoverPreview {
    delay: Duration,
    pending: Option<PendingHover>,
    visible: Option<Tooltip>,
}

impl Default for HoverPreview {
    fn default() -> Self {
        Self::new(HOVER_DELAY)
    }
}

impl HoverPreview {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            visible: None,
        }
    }

    /// Start the delay for `item_id`, replacing any earlier hover.
    pub fn pointer_enter(&mut self, item_id: ItemId, now: Instant) {
        if self.hovered_item() == Some(item_id) {
            return;
        }
        self.visible = None;
        self.pending = Some(PendingHover {
            item_id,
            started_at: now,
        });
    }

    pub fn pointer_leave(&mut self, item_id: ItemId) {
        if self.pending.is_some_and(|pending| pending.item_id == item_id) {
            self.pending = None;
        }
        if self.visible.is_some_and(|tooltip| tooltip.item_id == item_id) {
            self.visible = None;
        }
    }

    /// Advance the deadline. Fires at most once per hover.
    pub fn tick(&mut self, now: Instant, pointer: Option<Pos2>) -> Option<Tooltip> {
        // Without a pointer position the hover stays pending until one arrives
        if let (Some(pending), Some(anchor)) = (self.pending, pointer) {
            if now.saturating_duration_since(pending.started_at) >= self.delay {
                self.pending = None;
                self.visible = Some(Tooltip {
                    item_id: pending.item_id,
                    anchor,
                });
            }
        }
        self.visible
    }

    /// Time left before the pending hover fires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|pending| {
            self.delay
                .saturating_sub(now.saturating_duration_since(pending.started_at))
        })
    }

    pub fn visible(&self) -> Option<Tooltip> {
        self.visible
    }

    fn hovered_item(&self) -> Option<ItemId> {
        self.pending
            .map(|pending| pending.item_id)
            .or(self.visible.map(|tooltip| tooltip.item_id))
    }

    /// Drop any pending or visible preview, e.g. when the grid is torn down.
    pub fn clear(&mut self) {
        self.pending = None;
        self.visible = None;
    }
}
