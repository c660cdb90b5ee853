//! Drag-to-reschedule gesture state.
//!
//! The controller is fed abstract [`DragSignal`]s instead of raw pointer events,
//! so views translate egui responses into signals and tests drive it directly.
//! Dropping only picks the day; the hour is chosen in a confirmation step.

use chrono::{DateTime, Local, NaiveDate};

use crate::models::item::ItemId;
use crate::utils::date::resolve_local;

pub const DEFAULT_DROP_HOUR: u32 = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSignal {
    Start(ItemId),
    Enter(NaiveDate),
    Leave,
    Drop,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        item_id: ItemId,
    },
    HoveringDay {
        item_id: ItemId,
        day: NaiveDate,
    },
    ConfirmingHour {
        item_id: ItemId,
        day: NaiveDate,
        hour: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RescheduleRequest {
    pub item_id: ItemId,
    pub day: NaiveDate,
    pub hour: u32,
}

impl RescheduleRequest {
    /// Day plus hour as a local timestamp with minutes and seconds zeroed.
    pub fn timestamp(&self) -> Option<DateTime<Local>> {
        self.day
            .and_hms_opt(self.hour.min(23), 0, 0)
            .and_then(resolve_local)
    }
}

#[derive(Debug)]
pub struct DragController {
    state: DragState,
    default_hour: u32,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_DROP_HOUR)
    }
}

impl DragController {
    pub fn new(default_hour: u32) -> Self {
        Self {
            state: DragState::Idle,
            default_hour: default_hour.min(23),
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// True while an item is being carried, before the drop.
    pub fn is_dragging(&self) -> bool {
        matches!(
            self.state,
            DragState::Dragging { .. } | DragState::HoveringDay { .. }
        )
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.state, DragState::ConfirmingHour { .. })
    }

    pub fn dragged_item(&self) -> Option<ItemId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { item_id }
            | DragState::HoveringDay { item_id, .. }
            | DragState::ConfirmingHour { item_id, .. } => Some(item_id),
        }
    }

    /// The highlighted drop target, if any.
    pub fn highlighted_day(&self) -> Option<NaiveDate> {
        match self.state {
            DragState::HoveringDay { day, .. } => Some(day),
            _ => None,
        }
    }

    pub fn handle(&mut self, signal: DragSignal) {
        let next = match (self.state, signal) {
            (DragState::ConfirmingHour { .. }, DragSignal::Start(_)) => self.state,
            (_, DragSignal::Start(item_id)) => DragState::Dragging { item_id },
            (DragState::Dragging { item_id }, DragSignal::Enter(day))
            | (DragState::HoveringDay { item_id, .. }, DragSignal::Enter(day)) => {
                DragState::HoveringDay { item_id, day }
            }
            (DragState::HoveringDay { item_id, .. }, DragSignal::Leave) => {
                DragState::Dragging { item_id }
            }
            (DragState::HoveringDay { item_id, day }, DragSignal::Drop) => {
                DragState::ConfirmingHour {
                    item_id,
                    day,
                    hour: self.default_hour,
                }
            }
            // Released away from any cell
            (DragState::Dragging { .. }, DragSignal::Drop) => DragState::Idle,
            (DragState::ConfirmingHour { .. }, DragSignal::Cancel) => DragState::Idle,
            (DragState::ConfirmingHour { .. }, _) => self.state,
            (_, DragSignal::Cancel) => DragState::Idle,
            (state, _) => state,
        };

        if next != self.state {
            log::debug!("drag: {:?} -> {:?} on {:?}", self.state, next, signal);
            self.state = next;
        }
    }

    pub fn set_hour(&mut self, new_hour: u32) {
        if let DragState::ConfirmingHour { hour, .. } = &mut self.state {
            *hour = new_hour.min(23);
        }
    }

    pub fn pending_hour(&self) -> Option<u32> {
        match self.state {
            DragState::ConfirmingHour { hour, .. } => Some(hour),
            _ => None,
        }
    }

    /// Commit the pending hour. Returns the request and resets to idle.
    pub fn confirm(&mut self) -> Option<RescheduleRequest> {
        let DragState::ConfirmingHour { item_id, day, hour } = self.state else {
            return None;
        };
        self.state = DragState::Idle;
        log::info!("Rescheduling item {} to {} {:02}:00", item_id, day, hour);
        Some(RescheduleRequest { item_id, day, hour })
    }

    /// Discard any gesture or pending confirmation. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.handle(DragSignal::Cancel);
    }
}
