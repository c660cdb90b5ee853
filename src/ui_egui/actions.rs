//! Host boundary.
//!
//! The calendar never touches the item list itself. Each frame it reports what
//! the user asked for as [`CalendarAction`]s and the host decides what to do.

use chrono::{DateTime, Local, NaiveDate};

use crate::models::item::{ItemId, ScheduledItem};

#[derive(Clone, Debug, PartialEq)]
pub enum CalendarAction {
    OpenItem(ItemId),
    Reschedule {
        item_id: ItemId,
        at: DateTime<Local>,
    },
    CreateForDate(NaiveDate),
}

#[cfg_attr(test, mockall::automock)]
pub trait CalendarHost {
    fn on_item_click(&mut self, item: &ScheduledItem);
    /// Persist the new time. Failures are the host's to surface; the calendar
    /// has already returned to idle.
    fn on_reschedule(&mut self, item_id: ItemId, at: DateTime<Local>);
    fn on_create_for_date(&mut self, date: NaiveDate);
}

pub fn dispatch<H>(actions: Vec<CalendarAction>, items: &[ScheduledItem], host: &mut H)
where
    H: CalendarHost + ?Sized,
{
    for action in actions {
        match action {
            CalendarAction::OpenItem(id) => match items.iter().find(|item| item.id == id) {
                Some(item) => host.on_item_click(item),
                None => log::debug!("Ignoring click on item {} that is no longer listed", id),
            },
            CalendarAction::Reschedule { item_id, at } => host.on_reschedule(item_id, at),
            CalendarAction::CreateForDate(date) => host.on_create_for_date(date),
        }
    }
}
