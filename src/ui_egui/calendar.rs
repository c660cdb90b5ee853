//! The content calendar widget.
//!
//! Owns all render-local state (navigation cursor, drag gesture, hover timer)
//! for one calendar instance. Items are borrowed each frame and never mutated;
//! user intent is returned as [`CalendarAction`]s.

use chrono::{Local, NaiveDate};
use egui::{Align2, CursorIcon, FontId, Id, LayerId, Order, Rect, Vec2};
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::models::item::{ItemId, ScheduledItem};
use crate::models::settings::CalendarSettings;
use crate::models::ui::ViewMode;
use crate::services::placement::DayIndex;
use crate::ui_egui::actions::CalendarAction;
use crate::ui_egui::dialogs::hour_confirm::{render_hour_confirm, HourDialogOutcome};
use crate::ui_egui::drag::{DragController, DragSignal, DragState};
use crate::ui_egui::hover::HoverPreview;
use crate::ui_egui::navigation::ViewNavigator;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::month_view::MonthView;
use crate::ui_egui::views::palette::CalendarCellPalette;
use crate::ui_egui::views::week_view::WeekView;
use crate::ui_egui::views::{tooltip, GridContext, GridOutput};

pub struct ContentCalendar {
    id: Id,
    settings: CalendarSettings,
    theme: CalendarTheme,
    navigator: ViewNavigator,
    drag: DragController,
    hover: HoverPreview,
    /// Chip under the pointer last frame, for enter/leave edges.
    hovered_item: Option<ItemId>,
}

impl ContentCalendar {
    pub fn new(id_source: impl Hash, settings: CalendarSettings) -> Self {
        let settings = settings.sanitized();
        Self {
            id: Id::new(id_source),
            theme: CalendarTheme::from_name(&settings.theme),
            navigator: ViewNavigator::today(settings.default_view),
            drag: DragController::new(settings.default_drop_hour),
            hover: HoverPreview::new(Duration::from_millis(settings.hover_delay_ms)),
            hovered_item: None,
            settings,
        }
    }

    pub fn theme(&self) -> &CalendarTheme {
        &self.theme
    }

    pub fn show(&mut self, ui: &mut egui::Ui, items: &[ScheduledItem]) -> Vec<CalendarAction> {
        let index = DayIndex::build(items);
        let today = Local::now().date_naive();
        let pointer = ui.input(|i| i.pointer.hover_pos());

        self.handle_shortcuts(ui.ctx());
        self.render_toolbar(ui, index.unscheduled_count());
        ui.separator();

        let mode = self.navigator.mode();
        let rows = self.navigator.rows(today);
        let grid = GridContext {
            id: self.id,
            index: &index,
            palette: CalendarCellPalette::from_theme(&self.theme),
            drag: &self.drag,
            pointer,
            chip_cap: match mode {
                ViewMode::Week => self.settings.week_chip_cap,
                ViewMode::Month => self.settings.month_dot_cap,
            },
            show_week_numbers: self.settings.show_week_numbers,
        };
        let mut output = GridOutput::default();
        match mode {
            ViewMode::Week => {
                if let Some(week) = rows.first() {
                    WeekView::show(ui, week, &grid, &mut output);
                }
            }
            ViewMode::Month => MonthView::show(ui, &rows, &grid, &mut output),
        }

        let GridOutput {
            mut actions,
            drag_signals,
            pointer_day,
            hovered_item,
        } = output;

        for signal in drag_signals {
            self.drag.handle(signal);
        }
        self.track_drag(ui, items, pointer_day);
        self.track_hover(ui.ctx(), items, hovered_item);

        if let Some(action) = self.render_confirmation(ui.ctx(), items) {
            actions.push(action);
        }
        actions
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui, unscheduled: usize) {
        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Previous").clicked() {
                self.navigator.previous();
            }
            if ui.button("Today").clicked() {
                self.navigator.jump_to_today();
            }
            if ui.button("▶").on_hover_text("Next").clicked() {
                self.navigator.next();
            }
            ui.add_space(8.0);
            ui.heading(self.navigator.title());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut mode = self.navigator.mode();
                ui.selectable_value(&mut mode, ViewMode::Month, ViewMode::Month.label());
                ui.selectable_value(&mut mode, ViewMode::Week, ViewMode::Week.label());
                if mode != self.navigator.mode() {
                    self.navigator.set_mode(mode);
                }

                if unscheduled > 0 {
                    ui.add_space(12.0);
                    ui.weak(format!("{} unscheduled", unscheduled));
                }
            });
        });
    }

    /// Feed pointer position and release into the drag machine and paint the
    /// carried item next to the cursor.
    fn track_drag(
        &mut self,
        ui: &egui::Ui,
        items: &[ScheduledItem],
        pointer_day: Option<NaiveDate>,
    ) {
        let released = ui.input(|i| i.pointer.any_released());
        if !self.follow_pointer(pointer_day, released) {
            return;
        }

        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        let dragged = self
            .drag
            .dragged_item()
            .and_then(|id| items.iter().find(|item| item.id == id));
        if let (Some(item), Some(pos)) = (dragged, ui.input(|i| i.pointer.hover_pos())) {
            let painter = ui
                .ctx()
                .layer_painter(LayerId::new(Order::Tooltip, self.id.with("drag_ghost")));
            let ghost = Rect::from_min_size(pos + Vec2::new(10.0, 10.0), Vec2::new(160.0, 22.0));
            painter.rect_filled(ghost, 4.0, self.theme.chip_background);
            painter.text(
                ghost.left_center() + Vec2::new(6.0, 0.0),
                Align2::LEFT_CENTER,
                &item.title,
                FontId::proportional(12.0),
                self.theme.chip_text,
            );
        }
    }

    /// Turn the day under the pointer and a button release into drag signals.
    ///
    /// Returns `true` while an item is still being carried.
    fn follow_pointer(&mut self, pointer_day: Option<NaiveDate>, released: bool) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }

        match pointer_day {
            Some(day) if self.drag.highlighted_day() != Some(day) => {
                self.drag.handle(DragSignal::Enter(day))
            }
            None if self.drag.highlighted_day().is_some() => self.drag.handle(DragSignal::Leave),
            _ => {}
        }

        if released {
            self.drag.handle(DragSignal::Drop);
            return false;
        }
        true
    }

    fn track_hover(
        &mut self,
        ctx: &egui::Context,
        items: &[ScheduledItem],
        hovered_item: Option<ItemId>,
    ) {
        let now = Instant::now();

        // No previews while an item is being carried
        let hovered_item = if self.drag.is_dragging() || self.drag.is_confirming() {
            None
        } else {
            hovered_item
        };

        if hovered_item != self.hovered_item {
            if let Some(previous) = self.hovered_item {
                self.hover.pointer_leave(previous);
            }
            if let Some(current) = hovered_item {
                self.hover.pointer_enter(current, now);
            }
            self.hovered_item = hovered_item;
        }

        let pointer = ctx.input(|i| i.pointer.hover_pos());
        if let Some(shown) = self.hover.tick(now, pointer) {
            match items.iter().find(|item| item.id == shown.item_id) {
                Some(item) => tooltip::show(ctx, self.id, shown, item),
                None => self.hover.clear(),
            }
        }
        if let Some(remaining) = self.hover.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }

    fn render_confirmation(
        &mut self,
        ctx: &egui::Context,
        items: &[ScheduledItem],
    ) -> Option<CalendarAction> {
        let DragState::ConfirmingHour { item_id, day, hour } = self.drag.state() else {
            return None;
        };
        let title = items
            .iter()
            .find(|item| item.id == item_id)
            .map(|item| item.title.as_str())
            .unwrap_or("post");

        match render_hour_confirm(ctx, self.id, title, day, hour) {
            HourDialogOutcome::Open(selected) => {
                self.drag.set_hour(selected);
                None
            }
            HourDialogOutcome::Cancel => {
                self.drag.cancel();
                None
            }
            HourDialogOutcome::Confirm(selected) => {
                self.drag.set_hour(selected);
                let request = self.drag.confirm()?;
                match request.timestamp() {
                    Some(at) => Some(CalendarAction::Reschedule {
                        item_id: request.item_id,
                        at,
                    }),
                    None => {
                        log::warn!(
                            "No local time for {} {:02}:00; reschedule of item {} skipped",
                            request.day,
                            request.hour,
                            request.item_id
                        );
                        None
                    }
                }
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if escape && (self.drag.is_dragging() || self.drag.is_confirming()) {
            self.drag.cancel();
        }

        if ctx.wants_keyboard_input() || self.drag.is_confirming() {
            return;
        }

        ctx.input(|i| {
            if i.modifiers.any() {
                return;
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.navigator.previous();
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.navigator.next();
            }
            if i.key_pressed(egui::Key::T) {
                self.navigator.jump_to_today();
            }
            if i.key_pressed(egui::Key::W) {
                self.navigator.set_mode(ViewMode::Week);
            }
            if i.key_pressed(egui::Key::M) {
                self.navigator.set_mode(ViewMode::Month);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Key, Modifiers, PointerButton, Pos2};
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn calendar_at(cursor: NaiveDate, mode: ViewMode) -> ContentCalendar {
        let mut calendar = ContentCalendar::new("test_calendar", CalendarSettings::default());
        calendar.navigator = ViewNavigator::new(cursor, mode);
        calendar
    }

    fn queue() -> Vec<ScheduledItem> {
        vec![
            ScheduledItem::new(1, "Launch teaser"),
            ScheduledItem::new(2, "Weekly digest"),
        ]
    }

    /// Run one headless frame on a 1000x800 screen.
    fn run_frame(
        ctx: &egui::Context,
        calendar: &mut ContentCalendar,
        items: &[ScheduledItem],
        events: Vec<Event>,
    ) -> Vec<CalendarAction> {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 800.0))),
            events,
            ..Default::default()
        };
        let mut actions = Vec::new();
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                actions = calendar.show(ui, items);
            });
        });
        actions
    }

    fn move_to(pos: Pos2) -> Event {
        Event::PointerMoved(pos)
    }

    fn release_at(pos: Pos2) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: false,
            modifiers: Modifiers::default(),
        }
    }

    fn escape() -> Event {
        Event::Key {
            key: Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::default(),
        }
    }

    // Lower half of the Monday column in the week grid
    const MONDAY_CELL: Pos2 = Pos2::new(70.0, 400.0);
    // Empty toolbar space between the title and the view selector
    const TOOLBAR: Pos2 = Pos2::new(500.0, 14.0);
    // First column of the first month row
    const FIRST_MONTH_CELL: Pos2 = Pos2::new(70.0, 110.0);

    #[test]
    fn test_follow_pointer_enters_leaves_and_drops() {
        let mut calendar = calendar_at(date(2024, 3, 11), ViewMode::Week);
        assert!(!calendar.follow_pointer(Some(date(2024, 3, 12)), false));

        calendar.drag.handle(DragSignal::Start(1));
        assert!(calendar.follow_pointer(Some(date(2024, 3, 12)), false));
        assert_eq!(calendar.drag.highlighted_day(), Some(date(2024, 3, 12)));

        assert!(calendar.follow_pointer(None, false));
        assert_eq!(calendar.drag.state(), DragState::Dragging { item_id: 1 });

        assert!(!calendar.follow_pointer(Some(date(2024, 3, 14)), true));
        assert_eq!(
            calendar.drag.state(),
            DragState::ConfirmingHour {
                item_id: 1,
                day: date(2024, 3, 14),
                hour: 9,
            }
        );
    }

    #[test]
    fn test_follow_pointer_release_off_grid_returns_to_idle() {
        let mut calendar = calendar_at(date(2024, 3, 11), ViewMode::Week);
        calendar.drag.handle(DragSignal::Start(1));
        calendar.follow_pointer(Some(date(2024, 3, 12)), false);

        assert!(!calendar.follow_pointer(None, true));
        assert_eq!(calendar.drag.state(), DragState::Idle);
    }

    #[test]
    fn test_release_over_week_cell_asks_for_hour() {
        let ctx = egui::Context::default();
        let items = queue();
        let mut calendar = calendar_at(date(2024, 3, 13), ViewMode::Week);
        calendar.drag.handle(DragSignal::Start(1));

        run_frame(&ctx, &mut calendar, &items, vec![move_to(MONDAY_CELL)]);
        assert_eq!(
            calendar.drag.state(),
            DragState::HoveringDay {
                item_id: 1,
                day: date(2024, 3, 11),
            }
        );

        let actions = run_frame(&ctx, &mut calendar, &items, vec![release_at(MONDAY_CELL)]);
        assert!(actions.is_empty());
        assert_eq!(
            calendar.drag.state(),
            DragState::ConfirmingHour {
                item_id: 1,
                day: date(2024, 3, 11),
                hour: 9,
            }
        );

        run_frame(&ctx, &mut calendar, &items, vec![escape()]);
        assert_eq!(calendar.drag.state(), DragState::Idle);
    }

    #[test]
    fn test_release_over_padding_cell_cancels() {
        let ctx = egui::Context::default();
        let items = queue();
        // February 2024 starts on a Thursday, so Monday of the first row is padding
        let mut calendar = calendar_at(date(2024, 2, 15), ViewMode::Month);
        calendar.drag.handle(DragSignal::Start(2));

        run_frame(&ctx, &mut calendar, &items, vec![move_to(FIRST_MONTH_CELL)]);
        assert_eq!(calendar.drag.highlighted_day(), None);

        let actions = run_frame(&ctx, &mut calendar, &items, vec![release_at(FIRST_MONTH_CELL)]);
        assert!(actions.is_empty());
        assert_eq!(calendar.drag.state(), DragState::Idle);
    }

    #[test]
    fn test_release_outside_grid_cancels() {
        let ctx = egui::Context::default();
        let items = queue();
        let mut calendar = calendar_at(date(2024, 3, 13), ViewMode::Week);
        calendar.drag.handle(DragSignal::Start(1));

        run_frame(&ctx, &mut calendar, &items, vec![move_to(MONDAY_CELL)]);
        run_frame(
            &ctx,
            &mut calendar,
            &items,
            vec![move_to(TOOLBAR), release_at(TOOLBAR)],
        );

        assert_eq!(calendar.drag.state(), DragState::Idle);
    }

    #[test]
    fn test_escape_clears_highlighted_day() {
        let ctx = egui::Context::default();
        let items = queue();
        let mut calendar = calendar_at(date(2024, 3, 13), ViewMode::Week);
        calendar.drag.handle(DragSignal::Start(1));

        run_frame(&ctx, &mut calendar, &items, vec![move_to(MONDAY_CELL)]);
        assert_eq!(calendar.drag.highlighted_day(), Some(date(2024, 3, 11)));

        run_frame(&ctx, &mut calendar, &items, vec![escape()]);
        assert_eq!(calendar.drag.state(), DragState::Idle);
        assert_eq!(calendar.drag.highlighted_day(), None);
    }

    #[test]
    fn test_no_hover_preview_while_dragging() {
        let ctx = egui::Context::default();
        let items = queue();
        let mut calendar = calendar_at(date(2024, 3, 13), ViewMode::Week);
        calendar.drag.handle(DragSignal::Start(1));

        let input = egui::RawInput {
            events: vec![move_to(MONDAY_CELL)],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| calendar.track_hover(ctx, &items, Some(2)));

        assert_eq!(calendar.hovered_item, None);
        assert_eq!(calendar.hover.remaining(Instant::now()), None);
    }

    #[test]
    fn test_tooltip_clears_when_item_disappears() {
        let ctx = egui::Context::default();
        let items = queue();
        let settings = CalendarSettings {
            hover_delay_ms: 0,
            ..Default::default()
        };
        let mut calendar = ContentCalendar::new("test_calendar", settings);

        let input = egui::RawInput {
            events: vec![move_to(MONDAY_CELL)],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| calendar.track_hover(ctx, &items, Some(2)));
        assert_eq!(calendar.hover.visible().map(|tooltip| tooltip.item_id), Some(2));

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            calendar.track_hover(ctx, &items[..1], Some(2))
        });
        assert_eq!(calendar.hover.visible(), None);
    }
}
