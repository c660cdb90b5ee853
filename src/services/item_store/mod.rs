// Item store
// JSON-file content queue used by the desktop host

use chrono::{DateTime, Duration, Local, NaiveDate};
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::item::{ItemId, ScheduledItem};
use crate::utils::date::resolve_local;

#[derive(Debug, Error)]
pub enum ItemStoreError {
    #[error("failed to access {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid item list in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("no item with id {0}")]
    UnknownItem(ItemId),
}

/// Authoritative item list persisted to a JSON array on disk.
pub struct ItemStore {
    path: PathBuf,
    items: Vec<ScheduledItem>,
}

impl ItemStore {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "ContentCalendar", "ContentCalendar")
            .map(|dirs| dirs.data_dir().join("items.json"))
    }

    /// Open the store; a missing file starts empty.
    ///
    /// The file must hold a JSON array. Entries that do not describe an item
    /// are skipped with a warning so one bad record cannot hide the queue.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ItemStoreError> {
        let path = path.into();
        let entries: Vec<serde_json::Value> = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| ItemStoreError::Json {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(ItemStoreError::Io { path, source }),
        };

        let total = entries.len();
        let items: Vec<ScheduledItem> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                serde_json::from_value(entry)
                    .map_err(|err| {
                        log::warn!(
                            "Skipping entry {} in {}: {}",
                            position,
                            path.display(),
                            err
                        );
                    })
                    .ok()
            })
            .collect();
        log::info!(
            "Loaded {} of {} items from {}",
            items.len(),
            total,
            path.display()
        );
        Ok(Self { path, items })
    }

    pub fn with_items(path: impl Into<PathBuf>, items: Vec<ScheduledItem>) -> Self {
        Self {
            path: path.into(),
            items,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn items(&self) -> &[ScheduledItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&ScheduledItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Move an item to `at`. The in-memory list only changes once the file
    /// has been written.
    pub fn reschedule(&mut self, id: ItemId, at: DateTime<Local>) -> Result<(), ItemStoreError> {
        let mut updated = self.items.clone();
        let item = updated
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ItemStoreError::UnknownItem(id))?;
        item.scheduled_at = Some(at);
        self.commit(updated)
    }

    /// Append an untitled draft scheduled on `date` at `hour`.
    pub fn create_draft(&mut self, date: NaiveDate, hour: u32) -> Result<ItemId, ItemStoreError> {
        let id = self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let scheduled_at = date.and_hms_opt(hour.min(23), 0, 0).and_then(resolve_local);
        let mut updated = self.items.clone();
        updated.push(ScheduledItem {
            scheduled_at,
            ..ScheduledItem::new(id, "Untitled post")
        });
        self.commit(updated)?;
        Ok(id)
    }

    pub fn save(&self) -> Result<(), ItemStoreError> {
        self.write(&self.items)
    }

    fn commit(&mut self, updated: Vec<ScheduledItem>) -> Result<(), ItemStoreError> {
        self.write(&updated)?;
        self.items = updated;
        Ok(())
    }

    fn write(&self, items: &[ScheduledItem]) -> Result<(), ItemStoreError> {
        let io_err = |source: io::Error| ItemStoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let encoded = serde_json::to_string_pretty(items).map_err(|source| {
            ItemStoreError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, encoded).map_err(io_err)
    }
}

/// A small spread of posts around `today` for a first launch.
pub fn sample_items(today: NaiveDate) -> Vec<ScheduledItem> {
    let at = |offset: i64, hour: u32| {
        (today + Duration::days(offset))
            .and_hms_opt(hour, 0, 0)
            .and_then(resolve_local)
    };
    vec![
        ScheduledItem {
            scheduled_at: at(0, 9),
            ..ScheduledItem::new(1, "Product launch teaser")
                .with_content("Something new is coming this week. Stay tuned!")
                .with_channels(["x", "linkedin"])
        },
        ScheduledItem {
            scheduled_at: at(0, 13),
            ..ScheduledItem::new(2, "Behind the scenes")
                .with_content("A look at how the team ships every Friday.")
                .with_channels(["instagram"])
        },
        ScheduledItem {
            scheduled_at: at(1, 10),
            ..ScheduledItem::new(3, "Customer story")
                .with_content("How a small bakery doubled online orders.")
                .with_channels(["linkedin", "facebook"])
        },
        ScheduledItem {
            scheduled_at: at(3, 17),
            ..ScheduledItem::new(4, "Weekly digest")
                .with_content("Top five reads from the blog this week.")
                .with_channels(["newsletter"])
        },
        ScheduledItem::new(5, "Idea: poll about pricing")
            .with_content("Ask followers which plan they would pick."),
    ]
}
