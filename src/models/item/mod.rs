// Scheduled item module
// Content queue entries as seen by the calendar

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::date::resolve_local;

/// Identifier assigned by the content queue.
pub type ItemId = i64;

/// A content post with an optional target publish time.
///
/// The calendar never mutates these; the host owns the list and re-supplies it
/// after persisting a reschedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledItem {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub scheduled_at: Option<DateTime<Local>>,
    /// Enabled destination channel keys, used for badges only.
    #[serde(default)]
    pub channels: Vec<String>,
}

impl ScheduledItem {
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            scheduled_at: None,
            channels: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn scheduled(mut self, at: DateTime<Local>) -> Self {
        self.scheduled_at = Some(at);
        self
    }

    pub fn with_channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    /// Calendar day the item lands on, or `None` when unscheduled.
    pub fn scheduled_day(&self) -> Option<NaiveDate> {
        self.scheduled_at.map(|at| at.date_naive())
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled_at.is_some()
    }

    /// Single-line preview of the content, cut at `max_chars` with an ellipsis.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let collapsed = self.content.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.chars().count() <= max_chars {
            return collapsed;
        }

        let mut cut: String = collapsed.chars().take(max_chars).collect();
        cut.truncate(cut.trim_end().len());
        cut.push('…');
        cut
    }

    pub fn formatted_schedule(&self) -> String {
        match self.scheduled_at {
            Some(at) => at.format("%a %b %-d, %Y · %H:%M").to_string(),
            None => "Unscheduled".to_string(),
        }
    }
}

/// Parse a host-supplied timestamp.
///
/// Accepts RFC 3339 with an offset, or a naive `YYYY-MM-DDTHH:MM[:SS]` read as
/// local time. Anything else is treated as "no timestamp".
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(resolve_local)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Local>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawTimestamp::Text(text)) => parse_timestamp(&text),
        Some(RawTimestamp::Other(_)) | None => None,
    })
}
