use serde::{Deserialize, Serialize};

/// One `<td>` of a notification row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Text fragments trimmed and joined, used for descriptions and dates.
    pub text: String,
    /// Every text node as-is, used for course matching.
    pub raw_text: String,
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    pub classes: Vec<String>,
    pub cells: Vec<Cell>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Notification {
    pub description: String,
    pub semester_num: Option<u8>,
    /// Absolute URL resolved against the portal page when
    /// `portal.resolve_links` is on (the default), otherwise the `href`
    /// as written.
    pub pdf_link: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct NotificationGroup {
    pub published_date: String,
    pub published_year: String,
    pub notifications: Vec<Notification>,
}
