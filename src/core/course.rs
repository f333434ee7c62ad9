use crate::model::notification::RawRow;

pub const HEADING_CLASS: &str = "tableHeading";

/// Course codes accepted in `/course/{course}` and the text the portal
/// prints for them.
pub const COURSE_MAP: [(&str, &str); 4] = [
    ("btech", "B.Tech"),
    ("mtech", "M.Tech"),
    ("ba", "B.A."),
    ("bcom", "B.Com."),
];

/// Display string for a course code, or `""` when the code is unknown.
///
/// The empty string matches every row, so an unknown code means no filter.
pub fn convert_course_string(course: &str) -> &'static str {
    let course = course.to_lowercase();
    COURSE_MAP
        .iter()
        .find(|(code, _)| *code == course)
        .map(|(_, display)| *display)
        .unwrap_or("")
}

impl RawRow {
    pub fn is_heading(&self) -> bool {
        self.classes.iter().any(|class| class == HEADING_CLASS)
    }

    /// Headings always match so that grouping keeps its dates.
    pub fn matches(&self, needle: &str) -> bool {
        self.is_heading() || self.cells.iter().any(|cell| cell.raw_text.contains(needle))
    }
}

pub fn filter_rows(rows: Vec<RawRow>, needle: &str) -> Vec<RawRow> {
    rows.into_iter().filter(|row| row.matches(needle)).collect()
}
