use log::{debug, warn};
use url::Url;

use crate::core::row::RowKind;
use crate::model::notification::{NotificationGroup, RawRow};

enum State {
    NoGroupOpen,
    GroupOpen(NotificationGroup),
}

/// Folds table rows into groups keyed by the heading that precedes them.
pub struct Grouper<'a> {
    state: State,
    sealed: Vec<NotificationGroup>,
    base: Option<&'a Url>,
}

impl<'a> Grouper<'a> {
    pub fn new(base: Option<&'a Url>) -> Self {
        Grouper {
            state: State::NoGroupOpen,
            sealed: Vec::new(),
            base,
        }
    }

    pub fn push(&mut self, row: &RawRow) {
        match row.kind() {
            RowKind::Heading => self.open(row),
            RowKind::DataRow => {
                let State::GroupOpen(group) = &mut self.state else {
                    debug!("dropping data row with no open group: {:?}", row.cells.first());
                    return;
                };
                if let Some(notification) = row.to_notification(self.base) {
                    group.notifications.push(notification);
                }
            }
        }
    }

    /// Seals the open group, if any, and returns groups in heading order.
    pub fn finish(mut self) -> Vec<NotificationGroup> {
        self.seal();
        self.sealed
    }

    fn open(&mut self, row: &RawRow) {
        self.seal();
        match row.heading_date() {
            Ok(date) => {
                self.state = State::GroupOpen(NotificationGroup {
                    published_date: date.published_date,
                    published_year: date.published_year,
                    notifications: Vec::new(),
                });
            }
            // rows below a bad heading are dropped, not credited to the previous date
            Err(err) => warn!("skipping heading row: {}", err),
        }
    }

    fn seal(&mut self) {
        if let State::GroupOpen(group) = std::mem::replace(&mut self.state, State::NoGroupOpen) {
            self.sealed.push(group);
        }
    }
}

pub fn group_notifications(rows: &[RawRow], base: Option<&Url>) -> Vec<NotificationGroup> {
    let mut grouper = Grouper::new(base);
    for row in rows {
        grouper.push(row);
    }
    grouper.finish()
}
