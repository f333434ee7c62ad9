use url::Url;

use crate::core::semester::extract_semester_num;
use crate::error::heading::HeadingError;
use crate::model::notification::{Notification, RawRow};

/// Characters cut from the end of the date token in a heading.
const DATE_SUFFIX_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Heading,
    DataRow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingDate {
    pub published_date: String,
    pub published_year: String,
}

impl RawRow {
    pub fn kind(&self) -> RowKind {
        if self.is_heading() {
            RowKind::Heading
        } else {
            RowKind::DataRow
        }
    }

    pub fn heading_date(&self) -> Result<HeadingDate, HeadingError> {
        let cell = self.cells.first().ok_or(HeadingError::NoCells)?;
        parse_heading_date(&cell.text)
    }

    /// Builds the notification carried by a data row.
    ///
    /// A single cell is the description. With more cells the description is
    /// the second one and the link comes from the third; rows without cells
    /// carry nothing.
    pub fn to_notification(&self, base: Option<&Url>) -> Option<Notification> {
        let (description, link) = match self.cells.as_slice() {
            [] => return None,
            [only] => (&only.text, None),
            [_, second, rest @ ..] => (&second.text, rest.first().and_then(|c| c.link.as_deref())),
        };

        Some(Notification {
            description: description.clone(),
            semester_num: extract_semester_num(description),
            pdf_link: link.map(|href| resolve_link(href, base)),
        })
    }
}

/// Pulls the publication date out of a heading's text.
///
/// The portal prints headings as three or more words with the date in the
/// third, followed by a fixed five character tail. Parsing is positional and
/// tied to that markup.
pub fn parse_heading_date(text: &str) -> Result<HeadingDate, HeadingError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let Some(token) = tokens.get(2) else {
        return Err(HeadingError::Malformed {
            text: text.to_string(),
            found: tokens.len(),
        });
    };

    let keep = token.chars().count().saturating_sub(DATE_SUFFIX_LEN);
    let published_date: String = token.chars().take(keep).collect();
    let year: String = published_date
        .chars()
        .skip(published_date.chars().count().saturating_sub(2))
        .collect();

    Ok(HeadingDate {
        published_year: format!("/{}", year),
        published_date,
    })
}

fn resolve_link(href: &str, base: Option<&Url>) -> String {
    match base.map(|b| b.join(href)) {
        Some(Ok(url)) => url.to_string(),
        _ => href.to_string(),
    }
}
