use scraper::{ElementRef, Html, Selector};

use crate::error::portal::PortalError;
use crate::model::notification::{Cell, RawRow};

fn selector(css: &str) -> Result<Selector, PortalError> {
    Selector::parse(css).map_err(|err| PortalError::new(&format!("bad selector `{}`: {}", css, err)))
}

/// Reads every `<tr>` of the page, in document order.
pub fn parse_rows(html: &str) -> Result<Vec<RawRow>, PortalError> {
    let document = Html::parse_document(html);
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;
    let link_selector = selector("a[href]")?;

    let rows = document
        .select(&row_selector)
        .map(|tr| RawRow {
            classes: tr.value().classes().map(str::to_string).collect(),
            cells: tr
                .select(&cell_selector)
                .map(|td| parse_cell(td, &link_selector))
                .collect(),
        })
        .collect();

    Ok(rows)
}

fn parse_cell(td: ElementRef, link_selector: &Selector) -> Cell {
    let text = td
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("");
    let raw_text = td.text().collect::<String>();
    let link = td
        .select(link_selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|href| href.trim().to_string());

    Cell { text, raw_text, link }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body><table>
            <tr class="tableHeading odd"><td>Published on 12-01-2024Fri..</td></tr>
            <tr>
                <td>1</td>
                <td>  Third Semester
                    <b>B.Tech</b> Results </td>
                <td><a href="/pdf/r.pdf">Download</a></td>
            </tr>
            <tr><td>General notice</td></tr>
        </table></body></html>
    "#;

    #[test]
    fn reads_rows_in_order() {
        let rows = parse_rows(PAGE).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].classes.iter().any(|c| c == "tableHeading"));
        assert_eq!(rows[0].classes.len(), 2);
        assert_eq!(rows[0].cells[0].text, "Published on 12-01-2024Fri..");
        assert_eq!(rows[1].cells.len(), 3);
        assert_eq!(rows[2].cells.len(), 1);
    }

    #[test]
    fn cell_text_joins_trimmed_fragments() {
        let rows = parse_rows(PAGE).unwrap();
        let cell = &rows[1].cells[1];
        assert_eq!(cell.text, "Third SemesterB.TechResults");
        assert!(cell.raw_text.contains("B.Tech"));
        assert_eq!(cell.link, None);
        assert_eq!(rows[1].cells[2].link.as_deref(), Some("/pdf/r.pdf"));
    }

    #[test]
    fn link_skips_anchors_without_href() {
        let rows = parse_rows(
            r#"<table><tr><td>1</td><td>Seventh Semester</td><td><a name="top">icon</a><a href="x.pdf">y</a></td></tr></table>"#,
        )
        .unwrap();
        assert_eq!(rows[0].cells[2].link.as_deref(), Some("x.pdf"));
    }

    #[test]
    fn page_without_table_has_no_rows() {
        assert!(parse_rows("<p>maintenance</p>").unwrap().is_empty());
    }
}
