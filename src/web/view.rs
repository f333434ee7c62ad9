use std::fmt::Write;

use chrono::{DateTime, Local};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::notification::{Notification, NotificationGroup};

pub struct ViewModel<'a> {
    pub data: &'a [NotificationGroup],
    pub course: Option<&'a str>,
    pub course_map: &'a [(&'a str, &'a str)],
    pub fetched_at: DateTime<Local>,
}

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table{border-collapse:collapse;width:100%}\
td,th{border:1px solid #ccc;padding:.4em;text-align:left}\
tr.tableHeading td{background:#234;color:#fff;font-weight:bold}\
nav a{margin-right:1em}nav a.active{font-weight:bold}";

pub fn render(view: &ViewModel) -> String {
    let mut html = String::with_capacity(4096);
    let title = match view.course.and_then(|c| display_name(view.course_map, c)) {
        Some(name) => format!("{} Exam Notifications", name),
        None => "Exam Notifications".to_string(),
    };

    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title>\
         <style>{STYLE}</style></head><body><h1>{title}</h1>",
        title = encode_text(&title),
    );

    html.push_str("<nav>");
    push_nav_link(&mut html, "/", "All", view.course.is_none());
    for (code, name) in view.course_map {
        let active = view.course.is_some_and(|c| c.eq_ignore_ascii_case(code));
        push_nav_link(&mut html, &format!("/course/{}", code), name, active);
    }
    html.push_str("</nav>");

    if view.data.is_empty() {
        html.push_str("<p class=\"empty\">No notifications found.</p>");
    } else {
        html.push_str(
            "<table><thead><tr><th>Notification</th><th>Semester</th><th>PDF</th></tr></thead><tbody>",
        );
        for group in view.data {
            push_group(&mut html, group);
        }
        html.push_str("</tbody></table>");
    }

    let _ = write!(
        html,
        "<footer><small>Fetched {}</small></footer></body></html>",
        view.fetched_at.format("%d %b %Y %H:%M")
    );
    html
}

fn display_name<'a>(course_map: &'a [(&'a str, &'a str)], course: &str) -> Option<&'a str> {
    course_map
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(course))
        .map(|(_, name)| *name)
}

fn push_nav_link(html: &mut String, href: &str, label: &str, active: bool) {
    let _ = write!(
        html,
        "<a href=\"{}\"{}>{}</a>",
        encode_double_quoted_attribute(href),
        if active { " class=\"active\"" } else { "" },
        encode_text(label)
    );
}

fn push_group(html: &mut String, group: &NotificationGroup) {
    let _ = write!(
        html,
        "<tr class=\"tableHeading\"><td colspan=\"3\">Published on {}{}</td></tr>",
        encode_text(&group.published_date),
        encode_text(&group.published_year)
    );
    for notification in &group.notifications {
        push_notification(html, notification);
    }
}

fn push_notification(html: &mut String, notification: &Notification) {
    let semester = notification
        .semester_num
        .map(|n| n.to_string())
        .unwrap_or_default();
    let link = match &notification.pdf_link {
        Some(href) => format!(
            "<a href=\"{}\" target=\"_blank\">View</a>",
            encode_double_quoted_attribute(href)
        ),
        None => String::new(),
    };
    let _ = write!(
        html,
        "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
        encode_text(&notification.description),
        semester,
        link
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::course::COURSE_MAP;

    fn groups() -> Vec<NotificationGroup> {
        vec![NotificationGroup {
            published_date: "12-01-2024".into(),
            published_year: "/24".into(),
            notifications: vec![
                Notification {
                    description: "Third Semester <B.Tech> & more".into(),
                    semester_num: Some(3),
                    pdf_link: Some("https://exams.example.edu/a.pdf?x=1&y=\"2\"".into()),
                },
                Notification {
                    description: "General".into(),
                    semester_num: None,
                    pdf_link: None,
                },
            ],
        }]
    }

    #[test]
    fn renders_groups_and_escapes() {
        let data = groups();
        let html = render(&ViewModel {
            data: &data,
            course: None,
            course_map: &COURSE_MAP,
            fetched_at: Local::now(),
        });
        assert!(html.contains("Published on 12-01-2024/24"));
        assert!(html.contains("Third Semester &lt;B.Tech&gt; &amp; more"));
        assert!(html.contains("a.pdf?x=1&amp;y=&quot;2&quot;"));
        assert!(html.contains("<td>General</td><td></td><td></td>"));
        assert!(html.contains("<a href=\"/\" class=\"active\">All</a>"));
        assert!(html.contains("<a href=\"/course/mtech\">M.Tech</a>"));
    }

    #[test]
    fn course_view_marks_active_course() {
        let html = render(&ViewModel {
            data: &[],
            course: Some("BTECH"),
            course_map: &COURSE_MAP,
            fetched_at: Local::now(),
        });
        assert!(html.contains("<title>B.Tech Exam Notifications</title>"));
        assert!(html.contains("<a href=\"/course/btech\" class=\"active\">B.Tech</a>"));
        assert!(html.contains("No notifications found."));
    }

    #[test]
    fn unknown_course_uses_plain_title() {
        let html = render(&ViewModel {
            data: &[],
            course: Some("phd"),
            course_map: &COURSE_MAP,
            fetched_at: Local::now(),
        });
        assert!(html.contains("<title>Exam Notifications</title>"));
        assert!(!html.contains("class=\"active\""));
    }
}
