//! Date-grouped HTML report rendering.
//!
//! Grouping walks the ordered visit sequence once and opens a new group
//! whenever the local calendar date changes. Rendering is a pure
//! substitution of already-escaped values into a fixed template; nothing in
//! this module escapes text.

use tracing::warn;

use crate::escape::{self, Escaped};
use crate::extract::VisitRecord;
use crate::timefmt;

/// One visit, ready to render: text fields escaped, timestamp formatted.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub title: Escaped,
    pub url: Escaped,
    pub last_visit: String,
    pub raw_timestamp: i64,
    pub typed_count: i64,
    pub visit_count: i64,
}

/// A contiguous run of visits sharing one local calendar date.
#[derive(Debug, Clone)]
pub struct DateGroup {
    pub date: String,
    pub entries: Vec<ReportEntry>,
}

/// Bucket ordered visit records into date groups.
///
/// Records arrive most-recent-first, so groups come out in descending date
/// order. A date that recurs non-contiguously opens a fresh group rather
/// than merging backwards; the output order always mirrors the input
/// order.
pub fn group_visits(records: &[VisitRecord]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    for record in records {
        let Some(local) = timefmt::webkit_to_local(record.last_visit_time) else {
            warn!(
                "skipping visit {} with out-of-range timestamp {}",
                record.id, record.last_visit_time
            );
            continue;
        };
        let date = timefmt::date_key(&local);
        let entry = ReportEntry {
            title: escape::sanitize(&record.title),
            url: escape::sanitize(&record.url),
            last_visit: timefmt::display_time(&local),
            raw_timestamp: record.last_visit_time,
            typed_count: record.typed_count,
            visit_count: record.visit_count,
        };
        match groups.last_mut() {
            Some(group) if group.date == date => group.entries.push(entry),
            _ => groups.push(DateGroup {
                date,
                entries: vec![entry],
            }),
        }
    }
    groups
}

/// Substitute the grouped visits into the page template.
///
/// Every slot receives an [`Escaped`] value, a chrono-formatted date, or a
/// number; re-escaping here would corrupt the references produced by
/// [`escape::sanitize`].
pub fn render(groups: &[DateGroup]) -> String {
    let mut body = String::new();
    for group in groups {
        body.push_str(&format!(
            "    <div class=\"date-separator\">{}</div>\n",
            group.date
        ));
        for entry in &group.entries {
            body.push_str(&render_entry(entry));
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Bookmarks</title>
    <style>{css}</style>
</head>
<body>
    <h1>Bookmarks</h1>
{body}</body>
</html>
"#,
        css = inline_css(),
        body = body,
    )
}

fn render_entry(entry: &ReportEntry) -> String {
    format!(
        r#"    <div class="bookmark">
        <h3><a href="{url}" target="_blank">{title}</a></h3>
        <p class="url"><a href="{url}" target="_blank">{url}</a></p>
        <p class="time">Last Visit: {time} (Timestamp: {raw})</p>
        <p class="counts">Typed Count: {typed}, Visit Count: {visits}</p>
    </div>
"#,
        url = entry.url,
        title = entry.title,
        time = entry.last_visit,
        raw = entry.raw_timestamp,
        typed = entry.typed_count,
        visits = entry.visit_count,
    )
}

fn inline_css() -> &'static str {
    r#"
        body {
            font-family: Arial, sans-serif;
            background-color: #f4f4f4;
            color: #333;
            margin: 0;
            padding: 20px;
        }

        h1 {
            color: #333;
            margin-top: 0;
            padding-bottom: 20px;
            border-bottom: 1px solid #ccc;
        }

        .date-separator {
            font-size: 24px;
            margin: 20px 0;
            padding: 10px;
            background-color: #e0e0e0;
            border-radius: 5px;
            text-align: center;
        }

        .bookmark {
            margin-bottom: 20px;
            padding: 10px;
            background-color: #fff;
            border-radius: 5px;
            box-shadow: 0 0 5px rgba(0,0,0,0.1);
        }

        .bookmark h3 {
            font-size: 18px;
            margin-bottom: 5px;
            color: #333;
        }

        .bookmark p {
            font-size: 14px;
            margin-bottom: 10px;
            color: #666;
        }

        .bookmark .url a {
            font-size: 12px;
            color: #6b7280;
            text-decoration: none;
        }

        .bookmark .url a:hover {
            text-decoration: underline;
        }

        .bookmark .time, .bookmark .counts {
            font-size: 12px;
            color: #999999;
        }
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};

    fn webkit_micros(year: i32, month: u32, day: u32, hour: u32) -> i64 {
        let local: DateTime<Local> = Local
            .with_ymd_and_hms(year, month, day, hour, 0, 0)
            .single()
            .expect("unambiguous local time");
        timefmt::local_to_webkit(&local)
    }

    fn record(id: i64, title: &str, url: &str, last_visit_time: i64) -> VisitRecord {
        VisitRecord {
            id,
            title: title.to_string(),
            url: url.to_string(),
            last_visit_time,
            typed_count: 2,
            visit_count: 5,
        }
    }

    #[test]
    fn same_day_visits_share_one_group() {
        let records = vec![
            record(1, "Evening", "https://a.example", webkit_micros(2024, 1, 15, 20)),
            record(2, "Morning", "https://b.example", webkit_micros(2024, 1, 15, 9)),
        ];

        let groups = group_visits(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].date, "January 15 2024");
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[0].entries[0].title.as_str(), "Evening");
    }

    #[test]
    fn date_change_opens_a_new_group() {
        let records = vec![
            record(1, "Today", "https://a.example", webkit_micros(2024, 1, 15, 10)),
            record(2, "Yesterday", "https://b.example", webkit_micros(2024, 1, 14, 10)),
            record(3, "Last year", "https://c.example", webkit_micros(2023, 6, 1, 10)),
        ];

        let groups = group_visits(&records);
        let dates: Vec<&str> = groups.iter().map(|g| g.date.as_str()).collect();
        assert_eq!(dates, ["January 15 2024", "January 14 2024", "June 01 2023"]);
    }

    #[test]
    fn recurring_date_is_not_merged_backwards() {
        // Deliberately unsorted input: the walk re-emits a separator
        // whenever the date changes, even if it recurs.
        let records = vec![
            record(1, "A", "https://a.example", webkit_micros(2024, 1, 15, 10)),
            record(2, "B", "https://b.example", webkit_micros(2024, 1, 14, 10)),
            record(3, "C", "https://c.example", webkit_micros(2024, 1, 15, 9)),
        ];

        let groups = group_visits(&records);
        let dates: Vec<&str> = groups.iter().map(|g| g.date.as_str()).collect();
        assert_eq!(
            dates,
            ["January 15 2024", "January 14 2024", "January 15 2024"]
        );
    }

    #[test]
    fn out_of_range_timestamp_is_skipped() {
        let records = vec![
            record(1, "Good", "https://a.example", webkit_micros(2024, 1, 15, 10)),
            record(2, "Bad", "https://b.example", i64::MAX),
        ];

        let groups = group_visits(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries.len(), 1);
        assert_eq!(groups[0].entries[0].title.as_str(), "Good");
    }

    #[test]
    fn render_substitutes_without_re_escaping() {
        let records = vec![record(
            1,
            "<Test> & Co",
            "http://example.com/?a=1&b=2",
            webkit_micros(2024, 1, 15, 10),
        )];
        let html = render(&group_visits(&records));

        assert!(html.contains(">&lt;Test&gt; &amp; Co</a>"));
        assert!(html.contains("href=\"http://example.com/?a=1&amp;b=2\""));
        // the ampersands were escaped exactly once
        assert!(!html.contains("&amp;amp;"));
        assert!(!html.contains("&amp;lt;"));
    }

    #[test]
    fn render_includes_counts_and_timestamp() {
        let micros = webkit_micros(2024, 1, 15, 10);
        let records = vec![record(1, "Page", "https://a.example", micros)];
        let html = render(&group_visits(&records));

        assert!(html.contains("Typed Count: 2, Visit Count: 5"));
        assert!(html.contains(&format!("(Timestamp: {micros})")));
        assert!(html.contains("Last Visit: 2024-01-15 10:00:00"));
    }

    #[test]
    fn empty_input_renders_a_valid_page() {
        let html = render(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Bookmarks</h1>"));
        assert!(html.ends_with("</html>\n"));
        assert!(!html.contains("date-separator\">"));
        assert!(!html.contains("class=\"bookmark\""));
    }
}
