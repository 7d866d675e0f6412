//! Date Parsing & Bounds
//!
//! Single parse point for the dd-mm-yyyy wire format, plus derivation of the
//! calendar window the timeline displays. Unparsable dates are skipped with a
//! warning, never fatal.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::model::{TimeScale, TimelineItem};

const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a dd-mm-yyyy date string. Every date string in the engine goes
/// through here so the skip-and-warn policy lives in one place.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}

/// Format a date back into the dd-mm-yyyy wire format for callbacks.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The `[start, end]` calendar window the timeline displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Jan 1 .. Dec 31 of the current year - the default window when there is
/// nothing to derive bounds from.
pub fn current_year_bounds() -> DateBounds {
    let year = Local::now().date_naive().year();
    DateBounds {
        start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default(),
        end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or_default(),
    }
}

/// Derive display bounds from the item set.
///
/// Explicit start/end override the derived values and get no padding.
/// Derived min/max are padded symmetrically per scale. Items with an
/// unparsable date are excluded from the scan.
pub fn compute_bounds(
    items: &[TimelineItem],
    explicit_start: Option<NaiveDate>,
    explicit_end: Option<NaiveDate>,
    scale: TimeScale,
) -> DateBounds {
    let mut min: Option<NaiveDate> = None;
    let mut max: Option<NaiveDate> = None;

    for item in items {
        let (start, end) = match (parse_date(&item.start_date), parse_date(&item.end_date)) {
            (Ok(s), Ok(e)) => (s, e),
            _ => {
                log::warn!(
                    "item {} has an unparsable date ({} / {}), excluded from bounds",
                    item.id,
                    item.start_date,
                    item.end_date
                );
                continue;
            }
        };
        min = Some(min.map_or(start, |m| m.min(start)));
        max = Some(max.map_or(end, |m| m.max(end)));
    }

    let padding = Duration::days(scale.padding_days());
    let (derived_start, derived_end) = match (min, max) {
        (Some(lo), Some(hi)) => (lo - padding, hi + padding),
        _ => {
            let year = current_year_bounds();
            (year.start, year.end)
        }
    };

    DateBounds {
        start: explicit_start.unwrap_or(derived_start),
        end: explicit_end.unwrap_or(derived_end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemKind;

    fn make_item(id: &str, start: &str, end: &str) -> TimelineItem {
        TimelineItem {
            id: id.to_string(),
            kind: ItemKind::Task,
            title: format!("Item {}", id),
            start_date: start.to_string(),
            end_date: end.to_string(),
            parent_id: None,
            level: 0,
        }
    }

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_roundtrip() {
        let d = parse_date("05-03-2025").unwrap();
        assert_eq!(d, date(5, 3, 2025));
        assert_eq!(format_date(d), "05-03-2025");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("2025-03-05").is_err());
        assert!(parse_date("not a date").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_empty_items_default_to_current_year() {
        let bounds = compute_bounds(&[], None, None, TimeScale::Week);
        let year = Local::now().date_naive().year();
        assert_eq!(bounds.start, date(1, 1, year));
        assert_eq!(bounds.end, date(31, 12, year));
    }

    #[test]
    fn test_derived_bounds_are_padded_per_scale() {
        let items = vec![make_item("a", "10-06-2025", "20-06-2025")];
        let day = compute_bounds(&items, None, None, TimeScale::Day);
        assert_eq!(day.start, date(3, 6, 2025));
        assert_eq!(day.end, date(27, 6, 2025));

        let week = compute_bounds(&items, None, None, TimeScale::Week);
        assert_eq!(week.start, date(13, 5, 2025));
        assert_eq!(week.end, date(18, 7, 2025));

        let month = compute_bounds(&items, None, None, TimeScale::Month);
        assert_eq!(month.start, date(11, 5, 2025));
        assert_eq!(month.end, date(20, 7, 2025));
    }

    #[test]
    fn test_explicit_bounds_override_without_padding() {
        let items = vec![make_item("a", "10-06-2025", "20-06-2025")];
        let bounds = compute_bounds(
            &items,
            Some(date(1, 6, 2025)),
            Some(date(30, 6, 2025)),
            TimeScale::Day,
        );
        assert_eq!(bounds.start, date(1, 6, 2025));
        assert_eq!(bounds.end, date(30, 6, 2025));
    }

    #[test]
    fn test_explicit_start_only_pads_derived_end() {
        let items = vec![make_item("a", "10-06-2025", "20-06-2025")];
        let bounds = compute_bounds(&items, Some(date(1, 6, 2025)), None, TimeScale::Day);
        assert_eq!(bounds.start, date(1, 6, 2025));
        assert_eq!(bounds.end, date(27, 6, 2025));
    }

    #[test]
    fn test_unparsable_items_are_skipped() {
        let items = vec![
            make_item("good", "10-06-2025", "20-06-2025"),
            make_item("bad", "junk", "20-12-2025"),
        ];
        let bounds = compute_bounds(&items, None, None, TimeScale::Day);
        // "bad" must not widen the scan
        assert_eq!(bounds.end, date(27, 6, 2025));
    }

    #[test]
    fn test_all_unparsable_falls_back_to_current_year() {
        let items = vec![make_item("bad", "junk", "more junk")];
        let bounds = compute_bounds(&items, None, None, TimeScale::Month);
        let year = Local::now().date_naive().year();
        assert_eq!(bounds.start, date(1, 1, year));
        assert_eq!(bounds.end, date(31, 12, year));
    }
}
