//! Plain-text month view used by the CLI.

use crate::calendar::{weeks, CalendarCell, Weekday, DAYS_PER_WEEK};
use crate::names::{ethiopian_day_name_in, ethiopian_month_name_in, Locale};

const CELL_WIDTH: usize = 4;

/// Short column header for a weekday: two letters in English, the first
/// syllable in Amharic.
fn weekday_header(locale: Locale, weekday: Weekday) -> String {
    let name = ethiopian_day_name_in(locale, weekday.index());
    let len = match locale {
        Locale::English => 2,
        Locale::Amharic => 1,
    };
    name.chars().take(len).collect()
}

/// Render a grid as a title line, a weekday header and one line per week.
///
/// Padding cells are left blank. Lines carry no trailing whitespace and the
/// output has no trailing newline.
pub fn render_month(
    year: i32,
    month: u8,
    cells: &[CalendarCell],
    locale: Locale,
    week_start: Weekday,
) -> String {
    let mut lines = Vec::new();

    let mut title = format!("{} {}", ethiopian_month_name_in(locale, month), year);
    let current: Vec<_> = cells.iter().filter(|c| c.is_current_month).collect();
    if let (Some(first), Some(last)) = (current.first(), current.last()) {
        title.push_str(&format!(
            " ({} .. {})",
            first.gregorian_date, last.gregorian_date
        ));
    }
    lines.push(title);

    let header: String = (0..DAYS_PER_WEEK as u8)
        .map(|i| {
            let weekday = Weekday::from_index(week_start.index() + i);
            format!("{:>width$}", weekday_header(locale, weekday), width = CELL_WIDTH)
        })
        .collect();
    lines.push(header);

    for week in weeks(cells) {
        let row: String = week
            .iter()
            .map(|cell| {
                if cell.is_current_month {
                    format!("{:>width$}", cell.ethiopian_day, width = CELL_WIDTH)
                } else {
                    " ".repeat(CELL_WIDTH)
                }
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    lines.join("\n")
}
