use chrono::NaiveDate;

/// Last calendar day of `year`/`month`, or `None` when the month is not 1..=12
/// or the date falls outside chrono's range.
pub fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }

    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Every month-end of the given years, year by year in the order supplied,
/// January through December within each year.
pub fn month_end_dates(years: &[i32]) -> Vec<NaiveDate> {
    years
        .iter()
        .flat_map(|&year| (1..=12).filter_map(move |month| month_end(year, month)))
        .collect()
}
