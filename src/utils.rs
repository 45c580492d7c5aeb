use chrono::{Datelike as _, Months, NaiveDate, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::consts::MONEY_SCALE;

/// First and last calendar day of `month` in `year`, `None` for an invalid month
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;

    Some((first, last))
}

/// Whether `date` is a working day for someone working `working_days_per_week` days,
/// counting from Monday
pub fn is_working_day(date: NaiveDate, working_days_per_week: u8) -> bool {
    match working_days_per_week {
        7 => true,
        6 => date.weekday() != Weekday::Sun,
        5 => !matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        n => date.weekday().number_from_monday() <= n as u32,
    }
}

/// Rounds half away from zero to cents
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
