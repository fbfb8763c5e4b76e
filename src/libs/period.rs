//! Pay period calculation.
//!
//! Periods are computed from a reference date ("today") and an integer
//! offset in units of the period type: `0` is the current period, negative
//! offsets go back in time and positive ones forward. All dates are plain
//! calendar dates, so there is no timezone conversion to shift a period by
//! a day near midnight.
//!
//! - **Weekly**: Monday to Sunday.
//! - **Biweekly**: two weeks starting on a Monday. Weeks are numbered from
//!   the UNIX epoch; an odd-numbered week is the second half of its
//!   biweek.
//! - **Monthly**: first to last day of the calendar month.
//!
//! ## Examples
//!
//! ```rust
//! use paydesk::libs::period::{PayPeriod, PeriodType};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
//! let period = PayPeriod::calculate(PeriodType::Monthly, 0, today).unwrap();
//! assert_eq!(period.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
//! assert_eq!(period.working_days(), 21);
//! ```

use crate::libs::error::PayrollError;
use crate::libs::formatter::format_local_date;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
    /// Dates entered by hand.
    Custom,
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PeriodType::Weekly => "weekly",
            PeriodType::Biweekly => "biweekly",
            PeriodType::Monthly => "monthly",
            PeriodType::Custom => "custom",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PeriodType {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(PeriodType::Weekly),
            "biweekly" => Ok(PeriodType::Biweekly),
            "monthly" => Ok(PeriodType::Monthly),
            "custom" => Ok(PeriodType::Custom),
            _ => Err(PayrollError::UnknownPeriodType(s.to_string())),
        }
    }
}

/// An inclusive date range a payslip covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(rename = "type")]
    pub period_type: PeriodType,
}

impl PayPeriod {
    /// Computes the period `offset` periods away from the one containing `today`.
    ///
    /// # Errors
    ///
    /// Returns `CustomPeriodHasNoRange` for `PeriodType::Custom`, and
    /// `InvalidDate` when the offset leaves chrono's supported date range.
    pub fn calculate(period_type: PeriodType, offset: i64, today: NaiveDate) -> Result<Self, PayrollError> {
        let (start, end) = match period_type {
            PeriodType::Weekly => {
                let start = shift_days(week_start(today), offset.saturating_mul(7))?;
                (start, shift_days(start, 6)?)
            }
            PeriodType::Biweekly => {
                let monday = week_start(today);
                let first_week = if is_second_biweek_week(monday) { shift_days(monday, -7)? } else { monday };
                let start = shift_days(first_week, offset.saturating_mul(14))?;
                (start, shift_days(start, 13)?)
            }
            PeriodType::Monthly => month_bounds(today, offset)?,
            PeriodType::Custom => return Err(PayrollError::CustomPeriodHasNoRange),
        };

        Ok(Self { start, end, period_type })
    }

    /// Same as [`PayPeriod::calculate`] relative to the local current date.
    pub fn current(period_type: PeriodType, offset: i64) -> Result<Self, PayrollError> {
        Self::calculate(period_type, offset, Local::now().date_naive())
    }

    /// A hand-entered range.
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            period_type: PeriodType::Custom,
        }
    }

    pub fn working_days(&self) -> i64 {
        working_days(self.start, self.end)
    }

    pub fn start_str(&self) -> String {
        format_local_date(&self.start)
    }

    pub fn end_str(&self) -> String {
        format_local_date(&self.end)
    }

    /// Human-readable name of the period, e.g. `Week of Mar 4` or `March 2024`.
    pub fn label(&self) -> String {
        let cross_year = self.start.year() != self.end.year();
        let short = |date: &NaiveDate| {
            if cross_year {
                date.format("%b %-d, %Y").to_string()
            } else {
                date.format("%b %-d").to_string()
            }
        };

        match self.period_type {
            PeriodType::Weekly => format!("Week of {}", short(&self.start)),
            PeriodType::Biweekly => format!("{} - {}", short(&self.start), short(&self.end)),
            PeriodType::Monthly => self.start.format("%B %Y").to_string(),
            PeriodType::Custom => "Custom Range".to_string(),
        }
    }
}

/// Label of the period `offset` away from today's, or `Custom Range`.
pub fn period_label(period_type: PeriodType, offset: i64, today: NaiveDate) -> Result<String, PayrollError> {
    match period_type {
        PeriodType::Custom => Ok("Custom Range".to_string()),
        _ => Ok(PayPeriod::calculate(period_type, offset, today)?.label()),
    }
}

/// Number of weekdays (Monday to Friday) in `[start, end]`.
pub fn working_days(start: NaiveDate, end: NaiveDate) -> i64 {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as i64
}

/// Monday of the week containing `date`; Sunday belongs to the week before.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let day_of_week = date.weekday().num_days_from_sunday() as i64;
    let days_to_monday = if day_of_week == 0 { -6 } else { 1 - day_of_week };
    date + Duration::days(days_to_monday)
}

fn is_second_biweek_week(monday: NaiveDate) -> bool {
    // NaiveDate::default() is 1970-01-01.
    let days_since_epoch = (monday - NaiveDate::default()).num_days();
    days_since_epoch.div_euclid(7).rem_euclid(2) == 1
}

fn month_bounds(today: NaiveDate, offset: i64) -> Result<(NaiveDate, NaiveDate), PayrollError> {
    let month_index = today.year() as i64 * 12 + today.month0() as i64 + offset;
    let invalid = || PayrollError::InvalidDate(format!("{} months from {}", offset, today));

    let year = i32::try_from(month_index.div_euclid(12)).map_err(|_| invalid())?;
    let month = month_index.rem_euclid(12) as u32 + 1;

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let end = start
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(invalid)?;
    Ok((start, end))
}

fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate, PayrollError> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| PayrollError::InvalidDate(format!("{} days from {}", days, date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sunday_belongs_to_previous_week() {
        assert_eq!(week_start(date(2024, 3, 10)), date(2024, 3, 4));
        assert_eq!(week_start(date(2024, 3, 4)), date(2024, 3, 4));
        assert_eq!(week_start(date(2024, 3, 9)), date(2024, 3, 4));
    }

    #[test]
    fn biweek_parity_follows_epoch_week_index() {
        // 1970-01-05 is epoch day 4, week index 0.
        assert!(!is_second_biweek_week(date(1970, 1, 5)));
        // 1970-01-12 is epoch day 11, week index 1.
        assert!(is_second_biweek_week(date(1970, 1, 12)));
    }

    #[test]
    fn working_days_of_empty_range() {
        assert_eq!(working_days(date(2024, 3, 5), date(2024, 3, 4)), 0);
    }

    #[test]
    fn custom_has_no_range() {
        assert_eq!(
            PayPeriod::calculate(PeriodType::Custom, 0, date(2024, 3, 1)),
            Err(PayrollError::CustomPeriodHasNoRange)
        );
    }
}
