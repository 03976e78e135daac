//! Human-readable summaries of recurrence patterns, e.g.
//! `"Weekly on Mon and Wed, never ends"`.

use std::fmt;

use crate::recur::model::{RecurrenceEnd, RecurrencePattern, RecurrenceType};

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(month: u32) -> &'static str {
    let index = month.clamp(1, 12) - 1;
    usize::try_from(index)
        .ok()
        .and_then(|index| MONTH_NAMES.get(index))
        .copied()
        .unwrap_or("January")
}

fn days_of_week_text(weekdays: &[u8]) -> String {
    let mut names: Vec<&str> = weekdays
        .iter()
        .filter_map(|day| WEEKDAY_NAMES.get(usize::from(*day)).copied())
        .collect();

    match names.len() {
        0 => "no days selected".to_string(),
        1 => names.remove(0).to_string(),
        7 => "all days".to_string(),
        _ => {
            let last = names.pop().unwrap_or_default();
            format!("{} and {last}", names.join(", "))
        }
    }
}

fn write_every(f: &mut fmt::Formatter<'_>, interval: u32, single: &str, unit: &str) -> fmt::Result {
    if interval == 1 {
        f.write_str(single)
    } else {
        write!(f, "Every {interval} {unit}")
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RecurrenceType::Daily => write_every(f, self.interval, "Daily", "days")?,
            RecurrenceType::Weekly => {
                write_every(f, self.interval, "Weekly", "weeks")?;
                write!(f, " on {}", days_of_week_text(&self.selected_weekdays()))?;
            }
            RecurrenceType::Biweekly => {
                let weeks = u64::from(self.interval) * 2;
                write!(
                    f,
                    "Every {weeks} weeks on {}",
                    days_of_week_text(&self.selected_weekdays())
                )?;
            }
            RecurrenceType::Monthly => {
                write_every(f, self.interval, "Monthly", "months")?;
                if let Some(day) = self.day_of_month {
                    write!(f, " on day {day}")?;
                }
            }
            RecurrenceType::Yearly => {
                write_every(f, self.interval, "Yearly", "years")?;
                match (self.month_of_year, self.day_of_month) {
                    (None, None) => {}
                    (month, None) => write!(f, " in {}", month_name(month.unwrap_or(1)))?,
                    (month, Some(day)) => {
                        write!(f, " on {} {day}", month_name(month.unwrap_or(1)))?;
                    }
                }
            }
        }

        match self.end {
            RecurrenceEnd::Never => f.write_str(", never ends"),
            RecurrenceEnd::After { occurrences: 1 } => f.write_str(", once"),
            RecurrenceEnd::After { occurrences } => write!(f, ", for {occurrences} occurrences"),
            RecurrenceEnd::On { date } => write!(f, ", until {}", date.format("%B %-d, %Y")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_daily_summaries() {
        assert_eq!(
            RecurrencePattern::new(RecurrenceType::Daily, 1).to_string(),
            "Daily, never ends"
        );
        assert_eq!(
            RecurrencePattern::new(RecurrenceType::Daily, 3)
                .with_end(RecurrenceEnd::After { occurrences: 5 })
                .to_string(),
            "Every 3 days, for 5 occurrences"
        );
    }

    #[test]
    fn test_weekly_day_lists() {
        let base = RecurrencePattern::new(RecurrenceType::Weekly, 1);

        assert_eq!(
            base.clone().with_days_of_week(&[3, 1]).to_string(),
            "Weekly on Mon and Wed, never ends"
        );
        assert_eq!(
            base.clone().with_days_of_week(&[5, 1, 3]).to_string(),
            "Weekly on Mon, Wed and Fri, never ends"
        );
        assert_eq!(
            base.clone()
                .with_days_of_week(&[0, 1, 2, 3, 4, 5, 6])
                .to_string(),
            "Weekly on all days, never ends"
        );
        assert_eq!(base.to_string(), "Weekly on no days selected, never ends");
    }

    #[test]
    fn test_biweekly_scales_with_interval() {
        let pattern = RecurrencePattern::new(RecurrenceType::Biweekly, 2).with_days_of_week(&[4]);

        assert_eq!(pattern.to_string(), "Every 4 weeks on Thu, never ends");
    }

    #[test]
    fn test_monthly_until() {
        let pattern = RecurrencePattern::new(RecurrenceType::Monthly, 1)
            .with_day_of_month(31)
            .with_end(RecurrenceEnd::On {
                date: NaiveDate::from_ymd_opt(2025, 1, 31).expect("valid date"),
            });

        assert_eq!(pattern.to_string(), "Monthly on day 31, until January 31, 2025");
    }

    #[test]
    fn test_yearly_summaries() {
        let pattern = RecurrencePattern::new(RecurrenceType::Yearly, 1)
            .with_month_of_year(3)
            .with_day_of_month(15)
            .with_end(RecurrenceEnd::After { occurrences: 1 });
        assert_eq!(pattern.to_string(), "Yearly on March 15, once");

        let every_two = RecurrencePattern::new(RecurrenceType::Yearly, 2).with_month_of_year(9);
        assert_eq!(every_two.to_string(), "Every 2 years in September, never ends");
    }
}
