use crate::error::{PrismError, Result};
use crate::utils::constants::*;
use crate::utils::dates::{check_day, check_month, check_year};
use serde::{Deserialize, Serialize};

/// The time period modes offered by the PRISM Explorer form.
///
/// Each variant maps to one radio button plus the dropdowns that radio
/// reveals. Thirty-year normals take no date range at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePeriod {
    /// 30-year monthly normals (1991-2020 baseline)
    MonthlyNormals,
    /// 30-year daily normals (1991-2020 baseline)
    DailyNormals,
    Annual {
        start_year: i32,
        end_year: i32,
    },
    /// One calendar month across a span of years
    SingleMonth {
        month: u32,
        start_year: i32,
        end_year: i32,
    },
    Monthly {
        start_month: u32,
        start_year: i32,
        end_month: u32,
        end_year: i32,
    },
    Daily {
        start_day: u32,
        start_month: u32,
        start_year: i32,
        end_day: u32,
        end_month: u32,
        end_year: i32,
    },
}

impl TimePeriod {
    /// The radio button that switches the form into this mode.
    pub fn radio_element(&self) -> &'static str {
        match self {
            TimePeriod::MonthlyNormals => TPER_MONTHLY_NORMALS,
            TimePeriod::DailyNormals => TPER_DAILY_NORMALS,
            TimePeriod::Annual { .. } => TPER_YEARLY,
            TimePeriod::SingleMonth { .. } => TPER_ONEMONTH,
            TimePeriod::Monthly { .. } => TPER_MONTHLY,
            TimePeriod::Daily { .. } => TPER_DAILY,
        }
    }

    /// Dropdown selections for this mode as (element id, value) pairs, in
    /// the order they are applied: years first, then months, then days.
    pub fn dropdown_selections(&self) -> Vec<(&'static str, String)> {
        match *self {
            TimePeriod::MonthlyNormals | TimePeriod::DailyNormals => Vec::new(),
            TimePeriod::Annual {
                start_year,
                end_year,
            } => vec![
                (TPER_YEARLY_START_YEAR, start_year.to_string()),
                (TPER_YEARLY_END_YEAR, end_year.to_string()),
            ],
            TimePeriod::SingleMonth {
                month,
                start_year,
                end_year,
            } => vec![
                (TPER_ONEMONTH_START_YEAR, start_year.to_string()),
                (TPER_ONEMONTH_END_YEAR, end_year.to_string()),
                (TPER_ONEMONTH_MONTH, month.to_string()),
            ],
            TimePeriod::Monthly {
                start_month,
                start_year,
                end_month,
                end_year,
            } => vec![
                (TPER_MONTHLY_START_YEAR, start_year.to_string()),
                (TPER_MONTHLY_END_YEAR, end_year.to_string()),
                (TPER_MONTHLY_START_MONTH, start_month.to_string()),
                (TPER_MONTHLY_END_MONTH, end_month.to_string()),
            ],
            TimePeriod::Daily {
                start_day,
                start_month,
                start_year,
                end_day,
                end_month,
                end_year,
            } => vec![
                (TPER_DAILY_START_YEAR, start_year.to_string()),
                (TPER_DAILY_END_YEAR, end_year.to_string()),
                (TPER_DAILY_START_MONTH, start_month.to_string()),
                (TPER_DAILY_END_MONTH, end_month.to_string()),
                (TPER_DAILY_START_DAY, start_day.to_string()),
                (TPER_DAILY_END_DAY, end_day.to_string()),
            ],
        }
    }

    /// Bounds-check every date component and the start/end ordering at the
    /// granularity this mode exposes.
    pub fn validate(&self) -> Result<()> {
        match *self {
            TimePeriod::MonthlyNormals | TimePeriod::DailyNormals => Ok(()),
            TimePeriod::Annual {
                start_year,
                end_year,
            } => {
                check_year(start_year)?;
                check_year(end_year)?;
                check_order(start_year <= end_year, "start year after end year")
            }
            TimePeriod::SingleMonth {
                month,
                start_year,
                end_year,
            } => {
                check_month(month)?;
                check_year(start_year)?;
                check_year(end_year)?;
                check_order(start_year <= end_year, "start year after end year")
            }
            TimePeriod::Monthly {
                start_month,
                start_year,
                end_month,
                end_year,
            } => {
                check_month(start_month)?;
                check_month(end_month)?;
                check_year(start_year)?;
                check_year(end_year)?;
                check_order(
                    (start_year, start_month) <= (end_year, end_month),
                    "start month after end month",
                )
            }
            TimePeriod::Daily {
                start_day,
                start_month,
                start_year,
                end_day,
                end_month,
                end_year,
            } => {
                check_day(start_day, start_month, start_year)?;
                check_day(end_day, end_month, end_year)?;
                check_year(start_year)?;
                check_year(end_year)?;
                check_order(
                    (start_year, start_month, start_day) <= (end_year, end_month, end_day),
                    "start date after end date",
                )
            }
        }
    }
}

fn check_order(in_order: bool, message: &str) -> Result<()> {
    if in_order {
        Ok(())
    } else {
        Err(PrismError::InvalidDateRange(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normals_need_no_dropdowns() {
        assert!(TimePeriod::MonthlyNormals.dropdown_selections().is_empty());
        assert!(TimePeriod::DailyNormals.validate().is_ok());
        assert_eq!(
            TimePeriod::DailyNormals.radio_element(),
            TPER_DAILY_NORMALS
        );
    }

    #[test]
    fn test_monthly_selections_in_order() {
        let period = TimePeriod::Monthly {
            start_month: 1,
            start_year: 2020,
            end_month: 6,
            end_year: 2025,
        };
        assert!(period.validate().is_ok());
        assert_eq!(period.radio_element(), TPER_MONTHLY);
        assert_eq!(
            period.dropdown_selections(),
            vec![
                (TPER_MONTHLY_START_YEAR, "2020".to_string()),
                (TPER_MONTHLY_END_YEAR, "2025".to_string()),
                (TPER_MONTHLY_START_MONTH, "1".to_string()),
                (TPER_MONTHLY_END_MONTH, "6".to_string()),
            ]
        );
    }

    #[test]
    fn test_annual_range_order() {
        let period = TimePeriod::Annual {
            start_year: 2022,
            end_year: 2020,
        };
        assert!(matches!(
            period.validate(),
            Err(PrismError::InvalidDateRange(_))
        ));
    }

    #[test]
    fn test_monthly_order_within_same_year() {
        let period = TimePeriod::Monthly {
            start_month: 7,
            start_year: 2020,
            end_month: 3,
            end_year: 2020,
        };
        assert!(period.validate().is_err());

        // Same months across different years is fine
        let period = TimePeriod::Monthly {
            start_month: 7,
            start_year: 2019,
            end_month: 3,
            end_year: 2020,
        };
        assert!(period.validate().is_ok());
    }

    #[test]
    fn test_daily_leap_day() {
        let ok = TimePeriod::Daily {
            start_day: 29,
            start_month: 2,
            start_year: 2020,
            end_day: 1,
            end_month: 3,
            end_year: 2020,
        };
        assert!(ok.validate().is_ok());

        let bad = TimePeriod::Daily {
            start_day: 29,
            start_month: 2,
            start_year: 2021,
            end_day: 1,
            end_month: 3,
            end_year: 2021,
        };
        assert!(matches!(bad.validate(), Err(PrismError::InvalidDate(_))));
    }

    #[test]
    fn test_year_out_of_prism_bounds() {
        let period = TimePeriod::Annual {
            start_year: 1894,
            end_year: 1900,
        };
        assert!(matches!(period.validate(), Err(PrismError::InvalidDate(_))));
    }
}
