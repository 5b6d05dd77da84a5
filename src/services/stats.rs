//! Registration statistics over a trailing lookback window.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};

use crate::errors::AppError;
use crate::models::stats::RegistrationStat;
use crate::repositories::registrations::RegistrationAggregator;

/// Computes daily registration counts. The aggregator is injected at
/// startup so tests can substitute an in-memory store.
#[derive(Clone)]
pub struct StatsService {
    aggregator: Arc<dyn RegistrationAggregator>,
}

impl StatsService {
    pub fn new(aggregator: Arc<dyn RegistrationAggregator>) -> Self {
        Self { aggregator }
    }

    /// Per-day registration counts for the last `days` calendar days,
    /// today included. The list comes back ascending by date with empty
    /// days absent.
    pub async fn registrations_by_date(&self, days: i64) -> Result<Vec<RegistrationStat>, AppError> {
        let start_date = lookback_start(Local::now().date_naive(), days);
        let rows = self.aggregator.count_by_date(start_date).await?;

        rows.into_iter()
            .map(|row| {
                let count = u64::try_from(row.count).map_err(|_| {
                    AppError::Internal(format!(
                        "negative registration count {} for {}",
                        row.count, row.date
                    ))
                })?;
                Ok(RegistrationStat {
                    date: row.date,
                    count,
                })
            })
            .collect()
    }
}

/// Inclusive lower bound of the lookback window: `today - (days - 1)`,
/// so `days = 1` means today only. Non-positive `days` yield a bound
/// after today (an empty window) rather than an error; out-of-range
/// arithmetic saturates at the calendar limits.
fn lookback_start(today: NaiveDate, days: i64) -> NaiveDate {
    let back = days.saturating_sub(1);
    Duration::try_days(back)
        .and_then(|delta| today.checked_sub_signed(delta))
        .unwrap_or(if back >= 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}
