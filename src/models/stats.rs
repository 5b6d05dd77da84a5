//! Dashboard statistics value objects.

use chrono::NaiveDate;
use serde::Serialize;

/// One day's user-registration count. Built fresh per request; days with no
/// registrations are simply absent from the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationStat {
    pub date: NaiveDate,
    pub count: u64,
}
