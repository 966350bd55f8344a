use chrono::{DateTime, SubsecRound, Utc};

/// Current UTC time at millisecond precision, so timestamps survive a JSON round-trip unchanged.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
