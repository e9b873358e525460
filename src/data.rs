//! Static and randomized lookup tables used by the dashboard pages.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use log::warn;

use crate::entity::{AddressMetric, CategorySummary, Color, SelectOption};
use crate::random::RandomSource;

pub const RISK_LEVELS: [&str; 3] = ["Low", "Medium", "High"];

pub const MAX_TRANSACTION_COUNT: u64 = 300;

/// Band of a 0-100 risk score: Low below 34, High from 67
pub fn risk_level(score: u8) -> &'static str {
    match score {
        0..=33 => RISK_LEVELS[0],
        34..=66 => RISK_LEVELS[1],
        _ => RISK_LEVELS[2],
    }
}

const METRIC_DATE_FORMAT: &str = "%b %d, %Y";

pub fn score_options() -> Vec<SelectOption> {
    vec![
        SelectOption {
            text: "All Score Levels",
            value: "",
        },
        SelectOption {
            text: "High",
            value: "High",
        },
        SelectOption {
            text: "Medium",
            value: "Medium",
        },
        SelectOption {
            text: "Low",
            value: "Low",
        },
    ]
}

pub fn risk_options() -> Vec<SelectOption> {
    vec![
        SelectOption {
            text: "All Risk Levels",
            value: "",
        },
        SelectOption {
            text: "High",
            value: "High",
        },
        SelectOption {
            text: "Medium",
            value: "Medium",
        },
        SelectOption {
            text: "Low",
            value: "Low",
        },
    ]
}

pub fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption {
            text: "All Statuses",
            value: "",
        },
        SelectOption {
            text: "Whitelist",
            value: "whitelist",
        },
        SelectOption {
            text: "Suspicious",
            value: "Suspicious",
        },
        SelectOption {
            text: "Flagged",
            value: "Flagged",
        },
    ]
}

pub fn rounds() -> Vec<SelectOption> {
    vec![
        SelectOption {
            text: "All Games",
            value: "all",
        },
        SelectOption {
            text: "Game 1",
            value: "fantom",
        },
        SelectOption {
            text: "Game 2",
            value: "gr15",
        },
    ]
}

fn summary(
    title: &'static str,
    metric: &'static str,
    metric_prev: &'static str,
    percentage: &'static str,
    color: Color,
) -> CategorySummary {
    CategorySummary {
        title,
        metric,
        metric_prev,
        percentage,
        color,
    }
}

/// Per-round user category summaries. Unknown rounds have none.
pub fn categories(round: &str) -> Vec<CategorySummary> {
    match round {
        "all" => vec![
            summary("Suspicious Users", "1,633", "7,509", "27%", Color::Orange),
            summary("Flagged Users", "1251", "7,509", "21%", Color::Rose),
            summary("Whitelisted Users", "3,827", "7,509", "52%", Color::Sky),
        ],
        "gr15" => vec![
            summary("Suspicious Users", "1,156", "4,323", "26.7%", Color::Orange),
            summary("Flagged Users", "933", "4,323", "21.6%", Color::Rose),
            summary("Whitelisted Users", "2,234", "4,323", "51.7%", Color::Sky),
        ],
        "fantom" => vec![
            summary("Suspicious Users", "477", "3,186", "30%", Color::Orange),
            summary("Flagged Users", "318", "3,186", "20%", Color::Rose),
            summary("Whitelisted Users", "1593", "3,186", "50%", Color::Sky),
        ],
        _ => Vec::new(),
    }
}

/// Midnight at the start of `date` in the local timezone
fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

/// Uniformly random instant in `[start, end]`; `end` before `start` yields `start`
pub fn random_instant(
    rng: &dyn RandomSource,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let span = (end - start).num_milliseconds().max(0) as u64;
    start + chrono::Duration::milliseconds(rng.next_in_range(0, span) as i64)
}

/// Uniformly random instant between local midnight of `start` and `now`
pub fn random_instant_since(
    rng: &dyn RandomSource,
    start: NaiveDate,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    random_instant(rng, local_midnight(start), now)
}

/// True when the last activity happened strictly after the wallet was created
pub fn validate_activity_dates(creation: DateTime<Utc>, last_activity: DateTime<Utc>) -> bool {
    last_activity > creation
}

/// Humanized distance from `then` to `now`, e.g. "3 months ago"
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0) as f64;
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    let months = days / 30.4;
    let years = days / 365.0;

    let text = if seconds < 45.0 {
        "a few seconds".to_string()
    } else if seconds < 90.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes.round() as i64)
    } else if minutes < 90.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{} hours", hours.round() as i64)
    } else if hours < 36.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{} days", days.round() as i64)
    } else if days < 46.0 {
        "a month".to_string()
    } else if days < 320.0 {
        format!("{} months", months.round().max(2.0) as i64)
    } else if days < 548.0 {
        "a year".to_string()
    } else {
        format!("{} years", years.round().max(2.0) as i64)
    };

    format!("{} ago", text)
}

fn date_metric(title: &str, at: DateTime<Utc>, now: DateTime<Utc>) -> AddressMetric {
    AddressMetric {
        title: title.to_string(),
        metric: at.with_timezone(&Local).format(METRIC_DATE_FORMAT).to_string(),
        extra: Some(relative_time(at, now)),
    }
}

/// Randomized summary metrics for a player address
pub fn address_metrics(rng: &dyn RandomSource, now: DateTime<Utc>) -> Vec<AddressMetric> {
    let epoch = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default();
    let recent = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();

    let created_at = random_instant_since(rng, epoch, now);
    let activity_start = created_at.max(local_midnight(recent));
    let last_activity = random_instant(rng, activity_start, now);

    if !validate_activity_dates(created_at, last_activity) {
        warn!(
            "Last activity {} is not after wallet creation {}",
            last_activity, created_at
        );
    }

    vec![
        date_metric("Wallet Creation Date", created_at, now),
        AddressMetric {
            title: "Number of transactions".to_string(),
            metric: rng.next_in_range(0, MAX_TRANSACTION_COUNT).to_string(),
            extra: None,
        },
        date_metric("Last activity date", last_activity, now),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;
    use chrono::Duration;

    #[test]
    fn category_tables_cover_known_rounds() {
        for round in rounds() {
            let summaries = categories(round.value);
            assert_eq!(summaries.len(), 3, "round {}", round.value);
            assert_eq!(summaries[0].title, "Suspicious Users");
        }
        assert!(categories("Game1").is_empty());
    }

    #[test]
    fn risk_level_bands() {
        assert_eq!(risk_level(0), "Low");
        assert_eq!(risk_level(33), "Low");
        assert_eq!(risk_level(34), "Medium");
        assert_eq!(risk_level(66), "Medium");
        assert_eq!(risk_level(67), "High");
        assert_eq!(risk_level(100), "High");
    }

    #[test]
    fn filter_options_start_with_catch_all() {
        assert_eq!(score_options()[0].value, "");
        assert_eq!(risk_options()[0].text, "All Risk Levels");
        assert_eq!(status_options().len(), 4);
        assert_eq!(rounds()[0].value, "all");
    }

    #[test]
    fn relative_time_thresholds() {
        let now = Utc::now();
        assert_eq!(relative_time(now - Duration::seconds(10), now), "a few seconds ago");
        assert_eq!(relative_time(now - Duration::minutes(10), now), "10 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(30), now), "a day ago");
        assert_eq!(relative_time(now - Duration::days(5), now), "5 days ago");
        assert_eq!(relative_time(now - Duration::days(90), now), "3 months ago");
        assert_eq!(relative_time(now - Duration::days(400), now), "a year ago");
        assert_eq!(relative_time(now - Duration::days(1000), now), "3 years ago");
        assert_eq!(relative_time(now + Duration::days(1), now), "a few seconds ago");
    }

    #[test]
    fn activity_validation_requires_strict_order() {
        let created = Utc::now();
        assert!(validate_activity_dates(created, created + Duration::days(1)));
        assert!(!validate_activity_dates(created, created));
        assert!(!validate_activity_dates(created, created - Duration::days(1)));
    }

    #[test]
    fn random_instant_stays_in_bounds() {
        let rng = SeededRandom::new(11);
        let start = Utc::now() - Duration::days(365);
        let end = Utc::now();
        for _ in 0..100 {
            let at = random_instant(&rng, start, end);
            assert!(at >= start && at <= end);
        }
        assert_eq!(random_instant(&rng, end, start), end);
    }

    #[test]
    fn address_metrics_are_consistent() {
        let rng = SeededRandom::new(3);
        let now = Utc::now();
        let metrics = address_metrics(&rng, now);

        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics[0].title, "Wallet Creation Date");
        assert!(metrics[0].extra.as_deref().unwrap().ends_with(" ago"));

        let count: u64 = metrics[1].metric.parse().unwrap();
        assert!(count <= MAX_TRANSACTION_COUNT);
        assert!(metrics[1].extra.is_none());

        assert_eq!(metrics[2].title, "Last activity date");
    }
}
