//! Usage-event aggregation: window computation, totals, per-event
//! breakdown, unique-user counts, and daily time series.
//!
//! Everything here is a pure function of an event slice, a window size,
//! and the current time. Callers fetch rows from the store, then hand them
//! to [`aggregate`] / [`daily_stats`] / [`recent_events`]; both read paths
//! (single project, all visible projects) go through the same functions.
//!
//! All calendar math is UTC. An event's bucket is the UTC calendar date of
//! its `created_at`, regardless of any server or client local timezone.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default overview window in days when the caller does not specify one.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Smallest accepted overview window.
pub const MIN_WINDOW_DAYS: i64 = 1;

/// Largest accepted overview window.
pub const MAX_WINDOW_DAYS: i64 = 365;

/// Maximum events returned by the full project event listing.
pub const EVENT_LISTING_LIMIT: i64 = 100;

/// Maximum events embedded in an overview's `recentEvents`.
pub const OVERVIEW_RECENT_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Event record access
// ---------------------------------------------------------------------------

/// Read access to the fields aggregation cares about.
///
/// Implemented by the persistence layer's event model so this crate stays
/// free of database types.
pub trait EventRecord {
    fn event_name(&self) -> &str;
    fn user_id(&self) -> &str;
    fn created_at(&self) -> Timestamp;
}

// ---------------------------------------------------------------------------
// Aggregate result types
// ---------------------------------------------------------------------------

/// Per-event-name aggregate within a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBreakdown {
    pub event_name: String,
    pub total_count: i64,
    pub unique_users: i64,
}

/// One UTC calendar day's slice of aggregated data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    /// The UTC calendar date this bucket covers.
    pub date: NaiveDate,
    pub total_count: i64,
    /// Distinct `user_id` values within this day only.
    pub unique_users: i64,
    /// Event-name counts within this day only.
    pub per_event_count: BTreeMap<String, i64>,
}

/// The numeric portion of an events overview (everything except the
/// embedded recent-event list, which carries full event rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewStats {
    pub total_events: i64,
    pub unique_users: i64,
    pub event_breakdown: Vec<EventBreakdown>,
    pub daily_stats: Vec<DayBucket>,
}

// ---------------------------------------------------------------------------
// Window computation
// ---------------------------------------------------------------------------

/// Clamp a requested window size to `[MIN_WINDOW_DAYS, MAX_WINDOW_DAYS]`,
/// defaulting to [`DEFAULT_WINDOW_DAYS`] when absent.
///
/// This is the only place window-size policy lives; the aggregation
/// functions below trust their input.
pub fn clamp_window_days(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_WINDOW_DAYS)
        .clamp(MIN_WINDOW_DAYS, MAX_WINDOW_DAYS)
}

/// The first UTC calendar date of the window ending on `now`'s date.
///
/// A window of `n` days covers `[today − (n − 1), today]` inclusive.
fn window_start_date(now: Timestamp, window_days: i64) -> Result<NaiveDate, CoreError> {
    now.date_naive()
        .checked_sub_days(Days::new((window_days - 1) as u64))
        .ok_or_else(|| {
            CoreError::Internal(format!(
                "window start out of range for {window_days} day window"
            ))
        })
}

/// The UTC start-of-day instant of the window's first date.
///
/// Event filtering compares `created_at` against this lower bound; there
/// is no upper bound beyond "now" occurring naturally.
pub fn window_start(now: Timestamp, window_days: i64) -> Result<Timestamp, CoreError> {
    let start_date = window_start_date(now, window_days)?;
    let start = start_date.and_hms_opt(0, 0, 0).ok_or_else(|| {
        CoreError::Internal(format!("invalid start of day for {start_date}"))
    })?;
    Ok(start.and_utc())
}

// ---------------------------------------------------------------------------
// Daily time series
// ---------------------------------------------------------------------------

/// Partition events into exactly `window_days` UTC calendar-day buckets,
/// oldest first. Days with no events still get a zeroed bucket.
pub fn daily_stats<E: EventRecord>(
    events: &[E],
    window_days: i64,
    now: Timestamp,
) -> Result<Vec<DayBucket>, CoreError> {
    let start_date = window_start_date(now, window_days)?;

    let mut buckets: Vec<DayBucket> = Vec::with_capacity(window_days as usize);
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    for offset in 0..window_days {
        let date = start_date
            .checked_add_days(Days::new(offset as u64))
            .ok_or_else(|| {
                CoreError::Internal(format!("window day out of range: {start_date} + {offset}"))
            })?;
        index.insert(date, buckets.len());
        buckets.push(DayBucket {
            date,
            total_count: 0,
            unique_users: 0,
            per_event_count: BTreeMap::new(),
        });
    }

    let mut day_users: Vec<HashSet<&str>> = vec![HashSet::new(); buckets.len()];
    for event in events {
        let date = event.created_at().date_naive();
        // Events outside the window (older rows, if the caller passed any)
        // have no bucket and are skipped.
        let Some(&i) = index.get(&date) else { continue };
        buckets[i].total_count += 1;
        day_users[i].insert(event.user_id());
        *buckets[i]
            .per_event_count
            .entry(event.event_name().to_string())
            .or_insert(0) += 1;
    }

    for (bucket, users) in buckets.iter_mut().zip(day_users) {
        bucket.unique_users = users.len() as i64;
    }

    Ok(buckets)
}

// ---------------------------------------------------------------------------
// Overview aggregation
// ---------------------------------------------------------------------------

/// Compute the full numeric overview for a window.
///
/// `window_days` is trusted to be within `[MIN_WINDOW_DAYS,
/// MAX_WINDOW_DAYS]`; clamping happens at the HTTP boundary via
/// [`clamp_window_days`]. Two calls with the same events and parameters
/// produce identical output.
pub fn aggregate<E: EventRecord>(
    events: &[E],
    window_days: i64,
    now: Timestamp,
) -> Result<OverviewStats, CoreError> {
    let since = window_start(now, window_days)?;
    let windowed: Vec<&E> = events.iter().filter(|e| e.created_at() >= since).collect();

    let total_events = windowed.len() as i64;
    let unique_users = windowed
        .iter()
        .map(|e| e.user_id())
        .collect::<HashSet<_>>()
        .len() as i64;

    let mut groups: BTreeMap<&str, (i64, HashSet<&str>)> = BTreeMap::new();
    for event in &windowed {
        let group = groups.entry(event.event_name()).or_default();
        group.0 += 1;
        group.1.insert(event.user_id());
    }
    let mut event_breakdown: Vec<EventBreakdown> = groups
        .into_iter()
        .map(|(name, (count, users))| EventBreakdown {
            event_name: name.to_string(),
            total_count: count,
            unique_users: users.len() as i64,
        })
        .collect();
    // Busiest events first; ties resolved by name so output is stable.
    event_breakdown.sort_by(|a, b| {
        b.total_count
            .cmp(&a.total_count)
            .then_with(|| a.event_name.cmp(&b.event_name))
    });

    let daily_stats = daily_stats(events, window_days, now)?;

    Ok(OverviewStats {
        total_events,
        unique_users,
        event_breakdown,
        daily_stats,
    })
}

/// The most recent windowed events, newest first, truncated to `limit`.
///
/// The inverse ordering from [`daily_stats`]: the time series feeds a
/// trend chart, this feeds a recency feed.
pub fn recent_events<E: EventRecord + Clone>(
    events: &[E],
    window_days: i64,
    now: Timestamp,
    limit: usize,
) -> Result<Vec<E>, CoreError> {
    let since = window_start(now, window_days)?;
    let mut windowed: Vec<&E> = events.iter().filter(|e| e.created_at() >= since).collect();
    windowed.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    Ok(windowed.into_iter().take(limit).cloned().collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
