// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Human-facing formatting for star counts and rate-limit notices.
use std::time::{SystemTime, UNIX_EPOCH};

const THOUSAND: u64 = 1000;

/// Formats a star count, abbreviating thousands with one decimal place.
///
/// # Examples
///
/// ```
/// use awesome_stars::format_stars;
///
/// assert_eq!(format_stars(999,), "999");
/// assert_eq!(format_stars(1000,), "1.0k");
/// assert_eq!(format_stars(12345,), "12.3k");
/// ```
pub fn format_stars(stars: u64,) -> String
{
    if stars >= THOUSAND {
        format!("{:.1}k", stars as f64 / THOUSAND as f64)
    } else {
        stars.to_string()
    }
}

/// Builds the user-facing message shown when the rate limit is exhausted,
/// measured against the current system time.
pub fn rate_limit_message(reset_at: Option<u64,>,) -> String
{
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH,)
        .map(|elapsed| elapsed.as_secs(),)
        .unwrap_or_default();
    rate_limit_message_at(reset_at, now,)
}

/// Builds the rate-limit message relative to `now` (unix seconds).
///
/// Minutes are rounded down and never negative. Without a reset time the
/// message suggests retrying later or supplying a token.
///
/// # Examples
///
/// ```
/// use awesome_stars::rate_limit_message_at;
///
/// assert_eq!(
///     rate_limit_message_at(Some(1_300,), 1_000,),
///     "GitHub rate limit exceeded. Try again in ~5 minutes."
/// );
/// ```
pub fn rate_limit_message_at(reset_at: Option<u64,>, now: u64,) -> String
{
    match reset_at.filter(|reset| *reset > 0,) {
        Some(reset,) => {
            let minutes = reset.saturating_sub(now,) / 60;
            format!("GitHub rate limit exceeded. Try again in ~{minutes} minutes.")
        }
        None => "GitHub rate limit exceeded. Try again later or provide a PAT.".to_owned(),
    }
}
