//! Site footer with copyright year and credits.

use leptos::prelude::*;

use crate::content::profile::PROFILE;

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

/// Gregorian year for a count of days since 1970-01-01.
pub fn year_from_unix_days(days: i64) -> i64 {
    // Shift to an era starting 0000-03-01 so leap days fall at the end.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let year = yoe + era * 400;
    if mp >= 10 { year + 1 } else { year }
}

fn current_year() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        i64::from(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        year_from_unix_days(i64::try_from(secs / 86_400).unwrap_or(0))
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{format!("© {} {}. All rights reserved.", current_year(), PROFILE.name)}</p>
            <p class="site-footer__credits">
                "Built with Rust, Leptos, and Axum."
                <a href=PROFILE.github class="site-footer__source" target="_blank" rel="noopener noreferrer">
                    "Source Code"
                </a>
            </p>
        </footer>
    }
}
