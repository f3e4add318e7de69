use crate::clock::Clock;
use chrono::{DateTime, Datelike, TimeZone};
use serde::Serialize;
use std::fmt;

/// Calendar year shown in the footer, derived fresh on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CurrentYear(i32);

impl CurrentYear {
    /// Year of `instant` as seen in the instant's own offset.
    #[must_use]
    pub fn at<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.year())
    }

    /// Ask `clock` for the time once and take its year.
    #[must_use]
    pub fn now(clock: &(impl Clock + ?Sized)) -> Self {
        Self::at(&clock.now())
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CurrentYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
