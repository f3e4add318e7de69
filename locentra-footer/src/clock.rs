//! Clock seam for render-time date lookups.
//!
//! Rendering never reads wall-clock time directly; it asks a [`Clock`]. The
//! host wires in [`SystemClock`], tests and previews wire in [`FixedClock`] or
//! [`ManualClock`].

use chrono::{DateTime, Duration, FixedOffset, Local};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Source of the current instant, expressed in the host's local offset.
pub trait Clock: Send + Sync {
    /// Current instant. Implementations must not cache across calls unless
    /// they are explicitly fixed.
    fn now(&self) -> DateTime<FixedOffset>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

/// Host system clock in the host's local timezone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    #[must_use]
    pub const fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Build a fixed clock from an RFC 3339 timestamp such as
    /// `2027-06-01T12:00:00+02:00`. The offset in the string is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp is not valid RFC 3339.
    pub fn parse_rfc3339(timestamp: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(timestamp).map(Self::new)
    }

    #[must_use]
    pub const fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

/// Settable clock for driving time forward between renders.
#[derive(Debug)]
pub struct ManualClock {
    instant: Mutex<DateTime<FixedOffset>>,
}

impl ManualClock {
    #[must_use]
    pub const fn new(instant: DateTime<FixedOffset>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    pub fn set(&self, instant: DateTime<FixedOffset>) {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.instant.lock().unwrap_or_else(PoisonError::into_inner);
        *guard += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Shareable clock handle for component properties.
///
/// Equality is handle identity: two handles compare equal only when they point
/// at the same clock, so a property diff never has to read the time.
#[derive(Clone)]
pub struct SharedClock(Arc<dyn Clock>);

impl SharedClock {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self(Arc::new(clock))
    }

    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock)
    }

    #[must_use]
    pub fn fixed(instant: DateTime<FixedOffset>) -> Self {
        Self::new(FixedClock::new(instant))
    }
}

impl From<Arc<dyn Clock>> for SharedClock {
    fn from(clock: Arc<dyn Clock>) -> Self {
        Self(clock)
    }
}

impl Default for SharedClock {
    fn default() -> Self {
        Self::system()
    }
}

impl PartialEq for SharedClock {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedClock").field(&self.0.now()).finish()
    }
}

impl Clock for SharedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0.now()
    }
}
