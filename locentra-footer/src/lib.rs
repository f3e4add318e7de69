//! LocentraOS Footer
//!
//! Platform-agnostic render core for the LocentraOS page footer.
//! This crate produces a framework-neutral [`Fragment`] without UI or
//! platform-specific dependencies; host adapters turn it into native views.

pub mod clock;
pub mod footer;
pub mod fragment;
pub mod style;
pub mod year;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, ManualClock, SharedClock, SystemClock};
pub use footer::{BRAND, FooterView, TAGLINE, render, render_with};
pub use fragment::{Element, Fragment, Node};
pub use style::FooterStyle;
pub use year::CurrentYear;
