use crate::clock::{Clock, SystemClock};
use crate::fragment::{Element, Fragment};
use crate::style::FooterStyle;
use crate::year::CurrentYear;
use chrono::{DateTime, TimeZone};

/// Text placed immediately before the year.
pub const BRAND: &str = "LocentraOS © ";
/// Text placed immediately after the year.
pub const TAGLINE: &str = " • Built for crypto & tech";

/// Page footer: brand line plus the year at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterView {
    style: FooterStyle,
}

impl FooterView {
    #[must_use]
    pub const fn new(style: FooterStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub fn with_style(mut self, style: FooterStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn style(&self) -> &FooterStyle {
        &self.style
    }

    /// Read `clock` once and render.
    #[must_use]
    pub fn render(&self, clock: &(impl Clock + ?Sized)) -> Fragment {
        self.render_at(&clock.now())
    }

    /// Render for a known instant. The year is taken in the instant's offset.
    #[must_use]
    pub fn render_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Fragment {
        let year = CurrentYear::at(now);
        log::trace!("rendering footer for {year}");

        let mut container = Element::new("footer").attr("class", self.style.class_attr());
        if let Some(role) = &self.style.role {
            container = container.attr("role", role.clone());
        }
        Fragment::new(container.text(BRAND).text(year.to_string()).text(TAGLINE))
    }
}

/// Render the footer against the host system clock with the default style.
#[must_use]
pub fn render() -> Fragment {
    render_with(&SystemClock)
}

/// Render the footer against `clock` with the default style.
#[must_use]
pub fn render_with(clock: &(impl Clock + ?Sized)) -> Fragment {
    FooterView::default().render(clock)
}
