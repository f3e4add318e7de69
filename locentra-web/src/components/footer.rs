use locentra_footer::{FooterStyle, FooterView, SharedClock};
use yew::prelude::*;

use crate::render::fragment_to_html;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    #[prop_or_default]
    pub clock: SharedClock,
    #[prop_or_default]
    pub style: FooterStyle,
}

/// Page footer with the brand line and the current year.
///
/// The year is read from `clock` on every render, never memoized.
#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let fragment = FooterView::new(p.style.clone()).render(&p.clock);
    fragment_to_html(&fragment)
}
