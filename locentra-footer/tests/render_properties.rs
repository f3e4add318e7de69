use std::sync::Arc;
use std::thread;

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use locentra_footer::{
    BRAND, Clock, FixedClock, FooterView, ManualClock, Node, SharedClock, TAGLINE, render,
    render_with,
};

fn at(offset_secs: i32, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(offset_secs)
        .unwrap()
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .unwrap()
        + Duration::milliseconds(i64::from(ms))
}

fn year_segment(clock: &impl Clock) -> String {
    match &render_with(clock).root.children[1] {
        Node::Text(year) => year.clone(),
        Node::Element(other) => panic!("expected year text, got <{}>", other.tag),
    }
}

#[test]
fn renders_exact_text_for_2027() {
    let clock = FixedClock::new(at(0, 2027, 5, 20, 10, 0, 0, 0));
    assert_eq!(
        render_with(&clock).text_content(),
        "LocentraOS © 2027 • Built for crypto & tech"
    );
}

#[test]
fn renders_exact_text_for_1999() {
    let clock = FixedClock::parse_rfc3339("1999-11-11T11:11:11-05:00").unwrap();
    assert_eq!(
        render_with(&clock).text_content(),
        "LocentraOS © 1999 • Built for crypto & tech"
    );
}

#[test]
fn literals_surround_the_year_for_any_instant() {
    let instants = [
        at(0, 1970, 1, 1, 0, 0, 0, 0),
        at(3600, 2000, 2, 29, 12, 0, 0, 0),
        at(-36_000, 2026, 10, 19, 8, 30, 0, 0),
        at(50_400, 2099, 12, 31, 23, 59, 59, 999),
    ];
    for instant in instants {
        let text = render_with(&FixedClock::new(instant)).text_content();
        let expected_year = instant.format("%Y").to_string();
        assert_eq!(text, format!("{BRAND}{expected_year}{TAGLINE}"));
    }
}

#[test]
fn year_has_four_digits_and_no_padding() {
    for year in [1000, 1999, 2027, 9999] {
        let segment = year_segment(&FixedClock::new(at(0, year, 6, 1, 0, 0, 0, 0)));
        assert_eq!(segment, year.to_string());
        assert_eq!(segment.len(), 4);
        assert!(segment.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn year_flips_exactly_at_local_midnight() {
    let pacific = -8 * 3600;
    let clock = ManualClock::new(at(pacific, 2026, 12, 31, 23, 59, 59, 999));
    assert_eq!(year_segment(&clock), "2026");

    clock.advance(Duration::milliseconds(1));
    assert_eq!(clock.now(), at(pacific, 2027, 1, 1, 0, 0, 0, 0));
    assert_eq!(year_segment(&clock), "2027");
}

#[test]
fn local_offset_wins_over_utc_near_the_boundary() {
    // Same instant: still 2026 in UTC, already 2027 in UTC+09:00.
    let tokyo = at(9 * 3600, 2027, 1, 1, 0, 0, 0, 0);
    let utc = tokyo.with_timezone(&FixedOffset::east_opt(0).unwrap());
    assert_eq!(year_segment(&FixedClock::new(tokyo)), "2027");
    assert_eq!(year_segment(&FixedClock::new(utc)), "2026");
}

#[test]
fn year_is_recomputed_on_every_render() {
    let clock = ManualClock::new(at(0, 2026, 12, 31, 23, 0, 0, 0));
    let view = FooterView::default();
    let before = view.render(&clock);
    clock.advance(Duration::hours(2));
    let after = view.render(&clock);
    assert_ne!(before, after);
    assert_eq!(before.text_content(), format!("{BRAND}2026{TAGLINE}"));
    assert_eq!(after.text_content(), format!("{BRAND}2027{TAGLINE}"));
}

#[test]
fn same_clock_value_gives_identical_output() {
    let clock = FixedClock::new(at(0, 2027, 8, 8, 8, 8, 8, 8));
    let view = FooterView::default();
    let first = view.render(&clock).to_html();
    for _ in 0..16 {
        assert_eq!(view.render(&clock).to_html(), first);
    }
}

#[test]
fn concurrent_renders_share_one_clock_safely() {
    let clock = SharedClock::fixed(at(0, 2031, 4, 1, 0, 0, 0, 0));
    let view = Arc::new(FooterView::default());
    let outputs: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let clock = clock.clone();
                let view = Arc::clone(&view);
                scope.spawn(move || view.render(&clock).to_html())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(outputs.iter().all(|html| html == &outputs[0]));
    assert!(outputs[0].contains("2031"));
}

#[test]
fn default_render_uses_system_clock() {
    let text = render().text_content();
    let year = &text[BRAND.len()..text.len() - TAGLINE.len()];
    assert!(year.parse::<i32>().unwrap() >= 2024);
}
