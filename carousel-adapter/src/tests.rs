use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use carousel::{Carousel, CarouselOptions, CarouselState, Direction, NavigationSource, Slide};

fn banners(n: usize) -> Vec<Slide> {
    (1..=n as u64)
        .map(|id| Slide::new(id, format!("banners/banner{id}.jpg"), format!("Banner {id}")))
        .collect()
}

fn categories() -> Vec<String> {
    [
        "Phones", "Laptops", "TVs", "ACs", "Audio", "Fashion", "Toys", "Furniture", "Auto",
        "Gourmet", "Cameras", "Books", "Health", "Parts", "Watches", "Essentials",
    ]
    .iter()
    .map(|s| String::from(*s))
    .collect()
}

#[test]
fn queue_manual_previous_pushes_next_tick_out() {
    let mut c = Carousel::new(banners(6), CarouselOptions::default());
    let mut q = EventQueue::new();
    q.push(0, CarouselEvent::Mount);
    q.push(2_000, CarouselEvent::Previous);

    let changes = q.run_until(&mut c, 7_000);
    assert_eq!(changes, [
        Change {
            at_ms: 2_000,
            state: CarouselState {
                index: 5,
                direction: Direction::Backward,
            },
            source: NavigationSource::User,
        },
        Change {
            at_ms: 7_000,
            state: CarouselState {
                index: 0,
                direction: Direction::Forward,
            },
            source: NavigationSource::Autoplay,
        },
    ]);

    let changes = q.run_until(&mut c, 12_000);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].at_ms, 12_000);
    assert_eq!(changes[0].state.index, 1);
}

#[test]
fn queue_runs_manual_event_before_tick_at_same_instant() {
    let mut c = Carousel::new(banners(6), CarouselOptions::default());
    c.mount(0);
    let mut q = EventQueue::new();
    q.push(5_000, CarouselEvent::Next);

    let changes = q.run_until(&mut c, 5_000);
    assert_eq!(changes.len(), 1, "no double advance");
    assert_eq!(changes[0].source, NavigationSource::User);
    assert_eq!(c.index(), 1);
    assert_eq!(c.next_tick_at(), Some(10_000));
}

#[test]
fn queue_ticks_that_fall_before_an_event_run_first() {
    let mut c = Carousel::new(banners(3), CarouselOptions::default().with_interval_ms(1_000));
    c.mount(0);
    let mut q = EventQueue::new();
    q.push(2_500, CarouselEvent::Previous);

    let changes = q.run_until(&mut c, 3_000);
    let seen: Vec<_> = changes.iter().map(|ch| (ch.at_ms, ch.state.index)).collect();
    // ticks at 1000 and 2000, previous at 2500, next tick re-armed to 3500.
    assert_eq!(seen, [(1_000, 1), (2_000, 2), (2_500, 1)]);
    assert_eq!(c.next_tick_at(), Some(3_500));
    assert_eq!(q.clock_ms(), 3_000);
}

#[test]
fn queue_swipe_events_navigate() {
    let mut c = Carousel::new(banners(4), CarouselOptions::default());
    c.mount(0);
    let mut q = EventQueue::new();
    q.push(100, CarouselEvent::TouchStart(300.0));
    q.push(120, CarouselEvent::TouchMove(260.0));
    q.push(140, CarouselEvent::TouchMove(210.0));
    q.push(160, CarouselEvent::TouchEnd);
    q.push(400, CarouselEvent::TouchStart(300.0));
    q.push(420, CarouselEvent::TouchMove(320.0));
    q.push(440, CarouselEvent::TouchEnd);

    let changes = q.run_until(&mut c, 1_000);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].source, NavigationSource::Swipe);
    assert_eq!(changes[0].state.index, 1);
    assert_eq!(c.next_tick_at(), Some(5_160));
    assert!(q.is_empty());
}

#[test]
fn queue_unmount_silences_timer() {
    let mut c = Carousel::new(banners(6), CarouselOptions::default());
    let mut q = EventQueue::new();
    q.push(0, CarouselEvent::Mount);
    q.push(3_000, CarouselEvent::Unmount);
    q.push(4_000, CarouselEvent::Next);

    let changes = q.run_until(&mut c, 100_000);
    assert!(changes.is_empty());
    assert!(!c.is_mounted());
    assert_eq!(c.index(), 0);
}

#[test]
fn queue_keeps_push_order_for_equal_timestamps() {
    let mut c = Carousel::new(banners(6), CarouselOptions::default().with_autoplay(false));
    c.mount(0);
    let mut q = EventQueue::new();
    q.push(10, CarouselEvent::GoTo(3));
    q.push(10, CarouselEvent::Next);
    q.push(5, CarouselEvent::Previous);

    let seen: Vec<_> = q
        .run_until(&mut c, 10)
        .iter()
        .map(|ch| ch.state.index)
        .collect();
    assert_eq!(seen, [5, 3, 4]);
}

#[test]
fn queue_applies_late_event_at_processed_time() {
    let mut c = Carousel::new(banners(6), CarouselOptions::default());
    c.mount(0);
    let mut q = EventQueue::new();
    assert!(q.run_until(&mut c, 3_000).is_empty());
    assert_eq!(q.clock_ms(), 3_000);

    q.push(1_000, CarouselEvent::Next);
    let changes = q.run_until(&mut c, 4_000);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].at_ms, 3_000);
    assert_eq!(changes[0].state.index, 1);
    assert_eq!(c.next_tick_at(), Some(8_000));
    assert_eq!(q.clock_ms(), 4_000);
}

#[test]
fn queue_terminates_at_end_of_clock() {
    let mut c = Carousel::new(banners(3), CarouselOptions::default());
    c.mount(u64::MAX - 100);
    let mut q = EventQueue::new();

    let changes = q.run_until(&mut c, u64::MAX);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].source, NavigationSource::Autoplay);
    assert!(q.run_until(&mut c, u64::MAX).is_empty());
}

#[test]
fn transition_offsets_mirror_by_direction() {
    let f = SlideTransition::for_direction(Direction::Forward, 320.0);
    assert_eq!(f.enter_from, 320.0);
    assert_eq!(f.exit_to, -320.0);

    let b = SlideTransition::for_direction(Direction::Backward, 320.0);
    assert_eq!(b.enter_from, -320.0);
    assert_eq!(b.exit_to, 320.0);

    assert_eq!(f.sample(1.0), (0.0, -320.0));
    assert_eq!(b.sample(0.5), (-160.0, 160.0));
}

#[test]
fn animator_plays_transition_after_index_change() {
    let mut a = SlideAnimator::new(100.0);
    assert_eq!(a.frame(0), None);

    assert!(!a.observe(CarouselState::default(), 0));
    let rest = a.frame(0).unwrap();
    assert_eq!(rest.incoming, 0);
    assert_eq!(rest.outgoing, None);

    assert!(a.observe(
        CarouselState {
            index: 1,
            direction: Direction::Forward,
        },
        1_000,
    ));
    assert!(a.is_animating(1_400));
    let mid = a.frame(1_400).unwrap();
    assert_eq!(mid.incoming, 1);
    assert_eq!(mid.outgoing, Some(0));
    assert_eq!(mid.incoming_offset, 50.0);
    assert_eq!(mid.outgoing_offset, -50.0);

    let done = a.frame(1_800).unwrap();
    assert_eq!(done.outgoing, None);
    assert_eq!(done.incoming_offset, 0.0);
    assert!(!a.is_animating(1_800));
}

#[test]
fn animator_ignores_unchanged_index() {
    let mut a = SlideAnimator::new(100.0).with_duration_ms(200);
    a.observe(CarouselState::default(), 0);
    assert!(!a.observe(
        CarouselState {
            index: 0,
            direction: Direction::Backward,
        },
        50,
    ));
    assert!(!a.is_animating(50));
}

#[test]
fn tween_samples_endpoints_and_retargets() {
    let mut t = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    assert_eq!(t.sample(0), 0.0);
    assert_eq!(t.sample(50), 50.0);
    assert_eq!(t.sample(500), 100.0);
    assert!(t.is_done(100));

    t.retarget(50, 0.0, 100);
    assert_eq!(t.from, 50.0);
    assert_eq!(t.sample(100), 25.0);
    assert_eq!(t.sample(150), 0.0);

    for e in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOut, Easing::EaseInOutCubic] {
        assert_eq!(e.sample(0.0), 0.0);
        assert_eq!(e.sample(1.0), 1.0);
        assert_eq!(e.sample(2.0), 1.0);
    }
}

#[test]
fn category_bar_arrows_follow_viewport() {
    let mut bar = CategoryBar::new(categories(), carousel::ScrollOptions::default());
    assert!(!bar.can_scroll_left());
    assert!(!bar.can_scroll_right());

    assert!(bar.on_resize(1_000.0, 300.0));
    assert!(!bar.can_scroll_left());
    assert!(bar.can_scroll_right());
    assert_eq!(bar.scroll_page(Direction::Backward, 0), None);

    assert!(bar.on_scroll(700.0));
    assert!(bar.can_scroll_left());
    assert!(!bar.can_scroll_right());
    assert_eq!(bar.scroll_page(Direction::Forward, 0), None);
}

#[test]
fn category_bar_smooth_scrolls_one_page() {
    let mut bar = CategoryBar::new(categories(), carousel::ScrollOptions::default());
    bar.on_resize(1_000.0, 300.0);

    assert_eq!(bar.scroll_page(Direction::Forward, 0), Some(150.0));
    assert!(bar.is_animating());

    let mut last = 0.0f32;
    for now_ms in [0u64, 50, 100, 150, 200, 250, 300] {
        let off = bar.tick(now_ms).unwrap();
        assert!(off >= last);
        last = off;
    }
    assert_eq!(last, 150.0);
    assert!(!bar.is_animating());
    assert_eq!(bar.tick(400), None);
    assert!(bar.can_scroll_left());
}

#[test]
fn category_bar_repeated_press_pages_from_pending_target() {
    let mut bar = CategoryBar::new(categories(), carousel::ScrollOptions::default());
    bar.on_resize(1_000.0, 300.0);

    assert_eq!(bar.scroll_page(Direction::Forward, 0), Some(150.0));
    assert_eq!(bar.tick(150), Some(75.0));
    assert_eq!(bar.scroll_page(Direction::Forward, 150), Some(300.0));
    assert_eq!(bar.tick(450), Some(300.0));
    assert!(!bar.is_animating());
}

#[test]
fn category_bar_user_scroll_cancels_animation() {
    let mut bar = CategoryBar::new(categories(), carousel::ScrollOptions::default());
    bar.on_resize(1_000.0, 300.0);
    bar.scroll_page(Direction::Forward, 0);
    bar.on_scroll(40.0);
    assert!(!bar.is_animating());
    assert_eq!(bar.offset(), 40.0);
    assert_eq!(bar.tick(300), None);
}

#[test]
fn category_bar_instant_scroll_without_duration() {
    let mut bar = CategoryBar::new(categories(), carousel::ScrollOptions::default())
        .with_smooth_scroll_ms(0);
    bar.on_resize(1_000.0, 300.0);
    assert_eq!(bar.scroll_page(Direction::Forward, 0), Some(150.0));
    assert!(!bar.is_animating());
    assert_eq!(bar.offset(), 150.0);
}

#[test]
fn category_bar_selection_fires_callback() {
    let hits = Arc::new(AtomicUsize::new(0));
    let mut bar = CategoryBar::new(categories(), carousel::ScrollOptions::default())
        .with_on_select(Some({
            let hits = Arc::clone(&hits);
            move |_index: usize, _name: &String| {
                hits.fetch_add(1, Ordering::Relaxed);
            }
        }));

    assert_eq!(bar.selected(), None);
    assert_eq!(bar.select(2).map(String::as_str), Some("TVs"));
    assert!(bar.is_selected(2));
    assert_eq!(bar.select(99), None);
    assert_eq!(bar.selected_index(), Some(2));
    assert_eq!(hits.load(Ordering::Relaxed), 1);

    bar.clear_selection();
    assert_eq!(bar.selected(), None);
}
