// Example: an adapter driving the banner carousel from a frame loop.
use carousel::{Carousel, CarouselOptions, NavigationSource, Slide};

fn main() {
    let slides = (1..=6)
        .map(|id| Slide::new(id, format!("banners/banner{id}.jpg"), format!("Banner {id}")))
        .collect();

    let mut c = Carousel::new(
        slides,
        CarouselOptions::default()
            .with_interval_ms(5_000)
            .with_on_change(Some(|state: carousel::CarouselState, source: NavigationSource| {
                println!("-> slide {} ({:?}, {source:?})", state.index, state.direction);
            })),
    );
    c.mount(0);

    let mut now_ms = 0u64;
    while now_ms < 20_000 {
        // Simulate a ~60fps frame.
        now_ms += 16;
        c.tick(now_ms);

        // User presses "previous" at ~2s: the next auto advance moves to ~7s.
        if (2_000..2_016).contains(&now_ms) {
            c.previous(now_ms);
            println!("t={now_ms} previous, next tick at {:?}", c.next_tick_at());
        }

        // A swipe to the left at ~9s.
        if (9_000..9_016).contains(&now_ms) {
            c.touch_start(320.0);
            c.touch_move(250.0);
            c.touch_move(180.0);
            let swipe = c.touch_end(now_ms);
            println!("t={now_ms} swipe={swipe:?}");
        }

        if now_ms % 1_000 < 16 {
            let dots: String = c
                .indicators()
                .map(|i| if i.active { '●' } else { '○' })
                .collect();
            println!(
                "t={now_ms} {dots} progress={:.2}",
                c.autoplay_progress(now_ms)
            );
        }
    }

    c.unmount();
    println!("unmounted: autoplaying={}", c.is_autoplaying());
}
