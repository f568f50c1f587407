use carousel::{Carousel, CarouselOptions, Slide};
use carousel_adapter::{CarouselEvent, EventQueue, SlideAnimator};

fn main() {
    // Example: an adapter that records UI events into a queue and renders frames.
    //
    // Each frame it:
    // 1) replays queued input and autoplay deadlines up to "now"
    // 2) feeds the resulting state into the animator
    // 3) draws the incoming/outgoing slides at the sampled offsets
    let slides = (1..=6)
        .map(|id| Slide::new(id, format!("banners/banner{id}.jpg"), format!("Banner {id}")))
        .collect();
    let mut c = Carousel::new(slides, CarouselOptions::default());
    let mut q = EventQueue::new();
    let mut anim = SlideAnimator::new(1_280.0);

    q.push(0, CarouselEvent::Mount);
    q.push(2_000, CarouselEvent::Previous);
    q.push(9_000, CarouselEvent::TouchStart(640.0));
    q.push(9_050, CarouselEvent::TouchMove(560.0));
    q.push(9_100, CarouselEvent::TouchEnd);

    let mut now_ms = 0u64;
    while now_ms <= 16_000 {
        for change in q.run_until(&mut c, now_ms) {
            println!(
                "t={} -> slide {} {:?} ({:?})",
                change.at_ms, change.state.index, change.state.direction, change.source
            );
        }
        anim.observe(c.state(), now_ms);

        if let Some(frame) = anim.frame(now_ms) {
            if frame.outgoing.is_some() && now_ms % 160 == 0 {
                println!(
                    "  frame t={now_ms}: in={}@{:.0} out={:?}@{:.0}",
                    frame.incoming, frame.incoming_offset, frame.outgoing, frame.outgoing_offset
                );
            }
        }
        now_ms += 16;
    }
}
