//! Headless storefront carousel, in one import.
//!
//! Re-exports the `carousel` engine at the root and the frame-loop helpers from
//! `carousel-adapter` under [`adapter`]. Hosts that only need the state machines can depend on
//! `carousel` directly.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use carousel::*;

pub mod adapter {
    pub use carousel_adapter::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_drives_carousel_and_queue() {
        let slides = (1..=3u64)
            .map(|id| Slide::new(id, "banner.jpg", "Banner"))
            .collect();
        let mut c = Carousel::new(slides, CarouselOptions::default().with_interval_ms(1_000));
        let mut q = adapter::EventQueue::new();
        q.push(0, adapter::CarouselEvent::Mount);

        let changes = q.run_until(&mut c, 2_000);
        assert_eq!(changes.len(), 2);
        assert_eq!(c.index(), 2);
    }
}
