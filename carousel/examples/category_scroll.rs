// Example: keeping category-bar scroll buttons in sync with viewport measurements.
use carousel::{Direction, ScrollOptions, ScrollTracker};

fn main() {
    let mut t = ScrollTracker::new(ScrollOptions::default().with_page_fraction(0.5));

    // Mount: 16 categories at ~64px each inside a 300px wide bar.
    t.on_resize(16.0 * 64.0, 300.0);
    println!("mount: {:?}", t.bounds());

    // The user presses the right arrow a few times.
    for _ in 0..5 {
        if !t.can_scroll(Direction::Forward) {
            println!("right arrow disabled at offset={}", t.offset());
            break;
        }
        let target = t.page_offset(Direction::Forward);
        // A real adapter would scroll the container; here we apply the result directly.
        t.on_scroll(target);
        println!("scrolled to {target}: {:?}", t.bounds());
    }

    // Window resize: everything fits now.
    let changed = t.on_resize(16.0 * 64.0, 1_280.0);
    println!("resize changed={changed}: {:?}", t.bounds());
}
