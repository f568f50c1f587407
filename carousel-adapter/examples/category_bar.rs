use carousel::{Direction, ScrollOptions};
use carousel_adapter::CategoryBar;

fn main() {
    // Example: a category bar whose arrows page through the list with smooth scrolling.
    let names = [
        "Phones", "Laptops", "TVs", "ACs", "Audio", "Fashion", "Toys", "Furniture", "Auto",
        "Gourmet", "Cameras", "Books", "Health", "Parts", "Watches", "Essentials",
    ];
    let mut bar = CategoryBar::new(names.to_vec(), ScrollOptions::default().with_page_fraction(0.7))
        .with_on_select(Some(|index: usize, name: &&str| {
            println!("selected #{index}: {name}");
        }));

    // Mount + measure: 16 items at 72px inside a 360px container.
    bar.on_resize(names.len() as f32 * 72.0, 360.0);
    println!("left={} right={}", bar.can_scroll_left(), bar.can_scroll_right());

    let mut now_ms = 0u64;
    for _ in 0..4 {
        let Some(target) = bar.scroll_page(Direction::Forward, now_ms) else {
            println!("right arrow disabled");
            break;
        };
        println!("paging to {target}");
        // Frame loop: write each offset to the real scroll container.
        while let Some(off) = bar.tick(now_ms) {
            if !bar.is_animating() {
                println!("  settled at {off}");
                break;
            }
            now_ms += 16;
        }
    }

    bar.select(4);
    println!(
        "left={} right={} selected={:?}",
        bar.can_scroll_left(),
        bar.can_scroll_right(),
        bar.selected()
    );
}
