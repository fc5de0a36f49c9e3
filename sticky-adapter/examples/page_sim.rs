// Example: a sidebar that sticks inside its section while a simulated page scrolls.
use sticky::{Rect, StickyOptions, Viewport};
use sticky_adapter::{Document, Driver};

fn main() {
    let mut doc = Document::new(Viewport::new(1280, 720));
    let body = sticky::Host::body(&doc);
    doc.set_rect(body, Rect::new(0, 0, 1280, 4000));

    let section = doc.create_element(body, "section");
    doc.set_attribute(section, sticky::ATTR_STICKY_CONTAINER, "");
    doc.set_rect(section, Rect::new(200, 0, 1280, 1200));

    let sidebar = doc.create_element(section, "aside");
    doc.set_attribute(sidebar, "class", "sidebar");
    doc.set_attribute(sidebar, sticky::ATTR_MARGIN_TOP, "16");
    doc.set_rect(sidebar, Rect::new(240, 960, 280, 400));

    let options = StickyOptions::default()
        .with_wrap(true)
        .with_sticky_class(Some("is-sticky"))
        .with_sticky_for(768);
    let mut driver = Driver::new(doc, ".sidebar", options, 0);

    // The page finishes loading a little later; the driver polls every 10ms.
    let mut now_ms = 0;
    while !driver.tick(now_ms) {
        now_ms += 5;
        if now_ms == 40 {
            driver.load();
        }
    }
    println!("registered after {now_ms}ms: {:?}", driver.sticky().elements());

    for offset in [0, 200, 240, 600, 1000, 1200] {
        driver.scroll_to(offset);
        let snapshot = driver.sticky().snapshot(&sidebar);
        println!(
            "scroll={offset:>5} phase={:?} top={:?} style=\"{}\"",
            snapshot.map(|s| s.phase),
            snapshot.and_then(|s| s.top),
            driver.document().style_text(sidebar)
        );
    }

    // Narrow screens disable stickiness.
    driver.resize(Viewport::new(640, 720));
    println!("after resize: {:?}", driver.sticky().phase(&sidebar));

    driver.destroy();
    println!("listeners after destroy: {}", driver.document().listener_count());
}
