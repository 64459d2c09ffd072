use pagewindow::{PageFrame, PageHost, PageIndex, PageSize, Pageable, PagerConfig};
use pagewindow_adapter::{Controller, Easing};

struct Page;

impl Pageable for Page {
    fn did_appear(&mut self, index: PageIndex) {
        println!("  appear {index}");
    }
}

struct PrintHost;

impl PageHost for PrintHost {
    fn attach(&mut self, index: PageIndex, _frame: PageFrame) {
        println!("  attach {index}");
    }

    fn detach(&mut self, index: PageIndex) {
        println!("  detach {index}");
    }

    fn set_frame(&mut self, _index: PageIndex, _frame: PageFrame) {}
}

fn main() -> pagewindow::Result<()> {
    // Example: controller driving an animated page scroll without holding any UI objects.
    //
    // An adapter would:
    // - start the animation (e.g. in response to a "go to page" command)
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to the real scroll container (if any)
    let config = PagerConfig::new().with_max_children(3);
    let mut c = Controller::new((0..20).map(|_| Page), config, 400.0)?
        .with_animation(240, Easing::SmoothStep);
    let mut host = PrintHost;
    c.load(PageSize::new(400.0, 600.0), &mut host);
    c.did_appear();

    let target = c.scroll_to_page(12, true, 0, &mut host)?;
    println!("target_offset={target}");

    let mut now_ms = 0u64;
    loop {
        now_ms += 16;
        let Some(off) = c.tick(now_ms, &mut host) else {
            break;
        };
        if now_ms.is_multiple_of(80) {
            // Redirect mid-flight: the tween restarts from the current offset.
            if now_ms == 80 {
                c.scroll_to_page(6, true, now_ms, &mut host)?;
            }
            println!("t={now_ms} off={off} visible={:?}", c.pager().visible());
        }
    }

    println!(
        "done: off={} children={:?}",
        c.viewport().offset_x(),
        c.pager().children()
    );
    Ok(())
}
