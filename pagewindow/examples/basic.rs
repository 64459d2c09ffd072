// Example: a windowed pager driven by simulated scroll ticks.
use pagewindow::{
    PageFrame, PageHost, PageIndex, PageSize, Pageable, Pager, PagerConfig, ScrollMetrics,
    Viewport,
};

struct Page(&'static str);

impl Pageable for Page {
    fn did_appear(&mut self, index: PageIndex) {
        println!("  appear    {index} ({})", self.0);
    }

    fn did_disappear(&mut self, index: PageIndex) {
        println!("  disappear {index} ({})", self.0);
    }
}

struct PrintHost;

impl PageHost for PrintHost {
    fn attach(&mut self, index: PageIndex, frame: PageFrame) {
        println!("  attach    {index} at x={}", frame.x);
    }

    fn detach(&mut self, index: PageIndex) {
        println!("  detach    {index}");
    }

    fn set_frame(&mut self, index: PageIndex, frame: PageFrame) {
        println!("  reframe   {index} at x={}", frame.x);
    }
}

#[derive(Default)]
struct ScrollView {
    offset_x: f64,
    width: f64,
    content_width: f64,
}

impl Viewport for ScrollView {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.offset_x, self.width, self.content_width)
    }

    fn set_content_offset(&mut self, offset_x: f64, _animated: bool) {
        self.offset_x = offset_x;
    }

    fn set_content_width(&mut self, content_width: f64) {
        self.content_width = content_width;
    }
}

fn main() -> pagewindow::Result<()> {
    let pages = ["home", "news", "sports", "weather", "music"].map(Page);
    let config = PagerConfig::new().with_max_children(3);
    let mut pager = Pager::new(pages, config)?;

    let mut view = ScrollView {
        width: 320.0,
        ..ScrollView::default()
    };
    let mut host = PrintHost;

    println!("load");
    pager.load(PageSize::new(320.0, 480.0), &mut view, &mut host);
    pager.did_appear();

    // A drag from page 0 to page 2, one frame at a time.
    for offset_x in (0..=640).step_by(80) {
        println!("offset {offset_x}");
        view.offset_x = offset_x as f64;
        pager.on_scroll(view.metrics(), &mut host);
    }
    println!("children={:?} visible={:?}", pager.children(), pager.visible());

    println!("jump to 4");
    pager.scroll_to_page(4, false, &mut view, &mut host)?;
    println!("state={:?}", pager.state());
    Ok(())
}
