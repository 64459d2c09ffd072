// Example: a viewport resize (e.g. rotation) keeps the current page in place.
use pagewindow::{
    PageFrame, PageHost, PageIndex, PageSize, Pageable, Pager, PagerConfig, ScrollMetrics,
    Viewport,
};

struct Page;

impl Pageable for Page {}

struct PrintHost;

impl PageHost for PrintHost {
    fn attach(&mut self, index: PageIndex, frame: PageFrame) {
        println!("  attach  {index} {frame:?}");
    }

    fn detach(&mut self, index: PageIndex) {
        println!("  detach  {index}");
    }

    fn set_frame(&mut self, index: PageIndex, frame: PageFrame) {
        println!("  reframe {index} {frame:?}");
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
    let config = PagerConfig::new().with_max_children(3).with_initial_index(2);
    let mut pager = Pager::new((0..6).map(|_| Page), config)?;
    let mut view = ScrollView {
        width: 390.0,
        ..ScrollView::default()
    };
    let mut host = PrintHost;
    pager.load(PageSize::new(390.0, 844.0), &mut view, &mut host);

    println!("rotate to landscape");
    let landscape = PageSize::new(844.0, 390.0);
    pager.begin_transition(landscape, &mut view, &mut host);
    println!("  phase={:?} offset={}", pager.phase(), view.offset_x);

    // Ticks reported mid-animation only update progress.
    pager.on_scroll(view.metrics(), &mut host);

    view.width = landscape.width;
    pager.end_transition(&mut view, &mut host);
    println!("state={:?}", pager.state());
    Ok(())
}
