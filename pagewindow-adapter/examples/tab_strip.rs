// Example: a tab strip highlighted by scroll progress; tapping a tab animates the pager.
use pagewindow::{PageFrame, PageHost, PageIndex, PageSize, Pageable, PagerConfig};
use pagewindow_adapter::{TabCell, TabPager};

struct Page;

impl Pageable for Page {}

struct Tab {
    title: &'static str,
    highlight: f64,
}

impl TabCell for Tab {
    fn update_highlight_ratio(&mut self, ratio: f64) {
        self.highlight = ratio;
    }
}

struct NoopHost;

impl PageHost for NoopHost {
    fn attach(&mut self, _index: PageIndex, _frame: PageFrame) {}
    fn detach(&mut self, _index: PageIndex) {}
    fn set_frame(&mut self, _index: PageIndex, _frame: PageFrame) {}
}

fn render(tabs: &TabPager<Page, Tab>) {
    let row: Vec<String> = tabs
        .strip()
        .cells()
        .iter()
        .map(|t| format!("{}:{:.2}", t.title, t.highlight))
        .collect();
    println!("  [{}]", row.join(" "));
}

fn main() -> pagewindow::Result<()> {
    let components = ["red", "green", "blue", "gray"].map(|title| {
        (
            Page,
            Tab {
                title,
                highlight: 0.0,
            },
        )
    });
    let mut tabs = TabPager::new(components, PagerConfig::new(), 360.0)?;
    let mut host = NoopHost;
    tabs.load(PageSize::new(360.0, 640.0), &mut host);
    render(&tabs);

    println!("tap blue");
    tabs.select_tab(2, 0, &mut host)?;
    let mut now_ms = 0;
    while tabs.tick(now_ms, &mut host).is_some() {
        render(&tabs);
        now_ms += 50;
    }
    Ok(())
}
