//! Headless run of the page: fires the content-ready signal against an
//! in-memory document and prints what `#visitor-count` ends up showing.

use std::{env, rc::Rc};
use tokio::task::LocalSet;
use tracing_subscriber::{fmt, EnvFilter};
use visitor_counter::display::VISITOR_COUNT_ID;
use visitor_counter::scroll::{SCROLL_TARGET_ID, SCROLL_TRIGGER_ID};
use visitor_counter::{
    register_page_tasks, Document, HttpCountSource, MemoryDocument, PageLifecycle,
    VISITOR_COUNTER_URL,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let url = env::args()
        .nth(1)
        .unwrap_or_else(|| VISITOR_COUNTER_URL.to_owned());
    let document = Rc::new(MemoryDocument::with_elements([
        VISITOR_COUNT_ID,
        SCROLL_TRIGGER_ID,
        SCROLL_TARGET_ID,
    ]));
    let lifecycle = PageLifecycle::new();

    let local = LocalSet::new();
    local
        .run_until(async {
            register_page_tasks(
                &lifecycle,
                Rc::clone(&document),
                Rc::new(HttpCountSource::new(url)),
            );
            lifecycle.content_ready();
        })
        .await;
    local.await;

    println!(
        "{}",
        document.text_content(VISITOR_COUNT_ID).unwrap_or_default()
    );
    Ok(())
}
