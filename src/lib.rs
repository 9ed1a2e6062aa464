pub mod display;
pub mod document;
pub mod lifecycle;
pub mod scroll;
pub mod source;

#[cfg(not(target_arch = "wasm32"))]
pub mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod handlers;
#[cfg(not(target_arch = "wasm32"))]
pub mod models;
#[cfg(not(target_arch = "wasm32"))]
pub mod state;
#[cfg(not(target_arch = "wasm32"))]
pub mod storage;
#[cfg(not(target_arch = "wasm32"))]
pub mod ui;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

#[cfg(test)]
mod test_support;

pub use display::update_visitor_count;
pub use document::{Document, MemoryDocument};
pub use lifecycle::PageLifecycle;
#[cfg(any(not(target_arch = "wasm32"), feature = "web"))]
pub use lifecycle::register_page_tasks;
pub use scroll::bind_scroll_affordance;
pub use source::{CountSource, HttpCountSource, LoadError, VISITOR_COUNTER_URL};

#[cfg(not(target_arch = "wasm32"))]
pub use app::router;
#[cfg(not(target_arch = "wasm32"))]
pub use state::AppState;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::{load_data, resolve_data_path, resolve_pkg_dir};
