use std::cell::{Cell, RefCell};

type StartupTask = Box<dyn FnOnce() + 'static>;

/// One-shot "content ready" signal with any number of registered tasks.
///
/// Registering never replaces an earlier task. Tasks registered after the
/// signal has fired run immediately, mirroring a page whose document is
/// already past loading.
#[derive(Default)]
pub struct PageLifecycle {
    tasks: RefCell<Vec<StartupTask>>,
    ready: Cell<bool>,
}

impl PageLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn on_content_ready(&self, task: impl FnOnce() + 'static) {
        if self.ready.get() {
            task();
        } else {
            self.tasks.borrow_mut().push(Box::new(task));
        }
    }

    /// Fires the signal. Returns the number of tasks run; zero on every
    /// call after the first.
    pub fn content_ready(&self) -> usize {
        if self.ready.replace(true) {
            return 0;
        }
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        let count = tasks.len();
        for task in tasks {
            task();
        }
        count
    }
}

#[cfg(any(not(target_arch = "wasm32"), feature = "web"))]
mod page {
    use super::PageLifecycle;
    use crate::display::update_visitor_count;
    use crate::document::Document;
    use crate::scroll::bind_scroll_affordance;
    use crate::source::CountSource;
    use std::future::Future;
    use std::rc::Rc;

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn_local(task: impl Future<Output = ()> + 'static) {
        tokio::task::spawn_local(task);
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn_local(task: impl Future<Output = ()> + 'static) {
        wasm_bindgen_futures::spawn_local(task);
    }

    /// Registers the count display and the scroll button on `lifecycle`.
    ///
    /// The display update is spawned onto the local executor so the scroll
    /// binding does not wait on the network. On native targets this must be
    /// called from inside a `tokio::task::LocalSet`.
    pub fn register_page_tasks<D, S>(lifecycle: &PageLifecycle, document: Rc<D>, source: Rc<S>)
    where
        D: Document + 'static,
        S: CountSource + 'static,
    {
        let display_page = Rc::clone(&document);
        lifecycle.on_content_ready(move || {
            spawn_local(async move {
                // Failures are already rendered and logged.
                let _ = update_visitor_count(display_page.as_ref(), source.as_ref()).await;
            });
        });

        lifecycle.on_content_ready(move || {
            bind_scroll_affordance(&document);
        });
    }
}

#[cfg(any(not(target_arch = "wasm32"), feature = "web"))]
pub use page::register_page_tasks;
