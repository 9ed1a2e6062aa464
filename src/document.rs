use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Click handler attached to a page element.
pub type ClickListener = Box<dyn Fn() + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollIntoViewOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl ScrollIntoViewOptions {
    pub fn smooth_center() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Center,
        }
    }
}

/// The slice of a page the counter touches: elements addressed by id.
///
/// Every operation reports whether the element existed, so callers can
/// treat a missing element as a no-op instead of an error.
pub trait Document {
    fn has_element(&self, id: &str) -> bool;

    fn text_content(&self, id: &str) -> Option<String>;

    fn set_text_content(&self, id: &str, text: &str) -> bool;

    fn scroll_into_view(&self, id: &str, options: ScrollIntoViewOptions) -> bool;

    fn add_click_listener(&self, id: &str, listener: ClickListener) -> bool;
}

#[derive(Default)]
struct Element {
    text: String,
    scrolls: Vec<ScrollIntoViewOptions>,
    listeners: Vec<Rc<dyn Fn()>>,
}

/// In-process page used by the headless client and the tests.
#[derive(Default)]
pub struct MemoryDocument {
    elements: RefCell<BTreeMap<String, Element>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let document = Self::new();
        for id in ids {
            document.insert_element(id);
        }
        document
    }

    pub fn insert_element(&self, id: impl Into<String>) {
        self.elements.borrow_mut().entry(id.into()).or_default();
    }

    pub fn scroll_requests(&self, id: &str) -> Vec<ScrollIntoViewOptions> {
        self.elements
            .borrow()
            .get(id)
            .map(|element| element.scrolls.clone())
            .unwrap_or_default()
    }

    pub fn listener_count(&self, id: &str) -> usize {
        self.elements
            .borrow()
            .get(id)
            .map_or(0, |element| element.listeners.len())
    }

    /// Dispatches a click to `id` and returns how many listeners ran.
    pub fn click(&self, id: &str) -> usize {
        // Listeners may call back into the document, so release the borrow first.
        let listeners = self
            .elements
            .borrow()
            .get(id)
            .map(|element| element.listeners.clone())
            .unwrap_or_default();
        for listener in &listeners {
            listener();
        }
        listeners.len()
    }
}

impl Document for MemoryDocument {
    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(id)
            .map(|element| element.text.clone())
    }

    fn set_text_content(&self, id: &str, text: &str) -> bool {
        match self.elements.borrow_mut().get_mut(id) {
            Some(element) => {
                element.text = text.to_owned();
                true
            }
            None => false,
        }
    }

    fn scroll_into_view(&self, id: &str, options: ScrollIntoViewOptions) -> bool {
        match self.elements.borrow_mut().get_mut(id) {
            Some(element) => {
                element.scrolls.push(options);
                true
            }
            None => false,
        }
    }

    fn add_click_listener(&self, id: &str, listener: ClickListener) -> bool {
        match self.elements.borrow_mut().get_mut(id) {
            Some(element) => {
                element.listeners.push(Rc::from(listener));
                true
            }
            None => false,
        }
    }
}
