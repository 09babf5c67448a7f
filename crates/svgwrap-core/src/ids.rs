//! Element ID generation and automatic tab indexing.
//!
//! Every element created through [`Node::create`](crate::Node::create) receives an
//! `id` attribute from the active [`IdGenerator`] and, while auto tab indexing is on,
//! a `tabindex` from a running counter. Element handles are single-threaded, so the
//! registry is kept per thread.

use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

/// Produces element IDs from tag names.
pub trait IdGenerator {
    /// Return the next ID for an element with the given tag.
    fn next_id(&mut self, tag: &str) -> String;
}

/// Default generator: `"<tag>-<n>"`, with an independent counter per tag starting at 0.
#[derive(Debug, Default, Clone)]
pub struct TagCounter {
    counts: HashMap<String, u64>,
}

impl TagCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TagCounter {
    fn next_id(&mut self, tag: &str) -> String {
        let count = self.counts.entry(tag.to_string()).or_insert(0);
        let id = format!("{tag}-{count}");
        *count += 1;
        id
    }
}

/// Generator producing `"<tag>-<uuid v4>"` IDs that are unique across documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, tag: &str) -> String {
        format!("{tag}-{}", Uuid::new_v4())
    }
}

impl<F> IdGenerator for F
where
    F: FnMut(&str) -> String,
{
    fn next_id(&mut self, tag: &str) -> String {
        self(tag)
    }
}

struct Registry {
    /// Taken out while it runs, so a generator may create elements itself.
    generator: Option<Box<dyn IdGenerator>>,
    /// Serves IDs requested from inside a running generator.
    nested: TagCounter,
    auto_tab_index: bool,
    next_tab_index: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            generator: Some(Box::new(TagCounter::new())),
            nested: TagCounter::new(),
            auto_tab_index: true,
            next_tab_index: 0,
        }
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

/// Replace the ID generator, optionally discarding its first ID.
pub fn set_id_generator(generator: impl IdGenerator + 'static, skip_first: bool) {
    let mut generator: Box<dyn IdGenerator> = Box::new(generator);
    if skip_first {
        generator.next_id("");
    }
    REGISTRY.with(|registry| registry.borrow_mut().generator = Some(generator));
}

/// Check if automatic tabindex generation is enabled.
pub fn is_auto_tab_indexing() -> bool {
    REGISTRY.with(|registry| registry.borrow().auto_tab_index)
}

/// Toggle automatic tabindex generation and return the new state.
pub fn toggle_auto_tab_indexing() -> bool {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        registry.auto_tab_index = !registry.auto_tab_index;
        registry.auto_tab_index
    })
}

/// Restore the default generator, counters and tab indexing for this thread.
pub fn reset() {
    REGISTRY.with(|registry| *registry.borrow_mut() = Registry::default());
}

pub(crate) fn next_id(tag: &str) -> String {
    let taken = REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        match registry.generator.take() {
            Some(generator) => Ok(generator),
            None => Err(registry.nested.next_id(tag)),
        }
    });
    let mut generator = match taken {
        Ok(generator) => generator,
        Err(id) => {
            log::debug!("Nested ID request for <{tag}> served by the fallback counter");
            return id;
        }
    };
    let id = generator.next_id(tag);
    REGISTRY.with(|registry| {
        // Keep a generator installed while this one was running.
        registry.borrow_mut().generator.get_or_insert(generator);
    });
    id
}

/// The next tab index, or `None` when auto tab indexing is off.
pub(crate) fn next_tab_index() -> Option<u64> {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        if !registry.auto_tab_index {
            return None;
        }
        let index = registry.next_tab_index;
        registry.next_tab_index += 1;
        Some(index)
    })
}
