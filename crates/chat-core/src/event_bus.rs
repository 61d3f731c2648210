//! Event queue between the chat controller and the UI.
//!
//! The controller emits from `spawn_local` tasks that finish between frames.
//! An optional waker fires on every emit so the UI repaints without polling;
//! the next frame drains the queue in emission order.

use std::cell::RefCell;
use std::rc::Rc;

use chat_types::event::ChatEvent;

type Waker = Rc<dyn Fn()>;

#[derive(Default)]
struct Inner {
    queue: RefCell<Vec<ChatEvent>>,
    waker: RefCell<Option<Waker>>,
}

/// Shared handle; clones see the same queue and waker.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<Inner>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the callback run after each emit, replacing any previous one
    pub fn set_waker(&self, waker: impl Fn() + 'static) {
        *self.inner.waker.borrow_mut() = Some(Rc::new(waker));
    }

    pub fn emit(&self, event: ChatEvent) {
        log::trace!("emit {:?}", event);
        self.inner.queue.borrow_mut().push(event);
        // Cloned out so the waker may touch the bus
        let waker = self.inner.waker.borrow().clone();
        if let Some(wake) = waker {
            wake();
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.queue.borrow().is_empty()
    }

    /// Take every queued event, oldest first
    pub fn drain(&self) -> Vec<ChatEvent> {
        std::mem::take(&mut *self.inner.queue.borrow_mut())
    }
}
