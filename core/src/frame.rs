use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Source of display-refresh callbacks.
///
/// Dropping a returned handle before its callback runs must cancel the
/// callback. Dropping it afterwards must be harmless.
pub trait FrameScheduler {
    type Handle;

    fn request(&self, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

struct QueuedFrame {
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnOnce()>,
}

/// Frame source driven by hand, for tests and non-browser hosts.
#[derive(Clone, Default)]
pub struct ManualFrames {
    queue: Rc<RefCell<VecDeque<QueuedFrame>>>,
}

pub struct ManualFrameHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualFrameHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks still waiting for a frame.
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|frame| !frame.cancelled.get())
            .count()
    }

    /// Runs every callback queued before this call and returns how many ran.
    pub fn run_frame(&self) -> usize {
        let due: Vec<QueuedFrame> = self.queue.borrow_mut().drain(..).collect();
        let mut ran = 0;
        for frame in due {
            if frame.cancelled.get() {
                continue;
            }
            (frame.callback)();
            ran += 1;
        }
        ran
    }
}

impl FrameScheduler for ManualFrames {
    type Handle = ManualFrameHandle;

    fn request(&self, callback: Box<dyn FnOnce()>) -> Self::Handle {
        let cancelled = Rc::new(Cell::new(false));
        self.queue.borrow_mut().push_back(QueuedFrame {
            cancelled: Rc::clone(&cancelled),
            callback,
        });
        ManualFrameHandle { cancelled }
    }
}
