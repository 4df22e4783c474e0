use std::cell::RefCell;

use crate::page::SliderPage;

thread_local! {
    static PAGE: RefCell<Option<SliderPage>> = RefCell::new(None);
}

pub(crate) fn install(page: SliderPage) {
    let previous = PAGE.with(|slot| slot.borrow_mut().replace(page));
    drop(previous);
}

pub(crate) fn with_page<R>(action: impl FnOnce(&SliderPage) -> R) -> Option<R> {
    PAGE.with(|slot| slot.borrow().as_ref().map(action))
}

pub(crate) fn clear() -> bool {
    let previous = PAGE.with(|slot| slot.borrow_mut().take());
    previous.is_some()
}
