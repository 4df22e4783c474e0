use std::cell::RefCell;
use std::rc::Rc;

use kurabe_core::{Coalescer, ManualFrames};

fn recorder() -> Rc<RefCell<Vec<(u8, i32)>>> {
    Rc::new(RefCell::new(Vec::new()))
}

#[test]
fn rapid_requests_collapse_to_last() {
    let frames = ManualFrames::new();
    let coalescer = Coalescer::new(frames.clone());
    let seen = recorder();
    for value in [1, 2, 3, 4] {
        let seen = Rc::clone(&seen);
        coalescer.schedule(0u8, move || seen.borrow_mut().push((0, value)));
    }
    assert_eq!(frames.pending(), 1);
    assert!(coalescer.is_pending(&0));
    assert_eq!(frames.run_frame(), 1);
    assert_eq!(*seen.borrow(), vec![(0, 4)]);
    assert!(!coalescer.is_pending(&0));
    assert_eq!(coalescer.pending_count(), 0);
}

#[test]
fn keys_do_not_cancel_each_other() {
    let frames = ManualFrames::new();
    let coalescer = Coalescer::new(frames.clone());
    let seen = recorder();
    for (key, value) in [(1u8, 10), (2, 20), (1, 11)] {
        let seen = Rc::clone(&seen);
        coalescer.schedule(key, move || seen.borrow_mut().push((key, value)));
    }
    assert_eq!(frames.run_frame(), 2);
    let mut applied = seen.borrow().clone();
    applied.sort();
    assert_eq!(applied, vec![(1, 11), (2, 20)]);
}

#[test]
fn cancel_drops_pending_callback() {
    let frames = ManualFrames::new();
    let coalescer = Coalescer::new(frames.clone());
    let seen = recorder();
    let sink = Rc::clone(&seen);
    coalescer.schedule(3u8, move || sink.borrow_mut().push((3, 0)));
    assert!(coalescer.cancel(&3));
    assert!(!coalescer.cancel(&3));
    assert_eq!(frames.run_frame(), 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn request_made_inside_a_frame_waits_for_the_next() {
    let frames = ManualFrames::new();
    let coalescer = Rc::new(Coalescer::new(frames.clone()));
    let seen = recorder();
    let inner = Rc::clone(&coalescer);
    let sink = Rc::clone(&seen);
    coalescer.schedule(0u8, move || {
        sink.borrow_mut().push((0, 1));
        let sink = Rc::clone(&sink);
        inner.schedule(0, move || sink.borrow_mut().push((0, 2)));
    });
    assert_eq!(frames.run_frame(), 1);
    assert!(coalescer.is_pending(&0));
    assert_eq!(frames.run_frame(), 1);
    assert_eq!(*seen.borrow(), vec![(0, 1), (0, 2)]);
}

#[test]
fn dropping_coalescer_cancels_everything() {
    let frames = ManualFrames::new();
    let seen = recorder();
    {
        let coalescer = Coalescer::new(frames.clone());
        let sink = Rc::clone(&seen);
        coalescer.schedule(0u8, move || sink.borrow_mut().push((0, 0)));
    }
    assert_eq!(frames.pending(), 0);
    assert_eq!(frames.run_frame(), 0);
    assert!(seen.borrow().is_empty());
}
