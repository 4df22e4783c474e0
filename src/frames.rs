use gloo::render::{request_animation_frame, AnimationFrame};
use kurabe_core::FrameScheduler;

/// Frame source backed by `requestAnimationFrame`.
///
/// Dropping the returned [`AnimationFrame`] cancels the callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    type Handle = AnimationFrame;

    fn request(&self, callback: Box<dyn FnOnce()>) -> AnimationFrame {
        request_animation_frame(move |_timestamp| callback())
    }
}
