use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::coalesce::Coalescer;
use crate::drag::{DragInput, DragMachine, DragPhase, Transition};
use crate::frame::FrameScheduler;
use crate::geometry::{compute_position, Bounds, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliderId(pub u32);

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slider#{}", self.0)
    }
}

/// The visual side of one comparison widget.
pub trait SliderSurface {
    /// Current container box, or `None` once the container has left the page.
    fn bounds(&self) -> Option<Bounds>;

    fn render(&self, position: Position);

    fn set_dragging(&self, _dragging: bool) {}
}

/// Binds one container's drag input to its divider and clip region.
pub struct DividerController<T, S: FrameScheduler> {
    id: SliderId,
    surface: Rc<T>,
    frames: Rc<Coalescer<SliderId, S>>,
    machine: Cell<DragMachine>,
    rendered: Rc<Cell<Option<Position>>>,
}

impl<T, S> DividerController<T, S>
where
    T: SliderSurface + 'static,
    S: FrameScheduler,
    S::Handle: 'static,
{
    pub fn new(id: SliderId, surface: Rc<T>, frames: Rc<Coalescer<SliderId, S>>) -> Self {
        Self {
            id,
            surface,
            frames,
            machine: Cell::new(DragMachine::new()),
            rendered: Rc::new(Cell::new(None)),
        }
    }

    pub fn id(&self) -> SliderId {
        self.id
    }

    pub fn surface(&self) -> &Rc<T> {
        &self.surface
    }

    pub fn phase(&self) -> DragPhase {
        self.machine.get().phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.machine.get().is_dragging()
    }

    /// Last position written to the surface.
    pub fn position(&self) -> Option<Position> {
        self.rendered.get()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frames.is_pending(&self.id)
    }

    /// Reads the container box fresh; `None` when the container is gone.
    pub fn compute_position(&self, pointer_x: f64) -> Option<Position> {
        self.surface
            .bounds()
            .map(|bounds| compute_position(pointer_x, bounds))
    }

    /// Renders `pointer_x` on the next frame, replacing any update still pending.
    pub fn request_update(&self, pointer_x: f64) {
        let surface = Rc::clone(&self.surface);
        let rendered = Rc::clone(&self.rendered);
        self.frames.schedule(self.id, move || {
            let Some(bounds) = surface.bounds() else {
                return;
            };
            let position = compute_position(pointer_x, bounds);
            surface.render(position);
            rendered.set(Some(position));
        });
    }

    /// Renders a fixed position on the next frame.
    pub fn show(&self, position: Position) {
        let surface = Rc::clone(&self.surface);
        let rendered = Rc::clone(&self.rendered);
        self.frames.schedule(self.id, move || {
            if surface.bounds().is_none() {
                return;
            }
            surface.render(position);
            rendered.set(Some(position));
        });
    }

    pub fn handle(&self, input: DragInput) -> Transition {
        let mut machine = self.machine.get();
        let transition = machine.handle(input);
        self.machine.set(machine);
        if transition.started() {
            self.surface.set_dragging(true);
        } else if transition.ended() {
            self.surface.set_dragging(false);
        }
        if let Some(x) = transition.update {
            self.request_update(x);
        }
        transition
    }

    pub fn cancel_pending(&self) -> bool {
        self.frames.cancel(&self.id)
    }
}
