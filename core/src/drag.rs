#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragInput {
    Press { x: f64, kind: PointerKind },
    Move { x: f64, kind: PointerKind },
    Release,
}

/// Outcome of feeding one input to a [`DragMachine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: DragPhase,
    pub to: DragPhase,
    /// Pointer X the host should render, if any.
    pub update: Option<f64>,
    /// Whether the host must cancel the event's default action.
    pub suppress_default: bool,
}

impl Transition {
    fn stay(phase: DragPhase) -> Self {
        Self {
            from: phase,
            to: phase,
            update: None,
            suppress_default: false,
        }
    }

    pub fn started(&self) -> bool {
        self.from == DragPhase::Idle && self.to == DragPhase::Dragging
    }

    pub fn ended(&self) -> bool {
        self.from == DragPhase::Dragging && self.to == DragPhase::Idle
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DragMachine {
    phase: DragPhase,
}

impl DragMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn accepts_move(&self) -> bool {
        self.is_dragging()
    }

    pub fn handle(&mut self, input: DragInput) -> Transition {
        let from = self.phase;
        match input {
            DragInput::Press { x, .. } => {
                self.phase = DragPhase::Dragging;
                Transition {
                    from,
                    to: self.phase,
                    update: Some(x),
                    suppress_default: true,
                }
            }
            DragInput::Move { x, kind } => {
                if !self.accepts_move() {
                    return Transition::stay(from);
                }
                Transition {
                    from,
                    to: self.phase,
                    update: Some(x),
                    suppress_default: kind == PointerKind::Touch,
                }
            }
            DragInput::Release => {
                self.phase = DragPhase::Idle;
                Transition {
                    from,
                    to: self.phase,
                    update: None,
                    suppress_default: false,
                }
            }
        }
    }
}
