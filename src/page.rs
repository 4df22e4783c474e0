use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use kurabe_core::{
    parse_position_attr, Coalescer, DividerController, SliderConfig, SliderId, SliderSurface,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

use crate::dom::{BindError, DomSurface};
use crate::frames::RafScheduler;
use crate::input::{self, MOVE_EVENTS, PRESS_EVENTS, RELEASE_EVENTS};

pub type DomController = DividerController<DomSurface, RafScheduler>;

/// Marks a container that already has a controller.
pub const BOUND_ATTR: &str = "data-kurabe-bound";
/// Optional per-container starting position, in percent.
pub const POSITION_ATTR: &str = "data-position";

const ACTIVE_OPTIONS: EventListenerOptions = EventListenerOptions {
    phase: EventListenerPhase::Bubble,
    passive: false,
};

struct BoundSlider {
    controller: Rc<DomController>,
    _listeners: Vec<EventListener>,
}

impl Drop for BoundSlider {
    fn drop(&mut self) {
        let surface = self.controller.surface();
        let _ = surface.container().remove_attribute(BOUND_ATTR);
        if self.controller.is_dragging() {
            surface.set_dragging(false);
        }
    }
}

type Sliders = Rc<RefCell<Vec<BoundSlider>>>;

/// Every slider bound under one scope, plus the document listeners that
/// drive them.
///
/// Move and release are observed once per page and offered to every
/// controller; each controller's own state decides whether it reacts.
pub struct SliderPage {
    scope: Element,
    config: SliderConfig,
    frames: Rc<Coalescer<SliderId, RafScheduler>>,
    sliders: Sliders,
    next_id: Cell<u32>,
    _document_listeners: Vec<EventListener>,
}

impl SliderPage {
    pub fn mount(scope: &Element, config: SliderConfig) -> Self {
        let sliders: Sliders = Rc::new(RefCell::new(Vec::new()));
        let document_listeners = match scope.owner_document() {
            Some(document) => install_document_listeners(&document, &sliders),
            None => Vec::new(),
        };
        let page = Self {
            scope: scope.clone(),
            config,
            frames: Rc::new(Coalescer::new(RafScheduler)),
            sliders,
            next_id: Cell::new(0),
            _document_listeners: document_listeners,
        };
        let bound = page.rescan();
        console::log!("kurabe: bound sliders", bound as u32);
        page
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Binds containers that appeared since the last scan. Returns how many
    /// were newly bound.
    pub fn rescan(&self) -> usize {
        let list = match self.scope.query_selector_all(&self.config.container_selector) {
            Ok(list) => list,
            Err(_) => {
                console::warn!(
                    "kurabe: invalid container selector",
                    self.config.container_selector.clone()
                );
                return 0;
            }
        };
        let mut bound = 0;
        for index in 0..list.length() {
            let Some(node) = list.item(index) else {
                continue;
            };
            let Ok(container) = node.dyn_into::<Element>() else {
                continue;
            };
            if container.has_attribute(BOUND_ATTR) {
                continue;
            }
            match self.bind(&container) {
                Ok(slider) => {
                    self.sliders.borrow_mut().push(slider);
                    bound += 1;
                }
                Err(err) => {
                    console::warn!("kurabe: skipping container", err.to_string());
                }
            }
        }
        bound
    }

    pub fn len(&self) -> usize {
        self.sliders.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn controllers(&self) -> Vec<Rc<DomController>> {
        self.sliders
            .borrow()
            .iter()
            .map(|slider| Rc::clone(&slider.controller))
            .collect()
    }

    pub fn controller_for(&self, container: &Element) -> Option<Rc<DomController>> {
        self.sliders
            .borrow()
            .iter()
            .find(|slider| {
                let bound: &Element = slider.controller.surface().container();
                bound == container
            })
            .map(|slider| Rc::clone(&slider.controller))
    }

    fn bind(&self, container: &Element) -> Result<BoundSlider, BindError> {
        let surface = Rc::new(DomSurface::locate(container, &self.config)?);
        surface.set_cursor(&self.config.cursor);

        let id = SliderId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        let controller = Rc::new(DividerController::new(
            id,
            surface,
            Rc::clone(&self.frames),
        ));

        let mut listeners = Vec::new();
        for event_type in PRESS_EVENTS {
            let controller = Rc::clone(&controller);
            listeners.push(EventListener::new_with_options(
                container,
                event_type,
                ACTIVE_OPTIONS,
                move |event: &Event| {
                    let Some(input) = input::drag_input(event) else {
                        return;
                    };
                    if controller.handle(input).suppress_default {
                        event.prevent_default();
                    }
                },
            ));
        }
        listeners.push(EventListener::new_with_options(
            container,
            "dragstart",
            ACTIVE_OPTIONS,
            |event: &Event| event.prevent_default(),
        ));

        let initial = container
            .get_attribute(POSITION_ATTR)
            .and_then(|raw| parse_position_attr(&raw))
            .or_else(|| self.config.initial_position());
        if let Some(position) = initial {
            controller.show(position);
        }

        let _ = container.set_attribute(BOUND_ATTR, "");
        Ok(BoundSlider {
            controller,
            _listeners: listeners,
        })
    }
}

impl Drop for SliderPage {
    fn drop(&mut self) {
        let sliders: Vec<BoundSlider> = self.sliders.borrow_mut().drain(..).collect();
        drop(sliders);
        self.frames.cancel_all();
    }
}

fn install_document_listeners(document: &EventTarget, sliders: &Sliders) -> Vec<EventListener> {
    MOVE_EVENTS
        .into_iter()
        .chain(RELEASE_EVENTS)
        .map(|event_type| {
            let sliders = Rc::clone(sliders);
            EventListener::new_with_options(
                document,
                event_type,
                ACTIVE_OPTIONS,
                move |event: &Event| dispatch(&sliders, event),
            )
        })
        .collect()
}

fn dispatch(sliders: &Sliders, event: &Event) {
    let Some(input) = input::drag_input(event) else {
        return;
    };
    let controllers: Vec<Rc<DomController>> = sliders
        .borrow()
        .iter()
        .map(|slider| Rc::clone(&slider.controller))
        .collect();
    let mut suppress = false;
    for controller in controllers {
        suppress |= controller.handle(input).suppress_default;
    }
    if suppress {
        event.prevent_default();
    }
}
