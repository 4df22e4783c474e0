use kurabe_core::{Bounds, Position, SliderConfig, SliderSurface};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("no divider matching `{0}`")]
    MissingDivider(String),
    #[error("no after image matching `{0}`")]
    MissingAfter(String),
    #[error("{0} is not an HTML element")]
    NotHtml(&'static str),
    #[error("invalid selector `{0}`")]
    Selector(String),
}

/// The DOM elements making up one comparison widget.
pub struct DomSurface {
    container: HtmlElement,
    divider: HtmlElement,
    after: HtmlElement,
    dragging_class: String,
}

impl DomSurface {
    pub fn locate(container: &Element, config: &SliderConfig) -> Result<Self, BindError> {
        let divider = find_child(container, &config.divider_selector)?
            .ok_or_else(|| BindError::MissingDivider(config.divider_selector.clone()))?;
        let after = find_child(container, &config.after_selector)?
            .ok_or_else(|| BindError::MissingAfter(config.after_selector.clone()))?;
        Ok(Self {
            container: as_html(container.clone(), "container")?,
            divider: as_html(divider, "divider")?,
            after: as_html(after, "after image")?,
            dragging_class: config.dragging_class.trim().to_string(),
        })
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn divider(&self) -> &HtmlElement {
        &self.divider
    }

    pub fn after(&self) -> &HtmlElement {
        &self.after
    }

    pub(crate) fn set_cursor(&self, cursor: &str) {
        if cursor.is_empty() {
            return;
        }
        let _ = self.container.style().set_property("cursor", cursor);
    }
}

impl SliderSurface for DomSurface {
    fn bounds(&self) -> Option<Bounds> {
        if !self.container.is_connected() {
            return None;
        }
        let rect = self.container.get_bounding_client_rect();
        Some(Bounds::new(rect.left(), rect.width()))
    }

    fn render(&self, position: Position) {
        let _ = self
            .divider
            .style()
            .set_property("left", &position.offset_css());
        let _ = self
            .after
            .style()
            .set_property("clip-path", &position.clip_polygon().to_string());
    }

    fn set_dragging(&self, dragging: bool) {
        if self.dragging_class.is_empty() {
            return;
        }
        let classes = self.container.class_list();
        let _ = if dragging {
            classes.add_1(&self.dragging_class)
        } else {
            classes.remove_1(&self.dragging_class)
        };
    }
}

fn find_child(container: &Element, selector: &str) -> Result<Option<Element>, BindError> {
    container
        .query_selector(selector)
        .map_err(|_| BindError::Selector(selector.to_string()))
}

fn as_html(element: Element, role: &'static str) -> Result<HtmlElement, BindError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| BindError::NotHtml(role))
}
