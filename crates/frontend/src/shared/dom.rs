//! Thin DOM seam used by the page handlers
//!
//! Handlers only talk to [`PageHost`] and [`DomNode`]. In the browser these are
//! backed by `web-sys` ([`WebPage`], [`WebNode`]); tests use an in-memory page.

use wasm_bindgen::JsCast;

/// A DOM marker the page template provides
///
/// Values go into CSS selectors unescaped and must be valid CSS identifiers
/// (see [`is_css_identifier`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// `class="..."` contains the token
    Class(String),
    /// Element carries the attribute (any value)
    Attribute(String),
    /// `id="..."`
    Id(String),
}

impl Marker {
    /// CSS selector matching the marker
    pub fn css(&self) -> String {
        match self {
            Marker::Class(class) => format!(".{}", class),
            Marker::Attribute(name) => format!("[{}]", name),
            Marker::Id(id) => format!("#{}", id),
        }
    }
}

/// Letters, digits, `-`, `_` or non-ASCII; no digit first (also after a leading `-`)
pub fn is_css_identifier(value: &str) -> bool {
    let rest = value.strip_prefix('-').unwrap_or(value);
    let Some(first) = rest.chars().next() else {
        return false;
    };
    if first.is_ascii_digit() {
        return false;
    }
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii())
}

pub trait DomNode: Clone {
    /// Self or nearest ancestor matching the marker
    fn closest(&self, marker: &Marker) -> Option<Self>;
    fn attribute(&self, name: &str) -> Option<String>;
    /// Single-flight flag of a trigger, set by [`DomNode::set_disabled`]
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
    /// Makes a hidden or collapsed element visible
    fn show(&self);
    fn set_text(&self, text: &str);
    fn set_inner_html(&self, html: &str);
    /// Detaches the node from the document
    fn remove(&self);
}

pub trait PageHost {
    type Node: DomNode;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// Blocking confirmation dialog; `false` when declined or unavailable
    fn confirm(&self, message: &str) -> bool;
    /// Blocking notification
    fn alert(&self, message: &str);
}

#[derive(Clone)]
pub struct WebNode(web_sys::Element);

impl From<web_sys::Element> for WebNode {
    fn from(element: web_sys::Element) -> Self {
        Self(element)
    }
}

impl WebNode {
    /// Node for an event target; `None` for non-element targets
    pub fn from_event(event: &web_sys::Event) -> Option<Self> {
        event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .map(Self)
    }
}

impl DomNode for WebNode {
    fn closest(&self, marker: &Marker) -> Option<Self> {
        let selector = marker.css();
        match self.0.closest(&selector) {
            Ok(found) => found.map(Self),
            Err(e) => {
                log::warn!("invalid marker selector {}: {:?}", selector, e);
                None
            }
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn is_disabled(&self) -> bool {
        self.0.has_attribute("disabled")
    }

    fn set_disabled(&self, disabled: bool) {
        // the attribute reflects to the `disabled` property of form controls
        let _ = if disabled {
            self.0.set_attribute("disabled", "")
        } else {
            self.0.remove_attribute("disabled")
        };
    }

    fn show(&self) {
        let _ = self.0.remove_attribute("hidden");
        if self.0.tag_name().eq_ignore_ascii_case("details") {
            let _ = self.0.set_attribute("open", "");
        }
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn remove(&self) {
        self.0.remove();
    }
}

pub struct WebPage {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebPage {
    /// `None` outside a browser window
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

impl PageHost for WebPage {
    type Node = WebNode;

    fn element_by_id(&self, id: &str) -> Option<WebNode> {
        self.document.get_element_by_id(id).map(WebNode)
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}
