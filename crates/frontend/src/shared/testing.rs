//! In-memory page and scripted API for handler tests

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use contracts::domain::a001_price_item::dto::DeletePriceResponse;
use contracts::projections::p001_public_prices::dto::PublicPricesResponse;

use crate::domain::a001_price_item::api::PriceItemApi;
use crate::projections::p001_public_prices::api::PublicPricesApi;
use crate::shared::api_utils::PriceApiError;
use crate::shared::dom::{DomNode, Marker, PageHost};

#[derive(Debug, Default)]
struct NodeData {
    parent: Option<usize>,
    attributes: BTreeMap<String, String>,
    text: String,
    inner_html: String,
    removed: bool,
}

#[derive(Default)]
struct Tree {
    nodes: Vec<NodeData>,
    mutations: usize,
}

#[derive(Clone)]
pub struct FakeNode {
    tree: Rc<RefCell<Tree>>,
    index: usize,
}

impl FakeNode {
    fn matches(&self, marker: &Marker) -> bool {
        let tree = self.tree.borrow();
        let attrs = &tree.nodes[self.index].attributes;
        match marker {
            Marker::Class(class) => attrs
                .get("class")
                .map(|c| c.split_whitespace().any(|token| token == class))
                .unwrap_or(false),
            Marker::Attribute(name) => attrs.contains_key(name),
            Marker::Id(id) => attrs.get("id") == Some(id),
        }
    }

    fn parent(&self) -> Option<FakeNode> {
        let parent = self.tree.borrow().nodes[self.index].parent?;
        Some(FakeNode {
            tree: self.tree.clone(),
            index: parent,
        })
    }

    fn mutate(&self, f: impl FnOnce(&mut NodeData)) {
        let mut tree = self.tree.borrow_mut();
        tree.mutations += 1;
        f(&mut tree.nodes[self.index]);
    }

    /// Still reachable from the document root
    pub fn is_attached(&self) -> bool {
        let tree = self.tree.borrow();
        let mut current = Some(self.index);
        while let Some(index) = current {
            if tree.nodes[index].removed {
                return false;
            }
            current = tree.nodes[index].parent;
        }
        true
    }

    pub fn is_hidden(&self) -> bool {
        self.tree.borrow().nodes[self.index]
            .attributes
            .contains_key("hidden")
    }

    pub fn text(&self) -> String {
        self.tree.borrow().nodes[self.index].text.clone()
    }

    pub fn inner_html(&self) -> String {
        self.tree.borrow().nodes[self.index].inner_html.clone()
    }
}

impl DomNode for FakeNode {
    fn closest(&self, marker: &Marker) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.matches(marker) {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.tree.borrow().nodes[self.index]
            .attributes
            .get(name)
            .cloned()
    }

    fn is_disabled(&self) -> bool {
        self.tree.borrow().nodes[self.index]
            .attributes
            .contains_key("disabled")
    }

    fn set_disabled(&self, disabled: bool) {
        self.mutate(|node| {
            if disabled {
                node.attributes.insert("disabled".to_string(), String::new());
            } else {
                node.attributes.remove("disabled");
            }
        });
    }

    fn show(&self) {
        self.mutate(|node| {
            node.attributes.remove("hidden");
        });
    }

    fn set_text(&self, text: &str) {
        self.mutate(|node| node.text = text.to_string());
    }

    fn set_inner_html(&self, html: &str) {
        self.mutate(|node| node.inner_html = html.to_string());
    }

    fn remove(&self) {
        self.mutate(|node| node.removed = true);
    }
}

/// Page with scripted dialogs that records what the handlers did
pub struct FakePage {
    tree: Rc<RefCell<Tree>>,
    pub confirm_answer: Cell<bool>,
    pub confirms: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn new() -> Self {
        let tree = Tree {
            nodes: vec![NodeData::default()],
            mutations: 0,
        };
        Self {
            tree: Rc::new(RefCell::new(tree)),
            confirm_answer: Cell::new(true),
            confirms: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
        }
    }

    pub fn body(&self) -> FakeNode {
        FakeNode {
            tree: self.tree.clone(),
            index: 0,
        }
    }

    /// Appends an element under `parent`; building markup is not a mutation
    pub fn element(&self, parent: &FakeNode, attributes: &[(&str, &str)]) -> FakeNode {
        let mut tree = self.tree.borrow_mut();
        tree.nodes.push(NodeData {
            parent: Some(parent.index),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..NodeData::default()
        });
        FakeNode {
            tree: self.tree.clone(),
            index: tree.nodes.len() - 1,
        }
    }

    pub fn mutations(&self) -> usize {
        self.tree.borrow().mutations
    }
}

impl Default for FakePage {
    fn default() -> Self {
        Self::new()
    }
}

impl PageHost for FakePage {
    type Node = FakeNode;

    fn element_by_id(&self, id: &str) -> Option<FakeNode> {
        let marker = Marker::Id(id.to_string());
        let len = self.tree.borrow().nodes.len();
        (0..len)
            .map(|index| FakeNode {
                tree: self.tree.clone(),
                index,
            })
            .find(|node| node.matches(&marker) && node.is_attached())
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// API answering with preset results and recording every call
#[derive(Default)]
pub struct ScriptedApi {
    pub delete_result: RefCell<Option<Result<DeletePriceResponse, PriceApiError>>>,
    pub public_result: RefCell<Option<Result<PublicPricesResponse, PriceApiError>>>,
    pub calls: RefCell<Vec<String>>,
    /// Control whose disabled state is sampled when a request starts
    pub watched: RefCell<Option<FakeNode>>,
    pub disabled_in_flight: Cell<Option<bool>>,
}

impl ScriptedApi {
    pub fn deleting(result: Result<DeletePriceResponse, PriceApiError>) -> Self {
        let api = Self::default();
        *api.delete_result.borrow_mut() = Some(result);
        api
    }

    pub fn listing(result: Result<PublicPricesResponse, PriceApiError>) -> Self {
        let api = Self::default();
        *api.public_result.borrow_mut() = Some(result);
        api
    }

    pub fn watch(&self, control: &FakeNode) {
        *self.watched.borrow_mut() = Some(control.clone());
    }

    fn record(&self, call: String) {
        if let Some(control) = self.watched.borrow().as_ref() {
            self.disabled_in_flight.set(Some(control.is_disabled()));
        }
        self.calls.borrow_mut().push(call);
    }
}

impl PriceItemApi for ScriptedApi {
    async fn delete_price(&self, id: &str) -> Result<DeletePriceResponse, PriceApiError> {
        self.record(format!("DELETE {}", id));
        self.delete_result
            .borrow_mut()
            .take()
            .unwrap_or(Err(PriceApiError::Network("no scripted response".to_string())))
    }
}

impl PublicPricesApi for ScriptedApi {
    async fn fetch_public_prices(&self) -> Result<PublicPricesResponse, PriceApiError> {
        self.record("GET public".to_string());
        self.public_result
            .borrow_mut()
            .take()
            .unwrap_or(Err(PriceApiError::Network("no scripted response".to_string())))
    }
}
