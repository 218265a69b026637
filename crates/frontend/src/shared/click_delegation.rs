//! Single document-level click subscription
//!
//! Rows are rendered (and removed) by the server template and by the handlers
//! themselves, so nothing is bound per element: every click is matched against
//! the trigger markers by ancestor lookup.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::domain::a001_price_item::api::PriceItemApi;
use crate::domain::a001_price_item::ui::delete_row::{delete_price_row, DeleteOutcome};
use crate::projections::p001_public_prices::api::PublicPricesApi;
use crate::projections::p001_public_prices::ui::loader::{load_public_prices, LoadOutcome};
use crate::shared::api_utils::HttpPricesApi;
use crate::shared::config::PageConfig;
use crate::shared::dom::{DomNode, PageHost, WebNode, WebPage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not inside any trigger
    Ignored,
    /// Inside a trigger whose request is still in flight
    Busy,
    Delete(DeleteOutcome),
    Load(LoadOutcome),
}

pub struct PriceAdmin<H, A> {
    page: H,
    api: A,
    config: PageConfig,
}

impl<H, A> PriceAdmin<H, A>
where
    H: PageHost,
    A: PriceItemApi + PublicPricesApi,
{
    pub fn new(page: H, api: A, config: PageConfig) -> Self {
        Self { page, api, config }
    }

    pub fn page(&self) -> &H {
        &self.page
    }

    pub async fn handle_click(&self, target: &H::Node) -> ClickOutcome {
        let markers = &self.config.markers;

        if let Some(trigger) = target.closest(&markers.delete_trigger()) {
            if trigger.is_disabled() {
                return ClickOutcome::Busy;
            }
            let outcome = delete_price_row(&self.page, &self.api, &self.config, &trigger).await;
            return ClickOutcome::Delete(outcome);
        }

        if let Some(trigger) = target.closest(&markers.load_trigger()) {
            if trigger.is_disabled() {
                return ClickOutcome::Busy;
            }
            let outcome = load_public_prices(&self.page, &self.api, &self.config, &trigger).await;
            return ClickOutcome::Load(outcome);
        }

        ClickOutcome::Ignored
    }
}

/// Sets up the task executor behind `leptos::task::spawn_local`.
/// Nothing is mounted on this page, so `leptos::mount` never does it for us.
/// Returns `false` when an executor was already set.
pub fn init_executor() -> bool {
    match any_spawner::Executor::init_wasm_bindgen() {
        Ok(()) => true,
        Err(e) => {
            log::debug!("task executor already set: {:?}", e);
            false
        }
    }
}

/// Subscribes the price handlers to clicks on the current document
pub fn install(config: PageConfig) -> Result<(), JsValue> {
    let page = WebPage::new().ok_or_else(|| JsValue::from_str("no document"))?;
    let document = page.document().clone();
    let api = HttpPricesApi::new(config.endpoints.clone());
    let admin = Rc::new(PriceAdmin::new(page, api, config));

    let on_click = Closure::wrap(Box::new(move |e: web_sys::Event| {
        let Some(target) = WebNode::from_event(&e) else {
            return;
        };
        let admin = admin.clone();
        leptos::task::spawn_local(async move {
            let outcome = admin.handle_click(&target).await;
            if outcome != ClickOutcome::Ignored {
                log::debug!("click handled: {:?}", outcome);
            }
        });
    }) as Box<dyn FnMut(web_sys::Event)>);

    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    log::info!("price admin click handlers installed");
    Ok(())
}
