//! Public-prices loader
//!
//! Fills the collapsible panel with the prices other groups share. Every
//! click starts from an empty container; the trigger stays disabled until the
//! request settles.

use crate::projections::p001_public_prices::api::PublicPricesApi;
use crate::projections::p001_public_prices::ui::render::{render_rows, status_text};
use crate::shared::api_utils::PriceApiError;
use crate::shared::config::PageConfig;
use crate::shared::dom::{DomNode, PageHost};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Panel, status or rows container missing
    MalformedMarkup,
    Loaded { count: usize },
    /// Transport failure, non-2xx status or `ok != true`
    Unavailable,
    /// Unreadable body
    Failed,
}

pub async fn load_public_prices<H, A>(
    page: &H,
    api: &A,
    config: &PageConfig,
    trigger: &H::Node,
) -> LoadOutcome
where
    H: PageHost,
    A: PublicPricesApi,
{
    let markers = &config.markers;
    let messages = &config.messages;

    let (Some(panel), Some(status), Some(rows)) = (
        page.element_by_id(&markers.panel_id),
        page.element_by_id(&markers.status_id),
        page.element_by_id(&markers.rows_id),
    ) else {
        log::warn!(
            "public prices markup incomplete (#{}, #{}, #{}), ignoring",
            markers.panel_id,
            markers.status_id,
            markers.rows_id
        );
        return LoadOutcome::MalformedMarkup;
    };

    panel.show();
    status.set_text(&messages.loading);
    rows.set_inner_html("");
    trigger.set_disabled(true);

    let outcome = match api.fetch_public_prices().await {
        Ok(resp) if resp.ok => {
            let items = resp.into_items();
            status.set_text(&status_text(items.len(), messages));
            rows.set_inner_html(&render_rows(&items, messages));
            log::debug!("public prices loaded: {}", items.len());
            LoadOutcome::Loaded { count: items.len() }
        }
        Ok(_) => {
            log::warn!("public prices service answered ok=false");
            status.set_text(&messages.unavailable);
            LoadOutcome::Unavailable
        }
        Err(PriceApiError::Decode(e)) => {
            log::warn!("public prices response unreadable: {}", e);
            status.set_text(&messages.unavailable);
            page.alert(&messages.load_failed);
            LoadOutcome::Failed
        }
        Err(e) => {
            log::warn!("public prices unavailable: {}", e);
            status.set_text(&messages.unavailable);
            LoadOutcome::Unavailable
        }
    };

    trigger.set_disabled(false);
    outcome
}
