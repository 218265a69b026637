//! Delete-row handler
//!
//! Reacts to clicks inside a delete trigger placed in a price row:
//! confirm, disable the trigger, `DELETE /prices/{id}`, then drop the row or
//! report the failure and give the trigger back.

use crate::domain::a001_price_item::api::PriceItemApi;
use crate::shared::config::PageConfig;
use crate::shared::dom::{DomNode, PageHost};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No enclosing row or empty id
    MalformedMarkup,
    Declined,
    Deleted { id: String },
    Failed { id: String },
}

pub async fn delete_price_row<H, A>(
    page: &H,
    api: &A,
    config: &PageConfig,
    trigger: &H::Node,
) -> DeleteOutcome
where
    H: PageHost,
    A: PriceItemApi,
{
    let Some(row) = trigger.closest(&config.markers.price_row()) else {
        log::warn!("delete trigger outside of a price row, ignoring");
        return DeleteOutcome::MalformedMarkup;
    };

    let id = match row.attribute(&config.markers.row_id_attribute) {
        Some(id) if !id.is_empty() => id,
        _ => {
            log::warn!("price row without {}, ignoring", config.markers.row_id_attribute);
            return DeleteOutcome::MalformedMarkup;
        }
    };

    if !page.confirm(&config.messages.confirm_delete) {
        log::debug!("deletion of price {} declined", id);
        return DeleteOutcome::Declined;
    }

    trigger.set_disabled(true);

    match api.delete_price(&id).await {
        Ok(resp) => {
            if let Some(error) = resp.error {
                log::debug!("price {} deleted with backend note: {}", id, error);
            }
            row.remove();
            log::debug!("price {} deleted", id);
            DeleteOutcome::Deleted { id }
        }
        Err(e) => {
            log::warn!("failed to delete price {}: {}", id, e);
            page.alert(&config.messages.delete_failed);
            trigger.set_disabled(false);
            DeleteOutcome::Failed { id }
        }
    }
}
