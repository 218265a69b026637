use contracts::projections::p001_public_prices::dto::PublicPriceItem;

use crate::shared::config::Messages;
use crate::shared::html::escape_html;
use crate::shared::number_format::format_price;

pub fn status_text(count: usize, messages: &Messages) -> String {
    if count == 0 {
        messages.empty.clone()
    } else {
        messages.item_count.replace("{n}", &count.to_string())
    }
}

/// Raw markup for the rows container. Labels are untrusted and always escaped.
pub fn render_rows(items: &[PublicPriceItem], messages: &Messages) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<tr class="public-price"><td class="public-price__article">{}</td><td class="public-price__price">{}</td></tr>"#,
                escape_html(&item.article),
                escape_html(&format_price(item.prix, &messages.currency)),
            )
        })
        .collect()
}
