//! Non-interactive checkout.

use anyhow::{Context as _, Result};
use memshop_commerce::checkout::{ContactField, OrderConfirmation};
use memshop_commerce::{CommerceError, ProductId, Storefront};
use memshop_observability::{SessionEvent, SessionJournal};

use super::{cart_line_label, save_journal, OrderArgs};
use crate::context::Context;
use crate::output::ConsoleNotifier;

/// Run the order command.
pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut shop = Storefront::new(catalog, ConsoleNotifier::new(ctx.output.clone()));
    let mut journal = SessionJournal::new(shop.session_id());

    for &raw in &args.items {
        let id = ProductId::new(raw);
        let quantity = shop
            .add_to_cart(id)
            .with_context(|| format!("Cannot add item {}", raw))?;
        journal.record_added(id, quantity);
    }

    shop.open_checkout()?;
    journal.record(SessionEvent::CheckoutOpened {
        items: shop.total_items(),
    });

    shop.update_field(ContactField::Name, args.name);
    shop.update_field(ContactField::Phone, args.phone);
    if let Some(email) = args.email {
        shop.update_field(ContactField::Email, email);
    }

    let result = shop.submit_checkout();
    match &result {
        Ok(order) => {
            journal.record_order(order);
            print_order(order, ctx);
        }
        Err(CommerceError::Validation { missing }) => journal.record_rejected(missing),
        Err(_) => {}
    }

    if let Some(path) = &args.journal {
        save_journal(journal, path, ctx)?;
    }

    result.map(|_| ()).map_err(Into::into)
}

/// Print an order confirmation.
pub fn print_order(order: &OrderConfirmation, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(order);
        return;
    }

    ctx.output.header(&format!("Заказ {}", order.id));
    ctx.output.kv(ContactField::Name.as_str(), &order.contact.name);
    ctx.output.kv(ContactField::Phone.as_str(), &order.contact.phone);
    if let Some(email) = &order.contact.email {
        ctx.output.kv(ContactField::Email.as_str(), email);
    }

    for line in &order.lines {
        ctx.output.list_item(&cart_line_label(line));
    }
    ctx.output.kv(
        "total",
        &format!("{} ({} шт.)", order.total_price.display(), order.total_items),
    );
}
