//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use memshop_commerce::cart::CartSummary;
use memshop_commerce::catalog::{Catalog, Product};
use memshop_commerce::checkout::ContactField;
use memshop_commerce::{CommerceError, ProductId, Storefront};
use memshop_observability::{SessionEvent, SessionJournal};

use super::order::print_order;
use super::{cart_line_label, save_journal, ShopArgs};
use crate::context::Context;
use crate::output::ConsoleNotifier;

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The interactive shop has no JSON mode; use `memshop order` instead");
    }

    let catalog = ctx.catalog()?;
    let mut session = Session::new(catalog, ctx);

    ctx.output.header(&ctx.config.shop.name);
    loop {
        match session.main_menu()? {
            MainAction::Browse => session.browse()?,
            MainAction::Cart => session.cart()?,
            MainAction::Checkout => session.checkout()?,
            MainAction::Quit => break,
        }
    }

    if let Some(path) = &args.journal {
        save_journal(session.journal, path, ctx)?;
    }
    Ok(())
}

enum MainAction {
    Browse,
    Cart,
    Checkout,
    Quit,
}

enum LineAction {
    Increment,
    Decrement,
    SetQuantity,
    Remove,
    Back,
}

struct Session<'a> {
    shop: Storefront<ConsoleNotifier>,
    journal: SessionJournal,
    theme: ColorfulTheme,
    ctx: &'a Context,
}

impl<'a> Session<'a> {
    fn new(catalog: Catalog, ctx: &'a Context) -> Self {
        let shop = Storefront::new(catalog, ConsoleNotifier::new(ctx.output.clone()));
        let journal = SessionJournal::new(shop.session_id());
        Self {
            shop,
            journal,
            theme: ColorfulTheme::default(),
            ctx,
        }
    }

    fn main_menu(&self) -> Result<MainAction> {
        let summary = self.shop.summary()?;
        let items = [
            "В каталог".to_string(),
            cart_menu_label(&summary),
            "Оформить заказ".to_string(),
            "Выйти".to_string(),
        ];

        let choice = Select::with_theme(&self.theme)
            .with_prompt(self.ctx.config.shop.name.as_str())
            .items(&items)
            .default(0)
            .interact_opt()?;

        Ok(match choice {
            Some(0) => MainAction::Browse,
            Some(1) => MainAction::Cart,
            Some(2) => MainAction::Checkout,
            _ => MainAction::Quit,
        })
    }

    /// Pick products until the shopper backs out.
    fn browse(&mut self) -> Result<()> {
        let products: Vec<Product> = self
            .shop
            .catalog()
            .sections()
            .into_iter()
            .flat_map(|section| section.products.into_iter().cloned())
            .collect();
        let labels: Vec<String> = products.iter().map(product_label).collect();

        let mut cursor = 0;
        loop {
            let choice = Select::with_theme(&self.theme)
                .with_prompt("Добавить в корзину (Esc — назад)")
                .items(&labels)
                .default(cursor)
                .interact_opt()?;

            let Some(index) = choice else {
                return Ok(());
            };
            cursor = index;

            let id = products[index].id;
            let quantity = self.shop.add_to_cart(id)?;
            self.journal.record_added(id, quantity);
        }
    }

    /// Show the cart drawer and edit lines until the shopper backs out.
    fn cart(&mut self) -> Result<()> {
        loop {
            let summary = self.shop.summary()?;
            if summary.is_empty() {
                self.ctx.output.info("Корзина пуста");
                return Ok(());
            }

            let mut labels: Vec<String> = summary.lines.iter().map(cart_line_label).collect();
            labels.push(format!("Итого: {}", summary.total_price.display()));

            let choice = Select::with_theme(&self.theme)
                .with_prompt("Корзина (Esc — назад)")
                .items(&labels)
                .default(0)
                .interact_opt()?;

            match choice {
                Some(index) if index < summary.lines.len() => {
                    self.edit_line(summary.lines[index].product_id)?;
                }
                Some(_) => {}
                None => return Ok(()),
            }
        }
    }

    fn edit_line(&mut self, id: ProductId) -> Result<()> {
        let items = ["+1", "−1", "Указать количество", "Удалить", "Назад"];
        let choice = Select::with_theme(&self.theme)
            .items(&items)
            .default(0)
            .interact_opt()?;

        let action = match choice {
            Some(0) => LineAction::Increment,
            Some(1) => LineAction::Decrement,
            Some(2) => LineAction::SetQuantity,
            Some(3) => LineAction::Remove,
            _ => LineAction::Back,
        };

        match action {
            LineAction::Increment => {
                let update = self.shop.increment(id);
                self.journal.record_update(id, update);
            }
            LineAction::Decrement => {
                let update = self.shop.decrement(id);
                self.journal.record_update(id, update);
            }
            LineAction::SetQuantity => {
                let current = self.shop.cart().get(id).map_or(0, |item| item.quantity);
                let quantity: i64 = Input::with_theme(&self.theme)
                    .with_prompt("Количество")
                    .default(i64::from(current))
                    .interact_text()?;
                let update = self.shop.update_quantity(id, quantity);
                self.journal.record_update(id, update);
            }
            LineAction::Remove => {
                if self.shop.remove_from_cart(id) {
                    self.journal.record_removed(id);
                }
            }
            LineAction::Back => {}
        }
        Ok(())
    }

    /// Run the checkout dialog until the order is placed or cancelled.
    fn checkout(&mut self) -> Result<()> {
        match self.shop.open_checkout() {
            Ok(()) => {}
            Err(CommerceError::EmptyCart) => {
                self.ctx.output.warn("Корзина пуста");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
        self.journal.record(SessionEvent::CheckoutOpened {
            items: self.shop.total_items(),
        });

        loop {
            let summary = self.shop.summary()?;
            self.ctx.output.header("Оформление заказа");
            for line in &summary.lines {
                self.ctx.output.list_item(&cart_line_label(line));
            }
            self.ctx.output.kv("Итого", &summary.total_price.display());

            for field in ContactField::ALL {
                let value: String = Input::with_theme(&self.theme)
                    .with_prompt(field.label())
                    .with_initial_text(self.shop.form().field(field))
                    .allow_empty(true)
                    .interact_text()?;
                self.shop.update_field(field, value);
            }

            let confirm = Select::with_theme(&self.theme)
                .items(&["Подтвердить заказ", "Отмена"])
                .default(0)
                .interact_opt()?;
            if confirm != Some(0) {
                self.shop.cancel_checkout();
                self.journal.record(SessionEvent::CheckoutCancelled);
                return Ok(());
            }

            match self.shop.submit_checkout() {
                Ok(order) => {
                    self.journal.record_order(&order);
                    print_order(&order, self.ctx);
                    return Ok(());
                }
                Err(CommerceError::Validation { missing }) => {
                    self.journal.record_rejected(&missing);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn cart_menu_label(summary: &CartSummary) -> String {
    match summary.badge() {
        Some(badge) => format!("Корзина ({})", badge),
        None => "Корзина".to_string(),
    }
}

fn product_label(product: &Product) -> String {
    format!(
        "{} · {} · {}",
        product.name,
        product.spec_line(),
        product.price.display()
    )
}
