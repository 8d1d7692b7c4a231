//! End-to-end shopping scenarios against the built-in catalog.

use memshop_commerce::prelude::*;
use proptest::prelude::*;
use rstest::rstest;

const PRODUCT_A: ProductId = ProductId::new(1);
const PRODUCT_B: ProductId = ProductId::new(3);

fn shop() -> Storefront {
    Storefront::with_log(Catalog::builtin())
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
fn adding_twice_accumulates_quantity(#[case] id: u32) {
    let mut shop = shop();
    let id = ProductId::new(id);
    shop.add_to_cart(id).unwrap();
    shop.add_to_cart(id).unwrap();

    assert_eq!(shop.cart().len(), 1);
    assert_eq!(shop.cart().get(id).map(|i| i.quantity), Some(2));
}

#[rstest]
#[case(1)]
#[case(4)]
#[case(6)]
fn zero_quantity_removes_entry(#[case] id: u32) {
    let mut shop = shop();
    let id = ProductId::new(id);
    shop.add_to_cart(id).unwrap();
    shop.add_to_cart(PRODUCT_B).unwrap();

    assert_eq!(shop.update_quantity(id, 0), QuantityUpdate::Removed);
    assert!(!shop.cart().contains(id));
}

#[test]
fn removing_absent_product_is_noop() {
    let mut shop = shop();
    shop.add_to_cart(PRODUCT_A).unwrap();
    let before = shop.cart().clone();

    assert!(!shop.remove_from_cart(ProductId::new(5)));
    assert!(!shop.remove_from_cart(ProductId::new(999)));
    assert_eq!(shop.cart(), &before);
}

#[test]
fn submit_without_name_changes_nothing() {
    let mut shop = shop();
    shop.add_to_cart(PRODUCT_A).unwrap();
    shop.open_checkout().unwrap();
    shop.update_field(ContactField::Phone, "+7900000000");
    let cart_before = shop.cart().clone();
    let form_before = shop.form().clone();

    let err = shop.submit_checkout().unwrap_err();
    assert!(err.is_validation());
    assert_eq!(shop.cart(), &cart_before);
    assert_eq!(shop.form(), &form_before);
}

#[test]
fn submit_with_contact_clears_cart_and_form() {
    let mut shop = shop();
    shop.add_to_cart(PRODUCT_A).unwrap();
    shop.add_to_cart(PRODUCT_A).unwrap();
    shop.add_to_cart(PRODUCT_B).unwrap();
    shop.open_checkout().unwrap();
    shop.update_field(ContactField::Name, "Ivan");
    shop.update_field(ContactField::Phone, "+7900000000");

    let order = shop.submit_checkout().unwrap();

    assert_eq!(order.contact.name, "Ivan");
    assert_eq!(order.lines.len(), 2);
    assert_eq!(shop.total_items(), 0);
    assert_eq!(
        shop.form(),
        &CheckoutForm {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    );
}

#[test]
fn add_update_scenario_totals() {
    let mut shop = shop();
    assert_eq!(shop.total_items(), 0);

    shop.add_to_cart(PRODUCT_A).unwrap();
    assert_eq!(shop.total_price().unwrap(), Money::rub(8990));
    assert_eq!(shop.total_items(), 1);

    shop.add_to_cart(PRODUCT_A).unwrap();
    assert_eq!(shop.total_price().unwrap(), Money::rub(17980));
    assert_eq!(shop.total_items(), 2);
    assert_eq!(shop.cart().get(PRODUCT_A).map(|i| i.quantity), Some(2));

    shop.update_quantity(PRODUCT_A, 1);
    assert_eq!(shop.total_price().unwrap(), Money::rub(8990));
}

#[test]
fn notifications_follow_the_session() {
    let mut shop = shop();
    shop.add_to_cart(PRODUCT_A).unwrap();
    shop.open_checkout().unwrap();
    shop.submit_checkout().unwrap_err();
    shop.update_field(ContactField::Name, "Ivan");
    shop.update_field(ContactField::Phone, "+7900000000");
    shop.submit_checkout().unwrap();

    let titles: Vec<String> = shop
        .notifier_mut()
        .drain()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Товар добавлен в корзину",
            "Заполните обязательные поля",
            "Заказ оформлен!",
        ]
    );
}

#[test]
fn checkout_can_reopen_after_order() {
    let mut shop = shop();
    shop.add_to_cart(PRODUCT_A).unwrap();
    shop.open_checkout().unwrap();
    shop.update_field(ContactField::Name, "Ivan");
    shop.update_field(ContactField::Phone, "+7900000000");
    shop.submit_checkout().unwrap();

    assert_eq!(shop.open_checkout(), Err(CommerceError::EmptyCart));
    shop.add_to_cart(PRODUCT_B).unwrap();
    assert!(shop.open_checkout().is_ok());
}

#[derive(Debug, Clone)]
enum Op {
    Add(u32),
    Remove(u32),
    Update(u32, i64),
    Increment(u32),
    Decrement(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Ids 0 and 7 are outside the catalog.
    let id = 0u32..=7;
    prop_oneof![
        id.clone().prop_map(Op::Add),
        id.clone().prop_map(Op::Remove),
        (id.clone(), -2i64..50).prop_map(|(id, q)| Op::Update(id, q)),
        id.clone().prop_map(Op::Increment),
        id.prop_map(Op::Decrement),
    ]
}

proptest! {
    #[test]
    fn totals_match_entries(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut shop = shop();
        for op in ops {
            match op {
                Op::Add(id) => {
                    let _ = shop.add_to_cart(ProductId::new(id));
                }
                Op::Remove(id) => {
                    shop.remove_from_cart(ProductId::new(id));
                }
                Op::Update(id, q) => {
                    shop.update_quantity(ProductId::new(id), q);
                }
                Op::Increment(id) => {
                    shop.increment(ProductId::new(id));
                }
                Op::Decrement(id) => {
                    shop.decrement(ProductId::new(id));
                }
            }

            let items = shop.cart().items();
            let expected_items: u64 = items.iter().map(|i| u64::from(i.quantity)).sum();
            let expected_price: i64 = items
                .iter()
                .map(|i| i.product.price.amount_minor * i64::from(i.quantity))
                .sum();

            prop_assert!(items.iter().all(|i| i.quantity >= 1));
            prop_assert_eq!(shop.total_items(), expected_items);
            prop_assert_eq!(shop.total_price().unwrap(), Money::new(expected_price, Currency::RUB));

            let mut ids: Vec<ProductId> = items.iter().map(|i| i.product.id).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), items.len());
        }
    }
}
