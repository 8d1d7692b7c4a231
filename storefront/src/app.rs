//! Application components.

use leptos::prelude::*;
use leptos_meta::*;
use memshop_commerce::cart::{CartSummary, LineSummary};
use memshop_commerce::catalog::{Catalog, Product};
use memshop_commerce::checkout::ContactField;
use memshop_commerce::notify::Notification;
use memshop_commerce::Storefront;

/// Toasts kept on screen at once; older ones are dropped.
const MAX_TOASTS: usize = 3;

// ============================================================================
// Session State
// ============================================================================

/// A notification on screen.
#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    notification: Notification,
}

/// Reactive handle on the shopper's session, shared through context.
#[derive(Clone, Copy)]
struct Shop {
    session: RwSignal<Storefront>,
    toasts: RwSignal<Vec<Toast>>,
    cart_open: RwSignal<bool>,
}

impl Shop {
    fn new(catalog: Catalog) -> Self {
        Self {
            session: RwSignal::new(Storefront::with_log(catalog)),
            toasts: RwSignal::new(Vec::new()),
            cart_open: RwSignal::new(false),
        }
    }

    /// Run a session operation and move what it reported onto the toast
    /// stack. `None` once the signal has been disposed.
    fn act<R>(&self, op: impl FnOnce(&mut Storefront) -> R) -> Option<R> {
        let (result, fresh) = self.session.try_update(|session| {
            let result = op(session);
            (result, session.notifier_mut().drain())
        })?;
        if !fresh.is_empty() {
            self.push_toasts(fresh);
        }
        Some(result)
    }

    fn push_toasts(&self, notifications: Vec<Notification>) {
        self.toasts.update(|toasts| {
            let mut next = toasts.last().map_or(0, |t| t.id + 1);
            for notification in notifications {
                toasts.push(Toast {
                    id: next,
                    notification,
                });
                next += 1;
            }
            let excess = toasts.len().saturating_sub(MAX_TOASTS);
            toasts.drain(..excess);
        });
    }

    /// Backdrop click and the dialog's "×" both land here.
    fn close_checkout(&self) {
        self.act(|s| s.cancel_checkout());
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn summary(&self) -> Option<CartSummary> {
        self.session.with(|s| s.summary().ok())
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Shop::new(Catalog::builtin()));

    view! {
        <Title text="MemoryShop"/>
        <Meta name="description" content="Оперативная память для игр, офиса и серверов"/>

        <Header/>
        <main class="container">
            <Hero/>
            <CatalogSections/>
        </main>
        <CartDrawer/>
        <CheckoutModal/>
        <Toasts/>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let shop = expect_context::<Shop>();
    let badge = move || shop.summary().and_then(|summary| summary.badge());

    view! {
        <header class="site-header">
            <div class="container header-row">
                <h1 class="logo">"MemoryShop"</h1>
                <div class="header-actions">
                    <a href="#catalog" class="btn">"В каталог"</a>
                    <button class="btn btn-outline cart-button" on:click=move |_| shop.cart_open.set(true)>
                        "Корзина"
                        {move || badge().map(|count| view! { <span class="badge">{count}</span> })}
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h2>"Память для любых задач"</h2>
            <p>"Игровая, офисная и серверная память от проверенных производителей"</p>
        </section>
    }
}

// ============================================================================
// Catalog Components
// ============================================================================

#[component]
fn CatalogSections() -> impl IntoView {
    let shop = expect_context::<Shop>();

    // The catalog never changes during a session.
    let sections: Vec<(&'static str, Vec<Product>)> = shop.session.with_untracked(|s| {
        s.catalog()
            .sections()
            .into_iter()
            .map(|section| (section.title, section.products.into_iter().cloned().collect()))
            .collect()
    });

    view! {
        <section id="catalog">
            {sections.into_iter().map(|(title, products)| {
                view! {
                    <div class="category">
                        <h2>{title}</h2>
                        <div class="products">
                            {products.into_iter().map(|product| {
                                view! { <ProductCard product=product/> }
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </section>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let shop = expect_context::<Shop>();
    let id = product.id;
    let image = product.image.clone();
    let alt = product.name.clone();
    let price = product.price.display();

    view! {
        <div class="product-card">
            <div class="product-image">
                <img src=image alt=alt/>
            </div>
            <div class="product-info">
                <h3>{product.name}</h3>
                <div class="specs">
                    <span class="spec">{product.capacity}</span>
                    <span class="spec">{product.speed}</span>
                </div>
                <p class="price">{price}</p>
                <button class="btn btn-block" on:click=move |_| {
                    shop.act(|s| s.add_to_cart(id));
                }>
                    "В корзину"
                </button>
            </div>
        </div>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
fn CartDrawer() -> impl IntoView {
    let shop = expect_context::<Shop>();
    let summary = Memo::new(move |_| shop.summary());
    let is_open = move || shop.cart_open.get();

    view! {
        <div class="backdrop" class:open=is_open on:click=move |_| shop.cart_open.set(false)></div>
        <aside class="drawer" class:open=is_open>
            <div class="drawer-header">
                <h2>"Корзина"</h2>
                <button class="btn-ghost" on:click=move |_| shop.cart_open.set(false)>"×"</button>
            </div>
            {move || match summary.get() {
                Some(summary) if !summary.is_empty() => view! {
                    <CartContents summary=summary/>
                }.into_any(),
                _ => view! {
                    <div class="cart-empty">
                        <p>"Корзина пуста"</p>
                    </div>
                }.into_any(),
            }}
        </aside>
    }
}

#[component]
fn CartContents(summary: CartSummary) -> impl IntoView {
    let shop = expect_context::<Shop>();
    let total = summary.total_price.display();

    let checkout = move |_| {
        if let Some(Ok(())) = shop.act(|s| s.open_checkout()) {
            shop.cart_open.set(false);
        }
    };

    view! {
        <div class="cart-lines">
            {summary.lines.into_iter().map(|line| {
                view! { <CartLine line=line/> }
            }).collect::<Vec<_>>()}
        </div>
        <div class="cart-total">
            <div class="total-row">
                <span>"Итого:"</span>
                <span class="total">{total}</span>
            </div>
            <button class="btn btn-block" on:click=checkout>"Оформить заказ"</button>
        </div>
    }
}

#[component]
fn CartLine(line: LineSummary) -> impl IntoView {
    let shop = expect_context::<Shop>();
    let id = line.product_id;
    let (image, specs) = shop.session.with_untracked(|s| {
        s.catalog()
            .get(id)
            .map(|p| (p.image.clone(), p.spec_line()))
            .unwrap_or_default()
    });
    let alt = line.name.clone();
    let line_total = line.line_total.display();

    view! {
        <div class="cart-line">
            <img src=image alt=alt/>
            <div class="cart-line-body">
                <h3>{line.name}</h3>
                <p class="muted">{specs}</p>
                <div class="quantity">
                    <button class="btn-small" on:click=move |_| { shop.act(|s| s.decrement(id)); }>"−"</button>
                    <span>{line.quantity.to_string()}</span>
                    <button class="btn-small" on:click=move |_| { shop.act(|s| s.increment(id)); }>"+"</button>
                    <button class="btn-ghost destructive" on:click=move |_| { shop.act(|s| s.remove_from_cart(id)); }>
                        "Удалить"
                    </button>
                </div>
            </div>
            <p class="line-total">{line_total}</p>
        </div>
    }
}

// ============================================================================
// Checkout Components
// ============================================================================

#[component]
fn CheckoutModal() -> impl IntoView {
    let shop = expect_context::<Shop>();
    let is_open = move || shop.session.with(|s| s.is_checkout_open());

    view! {
        <Show when=is_open>
            <div class="backdrop open" on:click=move |_| shop.close_checkout()></div>
            <div class="dialog" role="dialog">
                <div class="dialog-header">
                    <h2>"Оформление заказа"</h2>
                    <button class="btn-ghost" aria-label="Закрыть" on:click=move |_| shop.close_checkout()>"×"</button>
                </div>
                {ContactField::ALL.into_iter().map(|field| {
                    view! { <ContactInput field=field/> }
                }).collect::<Vec<_>>()}
                <div class="dialog-summary">
                    <div class="row">
                        <span>"Товаров:"</span>
                        <span>{move || format!("{} шт.", shop.session.with(|s| s.total_items()))}</span>
                    </div>
                    <div class="row total">
                        <span>"Итого:"</span>
                        <span>{move || shop.summary().map(|s| s.total_price.display())}</span>
                    </div>
                </div>
                <button class="btn btn-block" on:click=move |_| { shop.act(|s| s.submit_checkout()); }>
                    "Подтвердить заказ"
                </button>
            </div>
        </Show>
    }
}

#[component]
fn ContactInput(field: ContactField) -> impl IntoView {
    let shop = expect_context::<Shop>();
    let input_type = match field {
        ContactField::Name => "text",
        ContactField::Phone => "tel",
        ContactField::Email => "email",
    };

    view! {
        <label class="field">
            <span>{field.label()}</span>
            <input
                type=input_type
                name=field.as_str()
                placeholder=field.placeholder()
                prop:value=move || shop.session.with(|s| s.form().field(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    shop.session.update(|s| s.update_field(field, value));
                }
            />
        </label>
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[component]
fn Toasts() -> impl IntoView {
    let shop = expect_context::<Shop>();

    view! {
        <div class="toasts">
            <For
                each=move || shop.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let destructive = toast.notification.is_destructive();
                    view! {
                        <div class="toast" class:destructive=move || destructive on:click=move |_| shop.dismiss(id)>
                            <strong>{toast.notification.title}</strong>
                            <p>{toast.notification.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
