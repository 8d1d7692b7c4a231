//! MemoryShop web storefront.
//!
//! A client-side rendered Leptos page over one `memshop-commerce` session:
//! - Catalog grid grouped by category
//! - Cart drawer with quantity controls
//! - Checkout dialog
//! - Toast notifications

mod app;

pub use app::App;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
