//! Session journal for local debugging.
//!
//! A journal records the cart and checkout events of one storefront
//! session with their timing, and can be exported as JSON to reproduce or
//! inspect what a shopper did.

use std::time::Instant;

use memshop_commerce::cart::QuantityUpdate;
use memshop_commerce::checkout::{ContactField, OrderConfirmation};
use memshop_commerce::ids::{ProductId, SessionId};
use serde::{Deserialize, Serialize};

/// Something that happened in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    ProductAdded { product_id: u32, quantity: u32 },
    QuantityChanged { product_id: u32, quantity: u32 },
    ProductRemoved { product_id: u32 },
    CheckoutOpened { items: u64 },
    CheckoutCancelled,
    CheckoutRejected { missing: Vec<String> },
    OrderPlaced { order_id: String, items: u64, total: String },
}

/// A recorded event with its offset from the start of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Microseconds since the journal was created.
    pub elapsed_us: u64,
    #[serde(flatten)]
    pub event: SessionEvent,
}

/// Per-kind event counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalSummary {
    pub products_added: usize,
    pub quantity_changes: usize,
    pub products_removed: usize,
    pub checkouts_opened: usize,
    pub checkouts_cancelled: usize,
    pub checkouts_rejected: usize,
    pub orders_placed: usize,
}

/// A finished, serializable journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalExport {
    /// Export format version.
    pub version: u32,
    pub session_id: String,
    /// RFC 3339 wall-clock time the session started.
    pub started_at: String,
    pub events: Vec<JournalEntry>,
    pub summary: JournalSummary,
}

impl JournalExport {
    /// Current export format version.
    pub const VERSION: u32 = 1;

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Records session events as they happen.
#[derive(Debug)]
pub struct SessionJournal {
    session_id: String,
    started_at: String,
    start_time: Instant,
    entries: Vec<JournalEntry>,
}

impl SessionJournal {
    /// Create a journal for a session.
    pub fn new(session_id: &SessionId) -> Self {
        Self {
            session_id: session_id.to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            start_time: Instant::now(),
            entries: Vec::new(),
        }
    }

    /// Record an arbitrary event.
    pub fn record(&mut self, event: SessionEvent) {
        self.entries.push(JournalEntry {
            elapsed_us: self.start_time.elapsed().as_micros() as u64,
            event,
        });
    }

    pub fn record_added(&mut self, id: ProductId, quantity: u32) {
        self.record(SessionEvent::ProductAdded {
            product_id: id.get(),
            quantity,
        });
    }

    pub fn record_removed(&mut self, id: ProductId) {
        self.record(SessionEvent::ProductRemoved { product_id: id.get() });
    }

    /// Record the outcome of a quantity change. No-ops are not recorded.
    pub fn record_update(&mut self, id: ProductId, update: QuantityUpdate) {
        match update {
            QuantityUpdate::Set(quantity) => self.record(SessionEvent::QuantityChanged {
                product_id: id.get(),
                quantity,
            }),
            QuantityUpdate::Removed => self.record_removed(id),
            QuantityUpdate::NotInCart => {}
        }
    }

    pub fn record_rejected(&mut self, missing: &[ContactField]) {
        self.record(SessionEvent::CheckoutRejected {
            missing: missing.iter().map(|f| f.as_str().to_string()).collect(),
        });
    }

    pub fn record_order(&mut self, order: &OrderConfirmation) {
        self.record(SessionEvent::OrderPlaced {
            order_id: order.id.to_string(),
            items: order.total_items,
            total: order.total_price.display(),
        });
    }

    /// Recorded entries, oldest first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Count events by kind.
    pub fn summary(&self) -> JournalSummary {
        let mut summary = JournalSummary::default();
        for entry in &self.entries {
            match entry.event {
                SessionEvent::ProductAdded { .. } => summary.products_added += 1,
                SessionEvent::QuantityChanged { .. } => summary.quantity_changes += 1,
                SessionEvent::ProductRemoved { .. } => summary.products_removed += 1,
                SessionEvent::CheckoutOpened { .. } => summary.checkouts_opened += 1,
                SessionEvent::CheckoutCancelled => summary.checkouts_cancelled += 1,
                SessionEvent::CheckoutRejected { .. } => summary.checkouts_rejected += 1,
                SessionEvent::OrderPlaced { .. } => summary.orders_placed += 1,
            }
        }
        summary
    }

    /// Finish the journal for export.
    pub fn finalize(self) -> JournalExport {
        let summary = self.summary();
        JournalExport {
            version: JournalExport::VERSION,
            session_id: self.session_id,
            started_at: self.started_at,
            events: self.entries,
            summary,
        }
    }
}
