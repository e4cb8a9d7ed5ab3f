use crate::services::api::PromotionsApi;
use crate::services::notifications::{Notifier, Severity};
use crate::view::TableState;

/// Keeps the visible table in sync with server state, on demand.
pub struct ListView;

impl ListView {
    /// Fetch the collection and replace the table body. Any failure leaves
    /// the table exactly as it was and raises one danger notification.
    pub async fn load(api: &PromotionsApi, table: &mut TableState, notifier: &Notifier) {
        match api.list().await {
            Ok(promotions) => {
                tracing::debug!(count = promotions.len(), "promotions loaded");
                table.render(&promotions);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load promotions");
                notifier.notify("Failed to load promotions", Severity::Danger);
            }
        }
    }
}
