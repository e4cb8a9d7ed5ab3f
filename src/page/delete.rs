use crate::models::promotion::ErrorDetail;
use crate::page::surface::ConfirmDialog;
use crate::services::api::PromotionsApi;
use crate::services::notifications::{Notifier, Severity};
use crate::view::TableState;

/// The one `{id, name}` pair held between a delete click and its
/// confirmation. A second click before confirmation overwrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: i64,
    pub name: String,
}

/// Two-step confirm-then-delete flow gated by the host dialog.
///
/// The pending target is a single slot, last write wins; the dialog's own
/// visibility is what keeps a second delete click from racing the first
/// confirmation. The slot is cleared only once a delete succeeds, so while a
/// failed delete leaves the dialog open, confirming again retries the same
/// target. Dismissing the dialog needs no action here.
#[derive(Default)]
pub struct DeleteFlow {
    pending: Option<PendingDelete>,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// A row's delete control was activated: arm the slot and show the
    /// dialog with the promotion's name injected. No network call yet.
    pub fn request(&mut self, id: i64, name: &str, dialog: &dyn ConfirmDialog) {
        self.pending = Some(PendingDelete {
            id,
            name: name.to_string(),
        });
        dialog.show(name);
    }

    /// The dialog's confirm button was activated. An empty slot is a wiring
    /// defect: logged, never surfaced, no network call.
    pub async fn confirm(
        &mut self,
        api: &PromotionsApi,
        table: &mut TableState,
        notifier: &Notifier,
        dialog: &dyn ConfirmDialog,
    ) {
        let Some(pending) = self.pending.clone() else {
            tracing::error!("delete confirmed with no pending target");
            return;
        };

        match api.delete(pending.id).await {
            Ok(()) => {
                self.pending = None;
                notifier.notify("Promotion successfully deleted", Severity::Success);
                if !table.remove_row(pending.id) {
                    tracing::warn!(id = pending.id, "deleted promotion had no table row");
                }
                dialog.hide();
            }
            Err(err) => {
                let message = match err.detail() {
                    Some(ErrorDetail::Message(msg)) => format!("Failed to delete: {msg}"),
                    Some(_) => "Failed to delete: Unknown error".to_string(),
                    None => "Failed to delete promotion".to_string(),
                };
                tracing::error!(error = %err, id = pending.id, "promotion delete failed");
                notifier.notify(message, Severity::Danger);
                // Row stays; the dialog is left open and the slot stays
                // armed, so the user can confirm again or dismiss.
            }
        }
    }

    pub fn pending(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }
}
