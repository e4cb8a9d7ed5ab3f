pub mod delete;
pub mod form;
pub mod list;
pub mod surface;

use std::time::Duration;

use crate::config::Config;
use crate::services::api::{FormData, PromotionsApi};
use crate::services::notifications::Notifier;
use crate::view::TableState;

use delete::DeleteFlow;
use form::FormController;
use list::ListView;
use surface::{ConfirmDialog, Navigator};

/// User and lifecycle events the page reacts to. Event delegation from the
/// host is made explicit: the host maps raw widget events onto this enum and
/// `PromotionsPage::handle` is the single dispatch point.
#[derive(Debug)]
pub enum UiEvent {
    /// Page finished loading; populate the table.
    PageLoad,
    /// The create/edit form was submitted; `action` is its configured target.
    SubmitForm { action: String, form: FormData },
    /// A row's delete control was activated.
    DeleteClicked { id: i64, name: String },
    /// The confirmation dialog's confirm button was activated.
    ConfirmDelete,
}

/// The promotions admin page: one REST client, one table, one notifier, one
/// pending-delete slot. Handlers run to completion independently; nothing
/// serializes one action against another.
pub struct PromotionsPage {
    api: PromotionsApi,
    table: TableState,
    notifier: Notifier,
    form: FormController,
    delete: DeleteFlow,
    dialog: Box<dyn ConfirmDialog>,
    navigator: Box<dyn Navigator>,
}

impl PromotionsPage {
    pub fn new(
        config: &Config,
        dialog: Box<dyn ConfirmDialog>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        Self {
            api: PromotionsApi::new(config.api_base_url.clone()),
            table: TableState::new(config.static_root_prefix.clone()),
            notifier: Notifier::new(Duration::from_millis(config.notification_timeout_ms)),
            form: FormController::new(
                config.list_page_path.clone(),
                Duration::from_millis(config.redirect_delay_ms),
            ),
            delete: DeleteFlow::new(),
            dialog,
            navigator,
        }
    }

    pub async fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::PageLoad => {
                ListView::load(&self.api, &mut self.table, &self.notifier).await;
            }
            UiEvent::SubmitForm { action, form } => {
                self.form
                    .submit(&self.api, &action, form, &self.notifier, self.navigator.as_ref())
                    .await;
            }
            UiEvent::DeleteClicked { id, name } => {
                self.delete.request(id, &name, self.dialog.as_ref());
            }
            UiEvent::ConfirmDelete => {
                self.delete
                    .confirm(&self.api, &mut self.table, &self.notifier, self.dialog.as_ref())
                    .await;
            }
        }
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
