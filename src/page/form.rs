use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use crate::error::ApiError;
use crate::models::promotion::format_error_detail;
use crate::page::surface::Navigator;
use crate::services::api::{FormData, PromotionsApi};
use crate::services::notifications::{Notifier, Severity};

/// Whether a submission creates a new promotion or updates an existing one.
/// Derived purely from the form's configured action URL, never a hidden field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Edit(i64),
}

fn edit_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/promotions/(\d+)/edit").expect("valid edit pattern"))
}

impl SubmitMode {
    pub fn detect(action_url: &str) -> Self {
        edit_pattern()
            .captures(action_url)
            .and_then(|caps| caps[1].parse().ok())
            .map(SubmitMode::Edit)
            .unwrap_or(SubmitMode::Create)
    }
}

/// Submits the create-or-edit form and reports the outcome.
pub struct FormController {
    list_page_path: String,
    redirect_delay: Duration,
}

impl FormController {
    pub fn new(list_page_path: impl Into<String>, redirect_delay: Duration) -> Self {
        Self {
            list_page_path: list_page_path.into(),
            redirect_delay,
        }
    }

    /// Dispatch the form to the endpoint its action URL selects. On success,
    /// notify and navigate back to the list after the fixed delay (long
    /// enough for the user to read the banner). On failure, notify and leave
    /// the form as submitted; the user resubmits.
    ///
    /// The redirect delay is awaited inline, so this future only resolves
    /// once navigation has been requested. A host that must keep handling
    /// events during that window drives this future concurrently with the
    /// rest of the page instead of awaiting it back-to-back.
    pub async fn submit(
        &self,
        api: &PromotionsApi,
        action_url: &str,
        form: FormData,
        notifier: &Notifier,
        navigator: &dyn Navigator,
    ) {
        let mode = SubmitMode::detect(action_url);
        let result = match mode {
            SubmitMode::Create => api.create(form).await,
            SubmitMode::Edit(id) => api.update(id, form).await,
        };

        match result {
            Ok(promotion) => {
                let verb = match mode {
                    SubmitMode::Create => "added",
                    SubmitMode::Edit(_) => "updated",
                };
                notifier.notify(
                    format!("Promotion \"{}\" successfully {}", promotion.name, verb),
                    Severity::Success,
                );
                tokio::time::sleep(self.redirect_delay).await;
                navigator.goto(&self.list_page_path);
            }
            Err(ApiError::Status { status, detail }) => {
                tracing::warn!(%status, "form submission rejected");
                notifier.notify(format_error_detail(&detail), Severity::Danger);
            }
            Err(err @ ApiError::Transport(_)) => {
                tracing::error!(error = %err, "form submission never reached the server");
                notifier.notify("Failed to submit form", Severity::Danger);
            }
        }
    }
}
