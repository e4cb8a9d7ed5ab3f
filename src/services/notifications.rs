use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Severity levels of a transient banner. Success and Danger are the ones the
/// page actually raises; Warning and Info exist for symmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub severity: Severity,
}

/// Renders at most one transient status banner at a time. A new `notify`
/// replaces whatever is showing (last write wins, never stacked) and arms an
/// auto-dismiss timer; a timer that fires after its banner was replaced or
/// manually closed is a no-op.
#[derive(Clone)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    timeout: Duration,
}

#[derive(Default)]
struct Slot {
    banner: Option<Banner>,
    generation: u64,
}

impl Notifier {
    pub fn new(timeout: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            timeout,
        }
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.banner = Some(Banner {
                message,
                severity,
            });
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let timeout = self.timeout;
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            let mut slot = lock(&slot);
            // Only dismiss the banner this timer was armed for.
            if slot.generation == generation {
                slot.banner = None;
            }
        });
    }

    /// Manual close affordance. Safe to call when nothing is showing.
    pub fn dismiss(&self) {
        lock(&self.slot).banner = None;
    }

    pub fn current(&self) -> Option<Banner> {
        lock(&self.slot).banner.clone()
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> Notifier {
        Notifier::new(Duration::from_secs(5))
    }

    #[tokio::test(start_paused = true)]
    async fn banner_auto_dismisses_after_timeout() {
        let n = notifier();
        n.notify("Promotion successfully deleted", Severity::Success);
        assert!(n.current().is_some());

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(n.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn second_notify_replaces_first_and_survives_its_timer() {
        let n = notifier();
        n.notify("first", Severity::Danger);
        tokio::time::sleep(Duration::from_secs(3)).await;
        n.notify("second", Severity::Success);

        // The first banner's timer fires here; the second must stay up.
        tokio::time::sleep(Duration::from_secs(3)).await;
        let banner = n.current().unwrap();
        assert_eq!(banner.message, "second");

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(n.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_double_notify_leaves_exactly_one_banner() {
        let n = notifier();
        n.notify("first", Severity::Info);
        n.notify("second", Severity::Warning);
        let banner = n.current().unwrap();
        assert_eq!(banner.message, "second");
        assert_eq!(banner.severity, Severity::Warning);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_after_manual_dismiss_does_not_panic() {
        let n = notifier();
        n.notify("closing early", Severity::Success);
        n.dismiss();
        assert!(n.current().is_none());
        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(n.current().is_none());
    }

    #[test]
    fn multiline_message_is_preserved() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        rt.block_on(async {
            let n = notifier();
            n.notify("Validation errors:\nField 'name': field required", Severity::Danger);
            let banner = n.current().unwrap();
            assert_eq!(banner.message.lines().count(), 2);
        });
    }
}
