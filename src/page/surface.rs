//! Host-widget capabilities the page depends on but does not own. The real
//! page hands these to a modal/alert widget and the browser location; tests
//! hand in recording fakes.

/// The delete-confirmation dialog: can be shown with the target's name
/// injected into its text, can be hidden. Hiding an already-hidden dialog
/// must be tolerated.
pub trait ConfirmDialog {
    fn show(&self, promotion_name: &str);
    fn hide(&self);
}

/// Page navigation. `goto` is fire-and-forget; the host decides when the
/// current page actually unloads.
pub trait Navigator {
    fn goto(&self, path: &str);
}
