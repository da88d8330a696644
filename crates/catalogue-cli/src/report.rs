//! Terminal error reports.

use catalogue_client::CatalogueError;

/// Lines describing a failed command, outermost message first.
///
/// Each error in the chain appears once. A catalogue error anywhere in the
/// chain adds its user-facing message and, when a retry might help, a hint.
pub fn error_report(error: &anyhow::Error) -> Vec<String> {
    let mut lines = vec![format!("error: {error}")];
    let causes = error.chain().skip(1);
    lines.extend(causes.map(|cause| format!("  caused by: {cause}")));
    if let Some(catalogue) = error.downcast_ref::<CatalogueError>() {
        lines.push(format!("  {}", catalogue.user_message()));
        if catalogue.is_retryable() {
            lines.push("  this may be temporary; try again".to_string());
        }
    }
    lines
}
