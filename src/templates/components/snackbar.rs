use crate::notification::Notification;
use maud::{html, Markup, PreEscaped};

/// Renders notifications as snackbars that remove themselves after their duration.
pub fn snackbar(notifications: &[Notification]) -> Markup {
    html! {
        @for notification in notifications {
            div class="snackbar snackbar-bottom-end" role="status" aria-live="polite"
                data-duration-ms=(notification.duration.as_millis().to_string()) {
                span class="snackbar-message" { (notification.message) }
            }
        }

        @if !notifications.is_empty() {
            script {
                (PreEscaped(r#"
                document.querySelectorAll('.snackbar[data-duration-ms]').forEach(function(el) {
                    setTimeout(function() { el.remove(); }, Number(el.dataset.durationMs));
                });
                "#))
            }
        }
    }
}
