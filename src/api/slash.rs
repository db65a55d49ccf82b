//! Slash-command handling: open the capacity-request dialog.

use axum::response::Response;
use tracing::{error, info, warn};

use super::helpers;
use crate::core::models::SlashCommand;
use crate::slack::build_request_modal;
use crate::state::AppState;

/// Open the capacity-request modal against the command's trigger id, then
/// acknowledge with an empty 200.
///
/// The trigger id expires a few seconds after Slack issues it, so the
/// `views.open` call happens before the ack rather than in the background.
/// A missing bot token or trigger id skips the open; the command is
/// acknowledged either way, since Slack surfaces anything else as a visible
/// error banner to the user.
pub async fn handle_dialog_open(state: &AppState, command: &SlashCommand) -> Response {
    let Some(slack) = state.slack() else {
        warn!(
            command = %command.command,
            "No bot token configured; skipping views.open"
        );
        return helpers::ok_empty();
    };

    if command.trigger_id.is_empty() {
        warn!(
            command = %command.command,
            "Slash command carried no trigger_id; skipping views.open"
        );
        return helpers::ok_empty();
    }

    let view = build_request_modal(&command.channel_id);
    match slack.open_view(&command.trigger_id, &view).await {
        Ok(()) => info!(
            channel_id = %command.channel_id,
            "Opened capacity-request modal"
        ),
        Err(e) => error!("Failed to open modal: {}", e),
    }

    helpers::ok_empty()
}
