use serde_json::Value;

/// Derived view of a form-encoded body carrying a `command` key.
///
/// `text` is trimmed; `trigger_id` is the short-lived dialog-open credential
/// and is only valid for a few seconds after Slack issues it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashCommand {
    pub command: String,
    pub text: String,
    pub trigger_id: String,
    pub channel_id: String,
}

/// Classification of an inbound webhook body. Exactly one kind applies per
/// request; precedence is encoded in [`crate::api::parsing::classify`].
#[derive(Debug, PartialEq)]
pub enum Interaction {
    /// Argument-less slash command (or the `create` keyword): open the
    /// capacity-request dialog before acknowledging.
    OpenDialog(SlashCommand),
    /// `view_submission` payload: forward to the submission RPC, relay the
    /// normalized response.
    ViewSubmission { payload: Value, raw: String },
    /// `block_actions` payload: acknowledge immediately, forward the original
    /// body and post to the callback URL in the background.
    BlockActions { payload: Value },
    /// Everything else, malformed payloads included: forward the raw body to
    /// the webhook RPC unchanged.
    Forward,
}

/// Slack's request-verification headers, relayed untouched so the backend can
/// verify the body it receives. Absent headers travel as empty strings; the
/// relay itself never rejects on them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackHeaders {
    pub signature: String,
    pub timestamp: String,
}
