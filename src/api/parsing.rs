//! Body decoding and interaction classification.
//!
//! Classification never fails: anything that does not positively match one of
//! the three interactive shapes is forwarded to the backend as-is, so a
//! malformed body can at worst take the plain-forward path.

use std::borrow::Cow;
use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::core::models::{Interaction, SlashCommand};
use crate::errors::RelayError;

/// Slash-command keyword that still counts as an argument-less invocation.
const CREATE_KEYWORD: &str = "create";

/// Decodes a URL-encoded string, with `+` treated as a space.
///
/// `+` is form-encoding for a space and is translated before
/// percent-decoding, so an encoded `%2B` survives as a literal plus in the
/// decoded text.
///
/// # Errors
///
/// Returns an error when the percent-decoded bytes are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use capreq_relay::api::parsing::decode_url_component;
///
/// let decoded = decode_url_component("hello%20world").unwrap();
/// assert_eq!(decoded, "hello world");
///
/// let decoded_plus = decode_url_component("hello+world").unwrap();
/// assert_eq!(decoded_plus, "hello world");
///
/// let decoded_literal = decode_url_component("1%2B1+equals+2").unwrap();
/// assert_eq!(decoded_literal, "1+1 equals 2");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, RelayError> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| RelayError::ParseError(e.to_string()))
}

/// Decode an `application/x-www-form-urlencoded` body into a key→value map.
///
/// Pairs without `=` and pairs that fail to decode are skipped rather than
/// rejected: a body that is not form-encoded (raw JSON, say) simply produces
/// a map without the keys the classifier looks for.
pub fn parse_form_params(body: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    for pair in body.split('&') {
        let Some(idx) = pair.find('=') else { continue };
        let (Ok(key), Ok(value)) = (
            decode_url_component(&pair[..idx]),
            decode_url_component(&pair[idx + 1..]),
        ) else {
            continue;
        };
        params.insert(key, value);
    }

    params
}

/// Classify a webhook body into exactly one interaction kind.
///
/// Precedence, first match wins:
/// 1. argument-less slash command (`text` empty or exactly `create`)
/// 2. `payload` with `type == "view_submission"`
/// 3. `payload` with `type == "block_actions"`
/// 4. everything else, malformed `payload` JSON included
pub fn classify(body: &str) -> Interaction {
    let params = parse_form_params(body);

    if let Some(command) = params.get("command") {
        let text = params.get("text").map_or("", |t| t.trim());
        if text.is_empty() || text == CREATE_KEYWORD {
            return Interaction::OpenDialog(SlashCommand {
                command: command.clone(),
                text: text.to_string(),
                trigger_id: params.get("trigger_id").cloned().unwrap_or_default(),
                channel_id: params.get("channel_id").cloned().unwrap_or_default(),
            });
        }
        // A command with trailing arguments is a free-text sub-command for
        // the backend, not a dialog trigger. Fall through.
    }

    if let Some(raw) = params.get("payload")
        && let Ok(payload) = serde_json::from_str::<Value>(raw)
    {
        match payload.get("type").and_then(Value::as_str) {
            Some("view_submission") => {
                return Interaction::ViewSubmission {
                    payload,
                    raw: raw.clone(),
                };
            }
            Some("block_actions") => {
                return Interaction::BlockActions { payload };
            }
            _ => {}
        }
    }

    Interaction::Forward
}
