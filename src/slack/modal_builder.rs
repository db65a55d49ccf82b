use serde_json::{Value, json};

/// Build the Block Kit modal for creating a capacity request.
///
/// Pure construction, no I/O. Block and action ids are stable identifiers:
/// the backend locates submitted values under
/// `view.state.values.{block_id}.{action_id}`. The originating channel rides
/// along in `private_metadata` so it can be recovered at submission time
/// without a side lookup.
#[allow(clippy::too_many_lines)]
#[must_use]
pub fn build_request_modal(channel_id: &str) -> Value {
    let blocks = vec![
        json!({
            "type": "input",
            "block_id": "size",
            "label": { "type": "plain_text", "text": "Instance size" },
            "element": {
                "type": "static_select",
                "action_id": "size_select",
                "placeholder": { "type": "plain_text", "text": "Select a size" },
                "options": [
                    { "text": { "type": "plain_text", "text": "Small (2 vCPU / 8 GB)" }, "value": "small" },
                    { "text": { "type": "plain_text", "text": "Medium (4 vCPU / 16 GB)" }, "value": "medium" },
                    { "text": { "type": "plain_text", "text": "Large (8 vCPU / 32 GB)" }, "value": "large" },
                    { "text": { "type": "plain_text", "text": "XLarge (16 vCPU / 64 GB)" }, "value": "xlarge" },
                    { "text": { "type": "plain_text", "text": "2XLarge (32 vCPU / 128 GB)" }, "value": "2xlarge" }
                ]
            }
        }),
        json!({
            "type": "input",
            "block_id": "region",
            "label": { "type": "plain_text", "text": "Region" },
            "element": {
                "type": "static_select",
                "action_id": "region_select",
                "placeholder": { "type": "plain_text", "text": "Select a region" },
                "options": [
                    { "text": { "type": "plain_text", "text": "us-east-1" }, "value": "us-east-1" },
                    { "text": { "type": "plain_text", "text": "us-west-2" }, "value": "us-west-2" },
                    { "text": { "type": "plain_text", "text": "eu-west-1" }, "value": "eu-west-1" },
                    { "text": { "type": "plain_text", "text": "eu-central-1" }, "value": "eu-central-1" },
                    { "text": { "type": "plain_text", "text": "ap-southeast-1" }, "value": "ap-southeast-1" },
                    { "text": { "type": "plain_text", "text": "ap-northeast-1" }, "value": "ap-northeast-1" }
                ]
            }
        }),
        json!({
            "type": "input",
            "block_id": "quantity",
            "label": { "type": "plain_text", "text": "Quantity" },
            "element": { "type": "number_input", "is_decimal_allowed": false, "action_id": "quantity_input", "min_value": "1" }
        }),
        json!({
            "type": "input",
            "block_id": "duration",
            "label": { "type": "plain_text", "text": "Duration (months)" },
            "element": { "type": "number_input", "is_decimal_allowed": false, "action_id": "duration_input", "min_value": "1" }
        }),
        json!({
            "type": "input",
            "block_id": "needed_by",
            "label": { "type": "plain_text", "text": "Needed by" },
            "element": { "type": "datepicker", "action_id": "needed_by_date" }
        }),
        json!({
            "type": "input",
            "block_id": "est_cost",
            "optional": true,
            "label": { "type": "plain_text", "text": "Estimated monthly cost (USD)" },
            "element": { "type": "number_input", "is_decimal_allowed": true, "action_id": "est_cost_input", "min_value": "0" }
        }),
        json!({
            "type": "input",
            "block_id": "customer",
            "optional": true,
            "label": { "type": "plain_text", "text": "Customer name" },
            "element": { "type": "plain_text_input", "action_id": "customer_input" }
        }),
        json!({
            "type": "input",
            "block_id": "owner",
            "optional": true,
            "label": { "type": "plain_text", "text": "Commercial owner" },
            "element": { "type": "users_select", "action_id": "owner_select" }
        }),
        json!({
            "type": "input",
            "block_id": "infra_group",
            "optional": true,
            "label": { "type": "plain_text", "text": "Infrastructure group" },
            "element": { "type": "plain_text_input", "action_id": "infra_group_input" }
        }),
    ];

    json!({
        "type": "modal",
        "callback_id": "capacity_request_create",
        "private_metadata": json!({ "channel_id": channel_id }).to_string(),
        "title": { "type": "plain_text", "text": "New capacity request" },
        "submit": { "type": "plain_text", "text": "Submit" },
        "close": { "type": "plain_text", "text": "Cancel" },
        "blocks": blocks
    })
}
