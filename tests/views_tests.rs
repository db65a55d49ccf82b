use capreq_relay::slack::build_request_modal;
use serde_json::Value;

#[test]
fn modal_has_expected_blocks() {
    let view = build_request_modal("C042");
    assert_eq!(view["type"], "modal");
    assert_eq!(view["callback_id"], "capacity_request_create");

    let blocks = view["blocks"].as_array().expect("blocks array");
    assert_eq!(blocks.len(), 9);

    // Block order and element types are what the backend keys on
    let expected = [
        ("size", "static_select"),
        ("region", "static_select"),
        ("quantity", "number_input"),
        ("duration", "number_input"),
        ("needed_by", "datepicker"),
        ("est_cost", "number_input"),
        ("customer", "plain_text_input"),
        ("owner", "users_select"),
        ("infra_group", "plain_text_input"),
    ];
    for (block, (block_id, element_type)) in blocks.iter().zip(expected) {
        assert_eq!(block["type"], "input");
        assert_eq!(block["block_id"], block_id);
        assert_eq!(block["element"]["type"], element_type);
    }
}

#[test]
fn modal_marks_trailing_blocks_optional() {
    let view = build_request_modal("C042");
    let blocks = view["blocks"].as_array().expect("blocks array");

    // size, region, quantity, duration, needed_by are required
    for block in &blocks[..5] {
        assert!(block.get("optional").is_none(), "{} should be required", block["block_id"]);
    }
    // est_cost, customer, owner, infra_group are optional
    for block in &blocks[5..] {
        assert_eq!(block["optional"], true, "{} should be optional", block["block_id"]);
    }
}

#[test]
fn modal_action_ids_are_stable() {
    let view = build_request_modal("C042");
    let blocks = view["blocks"].as_array().expect("blocks array");

    let action_ids: Vec<&str> = blocks
        .iter()
        .map(|b| b["element"]["action_id"].as_str().expect("action_id"))
        .collect();
    assert_eq!(
        action_ids,
        [
            "size_select",
            "region_select",
            "quantity_input",
            "duration_input",
            "needed_by_date",
            "est_cost_input",
            "customer_input",
            "owner_select",
            "infra_group_input",
        ]
    );
}

#[test]
fn modal_size_and_region_options() {
    let view = build_request_modal("C042");

    let size_values: Vec<&str> = view["blocks"][0]["element"]["options"]
        .as_array()
        .expect("size options")
        .iter()
        .map(|o| o["value"].as_str().expect("value"))
        .collect();
    assert_eq!(size_values, ["small", "medium", "large", "xlarge", "2xlarge"]);

    let region_values: Vec<&str> = view["blocks"][1]["element"]["options"]
        .as_array()
        .expect("region options")
        .iter()
        .map(|o| o["value"].as_str().expect("value"))
        .collect();
    assert_eq!(
        region_values,
        [
            "us-east-1",
            "us-west-2",
            "eu-west-1",
            "eu-central-1",
            "ap-southeast-1",
            "ap-northeast-1",
        ]
    );
}

#[test]
fn modal_number_input_bounds() {
    let view = build_request_modal("C042");
    let blocks = &view["blocks"];

    // Quantity and duration are whole numbers starting at 1
    for idx in [2, 3] {
        assert_eq!(blocks[idx]["element"]["is_decimal_allowed"], false);
        assert_eq!(blocks[idx]["element"]["min_value"], "1");
    }

    // Estimated cost allows decimals and zero
    assert_eq!(blocks[5]["element"]["is_decimal_allowed"], true);
    assert_eq!(blocks[5]["element"]["min_value"], "0");
}

#[test]
fn modal_private_metadata_carries_channel() {
    let view = build_request_modal("C9XYZ");

    let metadata = view["private_metadata"].as_str().expect("private_metadata");
    let parsed: Value = serde_json::from_str(metadata).expect("metadata is JSON");
    assert_eq!(parsed["channel_id"], "C9XYZ");
}

#[test]
fn modal_contains_required_fields() {
    let view = build_request_modal("C042");
    assert_eq!(view["type"], "modal");
    assert!(view["title"].is_object());
    assert!(view["blocks"].is_array());
    // Must include submit for input blocks per Slack docs
    assert_eq!(view["submit"]["type"], "plain_text");
    assert_eq!(view["submit"]["text"], "Submit");
    assert_eq!(view["close"]["text"], "Cancel");
    assert_eq!(view["title"]["text"], "New capacity request");
}
