use super::*;
use serde_json::json;

// =============================================================
// display_value
// =============================================================

#[test]
fn display_value_passes_strings_through() {
    assert_eq!(display_value(Some(&json!("sea view"))), "sea view");
}

#[test]
fn display_value_formats_numbers() {
    assert_eq!(display_value(Some(&json!(2000))), "2000");
    assert_eq!(display_value(Some(&json!(2.5))), "2.5");
}

#[test]
fn display_value_joins_lists_with_separator() {
    let value = json!(["sea view", "balcony", "", "bathtub"]);
    assert_eq!(display_value(Some(&value)), "sea view·balcony·bathtub");
}

#[test]
fn display_value_empties_null_missing_and_objects() {
    assert_eq!(display_value(None), "");
    assert_eq!(display_value(Some(&Value::Null)), "");
    assert_eq!(display_value(Some(&json!({"a": 1}))), "");
}

// =============================================================
// parse_chat_reply
// =============================================================

#[test]
fn chat_reply_parses_conclusion_and_rooms() {
    let body = json!({
        "response": {
            "conclusion": "Here are options",
            "rooms": {
                "Suite A": {"price": 2000, "area": "30m2", "features": "sea view", "style": "modern", "maxOccupancy": 2}
            }
        }
    });
    let reply = parse_chat_reply(&body).unwrap();
    assert_eq!(reply.conclusion, "Here are options");
    assert_eq!(reply.rooms.len(), 1);
    let room = &reply.rooms[0];
    assert_eq!(room.name, "Suite A");
    assert_eq!(room.price, "2000");
    assert_eq!(room.area, "30m2");
    assert_eq!(room.features, "sea view");
    assert_eq!(room.style, "modern");
    assert_eq!(room.max_occupancy, "2");
}

#[test]
fn chat_reply_keeps_mapping_order() {
    let body: Value = serde_json::from_str(
        r#"{"response":{"conclusion":"ok","rooms":{"Zen":{},"Atrium":{},"Mezzanine":{}}}}"#,
    )
    .unwrap();
    let reply = parse_chat_reply(&body).unwrap();
    let names: Vec<_> = reply.rooms.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Zen", "Atrium", "Mezzanine"]);
}

#[test]
fn chat_reply_mapping_key_overrides_inner_name() {
    let body = json!({"response": {"conclusion": "ok", "rooms": {"Suite A": {"name": "other"}}}});
    let reply = parse_chat_reply(&body).unwrap();
    assert_eq!(reply.rooms[0].name, "Suite A");
}

#[test]
fn chat_reply_with_empty_rooms_has_no_cards() {
    let body = json!({"response": {"conclusion": "nothing fits", "rooms": {}}});
    assert!(parse_chat_reply(&body).unwrap().rooms.is_empty());
}

#[test]
fn chat_reply_with_malformed_rooms_keeps_conclusion_only() {
    for rooms in [json!(["Suite A"]), json!("Suite A"), Value::Null] {
        let body = json!({"response": {"conclusion": "ok", "rooms": rooms}});
        let reply = parse_chat_reply(&body).unwrap();
        assert_eq!(reply.conclusion, "ok");
        assert!(reply.rooms.is_empty());
    }
}

#[test]
fn chat_reply_with_missing_rooms_keeps_conclusion_only() {
    let body = json!({"response": {"conclusion": "ok"}});
    assert!(parse_chat_reply(&body).unwrap().rooms.is_empty());
}

#[test]
fn chat_reply_non_object_room_renders_name_only() {
    let body = json!({"response": {"conclusion": "ok", "rooms": {"Loft": 3}}});
    let reply = parse_chat_reply(&body).unwrap();
    assert_eq!(reply.rooms, vec![RoomOption { name: "Loft".to_owned(), ..RoomOption::default() }]);
}

#[test]
fn chat_reply_requires_response_object() {
    assert_eq!(parse_chat_reply(&json!({})), Err(ReplyError::MissingResponse));
    assert_eq!(parse_chat_reply(&json!({"response": "plain text"})), Err(ReplyError::MissingResponse));
}

#[test]
fn chat_reply_requires_conclusion_text() {
    let body = json!({"response": {"rooms": {}}});
    assert_eq!(parse_chat_reply(&body), Err(ReplyError::MissingConclusion));
}

// =============================================================
// Form endpoints
// =============================================================

#[test]
fn recommendation_joins_feature_list() {
    let body = json!({
        "name": "Garden Twin",
        "price": 3200,
        "area": "28",
        "features": ["garden", "twin beds"],
        "style": "rustic",
        "maxOccupancy": 2
    });
    let room = parse_recommendation(&body).unwrap();
    assert_eq!(room.name, "Garden Twin");
    assert_eq!(room.price, "3200");
    assert_eq!(room.features, "garden·twin beds");
    assert_eq!(room.max_occupancy, "2");
}

#[test]
fn recommendation_defaults_missing_fields_to_empty() {
    let room = parse_recommendation(&json!({"name": "Solo"})).unwrap();
    assert_eq!(room.name, "Solo");
    assert!(room.price.is_empty());
    assert!(room.features.is_empty());
}

#[test]
fn recommendation_treats_falsy_values_as_empty() {
    let body = json!({
        "name": "Loft",
        "price": 0,
        "area": "",
        "features": false,
        "style": null,
        "maxOccupancy": 0.0
    });
    let room = parse_recommendation(&body).unwrap();
    assert_eq!(room.name, "Loft");
    assert!(room.price.is_empty());
    assert!(room.area.is_empty());
    assert!(room.features.is_empty());
    assert!(room.style.is_empty());
    assert!(room.max_occupancy.is_empty());
}

#[test]
fn recommendation_keeps_true_and_nonzero_values() {
    let room = parse_recommendation(&json!({"price": 1, "style": true})).unwrap();
    assert_eq!(room.price, "1");
    assert_eq!(room.style, "true");
}

#[test]
fn recommendation_surfaces_error_field() {
    let body = json!({"error": "model offline"});
    assert_eq!(parse_recommendation(&body), Err("model offline".to_owned()));
}

#[test]
fn empty_error_field_is_ignored() {
    assert_eq!(error_field(&json!({"error": ""})), None);
}

#[test]
fn room_catalog_skips_non_objects() {
    let body = json!([{"name": "A", "price": 100}, "junk", {"name": "B"}]);
    let rooms = parse_room_catalog(&body);
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].price, "100");
    assert_eq!(rooms[1].name, "B");
}

#[test]
fn room_payload_uses_wire_field_names() {
    let payload = RoomPayload {
        name: "A",
        price: "1",
        area: "2",
        features: "f",
        style: "s",
        max_occupancy: "3",
        image: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["maxOccupancy"], "3");
    assert!(value.get("image").is_none());

    let with_image = RoomPayload { image: Some("/img/x.png"), ..payload };
    assert_eq!(serde_json::to_value(&with_image).unwrap()["image"], "/img/x.png");
}

#[test]
fn image_response_tolerates_missing_fields() {
    let resp: ImageResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp, ImageResponse::default());
}

#[test]
fn add_room_response_defaults_to_failure() {
    let resp: AddRoomResponse = serde_json::from_str(r#"{"error":"duplicate"}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("duplicate"));
}
