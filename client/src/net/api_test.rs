use super::*;

#[test]
fn body_failure_on_success_status_is_decode_error() {
    assert_eq!(body_failure(true, 200, "eof".to_owned()), ApiError::Decode("eof".to_owned()));
}

#[test]
fn body_failure_on_error_status_reports_status() {
    assert_eq!(body_failure(false, 502, "eof".to_owned()), ApiError::Status(502));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(500).to_string(), "server responded with status 500");
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(
        ApiError::from(ReplyError::MissingConclusion).to_string(),
        "malformed reply: reply has no conclusion text"
    );
}

#[test]
fn endpoints_match_server_routes() {
    assert_eq!(CHAT_ENDPOINT, "/chat");
    assert_eq!(AUTO_RECOMMEND_ENDPOINT, "/auto_recommend");
    assert_eq!(GENERATE_IMAGE_ENDPOINT, "/generate_room_image");
    assert_eq!(ADD_ROOM_ENDPOINT, "/add_room");
}

#[test]
fn is_success_accepts_only_2xx() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(302));
    assert!(!is_success(500));
}
