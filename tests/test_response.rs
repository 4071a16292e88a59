use minihttpd::http::response::{Response, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_response_ok_carries_body() {
    let response = Response::ok(b"file contents".to_vec());

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"file contents".to_vec());
}

#[test]
fn test_response_bad_request_has_no_body() {
    let response = Response::bad_request();

    assert_eq!(response.status, StatusCode::BadRequest);
    assert!(response.body.is_empty());
}

#[test]
fn test_response_not_found_has_no_body() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.body.is_empty());
}

#[test]
fn test_response_ok_with_binary_body() {
    let body = vec![0u8, 1, 2, 255];
    let response = Response::ok(body.clone());

    assert_eq!(response.body, body);
}
