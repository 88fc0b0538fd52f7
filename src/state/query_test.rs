use super::*;

#[test]
fn pending_poll_is_loading() {
    let state = QueryState::<u32>::from_poll(None);
    assert!(state.is_loading());
    assert_eq!(state.data(), None);
    assert_eq!(state.error(), None);
}

#[test]
fn ok_poll_is_ready() {
    let state = QueryState::from_poll(Some(Ok(7_u32)));
    assert!(!state.is_loading());
    assert_eq!(state.data(), Some(&7));
}

#[test]
fn err_poll_carries_message() {
    let state = QueryState::<u32>::from_poll(Some(Err(FetchError::Unavailable("offline".to_owned()))));
    assert_eq!(state.error(), Some("data source unavailable: offline"));
    assert_eq!(state.data(), None);
}
