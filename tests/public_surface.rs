use sentinel_deque::prelude::*;

#[test]
fn new_deque_is_empty() {
    let deque = Deque::new();
    assert!(deque.is_empty());
    assert_eq!(deque.len(), 0);
    assert_eq!(deque.to_string(), "Deque: []");
    assert_eq!(deque.get_front(), DequeItem::missing(0));
}

#[test]
fn both_ends_round_trip() {
    let mut deque = Deque::default();
    deque.add_to_front(1);
    deque.add_to_back(2);
    deque.add_to_front(0);

    assert_eq!(deque.to_string(), "Deque: [0, 1, 2]");
    assert_eq!(deque.pop_front(), Some(0));
    assert_eq!(deque.pop_back(), Some(2));
    assert_eq!(deque.pop_back(), Some(1));
    assert_eq!(deque.pop_back(), None);
    assert!(deque.validate().is_ok());
}

#[test]
fn config_placeholder_flows_through_shared_handle() {
    let shared = SharedDeque::with_config(Config::new(i32::MIN));
    let item = shared.get_back();
    assert!(!item.is_valid());
    assert_eq!(item.value(), i32::MIN);

    shared.add_to_back(3);
    assert_eq!(Option::<i32>::from(shared.get_back()), Some(3));
    assert_eq!(shared.lock().config().placeholder, i32::MIN);
}

#[test]
fn errors_render_as_messages() {
    let err: Error = Error::BackwardWalk { expected: 2, walked: 5 };
    let res: IResult<()> = Err(err.clone());
    assert_eq!(res.unwrap_err(), err);
    assert!(err.to_string().starts_with("backward walk"));
}
