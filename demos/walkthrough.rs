use sentinel_deque::{Deque, SharedDeque};

fn main() {
    env_logger::init();

    let mut deque = Deque::new();
    println!("{}", deque);

    deque.add_to_back(47);
    deque.add_to_back(1000);
    deque.add_to_front(4);
    deque.add_to_back(10);
    deque.add_to_front(84);
    println!("{}", deque);

    deque.remove_front();
    deque.remove_front();
    deque.remove_back();
    deque.remove_front();

    deque.add_to_front(0);
    deque.add_to_back(2);
    println!("{} front={:?} back={:?}", deque, deque.get_front(), deque.get_back());

    while deque.remove_back() {}
    println!("{} front valid: {}", deque, deque.get_front().is_valid());

    let shared = SharedDeque::from(deque);
    shared.add_to_back(1);
    println!("{}", shared.describe());
}
