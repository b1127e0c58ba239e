#![cfg(test)]
use basics_core::Greeter;

#[test]
fn greetings() {
    let greeter: Greeter = Greeter::new();
    assert_eq!(greeter.default_greeting(), "Hello, World!");
    assert_eq!(greeter.greet("Alice"), "Hello, Alice!");
    assert_eq!(greeter.greet(""), "Hello, !");
}

#[test]
fn long_name_is_not_truncated() {
    let greeter: Greeter = Greeter::new();
    let long_name: String = "x".repeat(1000);
    assert_eq!(greeter.greet(&long_name), String::from("Hello, ") + &long_name + "!");
}
