use basics_common::config::Config;
use basics_core::Greeter;

use crate::terminal::print;

pub fn greet(name: Option<&str>, cfg: &Config) {
    print::greeting(&greeting(name), cfg);
}

fn greeting(name: Option<&str>) -> String {
    let greeter = Greeter::new();
    match name {
        Some(name) => greeter.greet(name),
        None => greeter.default_greeting().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(None), "Hello, World!");
        assert_eq!(greeting(Some("Bob")), "Hello, Bob!");
        assert_eq!(greeting(Some("")), "Hello, !");
    }
}
