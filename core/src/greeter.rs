use tracing::debug;

const DEFAULT_GREETING: &str = "Hello, World!";

/// Builds greeting strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greeter;

impl Greeter {
    pub fn new() -> Self {
        Self
    }

    /// Returns `"Hello, {name}!"`. The name is copied as-is, empty or not.
    pub fn greet(&self, name: &str) -> String {
        debug!(len = name.len(), "greet");
        let mut greeting = String::with_capacity(name.len() + 8);
        greeting.push_str("Hello, ");
        greeting.push_str(name);
        greeting.push('!');
        greeting
    }

    pub fn default_greeting(&self) -> &'static str {
        DEFAULT_GREETING
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
