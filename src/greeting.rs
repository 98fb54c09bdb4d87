//! Greeting helpers shared by the server and client.

/// Returns a personalized greeting in the form `"Hello, {name}!"`.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// The canonical `"Hello, World!"` greeting.
pub fn hello_world() -> String {
    greet("World")
}
