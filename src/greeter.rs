/// Holds a name and greets it.
///
/// The name is fixed at construction. Any string is accepted, including the
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    name: String,
}

impl Greeter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `"Hello, {name}!"`.
    pub fn greet(&self) -> String {
        format!("Hello, {}!", self.name)
    }
}
