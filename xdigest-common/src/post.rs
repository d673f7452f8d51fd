/// Placeholder used when the author of a post can't be resolved
pub const UNKNOWN_AUTHOR: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub text: String,
    pub username: String,
    pub name: String,
}

impl Post {
    pub fn new(text: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            username: username.into(),
            name: UNKNOWN_AUTHOR.to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
