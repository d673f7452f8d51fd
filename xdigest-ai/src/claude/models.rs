#[derive(serde::Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: [Message; 1],
}

#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

#[derive(serde::Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(serde::Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

/// One segment of the model output; non-text blocks carry no `text`
#[derive(serde::Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
