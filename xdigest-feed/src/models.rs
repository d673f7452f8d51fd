use std::collections::HashMap;

use xdigest_common::Post;
use xdigest_common::post::UNKNOWN_AUTHOR;

#[derive(serde::Deserialize)]
pub struct ListTweetsResponse {
    #[serde(default)]
    pub data: Vec<Tweet>,
    #[serde(default)]
    pub includes: Option<Includes>,
}

#[derive(serde::Deserialize)]
pub struct Tweet {
    pub text: String,
    #[serde(default)]
    pub author_id: Option<String>,
}

#[derive(serde::Deserialize, Default)]
pub struct Includes {
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(serde::Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl ListTweetsResponse {
    /// Resolve authors through the `includes.users` expansion
    pub fn into_posts(self) -> Vec<Post> {
        let users: HashMap<String, User> = self
            .includes
            .unwrap_or_default()
            .users
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();

        self.data
            .into_iter()
            .map(|Tweet { text, author_id }| {
                let user = author_id.as_ref().and_then(|id| users.get(id));

                let username = user
                    .and_then(|u| u.username.clone())
                    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
                let name = user
                    .and_then(|u| u.name.clone())
                    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

                Post::new(text, username).with_name(name)
            })
            .collect()
    }
}
