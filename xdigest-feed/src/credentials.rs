/// How requests to the source platform are authorized.
///
/// Deployments differ: the official API takes an OAuth2 bearer token, a logged-in
/// web session takes the `auth_token`/`ct0` cookie pair, and hosted proxies take a
/// vendor key in a custom header.
#[derive(Clone, serde::Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum Credentials {
    Bearer {
        #[serde(default, deserialize_with = "secret")]
        token: String,
    },
    Cookie {
        #[serde(default, deserialize_with = "secret")]
        auth_token: String,
        #[serde(default, deserialize_with = "secret")]
        csrf_token: String,
    },
    ApiKey {
        #[serde(default = "default_api_key_header", deserialize_with = "secret")]
        header: String,
        #[serde(default, deserialize_with = "secret")]
        key: String,
    },
}

fn default_api_key_header() -> String {
    "x-api-key".to_string()
}

/// Environment sources turn all-digit values into numbers; secrets stay text.
fn secret<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct SecretVisitor;

    impl serde::de::Visitor<'_> for SecretVisitor {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: serde::de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(SecretVisitor)
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials::Bearer {
            token: String::new(),
        }
    }
}

impl Credentials {
    pub fn scheme(&self) -> &'static str {
        match self {
            Credentials::Bearer { .. } => "bearer",
            Credentials::Cookie { .. } => "cookie",
            Credentials::ApiKey { .. } => "api_key",
        }
    }

    /// Whether every secret the scheme needs is present
    pub fn is_configured(&self) -> bool {
        match self {
            Credentials::Bearer { token } => !token.is_empty(),
            Credentials::Cookie {
                auth_token,
                csrf_token,
            } => !auth_token.is_empty() && !csrf_token.is_empty(),
            Credentials::ApiKey { header, key } => !header.is_empty() && !key.is_empty(),
        }
    }

    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credentials::Bearer { token } => request.bearer_auth(token),
            Credentials::Cookie {
                auth_token,
                csrf_token,
            } => request
                .header(
                    reqwest::header::COOKIE,
                    format!("auth_token={auth_token}; ct0={csrf_token}"),
                )
                .header("x-csrf-token", csrf_token),
            Credentials::ApiKey { header, key } => request.header(header.as_str(), key),
        }
    }
}

// Secrets never end up in logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("scheme", &self.scheme())
            .field("configured", &self.is_configured())
            .finish()
    }
}
