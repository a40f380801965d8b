/// Cookie holding the short-lived access token.
pub const ACCESS_TOKEN_COOKIE: &str = "token_labse";
/// Cookie holding the long-lived refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "token_labse_refresh";

/// Tokens for the current visitor, parsed once at the request boundary and
/// passed explicitly to whatever needs them. No ambient storage is consulted
/// after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl SessionContext {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the context from a raw `Cookie` request header. Unrelated
    /// cookies are ignored; token values pass through untouched.
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        let mut session = Self::empty();
        let Some(header) = header else {
            return session;
        };

        for pair in header.split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if name == ACCESS_TOKEN_COOKIE {
                session.access_token = Some(value.to_string());
            } else if name == REFRESH_TOKEN_COOKIE {
                session.refresh_token = Some(value.to_string());
            }
        }

        session
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    pub fn without_access_token(mut self) -> Self {
        self.access_token = None;
        self
    }

    pub fn without_refresh_token(mut self) -> Self {
        self.refresh_token = None;
        self
    }
}

/// `Set-Cookie` value persisting the access token, scoped to the root path.
pub fn store_access_token(token: &str) -> String {
    format!("{ACCESS_TOKEN_COOKIE}={token}; Path=/")
}

/// `Set-Cookie` value persisting the refresh token, scoped to the root path.
pub fn store_refresh_token(token: &str) -> String {
    format!("{REFRESH_TOKEN_COOKIE}={token}; Path=/")
}

/// `Set-Cookie` value expiring the access token.
pub fn clear_access_token() -> String {
    format!("{ACCESS_TOKEN_COOKIE}=; Path=/; Max-Age=0")
}

/// `Set-Cookie` value expiring the refresh token.
pub fn clear_refresh_token() -> String {
    format!("{REFRESH_TOKEN_COOKIE}=; Path=/; Max-Age=0")
}
