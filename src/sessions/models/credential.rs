/// An API token held by a session, and whether a probe call confirmed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credential {
    pub token: Option<String>,
    pub verified: bool,
}

impl Credential {
    pub fn verified(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            verified: true,
        }
    }

    pub fn verified_token(&self) -> Option<&str> {
        match self.verified {
            true => self.token.as_deref(),
            false => None,
        }
    }
}
