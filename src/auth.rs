//! Resolution of the CGI-Clinics API token.
//!
//! The token is looked up from [TOKEN_ENV_VAR] first. When the variable is
//! unset and the process is attached to a terminal, the user is prompted for
//! it. The resolved token belongs to the caller: pass it to
//! [crate::CgiClient::build], there is no process-wide token state.

use crate::errors::TokenError;
use aliri_braid::braid;

/// Environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "CGI_CLINICS_API_TOKEN";

/// A CGI-Clinics API token, sent as the `X-Api-Key` header.
#[braid(serde)]
pub struct ApiToken;

/// Read the token from [TOKEN_ENV_VAR]. An empty value counts as unset.
pub fn token_from_env() -> Option<ApiToken> {
    std::env::var(TOKEN_ENV_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(ApiToken::new)
}

/// Resolve the API token: environment variable first, interactive prompt as
/// a fallback. Fails with [TokenError::Missing] in a non-interactive context
/// with no variable set.
pub fn resolve_token() -> Result<ApiToken, TokenError> {
    if let Some(token) = token_from_env() {
        return Ok(token);
    }
    if !console::user_attended() {
        return Err(TokenError::Missing);
    }
    let entered = dialoguer::Password::new()
        .with_prompt(format!("{} is not set, please enter the token", TOKEN_ENV_VAR))
        .allow_empty_password(true)
        .interact()?;
    if entered.is_empty() {
        Err(TokenError::Missing)
    } else {
        Ok(ApiToken::new(entered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// The process environment is shared across concurrently running tests.
    /// Any test touching [TOKEN_ENV_VAR] must hold this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_token_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(TOKEN_ENV_VAR);
        assert!(token_from_env().is_none());
        std::env::set_var(TOKEN_ENV_VAR, "");
        assert!(token_from_env().is_none());
        std::env::set_var(TOKEN_ENV_VAR, "s3cret");
        assert_eq!(token_from_env(), Some(ApiToken::from_static("s3cret")));
        std::env::remove_var(TOKEN_ENV_VAR);
    }
}
