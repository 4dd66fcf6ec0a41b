//! Manual language choice.
//!
//! When a visitor uses the language switch, the chosen locale is stored in a
//! signed session cookie. The entry route reads it back so an explicit choice
//! is not overridden by `Accept-Language` detection later in the session.
//! The cookie has no `Max-Age`/`Expires`, so the browser drops it when the
//! session ends.

use crate::i18n::Locale;
use crate::security;
use axum::http::{header::COOKIE, HeaderMap};

pub const PREFERENCE_COOKIE: &str = "manual_lang";

/// Domain separation for the signed payload.
const PAYLOAD_PREFIX: &str = "manual-language-choice:";

/// Token value for a locale: `<code>.<hex signature>`.
pub fn issue_token(secret: &str, locale: Locale) -> String {
    let payload = format!("{}{}", PAYLOAD_PREFIX, locale.code());
    format!(
        "{}.{}",
        locale.code(),
        security::sign(secret.as_bytes(), payload.as_bytes())
    )
}

/// Locale named by a token, if the token is well-formed and correctly signed.
pub fn verify_token(secret: &str, token: &str) -> Option<Locale> {
    let (code, signature) = token.split_once('.')?;
    let locale = Locale::from_code(code).ok()?;
    let payload = format!("{}{}", PAYLOAD_PREFIX, locale.code());

    security::verify(secret.as_bytes(), payload.as_bytes(), signature).then_some(locale)
}

/// `Set-Cookie` value recording a manual choice for the rest of the session.
pub fn set_cookie_value(secret: &str, locale: Locale, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        PREFERENCE_COOKIE,
        issue_token(secret, locale)
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Extract the raw preference cookie from request headers.
pub fn extract_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == PREFERENCE_COOKIE).then(|| value.to_string())
        })
}

/// The manually chosen locale carried by the request, if any.
pub fn manual_choice(headers: &HeaderMap, secret: &str) -> Option<Locale> {
    extract_cookie(headers).and_then(|token| verify_token(secret, &token))
}
