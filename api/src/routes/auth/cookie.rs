//! Refresh token cookie construction

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use passage_shared::config::CookieConfig;

/// Builds the cookie carrying a refresh token
///
/// Scripts cannot read it and browsers only send it to the refresh path.
pub fn refresh_cookie(config: &CookieConfig, token: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(config.name.clone(), token)
        .path(config.path.clone())
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(max_age_seconds.max(0)))
        .finish()
}

/// Builds a cookie that makes the browser drop the refresh token
pub fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = refresh_cookie(config, String::new(), 0);
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_cookie_attributes() {
        let config = CookieConfig::default();
        let cookie = refresh_cookie(&config, "token".to_string(), 3600);

        assert_eq!(cookie.name(), "refresh_token");
        assert_eq!(cookie.value(), "token");
        assert_eq!(cookie.path(), Some("/api/v1/auth/refresh"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let config = CookieConfig::default();
        let cookie = removal_cookie(&config);

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/api/v1/auth/refresh"));
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
