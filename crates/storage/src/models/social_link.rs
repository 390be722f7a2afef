//! Social profile fields are edited by hand in the CMS, so the same column
//! may hold a full URL, a bare domain path, a handle with or without `@`, or
//! a numeric profile id. These helpers turn any of those into something a
//! page can link to.

use url::Url;

const INSTAGRAM_BASE: &str = "https://instagram.com";
const ULTISCORE_PROFILE_BASE: &str = "https://ultiscore.com/profile";

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn has_scheme(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Returns the value unchanged when it already carries an http(s) scheme,
/// otherwise prefixes `https://`.
///
/// ```
/// use storage::models::social_link::normalize_url;
///
/// assert_eq!(normalize_url(Some("example.org/a")).as_deref(), Some("https://example.org/a"));
/// assert_eq!(normalize_url(Some("  ")), None);
/// ```
pub fn normalize_url(value: Option<&str>) -> Option<String> {
    let v = trimmed(value)?;
    if has_scheme(v) {
        Some(v.to_string())
    } else {
        Some(format!("https://{}", v))
    }
}

/// Link to an Instagram profile from a URL, `@handle` or bare handle.
pub fn instagram_link(value: Option<&str>) -> Option<String> {
    let v = trimmed(value)?;
    if has_scheme(v) {
        return Some(v.to_string());
    }

    let username = v.strip_prefix('@').unwrap_or(v);
    Some(format!("{}/{}", INSTAGRAM_BASE, username))
}

/// Display handle (`@name`) for an Instagram field.
///
/// Anything that looks like a URL is parsed and its first path segment is
/// used; a URL without a path yields no handle.
pub fn instagram_handle(value: Option<&str>) -> Option<String> {
    let v = trimmed(value)?;

    if v.starts_with('@') {
        return Some(v.to_string());
    }

    if !v.contains('/') && !v.contains(' ') && !v.contains('.') {
        return Some(format!("@{}", v));
    }

    let url = Url::parse(&normalize_url(Some(v))?).ok()?;
    let segment = url.path_segments()?.find(|s| !s.is_empty())?;
    Some(format!("@{}", segment))
}

/// Link to an UltiScore profile from a URL or a numeric profile id.
pub fn ultiscore_link(value: Option<&str>) -> Option<String> {
    let v = trimmed(value)?;
    if has_scheme(v) {
        return Some(v.to_string());
    }

    if v.chars().all(|c| c.is_ascii_digit()) {
        return Some(format!("{}/{}", ULTISCORE_PROFILE_BASE, v));
    }

    normalize_url(Some(v))
}

/// Resolved links for one player card. A button is only shown when both its
/// link and (for Instagram) its label could be derived.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocialLinks {
    pub instagram: Option<(String, String)>,
    pub ultiscore: Option<String>,
}

impl SocialLinks {
    pub fn resolve(instagram: Option<&str>, ultiscore: Option<&str>) -> Self {
        let instagram = match (instagram_link(instagram), instagram_handle(instagram)) {
            (Some(link), Some(handle)) => Some((link, handle)),
            _ => None,
        };

        Self {
            instagram,
            ultiscore: ultiscore_link(ultiscore),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.instagram.is_none() && self.ultiscore.is_none()
    }
}
