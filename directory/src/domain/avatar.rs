//! Avatar URL derivation.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/6.x/avataaars/svg";
const AVATAR_STYLE: &str = "mouth[]=smile";

/// Bytes escaped in a URI component: everything except ASCII alphanumerics
/// and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the avatar image URL seeded by `username`.
///
/// # Examples
/// ```
/// use user_directory::domain::avatar_url;
///
/// assert_eq!(
///     avatar_url("a b"),
///     "https://api.dicebear.com/6.x/avataaars/svg?seed=a%20b&mouth[]=smile"
/// );
/// ```
#[must_use]
pub fn avatar_url(username: &str) -> String {
    format!(
        "{AVATAR_BASE_URL}?seed={seed}&{AVATAR_STYLE}",
        seed = utf8_percent_encode(username, URI_COMPONENT)
    )
}
