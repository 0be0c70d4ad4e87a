//! Social profile URL classification.
//!
//! Recognizes profile links for LinkedIn, Twitter (including `x.com`),
//! Instagram and Facebook, and rewrites each one to a canonical URL so that the
//! same profile linked in different ways collapses to one entry after
//! normalization. Share buttons, intents, posts and other non-profile paths are
//! rejected.

use regex::Regex;
use std::sync::LazyLock;
use strum_macros::EnumIter as EnumIterMacro;
use url::Url;

use crate::utils::compile_regex_unsafe;

// Host patterns (matched against the lowercased host)
const LINKEDIN_HOST_PATTERN: &str = r"^(?:[a-z]{2,3}\.)?linkedin\.com$";
const TWITTER_HOST_PATTERN: &str = r"^(?:www\.|mobile\.)?(twitter\.com|x\.com)$";
const INSTAGRAM_HOST_PATTERN: &str = r"^(?:www\.|m\.)?instagram\.com$";
const FACEBOOK_HOST_PATTERN: &str = r"^(?:(?:www|m|web|mobile|business|[a-z]{2}-[a-z]{2})\.)?(?:facebook\.com|fb\.com)$";

// Path patterns; group 1 is the profile path kept in the canonical URL
const LINKEDIN_PATH_PATTERN: &str = r"^/((?:in|company|pub|school)/[A-Za-z0-9\-_%.]{2,100})(?:/|$)";
const TWITTER_PATH_PATTERN: &str = r"^/@?([A-Za-z0-9_]{1,15})(?:/|$)";
const INSTAGRAM_PATH_PATTERN: &str = r"^/([A-Za-z0-9_.]{1,30})(?:/|$)";
const FACEBOOK_PATH_PATTERN: &str =
    r"^/((?:pages|people)/[^/]+/\d+|[A-Za-z0-9.\-]{2,50})(?:/|$)";

// First path segments that are site features, not accounts
const TWITTER_RESERVED: &[&str] = &[
    "account", "compose", "explore", "hashtag", "home", "i", "intent", "login", "messages",
    "notifications", "oauth", "privacy", "search", "settings", "share", "signup", "tos",
    "widgets",
];
const INSTAGRAM_RESERVED: &[&str] = &[
    "about", "accounts", "developer", "direct", "explore", "legal", "p", "reel", "reels",
    "stories", "tv", "web",
];
const FACEBOOK_RESERVED: &[&str] = &[
    "about", "ads", "business", "dialog", "events", "gaming", "groups", "hashtag", "help",
    "home.php", "l.php", "legal", "login", "login.php", "marketplace", "permalink.php",
    "photo", "photo.php", "plugins", "policies", "privacy", "share", "share.php", "sharer",
    "sharer.php", "story.php", "tr", "watch",
];

static LINKEDIN_HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LINKEDIN_HOST_PATTERN, "LINKEDIN_HOST_RE"));
static TWITTER_HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TWITTER_HOST_PATTERN, "TWITTER_HOST_RE"));
static INSTAGRAM_HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(INSTAGRAM_HOST_PATTERN, "INSTAGRAM_HOST_RE"));
static FACEBOOK_HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(FACEBOOK_HOST_PATTERN, "FACEBOOK_HOST_RE"));

static LINKEDIN_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LINKEDIN_PATH_PATTERN, "LINKEDIN_PATH_RE"));
static TWITTER_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TWITTER_PATH_PATTERN, "TWITTER_PATH_RE"));
static INSTAGRAM_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(INSTAGRAM_PATH_PATTERN, "INSTAGRAM_PATH_RE"));
static FACEBOOK_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(FACEBOOK_PATH_PATTERN, "FACEBOOK_PATH_RE"));

/// Social platforms with a dedicated field in [`crate::HandleCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIterMacro)]
pub enum Platform {
    /// Personal, company, school and publisher pages
    LinkedIn,
    /// Accounts on `twitter.com` and `x.com`
    Twitter,
    /// Accounts; posts, reels and stories are not profiles
    Instagram,
    /// Pages, people and numeric `profile.php` profiles
    Facebook,
}

impl Platform {
    /// Human-readable platform name.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized social profile link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialProfile {
    /// Platform the profile belongs to
    pub platform: Platform,
    /// Canonical profile URL (https, no query or fragment)
    pub url: String,
    /// Account name or profile path, e.g. `apify` or `company/apify`
    pub identifier: String,
}

/// Classifies a single link as a social profile.
///
/// Accepts absolute `http(s)` URLs, protocol-relative URLs (`//twitter.com/x`)
/// and bare host URLs (`www.linkedin.com/in/x`). Relative paths never match.
///
/// # Returns
///
/// The recognized profile, or `None` if the link is not a profile link of a
/// supported platform.
pub fn classify_profile_url(href: &str) -> Option<SocialProfile> {
    let url = parse_absolute(href.trim())?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?.to_ascii_lowercase();
    let path = url.path();

    if LINKEDIN_HOST_RE.is_match(&host) {
        let identifier = capture_path(&LINKEDIN_PATH_RE, path)?;
        return Some(profile(Platform::LinkedIn, "www.linkedin.com", identifier));
    }
    if let Some(caps) = TWITTER_HOST_RE.captures(&host) {
        let domain = caps.get(1).map_or("twitter.com", |m| m.as_str());
        let identifier = capture_path(&TWITTER_PATH_RE, path)?;
        if is_reserved(TWITTER_RESERVED, &identifier) {
            return None;
        }
        return Some(profile(Platform::Twitter, domain, identifier));
    }
    if INSTAGRAM_HOST_RE.is_match(&host) {
        let identifier = capture_path(&INSTAGRAM_PATH_RE, path)?;
        if is_reserved(INSTAGRAM_RESERVED, &identifier) {
            return None;
        }
        return Some(profile(Platform::Instagram, "www.instagram.com", identifier));
    }
    if FACEBOOK_HOST_RE.is_match(&host) {
        return facebook_profile(&url);
    }
    None
}

/// Classifies every link in `urls`, keeping input order and duplicates.
pub fn social_profiles_from_urls<I, S>(urls: I) -> Vec<SocialProfile>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    urls.into_iter()
        .filter_map(|url| classify_profile_url(url.as_ref()))
        .collect()
}

fn parse_absolute(href: &str) -> Option<Url> {
    if href.is_empty() || (href.starts_with('/') && !href.starts_with("//")) {
        return None;
    }
    // `mailto:`, `tel:`, `javascript:` and friends
    if let Some((scheme, rest)) = href.split_once(':') {
        let looks_like_scheme = !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if looks_like_scheme && !rest.starts_with("//") {
            return None;
        }
    }
    let candidate = if href.starts_with("//") {
        format!("https:{href}")
    } else if href.contains("://") {
        href.to_string()
    } else {
        format!("https://{href}")
    };
    Url::parse(&candidate).ok()
}

fn capture_path(re: &Regex, path: &str) -> Option<String> {
    re.captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn is_reserved(reserved: &[&str], identifier: &str) -> bool {
    reserved
        .iter()
        .any(|name| name.eq_ignore_ascii_case(identifier))
}

fn facebook_profile(url: &Url) -> Option<SocialProfile> {
    // Numeric profiles live behind profile.php?id=<digits>
    if url.path() == "/profile.php" {
        let id = url
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))?;
        return Some(SocialProfile {
            platform: Platform::Facebook,
            url: format!("https://www.facebook.com/profile.php?id={id}"),
            identifier: id,
        });
    }
    let identifier = capture_path(&FACEBOOK_PATH_RE, url.path())?;
    if is_reserved(FACEBOOK_RESERVED, &identifier) {
        return None;
    }
    Some(profile(Platform::Facebook, "www.facebook.com", identifier))
}

fn profile(platform: Platform, host: &str, identifier: String) -> SocialProfile {
    SocialProfile {
        platform,
        url: format!("https://{host}/{identifier}"),
        identifier,
    }
}
