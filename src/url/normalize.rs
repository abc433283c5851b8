use crate::url::CanonicalUrl;
use crate::{UrlError, UrlResult};
use url::Url;

/// Resolves a possibly-relative reference against a base URL and strips the
/// fragment
///
/// Resolution follows the WHATWG URL standard, so dot segments are removed and
/// scheme and host are lowercased along the way. Nothing else is rewritten: query
/// strings, trailing slashes and the scheme are kept as found, so normalizing an
/// already canonical URL returns it unchanged.
///
/// # Arguments
///
/// * `href` - The reference as found in the page (absolute or relative)
/// * `base` - The URL of the page the reference was found on
///
/// # Returns
///
/// * `Ok(CanonicalUrl)` - Absolute URL without fragment
/// * `Err(UrlError)` - The reference cannot be parsed as a URL
///
/// # Examples
///
/// ```
/// use crawl_lens::url::normalize;
/// use url::Url;
///
/// let base = Url::parse("http://www.ics.uci.edu/about/").unwrap();
/// let url = normalize("../people.html#faculty", &base).unwrap();
/// assert_eq!(url.as_str(), "http://www.ics.uci.edu/people.html");
/// ```
pub fn normalize(href: &str, base: &Url) -> UrlResult<CanonicalUrl> {
    let resolved = base
        .join(href.trim())
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))?;

    Ok(CanonicalUrl::from_url(resolved))
}

/// Canonicalizes an absolute URL string by stripping its fragment
///
/// # Examples
///
/// ```
/// use crawl_lens::url::canonicalize;
///
/// let a = canonicalize("http://cs.uci.edu/p#a").unwrap();
/// let b = canonicalize("http://cs.uci.edu/p#b").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn canonicalize(url_str: &str) -> UrlResult<CanonicalUrl> {
    let url = Url::parse(url_str.trim())
        .map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;

    Ok(CanonicalUrl::from_url(url))
}
