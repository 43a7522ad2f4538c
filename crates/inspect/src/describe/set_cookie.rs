//! Explains a `Set-Cookie` value in terms of the request that received it.

use http::Uri;

/// The `SameSite` cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "lax" => Some(Self::Lax),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// A parsed `Set-Cookie` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookie {
    name: String,
    value: String,
    domain: Option<String>,
    path: Option<String>,
    expires: Option<String>,
    max_age: Option<i64>,
    secure: bool,
    http_only: bool,
    same_site: Option<SameSite>,
    partitioned: bool,
}

impl Cookie {
    /// Parses a `Set-Cookie` header value.
    ///
    /// Returns `None` when the value doesn't start with a `name=value` pair.
    /// Unknown attributes are ignored, as browsers do.
    pub fn parse(header_value: &str) -> Option<Self> {
        let mut parts = header_value.split(';');
        let (name, value) = parts.next()?.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut cookie = Cookie { name: name.to_string(), value: unquote(value.trim()).to_string(), ..Cookie::default() };

        for attribute in parts {
            let (key, value) = match attribute.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (attribute.trim(), None),
            };

            match (key.to_ascii_lowercase().as_str(), value) {
                ("domain", Some(domain)) if !domain.trim_start_matches('.').is_empty() => {
                    cookie.domain = Some(domain.trim_start_matches('.').to_ascii_lowercase());
                }
                ("path", Some(path)) if path.starts_with('/') => cookie.path = Some(path.to_string()),
                ("expires", Some(expires)) if !expires.is_empty() => cookie.expires = Some(expires.to_string()),
                ("max-age", Some(max_age)) => {
                    if let Ok(max_age) = max_age.parse() {
                        cookie.max_age = Some(max_age);
                    }
                }
                ("secure", _) => cookie.secure = true,
                ("httponly", _) => cookie.http_only = true,
                ("samesite", Some(same_site)) => cookie.same_site = SameSite::parse(same_site),
                ("partitioned", _) => cookie.partitioned = true,
                _ => {}
            }
        }

        Some(cookie)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn expires(&self) -> Option<&str> {
        self.expires.as_deref()
    }

    pub fn max_age(&self) -> Option<i64> {
        self.max_age
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn is_http_only(&self) -> bool {
        self.http_only
    }

    pub fn same_site(&self) -> Option<SameSite> {
        self.same_site
    }

    pub fn is_partitioned(&self) -> bool {
        self.partitioned
    }
}

fn unquote(value: &str) -> &str {
    value.strip_prefix('"').and_then(|v| v.strip_suffix('"')).unwrap_or(value)
}

/// Computes the default cookie path for a request path, per RFC 6265 section 5.1.4.
fn default_path(request_path: &str) -> &str {
    if !request_path.starts_with('/') {
        return "/";
    }
    match request_path.rfind('/') {
        Some(0) | None => "/",
        Some(index) => &request_path[..index],
    }
}

/// Description of a `Set-Cookie` header received in response to `request_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookieDescription {
    cookie: Option<Cookie>,
    request_host: Option<String>,
    request_path: String,
    plain_http: bool,
}

impl SetCookieDescription {
    pub fn new(header_value: &str, request_url: &Uri) -> Self {
        Self {
            cookie: Cookie::parse(header_value),
            request_host: request_url.host().map(str::to_ascii_lowercase),
            request_path: request_url.path().to_string(),
            plain_http: request_url.scheme_str() == Some("http"),
        }
    }

    /// The parsed cookie, `None` if the value couldn't be parsed.
    pub fn cookie(&self) -> Option<&Cookie> {
        self.cookie.as_ref()
    }

    /// Renders the description as sentences, one per line.
    pub fn lines(&self) -> Vec<String> {
        let Some(cookie) = &self.cookie else {
            return vec!["This Set-Cookie value could not be parsed, so browsers will ignore it.".to_string()];
        };

        let mut lines = vec![format!("This sets a '{}' cookie with the value '{}'.", cookie.name, cookie.value)];

        lines.push(match (&cookie.domain, &self.request_host) {
            (Some(domain), _) => format!("This cookie will be sent in requests to {domain} and all its subdomains."),
            (None, Some(host)) => format!("This cookie will only be sent in requests to {host}."),
            (None, None) => "This cookie will only be sent in requests to the host that set it.".to_string(),
        });

        let path = cookie.path.as_deref().unwrap_or_else(|| default_path(&self.request_path));
        if path == "/" {
            lines.push("It applies to every path on that host.".to_string());
        } else {
            lines.push(format!("It applies to {path} and every path below it."));
        }

        lines.push(match (cookie.max_age, &cookie.expires) {
            (Some(max_age), _) if max_age <= 0 => "The cookie will be deleted immediately.".to_string(),
            (Some(max_age), _) => format!("The cookie expires {max_age} seconds after it was received."),
            (None, Some(expires)) => format!("The cookie expires at {expires}."),
            (None, None) => "This is a session cookie, and will be deleted when the browser session ends.".to_string(),
        });

        if cookie.secure {
            if self.plain_http {
                lines.push("The cookie is marked Secure but was set over plain HTTP, so browsers will reject it.".to_string());
            } else {
                lines.push("The cookie will only be sent over HTTPS.".to_string());
            }
        }

        if cookie.http_only {
            lines.push("The cookie can't be read by JavaScript in the page.".to_string());
        }

        lines.push(match cookie.same_site {
            Some(SameSite::Strict) => "The cookie will only be sent with requests that start on the same site.".to_string(),
            Some(SameSite::Lax) => {
                "The cookie won't be sent with cross-site subrequests, but will be sent when navigating to the site from elsewhere."
                    .to_string()
            }
            Some(SameSite::None) if cookie.secure => "The cookie will be sent with cross-site requests too.".to_string(),
            Some(SameSite::None) => "The cookie is marked SameSite=None without Secure, so browsers will reject it.".to_string(),
            None => "No SameSite attribute is set, so most browsers will treat the cookie as SameSite=Lax.".to_string(),
        });

        if cookie.partitioned {
            lines.push("The cookie is partitioned, and stored separately for each top-level site.".to_string());
        }

        lines
    }
}
