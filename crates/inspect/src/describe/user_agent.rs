//! Breaks a `User-Agent` value into its products and comments.

/// One element of a `User-Agent` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAgentPart {
    /// A `name/version` product token, the version is optional.
    Product { name: String, version: Option<String> },
    /// A parenthesised comment, without the parentheses.
    Comment(String),
}

/// Parses a `User-Agent` value into products and comments, in order.
///
/// Comments may nest; unbalanced parentheses run to the end of the value.
pub fn parse_user_agent(value: &str) -> Vec<UserAgentPart> {
    let mut parts = Vec::new();
    let mut chars = value.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '(' {
            chars.next();
            let mut depth = 1;
            let mut end = value.len();
            for (index, c) in chars.by_ref() {
                match c {
                    '(' => depth += 1,
                    ')' => {
                        depth -= 1;
                        if depth == 0 {
                            end = index;
                            break;
                        }
                    }
                    _ => {}
                }
            }
            parts.push(UserAgentPart::Comment(value[start + 1..end].trim().to_string()));
            continue;
        }

        let mut end = value.len();
        while let Some(&(index, c)) = chars.peek() {
            if c.is_whitespace() || c == '(' {
                end = index;
                break;
            }
            chars.next();
        }

        let token = &value[start..end];
        let part = match token.split_once('/') {
            Some((name, version)) if !version.is_empty() => {
                UserAgentPart::Product { name: name.to_string(), version: Some(version.to_string()) }
            }
            Some((name, _)) => UserAgentPart::Product { name: name.to_string(), version: None },
            None => UserAgentPart::Product { name: token.to_string(), version: None },
        };
        parts.push(part);
    }

    parts
}

/// Description of a `User-Agent` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentDescription {
    parts: Vec<UserAgentPart>,
}

impl UserAgentDescription {
    pub fn new(header_value: &str) -> Self {
        Self { parts: parse_user_agent(header_value) }
    }

    pub fn parts(&self) -> &[UserAgentPart] {
        &self.parts
    }

    /// Renders the description, one product per line with its comments attached.
    pub fn lines(&self) -> Vec<String> {
        if self.parts.is_empty() {
            return vec!["This user agent doesn't identify itself.".to_string()];
        }

        let mut lines = vec!["This user agent identifies itself as:".to_string()];
        for part in &self.parts {
            match part {
                UserAgentPart::Product { name, version: Some(version) } => lines.push(format!("- {name} version {version}")),
                UserAgentPart::Product { name, version: None } => lines.push(format!("- {name}")),
                UserAgentPart::Comment(comment) => {
                    let details = comment.split(';').map(str::trim).filter(|detail| !detail.is_empty()).collect::<Vec<_>>().join(", ");
                    match lines.last_mut() {
                        Some(last) if last.starts_with("- ") => {
                            last.push_str(" (");
                            last.push_str(&details);
                            last.push(')');
                        }
                        _ => lines.push(format!("- ({details})")),
                    }
                }
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, version: Option<&str>) -> UserAgentPart {
        UserAgentPart::Product { name: name.to_string(), version: version.map(str::to_string) }
    }

    #[test]
    fn test_parse_browser_user_agent() {
        let parts = parse_user_agent(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        );

        assert_eq!(
            parts,
            vec![
                product("Mozilla", Some("5.0")),
                UserAgentPart::Comment("Windows NT 10.0; Win64; x64".to_string()),
                product("AppleWebKit", Some("537.36")),
                UserAgentPart::Comment("KHTML, like Gecko".to_string()),
                product("Chrome", Some("120.0.0.0")),
                product("Safari", Some("537.36")),
            ]
        );
    }

    #[test]
    fn test_parse_without_versions() {
        assert_eq!(parse_user_agent("curl/"), vec![product("curl", None)]);
        assert_eq!(parse_user_agent("  bot  "), vec![product("bot", None)]);
        assert!(parse_user_agent("").is_empty());
    }

    #[test]
    fn test_parse_nested_and_unbalanced_comments() {
        assert_eq!(parse_user_agent("A/1 (x (y) z)"), vec![product("A", Some("1")), UserAgentPart::Comment("x (y) z".to_string())]);
        assert_eq!(parse_user_agent("A/1 (open"), vec![product("A", Some("1")), UserAgentPart::Comment("open".to_string())]);
    }

    #[test]
    fn test_parse_comment_directly_after_token() {
        assert_eq!(parse_user_agent("A/1(c)"), vec![product("A", Some("1")), UserAgentPart::Comment("c".to_string())]);
    }

    #[test]
    fn test_lines() {
        let description = UserAgentDescription::new("Mozilla/5.0 (X11; Linux x86_64) curl/8.4.0");

        assert_eq!(
            description.lines(),
            vec!["This user agent identifies itself as:", "- Mozilla version 5.0 (X11, Linux x86_64)", "- curl version 8.4.0"]
        );
    }

    #[test]
    fn test_lines_leading_comment() {
        let description = UserAgentDescription::new("(compatible; bot)");

        assert_eq!(description.lines(), vec!["This user agent identifies itself as:", "- (compatible, bot)"]);
    }

    #[test]
    fn test_lines_empty() {
        assert_eq!(UserAgentDescription::new("   ").lines().len(), 1);
    }
}
