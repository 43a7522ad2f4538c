//! Plain text rendering of a [`HeaderView`].
//!
//! Layout follows the inspector UI: one line per header, a `▸`/`▾` marker on
//! headers that can be expanded, a single summary line standing in for the
//! pseudo-headers, and description lines indented beneath expanded headers.

use std::fmt;

use micro_inspect::present::{HeaderView, PresentedHeader};

/// Shown in place of a header list with no headers.
pub const EMPTY_PLACEHOLDER: &str = "(None)";

/// Appended to truncated values.
pub const TRUNCATION_MARKER: &str = "[...]";

const COLLAPSED: char = '▸';
const EXPANDED: char = '▾';
const NOT_EXPANDABLE: char = ' ';

const PSEUDO_INDENT: &str = "  ";
const DESCRIPTION_INDENT: &str = "    ";

#[derive(Debug, Clone, Copy)]
pub struct TextView<'view> {
    view: &'view HeaderView,
}

impl<'view> TextView<'view> {
    pub fn new(view: &'view HeaderView) -> Self {
        Self { view }
    }

    pub fn lines(&self) -> Vec<String> {
        if self.view.is_empty() {
            return vec![EMPTY_PLACEHOLDER.to_string()];
        }

        let mut lines = Vec::new();

        if !self.view.pseudo_headers().is_empty() {
            let open = self.view.pseudo_headers_open();
            let marker = if open { EXPANDED } else { COLLAPSED };
            lines.push(format!("{marker} {}", self.view.pseudo_headers_summary()));

            if open {
                for header in self.view.pseudo_headers() {
                    push_header(&mut lines, header, PSEUDO_INDENT);
                }
            }
        }

        for header in self.view.normal_headers() {
            push_header(&mut lines, header, "");
        }

        lines
    }
}

fn push_header(lines: &mut Vec<String>, header: &PresentedHeader, indent: &str) {
    let marker = match (header.is_expandable(), header.is_expanded()) {
        (false, _) => NOT_EXPANDABLE,
        (true, true) => EXPANDED,
        (true, false) => COLLAPSED,
    };

    let mut line = format!("{indent}{marker} {}: {}", header.name(), header.value().shown());
    if header.value().is_truncated() {
        line.push(' ');
        line.push_str(TRUNCATION_MARKER);
    }
    lines.push(line);

    if !header.is_expanded() {
        return;
    }

    // the link only ever accompanies a description
    if let Some(description) = header.description() {
        lines.extend(description.lines().into_iter().map(|line| format!("{indent}{DESCRIPTION_INDENT}{line}")));
        if let Some(url) = header.docs_url() {
            lines.push(format!("{indent}{DESCRIPTION_INDENT}Find out more: {url}"));
        }
    }
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{Uri, Version};
    use indoc::indoc;
    use micro_inspect::docs::{DocsCatalogue, HeaderDoc};
    use micro_inspect::present::{Expansion, HeaderPresenter, HeaderSlot};
    use micro_inspect::protocol::RawHeader;

    fn url() -> Uri {
        "https://example.com/".parse().unwrap()
    }

    fn docs() -> DocsCatalogue {
        let mut docs = DocsCatalogue::new();
        docs.insert("content-type", HeaderDoc::new("The media type.", "https://docs.example/content-type"));
        docs.insert("set-cookie", HeaderDoc::new("Sends a cookie.", "https://docs.example/set-cookie"));
        docs
    }

    fn render(pairs: &[(&str, &str)], version: Version, paid: bool, expansion: &Expansion) -> String {
        let presenter = HeaderPresenter::builder().docs(docs()).entitlement(paid).build().unwrap();
        let headers: Vec<_> = pairs.iter().copied().map(RawHeader::from).collect();
        let view = presenter.present(&headers, version, &url(), expansion);
        TextView::new(&view).to_string()
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(&[], Version::HTTP_11, false, &Expansion::collapsed()), "(None)\n");
    }

    #[test]
    fn test_collapsed_view() {
        let output = render(
            &[("x-custom", "1"), ("Content-Type", "text/html"), (":status", "200")],
            Version::HTTP_2,
            false,
            &Expansion::collapsed(),
        );

        assert_eq!(
            output,
            indoc! {"
            ▸ HTTP/2 pseudo-headers
            ▸ Content-Type: text/html
              x-custom: 1
            "}
        );
    }

    #[test]
    fn test_expanded_view() {
        let output = render(
            &[("x-custom", "1"), ("Content-Type", "text/html"), (":status", "200")],
            Version::HTTP_2,
            false,
            &Expansion::expand_all(),
        );

        assert_eq!(
            output,
            indoc! {"
            ▾ HTTP/2 pseudo-headers
                :status: 200
            ▾ Content-Type: text/html
                The media type.
                Find out more: https://docs.example/content-type
              x-custom: 1
            "}
        );
    }

    #[test]
    fn test_truncated_value() {
        let long_value = "a".repeat(250);
        let output = render(&[("X-Long", long_value.as_str())], Version::HTTP_11, false, &Expansion::collapsed());

        assert_eq!(output, format!("▸ X-Long: {} [...]\n", "a".repeat(190)));

        let output = render(&[("X-Long", long_value.as_str())], Version::HTTP_11, false, &Expansion::collapsed().expand(HeaderSlot::normal(0)));
        assert_eq!(output, format!("▾ X-Long: {long_value}\n"));
    }

    #[test]
    fn test_set_cookie_for_free_user() {
        let lines = TextView::new(
            &HeaderPresenter::builder()
                .docs(docs())
                .build()
                .unwrap()
                .present(&[RawHeader::new("Set-Cookie", "id=1")], Version::HTTP_11, &url(), &Expansion::expand_all()),
        )
        .lines();

        assert_eq!(lines, vec!["▾ Set-Cookie: id=1", "    Sends a cookie.", "    Find out more: https://docs.example/set-cookie"]);
    }

    #[test]
    fn test_set_cookie_for_paid_user() {
        let output = render(&[("Set-Cookie", "id=1; Secure; HttpOnly; SameSite=Strict")], Version::HTTP_11, true, &Expansion::expand_all());

        assert_eq!(
            output,
            indoc! {"
            ▾ Set-Cookie: id=1; Secure; HttpOnly; SameSite=Strict
                This sets a 'id' cookie with the value '1'.
                This cookie will only be sent in requests to example.com.
                It applies to every path on that host.
                This is a session cookie, and will be deleted when the browser session ends.
                The cookie will only be sent over HTTPS.
                The cookie can't be read by JavaScript in the page.
                The cookie will only be sent with requests that start on the same site.
                Find out more: https://docs.example/set-cookie
            "}
        );
    }

    #[test]
    fn test_only_pseudo_headers_are_shown_as_normal() {
        let lines = TextView::new(
            &HeaderPresenter::builder()
                .docs(docs())
                .build()
                .unwrap()
                .present(&[RawHeader::new(":status", "204")], Version::HTTP_2, &url(), &Expansion::collapsed()),
        )
        .lines();

        assert_eq!(lines, vec!["  :status: 204"]);
    }
}
