use std::fmt;

use http::{Uri, Version};
use tracing::trace;

use super::{Expansion, HeaderSlot, PresenterBuildError, TruncationLimits, ValueView};
use crate::classify::classify;
use crate::describe::{Description, SetCookieDescription, UserAgentDescription, SET_COOKIE, USER_AGENT};
use crate::docs::{DocsCatalogue, HeaderDoc, HeaderDocs};
use crate::ensure;
use crate::entitlement::Entitlement;
use crate::protocol::{major_version, RawHeader};

/// A header ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedHeader {
    slot: HeaderSlot,
    name: String,
    value: ValueView,
    expanded: bool,
    expandable: bool,
    description: Option<Description>,
    docs_url: Option<String>,
}

impl PresentedHeader {
    pub fn slot(&self) -> HeaderSlot {
        self.slot
    }

    /// The header name as captured.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ValueView {
        &self.value
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns true if expanding would reveal more: a description or the rest of a long value.
    pub fn is_expandable(&self) -> bool {
        self.expandable
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// The "find out more" link, only set alongside a description.
    pub fn docs_url(&self) -> Option<&str> {
        self.docs_url.as_deref()
    }
}

/// The full header view of one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    major_version: u8,
    pseudo_headers_open: bool,
    pseudo_headers: Vec<PresentedHeader>,
    normal_headers: Vec<PresentedHeader>,
}

impl HeaderView {
    pub fn major_version(&self) -> u8 {
        self.major_version
    }

    /// Pseudo-headers, shown behind a single collapsible summary. Never described.
    pub fn pseudo_headers(&self) -> &[PresentedHeader] {
        &self.pseudo_headers
    }

    pub fn pseudo_headers_open(&self) -> bool {
        self.pseudo_headers_open
    }

    /// Summary line for the pseudo-header section, e.g. `HTTP/2 pseudo-headers`.
    pub fn pseudo_headers_summary(&self) -> String {
        format!("HTTP/{} pseudo-headers", self.major_version)
    }

    pub fn normal_headers(&self) -> &[PresentedHeader] {
        &self.normal_headers
    }

    /// Returns true if the message had no headers.
    pub fn is_empty(&self) -> bool {
        self.normal_headers.is_empty() && self.pseudo_headers.is_empty()
    }
}

/// Turns captured headers into a [`HeaderView`].
///
/// Docs and entitlement are injected, see [`HeaderPresenter::builder`].
pub struct HeaderPresenter {
    docs: Box<dyn HeaderDocs>,
    entitlement: Box<dyn Entitlement>,
    limits: TruncationLimits,
}

impl fmt::Debug for HeaderPresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderPresenter")
            .field("paid_user", &self.entitlement.is_paid_user())
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl HeaderPresenter {
    pub fn builder() -> HeaderPresenterBuilder {
        HeaderPresenterBuilder::new()
    }

    pub fn limits(&self) -> TruncationLimits {
        self.limits
    }

    /// Classifies `headers` and prepares each one for display.
    ///
    /// Pure: the same inputs always produce the same view.
    pub fn present(
        &self,
        headers: &[RawHeader],
        version: Version,
        request_url: &Uri,
        expansion: &Expansion,
    ) -> HeaderView {
        let (pseudo, normal) = classify(headers, version).into_parts();

        let pseudo_headers = pseudo
            .into_iter()
            .enumerate()
            .map(|(index, header)| self.present_header(HeaderSlot::pseudo(index), header, None, expansion))
            .collect();

        let normal_headers = normal
            .into_iter()
            .enumerate()
            .map(|(index, header)| self.present_header(HeaderSlot::normal(index), header, Some(request_url), expansion))
            .collect();

        HeaderView {
            major_version: major_version(version),
            pseudo_headers_open: expansion.pseudo_headers_open(),
            pseudo_headers,
            normal_headers,
        }
    }

    /// `request_url` is `None` for headers that must not be described.
    fn present_header(
        &self,
        slot: HeaderSlot,
        header: RawHeader,
        request_url: Option<&Uri>,
        expansion: &Expansion,
    ) -> PresentedHeader {
        let (name, value) = header.into_parts();
        let expanded = expansion.is_expanded(slot);

        let (description, docs_url) = match request_url {
            Some(request_url) => self.describe_with_link(&name, &value, request_url),
            None => (None, None),
        };

        let expandable = description.is_some() || self.limits.is_long(&value);
        let value = self.limits.truncate(&value, expanded);
        trace!(name = %name, truncated = value.is_truncated(), described = description.is_some(), "presented header");

        PresentedHeader { slot, name, value, expanded, expandable, description, docs_url }
    }

    /// Same as [`HeaderPresenter::describe`], plus the docs link. The docs are looked up once.
    fn describe_with_link(&self, name: &str, value: &str, request_url: &Uri) -> (Option<Description>, Option<String>) {
        let name = name.to_lowercase();
        let doc = self.docs.lookup(&name);

        let Some(description) = self.select_description(&name, value, request_url, doc.as_ref()) else {
            return (None, None);
        };

        let docs_url = doc.map(|doc| doc.url().to_string()).filter(|url| !url.is_empty());
        (Some(description), docs_url)
    }

    /// Selects the description for a header.
    ///
    /// Paid users get the rich `Set-Cookie` and `User-Agent` descriptions; everything
    /// else falls back to the docs summary for the lower-cased name, if there is one.
    pub fn describe(&self, name: &str, value: &str, request_url: &Uri) -> Option<Description> {
        let name = name.to_lowercase();
        let doc = self.docs.lookup(&name);
        self.select_description(&name, value, request_url, doc.as_ref())
    }

    /// `lower_name` must already be lower-cased and `doc` looked up for it.
    fn select_description(
        &self,
        lower_name: &str,
        value: &str,
        request_url: &Uri,
        doc: Option<&HeaderDoc>,
    ) -> Option<Description> {
        if self.entitlement.is_paid_user() {
            match lower_name {
                SET_COOKIE => return Some(Description::SetCookie(SetCookieDescription::new(value, request_url))),
                USER_AGENT => return Some(Description::UserAgent(UserAgentDescription::new(value))),
                _ => {}
            }
        }

        let summary = doc.map(HeaderDoc::summary).filter(|summary| !summary.is_empty());
        if summary.is_none() {
            trace!(name = %lower_name, "no docs for header");
        }
        summary.map(|summary| Description::Summary(summary.to_string()))
    }
}

/// Builder for [`HeaderPresenter`].
///
/// Defaults: the built-in docs catalogue, a non-paid viewer and the standard
/// truncation limits.
pub struct HeaderPresenterBuilder {
    docs: Option<Box<dyn HeaderDocs>>,
    entitlement: Option<Box<dyn Entitlement>>,
    limits: TruncationLimits,
}

impl fmt::Debug for HeaderPresenterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderPresenterBuilder").field("limits", &self.limits).finish_non_exhaustive()
    }
}

impl HeaderPresenterBuilder {
    fn new() -> Self {
        Self { docs: None, entitlement: None, limits: TruncationLimits::default() }
    }

    pub fn docs(mut self, docs: impl HeaderDocs + 'static) -> Self {
        self.docs = Some(Box::new(docs));
        self
    }

    pub fn entitlement(mut self, entitlement: impl Entitlement + 'static) -> Self {
        self.entitlement = Some(Box::new(entitlement));
        self
    }

    pub fn long_value_limit(mut self, limit: usize) -> Self {
        self.limits = TruncationLimits::new(limit, self.limits.truncated_length());
        self
    }

    pub fn truncated_length(mut self, length: usize) -> Self {
        self.limits = TruncationLimits::new(self.limits.long_value_limit(), length);
        self
    }

    /// # Errors
    ///
    /// Returns [`PresenterBuildError::InvalidTruncation`] if the truncated length
    /// exceeds the long value limit.
    pub fn build(self) -> Result<HeaderPresenter, PresenterBuildError> {
        let limits = self.limits;
        ensure!(
            limits.truncated_length() <= limits.long_value_limit(),
            PresenterBuildError::InvalidTruncation {
                long_value_limit: limits.long_value_limit(),
                truncated_length: limits.truncated_length(),
            }
        );

        let docs: Box<dyn HeaderDocs> = match self.docs {
            Some(docs) => docs,
            None => Box::new(DocsCatalogue::builtin()),
        };
        let entitlement: Box<dyn Entitlement> = match self.entitlement {
            Some(entitlement) => entitlement,
            None => Box::new(false),
        };

        Ok(HeaderPresenter { docs, entitlement, limits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::MockHeaderDocs;
    use crate::entitlement::MockEntitlement;
    use crate::present::{Section, LONG_HEADER_LIMIT, TRUNCATED_LENGTH};
    use mockall::predicate::eq;

    fn url() -> Uri {
        "https://example.com/account/login".parse().unwrap()
    }

    fn headers(pairs: &[(&str, &str)]) -> Vec<RawHeader> {
        pairs.iter().copied().map(RawHeader::from).collect()
    }

    fn docs_with(name: &'static str, summary: &'static str, url: &'static str) -> MockHeaderDocs {
        let mut docs = MockHeaderDocs::new();
        docs.expect_lookup().with(eq(name)).returning(move |_| Some(HeaderDoc::new(summary, url)));
        docs.expect_lookup().returning(|_| None);
        docs
    }

    fn presenter(paid: bool) -> HeaderPresenter {
        HeaderPresenter::builder().entitlement(paid).build().unwrap()
    }

    #[test]
    fn test_present_partitions_and_sorts() {
        let view = presenter(false).present(
            &headers(&[("Content-Type", "text/html"), (":status", "200"), ("accept", "*/*")]),
            Version::HTTP_2,
            &url(),
            &Expansion::collapsed(),
        );

        assert_eq!(view.major_version(), 2);
        assert_eq!(view.pseudo_headers_summary(), "HTTP/2 pseudo-headers");

        let pseudo: Vec<_> = view.pseudo_headers().iter().map(PresentedHeader::name).collect();
        assert_eq!(pseudo, vec![":status"]);
        let normal: Vec<_> = view.normal_headers().iter().map(PresentedHeader::name).collect();
        assert_eq!(normal, vec!["accept", "Content-Type"]);

        assert_eq!(view.normal_headers()[1].slot(), HeaderSlot::normal(1));
        assert_eq!(view.pseudo_headers()[0].slot().section(), Section::Pseudo);
    }

    #[test]
    fn test_present_empty() {
        let view = presenter(false).present(&[], Version::HTTP_11, &url(), &Expansion::collapsed());
        assert!(view.is_empty());
    }

    #[test]
    fn test_pseudo_headers_are_never_described() {
        let mut docs = MockHeaderDocs::new();
        docs.expect_lookup().with(eq(":path")).never();
        docs.expect_lookup().returning(|_| Some(HeaderDoc::new("Documented.", "https://example.com/docs")));

        let presenter = HeaderPresenter::builder().docs(docs).build().unwrap();
        let view = presenter.present(&headers(&[(":path", "/"), ("Host", "example.com")]), Version::HTTP_2, &url(), &Expansion::collapsed());

        assert!(view.pseudo_headers()[0].description().is_none());
        assert!(view.pseudo_headers()[0].docs_url().is_none());
        assert_eq!(view.normal_headers()[0].description(), Some(&Description::Summary("Documented.".to_string())));
    }

    #[test]
    fn test_long_value_truncated_until_expanded() {
        let long_value = "v".repeat(250);
        let input = headers(&[("X-Long", long_value.as_str())]);

        let collapsed = presenter(false).present(&input, Version::HTTP_11, &url(), &Expansion::collapsed());
        let header = &collapsed.normal_headers()[0];
        assert_eq!(header.value().shown(), "v".repeat(TRUNCATED_LENGTH));
        assert!(header.value().is_truncated());
        assert!(header.is_expandable());
        assert!(!header.is_expanded());

        let expanded = presenter(false).present(&input, Version::HTTP_11, &url(), &Expansion::collapsed().expand(HeaderSlot::normal(0)));
        let header = &expanded.normal_headers()[0];
        assert_eq!(header.value().shown(), long_value);
        assert!(header.is_expanded());
    }

    #[test]
    fn test_long_pseudo_header_is_truncated() {
        let long_path = format!("/{}", "p".repeat(LONG_HEADER_LIMIT));
        let view = presenter(false).present(
            &headers(&[(":path", long_path.as_str()), ("accept", "*/*")]),
            Version::HTTP_2,
            &url(),
            &Expansion::collapsed().with_pseudo_headers_open(true),
        );

        assert!(view.pseudo_headers_open());
        assert!(view.pseudo_headers()[0].value().is_truncated());
        assert!(view.pseudo_headers()[0].is_expandable());
    }

    #[test]
    fn test_short_undocumented_header_is_not_expandable() {
        let presenter = HeaderPresenter::builder().docs(DocsCatalogue::new()).build().unwrap();
        let view = presenter.present(&headers(&[("X-Custom", "1")]), Version::HTTP_11, &url(), &Expansion::collapsed());

        let header = &view.normal_headers()[0];
        assert!(header.description().is_none());
        assert!(header.docs_url().is_none());
        assert!(!header.is_expandable());
    }

    #[test]
    fn test_set_cookie_for_free_user_uses_docs() {
        let presenter = HeaderPresenter::builder()
            .docs(docs_with("set-cookie", "Sends a cookie.", "https://example.com/set-cookie"))
            .entitlement(false)
            .build()
            .unwrap();

        let description = presenter.describe("Set-Cookie", "id=1", &url());
        assert_eq!(description, Some(Description::Summary("Sends a cookie.".to_string())));
    }

    #[test]
    fn test_set_cookie_for_paid_user_is_rich() {
        let presenter = HeaderPresenter::builder()
            .docs(docs_with("set-cookie", "Sends a cookie.", "https://example.com/set-cookie"))
            .entitlement(true)
            .build()
            .unwrap();

        let view = presenter.present(&headers(&[("Set-Cookie", "id=1; Path=/")]), Version::HTTP_11, &url(), &Expansion::collapsed());
        let header = &view.normal_headers()[0];

        let Some(Description::SetCookie(description)) = header.description() else {
            panic!("expected a set-cookie description, got {:?}", header.description());
        };
        assert_eq!(description.cookie().map(|cookie| cookie.name()), Some("id"));
        assert_eq!(header.docs_url(), Some("https://example.com/set-cookie"));
        assert!(header.is_expandable());
    }

    #[test]
    fn test_user_agent_for_paid_user_is_rich() {
        let mut entitlement = MockEntitlement::new();
        entitlement.expect_is_paid_user().return_const(true);

        let presenter = HeaderPresenter::builder().docs(DocsCatalogue::new()).entitlement(entitlement).build().unwrap();
        let description = presenter.describe("USER-AGENT", "curl/8.4.0", &url()).unwrap();

        assert!(description.is_rich());
        assert_eq!(description.lines(), vec!["This user agent identifies itself as:", "- curl version 8.4.0"]);
    }

    #[test]
    fn test_rich_description_without_docs_has_no_link() {
        let presenter = HeaderPresenter::builder().docs(DocsCatalogue::new()).entitlement(true).build().unwrap();
        let view = presenter.present(&headers(&[("user-agent", "curl/8.4.0")]), Version::HTTP_11, &url(), &Expansion::collapsed());

        assert!(view.normal_headers()[0].description().is_some());
        assert!(view.normal_headers()[0].docs_url().is_none());
    }

    #[test]
    fn test_docs_lookup_is_lower_cased() {
        let presenter = HeaderPresenter::builder()
            .docs(docs_with("x-request-id", "Correlation id.", "https://example.com/x-request-id"))
            .build()
            .unwrap();

        let view = presenter.present(&headers(&[("X-Request-ID", "abc")]), Version::HTTP_11, &url(), &Expansion::collapsed());
        let header = &view.normal_headers()[0];

        assert_eq!(header.description(), Some(&Description::Summary("Correlation id.".to_string())));
        assert_eq!(header.docs_url(), Some("https://example.com/x-request-id"));
    }

    #[test]
    fn test_docs_looked_up_once_per_header() {
        let mut docs = MockHeaderDocs::new();
        docs.expect_lookup()
            .with(eq("x-request-id"))
            .times(1)
            .returning(|_| Some(HeaderDoc::new("Correlation id.", "https://example.com/x-request-id")));

        let presenter = HeaderPresenter::builder().docs(docs).build().unwrap();
        let view = presenter.present(&headers(&[("X-Request-Id", "abc")]), Version::HTTP_11, &url(), &Expansion::collapsed());

        assert!(view.normal_headers()[0].description().is_some());
        assert_eq!(view.normal_headers()[0].docs_url(), Some("https://example.com/x-request-id"));
    }

    #[test]
    fn test_empty_docs_are_ignored() {
        let presenter = HeaderPresenter::builder().docs(docs_with("x-empty", "", "")).build().unwrap();

        assert!(presenter.describe("X-Empty", "1", &url()).is_none());
    }

    #[test]
    fn test_builtin_docs_by_default() {
        let presenter = presenter(false);
        let view = presenter.present(&headers(&[("Content-Length", "42")]), Version::HTTP_11, &url(), &Expansion::collapsed());

        assert_eq!(
            view.normal_headers()[0].docs_url(),
            Some("https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Content-Length")
        );
    }

    #[test]
    fn test_build_rejects_invalid_truncation() {
        let result = HeaderPresenter::builder().long_value_limit(10).truncated_length(20).build();
        assert!(matches!(result, Err(PresenterBuildError::InvalidTruncation { long_value_limit: 10, truncated_length: 20 })));
    }

    #[test]
    fn test_custom_truncation() {
        let presenter = HeaderPresenter::builder().long_value_limit(8).truncated_length(4).build().unwrap();
        let view = presenter.present(&headers(&[("X-Token", "abcdefghij")]), Version::HTTP_11, &url(), &Expansion::collapsed());

        assert_eq!(view.normal_headers()[0].value(), &ValueView::Truncated { shown: "abcd".to_string(), full_length: 10 });
    }
}
