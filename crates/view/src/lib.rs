//! Text front end for the micro http inspector.
//!
//! Loads captured exchanges, runs them through the
//! [`micro_inspect::present::HeaderPresenter`] and renders the resulting header
//! view as plain text. The `header-view` binary is a thin wrapper around
//! [`render_exchange`].

mod error;
mod exchange;
mod text;

pub use error::ExchangeError;
pub use error::ViewError;
pub use exchange::Exchange;
pub use text::TextView;
pub use text::EMPTY_PLACEHOLDER;
pub use text::TRUNCATION_MARKER;

use micro_inspect::docs::DocsCatalogue;
use micro_inspect::present::{Expansion, HeaderPresenter};
use tracing::debug;

/// How an exchange should be rendered.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    paid_user: bool,
    expansion: Expansion,
    extra_docs: Option<DocsCatalogue>,
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn paid_user(mut self, paid_user: bool) -> Self {
        self.paid_user = paid_user;
        self
    }

    #[must_use]
    pub fn expansion(mut self, expansion: Expansion) -> Self {
        self.expansion = expansion;
        self
    }

    /// Docs merged over the built-in catalogue, winning on conflicts.
    #[must_use]
    pub fn extra_docs(mut self, docs: DocsCatalogue) -> Self {
        self.extra_docs = Some(docs);
        self
    }
}

/// Renders the headers of `exchange` as text.
///
/// # Errors
///
/// Returns [`ViewError`] if the exchange carries an unknown HTTP version or an
/// unparseable URL.
pub fn render_exchange(exchange: &Exchange, options: ViewOptions) -> Result<String, ViewError> {
    let version = exchange.version()?;
    let request_url = exchange.request_url()?;

    let docs = match options.extra_docs {
        Some(extra) => DocsCatalogue::builtin().clone().merge(extra),
        None => DocsCatalogue::builtin().clone(),
    };
    debug!(docs = docs.len(), paid_user = options.paid_user, "rendering exchange");

    let presenter = HeaderPresenter::builder().docs(docs).entitlement(options.paid_user).build()?;
    let view = presenter.present(exchange.headers(), version, &request_url, &options.expansion);

    Ok(TextView::new(&view).to_string())
}
