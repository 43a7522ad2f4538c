//! Presentation of classified headers.
//!
//! The presenter takes captured headers and produces a [`HeaderView`]: headers in
//! display order, each with the part of its value to show and an optional
//! description with a "find out more" link.
//!
//! - [`HeaderPresenter`]: the entry point, built with injected docs and entitlement
//! - [`TruncationLimits`] / [`ValueView`]: long value truncation
//! - [`Expansion`] / [`HeaderSlot`]: caller-owned expansion state
//!
//! # Example
//!
//! ```
//! use http::Version;
//! use micro_inspect::present::{Expansion, HeaderPresenter};
//! use micro_inspect::protocol::RawHeader;
//!
//! let presenter = HeaderPresenter::builder().entitlement(false).build().unwrap();
//! let headers = vec![RawHeader::new(":status", "200"), RawHeader::new("Content-Type", "text/html")];
//! let url = "https://example.com/".parse().unwrap();
//!
//! let view = presenter.present(&headers, Version::HTTP_2, &url, &Expansion::collapsed());
//!
//! assert_eq!(view.pseudo_headers()[0].name(), ":status");
//! assert_eq!(view.normal_headers()[0].name(), "Content-Type");
//! assert!(view.normal_headers()[0].description().is_some());
//! ```

mod error;
pub use error::PresenterBuildError;

mod expansion;
pub use expansion::Expansion;
pub use expansion::HeaderSlot;
pub use expansion::Section;

mod value;
pub use value::truncate_value;
pub use value::TruncationLimits;
pub use value::ValueView;
pub use value::LONG_HEADER_LIMIT;
pub use value::TRUNCATED_LENGTH;

mod presenter;
pub use presenter::HeaderPresenter;
pub use presenter::HeaderPresenterBuilder;
pub use presenter::HeaderView;
pub use presenter::PresentedHeader;
