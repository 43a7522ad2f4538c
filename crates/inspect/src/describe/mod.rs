//! Header descriptions shown beneath a header.
//!
//! Most headers get the generic docs summary. `Set-Cookie` and `User-Agent` have
//! rich descriptions built from the actual value, which are reserved for paid
//! accounts; see [`crate::present::HeaderPresenter::describe`] for the selection.

mod set_cookie;
pub use set_cookie::Cookie;
pub use set_cookie::SameSite;
pub use set_cookie::SetCookieDescription;

mod user_agent;
pub use user_agent::parse_user_agent;
pub use user_agent::UserAgentDescription;
pub use user_agent::UserAgentPart;

/// Lower-cased name of the header with a rich cookie description.
pub const SET_COOKIE: &str = "set-cookie";

/// Lower-cased name of the header with a rich user agent description.
pub const USER_AGENT: &str = "user-agent";

/// The description selected for a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    SetCookie(SetCookieDescription),
    UserAgent(UserAgentDescription),
    /// Generic documentation summary for the header name.
    Summary(String),
}

impl Description {
    /// Returns true for the value-specific descriptions.
    pub fn is_rich(&self) -> bool {
        !matches!(self, Description::Summary(_))
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            Description::SetCookie(description) => description.lines(),
            Description::UserAgent(description) => description.lines(),
            Description::Summary(summary) => vec![summary.clone()],
        }
    }
}
