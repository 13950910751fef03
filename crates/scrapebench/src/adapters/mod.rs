//! Adapters wrapping each compared library behind [`crate::LibraryAdapter`].
//!
//! One module per library. `scraper`, `tl` and `dom_query` provide the
//! extraction operations; `reqwest` and `ureq` provide fetch. All of them
//! normalize library faults into the shared failure taxonomy. Nothing in
//! here contains harness logic.

pub mod dom_query;
pub mod reqwest;
pub mod scraper;
pub mod tl;
pub mod ureq;

pub use self::dom_query::DomQueryAdapter;
pub use self::reqwest::ReqwestAdapter;
pub use self::scraper::ScraperAdapter;
pub use self::tl::TlAdapter;
pub use self::ureq::UreqAdapter;
