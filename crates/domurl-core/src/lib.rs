//! Lenient URL parsing with a mutable, order-preserving query model.
//!
//! ```
//! use domurl_core::Url;
//!
//! let mut url = Url::new("http://localhost:80/path?alice=123&bob=&carol");
//! assert_eq!(url.port, "");
//! url.query.remove("bob");
//! assert_eq!(url.to_string(), "http://localhost/path?alice=123&carol");
//! ```

pub mod codec;
pub mod config;
pub mod logging;
pub mod query;
pub mod url;

pub use query::{Query, QueryItem, QueryValue};
pub use url::{ParseOptions, Url};
