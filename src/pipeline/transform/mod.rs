//! Template transforms.
//!
//! # Modules
//!
//! - `head`: Sets `<title>` and inserts meta tags before `</head>`

mod head;

pub use head::{HeadRewriter, RegexHeadRewriter, rewrite_template};
