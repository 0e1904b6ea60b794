//! Output template processing.
//!
//! Operates on the final HTML string produced by the host CMS. Knows nothing
//! about frontmatter or settings; callers hand it an already-resolved title
//! and rendered tag block.

pub mod transform;

pub use transform::{HeadRewriter, RegexHeadRewriter, rewrite_template};
