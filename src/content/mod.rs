//! Content module - album files, front-matter and markdown

mod album;
mod frontmatter;
pub mod loader;
mod markdown;

pub use album::Album;
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;

#[cfg(test)]
pub(crate) use album::sample_album;
