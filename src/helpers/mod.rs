//! Helper functions shared by the generator and the templates

mod url;

pub use url::*;
