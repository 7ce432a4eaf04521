//! Configuration module

pub mod cms;
mod site;

pub use cms::{CmsConfig, Collection, Field, Widget};
pub use site::CmsSettings;
pub use site::SiteConfig;
