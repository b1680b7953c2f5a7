//! Search provider implementations.
//!
//! Each module provides a struct implementing
//! [`crate::provider::SearchProvider`] that queries one upstream content
//! API and normalizes its response.

pub mod google;
pub mod naver;
pub mod youtube;

pub use google::GoogleProvider;
pub use naver::NaverProvider;
pub use youtube::YoutubeProvider;
