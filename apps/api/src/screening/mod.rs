//! Resume screening pipeline: text extraction, normalization, keyword
//! matching, and scoring, wired to `POST /check_resume`.

pub mod extract;
pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod preprocess;
pub mod scoring;

pub use keywords::ScreeningConfig;
