pub mod audience;
pub mod configuration;
pub mod credential;
pub mod ebook;
pub mod error;
pub mod prompt;
pub mod sanitize;

pub use audience::Audience;
pub use configuration::{AppConfig, CONFIG_DIR, CONFIG_FILE, GenerationConfig, OutputConfig, SECRETS_FILE};
pub use credential::{Credential, GEMINI_API_KEY};
pub use ebook::{EbookArtifact, HTML_CONTENT_TYPE, Preview};
pub use error::{AppError, ErrorCategory};
pub use prompt::{EBOOK_SECTIONS, PromptContext};
pub use sanitize::sanitize_response;
