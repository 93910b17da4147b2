//! Languages offered to users and the bot's user-facing strings.
//!
//! # Architecture
//!
//! - `registry`: languages selectable with `/lang`, with their display names
//! - `strings`: pre-escaped MarkdownV2 message templates
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{LanguageRegistry, BOT_STRINGS};
//!
//! let registry = LanguageRegistry::get();
//! assert!(registry.is_supported("kn"));
//! let label = registry.display_name("hi"); // "Hindi (हिन्दी)"
//! ```

mod registry;
mod strings;

pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{BotStrings, BOT_STRINGS};
