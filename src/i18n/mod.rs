//! Internationalization (i18n) module for the list view labels.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` type and label resolution
//! - `strings`: Typed label keys and the per-language label tables
//! - `selector`: Active-language holder used by the home page
//! - `validator`: Consistency checks for label tables
//!
//! # Example
//!
//! ```rust,ignore
//! use user_directory::i18n::{resolve, LabelKey, Language};
//!
//! let turkish = Language::from_code("tr")?;
//! assert_eq!(resolve(turkish, LabelKey::NextPage), "sonraki >");
//! ```

mod language;
mod registry;
mod selector;
mod strings;
mod validator;

pub use language::{resolve, resolve_code, Language};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use selector::{LanguageOption, LanguageSelector};
pub use strings::{LabelKey, LanguageStrings, ENGLISH_STRINGS, TURKISH_STRINGS};
pub use validator::{validate_registry, validate_strings, ValidationReport};
