//! Controller Patcher: rewrites `TeacherController` endpoint signatures.
//!
//! Each endpoint that resolves the caller with a bare `getCurrentUserId()`
//! gains an `HttpServletRequest` parameter, and the request is passed to
//! `getCurrentUserId(..)`. The edit is purely textual: a fixed, ordered list
//! of regex rules runs over the whole file, and rules that match nothing are
//! skipped.
//!
//! # Example
//!
//! ```no_run
//! use controller_patcher::Patcher;
//!
//! let patcher = Patcher::teacher_controller_at("src/main/java/TeacherController.java")?;
//! let report = patcher.run(&mut std::io::stdout())?;
//! eprintln!("{report}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod document;
pub mod endpoint;
pub mod error;
pub mod logging;
pub mod patcher;
pub mod rule;
pub mod rules;

// Re-exports
pub use document::SourceDocument;
pub use endpoint::EndpointRewrite;
pub use error::{PatchError, RuleError};
pub use patcher::{PatchReport, Patcher, RuleOutcome};
pub use rule::PatchRule;
pub use rules::{teacher_controller_rules, SUCCESS_MESSAGE, TARGET_PATH};
