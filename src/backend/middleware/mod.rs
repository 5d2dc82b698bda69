//! Middleware Module
//!
//! Request processing that runs before handler logic:
//!
//! - **`auth`** - bearer-token access control (`CurrentUser`, `AdminUser`)
//! - **`validation`** - body/query/path extractors with JSON rejections and
//!   schema validation
//!
//! # Example
//!
//! ```rust,ignore
//! use eventhub::backend::middleware::{AdminUser, ValidatedJson};
//!
//! async fn handler(AdminUser(admin): AdminUser, ValidatedJson(body): ValidatedJson<EventCreate>) {
//!     // only admins with a valid body get here
//! }
//! ```

pub mod auth;
pub mod validation;

pub use auth::{bearer_token, current_user, require_role, AdminUser, CurrentUser};
pub use validation::{ApiForm, ApiPath, ApiQuery, ValidatedJson};
