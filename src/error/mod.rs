//! Error types for view-model loading.
//!
//! - **Provider errors**: why a content provider could not supply content
//! - **Build errors**: why a payload could not become a view model
//! - **Connectivity errors**: the resolver could not answer (treated as offline)
//! - **Load errors**: the single failure a delegate receives per load cycle
//! - **Error categories**: retry and messaging decisions
//!
//! # Example
//!
//! ```ignore
//! use hubview::error::LoadError;
//!
//! fn report(error: &LoadError) {
//!     eprintln!("{} ({})", error, error.error_code());
//!     if error.is_retryable() {
//!         eprintln!("Hint: {}", error.category().recovery_hint());
//!     }
//! }
//! ```

mod build;
mod category;
mod connectivity;
mod load;
pub(crate) mod panic;
mod provider;

pub use build::BuildError;
pub use category::ErrorCategory;
pub use connectivity::ConnectivityError;
pub use load::LoadError;
pub use provider::ProviderError;
