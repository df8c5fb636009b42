//! View-model loading orchestration.
//!
//! A [`ViewModelLoader`] resolves connectivity once per load, walks the
//! provider plan for its feature's [`ContentPolicy`](crate::models::ContentPolicy),
//! builds the first payload that succeeds and reports exactly one outcome to
//! its delegate.
//!
//! ```text
//! load_view_model()
//!        │ (returns LoadHandle immediately)
//!        ▼
//!  resolve connectivity ──► provider plan ──► fetch ──► build
//!                                  ▲            │ fail    │ fail
//!                                  └── next ◄───┴─────────┘
//!        ▼
//!  state = Completed | Failed
//!        ▼
//!  CallbackExecutor ──► delegate (exactly once)
//! ```

mod config;
mod cycle;
mod handle;
#[allow(clippy::module_inception)]
mod loader;
mod selection;
mod slot;
mod state;

pub use config::LoaderConfig;
pub use handle::LoadHandle;
pub use loader::{LoaderBuildError, ViewModelLoader, ViewModelLoaderBuilder};
pub use selection::provider_plan;
pub use slot::DelegateSlot;
pub use state::{LoadOutcome, LoaderState};
