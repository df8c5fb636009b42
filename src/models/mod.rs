//! Plain data types shared by the loader, the providers and the observers.

mod action;
mod connectivity;
mod feature;
mod identifier;
mod payload;
mod view_model;

pub use action::{ActionContext, ActionTrigger};
pub use connectivity::ConnectivityState;
pub use feature::{ContentPolicy, ContentRequest, FeatureConfig};
pub use identifier::{Identifier, ParseIdentifierError};
pub use payload::{ContentSource, RawPayload};
pub use view_model::{ComponentModel, CustomData, ViewModel};
