//! Profile header with a guarded follow/unfollow interaction controller.

pub mod action;
pub mod capability;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod profile;
pub mod view;

#[cfg(test)]
mod test_util;

pub use action::Action;
pub use controller::{InteractionController, InteractionState, Outcome, Phase, UiEvent};
pub use profile::ProfileHeaderProps;
