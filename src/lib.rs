#![doc(test(attr(deny(warnings))))]

//! Salary Assistant drives a three-screen flow that collects job attributes,
//! submits them to a remote salary prediction endpoint and presents the
//! estimate. The screens, form model, navigation and submission lifecycle live
//! here; the prediction model itself is an external service.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod form;
pub mod navigation;
pub mod presenter;
pub mod storage;
pub mod submission;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Salary Assistant tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
