//! Integration test suite for blockbridge.
//!
//! These tests exercise the crate through its public API the way the host
//! pipeline would: build a [`blockbridge::host::HostServices`] bundle,
//! register the bridge component against a filter registry, and thread
//! realistic template trees and output values through the hooks.
//!
//! Run with: `cargo test --test integration`

mod bridge_wiring;
mod merge_properties;
