//! Host-facing orchestration for the text-transform plugin: the capability
//! interfaces the host implements, user configuration, the command registry,
//! and the plugin lifecycle. All the text logic lives in `transform-core`;
//! this crate wires it to a host editor.

pub mod commands;
pub mod config;
pub mod host;
pub mod plugin;
