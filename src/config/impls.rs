//! Implementation blocks for configuration loading, saving and validation.

pub mod configuration;

pub mod configuration_error;
