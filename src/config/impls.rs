/// Configuration loading, saving and validation.
pub mod configuration;
