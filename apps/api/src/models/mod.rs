pub mod envelope;
pub mod profile;
