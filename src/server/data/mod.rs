//! Data layer: the startup-built demo dataset and the database collaborator seam.

pub mod demo;
pub mod probe;

pub use demo::DemoDataset;
pub use probe::{DatabaseHandle, DatabaseModule};

#[cfg(test)]
mod test;
