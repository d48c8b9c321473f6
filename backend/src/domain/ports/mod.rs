//! Domain ports for the persistence boundary.

mod demo_data_store;

pub use demo_data_store::{Collection, DemoDataStore, FixtureDemoDataStore, StoreError};
#[cfg(test)]
pub use demo_data_store::MockDemoDataStore;
