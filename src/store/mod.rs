pub use airports::{AirportStore, StoreError};

mod airports;
