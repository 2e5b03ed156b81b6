pub mod airport;

pub use airport::{seed, Airport, AirportV2, UpdateImageResponse};
