pub mod config;
pub mod harness;
pub mod ring_store;
pub mod scenarios;
pub mod util;

pub use ring_store::RingStore;
