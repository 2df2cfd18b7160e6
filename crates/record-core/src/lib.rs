pub mod command;
pub mod config;
pub mod error;
pub mod estimate;
pub mod exercise;
pub mod io;
pub mod ledger;
pub mod paths;
pub mod router;
pub mod store;
pub mod weight;

pub use error::{RecordError, Result};
pub use exercise::Exercise;
pub use router::CommandRouter;
