pub mod session;

pub use session::{Phase, ScanSession};
