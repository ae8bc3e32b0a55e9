pub mod hash;
pub mod grid;
pub mod error;
pub mod config;
pub mod eval;
pub mod digest;
pub mod field;

pub use hash::{SmallXxHash, PRIME_A, PRIME_B, PRIME_C, PRIME_D, PRIME_E};
pub use grid::{GridCell, cell_of, index_of, cells};
pub use error::ConfigError;
pub use config::HashVisConfig;
pub use eval::{HashGrid, evaluate, evaluate_serial, cell_hash, MAX_RESOLUTION};
pub use digest::{grid_digest, hex32};
pub use field::HashField;
