//! Stage functions.
//!
//! Each stage reads the latch committed by the previous tick, plus whatever
//! architectural state it needs, and returns the latch for the next tick:
//! - Fetch: copies the instruction at the program counter
//! - Decode: derives control, reads `rs`/`rt`, picks the destination
//! - Execute: runs the ALU and resolves `BEQ` and `J`
//! - Memory: performs the load or store
//! - Writeback: commits the result to the register file
//!
//! Only Memory can fail, and only Writeback mutates registers.

/// Decode stage.
pub mod decode;

/// Execute stage.
pub mod execute;

/// Fetch stage.
pub mod fetch;

/// Memory stage.
pub mod memory;

/// Writeback stage.
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;
