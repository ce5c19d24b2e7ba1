//! This crate compiles gcode lines into the binary frames understood by a laser cutter's motion
//! controller.
//!
//! Each line is fed to an [`Interpreter`] which tracks the machine state (position, units,
//! positioning mode, tool) and produces at most one [`Frame`]:
//!
//! ```text
//! [length, presence << 4 | opcode, arg0_hi, arg0_lo, arg1_hi, arg1_lo, …]
//! ```
//!
//! ```
//! use laser_frame::Interpreter;
//!
//! let mut interpreter = Interpreter::new();
//! let frame = interpreter.execute("G0 X1.4 Y1.2123").unwrap().unwrap();
//! assert_eq!(frame.as_bytes(), &[5, 0x31, 0, 12, 0, 140]);
//! assert_eq!(interpreter.execute("G91"), Ok(None));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod command;
mod interpreter;
mod state;
mod stream;
mod types;
mod utils;

pub use command::Command;
pub use interpreter::Interpreter;
pub use state::{MachineState, StepConfig, INCH_SCALE, MM_SCALE};
pub use stream::{Frames, LineStreamExt};
pub use types::{Frame, Opcode, Param};

use alloc::string::String;

#[derive(Debug, PartialEq, Clone, thiserror::Error)]
pub enum Error {
    /// The argument of a parameter is not a valid number for that parameter.
    #[error("malformed number {value:?} for parameter {param}")]
    MalformedNumber { param: Param, value: String },
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
}
