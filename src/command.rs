use crate::{
    types::{Opcode, Param},
    Error,
};
use alloc::string::ToString;

/// Every mnemonic understood by the interpreter.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    /// `G0`, `G1`
    Move,
    /// `G4`
    Dwell,
    /// `G20`
    Inches,
    /// `G21`
    Millimeters,
    /// `G90`
    Absolute,
    /// `G91`
    Relative,
    /// `M0`
    Stop,
    /// `M1`
    Sleep,
    /// `M3`
    ToolOn,
    /// `M5`
    ToolOff,
    /// `M100`
    GrabData,
    /// `M102`
    Version,
}

const COMMANDS: &[(&str, Command)] = &[
    ("G0", Command::Move),
    ("G1", Command::Move),
    ("G4", Command::Dwell),
    ("G20", Command::Inches),
    ("G21", Command::Millimeters),
    ("G90", Command::Absolute),
    ("G91", Command::Relative),
    ("M0", Command::Stop),
    ("M1", Command::Sleep),
    ("M3", Command::ToolOn),
    ("M5", Command::ToolOff),
    ("M100", Command::GrabData),
    ("M102", Command::Version),
];

impl Command {
    /// Mnemonics are matched exactly and are case sensitive.
    pub fn lookup(mnemonic: &str) -> Result<Self, Error> {
        COMMANDS
            .iter()
            .find(|(m, _)| *m == mnemonic)
            .map(|(_, cmd)| *cmd)
            .ok_or_else(|| Error::UnknownCommand(mnemonic.to_string()))
    }

    /// The parameters of a frame building command, in wire order.
    ///
    /// A parameter's index in this list is also its bit in the presence mask.
    pub fn params(&self) -> &'static [Param] {
        match self {
            Self::Move => &[Param::Y, Param::X],
            Self::Dwell => &[Param::S, Param::M],
            Self::ToolOn => &[Param::V, Param::A],
            _ => &[],
        }
    }

    /// The opcode of the frame emitted by this command, if any.
    pub fn opcode(&self) -> Option<Opcode> {
        Some(match self {
            Self::Move => Opcode::Move,
            Self::Dwell => Opcode::Dwell,
            Self::Stop => Opcode::Stop,
            Self::Sleep => Opcode::Sleep,
            Self::ToolOn => Opcode::ToolOn,
            Self::ToolOff => Opcode::ToolOff,
            Self::GrabData => Opcode::GrabData,
            Self::Version => Opcode::Version,
            Self::Inches | Self::Millimeters | Self::Absolute | Self::Relative => return None,
        })
    }
}

impl core::str::FromStr for Command {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        Self::lookup(s)
    }
}
