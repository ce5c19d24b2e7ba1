mod encode;


use alloc::vec::Vec;

use crate::{
    command::Command,
    state::{MachineState, StepConfig, INCH_SCALE, MM_SCALE},
    types::{Frame, Opcode, Param},
    utils::{find_argument, tokenize},
    Error,
};

/// A compilation session.
///
/// Lines are executed atomically: the machine state is only updated when the whole line is
/// accepted.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    state: MachineState,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StepConfig) -> Self {
        Self {
            state: MachineState::new(config),
        }
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Returns to the power-on state, keeping the step configuration.
    pub fn reset(&mut self) {
        self.state = MachineState::new(self.state.step_config());
    }

    /// Compiles one line.
    ///
    /// Returns `Ok(None)` for commands that only change the machine state.
    pub fn execute(&mut self, line: &str) -> Result<Option<Frame>, Error> {
        let mut tokens = tokenize(line);
        let command = Command::lookup(tokens.next().unwrap_or_default())?;
        let args: Vec<&str> = tokens.collect();

        let mut next = self.state;
        let frame = match command {
            Command::Inches => {
                next.set_unit_scale(INCH_SCALE);
                None
            }
            Command::Millimeters => {
                next.set_unit_scale(MM_SCALE);
                None
            }
            Command::Absolute => {
                next.set_positioning_mode(false);
                None
            }
            Command::Relative => {
                next.set_positioning_mode(true);
                None
            }
            Command::Move => Some(compile(&mut next, command.params(), Opcode::Move, &args)?),
            Command::Dwell => Some(compile(&mut next, command.params(), Opcode::Dwell, &args)?),
            Command::ToolOn => {
                next.tool_on = true;
                Some(compile(&mut next, command.params(), Opcode::ToolOn, &args)?)
            }
            Command::ToolOff => {
                next.tool_on = false;
                Some(Frame::fixed(Opcode::ToolOff))
            }
            // trailing tokens are ignored
            Command::Stop | Command::Sleep | Command::GrabData | Command::Version => {
                command.opcode().map(Frame::fixed)
            }
        };
        self.state = next;
        Ok(frame)
    }
}

/// Encodes every declared parameter found in `args`, in declared order.
fn compile(
    state: &mut MachineState,
    params: &[Param],
    opcode: Opcode,
    args: &[&str],
) -> Result<Frame, Error> {
    let mut presence = 0u8;
    let mut values = Vec::with_capacity(params.len());
    for (bit, param) in params.iter().enumerate() {
        if let Some(arg) = find_argument(args, param.letter()) {
            values.push(param.encode(state, arg)?);
            presence |= 1 << bit;
        }
    }
    Ok(Frame::from_parts(presence, opcode, &values))
}
