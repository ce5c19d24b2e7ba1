//! Per-parameter encoding rules.
//!
//! | param | parsed as | state update                         | encoded value            |
//! |-------|-----------|--------------------------------------|--------------------------|
//! | `X`   | `f64`     | `x (+)= v * (units_scale * x_step)`  | resulting absolute `x`   |
//! | `Y`   | `f64`     | `y (+)= v * y_step`                  | resulting absolute `y`   |
//! | `S/M` | `i16`     | none                                 | `v`                      |
//! | `V`   | `f64`     | `velocity = v`                       | `v * 100`                |
//! | `A`   | `f64`     | `acceleration = v`                   | `v * 1000`               |
//!
//! Every value is truncated toward zero and split into `value / 256` and `value % 256`, each
//! wrapped to 8 bits.

use alloc::string::ToString;

use crate::{
    state::MachineState,
    types::Param,
    utils::{split_be, wrap_u16},
    Error,
};

impl Param {
    pub(crate) fn encode(&self, state: &mut MachineState, arg: &str) -> Result<u16, Error> {
        match self {
            Self::X => {
                let delta = self.parse_real(arg)? * (state.units_scale * state.x_step);
                state.x = accumulate(state.relative, state.x, delta);
                Ok(wrap_u16(state.x))
            }
            Self::Y => {
                let delta = self.parse_real(arg)? * state.y_step;
                state.y = accumulate(state.relative, state.y, delta);
                Ok(wrap_u16(state.y))
            }
            Self::S | Self::M => self.parse_integer(arg).map(|v| split_be(v.into())),
            Self::V => {
                state.velocity = self.parse_real(arg)?;
                Ok(wrap_u16(state.velocity * 100.))
            }
            Self::A => {
                state.acceleration = self.parse_real(arg)?;
                Ok(wrap_u16(state.acceleration * 1000.))
            }
        }
    }

    /// Literals too large for an `f64` are rejected, only `inf` and `infinity` are infinite.
    fn parse_real(&self, arg: &str) -> Result<f64, Error> {
        let v: f64 = arg.parse().map_err(|_| self.malformed(arg))?;
        if v.is_infinite() && !spells_infinity(arg) {
            return Err(self.malformed(arg));
        }
        Ok(v)
    }

    fn parse_integer(&self, arg: &str) -> Result<i16, Error> {
        arg.parse().map_err(|_| self.malformed(arg))
    }

    fn malformed(&self, arg: &str) -> Error {
        Error::MalformedNumber {
            param: *self,
            value: arg.to_string(),
        }
    }
}

fn spells_infinity(arg: &str) -> bool {
    let unsigned = arg.strip_prefix(['+', '-']).unwrap_or(arg);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn accumulate(relative: bool, current: f64, delta: f64) -> f64 {
    if relative {
        current + delta
    } else {
        delta
    }
}
