use alloc::vec::Vec;
use core::fmt;

/// A parameter word accepted by the frame building commands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Param {
    X,
    Y,
    S,
    M,
    V,
    A,
}
impl Param {
    pub fn letter(&self) -> char {
        match self {
            Self::X => 'X',
            Self::Y => 'Y',
            Self::S => 'S',
            Self::M => 'M',
            Self::V => 'V',
            Self::A => 'A',
        }
    }
}
impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Command identifier carried in the low nibble of a frame's second byte.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum Opcode {
    Version = 0,
    Move = 1,
    Dwell = 3,
    Stop = 5,
    Sleep = 6,
    ToolOn = 7,
    ToolOff = 8,
    GrabData = 9,
}
impl Opcode {
    pub fn from_nibble(nibble: u8) -> Option<Self> {
        Some(match nibble & 0x0F {
            0 => Self::Version,
            1 => Self::Move,
            3 => Self::Dwell,
            5 => Self::Stop,
            6 => Self::Sleep,
            7 => Self::ToolOn,
            8 => Self::ToolOff,
            9 => Self::GrabData,
            _ => return None,
        })
    }
}
impl From<Opcode> for u8 {
    fn from(from: Opcode) -> u8 {
        from as u8
    }
}

/// A length prefixed controller frame.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Frame(Vec<u8>);
impl Frame {
    /// A frame with no argument: `[1, opcode]`.
    pub fn fixed(opcode: Opcode) -> Self {
        Self(alloc::vec![1, opcode.into()])
    }

    pub(crate) fn from_parts(presence: u8, opcode: Opcode, args: &[u16]) -> Self {
        let mut v = Vec::with_capacity(2 + 2 * args.len());
        v.push(0);
        v.push((presence << 4) | u8::from(opcode));
        for arg in args {
            v.extend_from_slice(&arg.to_be_bytes());
        }
        v[0] = (v.len() - 1) as u8;
        Self(v)
    }

    pub fn opcode(&self) -> Option<Opcode> {
        self.0.get(1).copied().and_then(Opcode::from_nibble)
    }

    /// Bitmask of the declared parameters present in this frame.
    pub fn presence(&self) -> u8 {
        self.0.get(1).map(|b| b >> 4).unwrap_or(0)
    }

    /// The encoded arguments, in declared parameter order.
    pub fn args(&self) -> impl Iterator<Item = u16> + '_ {
        self.0
            .get(2..)
            .unwrap_or(&[])
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}
impl core::ops::Deref for Frame {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}
impl From<Frame> for Vec<u8> {
    fn from(from: Frame) -> Vec<u8> {
        from.0
    }
}
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}
