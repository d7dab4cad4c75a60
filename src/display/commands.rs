//! Draw commands and related types

use std::borrow::Cow;

use tokio_util::codec;


/// Encoder for `DrawCommand`s
///
/// This encoder will encode `DrawCommand`s as ANSI escape sequences.
///
pub struct ANSIEncoder;

impl ANSIEncoder {
    /// Create a new encoder
    ///
    pub fn new() -> Self {
        Self {}
    }
}

impl codec::Encoder<DrawCommand<'_>> for ANSIEncoder {
    type Error = std::io::Error;

    fn encode(&mut self, cmd: DrawCommand, dst: &mut bytes::BytesMut) -> Result<(), Self::Error> {
        use bytes::BufMut;

        use DrawCommand as DC;

        match cmd {
            DC::ClearScreen   => dst.put_slice(b"\x1b[2J"),
            DC::SetPos(r, c)  => dst.put_slice(format!("\x1b[{};{}H", r + 1, c + 1).as_bytes()),
            DC::Format(param) => dst.put_slice(format!("\x1b[{}m", param.code()).as_bytes()),
            DC::Text(s)       => dst.put_slice(s.as_bytes()),
        }
        Ok(())
    }
}


/// Representation of a draw command
///
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand<'s> {
    /// Clear the entire screen
    ClearScreen,
    /// Set the cursor's position
    ///
    /// The first component denotes the row, the second one the column. Both
    /// are zero-based, meaning that `0` refers to the first row or column.
    SetPos(u16, u16),
    /// Select Graphic Rendition
    Format(SGR),
    /// Put text on the screen at the current cursor position
    Text(Cow<'s, str>),
}

impl<'s> From<(u16, u16)> for DrawCommand<'s> {
    fn from((r, c): (u16, u16)) -> Self {
        Self::SetPos(r, c)
    }
}

impl<'s, F: Into<SGR>> From<F> for DrawCommand<'s> {
    fn from(fmt: F) -> Self {
        Self::Format(fmt.into())
    }
}

impl<'s> From<&'s str> for DrawCommand<'s> {
    fn from(text: &'s str) -> Self {
        Self::Text(text.into())
    }
}

impl<'s> From<String> for DrawCommand<'s> {
    fn from(text: String) -> Self {
        Self::Text(text.into())
    }
}


/// Representation of some selected "Select Graphic Rendition" parameters
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SGR {
    /// Reset to default formatting
    Reset,
    /// Change intensity
    ///
    /// A value of `None` will reset the intensity to the default.
    Intensity(Option<Intensity>),
    /// Set the foreground colour
    ///
    /// A value of `None` will reset the colour to the default.
    FGColour(Option<Colour>),
}

impl SGR {
    /// Determine the code number for the SGR parameter
    ///
    fn code(&self) -> u8 {
        use Intensity as Int;

        match self {
            Self::Reset                       =>  0,
            Self::Intensity(Some(Int::Bold))  =>  1,
            Self::Intensity(Some(Int::Faint)) =>  2,
            Self::Intensity(None)             => 22,
            Self::FGColour(Some(col))         => 30 + col.code_off(),
            Self::FGColour(None)              => 39,
        }
    }
}

impl From<Intensity> for SGR {
    fn from(int: Intensity) -> Self {
        Some(int).into()
    }
}

impl From<Option<Intensity>> for SGR {
    fn from(int: Option<Intensity>) -> Self {
        Self::Intensity(int)
    }
}

impl From<Colour> for SGR {
    fn from(colour: Colour) -> Self {
        Some(colour).into()
    }
}

impl From<Option<Colour>> for SGR {
    fn from(colour: Option<Colour>) -> Self {
        Self::FGColour(colour)
    }
}


/// Representation of intensity
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Intensity {
    Bold,
    Faint,
}


/// Representation of the basic colours supported by terminals
///
#[derive(Copy, Clone, Debug, PartialEq)]
#[allow(dead_code)]
pub enum Colour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Colour {
    /// Determine the code offset corresponding to the colour
    ///
    fn code_off(&self) -> u8 {
        match self {
            Self::Black   => 0,
            Self::Red     => 1,
            Self::Green   => 2,
            Self::Yellow  => 3,
            Self::Blue    => 4,
            Self::Magenta => 5,
            Self::Cyan    => 6,
            Self::White   => 7,
        }
    }
}
