use super::error::{Error, Result};
use std::{fmt, str::FromStr};

/// Upper 16 bits of a data block access area on 1200/1500 CPUs.
pub const TIA_DB_AREA: u16 = 0x8A0E;

/// Native area object ids used by 1200/1500 CPUs (bits 8..=15, or bits 0..=7).
const NATIVE_INPUT: u8 = 0x50;
const NATIVE_OUTPUT: u8 = 0x51;
const NATIVE_MARKER: u8 = 0x52;
const NATIVE_COUNTER: u8 = 0x53;
const NATIVE_TIMER: u8 = 0x54;

/// Classic area codes found in the top byte (300/400 and 200 family).
const CLASSIC_INPUT: u8 = 0x81;
const CLASSIC_OUTPUT: u8 = 0x82;
const CLASSIC_MARKER: u8 = 0x83;
const CLASSIC_DB: u8 = 0x84;
const CLASSIC_COUNTER: u8 = 0x1C;
const CLASSIC_COUNTER_200: u8 = 0x06;
const CLASSIC_TIMER: u8 = 0x1D;
const CLASSIC_TIMER_200: u8 = 0x05;

/// PLC memory area an address lives in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MemoryArea {
    /// Data blocks (DB)
    DataBlock,
    /// Process image inputs (I)
    Input,
    /// Process image outputs (Q)
    Output,
    /// Merkers (M)
    Marker,
    /// Counters (C)
    Counter,
    /// Timers (T)
    Timer,
    /// Code not recognised by either encoding family
    #[default]
    Unknown,
}

impl MemoryArea {
    /// Classic notation token of the area, `?` for [`MemoryArea::Unknown`].
    pub fn token(self) -> &'static str {
        match self {
            MemoryArea::DataBlock => "DB",
            MemoryArea::Input => "I",
            MemoryArea::Output => "Q",
            MemoryArea::Marker => "M",
            MemoryArea::Counter => "C",
            MemoryArea::Timer => "T",
            MemoryArea::Unknown => "?",
        }
    }

    /// Lenient token lookup: anything other than an exact area token maps to `Unknown`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "DB" => MemoryArea::DataBlock,
            "I" => MemoryArea::Input,
            "Q" => MemoryArea::Output,
            "M" => MemoryArea::Marker,
            "C" => MemoryArea::Counter,
            "T" => MemoryArea::Timer,
            _ => MemoryArea::Unknown,
        }
    }

    /// Counter and timer cells are addressed by number only.
    #[inline]
    pub fn is_counter_or_timer(self) -> bool {
        matches!(self, MemoryArea::Counter | MemoryArea::Timer)
    }
}

impl fmt::Display for MemoryArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for MemoryArea {
    type Err = Error;

    /// Strict parse, case-insensitive; `?` and unknown tokens are rejected.
    fn from_str(s: &str) -> Result<Self> {
        match MemoryArea::from_token(&s.trim().to_uppercase()) {
            MemoryArea::Unknown => Err(Error::UnknownArea(s.to_string())),
            area => Ok(area),
        }
    }
}

/// Map a 32-bit access-area code to its memory area.
///
/// The 1200/1500 encoding is tried first:
/// - upper 16 bits `0x8A0E` is a data block
/// - upper 16 bits zero selects I/Q/M/C/T by native object id, taken from bits 8..=15,
///   or from bits 0..=7 when bits 8..=15 are zero
///
/// Only then is the top byte matched against the classic area codes.
pub fn classify_access_area(access_area: u32) -> MemoryArea {
    let area1 = (access_area >> 16) as u16;
    let area2 = (access_area >> 8) as u8;
    let classic = (access_area >> 24) as u8;

    let area = if area1 == TIA_DB_AREA {
        MemoryArea::DataBlock
    } else if area1 == 0 {
        let selector = if area2 != 0 {
            area2
        } else {
            access_area as u8
        };
        match selector {
            NATIVE_INPUT => MemoryArea::Input,
            NATIVE_OUTPUT => MemoryArea::Output,
            NATIVE_MARKER => MemoryArea::Marker,
            NATIVE_COUNTER => MemoryArea::Counter,
            NATIVE_TIMER => MemoryArea::Timer,
            _ => MemoryArea::Unknown,
        }
    } else {
        match classic {
            CLASSIC_INPUT => MemoryArea::Input,
            CLASSIC_OUTPUT => MemoryArea::Output,
            CLASSIC_MARKER => MemoryArea::Marker,
            CLASSIC_DB => MemoryArea::DataBlock,
            CLASSIC_COUNTER | CLASSIC_COUNTER_200 => MemoryArea::Counter,
            CLASSIC_TIMER | CLASSIC_TIMER_200 => MemoryArea::Timer,
            _ => MemoryArea::Unknown,
        }
    };

    if matches!(area, MemoryArea::Unknown) {
        tracing::debug!(access_area = format_args!("{access_area:#010x}"), "unrecognised access area");
    } else {
        tracing::trace!(access_area = format_args!("{access_area:#010x}"), area = %area, "classified access area");
    }
    area
}

/// Parse an access-area code written in decimal or as `0x`-prefixed hex.
pub fn parse_access_area(input: &str) -> Result<u32> {
    let s = input.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse::<u32>(),
    };
    parsed.map_err(|_| Error::InvalidAccessArea(input.to_string()))
}
