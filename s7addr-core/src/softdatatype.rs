use super::error::Error;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{borrow::Cow, fmt, str::FromStr};

/// Prefix used by driver constant names, accepted when parsing by name.
const DRIVER_CONST_PREFIX: &str = "S7COMMP_SOFTDATATYPE_";

macro_rules! softdatatypes {
    ($( $(#[$meta:meta])* $variant:ident = $code:literal => $name:literal, )+) => {
        /// S7CommPlus softdatatype codes.
        ///
        /// Codes outside the catalogue are carried by [`Softdatatype::Other`] so every
        /// 32-bit value coming from the driver stays representable. Build values with
        /// `Softdatatype::from(code)` to keep catalogue codes on their named variant.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Softdatatype {
            $( $(#[$meta])* $variant, )+
            /// Code not present in the catalogue
            Other(u32),
        }

        impl From<u32> for Softdatatype {
            fn from(v: u32) -> Self {
                match v {
                    $( $code => Softdatatype::$variant, )+
                    other => Softdatatype::Other(other),
                }
            }
        }

        impl From<Softdatatype> for u32 {
            fn from(value: Softdatatype) -> Self {
                match value {
                    $( Softdatatype::$variant => $code, )+
                    Softdatatype::Other(v) => v,
                }
            }
        }

        impl Softdatatype {
            /// Catalogue name (e.g. `"BOOL"`), `None` for codes outside the catalogue.
            pub fn name(self) -> Option<&'static str> {
                match self {
                    $( Softdatatype::$variant => Some($name), )+
                    Softdatatype::Other(_) => None,
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Softdatatype::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

softdatatypes! {
    Void = 0 => "VOID",
    Bool = 1 => "BOOL",
    Byte = 2 => "BYTE",
    Char = 3 => "CHAR",
    Word = 4 => "WORD",
    Int = 5 => "INT",
    DWord = 6 => "DWORD",
    DInt = 7 => "DINT",
    Real = 8 => "REAL",
    Date = 9 => "DATE",
    TimeOfDay = 10 => "TIMEOFDAY",
    Time = 11 => "TIME",
    S5Time = 12 => "S5TIME",
    S5Count = 13 => "S5COUNT",
    DateAndTime = 14 => "DATEANDTIME",
    InternetTime = 15 => "INTERNETTIME",
    Array = 16 => "ARRAY",
    Struct = 17 => "STRUCT",
    EndStruct = 18 => "ENDSTRUCT",
    String = 19 => "STRING",
    Pointer = 20 => "POINTER",
    MultiFb = 21 => "MULTIFB",
    Any = 22 => "ANY",
    BlockFb = 23 => "BLOCKFB",
    BlockFc = 24 => "BLOCKFC",
    BlockDb = 25 => "BLOCKDB",
    BlockSdb = 26 => "BLOCKSDB",
    MultiSfb = 27 => "MULTISFB",
    Counter = 28 => "COUNTER",
    Timer = 29 => "TIMER",
    IecCounter = 30 => "IECCOUNTER",
    IecTimer = 31 => "IECTIMER",
    BlockSfb = 32 => "BLOCKSFB",
    BlockSfc = 33 => "BLOCKSFC",
    BlockCb = 34 => "BLOCKCB",
    BlockScb = 35 => "BLOCKSCB",
    BlockOb = 36 => "BLOCKOB",
    BlockUdt = 37 => "BLOCKUDT",
    Offset = 38 => "OFFSET",
    BlockSdt = 39 => "BLOCKSDT",
    BBool = 40 => "BBOOL",
    BlockExt = 41 => "BLOCKEXT",
    LReal = 48 => "LREAL",
    ULInt = 49 => "ULINT",
    LInt = 50 => "LINT",
    LWord = 51 => "LWORD",
    USInt = 52 => "USINT",
    UInt = 53 => "UINT",
    UDInt = 54 => "UDINT",
    SInt = 55 => "SINT",
    Bcd8 = 56 => "BCD8",
    Bcd16 = 57 => "BCD16",
    Bcd32 = 58 => "BCD32",
    Bcd64 = 59 => "BCD64",
    ARef = 60 => "AREF",
    WChar = 61 => "WCHAR",
    WString = 62 => "WSTRING",
    Variant = 63 => "VARIANT",
    LTime = 64 => "LTIME",
    LTod = 65 => "LTOD",
    Ldt = 66 => "LDT",
    Dtl = 67 => "DTL",
    IecLTimer = 68 => "IECLTIMER",
    SCounter = 69 => "SCOUNTER",
    DCounter = 70 => "DCOUNTER",
    LCounter = 71 => "LCOUNTER",
    UCounter = 72 => "UCOUNTER",
    UDCounter = 73 => "UDCOUNTER",
    ULCounter = 74 => "ULCOUNTER",
    Remote = 96 => "REMOTE",
    ErrorStruct = 97 => "ERRORSTRUCT",
    NRef = 98 => "NREF",
    VRef = 99 => "VREF",
    FbtRef = 100 => "FBTREF",
    CRef = 101 => "CREF",
    VaRef = 102 => "VAREF",
}

/// Addressing category a softdatatype is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatatypeCategory {
    /// Single bit, `X` access
    Bool,
    /// 8-bit cell, `B` access
    Byte,
    /// 16-bit cell, `W` access
    Word,
    /// 32-bit (and wider) cell, `D` access
    DWord,
    /// Latin-1 string starting at a byte
    String,
    /// UTF-16 string starting at a word
    WString,
    /// Date and time family, `D` access with the type name appended
    DateTime,
    /// Everything else, `B` access with the raw code appended
    Other,
}

const BYTE_SIZED: &[Softdatatype] = &[
    Softdatatype::Byte,
    Softdatatype::Char,
    Softdatatype::USInt,
    Softdatatype::SInt,
];

const WORD_SIZED: &[Softdatatype] = &[
    Softdatatype::Word,
    Softdatatype::WChar,
    Softdatatype::UInt,
    Softdatatype::Int,
];

const DWORD_SIZED: &[Softdatatype] = &[
    Softdatatype::DWord,
    Softdatatype::UDInt,
    Softdatatype::DInt,
    Softdatatype::Real,
    Softdatatype::LWord,
    Softdatatype::ULInt,
    Softdatatype::LInt,
    Softdatatype::LReal,
];

/// Date/time family and the label shown after the address.
const DATE_TIME_NAMES: &[(Softdatatype, &str)] = &[
    (Softdatatype::Date, "DATE"),
    (Softdatatype::TimeOfDay, "TIMEOFDAY"),
    (Softdatatype::Time, "TIME"),
    (Softdatatype::S5Time, "S5TIME"),
    (Softdatatype::DateAndTime, "DATEANDTIME"),
    (Softdatatype::LTime, "LTIME"),
    (Softdatatype::LTod, "LTOD"),
    (Softdatatype::Ldt, "LDT"),
    (Softdatatype::Dtl, "DTL"),
];

impl Softdatatype {
    /// Raw 32-bit code as carried on the wire.
    #[inline]
    pub fn code(self) -> u32 {
        self.into()
    }

    /// Catalogue variant for this code; `Other` only survives for unlisted codes.
    #[inline]
    pub fn canonical(self) -> Self {
        Softdatatype::from(self.code())
    }

    #[inline]
    pub fn is_bool(self) -> bool {
        matches!(self.canonical(), Softdatatype::Bool)
    }

    pub fn category(self) -> DatatypeCategory {
        match self.canonical() {
            Softdatatype::Bool => DatatypeCategory::Bool,
            Softdatatype::String => DatatypeCategory::String,
            Softdatatype::WString => DatatypeCategory::WString,
            t if BYTE_SIZED.contains(&t) => DatatypeCategory::Byte,
            t if WORD_SIZED.contains(&t) => DatatypeCategory::Word,
            t if DWORD_SIZED.contains(&t) => DatatypeCategory::DWord,
            t if DATE_TIME_NAMES.iter().any(|(d, _)| *d == t) => DatatypeCategory::DateTime,
            _ => DatatypeCategory::Other,
        }
    }

    /// Label of a date/time type, falling back to the numeric code for any other type.
    pub fn type_label(self) -> Cow<'static, str> {
        let dt = self.canonical();
        DATE_TIME_NAMES
            .iter()
            .find(|(d, _)| *d == dt)
            .map(|(_, name)| Cow::Borrowed(*name))
            .unwrap_or_else(|| Cow::Owned(self.code().to_string()))
    }
}

impl fmt::Display for Softdatatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.code()),
        }
    }
}

impl FromStr for Softdatatype {
    type Err = Error;

    /// Accepts catalogue names in any case (optionally with the driver constant
    /// prefix, e.g. `S7COMMP_SOFTDATATYPE_BOOL`) or a decimal code.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let name = upper.strip_prefix(DRIVER_CONST_PREFIX).unwrap_or(upper.as_str());
        if let Some(dt) = Softdatatype::from_name(name) {
            return Ok(dt);
        }
        name.parse::<u32>()
            .map(Softdatatype::from)
            .map_err(|_| Error::UnknownDatatype(s.to_string()))
    }
}

impl Serialize for Softdatatype {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

impl<'de> Deserialize<'de> for Softdatatype {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Code(u32),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Code(code) => Ok(Softdatatype::from(code)),
            Repr::Name(name) => name.parse().map_err(de::Error::custom),
        }
    }
}
