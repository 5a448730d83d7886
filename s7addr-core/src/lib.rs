//! Classic S7 absolute addresses (`DB10.DBX4.2`, `MW100`, `T5`) for tags resolved by an
//! S7CommPlus driver.
//!
//! The driver hands out an [`ItemAddress`] (access-area code plus location ids) and a
//! [`Softdatatype`]. [`extract_address`] classifies the area, pulls out the offsets and
//! renders them; [`format_address`] renders already extracted fields.

pub mod address;
pub mod area;
pub mod error;
mod format;
pub mod softdatatype;
pub mod tag;

pub use address::{ItemAddress, NormalizedAddress};
pub use area::{classify_access_area, parse_access_area, MemoryArea, TIA_DB_AREA};
pub use error::{Error as S7AddrError, Result as S7AddrResult};
pub use format::format_address;
pub use softdatatype::{DatatypeCategory, Softdatatype};
pub use tag::{extract_address, normalize, PlcTag, TagLike};
