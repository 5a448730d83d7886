use super::{
    area::{classify_access_area, MemoryArea},
    format::render,
    softdatatype::Softdatatype,
};
use serde::{Deserialize, Serialize};

/// Address descriptor of a tag as resolved by the S7CommPlus driver.
///
/// `lids` is the location path inside the area: `[db, byte, bit]` for data blocks,
/// `[byte, bit]` for every other area. Trailing entries may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAddress {
    /// Raw 32-bit access-area code
    pub access_area: u32,
    /// Location identifiers
    #[serde(default)]
    pub lids: Vec<u32>,
}

impl ItemAddress {
    pub fn new(access_area: u32, lids: Vec<u32>) -> Self {
        Self { access_area, lids }
    }

    /// Location identifier at `index`, `None` when the path is shorter.
    #[inline]
    pub fn lid(&self, index: usize) -> Option<u32> {
        self.lids.get(index).copied()
    }

    #[inline]
    pub fn area(&self) -> MemoryArea {
        classify_access_area(self.access_area)
    }
}

/// Area and offsets pulled out of an [`ItemAddress`], ready for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizedAddress {
    pub area: MemoryArea,
    /// Data block number when `area == DataBlock`, else 0
    pub db_number: u32,
    /// Byte offset within the area (cell number for counters and timers)
    pub byte_offset: u32,
    /// Bit index, only populated for BOOL tags
    pub bit_offset: Option<u32>,
}

impl NormalizedAddress {
    /// Extract offsets from `address` for a tag of type `datatype`.
    ///
    /// Missing LIDs leave the corresponding field at 0 / `None`; an unknown area
    /// keeps every field at its default.
    pub fn from_item(address: &ItemAddress, datatype: Softdatatype) -> Self {
        let area = address.area();
        let mut out = NormalizedAddress {
            area,
            ..Default::default()
        };
        let bit = |index: usize| {
            if datatype.is_bool() {
                address.lid(index)
            } else {
                None
            }
        };

        match area {
            MemoryArea::DataBlock => {
                out.db_number = address.lid(0).unwrap_or(0);
                out.byte_offset = address.lid(1).unwrap_or(0);
                out.bit_offset = bit(2);
            }
            MemoryArea::Input
            | MemoryArea::Output
            | MemoryArea::Marker
            | MemoryArea::Counter
            | MemoryArea::Timer => {
                out.byte_offset = address.lid(0).unwrap_or(0);
                out.bit_offset = bit(1);
            }
            MemoryArea::Unknown => {}
        }
        out
    }

    /// Render as classic S7 notation; an unknown area is shown as `?`.
    pub fn format(&self, datatype: Softdatatype) -> String {
        render(
            self.area,
            None,
            self.db_number,
            datatype,
            self.byte_offset,
            self.bit_offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemAddress, NormalizedAddress};
    use crate::{area::MemoryArea, softdatatype::Softdatatype};

    #[test]
    fn test_db_offsets() {
        let addr = ItemAddress::new(0x8A0E_000A, vec![10, 4, 2]);
        let n = NormalizedAddress::from_item(&addr, Softdatatype::Bool);
        assert_eq!(
            n,
            NormalizedAddress {
                area: MemoryArea::DataBlock,
                db_number: 10,
                byte_offset: 4,
                bit_offset: Some(2),
            }
        );

        // bit LID is ignored for non-BOOL types
        let n = NormalizedAddress::from_item(&addr, Softdatatype::Int);
        assert_eq!(n.bit_offset, None);
        assert_eq!(n.byte_offset, 4);
    }

    #[test]
    fn test_short_area_offsets() {
        let addr = ItemAddress::new(0x8300_0000, vec![100, 7]);
        let n = NormalizedAddress::from_item(&addr, Softdatatype::Bool);
        assert_eq!(n.area, MemoryArea::Marker);
        assert_eq!(n.db_number, 0);
        assert_eq!(n.byte_offset, 100);
        assert_eq!(n.bit_offset, Some(7));

        let addr = ItemAddress::new(0x0000_5400, vec![5]);
        let n = NormalizedAddress::from_item(&addr, Softdatatype::S5Time);
        assert_eq!(n.area, MemoryArea::Timer);
        assert_eq!(n.byte_offset, 5);
        assert_eq!(n.bit_offset, None);
    }

    #[test]
    fn test_missing_lids_degrade_to_defaults() {
        let n = NormalizedAddress::from_item(&ItemAddress::new(0x8A0E_0000, vec![]), Softdatatype::Bool);
        assert_eq!((n.db_number, n.byte_offset, n.bit_offset), (0, 0, None));

        let n = NormalizedAddress::from_item(&ItemAddress::new(0x8A0E_0000, vec![3]), Softdatatype::Bool);
        assert_eq!((n.db_number, n.byte_offset, n.bit_offset), (3, 0, None));

        let n = NormalizedAddress::from_item(&ItemAddress::new(0x8100_0000, vec![]), Softdatatype::Bool);
        assert_eq!((n.byte_offset, n.bit_offset), (0, None));
    }

    #[test]
    fn test_unknown_area_keeps_defaults() {
        let addr = ItemAddress::new(0x0000_0099, vec![1, 2, 3]);
        let n = NormalizedAddress::from_item(&addr, Softdatatype::Bool);
        assert_eq!(n, NormalizedAddress::default());
        assert_eq!(n.format(Softdatatype::Bool), "?0.0");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let addr: ItemAddress =
            serde_json::from_str(r#"{"accessArea": 2316173312, "lids": [1, 2]}"#).unwrap();
        assert_eq!(addr, ItemAddress::new(0x8A0E_0000, vec![1, 2]));
        let addr: ItemAddress = serde_json::from_str(r#"{"accessArea": 80}"#).unwrap();
        assert!(addr.lids.is_empty());
        assert_eq!(addr.area(), MemoryArea::Input);
    }
}
