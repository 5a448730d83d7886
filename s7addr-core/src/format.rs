use super::{
    area::MemoryArea,
    softdatatype::{DatatypeCategory, Softdatatype},
};

/// Access width letter and trailing decoration of a datatype category.
///
/// The letter is used as-is in short areas (`MW100`) and behind `DB` in data
/// blocks (`DB1.DBW100`). BOOL has no letter outside data blocks.
const fn width_letter(category: DatatypeCategory) -> &'static str {
    match category {
        DatatypeCategory::Bool => "X",
        DatatypeCategory::Byte | DatatypeCategory::String | DatatypeCategory::Other => "B",
        DatatypeCategory::Word | DatatypeCategory::WString => "W",
        DatatypeCategory::DWord | DatatypeCategory::DateTime => "D",
    }
}

/// Render a classic S7 address from already extracted fields.
///
/// `area` is a memory area token (`DB`, `I`, `Q`, `M`, `C`, `T`). Any other token is
/// kept verbatim as the prefix and formatted like a short area; `None` or an empty
/// token is shown as `?`. The result is never empty.
///
/// ```
/// use s7addr_core::{format_address, Softdatatype};
///
/// assert_eq!(format_address(Some("DB"), 10, Softdatatype::Bool, 4, Some(2)), "DB10.DBX4.2");
/// assert_eq!(format_address(Some("M"), 0, Softdatatype::Word, 100, None), "MW100");
/// assert_eq!(format_address(Some("T"), 0, Softdatatype::S5Time, 5, None), "T5 (S5TIME)");
/// ```
pub fn format_address(
    area: Option<&str>,
    db_number: u32,
    datatype: Softdatatype,
    byte_offset: u32,
    bit_offset: Option<u32>,
) -> String {
    let token = area.filter(|t| !t.is_empty());
    let memory_area = token.map(MemoryArea::from_token).unwrap_or_default();
    render(memory_area, token, db_number, datatype, byte_offset, bit_offset)
}

/// Shared renderer; `token` is only consulted for the prefix of an unknown area.
pub(crate) fn render(
    area: MemoryArea,
    token: Option<&str>,
    db_number: u32,
    datatype: Softdatatype,
    byte_offset: u32,
    bit_offset: Option<u32>,
) -> String {
    let category = datatype.category();

    let mut out = match area {
        MemoryArea::DataBlock => format!("DB{db_number}.DB{}{byte_offset}", width_letter(category)),
        MemoryArea::Counter | MemoryArea::Timer => format!("{}{byte_offset}", area.token()),
        MemoryArea::Input | MemoryArea::Output | MemoryArea::Marker | MemoryArea::Unknown => {
            let prefix = match area {
                MemoryArea::Unknown => token.unwrap_or("?"),
                known => known.token(),
            };
            match category {
                DatatypeCategory::Bool => format!("{prefix}{byte_offset}"),
                _ => format!("{prefix}{}{byte_offset}", width_letter(category)),
            }
        }
    };

    if matches!(category, DatatypeCategory::Bool) && !area.is_counter_or_timer() {
        out.push_str(&format!(".{}", bit_offset.unwrap_or(0)));
    }

    match category {
        DatatypeCategory::String => out.push_str(" (STRING)"),
        DatatypeCategory::WString => out.push_str(" (WSTRING)"),
        DatatypeCategory::DateTime => out.push_str(&format!(" ({})", datatype.type_label())),
        DatatypeCategory::Other => {
            tracing::debug!(datatype = datatype.code(), "no classic notation for datatype");
            out.push_str(&format!(" (type {})", datatype.code()));
        }
        _ => {}
    }
    out
}
