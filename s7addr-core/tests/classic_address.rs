mod common;

use common::{
    init_tracing, tag, CLASSIC_COUNTER, CLASSIC_DB, CLASSIC_INPUT, TIA_COUNTER, TIA_DB,
    TIA_INPUT, TIA_MARKER, TIA_OUTPUT, TIA_TIMER,
};
use s7addr_core::{
    classify_access_area, extract_address, format_address, normalize, MemoryArea, PlcTag,
    Softdatatype,
};

#[test]
fn test_area_classification_samples() {
    init_tracing();

    assert_eq!(classify_access_area(0x8A0E_0000), MemoryArea::DataBlock);
    assert_eq!(classify_access_area(0x0000_0050), MemoryArea::Input);
    assert_eq!(classify_access_area(0x8100_0000), MemoryArea::Input);
    assert_eq!(classify_access_area(0x8400_0000), MemoryArea::DataBlock);
    assert_eq!(classify_access_area(0x0000_0099), MemoryArea::Unknown);
}

#[test]
fn test_extract_tia_tags() {
    init_tracing();

    let cases: Vec<(PlcTag, &str)> = vec![
        (tag(TIA_DB | 10, &[10, 4, 2], Softdatatype::Bool), "DB10.DBX4.2"),
        (tag(TIA_DB, &[3, 0], Softdatatype::DInt), "DB3.DBD0"),
        (tag(TIA_DB, &[5, 20], Softdatatype::String), "DB5.DBB20 (STRING)"),
        (tag(TIA_DB, &[5, 40], Softdatatype::WString), "DB5.DBW40 (WSTRING)"),
        (tag(TIA_DB, &[9, 12], Softdatatype::Ldt), "DB9.DBD12 (LDT)"),
        (tag(TIA_INPUT, &[0, 1], Softdatatype::Bool), "I0.1"),
        (tag(TIA_OUTPUT, &[2], Softdatatype::Byte), "QB2"),
        (tag(TIA_MARKER, &[100], Softdatatype::Word), "MW100"),
        (tag(TIA_COUNTER, &[7], Softdatatype::Int), "C7"),
        (tag(TIA_TIMER, &[5], Softdatatype::Word), "T5"),
        (tag(TIA_TIMER, &[5, 1], Softdatatype::Bool), "T5"),
    ];
    for (t, expected) in cases {
        assert_eq!(extract_address(Some(&t)), expected, "address for {t:?}");
    }
}

#[test]
fn test_extract_classic_tags() {
    init_tracing();

    assert_eq!(
        extract_address(Some(&tag(CLASSIC_DB, &[1, 8, 7], Softdatatype::Bool))),
        "DB1.DBX8.7"
    );
    assert_eq!(
        extract_address(Some(&tag(CLASSIC_INPUT, &[4], Softdatatype::Real))),
        "ID4"
    );
    assert_eq!(
        extract_address(Some(&tag(CLASSIC_COUNTER, &[3], Softdatatype::Counter))),
        "C3 (type 28)"
    );
    assert_eq!(
        extract_address(Some(&tag(0x0500_0000, &[11], Softdatatype::S5Time))),
        "T11 (S5TIME)"
    );
}

#[test]
fn test_unavailable_and_degraded_tags() {
    init_tracing();

    assert_eq!(extract_address::<PlcTag>(None), "");
    assert_eq!(
        extract_address(Some(&PlcTag::new("no address", None, Softdatatype::Bool))),
        ""
    );

    // missing LIDs
    assert_eq!(
        extract_address(Some(&tag(TIA_DB, &[], Softdatatype::Bool))),
        "DB0.DBX0.0"
    );
    assert_eq!(
        extract_address(Some(&tag(TIA_DB, &[12], Softdatatype::Word))),
        "DB12.DBW0"
    );
    assert_eq!(
        extract_address(Some(&tag(TIA_MARKER, &[], Softdatatype::Bool))),
        "M0.0"
    );

    // unknown area and unknown datatype
    assert_eq!(
        extract_address(Some(&tag(0x0000_0099, &[3], Softdatatype::from(9999u32)))),
        "?B0 (type 9999)"
    );
}

#[test]
fn test_extract_matches_format_of_normalized_fields() {
    init_tracing();

    let t = tag(TIA_DB, &[10, 4, 2], Softdatatype::Bool);
    let n = normalize(&t).expect("tag has an address");
    assert_eq!(
        format_address(
            Some(n.area.token()),
            n.db_number,
            t.datatype,
            n.byte_offset,
            n.bit_offset
        ),
        extract_address(Some(&t))
    );
}

#[test]
fn test_format_samples() {
    init_tracing();

    assert_eq!(
        format_address(Some("DB"), 10, Softdatatype::Bool, 4, Some(2)),
        "DB10.DBX4.2"
    );
    assert_eq!(
        format_address(Some("M"), 0, Softdatatype::Word, 100, None),
        "MW100"
    );
    assert_eq!(format_address(Some("T"), 0, Softdatatype::Int, 5, None), "T5");
    assert_eq!(
        format_address(Some("DB"), 4, Softdatatype::String, 20, None),
        "DB4.DBB20 (STRING)"
    );
    assert_eq!(
        format_address(None, 0, Softdatatype::from(9999u32), 3, None),
        "?B3 (type 9999)"
    );
}

#[test]
fn test_tag_export_from_json() {
    init_tracing();

    let tags: Vec<PlcTag> = serde_json::from_str(
        r#"[
            {"name": "Motor.Run", "address": {"accessArea": 2316173322, "lids": [10, 0, 0]}, "datatype": "BOOL"},
            {"name": "Motor.Speed", "address": {"accessArea": 2316173322, "lids": [10, 2]}, "datatype": 5},
            {"name": "Setpoint", "address": {"accessArea": 82, "lids": [16]}, "datatype": "LREAL"},
            {"name": "Detached", "address": null, "datatype": "INT"}
        ]"#,
    )
    .expect("valid tag export");

    let rendered: Vec<String> = tags.iter().map(|t| extract_address(Some(t))).collect();
    assert_eq!(rendered, ["DB10.DBX0.0", "DB10.DBW2", "MD16", ""]);
}
