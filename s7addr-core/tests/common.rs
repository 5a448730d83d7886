#![allow(dead_code)]

use s7addr_core::{ItemAddress, PlcTag, Softdatatype};
use std::sync::Once;
use tracing::Level;

pub const TIA_DB: u32 = 0x8A0E_0000;
pub const TIA_INPUT: u32 = 0x0000_0050;
pub const TIA_OUTPUT: u32 = 0x0000_0051;
pub const TIA_MARKER: u32 = 0x0000_0052;
pub const TIA_COUNTER: u32 = 0x0000_0053;
pub const TIA_TIMER: u32 = 0x0000_0054;
pub const CLASSIC_DB: u32 = 0x8400_0000;
pub const CLASSIC_INPUT: u32 = 0x8100_0000;
pub const CLASSIC_COUNTER: u32 = 0x1C00_0000;

static INIT_TRACING: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_target(false)
            .without_time()
            .with_test_writer()
            .try_init();
    });
}

/// Build a tag with the given access area, location ids and datatype.
pub fn tag(access_area: u32, lids: &[u32], datatype: Softdatatype) -> PlcTag {
    PlcTag::new(
        format!("tag_{access_area:08x}"),
        Some(ItemAddress::new(access_area, lids.to_vec())),
        datatype,
    )
}
