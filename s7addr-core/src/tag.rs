use super::{
    address::{ItemAddress, NormalizedAddress},
    softdatatype::Softdatatype,
};
use serde::{Deserialize, Serialize};

/// Anything that exposes a driver address descriptor and a softdatatype.
///
/// Browsers and property panels usually hold their own tag types; implementing this
/// trait is enough to render them with [`extract_address`].
pub trait TagLike {
    /// Resolved address, `None` when the driver did not provide one.
    fn address(&self) -> Option<&ItemAddress>;

    fn datatype(&self) -> Softdatatype;
}

/// Plain tag record as exported from a PLC browse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlcTag {
    /// Symbolic name, e.g. `"Motor".Speed`
    pub name: String,
    #[serde(default)]
    pub address: Option<ItemAddress>,
    pub datatype: Softdatatype,
}

impl PlcTag {
    pub fn new(name: impl Into<String>, address: Option<ItemAddress>, datatype: Softdatatype) -> Self {
        Self {
            name: name.into(),
            address,
            datatype,
        }
    }
}

impl TagLike for PlcTag {
    fn address(&self) -> Option<&ItemAddress> {
        self.address.as_ref()
    }

    fn datatype(&self) -> Softdatatype {
        self.datatype
    }
}

/// Normalized address of `tag`, `None` when the tag carries no address.
pub fn normalize<T: TagLike + ?Sized>(tag: &T) -> Option<NormalizedAddress> {
    tag.address()
        .map(|address| NormalizedAddress::from_item(address, tag.datatype()))
}

/// Classic S7 absolute address of `tag`.
///
/// Returns an empty string when the tag or its address is absent; callers treat it as
/// "not available".
///
/// ```
/// use s7addr_core::{extract_address, ItemAddress, PlcTag, Softdatatype};
///
/// let tag = PlcTag::new("Start", Some(ItemAddress::new(0x8A0E_0000, vec![10, 4, 2])), Softdatatype::Bool);
/// assert_eq!(extract_address(Some(&tag)), "DB10.DBX4.2");
/// assert_eq!(extract_address::<PlcTag>(None), "");
/// ```
pub fn extract_address<T: TagLike + ?Sized>(tag: Option<&T>) -> String {
    tag.and_then(|t| normalize(t).map(|n| n.format(t.datatype())))
        .unwrap_or_default()
}
