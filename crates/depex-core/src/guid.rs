//! The 16-byte module identifier used as the atomic operand of a
//! dependency expression.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A 16-byte globally-unique module identifier.
///
/// Field layout follows the firmware GUID convention: one 32-bit field,
/// two 16-bit fields, and eight trailing bytes. The first three fields
/// are serialized little-endian; the trailing bytes are stored as
/// written in the source literal.
///
/// Immutable value type. `Display` and [`FromStr`] use the registry
/// format `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    /// Size of the wire encoding in bytes.
    pub const BYTES: usize = 16;

    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Encode to the 16-byte wire layout.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&self.data1.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.data2.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.data3.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.data4);
        bytes
    }

    /// Decode from the 16-byte wire layout.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&bytes[8..16]);

        Self {
            data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_le_bytes([bytes[4], bytes[5]]),
            data3: u16::from_le_bytes([bytes[6], bytes[7]]),
            data4,
        }
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({self})")
    }
}

/// Error parsing a registry-format GUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseGuidError {
    #[error("expected 5 dash-separated groups, found {0}")]
    GroupCount(usize),
    #[error("group {index} has wrong width")]
    GroupWidth { index: usize },
    #[error("group {index} contains a non-hex digit")]
    NonHexDigit { index: usize },
}

/// Expected width of each dash-separated group, in hex digits.
const GROUP_WIDTHS: [usize; 5] = [8, 4, 4, 4, 12];

impl FromStr for Guid {
    type Err = ParseGuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups: Vec<&str> = s.split('-').collect();
        if groups.len() != GROUP_WIDTHS.len() {
            return Err(ParseGuidError::GroupCount(groups.len()));
        }

        let mut values = [0u64; 5];
        for (index, (group, width)) in groups.iter().zip(GROUP_WIDTHS).enumerate() {
            if group.len() != width {
                return Err(ParseGuidError::GroupWidth { index });
            }
            // from_str_radix tolerates a leading sign, which is not a hex digit
            if !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ParseGuidError::NonHexDigit { index });
            }
            values[index] = u64::from_str_radix(group, 16).expect("checked hex");
        }

        let tail = values[4];
        let mut data4 = [0u8; 8];
        data4[0] = (values[3] >> 8) as u8;
        data4[1] = values[3] as u8;
        for (i, byte) in data4[2..].iter_mut().enumerate() {
            *byte = (tail >> (8 * (5 - i))) as u8;
        }

        Ok(Self {
            data1: values[0] as u32,
            data2: values[1] as u16,
            data3: values[2] as u16,
            data4,
        })
    }
}
