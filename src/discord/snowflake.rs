//! Discord snowflake ids.
//!
//! ```text
//! 111111111111111111111111111111111111111111 11111 11111 111111111111
//! 64                                         22    17    12          0
//! ```
//!
//! | Field               | Bits     | Number of bits |
//! |---------------------|----------|----------------|
//! | Timestamp           | 63 to 22 | 42 bits        |
//! | Internal worker ID  | 21 to 17 | 5 bits         |
//! | Internal process ID | 16 to 12 | 5 bits         |
//! | Increment           | 11 to 0  | 12 bits        |

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Milliseconds between the Unix epoch and the first second of 2015.
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// A 64-bit Discord id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Snowflake(pub u64);

impl Snowflake {
    /// Creation time as milliseconds since the Unix epoch.
    pub fn unix_millis(self) -> i64 {
        ((self.0 >> 22) + DISCORD_EPOCH_MS) as i64
    }

    /// Creation time.
    pub fn timestamp(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.unix_millis())
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Discord sends ids as JSON strings so they survive 53-bit float parsers.
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnowflakeVisitor;

        impl Visitor<'_> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a snowflake as a string or unsigned integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Snowflake, E> {
                Ok(Snowflake(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Snowflake, E> {
                v.parse().map(Snowflake).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}
