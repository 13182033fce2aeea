//! Serde helpers for Cow<'static, str> deserialization
//!
//! DDL entities keep `Cow<'static, str>` fields so const definitions can borrow;
//! deserialized values always come back as `Cow::Owned`.

use crate::alloc_prelude::*;

use serde::{Deserialize, Deserializer};

/// Deserialize a String into Cow<'static, str>
pub fn cow_from_string<'de, D>(deserializer: D) -> Result<Cow<'static, str>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(Cow::Owned(s))
}

/// Deserialize an Option<String> into Option<Cow<'static, str>>
pub fn cow_option_from_string<'de, D>(
    deserializer: D,
) -> Result<Option<Cow<'static, str>>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.map(Cow::Owned))
}
