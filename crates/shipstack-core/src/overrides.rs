use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Parse repeated `KEY=VALUE` tokens into an override map.
///
/// The value may itself contain `=`; only the first one splits. A token
/// without any `=` fails with the offending token in the error. When a key
/// appears more than once, the last occurrence wins.
pub fn parse_overrides(tokens: &[String]) -> Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for token in tokens {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| Error::MalformedOverride {
                token: token.clone(),
            })?;
        map.insert(key.to_owned(), value.to_owned());
    }
    Ok(map)
}
