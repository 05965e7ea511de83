//! Size literals and delimited integer lists

use crate::{Error, Result};

/// Parse a disk size literal into megabytes.
///
/// Accepts a plain integer optionally suffixed with `M` or `G`. The suffix
/// only selects what gets trimmed: `"2G"` yields `2`, not `2048`. An empty
/// literal means "no size given" and yields `0`.
pub fn parse_size_mb(s: &str) -> Result<u64> {
    if s.is_empty() {
        return Ok(0);
    }

    // TODO: decide whether `G` should scale by 1024; existing disk
    // descriptors rely on the unscaled value.
    let digits = s
        .strip_suffix('M')
        .or_else(|| s.strip_suffix('G'))
        .unwrap_or(s);

    digits.parse::<u64>().map_err(|source| Error::InvalidSize {
        input: s.to_string(),
        source,
    })
}

/// Split `s` on `sep` and parse every piece as an integer.
///
/// An empty input yields an empty list. The first piece that fails to parse
/// fails the whole call; no partial list is returned.
pub fn parse_int_array(s: &str, sep: &str) -> Result<Vec<i64>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    let parse = |piece: &str| {
        piece.parse::<i64>().map_err(|source| Error::InvalidInteger {
            input: piece.to_string(),
            source,
        })
    };

    if sep.is_empty() {
        // An empty separator splits between characters
        let mut buf = [0u8; 4];
        return s.chars().map(|c| parse(&*c.encode_utf8(&mut buf))).collect();
    }

    s.split(sep).map(parse).collect()
}
