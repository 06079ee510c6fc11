use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::ping::PingRecord;

/// Full-line grammar: `host=<HOST> status=<OK|FAIL>[ latency_ms=<N[.N]>]`.
static PING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^host=(?P<host>[a-zA-Z0-9.\-]+) status=(?P<status>OK|FAIL)(?: latency_ms=(?P<latency>[0-9]+(?:\.[0-9]+)?))?$",
    )
    .unwrap()
});

/// Parse a structured ping log line.
///
/// Accepted forms (surrounding whitespace is ignored):
///
/// ```text
/// host=1.1.1.1 status=OK latency_ms=12.3
/// host=google.com status=FAIL
/// ```
pub fn parse_line(line: &str) -> Result<PingRecord, ParseError> {
    let line = line.trim();
    let caps = PING_LINE
        .captures(line)
        .ok_or_else(|| ParseError::InvalidLine(line.to_string()))?;

    let ok = &caps["status"] == "OK";
    let latency_ms = match caps.name("latency") {
        // Digit runs beyond f64 range parse to infinity rather than failing.
        Some(m) => Some(
            m.as_str()
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidLine(line.to_string()))?,
        ),
        None => None,
    };

    match (ok, latency_ms) {
        (true, None) => Err(ParseError::MissingLatency),
        (false, Some(_)) => Err(ParseError::UnexpectedLatency),
        _ => Ok(PingRecord {
            host: caps["host"].to_string(),
            ok,
            latency_ms,
        }),
    }
}

impl FromStr for PingRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}
