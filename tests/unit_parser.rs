use ping_metrics::{parse_line, ParseError, PingRecord};

#[test]
fn test_parse_ok_line() {
    let r = parse_line("host=1.1.1.1 status=OK latency_ms=12.3").unwrap();
    assert_eq!(r, PingRecord::success("1.1.1.1", 12.3));
}

#[test]
fn test_parse_fail_line() {
    let r = parse_line("host=google.com status=FAIL").unwrap();
    assert_eq!(r.host, "google.com");
    assert!(!r.ok);
    assert_eq!(r.latency_ms, None);
}

#[test]
fn test_integer_latency_is_valid() {
    let r = parse_line("host=example-1.net status=OK latency_ms=12").unwrap();
    assert_eq!(r.latency_ms, Some(12.0));
}

#[test]
fn test_latency_beyond_f64_range_is_infinite() {
    let line = format!("host=a status=OK latency_ms={}", "9".repeat(400));
    let r = parse_line(&line).unwrap();
    assert_eq!(r.latency_ms, Some(f64::INFINITY));
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let r = parse_line("  host=a.b status=OK latency_ms=0.5\n").unwrap();
    assert_eq!(r, PingRecord::success("a.b", 0.5));
}

#[test]
fn test_from_str() {
    let r: PingRecord = "host=google.com status=FAIL".parse().unwrap();
    assert_eq!(r, PingRecord::failure("google.com"));
}

#[test]
fn test_grammar_mismatches() {
    let lines = [
        "",
        "random nonsense",
        "host= status=OK latency_ms=12.3",
        "host=my_host status=FAIL",
        "host=my host status=FAIL",
        "host=a status=ok latency_ms=1",
        "host=a status=OK latency_ms=1 extra",
        "host=a status=FAIL trailing",
        "host=a  status=FAIL",
        "host=a status=OK  latency_ms=1",
        "host=a status=OK latency_ms=1.",
        "host=a status=OK latency_ms=-1",
        "host=a status=OK latency_ms=١٢",
    ];
    for line in lines {
        assert!(
            matches!(parse_line(line), Err(ParseError::InvalidLine(_))),
            "expected grammar error for {line:?}"
        );
    }
}

#[test]
fn test_ok_without_latency() {
    let err = parse_line("host=1.1.1.1 status=OK").unwrap_err();
    assert_eq!(err, ParseError::MissingLatency);
    assert_eq!(err.to_string(), "OK status must include latency_ms");
}

#[test]
fn test_fail_with_latency() {
    let err = parse_line("host=1.1.1.1 status=FAIL latency_ms=10.0").unwrap_err();
    assert_eq!(err, ParseError::UnexpectedLatency);
    assert_eq!(err.to_string(), "FAIL status must not include latency_ms");
}

#[test]
fn test_invalid_line_message_uses_trimmed_line() {
    let err = parse_line("  bogus  ").unwrap_err();
    assert_eq!(err.to_string(), "Invalid log line: bogus");
}
