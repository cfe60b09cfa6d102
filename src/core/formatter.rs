//! Line formatting
//!
//! Renders one [`Record`] into bytes with the layout
//!
//! ```text
//! [date] [time[.micros]] LEVEL [prefix] [[tag tag ...]] [file:line] message\n
//! ```
//!
//! Every present field is followed by exactly one space. A trailing newline is
//! added only when the message does not already end with one.

use super::flags::Flags;
use super::record::Record;
use chrono::{Datelike, Local, NaiveDateTime, Timelike, Utc};

/// File name rendered when the call site is unknown
pub const UNKNOWN_FILE: &str = "???";

/// Read the clock once for a line, honouring `UTC`.
///
/// Returns `None` when no time-related flag is set so that lines without a
/// timestamp never touch the clock.
pub fn capture_time(flags: Flags) -> Option<NaiveDateTime> {
    if !flags.needs_clock() {
        return None;
    }
    if flags.contains(Flags::UTC) {
        Some(Utc::now().naive_utc())
    } else {
        Some(Local::now().naive_local())
    }
}

/// Append the formatted line for `record` to `buf`.
///
/// `time` is the wall-clock reading for this line; it is ignored when the
/// flags select neither date nor time. This never fails.
pub fn format_record(
    buf: &mut Vec<u8>,
    flags: Flags,
    time: Option<&NaiveDateTime>,
    record: &Record<'_>,
) {
    if let Some(t) = time {
        if flags.contains(Flags::DATE) {
            itoa(buf, t.year().max(0) as u64, 4);
            buf.push(b'/');
            itoa(buf, u64::from(t.month()), 2);
            buf.push(b'/');
            itoa(buf, u64::from(t.day()), 2);
            buf.push(b' ');
        }
        if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
            itoa(buf, u64::from(t.hour()), 2);
            buf.push(b':');
            itoa(buf, u64::from(t.minute()), 2);
            buf.push(b':');
            itoa(buf, u64::from(t.second()), 2);
            if flags.contains(Flags::MICROSECONDS) {
                buf.push(b'.');
                // leap seconds report nanoseconds past 1e9
                itoa(buf, u64::from((t.nanosecond() / 1_000).min(999_999)), 6);
            }
            buf.push(b' ');
        }
    }

    buf.extend_from_slice(record.level.to_str().as_bytes());
    buf.push(b' ');

    if !record.prefix.is_empty() {
        buf.extend_from_slice(record.prefix.as_bytes());
        buf.push(b' ');
    }

    if !record.tags.is_empty() {
        buf.push(b'[');
        for (i, tag) in record.tags.iter().enumerate() {
            if i > 0 {
                buf.push(b' ');
            }
            buf.extend_from_slice(tag.as_bytes());
        }
        buf.extend_from_slice(b"] ");
    }

    if flags.needs_location() {
        let (file, line) = match record.location {
            Some(location) => (location.file(), location.line()),
            None => (UNKNOWN_FILE, 0),
        };
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file(file)
        } else {
            file
        };
        buf.extend_from_slice(file.as_bytes());
        buf.push(b':');
        itoa(buf, u64::from(line), -1);
        buf.push(b' ');
    }

    if flags.contains(Flags::COMPACT) {
        write_compact(buf, record.message);
    } else {
        buf.extend_from_slice(record.message.as_bytes());
    }

    if !record.message.ends_with('\n') {
        buf.push(b'\n');
    }
}

/// Strip every path component up to and including the last separator.
pub fn short_file(file: &str) -> &str {
    match file.rfind(['/', '\\']) {
        Some(pos) => &file[pos + 1..],
        None => file,
    }
}

/// Cheap integer to fixed-width decimal ASCII.
///
/// Digits are assembled in reverse in a stack array and copied once.
/// A negative `width` disables zero padding.
pub fn itoa(buf: &mut Vec<u8>, mut value: u64, width: i32) {
    let mut digits = [0u8; 20];
    let mut pos = digits.len() - 1;
    let mut width = width.min(digits.len() as i32);
    while value >= 10 || width > 1 {
        width -= 1;
        let q = value / 10;
        digits[pos] = b'0' + (value - q * 10) as u8;
        pos -= 1;
        value = q;
    }
    digits[pos] = b'0' + value as u8;
    buf.extend_from_slice(&digits[pos..]);
}

/// Copy `message` collapsing each whitespace run into one space.
///
/// If the message ends with a newline, the final run is written as `\n` so
/// the line stays terminated.
fn write_compact(buf: &mut Vec<u8>, message: &str) {
    let mut in_space = false;
    let mut utf8 = [0u8; 4];
    for c in message.chars() {
        if c.is_whitespace() {
            if !in_space {
                buf.push(b' ');
            }
            in_space = true;
        } else {
            buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            in_space = false;
        }
    }
    if message.ends_with('\n') {
        if let Some(last) = buf.last_mut() {
            *last = b'\n';
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2009, 1, 3)
            .and_then(|d| d.and_hms_micro_opt(4, 5, 6, 7_890))
            .expect("valid datetime")
    }

    fn render(flags: Flags, record: &Record<'_>) -> String {
        let mut buf = Vec::new();
        format_record(&mut buf, flags, Some(&fixed_time()), record);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_itoa_padding() {
        let mut buf = Vec::new();
        itoa(&mut buf, 7, 2);
        buf.push(b' ');
        itoa(&mut buf, 42, 6);
        buf.push(b' ');
        itoa(&mut buf, 1234, -1);
        buf.push(b' ');
        itoa(&mut buf, 0, -1);
        buf.push(b' ');
        itoa(&mut buf, 12345, 2);
        assert_eq!(buf, b"07 000042 1234 0 12345");
    }

    #[test]
    fn test_itoa_extremes() {
        let mut buf = Vec::new();
        itoa(&mut buf, u64::MAX, 40);
        assert_eq!(buf, u64::MAX.to_string().as_bytes());
    }

    #[test]
    fn test_level_only() {
        let record = Record::new(LogLevel::Info, "hello");
        assert_eq!(render(Flags::NONE, &record), "INFO hello\n");
    }

    #[test]
    fn test_date_time_micros() {
        let record = Record::new(LogLevel::Error, "boom");
        let flags = Flags::DATE | Flags::TIME | Flags::MICROSECONDS;
        assert_eq!(render(flags, &record), "2009/01/03 04:05:06.007890 ERROR boom\n");
        assert_eq!(render(Flags::DATE, &record), "2009/01/03 ERROR boom\n");
        assert_eq!(render(Flags::MICROSECONDS, &record), "04:05:06.007890 ERROR boom\n");
    }

    #[test]
    fn test_prefix_and_tags() {
        let tags = vec!["a".to_string(), "b".to_string()];
        let record = Record::new(LogLevel::Warning, "msg")
            .with_prefix("svc")
            .with_tags(&tags);
        assert_eq!(render(Flags::NONE, &record), "WARNING svc [a b] msg\n");
    }

    #[test]
    fn test_no_tags_no_brackets() {
        let record = Record::new(LogLevel::Info, "msg").with_prefix("svc");
        let line = render(Flags::NONE, &record);
        assert!(!line.contains('['));
        assert_eq!(line, "INFO svc msg\n");
    }

    #[test]
    fn test_trailing_newline_rule() {
        assert_eq!(render(Flags::NONE, &Record::new(LogLevel::Info, "abc")), "INFO abc\n");
        assert_eq!(render(Flags::NONE, &Record::new(LogLevel::Info, "abc\n")), "INFO abc\n");
        assert_eq!(render(Flags::NONE, &Record::new(LogLevel::Info, "")), "INFO \n");
    }

    #[test]
    fn test_compact() {
        let record = Record::new(LogLevel::Info, "a\t\tb\n  c");
        assert_eq!(render(Flags::COMPACT, &record), "INFO a b c\n");

        let record = Record::new(LogLevel::Info, "a  b \n");
        assert_eq!(render(Flags::COMPACT, &record), "INFO a b\n");

        let record = Record::new(LogLevel::Info, "héllo\u{00a0}wörld");
        assert_eq!(render(Flags::COMPACT, &record), "INFO héllo wörld\n");
    }

    #[test]
    fn test_location_short_and_long() {
        let record = Record::new(LogLevel::Info, "started")
            .with_prefix("svc")
            .with_location(std::panic::Location::caller());
        let expected_line = line!() - 1;

        let short = render(Flags::SHORT_FILE, &record);
        assert_eq!(short, format!("INFO svc formatter.rs:{} started\n", expected_line));

        let long = render(Flags::LONG_FILE, &record);
        assert_eq!(long, format!("INFO svc {}:{} started\n", file!(), expected_line));

        let both = render(Flags::LONG_FILE | Flags::SHORT_FILE, &record);
        assert_eq!(both, short);
    }

    #[test]
    fn test_unknown_location_placeholder() {
        let record = Record::new(LogLevel::Info, "x");
        assert_eq!(render(Flags::SHORT_FILE, &record), "INFO ???:0 x\n");
    }

    #[test]
    fn test_short_file() {
        assert_eq!(short_file("/a/b/c/d.rs"), "d.rs");
        assert_eq!(short_file("src\\core\\logger.rs"), "logger.rs");
        assert_eq!(short_file("main.rs"), "main.rs");
    }

    #[test]
    fn test_capture_time_gating() {
        assert!(capture_time(Flags::SHORT_FILE | Flags::COMPACT).is_none());
        assert!(capture_time(Flags::UTC).is_some());
        assert!(capture_time(Flags::DATE).is_some());
    }

    #[test]
    fn test_time_ignored_without_clock_flags() {
        let record = Record::new(LogLevel::Debug, "quiet");
        let mut buf = Vec::new();
        format_record(&mut buf, Flags::UTC, Some(&fixed_time()), &record);
        assert_eq!(buf, b"DEBUG quiet\n");
    }
}
