//! Display skeleton tests
//!
//! Every variant goes through the same open / hooks / close sequence

use std::io::{self, Write};

use pattern_primer::template::{CLOSE_MARKER, OPEN_MARKER};
use pattern_primer::{
    CharDisplay, Display, DisplayError, DisplaySteps, Step, StringDisplay, EMIT_REPETITIONS,
};
use test_case::test_case;

#[test_case(CharDisplay::new('X'), "<<XXXXX>>\n" ; "single symbol")]
#[test_case(CharDisplay::new('C'), "<<CCCCC>>\n" ; "default symbol")]
fn test_char_display(display: CharDisplay, body: &str) {
    let output = Display::new(display).render().expect("render succeeds");
    assert_eq!(output, format!("{OPEN_MARKER}{body}{CLOSE_MARKER}"));
}

#[test_case("Hello World!!", "+-------------+" ; "original text")]
#[test_case("a", "+-+" ; "single char")]
#[test_case("", "++" ; "empty text")]
#[test_case("월든", "+--+" ; "hangul text")]
#[test_case("e\u{301}", "+--+" ; "combining mark")]
#[test_case("a\u{200b}b", "+---+" ; "zero width space")]
fn test_string_display_rule(text: &str, rule: &str) {
    let output = Display::new(StringDisplay::new(text))
        .render()
        .expect("render succeeds");
    let body = output
        .strip_prefix(OPEN_MARKER)
        .and_then(|rest| rest.strip_suffix(CLOSE_MARKER))
        .expect("markers wrap the body");

    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), EMIT_REPETITIONS + 2);
    assert_eq!(lines.first(), Some(&rule));
    assert_eq!(lines.last(), Some(&rule));
    assert_eq!(rule.chars().count(), text.chars().count() + 2);
    for line in &lines[1..=EMIT_REPETITIONS] {
        assert_eq!(*line, format!("|{text}|"));
    }
}

/// Writer that accepts a fixed number of writes, then fails.
struct Budget {
    writes_left: usize,
    written: Vec<u8>,
}

impl Write for Budget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.writes_left == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "budget spent"));
        }
        self.writes_left -= 1;
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test_case(0, Step::Open ; "open fails")]
#[test_case(1, Step::AfterOpen ; "after open fails")]
#[test_case(2, Step::Emit(0) ; "first emit fails")]
#[test_case(6, Step::Emit(4) ; "last emit fails")]
#[test_case(7, Step::BeforeClose ; "before close fails")]
#[test_case(8, Step::Close ; "close fails")]
fn test_failure_aborts_remaining_steps(budget: usize, failed: Step) {
    let mut out = Budget {
        writes_left: budget,
        written: Vec::new(),
    };
    let err = Display::new(CharDisplay::new('X'))
        .run(&mut out)
        .expect_err("writer runs out");

    match err {
        DisplayError::Step { step, .. } => assert_eq!(step, failed),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(out.writes_left, 0);
}

struct Tagged(&'static str);

impl DisplaySteps for Tagged {
    fn after_open(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}:after_open", self.0)
    }

    fn emit(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}:emit", self.0)
    }

    fn before_close(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}:before_close", self.0)
    }
}

#[test]
fn test_custom_variant_gets_same_skeleton() {
    let output = Display::new(Tagged("t")).render().expect("render succeeds");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Opening Display...",
            "t:after_open",
            "t:emit",
            "t:emit",
            "t:emit",
            "t:emit",
            "t:emit",
            "t:before_close",
            "Closing Display...",
            "Goodbye!",
        ]
    );
}
