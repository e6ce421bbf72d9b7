use super::*;

fn render(rows: &[Row]) -> String {
    let mut buf = Vec::new();
    let mut report = Report::new(&mut buf);
    report.header(&["naive", "kmp", "refined"]).unwrap();
    for row in rows {
        report.row(row).unwrap();
    }
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_header_and_row() {
    let rows = [Row {
        alphabet: "binary",
        text_len: 10_000,
        pattern_len: 100,
        timings: vec![
            ("naive", Duration::from_micros(1500)),
            ("kmp", Duration::from_nanos(2_400_499)),
            ("refined", Duration::from_nanos(2_400_500)),
        ],
    }];
    let rendered = render(&rows);
    let mut lines = rendered.lines();
    assert_eq!(
        lines.next(),
        Some("alphabet;text-length;pattern-length;naive-us;kmp-us;refined-us")
    );
    assert_eq!(lines.next(), Some("binary;10000;100;1500;2400;2401"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_micros_rounding() {
    assert_eq!(micros(Duration::from_nanos(499)), 0);
    assert_eq!(micros(Duration::from_nanos(500)), 1);
    assert_eq!(micros(Duration::from_nanos(1499)), 1);
    assert_eq!(micros(Duration::from_micros(3)), 3);
}
