use std::borrow::Cow;
use std::collections::{LinkedList, VecDeque};
use std::io::{self, Write};

use print_ip::{
    print_ip, print_ip_stdout, shape_of, to_ip_string, IpDisplayExt, PrintError, Shape,
};

#[test]
fn integral() {
    assert_eq!(to_ip_string(&-1i8), "255\n");
    assert_eq!(to_ip_string(&0i16), "0.0\n");
    assert_eq!(to_ip_string(&2130706433i32), "127.0.0.1\n");
    assert_eq!(to_ip_string(&2130706433u32), "127.0.0.1\n");
    assert_eq!(
        to_ip_string(&8875824491850138409i64),
        "123.45.67.89.101.112.131.41\n"
    );
    assert_eq!(to_ip_string(&u128::MAX).matches('.').count(), 15);
}

#[test]
fn integral_signed_high_byte() {
    let value = i64::from_be_bytes([0xFF, 0, 0, 0, 0, 0, 0, 1]);
    assert!(value < 0);
    assert_eq!(to_ip_string(&value), "255.0.0.0.0.0.0.1\n");
}

#[test]
fn every_u8_is_a_single_unit() {
    for v in 0..=u8::MAX {
        assert_eq!(to_ip_string(&v), format!("{}\n", v));
    }
}

#[test]
fn text_is_passed_through() {
    let ip = "123.45.67.89.12.34.56";
    assert_eq!(to_ip_string(ip), "123.45.67.89.12.34.56\n");
    assert_eq!(to_ip_string(&ip.to_string()), "123.45.67.89.12.34.56\n");
    assert_eq!(to_ip_string(&Cow::Borrowed(ip)), "123.45.67.89.12.34.56\n");
    assert_eq!(to_ip_string(&Box::<str>::from("not.an.ip")), "not.an.ip\n");
    assert_eq!(to_ip_string(""), "\n");
}

#[test]
fn sequences() {
    assert_eq!(to_ip_string(&vec!["abc", "def", "gij"]), "abc.def.gij\n");
    assert_eq!(to_ip_string(&vec![100, 200, 300, 400]), "100.200.300.400\n");
    assert_eq!(
        to_ip_string(&LinkedList::from([400i16, 300, 200, 100])),
        "400.300.200.100\n"
    );
    assert_eq!(to_ip_string(&VecDeque::from([10u8, 0, 0, 1])), "10.0.0.1\n");
    assert_eq!(to_ip_string(&[192u8, 168, 1, 1]), "192.168.1.1\n");
    assert_eq!(to_ip_string(&[1u8, 2, 3][..]), "1.2.3\n");
    assert_eq!(
        to_ip_string(&vec![String::from("10"), String::from("8")]),
        "10.8\n"
    );
}

#[test]
fn empty_sequence_is_only_a_line_break() {
    assert_eq!(to_ip_string(&Vec::<u32>::new()), "\n");
    assert_eq!(to_ip_string(&LinkedList::<&str>::new()), "\n");
}

#[test]
fn nested_members_use_their_own_units() {
    assert_eq!(to_ip_string(&vec![vec![1u8, 2], vec![3, 4]]), "1.2.3.4\n");
    assert_eq!(to_ip_string(&vec![(10, 0), (0, 1)]), "10.0.0.1\n");
    assert_eq!(to_ip_string(&vec![vec!["a", "b"], vec![], vec!["c"]]), "a.b..c\n");
}

#[test]
fn shapes() {
    assert_eq!(shape_of(&1u16), Shape::Integral);
    assert_eq!(shape_of("1.2.3.4"), Shape::Text);
    assert_eq!(shape_of(&String::new()), Shape::Text);
    assert_eq!(shape_of(&vec![1u8]), Shape::Sequence);
    assert_eq!(shape_of(&[1u8; 4]), Shape::Sequence);
    assert_eq!(shape_of(&(1u8, 2u8)), Shape::Tuple);
    assert_eq!(shape_of(&()), Shape::Tuple);
    assert_eq!(Shape::Sequence.to_string(), "sequence");
}

#[test]
fn display_has_no_line_break() {
    assert_eq!(2130706433u32.ip_display().to_string(), "127.0.0.1");
    assert_eq!(format!("[{}]", vec!["a", "b"].ip_display()), "[a.b]");
    assert_eq!(format!("{}", ().ip_display()), "");
}

#[test]
fn print_to_sink() {
    let mut out: Vec<u8> = Vec::new();
    print_ip(&(127, 0, 0, 1), &mut out).unwrap();
    print_ip("abc", &mut out).unwrap();
    print_ip(&Vec::<u8>::new(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "127.0.0.1\nabc\n\n");
}

#[test]
fn printing_does_not_change_the_value() {
    let value = vec![String::from("1"), String::from("2")];
    let before = value.clone();
    let first = to_ip_string(&value);
    let second = to_ip_string(&value);
    assert_eq!(first, second);
    assert_eq!(value, before);
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_errors_are_reported() {
    let err = print_ip(&1u32, &mut BrokenSink).unwrap_err();
    assert!(matches!(&err, PrintError::IOError(e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert_eq!(err.exit_code(), 3);
    assert_eq!(err.to_string(), "cannot write to output: closed");
}

#[test]
fn print_error_without_installed_logger() {
    let err = PrintError::from(io::Error::other("gone"));
    err.print_error();
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn print_to_stdout() {
    print_ip_stdout(&(127u8, 0u8, 0u8, 1u8)).unwrap();
    print_ip_stdout("10.0.0.1").unwrap();
}
