use ariadne::Source;
use bool_attrs::ErrorKind;
use bool_error::{Error, ErrorKind};

/// A stray character.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid character `{}`", character),
    labels = ["this character"],
    help = "remove it",
)]
struct Stray {
    character: char,
}

/// An error with no fields and no labels.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "something went wrong")]
struct Bare;

/// Renders the report of an error to a string without color codes.
fn render(err: &Error, src: &str) -> String {
    let mut buf = Vec::new();
    err.build_report("input")
        .write(("input", Source::from(src)), &mut buf)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn message_uses_fields() {
    let err = Error::new(vec![2..3], Stray { character: '$' });
    assert_eq!(err.kind.message(), "invalid character `$`");
    assert_eq!(err.position(), 2);
    assert_eq!(err.to_string(), "invalid character `$` (at offset 2)");
}

#[test]
fn downcast_to_concrete_kind() {
    let err = Error::new(vec![0..1], Stray { character: '#' });
    assert_eq!(err.downcast_ref::<Stray>(), Some(&Stray { character: '#' }));
    assert_eq!(err.downcast_ref::<Bare>(), None);
}

#[test]
fn report_contains_message_label_and_help() {
    let src = "A $ B";
    let err = Error::new(vec![2..3], Stray { character: '$' });
    let out = render(&err, src);

    assert!(out.contains("invalid character `$`"));
    assert!(out.contains("this character"));
    assert!(out.contains("remove it"));
}

#[test]
fn report_without_labels() {
    let err = Error::new(vec![0..1], Bare);
    let out = render(&err, "A");
    assert!(out.contains("something went wrong"));
}
