use std::io;

use mktree::{entry::EntryKind, error::Error};

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::MalformedIndentation { line: 3, columns: 3 };
    assert_eq!(err.to_string(), "Wrong indentation at line 3 with value 3.");

    let err = Error::UnterminatedExpansion { line: 4 };
    assert_eq!(
        err.to_string(),
        "Unterminated expansion at line 4: the line must end with '}'."
    );

    let err = Error::MissingExpansionOpen { line: 5 };
    assert_eq!(err.to_string(), "Missing '{' for expansion at line 5.");
}

#[test]
fn test_duplicate_name_display() {
    let err = Error::DuplicateName {
        kind: EntryKind::Directory,
        name: "foo/".to_string(),
        parent: "root/".to_string(),
        parent_line: 1,
        first_line: 1,
        second_line: 2,
    };
    assert_eq!(
        err.to_string(),
        "The Directory root/ at line 1 has at least two directory entries with same name. \
         Name: foo/. First at line 1 and second one at line 2."
    );
}
