use clap::Parser;
use mktree::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("mktree")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_input_file() {
    let args = make_args(&["-i", "tree.txt"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.input, Some(PathBuf::from("tree.txt")));
    assert_eq!(parsed.text, None);
    assert_eq!(parsed.output, None);
    assert_eq!(parsed.indent, None);
    assert!(!parsed.save);
    assert!(!parsed.quiet);
    assert!(!parsed.verbose);
}

#[test]
fn test_inline_text() {
    let args = make_args(&["--text", "src/{a,b}"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.text.as_deref(), Some("src/{a,b}"));
    assert_eq!(parsed.input, None);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--input",
        "tree.txt",
        "--output",
        "out/setup.sh",
        "--indent",
        "2",
        "--save",
        "--quiet",
        "--config",
        "mktree.yml",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.output, Some(PathBuf::from("out/setup.sh")));
    assert_eq!(parsed.indent, Some(2));
    assert_eq!(parsed.config, Some(PathBuf::from("mktree.yml")));
    assert!(parsed.save);
    assert!(parsed.quiet);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-t", "a", "-o", "x.sh", "-s", "-q", "-v", "-c", "cfg.json"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.output, Some(PathBuf::from("x.sh")));
    assert!(parsed.save);
    assert!(parsed.quiet);
    assert!(parsed.verbose);
}

#[test]
fn test_missing_source() {
    let args = make_args(&["--save"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_input_and_text_conflict() {
    let args = make_args(&["-i", "tree.txt", "-t", "a"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_invalid_indent() {
    let args = make_args(&["-t", "a", "--indent", "four"]);
    assert!(Args::try_parse_from(args).is_err());
}
