use mktree::{error::Error, processor::MkTree};

#[test_log::test]
fn test_render_pipeline() {
    let lines = ["src/", "    main.rs", "    lib.rs", "Cargo.toml"];
    let script = MkTree::default().render(&lines).unwrap();
    assert_eq!(script, "mkdir -p src\ntouch src/{main.rs,lib.rs}\ntouch Cargo.toml\n");
}

#[test_log::test]
fn test_custom_indent() {
    let mktree = MkTree::new(2).unwrap();
    assert_eq!(mktree.indent(), 2);

    let lines = ["app/", "  views/", "    index.html"];
    assert_eq!(mktree.render(&lines).unwrap(), "mkdir -p app/views\ntouch app/views/index.html\n");
}

#[test]
fn test_zero_indent_is_rejected() {
    assert!(matches!(MkTree::new(0), Err(Error::ConfigError(_))));
}

#[test]
fn test_default_indent() {
    assert_eq!(MkTree::default().indent(), 4);
}

#[test_log::test]
fn test_errors_abort_the_run() {
    let lines = ["src/", "    main.rs", "   broken.rs"];
    assert!(matches!(
        MkTree::default().render(&lines),
        Err(Error::MalformedIndentation { line: 3, columns: 3 })
    ));

    let lines = ["src/", "src/"];
    assert!(matches!(MkTree::default().render(&lines), Err(Error::DuplicateName { .. })));
}

#[test]
fn test_build_exposes_tree() {
    let lines = vec!["a/b/c.txt".to_string()];
    let root = MkTree::default().build(&lines).unwrap();
    assert_eq!(root.directories[0].directories[0].files[0].name, "c.txt");
}
