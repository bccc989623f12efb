use range_strip::config::StripConfig;
use range_strip::document::strip_file;
use range_strip::stripper::strip_content;

#[test]
fn strip_file_with_custom_markers_handles_multiple_regions() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    let path = temp.path().join("notes.txt");
    std::fs::write(
        &path,
        "A\n<<cut 1\nX\n>>end 1\nB\n<<cut 2\nY\n>>end 2\nC\n",
    )
    .expect("write input");

    let outcome =
        strip_file(&StripConfig::new(&path, "<<cut", ">>end")).expect("strip succeeds");

    assert_eq!(outcome.lines_read, 9);
    assert_eq!(outcome.lines_removed, 4);
    assert_eq!(
        std::fs::read_to_string(&path).expect("read output"),
        "A\n>>end 1\nB\n>>end 2\nC\n"
    );
}

#[test]
fn retained_lines_keep_their_relative_order() {
    let input: String = (0..50)
        .map(|i| match i {
            10 | 30 => "BEGIN\n".to_string(),
            20 | 40 => "FINISH\n".to_string(),
            _ => format!("line {i}\n"),
        })
        .collect();

    let outcome = strip_content(&input, "BEGIN", "FINISH");

    let kept: Vec<&str> = outcome.content.lines().collect();
    let mut cursor = input.lines();
    for line in &kept {
        assert!(
            cursor.any(|candidate| candidate == *line),
            "{line:?} out of order"
        );
    }
    assert_eq!(outcome.lines_removed, 20);
}
