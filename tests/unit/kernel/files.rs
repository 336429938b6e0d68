use super::*;
use crate::kernel::frame::DEFAULT_SPACE;
use crate::kernel::frames::FrameRegistry;

#[test]
fn parse_empty_command_line() {
    let data = FileData::parse("").unwrap();
    assert_eq!(data, FileData::default());
}

#[test]
fn parse_options_and_files() {
    let data = FileData::parse("-O -c -b -s 5000 -i init.lud in.txt out.txt").unwrap();
    assert_eq!(data.old_cmds, Some(true));
    assert!(data.create);
    assert!(data.batch);
    assert_eq!(data.space, Some(5000));
    assert_eq!(data.initial_file.as_deref(), Some("init.lud"));
    assert_eq!(data.input, Some(PathBuf::from("in.txt")));
    assert_eq!(data.output, Some(PathBuf::from("out.txt")));
}

#[test]
fn output_defaults_to_input_unless_read_only() {
    let data = FileData::parse("-N notes").unwrap();
    assert_eq!(data.old_cmds, Some(false));
    assert_eq!(data.output, Some(PathBuf::from("notes")));

    let data = FileData::parse("-r notes").unwrap();
    assert_eq!(data.input, Some(PathBuf::from("notes")));
    assert_eq!(data.output, None);
}

#[test]
fn parse_rejects_bad_input() {
    assert!(matches!(
        FileData::parse("-z"),
        Err(StartupError::InvalidOption(opt)) if opt == "-z"
    ));
    assert!(matches!(
        FileData::parse("-s lots"),
        Err(StartupError::InvalidOption(_))
    ));
    assert!(matches!(
        FileData::parse("-i"),
        Err(StartupError::InvalidOption(_))
    ));
    assert!(matches!(
        FileData::parse("a b c"),
        Err(StartupError::TooManyFiles)
    ));
}

#[test]
fn missing_input_needs_create() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let mut table = FileTable::new();
    assert!(matches!(
        table.open_input(&path, false),
        Err(FileError::NotFound(_))
    ));
    assert!(table.is_empty());
    assert_eq!(table.open_input(&path, true).unwrap(), INPUT_SLOT);
}

#[test]
fn slots_are_reused_after_close() {
    let mut table = FileTable::new();
    let a = table.open_output(Path::new("a")).unwrap();
    let b = table.open_output(Path::new("b")).unwrap();
    assert_eq!((a, b), (1, 2));
    assert_eq!(table.len(), 2);
    assert_eq!(table.close(a).map(|f| f.path), Some(PathBuf::from("a")));
    assert!(table.get(a).is_none());
    assert_eq!(table.open_output(Path::new("c")).unwrap(), 1);
}

#[test]
fn table_runs_out_of_slots() {
    let mut table = FileTable::new();
    for _ in 0..MAX_FILES {
        table.open_output(Path::new("x")).unwrap();
    }
    assert!(matches!(
        table.open_output(Path::new("x")),
        Err(FileError::NoSlot)
    ));
}

#[test]
fn file_create_open_uses_slots_one_and_two() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "x\n").unwrap();
    let data = FileData {
        input: Some(input.clone()),
        output: Some(input),
        ..FileData::default()
    };
    let mut table = FileTable::new();
    let (i, o) = file_create_open(&data, &mut table).unwrap();
    assert_eq!((i, o), (Some(INPUT_SLOT), Some(OUTPUT_SLOT)));
    assert!(table.get(OUTPUT_SLOT).map(|f| f.output).unwrap_or(false));
}

#[test]
fn latin1_round_trip_strips_carriage_returns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9\r\nok\r\n").unwrap();
    let text = read_latin1(&path).unwrap();
    assert_eq!(text, "café\nok\n");

    let out = dir.path().join("nested").join("copy.txt");
    write_latin1(&out, &text).unwrap();
    assert_eq!(fs::read(&out).unwrap(), b"caf\xe9\nok\n");
}

#[test]
fn page_load_fills_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    fs::write(&path, "one\ntwo\n").unwrap();
    let mut table = FileTable::new();
    let slot = table.open_input(&path, false).unwrap();
    let mut frame = Frame::new("doc", DEFAULT_SPACE);
    page_load(&table, slot, &mut frame).unwrap();
    assert_eq!(frame.line_count(), 2);
}

#[test]
fn page_load_of_new_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut table = FileTable::new();
    let slot = table.open_input(&dir.path().join("new.txt"), true).unwrap();
    let mut frame = Frame::new("doc", DEFAULT_SPACE);
    page_load(&table, slot, &mut frame).unwrap();
    assert_eq!(frame.text(), "");
}

#[test]
fn page_load_reports_oversized_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.txt");
    fs::write(&path, "x".repeat(100)).unwrap();
    let mut table = FileTable::new();
    let slot = table.open_input(&path, false).unwrap();
    let mut frame = Frame::new("doc", 60);
    assert!(matches!(
        page_load(&table, slot, &mut frame),
        Err(FileError::TooBig { limit: 60, .. })
    ));
}

#[test]
fn close_writes_outputs_only_when_saving() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let mut frames = FrameRegistry::new(DEFAULT_SPACE);
    let id = frames.edit("main").unwrap();
    frames
        .get_mut(id)
        .unwrap()
        .load_text("saved\n")
        .unwrap();

    let mut table = FileTable::new();
    let slot = table.open_output(&out).unwrap();
    table.set_frame(slot, id);
    let errors = quit_close_files(&mut table, |id| frames.get(id), false);
    assert!(errors.is_empty());
    assert!(!out.exists());
    assert!(table.is_empty());

    let slot = table.open_output(&out).unwrap();
    table.set_frame(slot, id);
    let errors = quit_close_files(&mut table, |id| frames.get(id), true);
    assert!(errors.is_empty());
    assert_eq!(fs::read_to_string(&out).unwrap(), "saved\n");
}
