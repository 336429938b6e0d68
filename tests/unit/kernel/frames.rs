use super::*;
use crate::kernel::frame::DEFAULT_SPACE;

fn registry() -> FrameRegistry {
    let mut frames = FrameRegistry::new(DEFAULT_SPACE);
    frames.create_mandatory().unwrap();
    frames
}

#[test]
fn mandatory_frames_are_special() {
    let frames = registry();
    assert_eq!(frames.len(), 3);
    for name in [OOPS, COMMAND, HEAP] {
        assert!(frames.by_name(name).unwrap().is_special(), "{name}");
    }
    let oops = frames.by_name(OOPS).unwrap();
    assert_eq!(oops.space_limit(), MAX_SPACE);
    assert_eq!(oops.space_left() + 50, oops.space_limit());
    assert_eq!(frames.by_name(HEAP).unwrap().space_limit(), DEFAULT_SPACE);
    assert_eq!(frames.find("oops"), frames.oops_id());
    assert!(frames.current().is_none());
    assert!(frames.validate().is_ok());
}

#[test]
fn create_mandatory_twice_fails() {
    let mut frames = registry();
    assert_eq!(
        frames.create_mandatory(),
        Err(FrameError::Exists(OOPS.to_string()))
    );
}

#[test]
fn edit_creates_or_switches() {
    let mut frames = registry();
    let ludwig = frames.edit(DEFAULT_FRAME).unwrap();
    assert_eq!(frames.current_id(), Some(ludwig));
    let other = frames.edit(" scratch ").unwrap();
    assert_eq!(frames.current().map(Frame::name), Some("SCRATCH"));
    assert_eq!(frames.edit("Scratch").unwrap(), other);
    assert_eq!(frames.len(), 5);
    assert_eq!(frames.edit("  "), Err(FrameError::Fail));
}

#[test]
fn frame_return_walks_back() {
    let mut frames = registry();
    let first = frames.edit("one").unwrap();
    frames.edit("two").unwrap();
    assert_eq!(frames.frame_return(), Ok(first));
    assert_eq!(frames.frame_return(), Err(FrameError::Fail));
}

#[test]
fn kill_rules() {
    let mut frames = registry();
    frames.edit("victim").unwrap();
    frames.edit("main").unwrap();
    assert_eq!(
        frames.kill("oops"),
        Err(FrameError::Special(OOPS.to_string()))
    );
    assert_eq!(
        frames.kill("main"),
        Err(FrameError::Current("MAIN".to_string()))
    );
    assert_eq!(
        frames.kill("ghost"),
        Err(FrameError::NotFound("GHOST".to_string()))
    );
    frames.kill("victim").unwrap();
    assert!(frames.find("victim").is_none());
    assert_eq!(frames.frame_return(), Err(FrameError::Fail));
}

#[test]
fn options_keep_special_flag() {
    let mut frames = registry();
    let oops = frames.oops_id().unwrap();
    frames.set_options(oops, FrameOptions::READ_ONLY).unwrap();
    let options = frames.get(oops).unwrap().options;
    assert!(options.contains(FrameOptions::SPECIAL_FRAME | FrameOptions::READ_ONLY));

    let main = frames.edit("main").unwrap();
    frames.set_options(main, FrameOptions::all()).unwrap();
    assert!(!frames.get(main).unwrap().is_special());
}

#[test]
fn height_and_file_attachment() {
    let mut frames = registry();
    let id = frames.edit("main").unwrap();
    assert_eq!(frames.set_height(id, 0), Err(FrameError::Fail));
    frames.set_height(id, 12).unwrap();
    frames.attach_file(id, 1, false).unwrap();
    frames.attach_file(id, 2, true).unwrap();
    let frame = frames.get(id).unwrap();
    assert_eq!(
        (frame.height, frame.input_file, frame.output_file),
        (12, Some(1), Some(2))
    );
}

#[test]
fn deleted_text_lands_in_oops() {
    let mut frames = registry();
    frames.save_to_oops("first\n");
    frames.save_to_oops("second\n");
    frames.save_to_oops("");
    assert_eq!(frames.by_name(OOPS).unwrap().text(), "first\nsecond\n");
}

#[test]
fn validate_spots_missing_mandatory_frames() {
    let mut frames = FrameRegistry::new(DEFAULT_SPACE);
    frames.edit("main").unwrap();
    assert!(frames.validate().unwrap_err().contains(OOPS));
}
