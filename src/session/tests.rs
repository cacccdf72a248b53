use super::*;
use std::io::Cursor;

fn run(script: &str) -> CanvasState {
    let mut canvas = CanvasState::new();
    run_script(Cursor::new(script), &mut canvas).expect("script should replay");
    canvas
}

#[test]
fn parse_skips_blank_lines_and_comments() {
    assert_eq!(parse_line("").unwrap(), None);
    assert_eq!(parse_line("   ").unwrap(), None);
    assert_eq!(parse_line("# a comment").unwrap(), None);
}

#[test]
fn parse_recognises_every_command() {
    assert_eq!(
        parse_line("point 10 20").unwrap(),
        Some(Command::Point {
            x: 10,
            y: 20,
            hold: false
        })
    );
    assert_eq!(
        parse_line("point -4 300 hold").unwrap(),
        Some(Command::Point {
            x: -4,
            y: 300,
            hold: true
        })
    );
    assert_eq!(
        parse_line("move 1 2").unwrap(),
        Some(Command::Move { x: 1, y: 2 })
    );
    assert_eq!(
        parse_line("close").unwrap(),
        Some(Command::Close { loop_back: false })
    );
    assert_eq!(
        parse_line("close loop").unwrap(),
        Some(Command::Close { loop_back: true })
    );
    assert_eq!(parse_line("undo").unwrap(), Some(Command::Undo));
    assert_eq!(parse_line("clear").unwrap(), Some(Command::Clear));
    assert_eq!(
        parse_line("color 3").unwrap(),
        Some(Command::Color { index: 3 })
    );
    assert_eq!(
        parse_line("background 2").unwrap(),
        Some(Command::Background { index: 2 })
    );
}

#[test]
fn parse_rejects_malformed_commands() {
    assert!(parse_line("point 10").is_err());
    assert!(parse_line("point ten 20").is_err());
    assert!(parse_line("point 1 2 sticky").is_err());
    assert!(parse_line("close tight").is_err());
    assert!(parse_line("color").is_err());
    assert!(parse_line("color -1").is_err());
    assert!(parse_line("undo now").is_err());
    assert!(parse_line("scribble 1 2").is_err());
}

#[test]
fn script_draws_and_exports_a_polyline() {
    let canvas = run("color 3\npoint 0 0 hold\npoint 10 0 hold\npoint 10 10\n");
    assert_eq!(canvas.export(), "db red\ndb 2\ndb 0,0,10,0,10,10\ndb 0");
}

#[test]
fn script_close_loop_appends_first_point() {
    let canvas = run("point 5 5 hold\npoint 6 6 hold\nclose loop\n");
    assert_eq!(canvas.export(), "db void\ndb 2\ndb 5,5,6,6,5,5\ndb 0");
}

#[test]
fn script_undo_reverts_last_group() {
    let canvas = run(concat!(
        "point 0 0 hold\npoint 9 9\n",
        "point 20 20 hold\npoint 30 30\n",
        "undo\n"
    ));
    assert_eq!(canvas.export(), "db void\ndb 1\ndb 0,0,9,9\ndb 0");
}

#[test]
fn script_clear_empties_the_drawing() {
    let canvas = run("point 0 0 hold\npoint 9 9\nclear\n");
    assert_eq!(canvas.export(), "db void\ndb 0");
}

#[test]
fn script_coordinates_are_clamped() {
    let canvas = run("point -5 300 hold\npoint 100 100\n");
    assert_eq!(canvas.export(), "db void\ndb 1\ndb 0,255,100,100\ndb 0");
}

#[test]
fn script_background_command_resolves_color() {
    let canvas = run("background 0\n");
    assert_eq!(canvas.background(), crate::draw::PALETTE[0].rgb());
}

#[test]
fn out_of_range_color_fails_with_line_number() {
    let mut canvas = CanvasState::new();
    let err = run_script(Cursor::new("point 1 1\ncolor 16\n"), &mut canvas)
        .expect_err("palette index 16 must fail");
    assert!(format!("{err:#}").contains("script line 2"));
}
