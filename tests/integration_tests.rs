//! # Tickline Integration Tests - Headless Terminal Sessions
//!
//! Each test queues key presses on a mock event stream, runs the real
//! application loop until the queue drains, then checks the model and the
//! painted screen.
//!
//! ```bash
//! cargo test --test integration_tests
//! TICKLINE_LOG_LEVEL=debug cargo test --test integration_tests -- --nocapture
//! ```

mod common;

use common::{names, numbered_seed, TodoWorld};
use crossterm::event::KeyCode;
use tickline::todo::io::RenderCommand;
use tickline::ItemCounts;

#[test]
fn typing_a_name_and_enter_adds_an_item() {
    let mut world = TodoWorld::new();
    world.type_text("buy milk").press(KeyCode::Enter);

    let app = world.run();

    let model = app.todo().model();
    assert_eq!(
        model.count_items(),
        ItemCounts {
            num_items: 3,
            num_done_items: 1
        }
    );
    assert_eq!(names(model)[2], "buy milk");
    let screen = world.screen.screen_text();
    assert!(screen.contains("buy milk"));
    assert!(screen.contains("3 items, 1 done"));
}

#[test]
fn enter_on_empty_input_adds_an_unnamed_item() {
    let mut world = TodoWorld::new();
    world.press(KeyCode::Enter);

    let app = world.run();

    assert_eq!(
        names(app.todo().model()),
        vec![
            "Learn the model/controller/view split".to_string(),
            "Build a todo list".to_string(),
            String::new(),
        ]
    );
}

#[test]
fn toggle_all_marks_everything_done_then_undone() {
    let mut world = TodoWorld::new();
    // Tab once reaches the toggle-all control
    world.press(KeyCode::Tab).press(KeyCode::Enter);
    let app = world.run();
    assert_eq!(app.todo().model().count_items().num_done_items, 2);

    let mut world = TodoWorld::new();
    world
        .press(KeyCode::Tab)
        .press(KeyCode::Enter)
        .press(KeyCode::Enter);
    let app = world.run();
    assert_eq!(app.todo().model().count_items().num_done_items, 0);
}

#[test]
fn space_on_item_checkbox_toggles_that_item() {
    let mut world = TodoWorld::new();
    // toggle-all, delete-all, first item checkbox
    world.press_n(KeyCode::Tab, 3).press(KeyCode::Char(' '));

    let app = world.run();

    let model = app.todo().model();
    assert!(!model.item(0).unwrap().is_done());
    assert!(!model.item(1).unwrap().is_done());
    assert!(world.screen.screen_text().contains("2 items, 0 done"));
}

#[test]
fn confirming_delete_all_empties_the_list() {
    let mut world = TodoWorld::new();
    world
        .press_n(KeyCode::Tab, 2)
        .press(KeyCode::Enter)
        .press(KeyCode::Char('y'));

    let app = world.run();

    assert!(app.todo().model().is_empty());
    let screen = world.screen.screen_text();
    assert!(screen.contains("Nothing to do."));
    assert!(screen.contains("0 items, 0 done"));
}

#[test]
fn declining_delete_all_keeps_the_list() {
    let mut world = TodoWorld::new();
    world
        .press_n(KeyCode::Tab, 2)
        .press(KeyCode::Enter)
        .press(KeyCode::Char('n'));

    let app = world.run();

    assert_eq!(app.todo().model().len(), 2);
}

#[test]
fn delete_all_prompt_is_shown_while_waiting() {
    let mut world = TodoWorld::new();
    // No answer queued: the prompt sees the stream run dry and declines
    world.press_n(KeyCode::Tab, 2).press(KeyCode::Enter);

    let app = world.run();

    assert_eq!(app.todo().model().len(), 2);
    let written: Vec<u8> = world
        .screen
        .get_commands()
        .into_iter()
        .filter_map(|command| match command {
            RenderCommand::Write(bytes) => Some(bytes),
            _ => None,
        })
        .flatten()
        .collect();
    assert!(String::from_utf8_lossy(&written).contains("Delete all items? (y/n)"));
}

#[test]
fn editing_a_label_renames_the_item() {
    let mut world = TodoWorld::new();
    // toggle-all, delete-all, three controls of the first item, then the
    // checkbox and label of the second
    world
        .press_n(KeyCode::Tab, 7)
        .press(KeyCode::Enter)
        .type_text(" today")
        .press(KeyCode::Enter);

    let app = world.run();

    assert_eq!(
        app.todo().model().item(1).unwrap().name(),
        "Build a todo list today"
    );
    assert!(world.screen.screen_text().contains("Build a todo list today"));
}

#[test]
fn escape_discards_a_label_edit() {
    let mut world = TodoWorld::new();
    world
        .press_n(KeyCode::Tab, 7)
        .press(KeyCode::Enter)
        .type_text("xyz")
        .press(KeyCode::Esc);

    let app = world.run();

    assert_eq!(app.todo().model().item(1).unwrap().name(), "Build a todo list");
}

#[test]
fn leaving_an_emptied_edit_field_deletes_the_item() {
    let mut world = TodoWorld::with_seed(r#"[{ "name": "abc", "done": false }]"#);
    world
        .press_n(KeyCode::Tab, 4)
        .press(KeyCode::Enter)
        .press_n(KeyCode::Backspace, 3)
        .press(KeyCode::Tab);

    let app = world.run();

    assert!(app.todo().model().is_empty());
}

#[test]
fn delete_button_removes_only_its_item() {
    let mut world = TodoWorld::new();
    // toggle-all, delete-all, checkbox, label, delete of the first item
    world.press_n(KeyCode::Tab, 5).press(KeyCode::Enter);

    let app = world.run();

    assert_eq!(
        names(app.todo().model()),
        vec!["Build a todo list".to_string()]
    );
}

#[test]
fn empty_seed_hides_toggle_all() {
    let mut world = TodoWorld::with_seed("[]");
    // With no items the only control after the input is delete-all
    world
        .press(KeyCode::Tab)
        .press(KeyCode::Enter)
        .press(KeyCode::Char('y'));

    let app = world.run();

    assert!(app.todo().model().is_empty());
    let screen = world.screen.screen_text();
    assert!(!screen.contains("Toggle all"));
    assert!(screen.contains("Nothing to do."));
}

#[test]
fn ctrl_c_quits_before_later_keys() {
    let mut world = TodoWorld::new();
    world.ctrl('c').type_text("late").press(KeyCode::Enter);

    let app = world.run();

    assert!(app.should_quit());
    assert_eq!(app.todo().model().len(), 2);
}

#[test]
fn session_restores_the_terminal_on_exit() {
    let mut world = TodoWorld::new();
    world.ctrl('q');

    world.run();

    assert!(!world.screen.is_raw_mode());
    assert!(!world.screen.is_alternate_screen());
    assert!(world.screen.is_cursor_visible());
}

#[test]
fn tabbing_down_a_long_list_keeps_the_focused_item_on_screen() {
    let mut world = TodoWorld::with_seed(&numbered_seed(30));
    // toggle-all, delete-all, 25 items of three controls, then the
    // checkbox and label of item 25
    world.press_n(KeyCode::Tab, 2 + 3 * 25 + 2);

    let app = world.run();

    let focused = app.todo().document().focused().unwrap();
    let label = app.todo().document().get(focused).unwrap();
    assert_eq!(label.text(), "task 25");
    let lines = world.screen.screen_lines();
    let row = lines.iter().position(|line| line.contains("task 25")).unwrap();
    assert!(row < 23);
    assert!(lines[4].contains("more"));
    assert!(lines[23].contains("30 items, 0 done"));
}

#[test]
fn shrinking_the_terminal_keeps_the_focused_item_on_screen() {
    let mut world = TodoWorld::with_seed(&numbered_seed(30));
    // label of item 10
    world.press_n(KeyCode::Tab, 2 + 3 * 10 + 2).resize(80, 10);

    world.run();

    let lines = world.screen.screen_lines();
    let row = lines.iter().position(|line| line.contains("task 10")).unwrap();
    assert!(row < 9);
    assert!(lines[9].contains("30 items"));
}

#[test]
fn long_item_names_do_not_spill_into_the_next_row() {
    let long = "z".repeat(120);
    let mut world = TodoWorld::with_seed(&format!(
        r#"[{{ "name": "{}", "done": false }}, {{ "name": "after", "done": false }}]"#,
        long
    ));
    world.ctrl('q');

    world.run();

    let lines = world.screen.screen_lines();
    assert!(lines[5].contains("zzzz"));
    assert!(lines[6].starts_with("  [ ] after"));
}
