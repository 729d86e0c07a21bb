use std::io::Cursor;
use tasklist_cli::menu::MenuSession;
use tasklist_core::{TodoService, TodoStore};

fn run_menu(input: &[u8]) -> (MenuSession<TodoStore>, String) {
    let mut menu = MenuSession::new(TodoService::new(TodoStore::new()));
    let mut output = Vec::new();
    menu.run(Cursor::new(input), &mut output).unwrap();
    (menu, String::from_utf8(output).unwrap())
}

#[test]
fn menu_walkthrough_covers_every_action() {
    let script = "2\nBuy groceries\n2\nCall dentist\n2\nFinish report\n\
                  3\n1\n4\n2\nCall dentist about appointment\n5\n3\n1\n6\n7\n";
    let (menu, out) = run_menu(script.as_bytes());

    assert!(out.contains("Added: [1] Buy groceries"));
    assert!(out.contains("Completed: [1] Buy groceries"));
    assert!(out.contains("Updated: [2] Call dentist about appointment"));
    assert!(out.contains("Deleted: [3] Finish report"));
    assert!(out.contains("[X] [1] Buy groceries\n[ ] [2] Call dentist about appointment\n"));
    assert!(out.contains("--- Help ---"));
    assert!(out.ends_with("Completed: 1/2 todos\nGoodbye!\n"));
    assert_eq!(menu.service().list_all().len(), 2);
}

#[test]
fn complete_lists_only_incomplete_todos() {
    let (_, out) = run_menu(b"2\nA\n2\nB\n3\n1\n3\n2\n3\n7\n");

    let second_listing = out
        .split("--- Incomplete Todos ---")
        .nth(2)
        .unwrap();
    let listed = second_listing.split("Enter number").next().unwrap();
    assert!(listed.contains("[ ] [2] B"));
    assert!(!listed.contains("[1] A"));
    assert!(out.contains("All done!"));
}

#[test]
fn bad_answers_are_reported_without_leaving_the_menu() {
    let (menu, out) = run_menu(b"2\n\n2\nkeep\n3\nabc\n4\n1\n\n5\n0\n3\n42\n7\n");

    assert!(out.contains("Cannot be empty!"));
    assert!(out.contains("Invalid number!"));
    assert!(out.contains("Error: todo with ID 42 not found"));
    assert_eq!(menu.service().list_all().len(), 1);
}

#[test]
fn non_utf8_answer_is_skipped() {
    let (menu, out) = run_menu(b"2\ncaf\xe9\n2\nafter\n7\n");

    assert!(out.contains("Error: input is not valid UTF-8"));
    assert!(out.contains("Added: [1] after"));
    assert_eq!(menu.service().list_all().len(), 1);
}

#[test]
fn end_of_input_mid_prompt_prints_summary() {
    let (_, out) = run_menu(b"2\nonly\n4\n");
    assert!(out.ends_with("Completed: 0/1 todos\nGoodbye!\n"));
}
