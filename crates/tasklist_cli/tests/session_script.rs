use std::io::Cursor;
use tasklist_cli::session::Session;
use tasklist_core::{TodoService, TodoStore};

fn run_script(commands: &[&str]) -> (Session<TodoStore>, String) {
    let mut session = Session::new(TodoService::new(TodoStore::new()));
    let input = Cursor::new(commands.join("\n"));
    let mut output = Vec::new();
    session.run(input, &mut output).unwrap();
    (session, String::from_utf8(output).unwrap())
}

#[test]
fn full_feature_walkthrough() {
    let (session, out) = run_script(&[
        "help",
        "list",
        "add Buy groceries",
        "add Call dentist",
        "add Finish report",
        "complete 1",
        "update 2 Call dentist about appointment",
        "delete 3",
        "list",
        "exit",
    ]);

    assert!(out.contains("Available commands:"));
    assert!(out.contains("No todos found. Use 'add <text>' to create one."));
    assert!(out.contains("Added: [1] Buy groceries"));
    assert!(out.contains("Completed: [1] Buy groceries"));
    assert!(out.contains("Updated: [2] Call dentist about appointment"));
    assert!(out.contains("Deleted: [3] Finish report"));
    assert!(out.contains("[X] [1] Buy groceries\n[ ] [2] Call dentist about appointment\n"));
    assert!(out.ends_with("Completed: 1/2 todos\nGoodbye!\n"));

    let todos = session.service().list_all();
    assert_eq!(todos.len(), 2);
}

#[test]
fn end_of_input_prints_summary() {
    let (_, out) = run_script(&["add only task", "complete 1"]);
    assert!(out.ends_with("Completed: 1/1 todos\nGoodbye!\n"));
}

#[test]
fn invalid_input_keeps_the_session_alive() {
    let (session, out) = run_script(&[
        "add",
        "complete abc",
        "complete 999",
        "update 1",
        "dance",
        "add Still works",
        "quit",
    ]);

    assert!(out.contains("Error: usage: add <text>"));
    assert!(out.contains("Error: invalid ID 'abc'"));
    assert!(out.contains("Error: todo with ID 999 not found"));
    assert!(out.contains("Error: usage: update <id> <text>"));
    assert!(out.contains("Error: unknown command 'dance'"));
    assert!(out.contains("Added: [1] Still works"));
    assert_eq!(session.service().list_all().len(), 1);
}

#[test]
fn over_long_title_is_rejected_with_validation_message() {
    let long = format!("add {}", "x".repeat(1001));
    let (session, out) = run_script(&[long.as_str(), "exit"]);

    assert!(out.contains("Error: description too long"));
    assert!(session.service().list_all().is_empty());
}

#[test]
fn commands_are_case_insensitive() {
    let (session, out) = run_script(&["ADD Mixed Case", "Complete 1", "LIST", "EXIT"]);

    assert!(out.contains("[X] [1] Mixed Case"));
    assert_eq!(session.service().completion_summary().completed, 1);
}

#[test]
fn non_utf8_line_is_reported_and_session_continues() {
    let mut session = Session::new(TodoService::new(TodoStore::new()));
    let mut output = Vec::new();

    session
        .run(
            Cursor::new(&b"add first\nadd caf\xe9\nadd second\nexit\n"[..]),
            &mut output,
        )
        .unwrap();

    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("Error: input is not valid UTF-8"));
    assert!(out.contains("Added: [2] second"));
    assert!(out.ends_with("Completed: 0/2 todos\nGoodbye!\n"));
    let titles: Vec<String> = session
        .service()
        .list_all()
        .iter()
        .map(|todo| todo.title().to_string())
        .collect();
    assert_eq!(titles, ["first", "second"]);
}

#[test]
fn banner_shows_core_version() {
    let (_, out) = run_script(&["exit"]);
    let first_line = out.lines().next().unwrap();
    assert_eq!(
        first_line,
        format!("Task List v{}", tasklist_core::core_version())
    );
}

#[test]
fn overflowing_id_reads_as_not_found() {
    let (_, out) = run_script(&["add one", "complete 99999999999999999999", "exit"]);
    assert!(out.contains("Error: todo with ID 99999999999999999999 not found"));
}
