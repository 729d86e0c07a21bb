use tasklist_core::{
    CompletionSummary, TodoRepository, TodoService, TodoServiceError, TodoStore,
    TodoValidationError,
};

fn service() -> TodoService<TodoStore> {
    TodoService::new(TodoStore::new())
}

#[test]
fn add_returns_new_open_record() {
    let mut service = service();

    let todo = service.add("Buy groceries").unwrap();

    assert_eq!(todo.id(), 1);
    assert_eq!(todo.title(), "Buy groceries");
    assert!(!todo.is_completed());
}

#[test]
fn add_rejects_empty_and_whitespace_titles() {
    let mut service = service();

    for title in ["", "   ", "\t\n"] {
        let err = service.add(title).unwrap_err();
        assert_eq!(
            err,
            TodoServiceError::Validation(TodoValidationError::EmptyTitle)
        );
    }
    assert!(service.list_all().is_empty());
}

#[test]
fn add_enforces_title_length_limit() {
    let mut service = service();

    let err = service.add(&"x".repeat(1001)).unwrap_err();
    assert!(matches!(
        err,
        TodoServiceError::Validation(TodoValidationError::TitleTooLong { .. })
    ));
    assert!(err.to_string().contains("too long"));

    let todo = service.add(&"x".repeat(1000)).unwrap();
    assert_eq!(todo.id(), 1);
}

#[test]
fn complete_marks_only_the_target() {
    let mut service = service();
    service.add("A").unwrap();
    service.add("B").unwrap();

    service.complete(1).unwrap();

    let all = service.list_all();
    assert_eq!(all.len(), 2);
    assert_eq!((all[0].id(), all[0].is_completed()), (1, true));
    assert_eq!((all[1].id(), all[1].is_completed()), (2, false));
}

#[test]
fn complete_twice_succeeds() {
    let mut service = service();
    service.add("A").unwrap();

    assert!(service.complete(1).unwrap().is_completed());
    assert!(service.complete(1).unwrap().is_completed());
}

#[test]
fn complete_missing_id_is_not_found() {
    let mut service = service();
    assert_eq!(service.complete(5).unwrap_err(), TodoServiceError::NotFound(5));
}

#[test]
fn update_on_empty_store_is_not_found() {
    let mut service = service();

    let err = service.update(999, "text").unwrap_err();

    assert_eq!(err, TodoServiceError::NotFound(999));
    assert!(err.to_string().contains("999"));
}

#[test]
fn update_validates_title_and_leaves_state_unchanged() {
    let mut service = service();
    service.add("original").unwrap();

    assert!(matches!(
        service.update(1, ""),
        Err(TodoServiceError::Validation(TodoValidationError::EmptyTitle))
    ));
    assert!(matches!(
        service.update(1, &"y".repeat(1001)),
        Err(TodoServiceError::Validation(TodoValidationError::TitleTooLong { .. }))
    ));
    assert_eq!(service.list_all()[0].title(), "original");
}

#[test]
fn update_preserves_completion() {
    let mut service = service();
    service.add("Call dentist").unwrap();
    service.complete(1).unwrap();

    let updated = service.update(1, "Call dentist about appointment").unwrap();

    assert_eq!(updated.title(), "Call dentist about appointment");
    assert!(updated.is_completed());
}

#[test]
fn delete_returns_prior_value_and_removes_record() {
    let mut service = service();
    let added = service.add("Finish report").unwrap();
    service.complete(added.id()).unwrap();

    let deleted = service.delete(added.id()).unwrap();

    assert_eq!(deleted.title(), "Finish report");
    assert!(deleted.is_completed());
    assert!(service.repo().get_by_id(added.id()).is_none());
    assert_eq!(
        service.delete(added.id()).unwrap_err(),
        TodoServiceError::NotFound(added.id())
    );
}

#[test]
fn ids_are_not_reused_after_delete() {
    let mut service = service();
    service.add("X").unwrap();
    service.delete(1).unwrap();

    assert_eq!(service.add("Y").unwrap().id(), 2);
}

#[test]
fn completion_summary_counts_live_records() {
    let mut service = service();
    assert_eq!(service.completion_summary(), CompletionSummary::default());

    service.add("A").unwrap();
    service.add("B").unwrap();
    service.add("C").unwrap();
    service.complete(2).unwrap();
    service.delete(3).unwrap();

    assert_eq!(
        service.completion_summary(),
        CompletionSummary {
            completed: 1,
            total: 2,
        }
    );
}
