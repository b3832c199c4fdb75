use project_board_core::{
    BoardConfig, DataTransfer, DragGesture, DragOverEvent, DropTarget, GestureOutcome,
    GesturePhase, ItemId, ItemStatus, PayloadFormat, ProjectBoard, ProjectInput,
};

fn board_with_a_and_b() -> (ProjectBoard, ItemId, ItemId) {
    let board = ProjectBoard::new(BoardConfig::default()).unwrap();
    let a = board.submit(ProjectInput::new("A", "desc A", 2)).unwrap();
    let b = board.submit(ProjectInput::new("B", "desc B", 1)).unwrap();
    (board, a, b)
}

#[test]
fn new_item_shows_in_active_list_with_plural_label() {
    let board = ProjectBoard::new(BoardConfig::default()).unwrap();
    let a = board.store().add_item("A", "desc", 2);

    let active = board.list(ItemStatus::Active).unwrap();
    let finished = board.list(ItemStatus::Finished).unwrap();

    let cards = active.cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, a);
    assert_eq!(cards[0].people_label, "2 persons");
    assert!(!finished.contains(&a));
}

#[test]
fn single_person_label_is_singular() {
    let board = ProjectBoard::new(BoardConfig::default()).unwrap();
    board.store().add_item("B", "desc", 1);

    let cards = board.list(ItemStatus::Active).unwrap().cards();
    assert_eq!(cards[0].people_label, "1 person");
}

#[test]
fn dragging_to_finished_moves_only_that_item() {
    let (board, a, b) = board_with_a_and_b();

    assert_eq!(
        board.drag_to(&a, ItemStatus::Finished).unwrap(),
        GestureOutcome::Dropped
    );

    let active = board.list(ItemStatus::Active).unwrap();
    let finished = board.list(ItemStatus::Finished).unwrap();
    assert_eq!(board.store().get(&a).unwrap().status, ItemStatus::Finished);
    assert_eq!(active.item_ids(), vec![b]);
    assert_eq!(finished.item_ids(), vec![a]);
    assert!(!finished.is_droppable());
}

#[test]
fn dragging_back_restores_active() {
    let (board, a, b) = board_with_a_and_b();
    board.drag_to(&a, ItemStatus::Finished).unwrap();
    board.drag_to(&a, ItemStatus::Active).unwrap();

    // Creation order survives the round trip.
    assert_eq!(board.list(ItemStatus::Active).unwrap().item_ids(), vec![a, b]);
    assert!(board.list(ItemStatus::Finished).unwrap().cards().is_empty());
}

#[test]
fn hovering_then_leaving_changes_nothing() {
    let (board, a, _b) = board_with_a_and_b();
    let active = board.list(ItemStatus::Active).unwrap();
    let finished = board.list(ItemStatus::Finished).unwrap();
    let before = board.store().items();
    let renders = finished.render_count();

    let source = active.item_view(&a).unwrap();
    let mut gesture = DragGesture::start(&source);
    assert_eq!(gesture.drag_over(finished), GesturePhase::OverValid);
    assert!(finished.is_droppable());

    gesture.leave();
    assert!(!finished.is_droppable());
    assert_eq!(gesture.drop(), GestureOutcome::Cancelled);

    assert_eq!(board.store().items(), before);
    assert_eq!(finished.render_count(), renders);
}

#[test]
fn moving_across_lists_hands_over_the_affordance() {
    let (board, a, _b) = board_with_a_and_b();
    let active = board.list(ItemStatus::Active).unwrap();
    let finished = board.list(ItemStatus::Finished).unwrap();

    let source = active.item_view(&a).unwrap();
    let mut gesture = DragGesture::start(&source);
    gesture.drag_over(finished);
    gesture.drag_over(active);

    assert!(!finished.is_droppable());
    assert!(active.is_droppable());

    assert_eq!(gesture.drop(), GestureOutcome::Dropped);
    assert!(!active.is_droppable());
    assert_eq!(board.store().get(&a).unwrap().status, ItemStatus::Active);
}

#[test]
fn foreign_payload_never_shows_affordance_or_mutates() {
    let (board, a, _b) = board_with_a_and_b();
    let finished = board.list(ItemStatus::Finished).unwrap();
    let before = board.store().items();

    let mut transfer = DataTransfer::new();
    transfer.set_data(PayloadFormat::from_mime("text/html"), a.to_string());

    let mut event = DragOverEvent::new(&mut transfer);
    finished.on_drag_over(&mut event);
    assert!(!event.is_default_prevented());
    assert!(!finished.is_droppable());

    // Even if a drop were delivered, the payload type is refused.
    finished.on_drop(&transfer);
    assert_eq!(board.store().items(), before);
    assert!(!finished.is_droppable());
}

#[test]
fn dropping_on_own_list_skips_redraw() {
    let (board, a, _b) = board_with_a_and_b();
    let active = board.list(ItemStatus::Active).unwrap();
    let renders = active.render_count();

    assert_eq!(
        board.drag_to(&a, ItemStatus::Active).unwrap(),
        GestureOutcome::Dropped
    );
    assert_eq!(active.render_count(), renders);
}

#[test]
fn invalid_submission_is_reported_and_ignored() {
    let board = ProjectBoard::new(BoardConfig::default()).unwrap();
    let err = board
        .submit(ProjectInput::new("A", "a description", 9))
        .unwrap_err();

    assert!(err.to_string().contains("people"));
    assert!(board.list(ItemStatus::Active).unwrap().cards().is_empty());
}
