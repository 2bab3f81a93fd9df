use foliocli::management::{CLOSE_DELAY, ModalController, ModalPhase, ModalState};
use foliocli::types::Project;

fn project(id: Option<u64>, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        description: "a project".to_string(),
        technologies: vec!["Rust".to_string()],
        image_url: String::new(),
        year: "2023".to_string(),
        project_url: String::new(),
    }
}

#[test]
fn starts_closed_and_steady() {
    let modal: ModalController<Project> = ModalController::new();
    assert_eq!(modal.state(), ModalState::Closed);
    assert_eq!(modal.phase(), ModalPhase::Steady);
    assert!(!modal.is_open());
    assert!(modal.draft().is_none());
}

#[test]
fn open_add_initializes_empty_draft() {
    let mut modal: ModalController<Project> = ModalController::new();
    modal.open_add();

    assert_eq!(modal.state(), ModalState::Adding);
    assert_eq!(modal.phase(), ModalPhase::Entering);
    let draft = modal.draft().unwrap();
    assert!(draft.id.is_none());
    assert!(draft.name.is_empty());
    assert!(draft.technologies.is_empty());

    modal.settle();
    assert_eq!(modal.phase(), ModalPhase::Steady);
}

#[test]
fn open_edit_copies_the_record() {
    let original = project(Some(7), "Original");
    let mut modal = ModalController::new();
    modal.open_edit(&original);

    assert_eq!(modal.state(), ModalState::Editing(7));

    // mutating the draft must not touch the record it was copied from
    let draft = modal.draft_mut().unwrap();
    draft.name = "Changed".to_string();
    draft.technologies.push("Go".to_string());

    assert_eq!(original.name, "Original");
    assert_eq!(original.technologies, vec!["Rust".to_string()]);
}

#[test]
fn cancel_discards_the_draft() {
    let original = project(Some(7), "Original");
    let mut modal = ModalController::new();
    modal.open_edit(&original);
    modal.draft_mut().unwrap().name = "Half-typed edit".to_string();

    modal.cancel();

    assert_eq!(modal.state(), ModalState::Closed);
    assert_eq!(modal.phase(), ModalPhase::Steady);
    assert!(modal.draft().is_none());
    assert_eq!(original, project(Some(7), "Original"));
}

#[test]
fn at_most_one_modal_is_open() {
    let mut modal: ModalController<Project> = ModalController::new();
    modal.open_add();
    modal.draft_mut().unwrap().name = "In progress".to_string();

    // further open requests are ignored while a dialog is up
    modal.open_edit(&project(Some(1), "Other"));
    assert_eq!(modal.state(), ModalState::Adding);
    assert_eq!(modal.draft().unwrap().name, "In progress");

    modal.open_delete(1);
    assert_eq!(modal.state(), ModalState::Adding);
}

#[test]
fn open_delete_carries_only_the_target_id() {
    let mut modal: ModalController<Project> = ModalController::new();
    modal.open_delete(42);

    assert_eq!(modal.state(), ModalState::ConfirmingDelete(42));
    assert!(modal.draft().is_none());
}

#[test]
fn open_edit_requires_a_persisted_record() {
    let mut modal: ModalController<Project> = ModalController::new();
    modal.open_edit(&project(None, "Draft only"));

    assert_eq!(modal.state(), ModalState::Closed);
    assert!(modal.draft().is_none());
}

#[test]
fn close_transition_runs_in_two_steps() {
    let mut modal: ModalController<Project> = ModalController::new();
    modal.open_add();
    modal.settle();

    modal.begin_close();
    assert_eq!(modal.phase(), ModalPhase::Exiting);
    assert!(modal.is_open());

    modal.finish_close();
    assert_eq!(modal.state(), ModalState::Closed);
    assert_eq!(modal.phase(), ModalPhase::Steady);
    assert!(modal.draft().is_none());
}

#[tokio::test]
async fn dismiss_waits_out_the_close_delay() {
    let mut modal: ModalController<Project> = ModalController::new();
    modal.open_add();
    modal.settle();

    let started = std::time::Instant::now();
    modal.dismiss().await;

    assert!(started.elapsed() >= CLOSE_DELAY);
    assert_eq!(modal.state(), ModalState::Closed);
    assert!(modal.draft().is_none());
}

#[tokio::test]
async fn dismiss_on_a_closed_modal_is_a_no_op() {
    let mut modal: ModalController<Project> = ModalController::new();
    modal.dismiss().await;
    assert_eq!(modal.state(), ModalState::Closed);
}

#[test]
fn reopens_after_close() {
    let mut modal: ModalController<Project> = ModalController::new();
    modal.open_add();
    modal.cancel();

    modal.open_delete(3);
    assert_eq!(modal.state(), ModalState::ConfirmingDelete(3));
}
