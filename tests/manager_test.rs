use std::cell::{Cell, RefCell};
use std::sync::{Arc, Mutex};

use foliocli::management::{ChangeEvent, ManagerError, ModalController, ModalState, ResourceManager};
use foliocli::remote::{ApiError, RemoteCollection};
use foliocli::types::Certification;
use reqwest::StatusCode;

// In-memory stand-in for the REST backend: assigns ids on create and can be
// told to fail the next call with a given error.
struct FakeRemote {
    records: RefCell<Vec<Certification>>,
    next_id: Cell<u64>,
    failure: RefCell<Option<ApiError>>,
    strip_id: Cell<bool>,
}

impl FakeRemote {
    fn new(initial: Vec<Certification>) -> Self {
        let next_id = initial
            .iter()
            .filter_map(|r| r.id)
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            records: RefCell::new(initial),
            next_id: Cell::new(next_id),
            failure: RefCell::new(None),
            strip_id: Cell::new(false),
        }
    }

    fn fail_next(&self, err: ApiError) {
        *self.failure.borrow_mut() = Some(err);
    }

    fn take_failure(&self) -> Option<ApiError> {
        self.failure.borrow_mut().take()
    }
}

impl RemoteCollection<Certification> for &FakeRemote {
    async fn list(&self) -> Result<Vec<Certification>, ApiError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self.records.borrow().clone())
    }

    async fn create(&self, draft: &Certification) -> Result<Certification, ApiError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let mut created = draft.clone();
        if self.strip_id.get() {
            created.id = None;
        } else {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            created.id = Some(id);
            self.records.borrow_mut().push(created.clone());
        }
        Ok(created)
    }

    async fn update(&self, id: u64, draft: &Certification) -> Result<Certification, ApiError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let mut records = self.records.borrow_mut();
        let slot = match records.iter_mut().find(|r| r.id == Some(id)) {
            Some(slot) => slot,
            None => return Err(ApiError::NotFound),
        };
        let mut updated = draft.clone();
        updated.id = Some(id);
        *slot = updated.clone();
        Ok(updated)
    }

    async fn remove(&self, id: u64) -> Result<(), ApiError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let mut records = self.records.borrow_mut();
        if !records.iter().any(|r| r.id == Some(id)) {
            return Err(ApiError::NotFound);
        }
        records.retain(|r| r.id != Some(id));
        Ok(())
    }
}

fn cert(id: Option<u64>, name: &str) -> Certification {
    Certification {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        date: "2023/12/15".to_string(),
        image_url: String::new(),
    }
}

#[tokio::test]
async fn load_replaces_collection_wholesale() {
    let remote = FakeRemote::new(vec![cert(Some(1), "First"), cert(Some(2), "Second")]);
    let mut manager = ResourceManager::new(&remote);

    let count = manager.load().await.unwrap();
    assert_eq!(count, 2);
    assert_eq!(manager.records().len(), 2);

    // the server's state changed; a reload mirrors it, order included
    remote.records.borrow_mut().remove(0);
    manager.load().await.unwrap();
    assert_eq!(manager.records().len(), 1);
    assert_eq!(manager.records()[0].name, "Second");
}

#[tokio::test]
async fn load_failure_keeps_previous_collection() {
    let remote = FakeRemote::new(vec![cert(Some(1), "Kept")]);
    let mut manager = ResourceManager::new(&remote);
    manager.load().await.unwrap();

    remote.fail_next(ApiError::Server(StatusCode::INTERNAL_SERVER_ERROR));
    let result = manager.load().await;

    assert!(matches!(result, Err(ManagerError::Api(ApiError::Server(_)))));
    assert_eq!(manager.records().len(), 1);
    assert_eq!(manager.records()[0].name, "Kept");
    assert!(!manager.is_busy());
}

#[tokio::test]
async fn add_appends_record_with_server_assigned_id() {
    let remote = FakeRemote::new(Vec::new());
    let mut manager = ResourceManager::new(&remote);
    manager.load().await.unwrap();

    let draft = Certification {
        id: None,
        name: "AWS SAA".to_string(),
        description: "cloud cert".to_string(),
        date: "2023/12/15".to_string(),
        image_url: String::new(),
    };
    let id = manager.submit_add(draft.clone()).await.unwrap();

    assert_eq!(id, 1);
    assert_eq!(manager.records().len(), 1);
    let expected = Certification {
        id: Some(1),
        ..draft
    };
    assert_eq!(manager.records()[0], expected);
}

#[tokio::test]
async fn add_rejects_empty_required_field() {
    let remote = FakeRemote::new(Vec::new());
    let mut manager = ResourceManager::new(&remote);

    let mut draft = cert(None, "Valid");
    draft.name = "   ".to_string();
    let result = manager.submit_add(draft).await;

    assert!(matches!(result, Err(ManagerError::MissingField("name"))));
    assert!(manager.is_empty());
}

#[tokio::test]
async fn add_failure_leaves_collection_unchanged() {
    let remote = FakeRemote::new(vec![cert(Some(1), "Existing")]);
    let mut manager = ResourceManager::new(&remote);
    manager.load().await.unwrap();
    let before = manager.records().to_vec();

    remote.fail_next(ApiError::Server(StatusCode::BAD_GATEWAY));
    let result = manager.submit_add(cert(None, "New")).await;

    assert!(matches!(result, Err(ManagerError::Api(ApiError::Server(_)))));
    assert_eq!(manager.records(), before.as_slice());
}

#[tokio::test]
async fn add_rejects_response_without_id() {
    let remote = FakeRemote::new(Vec::new());
    remote.strip_id.set(true);
    let mut manager = ResourceManager::new(&remote);

    let result = manager.submit_add(cert(None, "No id")).await;

    assert!(matches!(result, Err(ManagerError::MissingId)));
    assert!(manager.is_empty());
}

#[tokio::test]
async fn edit_targets_member_by_id_not_position() {
    let remote = FakeRemote::new(vec![
        cert(Some(10), "A"),
        cert(Some(20), "B"),
        cert(Some(30), "C"),
    ]);
    let mut manager = ResourceManager::new(&remote);
    manager.load().await.unwrap();

    let mut draft = manager.records()[1].clone();
    draft.name = "B edited".to_string();
    let updated_id = manager.submit_edit(20, draft).await.unwrap();

    assert_eq!(updated_id, 20);
    assert_eq!(manager.records().len(), 3);
    assert_eq!(manager.records()[0].name, "A");
    assert_eq!(manager.records()[1].name, "B edited");
    assert_eq!(manager.records()[2].name, "C");
}

#[tokio::test]
async fn edit_failure_keeps_record_and_modal_open() {
    let remote = FakeRemote::new(vec![cert(Some(5), "Old")]);
    let mut manager = ResourceManager::new(&remote);
    manager.load().await.unwrap();

    let mut modal: ModalController<Certification> = ModalController::new();
    modal.open_edit(&manager.records()[0]);
    modal.settle();

    let mut draft = modal.draft().unwrap().clone();
    draft.name = "New".to_string();

    remote.fail_next(ApiError::Server(StatusCode::INTERNAL_SERVER_ERROR));
    let result = manager.submit_edit(5, draft).await;

    assert!(matches!(result, Err(ManagerError::Api(ApiError::Server(_)))));
    assert_eq!(manager.records()[0].name, "Old");
    assert_eq!(modal.state(), ModalState::Editing(5));
    assert!(modal.is_open());
}

#[tokio::test]
#[should_panic(expected = "not in the collection")]
async fn edit_unknown_id_is_a_programming_error() {
    let remote = FakeRemote::new(vec![cert(Some(1), "Only")]);
    let mut manager = ResourceManager::new(&remote);
    manager.load().await.unwrap();

    let _ = manager.submit_edit(99, cert(Some(99), "Ghost")).await;
}

#[tokio::test]
async fn delete_removes_exactly_one_preserving_order() {
    let remote = FakeRemote::new(vec![
        cert(Some(1), "A"),
        cert(Some(2), "B"),
        cert(Some(3), "C"),
    ]);
    let mut manager = ResourceManager::new(&remote);
    manager.load().await.unwrap();

    manager.submit_delete(2).await.unwrap();

    assert_eq!(manager.records().len(), 2);
    assert_eq!(manager.records()[0].id, Some(1));
    assert_eq!(manager.records()[1].id, Some(3));
    assert!(manager.get(2).is_none());
}

#[tokio::test]
async fn delete_failure_leaves_collection_unchanged() {
    let remote = FakeRemote::new(vec![cert(Some(1), "A"), cert(Some(2), "B")]);
    let mut manager = ResourceManager::new(&remote);
    manager.load().await.unwrap();
    let before = manager.records().to_vec();

    remote.fail_next(ApiError::NotFound);
    let result = manager.submit_delete(1).await;

    assert!(matches!(result, Err(ManagerError::Api(ApiError::NotFound))));
    assert_eq!(manager.records(), before.as_slice());
}

#[tokio::test]
async fn successful_mutations_publish_change_events() {
    let remote = FakeRemote::new(vec![cert(Some(1), "Seed")]);
    let mut manager = ResourceManager::new(&remote);

    let seen: Arc<Mutex<Vec<ChangeEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    manager.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    manager.load().await.unwrap();
    let added = manager.submit_add(cert(None, "New")).await.unwrap();
    manager.submit_delete(1).await.unwrap();

    let events = seen.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            ChangeEvent::Loaded { count: 1 },
            ChangeEvent::Added { id: added },
            ChangeEvent::Removed { id: 1 },
        ]
    );
}

#[tokio::test]
async fn failed_mutations_publish_nothing() {
    let remote = FakeRemote::new(vec![cert(Some(1), "Seed")]);
    let mut manager = ResourceManager::new(&remote);
    manager.load().await.unwrap();

    let seen: Arc<Mutex<Vec<ChangeEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    manager.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    remote.fail_next(ApiError::Server(StatusCode::INTERNAL_SERVER_ERROR));
    let _ = manager.submit_add(cert(None, "New")).await;

    assert!(seen.lock().unwrap().is_empty());
}
