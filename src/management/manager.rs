use crate::{
    remote::{ApiError, RemoteCollection},
    types::Record,
};

/// Notification published to subscribers after every successful mutation of
/// a manager's collection. Failures never mutate state and are returned to
/// the caller instead of published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    Loaded { count: usize },
    Added { id: u64 },
    Updated { id: u64 },
    Removed { id: u64 },
}

#[derive(Debug)]
pub enum ManagerError {
    /// Another operation on this collection is still in flight.
    Busy,
    /// A required field was left empty.
    MissingField(&'static str),
    /// The server's response carried no id.
    MissingId,
    Api(ApiError),
}

impl From<ApiError> for ManagerError {
    fn from(err: ApiError) -> Self {
        ManagerError::Api(err)
    }
}

impl std::fmt::Display for ManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManagerError::Busy => write!(f, "another operation is still in flight"),
            ManagerError::MissingField(field) => write!(f, "required field '{}' is empty", field),
            ManagerError::MissingId => write!(f, "server response carried no id"),
            ManagerError::Api(err) => write!(f, "{}", err),
        }
    }
}

/// Sole owner of one collection's client-side state.
///
/// Holds the in-memory mirror of a REST collection and is the only component
/// allowed to mutate it. Every mutation is a full round trip: the collection
/// changes only after the server has confirmed, and an error leaves it
/// exactly as it was. Operations are serialized per manager instance; a
/// second call while one is in flight is rejected with
/// [`ManagerError::Busy`] instead of producing an interleaved merge.
pub struct ResourceManager<R, C> {
    client: C,
    records: Vec<R>,
    busy: bool,
    listeners: Vec<Box<dyn Fn(&ChangeEvent) + Send>>,
}

impl<R, C> ResourceManager<R, C>
where
    R: Record,
    C: RemoteCollection<R>,
{
    pub fn new(client: C) -> Self {
        Self {
            client,
            records: Vec::new(),
            busy: false,
            listeners: Vec::new(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == Some(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Registers a listener invoked after every successful mutation, so the
    /// presentation layer can re-render without polling.
    pub fn subscribe(&mut self, listener: impl Fn(&ChangeEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn publish(&self, event: ChangeEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }

    /// Replaces the collection wholesale with the server's current state,
    /// preserving the server-given order. On failure the previous collection
    /// is left untouched.
    pub async fn load(&mut self) -> Result<usize, ManagerError> {
        if self.busy {
            return Err(ManagerError::Busy);
        }

        self.busy = true;
        let result = self.client.list().await;
        self.busy = false;

        let fetched = match result {
            Ok(records) => records,
            Err(err) => return Err(ManagerError::Api(err)),
        };

        let count = fetched.len();
        self.records = fetched;
        self.publish(ChangeEvent::Loaded { count });
        Ok(count)
    }

    /// Creates the draft on the server and appends the returned record to
    /// the end of the collection. The id is always the server's; a response
    /// without one is rejected so the collection never holds an id-less
    /// record.
    pub async fn submit_add(&mut self, draft: R) -> Result<u64, ManagerError> {
        if let Some(field) = draft.missing_required() {
            return Err(ManagerError::MissingField(field));
        }
        if self.busy {
            return Err(ManagerError::Busy);
        }

        self.busy = true;
        let result = self.client.create(&draft).await;
        self.busy = false;

        let created = match result {
            Ok(record) => record,
            Err(err) => return Err(ManagerError::Api(err)),
        };

        let id = match created.id() {
            Some(id) => id,
            None => return Err(ManagerError::MissingId),
        };

        self.records.push(created);
        self.publish(ChangeEvent::Added { id });
        Ok(id)
    }

    /// Sends the full draft for an existing member and replaces the member
    /// whose id matches the response's id, wherever it sits in the sequence.
    ///
    /// The target id must reference a current member; calling this with an
    /// unknown id is a programming error, not a recoverable failure.
    pub async fn submit_edit(&mut self, id: u64, draft: R) -> Result<u64, ManagerError> {
        assert!(
            self.records.iter().any(|r| r.id() == Some(id)),
            "submit_edit target {} is not in the collection",
            id
        );

        if let Some(field) = draft.missing_required() {
            return Err(ManagerError::MissingField(field));
        }
        if self.busy {
            return Err(ManagerError::Busy);
        }

        self.busy = true;
        let result = self.client.update(id, &draft).await;
        self.busy = false;

        let updated = match result {
            Ok(record) => record,
            Err(err) => return Err(ManagerError::Api(err)),
        };

        let updated_id = match updated.id() {
            Some(id) => id,
            None => return Err(ManagerError::MissingId),
        };

        if let Some(slot) = self.records.iter_mut().find(|r| r.id() == Some(updated_id)) {
            *slot = updated;
        }
        self.publish(ChangeEvent::Updated { id: updated_id });
        Ok(updated_id)
    }

    /// Deletes the member with the given id on the server, then removes it
    /// locally. All other members keep their relative order.
    pub async fn submit_delete(&mut self, id: u64) -> Result<(), ManagerError> {
        if self.busy {
            return Err(ManagerError::Busy);
        }

        self.busy = true;
        let result = self.client.remove(id).await;
        self.busy = false;

        match result {
            Ok(()) => {
                self.records.retain(|r| r.id() != Some(id));
                self.publish(ChangeEvent::Removed { id });
                Ok(())
            }
            Err(err) => Err(ManagerError::Api(err)),
        }
    }
}
