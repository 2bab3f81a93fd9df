mod manager;
mod modal;

pub use manager::ChangeEvent;
pub use manager::ManagerError;
pub use manager::ResourceManager;
pub use modal::CLOSE_DELAY;
pub use modal::ModalController;
pub use modal::ModalPhase;
pub use modal::ModalState;
