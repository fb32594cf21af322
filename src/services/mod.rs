// Service exports
pub mod appwrite;
pub mod sessions;
pub mod store;

pub use appwrite::AppwriteClient;
pub use sessions::{SessionHandle, SessionStore};
pub use store::{InMemoryPetStore, PetStore, StoreError};
