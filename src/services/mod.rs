// src/services/mod.rs

//! Services that sit between handlers and external collaborators:
//! admin credentials and sessions, custom-link validation, object storage.

pub mod admin_sessions;
pub mod auth_service;
pub mod link_service;
pub mod storage_mock;
pub mod storage_service;

pub use admin_sessions::AdminSessions;
pub use link_service::{validate_custom_link, CustomLinkIndex, CustomLinkStatus};
pub use storage_mock::InMemoryObjectStore;
pub use storage_service::{storage_key_for, store_upload, ObjectStore, UploadOptions};
