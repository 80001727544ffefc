//! Shared fixtures for integration tests.

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use nutrition_track::state::{select_file, AppController, Delay, ImageSource};
use nutrition_track::{AppConfig, AppError, KeyValueStore, MemoryStore, StorageError};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub type TestController = RefCell<AppController<MemoryStore>>;

/// Delay backed by tokio's (pausable) clock.
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

/// A [`MemoryStore`] whose reads or writes can be made to fail.
#[allow(dead_code)]
pub struct FailingStore {
    pub inner: MemoryStore,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

#[allow(dead_code)]
impl FailingStore {
    /// Every `get` fails.
    pub fn unreadable() -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_reads: true,
            fail_writes: false,
        }
    }

    /// `set` and `remove` fail; `inner` stays readable.
    pub fn read_only(inner: MemoryStore) -> Self {
        Self {
            inner,
            fail_reads: false,
            fail_writes: true,
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read {
                key: key.to_string(),
                reason: "SecurityError".to_string(),
            });
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.inner.remove(key)
    }
}

/// In-memory stand-in for a browser `File`.
pub struct MemFile {
    pub name: &'static str,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
    pub read_delay: Duration,
    pub fail: bool,
}

impl ImageSource for MemFile {
    fn name(&self) -> String {
        self.name.to_string()
    }

    fn media_type(&self) -> String {
        self.media_type.to_string()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, AppError> {
        if !self.read_delay.is_zero() {
            tokio::time::sleep(self.read_delay).await;
        }
        if self.fail {
            return Err(AppError::ReadFailed("disk on fire".to_string()));
        }
        Ok(self.bytes.clone())
    }
}

#[allow(dead_code)]
pub fn png() -> MemFile {
    MemFile {
        name: "lunch.png",
        media_type: "image/png",
        bytes: vec![0x89, b'P', b'N', b'G'],
        read_delay: Duration::ZERO,
        fail: false,
    }
}

#[allow(dead_code)]
pub fn text_file() -> MemFile {
    MemFile {
        name: "notes.txt",
        media_type: "text/plain",
        bytes: b"not a picture".to_vec(),
        read_delay: Duration::ZERO,
        fail: false,
    }
}

#[allow(dead_code)]
pub fn controller_with(store: MemoryStore, config: AppConfig) -> TestController {
    RefCell::new(AppController::new(store, config, StdRng::seed_from_u64(7)))
}

#[allow(dead_code)]
pub fn controller_on<S: KeyValueStore>(store: S) -> RefCell<AppController<S>> {
    RefCell::new(AppController::new(store, AppConfig::default(), StdRng::seed_from_u64(7)))
}

#[allow(dead_code)]
pub fn controller() -> TestController {
    controller_with(MemoryStore::new(), AppConfig::default())
}

/// Logged in as a@b.com with a PNG in preview.
#[allow(dead_code)]
pub async fn logged_in_with_png() -> TestController {
    let controller = controller();
    controller
        .borrow_mut()
        .login("a@b.com", "x")
        .expect("login should succeed");
    let installed = select_file(&controller, &png())
        .await
        .expect("png should be accepted");
    assert!(installed);
    controller
}
