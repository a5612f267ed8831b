//! Test doubles shared by the core's unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::cache::{CacheError, CacheEvent, CachedValue, QueryCache, Result as CacheResult};
use crate::notify::{Notice, Notifier};
use crate::restaurant::{ManagedRestaurant, UpdateProfileRequest};
use crate::service::{ApiError, ProfileService, Result as ServiceResult};

// Mock cache that counts writes and can refuse them
pub(crate) struct MockCache {
    store: Mutex<HashMap<String, CachedValue>>,
    sender: broadcast::Sender<CacheEvent>,
    writes: AtomicUsize,
    fail_from_write: AtomicUsize,
}

impl MockCache {
    pub(crate) fn new() -> Self {
        let (sender, _) = broadcast::channel(16);
        Self {
            store: Mutex::new(HashMap::new()),
            sender,
            writes: AtomicUsize::new(0),
            fail_from_write: AtomicUsize::new(usize::MAX),
        }
    }

    // Every `set` from the nth one (1-based) on fails
    pub(crate) fn failing_from_write(self, nth: usize) -> Self {
        self.fail_from_write.store(nth, Ordering::SeqCst);
        self
    }

    pub(crate) fn bytes(&self, key: &str) -> Option<Vec<u8>> {
        self.store
            .lock()
            .unwrap()
            .get(key)
            .map(|value| value.data.clone())
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl QueryCache for MockCache {
    fn get(&self, key: &str) -> CacheResult<Option<CachedValue>> {
        Ok(self.store.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> CacheResult<()> {
        let nth = self.writes.fetch_add(1, Ordering::SeqCst) + 1;
        if nth >= self.fail_from_write.load(Ordering::SeqCst) {
            return Err(CacheError::OperationFailed("write refused".to_string()));
        }
        self.store
            .lock()
            .unwrap()
            .insert(key.to_string(), CachedValue::new(value.to_vec()));
        let _ = self.sender.send(CacheEvent::Updated {
            key: key.to_string(),
        });
        Ok(())
    }

    fn remove(&self, key: &str) -> CacheResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.store.lock().unwrap().remove(key);
        let _ = self.sender.send(CacheEvent::Removed {
            key: key.to_string(),
        });
        Ok(())
    }

    fn subscribe(&self, _key: &str) -> CacheResult<broadcast::Receiver<CacheEvent>> {
        Ok(self.sender.subscribe())
    }
}

// Mock profile service with a switchable outcome
pub(crate) struct MockProfileService {
    restaurant: Mutex<ManagedRestaurant>,
    fail_updates: AtomicBool,
    pub(crate) get_calls: AtomicUsize,
    pub(crate) updates: Mutex<Vec<UpdateProfileRequest>>,
}

impl MockProfileService {
    pub(crate) fn new(restaurant: ManagedRestaurant) -> Self {
        Self {
            restaurant: Mutex::new(restaurant),
            fail_updates: AtomicBool::new(false),
            get_calls: AtomicUsize::new(0),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(self) -> Self {
        self.fail_updates.store(true, Ordering::SeqCst);
        self
    }
}

#[async_trait]
impl ProfileService for MockProfileService {
    async fn get_managed_restaurant(&self) -> ServiceResult<ManagedRestaurant> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.restaurant.lock().unwrap().clone())
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> ServiceResult<()> {
        self.updates.lock().unwrap().push(request.clone());
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(ApiError::Rejected {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        // The server normalises the name; callers must not pick this up
        let mut restaurant = self.restaurant.lock().unwrap();
        restaurant.name = request.name.to_uppercase();
        restaurant.description = request.description.clone();
        Ok(())
    }
}

// Notifier that records every notice
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub(crate) fn taken(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
