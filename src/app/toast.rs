//! Self-clearing success notification

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug)]
struct Notice {
    id: u64,
    message: String,
}

/// One toast at a time; a new one cancels the pending expiry of the last
#[derive(Debug)]
pub struct Toast {
    slot: Arc<Mutex<Option<Notice>>>,
    timer: Option<JoinHandle<()>>,
    next_id: u64,
}

impl Default for Toast {
    fn default() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            timer: None,
            next_id: 0,
        }
    }
}

impl Toast {

    pub fn show(&mut self, message: impl Into<String>) {
        self.cancel_timer();
        self.next_id += 1;
        let id = self.next_id;
        *self.slot.lock() = Some(Notice {
            id,
            message: message.into(),
        });

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let slot = Arc::clone(&self.slot);
                let deadline = Instant::now() + TOAST_DURATION;
                self.timer = Some(handle.spawn(async move {
                    sleep_until(deadline).await;
                    let mut slot = slot.lock();
                    if slot.as_ref().map(|n| n.id) == Some(id) {
                        *slot = None;
                    }
                }));
            }
            Err(_) => log::warn!("no async runtime; toast stays until replaced"),
        }
    }

    pub fn clear(&mut self) {
        self.cancel_timer();
        *self.slot.lock() = None;
    }

    pub fn message(&self) -> Option<String> {
        self.slot.lock().as_ref().map(|n| n.message.clone())
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Toast {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
