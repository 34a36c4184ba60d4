use crate::domain::system::{ClockSync, NetworkError, NetworkLink, WifiCredentials};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

/// Network link that reports "connected" after a fixed number of polls.
pub struct MockNetworkLink {
    polls_until_connected: usize,
    polls: AtomicUsize,
    connect_calls: AtomicUsize,
    hostname: Mutex<Option<String>>,
}

impl Default for MockNetworkLink {
    fn default() -> Self {
        Self::new(0)
    }
}

impl MockNetworkLink {
    pub fn new(polls_until_connected: usize) -> Self {
        Self {
            polls_until_connected,
            polls: AtomicUsize::new(0),
            connect_calls: AtomicUsize::new(0),
            hostname: Mutex::new(None),
        }
    }

    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    pub fn connect_calls(&self) -> usize {
        self.connect_calls.load(Ordering::SeqCst)
    }

    pub fn hostname(&self) -> Option<String> {
        self.hostname
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl NetworkLink for MockNetworkLink {
    async fn connect(&self, credentials: &WifiCredentials) -> Result<(), NetworkError> {
        info!("Mock joining wireless network {:?}", credentials.ssid);
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn is_connected(&self) -> Result<bool, NetworkError> {
        let poll = self.polls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Mock link poll #{}", poll);
        Ok(poll > self.polls_until_connected)
    }

    async fn set_hostname(&self, hostname: &str) -> Result<(), NetworkError> {
        *self.hostname.lock().unwrap_or_else(PoisonError::into_inner) = Some(hostname.to_string());
        Ok(())
    }
}

/// Clock collaborator that can be told to fail.
pub struct MockClock {
    fail: bool,
    calls: AtomicUsize,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClockSync for MockClock {
    async fn synchronize(&self, _timezone: &str, _ntp_server: &str) -> Result<(), NetworkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(NetworkError::ClockSyncFailed("mock clock failure".to_string()));
        }
        Ok(())
    }
}
