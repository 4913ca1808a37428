use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::channel::mpsc;

use super::storage::Storage;
use super::{Mode, STORAGE_KEY, THEME_ATTRIBUTE};
use crate::config;
use crate::document::Root;

/// The platform's color scheme preference.
pub trait SystemPreference: Send {
    /// `None` when the platform can't tell.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Light/dark mode shared by every view.
///
/// A committed change is persisted, written to the root's `data-theme`
/// attribute and sent to subscribers before the mutating call returns.
pub struct ThemeState {
    mode: Mode,
    initialized: bool,
    follow_system: bool,
    fallback: Mode,
    storage: Option<Box<dyn Storage>>,
    system: Box<dyn SystemPreference>,
    root: Root,
    subscribers: Vec<mpsc::UnboundedSender<Mode>>,
}

impl ThemeState {
    /// `storage` is `None` when no preference store could be opened; the
    /// mode is then resolved without it and never persisted.
    pub fn new(
        settings: &config::Appearance,
        storage: Option<Box<dyn Storage>>,
        system: Box<dyn SystemPreference>,
        root: Root,
    ) -> Self {
        Self {
            mode: settings.fallback,
            initialized: false,
            follow_system: settings.follow_system,
            fallback: settings.fallback,
            storage,
            system,
            root,
            subscribers: vec![],
        }
    }

    /// Resolves the mode from the persisted preference, then the system
    /// preference, then the configured fallback.
    pub fn initialize(&mut self) {
        let (mode, source) = if let Some(mode) = self.persisted() {
            (mode, "stored preference")
        } else if let Some(mode) = self.system_mode() {
            (mode, "system preference")
        } else {
            (self.fallback, "fallback")
        };

        log::debug!("theme resolved to {mode} from {source}");

        self.mode = mode;
        self.initialized = true;
        self.commit();
    }

    pub fn toggle(&mut self) -> Result<Mode, Error> {
        self.set_mode(self.mode.toggled())?;

        Ok(self.mode)
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error> {
        if !self.initialized {
            log::warn!("ignoring theme change to {mode} before initialization");
            return Err(Error::NotInitialized);
        }

        if self.mode == mode {
            return Ok(());
        }

        self.mode = mode;
        self.commit();

        Ok(())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Receives the mode after every committed change.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<Mode> {
        let (sender, receiver) = mpsc::unbounded();
        self.subscribers.push(sender);
        receiver
    }

    fn persisted(&self) -> Option<Mode> {
        let storage = self.storage.as_ref()?;

        match storage.get(STORAGE_KEY) {
            Ok(Some(value)) => value
                .parse::<Mode>()
                .inspect_err(|_| {
                    log::warn!("ignoring unknown stored theme {value:?}");
                })
                .ok(),
            Ok(None) => None,
            Err(error) => {
                log::warn!("stored theme could not be read: {error}");
                None
            }
        }
    }

    fn system_mode(&self) -> Option<Mode> {
        if !self.follow_system {
            return None;
        }

        self.system
            .prefers_dark()
            .map(|dark| if dark { Mode::Dark } else { Mode::Light })
    }

    fn commit(&mut self) {
        let mode = self.mode;
        let value = mode.as_ref();

        if let Some(storage) = self.storage.as_mut()
            && let Err(error) = storage.set(STORAGE_KEY, value)
        {
            log::warn!("theme could not be stored: {error}");
        }

        self.root.set_attribute(THEME_ATTRIBUTE, value);

        self.subscribers
            .retain(|sender| sender.unbounded_send(mode).is_ok());
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("mode", &self.mode)
            .field("initialized", &self.initialized)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

/// Cloneable handle to a [`ThemeState`] for hosts that share it across
/// threads. Each call holds the lock for the whole change.
#[derive(Debug, Clone)]
pub struct Handle(Arc<Mutex<ThemeState>>);

impl Handle {
    pub fn new(state: ThemeState) -> Self {
        Self(Arc::new(Mutex::new(state)))
    }

    pub fn initialize(&self) {
        self.lock().initialize();
    }

    pub fn toggle(&self) -> Result<Mode, Error> {
        self.lock().toggle()
    }

    pub fn set_mode(&self, mode: Mode) -> Result<(), Error> {
        self.lock().set_mode(mode)
    }

    pub fn mode(&self) -> Mode {
        self.lock().mode()
    }

    pub fn is_dark(&self) -> bool {
        self.lock().is_dark()
    }

    pub fn is_initialized(&self) -> bool {
        self.lock().is_initialized()
    }

    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<Mode> {
        self.lock().subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, ThemeState> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("theme changed before it was initialized")]
    NotInitialized,
}
