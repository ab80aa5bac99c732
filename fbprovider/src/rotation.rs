//! Round-robin rotation over every credential/model combination.
//!
//! The model index advances first; when it wraps, the credential index advances.
//! `credentials × models` consecutive calls visit each pair exactly once.
//!
//! ```rust
//! use fbprovider::{CredentialPool, ModelPool, Rotator};
//!
//! let rotator = Rotator::new(
//!     CredentialPool::parse("key-a,key-b"),
//!     ModelPool::new(["flash", "pro"]).expect("models"),
//! );
//!
//! let first = rotator.next().expect("slot");
//! assert_eq!((first.credential_index, first.model.as_str()), (0, "flash"));
//! let second = rotator.next().expect("slot");
//! assert_eq!((second.credential_index, second.model.as_str()), (0, "pro"));
//! let third = rotator.next().expect("slot");
//! assert_eq!((third.credential_index, third.model.as_str()), (1, "flash"));
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{CredentialPool, ModelPool, SecretString};

/// Position of the rotation cursor inside the combination space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationCursor {
    pub credential_index: usize,
    pub model_index: usize,
}

/// One credential/model combination handed to a single attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationSlot {
    pub credential: SecretString,
    pub credential_index: usize,
    pub model: String,
    pub model_index: usize,
}

impl RotationSlot {
    pub fn cursor(&self) -> RotationCursor {
        RotationCursor {
            credential_index: self.credential_index,
            model_index: self.model_index,
        }
    }
}

#[derive(Debug)]
pub struct Rotator {
    credentials: CredentialPool,
    models: ModelPool,
    // Flattened cursor: credential_index * models.len() + model_index.
    position: AtomicUsize,
}

impl Rotator {
    pub fn new(credentials: CredentialPool, models: ModelPool) -> Self {
        Self {
            credentials,
            models,
            position: AtomicUsize::new(0),
        }
    }

    pub fn credentials(&self) -> &CredentialPool {
        &self.credentials
    }

    pub fn models(&self) -> &ModelPool {
        &self.models
    }

    /// Number of distinct credential/model pairs.
    pub fn combinations(&self) -> usize {
        self.credentials.len() * self.models.len()
    }

    pub fn cursor(&self) -> RotationCursor {
        let position = self.position.load(Ordering::SeqCst);
        self.cursor_at(position)
    }

    /// Returns the current combination and advances the cursor atomically.
    ///
    /// `None` only when the credential pool is empty.
    pub fn next(&self) -> Option<RotationSlot> {
        let total = self.combinations();
        if total == 0 {
            return None;
        }

        let position = match self
            .position
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some((current + 1) % total)
            }) {
            Ok(previous) | Err(previous) => previous % total,
        };

        let cursor = self.cursor_at(position);
        let credential = self.credentials.get(cursor.credential_index)?.clone();
        let model = self.models.get(cursor.model_index)?.to_string();

        Some(RotationSlot {
            credential,
            credential_index: cursor.credential_index,
            model,
            model_index: cursor.model_index,
        })
    }

    fn cursor_at(&self, position: usize) -> RotationCursor {
        let models = self.models.len().max(1);
        let credentials = self.credentials.len().max(1);

        RotationCursor {
            credential_index: (position / models) % credentials,
            model_index: position % models,
        }
    }
}
