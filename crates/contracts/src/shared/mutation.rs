//! Explicit state of optimistic per-row mutations.
//!
//! Every CRUD action on a list row is a local optimistic patch that awaits
//! server confirmation. Instead of ad hoc splicing, the row keeps a rollback
//! snapshot until the server answers: confirm drops the snapshot, a failed
//! round-trip restores it.

use serde::{Deserialize, Serialize};

/// Строка списка с оптимистичным локальным изменением
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimisticRow<T: Clone> {
    value: T,
    rollback: Option<T>,
}

impl<T: Clone> OptimisticRow<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            rollback: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Есть ли неподтверждённый сервером патч
    pub fn is_pending(&self) -> bool {
        self.rollback.is_some()
    }

    /// Применить локальный патч. Снимок для отката делается один раз —
    /// повторные патчи до подтверждения откатываются к исходному состоянию.
    pub fn apply_patch(&mut self, patch: impl FnOnce(&mut T)) {
        if self.rollback.is_none() {
            self.rollback = Some(self.value.clone());
        }
        patch(&mut self.value);
    }

    /// Сервер подтвердил изменение: снимок больше не нужен
    pub fn confirm(&mut self) {
        self.rollback = None;
    }

    /// Сервер подтвердил изменение и вернул каноническое состояние строки
    pub fn confirm_with(&mut self, value: T) {
        self.value = value;
        self.rollback = None;
    }

    /// Откат к состоянию до первого неподтверждённого патча
    pub fn roll_back(&mut self) {
        if let Some(snapshot) = self.rollback.take() {
            self.value = snapshot;
        }
    }
}
