//! # Cash Register Repository
//!
//! Cash-session records over the `cashRegisters` collection.
//!
//! Sessions are kept forever as drawer history; at most one of them is
//! open, and the open/close choreography that guarantees it lives in the
//! terminal layer, under the store's write lock.

use tracing::debug;

use loja_core::CashSession;

use crate::collection::Record;
use crate::error::StoreResult;
use crate::Tables;

impl Record for CashSession {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Tables {
    /// The open session, when one exists.
    pub fn current_session(&self) -> Option<&CashSession> {
        self.cash_registers.iter().find(|session| session.is_open)
    }

    /// The open session, for mutation.
    pub fn current_session_mut(&mut self) -> Option<&mut CashSession> {
        self.cash_registers
            .iter_mut()
            .find(|session| session.is_open)
    }

    /// Records a newly opened session.
    pub fn add_session(&mut self, session: CashSession) -> StoreResult<()> {
        debug!(id = %session.id, initial = %session.initial(), "Recording cash session");
        self.cash_registers.add(session)
    }

    /// Full session history, oldest first.
    #[inline]
    pub fn sessions(&self) -> &[CashSession] {
        self.cash_registers.get_all()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
