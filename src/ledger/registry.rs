use tracing::debug;

use crate::{
    entity::{self, Bank},
    store::StateStore,
};

use super::{Ledger, LedgerError};

impl<S: StateStore> Ledger<S> {
    /// Registers a new, empty bank under its code.
    pub fn create_bank(&mut self, bank_code: &str) -> Result<Bank, LedgerError> {
        if self.store.get(bank_code)?.is_some() {
            return Err(LedgerError::BankAlreadyExists {
                bank_code: bank_code.to_string(),
            });
        }
        let bank = Bank::empty(bank_code);
        self.put_bank(&bank)?;
        debug!(bank_code, "bank registered");
        Ok(bank)
    }

    pub(super) fn load_bank(&self, bank_code: &str) -> Result<Option<Bank>, LedgerError> {
        match self.store.get(bank_code)? {
            Some(bytes) => Ok(Some(entity::decode(bank_code, &bytes)?)),
            None => Ok(None),
        }
    }

    /// Loads the bank aggregate; a missing bank is created only when
    /// `allow_create` says so, never as a side effect of a plain read.
    pub(super) fn load_or_create_bank(
        &mut self,
        bank_code: &str,
        allow_create: bool,
    ) -> Result<Bank, LedgerError> {
        match self.load_bank(bank_code)? {
            Some(bank) => Ok(bank),
            None if allow_create => self.create_bank(bank_code),
            None => Err(LedgerError::BankNotFound {
                bank_code: bank_code.to_string(),
            }),
        }
    }

    pub(super) fn put_bank(&mut self, bank: &Bank) -> Result<(), LedgerError> {
        let bytes = entity::encode(&bank.bank_code, bank)?;
        self.store.put(&bank.bank_code, bytes)?;
        Ok(())
    }
}
