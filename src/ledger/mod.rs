use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;
use tracing::debug;

use crate::{
    command::{CommandError, LedgerCommand},
    entity::{self, CodecError, Owner},
    store::{OWNER_KEY, StateStore, StoreError},
};

mod accounts;
mod query;
mod registry;
mod transfer;

pub use query::QueryResult;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("Bank `{bank_code}` does not exist")]
    BankNotFound { bank_code: String },
    #[error("Account `{account_number}` does not exist")]
    AccountNotFound { account_number: String },
    #[error("Bank `{bank_code}` already exists")]
    BankAlreadyExists { bank_code: String },
    #[error("Account `{account_number}` already exists")]
    AccountAlreadyExists { account_number: String },
    #[error("Transaction `{tx_id}` has already been processed")]
    AlreadyProcessed { tx_id: String },
    #[error("Account `{account_number}` holds {available}, transfer requires {required}")]
    InsufficientBalance {
        account_number: String,
        available: Decimal,
        required: Decimal,
    },
    #[error("Query key `{key}` is neither `owner`, a bank code, nor an account number")]
    InvalidKeyFormat { key: String },
    #[error("Owner record is missing; the ledger was never bootstrapped")]
    OwnerMissing,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// The ledger core: banks, their embedded accounts, the fee-collecting owner
/// record and transfer replay markers, all kept consistent by hand on top of
/// a bare get/put [`StateStore`].
///
/// One instance handles one invocation at a time and caches nothing between
/// invocations; atomic commit of an invocation's writes is the hosting
/// platform's contract.
pub struct Ledger<S> {
    store: S,
}

impl<S: StateStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates the owner record on first run. Later calls leave the
    /// accumulated fee balance untouched.
    pub fn bootstrap(&mut self) -> Result<(), LedgerError> {
        if self.store.get(OWNER_KEY)?.is_none() {
            let owner = Owner {
                id: OWNER_KEY.to_string(),
                quantity: Decimal::zero(),
            };
            self.put_owner(&owner)?;
            debug!("owner record initialized");
        }
        Ok(())
    }

    /// Executes one invocation. Mutating functions return no payload;
    /// `query` returns the encoded result.
    pub fn invoke(
        &mut self,
        function: &str,
        args: &[String],
    ) -> Result<Option<Vec<u8>>, LedgerError> {
        match LedgerCommand::parse(function, args)? {
            LedgerCommand::CreateBank { bank_code } => {
                self.create_bank(&bank_code)?;
                Ok(None)
            }
            LedgerCommand::CreateAccount(account) => {
                self.create_account(account)?;
                Ok(None)
            }
            LedgerCommand::Transfer(request) => {
                self.transfer(request)?;
                Ok(None)
            }
            LedgerCommand::Query { key } => Ok(Some(self.query(&key)?.into_bytes()?)),
        }
    }

    fn load_owner(&self) -> Result<Owner, LedgerError> {
        match self.store.get(OWNER_KEY)? {
            Some(bytes) => Ok(entity::decode(OWNER_KEY, &bytes)?),
            None => Err(LedgerError::OwnerMissing),
        }
    }

    fn put_owner(&mut self, owner: &Owner) -> Result<(), LedgerError> {
        let bytes = entity::encode(OWNER_KEY, owner)?;
        self.store.put(OWNER_KEY, bytes)?;
        Ok(())
    }
}
