use rust_decimal::Decimal;
use tracing::info;

use crate::{
    command::TransferRequest,
    entity::{self, Transfer},
    store::{StateStore, transfer_key},
};

use super::{Ledger, LedgerError};

impl<S: StateStore> Ledger<S> {
    /// Moves `quantity` between two accounts and credits the owner with the
    /// fee, `quantity * fee / 100`. The sender is debited quantity plus fee
    /// and must afford both. Each transaction id is applied at most once;
    /// a replay fails before any state is touched.
    ///
    /// Writes happen only after every check has passed, so a failing
    /// invocation leaves the ledger exactly as it found it.
    pub fn transfer(&mut self, request: TransferRequest) -> Result<(), LedgerError> {
        let marker_key = transfer_key(&request.tx_id);
        if self.store.get(&marker_key)?.is_some() {
            return Err(LedgerError::AlreadyProcessed {
                tx_id: request.tx_id,
            });
        }

        let mut owner = self.load_owner()?;
        // each endpoint is resolved by its own identifier
        let mut from_account = self.get_account(&request.from_account)?;
        let mut to_account = self.get_account(&request.to_account)?;

        // one fee amount, debited from the sender and credited to the owner
        let fee_amount = request.quantity * request.fee / Decimal::ONE_HUNDRED;
        let required = request.quantity + fee_amount;
        if from_account.balance < required {
            return Err(LedgerError::InsufficientBalance {
                account_number: from_account.account_number,
                available: from_account.balance,
                required,
            });
        }

        from_account.balance -= required;
        to_account.balance += request.quantity;
        owner.quantity += fee_amount;

        self.update_accounts(&from_account, &to_account)?;
        self.put_owner(&owner)?;

        let record = Transfer {
            tx_id: request.tx_id,
            from_account: request.from_account,
            to_account: request.to_account,
            quantity: request.quantity,
            fee: request.fee,
        };
        let bytes = entity::encode(&marker_key, &record)?;
        self.store.put(&marker_key, bytes)?;

        info!(
            tx_id = %record.tx_id,
            from_account = %record.from_account,
            to_account = %record.to_account,
            quantity = %record.quantity,
            fee_amount = %fee_amount,
            "transfer committed"
        );
        Ok(())
    }
}
