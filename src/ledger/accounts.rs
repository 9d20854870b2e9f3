use tracing::debug;

use crate::{
    entity::{Account, bank_code_of},
    store::StateStore,
};

use super::{Ledger, LedgerError};

impl<S: StateStore> Ledger<S> {
    /// Registers an account inside its bank aggregate, creating the bank on
    /// first use of its code. Insertion order of the sequence is preserved.
    pub fn create_account(&mut self, account: Account) -> Result<(), LedgerError> {
        let mut bank = self.load_or_create_bank(&account.bank_code, true)?;
        if bank.find_account(&account.account_number).is_some() {
            return Err(LedgerError::AccountAlreadyExists {
                account_number: account.account_number,
            });
        }
        debug!(
            account_number = %account.account_number,
            bank_code = %account.bank_code,
            "account registered"
        );
        bank.accounts.push(account);
        self.put_bank(&bank)
    }

    /// Locates an account through its bank, derived from the number's first
    /// 3 characters.
    pub fn get_account(&self, account_number: &str) -> Result<Account, LedgerError> {
        let bank_code = bank_code_of(account_number).ok_or_else(|| {
            LedgerError::AccountNotFound {
                account_number: account_number.to_string(),
            }
        })?;
        let bank = self
            .load_bank(bank_code)?
            .ok_or_else(|| LedgerError::BankNotFound {
                bank_code: bank_code.to_string(),
            })?;
        bank.find_account(account_number)
            .cloned()
            .ok_or_else(|| LedgerError::AccountNotFound {
                account_number: account_number.to_string(),
            })
    }

    /// Writes back a pair of modified accounts. When both live in the same
    /// bank the aggregate is loaded and rewritten once with both entries
    /// replaced in place; otherwise each bank goes through its own
    /// load-modify-write cycle.
    pub(super) fn update_accounts(
        &mut self,
        first: &Account,
        second: &Account,
    ) -> Result<(), LedgerError> {
        if first.bank_code == second.bank_code {
            let mut bank = self.load_or_create_bank(&first.bank_code, false)?;
            for account in [first, second] {
                if !bank.replace_account(account) {
                    return Err(LedgerError::AccountNotFound {
                        account_number: account.account_number.clone(),
                    });
                }
            }
            self.put_bank(&bank)
        } else {
            self.update_single(first)?;
            self.update_single(second)
        }
    }

    fn update_single(&mut self, account: &Account) -> Result<(), LedgerError> {
        let mut bank = self.load_or_create_bank(&account.bank_code, false)?;
        if !bank.replace_account(account) {
            return Err(LedgerError::AccountNotFound {
                account_number: account.account_number.clone(),
            });
        }
        self.put_bank(&bank)
    }
}
