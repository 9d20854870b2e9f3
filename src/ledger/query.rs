use crate::{
    command::{ACCOUNT_NUMBER_LEN, BANK_CODE_LEN},
    entity::{self, Account, Bank, CodecError, Owner},
    store::{OWNER_KEY, StateStore},
};

use super::{Ledger, LedgerError};

/// Result of a read-only lookup. Rendering to text is left to the boundary;
/// [`QueryResult::into_bytes`] produces the opaque response payload.
#[derive(Debug)]
pub enum QueryResult {
    Owner(Owner),
    Bank(Bank),
    Account(Account),
}

impl QueryResult {
    pub fn into_bytes(self) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Owner(owner) => entity::encode(OWNER_KEY, &owner),
            Self::Bank(bank) => entity::encode(&bank.bank_code, &bank),
            Self::Account(account) => entity::encode(&account.account_number, &account),
        }
    }
}

impl<S: StateStore> Ledger<S> {
    /// Dispatches purely on the shape of the key: the literal `owner`, a
    /// 3-character bank code, or a 7-character account number.
    pub fn query(&self, key: &str) -> Result<QueryResult, LedgerError> {
        if key == OWNER_KEY {
            Ok(QueryResult::Owner(self.load_owner()?))
        } else if key.len() == BANK_CODE_LEN {
            let bank = self
                .load_bank(key)?
                .ok_or_else(|| LedgerError::BankNotFound {
                    bank_code: key.to_string(),
                })?;
            Ok(QueryResult::Bank(bank))
        } else if key.len() == ACCOUNT_NUMBER_LEN {
            Ok(QueryResult::Account(self.get_account(key)?))
        } else {
            Err(LedgerError::InvalidKeyFormat {
                key: key.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::{Decimal, prelude::FromPrimitive};

    use crate::store::in_memory_store::InMemoryStateStore;

    use super::*;

    fn account(number: &str, balance: u32) -> Account {
        Account {
            account_number: number.to_string(),
            owner_id: format!("user{number}"),
            bank_code: number[..3].to_string(),
            balance: Decimal::from_u32(balance).unwrap(),
        }
    }

    fn ledger() -> Ledger<InMemoryStateStore> {
        let mut ledger = Ledger::new(InMemoryStateStore::default());
        ledger.bootstrap().unwrap();
        ledger.create_account(account("0011001", 100)).unwrap();
        ledger.create_account(account("0011002", 500)).unwrap();
        ledger
    }

    #[test]
    fn owner_key_returns_the_accumulator() {
        let result = ledger().query("owner").unwrap();
        let QueryResult::Owner(owner) = result else {
            panic!("expected Owner, got {result:?}");
        };
        assert_eq!(owner.id, "owner");
        assert_eq!(owner.quantity, Decimal::ZERO);
    }

    #[test]
    fn bank_code_returns_accounts_in_creation_order() {
        let result = ledger().query("001").unwrap();
        let QueryResult::Bank(bank) = result else {
            panic!("expected Bank, got {result:?}");
        };
        let numbers: Vec<&str> = bank
            .accounts
            .iter()
            .map(|a| a.account_number.as_str())
            .collect();
        assert_eq!(numbers, ["0011001", "0011002"]);
    }

    #[test]
    fn account_number_returns_the_single_account() {
        let result = ledger().query("0011002").unwrap();
        let QueryResult::Account(found) = result else {
            panic!("expected Account, got {result:?}");
        };
        assert_eq!(found.balance, Decimal::from_u32(500).unwrap());

        let err = ledger().query("0011999").unwrap_err();
        assert!(matches!(
            err,
            LedgerError::AccountNotFound { account_number } if account_number == "0011999"
        ));
    }

    #[test]
    fn other_shapes_are_rejected() {
        let err = ledger().query("00110").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidKeyFormat { key } if key == "00110"));
    }
}
