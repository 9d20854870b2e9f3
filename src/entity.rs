use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Value stored under `{key}` could not be decoded: {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },
    #[error("Value for `{key}` could not be encoded: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

/// System operator record accumulating transfer fees. Lives under the
/// well-known `owner` key, exactly one per ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    pub quantity: Decimal,
}

/// Bank aggregate: the bank record together with its embedded accounts,
/// always read and rewritten as one unit under the bank-code key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub bank_code: String,
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_number: String,
    pub owner_id: String,
    pub bank_code: String,
    pub balance: Decimal,
}

/// Replay-protection record, written once per processed transaction id and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub tx_id: String,
    pub from_account: String,
    pub to_account: String,
    pub quantity: Decimal,
    pub fee: Decimal,
}

impl Bank {
    pub fn empty(bank_code: impl Into<String>) -> Self {
        Self {
            bank_code: bank_code.into(),
            accounts: Vec::new(),
        }
    }

    pub fn find_account(&self, account_number: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.account_number == account_number)
    }

    /// Replaces the entry with the same account number in place, keeping
    /// the sequence order. Returns false if no entry matches.
    pub fn replace_account(&mut self, account: &Account) -> bool {
        match self
            .accounts
            .iter_mut()
            .find(|saved| saved.account_number == account.account_number)
        {
            Some(saved) => {
                *saved = account.clone();
                true
            }
            None => false,
        }
    }
}

/// First 3 characters of an account number name its bank. None when the
/// account number is too short to carry a bank code.
pub fn bank_code_of(account_number: &str) -> Option<&str> {
    account_number.get(..3)
}

pub fn encode<T: Serialize>(key: &str, value: &T) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(value).map_err(|source| CodecError::Encode {
        key: key.to_string(),
        source,
    })
}

pub fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, CodecError> {
    serde_json::from_slice(bytes).map_err(|source| CodecError::Decode {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::{FromPrimitive, Zero};

    use super::*;

    fn account(number: &str, balance: u32) -> Account {
        Account {
            account_number: number.to_string(),
            owner_id: format!("user{number}"),
            bank_code: number[..3].to_string(),
            balance: Decimal::from_u32(balance).unwrap(),
        }
    }

    #[test]
    fn entities_survive_a_codec_round_trip() {
        let owner = Owner {
            id: "owner".to_string(),
            quantity: Decimal::zero(),
        };
        let bank = Bank {
            bank_code: "001".to_string(),
            accounts: vec![account("0011001", 100), account("0011002", 500)],
        };
        let transfer = Transfer {
            tx_id: "tx1".to_string(),
            from_account: "0011002".to_string(),
            to_account: "0011001".to_string(),
            quantity: Decimal::from_u32(50).unwrap(),
            fee: Decimal::from_u32(2).unwrap(),
        };

        let decoded: Owner = decode("owner", &encode("owner", &owner).unwrap()).unwrap();
        assert_eq!(decoded, owner);
        let decoded: Bank = decode("001", &encode("001", &bank).unwrap()).unwrap();
        assert_eq!(decoded, bank);
        let decoded: Account =
            decode("001", &encode("001", &bank.accounts[0]).unwrap()).unwrap();
        assert_eq!(decoded, bank.accounts[0]);
        let decoded: Transfer =
            decode("Transfertx1", &encode("Transfertx1", &transfer).unwrap()).unwrap();
        assert_eq!(decoded, transfer);
    }

    #[test]
    fn decode_of_garbage_names_the_key() {
        let err = decode::<Owner>("owner", b"not json").unwrap_err();
        assert!(matches!(err, CodecError::Decode { key, .. } if key == "owner"));
    }

    #[test]
    fn replace_account_keeps_order() {
        let mut bank = Bank {
            bank_code: "001".to_string(),
            accounts: vec![account("0011001", 100), account("0011002", 500)],
        };
        let updated = Account {
            balance: Decimal::from_u32(42).unwrap(),
            ..account("0011001", 0)
        };
        assert!(bank.replace_account(&updated));
        assert_eq!(bank.accounts[0].balance, Decimal::from_u32(42).unwrap());
        assert_eq!(bank.accounts[1].account_number, "0011002");

        assert!(!bank.replace_account(&account("0019999", 1)));
        assert_eq!(bank.accounts.len(), 2);
    }

    #[test]
    fn bank_code_derivation() {
        assert_eq!(bank_code_of("0011001"), Some("001"));
        assert_eq!(bank_code_of("00"), None);
    }
}
