use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::entity::Account;

pub const BANK_CODE_LEN: usize = 3;
pub const ACCOUNT_NUMBER_LEN: usize = 7;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown function `{function}`")]
    UnknownFunction { function: String },
    #[error("`{function}` expects {expected} arguments, got {actual}")]
    WrongArgumentCount {
        function: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{field} must not be empty")]
    EmptyArgument { field: &'static str },
    #[error("{field} `{value}` is not a number")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
    #[error("Bank code `{bank_code}` must be 3 characters")]
    BadBankCodeLength { bank_code: String },
    #[error("Account number `{account_number}` must be 7 characters")]
    BadAccountNumberLength { account_number: String },
    #[error("Account number `{account_number}` does not start with bank code `{bank_code}`")]
    BankCodeMismatch {
        account_number: String,
        bank_code: String,
    },
    #[error("Transfer source and destination are the same account `{account_number}`")]
    SameAccount { account_number: String },
}

#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub tx_id: String,
    pub from_account: String,
    pub to_account: String,
    pub quantity: Decimal,
    pub fee: Decimal,
}

/// One ledger invocation, decoded and validated from the function name plus
/// string arguments handed over by the hosting platform.
#[derive(Debug, Clone)]
pub enum LedgerCommand {
    CreateBank { bank_code: String },
    CreateAccount(Account),
    Transfer(TransferRequest),
    Query { key: String },
}

impl LedgerCommand {
    pub fn parse(function: &str, args: &[String]) -> Result<Self, CommandError> {
        match function {
            "createBank" => Self::parse_create_bank(args),
            "createAccount" => Self::parse_create_account(args),
            "transfer" => Self::parse_transfer(args),
            "query" => Self::parse_query(args),
            other => Err(CommandError::UnknownFunction {
                function: other.to_string(),
            }),
        }
    }

    fn parse_create_bank(args: &[String]) -> Result<Self, CommandError> {
        expect_args("createBank", args, 1)?;
        non_empty("Bank code", &args[0])?;
        bank_code(&args[0])?;
        Ok(Self::CreateBank {
            bank_code: args[0].clone(),
        })
    }

    fn parse_create_account(args: &[String]) -> Result<Self, CommandError> {
        expect_args("createAccount", args, 4)?;
        non_empty("Account number", &args[0])?;
        non_empty("Owner id", &args[1])?;
        non_empty("Bank code", &args[2])?;
        non_empty("Balance", &args[3])?;
        let balance = amount("Balance", &args[3])?;
        if args[0].len() != ACCOUNT_NUMBER_LEN {
            return Err(CommandError::BadAccountNumberLength {
                account_number: args[0].clone(),
            });
        }
        bank_code(&args[2])?;
        // account number = bank code + 4-digit suffix
        if args[0].get(..BANK_CODE_LEN) != Some(args[2].as_str()) {
            return Err(CommandError::BankCodeMismatch {
                account_number: args[0].clone(),
                bank_code: args[2].clone(),
            });
        }
        Ok(Self::CreateAccount(Account {
            account_number: args[0].clone(),
            owner_id: args[1].clone(),
            bank_code: args[2].clone(),
            balance,
        }))
    }

    fn parse_transfer(args: &[String]) -> Result<Self, CommandError> {
        expect_args("transfer", args, 5)?;
        non_empty("Transaction id", &args[0])?;
        non_empty("Source account", &args[1])?;
        non_empty("Destination account", &args[2])?;
        let quantity = amount("Quantity", &args[3])?;
        let fee = amount("Fee", &args[4])?;
        if args[1] == args[2] {
            return Err(CommandError::SameAccount {
                account_number: args[1].clone(),
            });
        }
        Ok(Self::Transfer(TransferRequest {
            tx_id: args[0].clone(),
            from_account: args[1].clone(),
            to_account: args[2].clone(),
            quantity,
            fee,
        }))
    }

    fn parse_query(args: &[String]) -> Result<Self, CommandError> {
        expect_args("query", args, 1)?;
        non_empty("Query key", &args[0])?;
        Ok(Self::Query {
            key: args[0].clone(),
        })
    }
}

fn expect_args(
    function: &'static str,
    args: &[String],
    expected: usize,
) -> Result<(), CommandError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CommandError::WrongArgumentCount {
            function,
            expected,
            actual: args.len(),
        })
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), CommandError> {
    if value.is_empty() {
        Err(CommandError::EmptyArgument { field })
    } else {
        Ok(())
    }
}

fn bank_code(value: &str) -> Result<(), CommandError> {
    if value.len() == BANK_CODE_LEN {
        Ok(())
    } else {
        Err(CommandError::BadBankCodeLength {
            bank_code: value.to_string(),
        })
    }
}

fn amount(field: &'static str, value: &str) -> Result<Decimal, CommandError> {
    let parsed: Decimal = value.parse().map_err(|_| CommandError::NotANumber {
        field,
        value: value.to_string(),
    })?;
    if parsed < Decimal::zero() {
        return Err(CommandError::NegativeAmount {
            field,
            value: parsed,
        });
    }
    Ok(parsed)
}
