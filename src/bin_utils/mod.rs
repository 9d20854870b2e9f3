//! Minimal in-repo stand-in for the platform that dispatches invocations to
//! the ledger core: reads them from a CSV stream, feeds them through
//! [`Ledger::invoke`], writes query payloads line-wise to the output. Kept
//! inside the crate so the integration test can drive the whole stack.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use csv_parser::CsvInvocationParser;

use crate::{
    ledger::{Ledger, LedgerError},
    store::in_memory_store::InMemoryStateStore,
};

pub mod csv_parser;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, LedgerError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvInvocationParser::new(self.input);

        let mut ledger = Ledger::new(InMemoryStateStore::default());
        ledger.bootstrap().context("Ledger bootstrap failed")?;

        for (line, invocation) in parser {
            match ledger.invoke(&invocation.function, &invocation.args) {
                Ok(Some(payload)) => {
                    self.output
                        .write_all(&payload)
                        .and_then(|()| writeln!(self.output))
                        .context("Failed to write query payload")?;
                }
                Ok(None) => {}
                Err(err) => (self.error_printer)(line, err),
            }
        }
        Ok(())
    }
}
