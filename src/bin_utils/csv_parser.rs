use std::io::Read;

use csv::{StringRecordsIntoIter, Trim};

/// One row of the invocation stream: the function name followed by its
/// string arguments. Arity varies per function, so rows are read untyped.
#[derive(Debug)]
pub struct Invocation {
    pub function: String,
    pub args: Vec<String>,
}

/// Parses an invocation list in CSV format
///
/// # Panics
///
/// If a row cannot be read
pub struct CsvInvocationParser<R> {
    iter: StringRecordsIntoIter<R>,
}

impl<R> CsvInvocationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .has_headers(false)
            .from_reader(source);

        Self {
            iter: reader.into_records(),
        }
    }
}

impl<R> Iterator for CsvInvocationParser<R>
where
    R: Read,
{
    type Item = (u64, Invocation);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| {
            let record = row.unwrap();
            let mut fields = record.iter();
            let function = fields.next().unwrap_or_default().to_string();
            let args = fields.map(ToString::to_string).collect();
            (curr_line, Invocation { function, args })
        })
    }
}
