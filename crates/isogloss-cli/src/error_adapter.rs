//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use isogloss::IsoglossError;

use crate::CliError;

/// Adapter wrapping a [`CliError`] to implement [`MietteDiagnostic`].
pub struct Reportable<'a> {
    err: &'a CliError,
}

/// Wrap an error for rendering with miette's report handler.
pub fn to_reportable(err: &CliError) -> Reportable<'_> {
    Reportable { err }
}

impl fmt::Debug for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reportable").field("err", &self.err).finish()
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for Reportable<'_> {}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            CliError::Io(_) => "isogloss::io",
            CliError::EmptyInput(_) => "isogloss::empty_input",
            CliError::OversizedInput(_) => "isogloss::oversized_input",
            CliError::Graph(IsoglossError::Io(_)) => "isogloss::io",
            CliError::Graph(IsoglossError::Parse(_)) => "isogloss::parse",
            CliError::Serialize(_) => "isogloss::serialize",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err {
            CliError::EmptyInput(_) => "provide a non-empty graph export",
            CliError::OversizedInput(_) => "exports are capped at 500 KB",
            CliError::Graph(IsoglossError::Parse(_)) => {
                "check that the file is a graph export: (graph|digraph) NAME { ... }"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}
