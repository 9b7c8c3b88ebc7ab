//! Company directory subcommands. No login needed; closed to employers.

use std::io::{self, Write};

use careerportal_core::Route;
use careerportal_core::api::CompanyFilters;

use crate::fmt::{write_company_detail, write_company_table};
use crate::view::ViewContext;

/// Companies subcommand actions.
#[derive(clap::Subcommand, Debug)]
pub enum CompanyAction {
    /// List companies.
    List {
        /// Filter by company name.
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        industry: Option<String>,
        /// Only companies founded after this year.
        #[arg(short, long)]
        founded_after: Option<i32>,
    },
    /// Show one company.
    Show {
        /// Company ID.
        id: i64,
    },
}

/// Execute a companies subcommand.
pub async fn run(action: CompanyAction, ctx: &ViewContext) -> anyhow::Result<()> {
    ctx.enter(Route::Companies)?;
    let mut out = io::stdout();
    match action {
        CompanyAction::List {
            name,
            industry,
            founded_after,
        } => {
            let filters = CompanyFilters {
                company_name: name,
                industry,
                founded_after,
            };
            let companies = ctx.api.list_companies(&filters).await?;
            if companies.is_empty() {
                writeln!(out, "No companies found.")?;
            } else {
                write_company_table(&mut out, &companies)?;
            }
        }
        CompanyAction::Show { id } => {
            let company = ctx.api.get_company(id).await?;
            write_company_detail(&mut out, &company)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Test wrapper to parse CLI arguments.
    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        action: CompanyAction,
    }

    #[test]
    fn parse_list_filters() {
        let cli = TestCli::parse_from(["test", "list", "--industry", "Finance", "-f", "2010"]);
        match cli.action {
            CompanyAction::List {
                name,
                industry,
                founded_after,
            } => {
                assert!(name.is_none());
                assert_eq!(industry.as_deref(), Some("Finance"));
                assert_eq!(founded_after, Some(2010));
            }
            other => panic!("Expected List, got {other:?}"),
        }
    }

    #[test]
    fn founded_after_must_be_a_year() {
        assert!(TestCli::try_parse_from(["test", "list", "--founded-after", "soon"]).is_err());
    }
}
