//! Account management CLI commands.

use clap::{Args, Subcommand};

use backoffice_core::error::AppError;
use backoffice_core::types::{PageRequest, SortDirection, SortField};
use backoffice_entity::{AccountPatch, AccountStatus, NewAccount};
use backoffice_state::{AccountRow, AppContext, Operation};

use super::explain;
use crate::output::{self, OutputFormat};

/// Arguments for account commands
#[derive(Debug, Args)]
pub struct AccountArgs {
    /// Account subcommand
    #[command(subcommand)]
    pub command: AccountCommand,
}

/// Account subcommands
#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// List accounts one page at a time
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u64,
        /// Rows per page (defaults to api.page_size)
        #[arg(short, long)]
        size: Option<u64>,
        /// Field to sort by
        #[arg(long, default_value = "id")]
        sort_by: String,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Show one account
    Show {
        /// Account ID
        id: String,
    },
    /// Create an account
    Create {
        /// Username (will prompt if not provided)
        #[arg(short, long)]
        username: Option<String>,
        /// Email (will prompt if not provided)
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
        /// Role ID: 1 Admin, 2 User, 3 Editor, 4 Manager
        #[arg(short, long, default_value = "2")]
        role: String,
        /// Create the account disabled
        #[arg(long)]
        inactive: bool,
    },
    /// Update an account
    Update {
        /// Account ID
        id: String,
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
        #[arg(short, long)]
        role: Option<String>,
        /// active or inactive
        #[arg(long)]
        status: Option<String>,
    },
    /// Set an account's status
    Status {
        /// Account ID
        id: String,
        /// active or inactive
        status: String,
    },
}

/// Execute account commands
pub async fn execute(
    args: &AccountArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    super::require_token(ctx)?;

    match &args.command {
        AccountCommand::List {
            page,
            size,
            sort_by,
            desc,
        } => {
            let request = PageRequest::new(*page, size.unwrap_or(ctx.config.api.page_size));
            let direction = if *desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            let data = ctx
                .accounts
                .list(request, &SortField::new(sort_by, direction))
                .await
                .map_err(|e| explain(Operation::ListAccounts, e))?;

            let rows = AccountRow::numbered(request.first_row_number(), &data.content);
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                output::print_page(
                    request.page,
                    data.total_pages(request.page_size),
                    data.total_elements,
                );
            }
        }
        AccountCommand::Show { id } => {
            let account = ctx
                .accounts
                .get(id)
                .await
                .map_err(|e| explain(Operation::ViewAccount, e))?;
            output::print_item(&AccountRow::new(1, &account), format);
        }
        AccountCommand::Create {
            username,
            email,
            password,
            role,
            inactive,
        } => {
            let form = NewAccount {
                username: super::prompt("Username", username)?,
                email: super::prompt("Email", email)?,
                password: super::prompt_password("Password", password)?,
                status: if *inactive {
                    AccountStatus::Inactive
                } else {
                    AccountStatus::Active
                },
                role_id: role.clone(),
            };
            ctx.accounts
                .create(&form)
                .await
                .map_err(|e| explain(Operation::CreateAccount, e))?;
            success(Operation::CreateAccount);
        }
        AccountCommand::Update {
            id,
            username,
            email,
            password,
            role,
            status,
        } => {
            let patch = AccountPatch {
                username: username.clone(),
                email: email.clone(),
                password: password.clone(),
                status: status
                    .as_deref()
                    .map(str::parse::<AccountStatus>)
                    .transpose()?,
                role_id: role.clone(),
            };
            if patch.is_empty() {
                return Err(AppError::validation("Nothing to update"));
            }
            ctx.accounts
                .update(id, &patch)
                .await
                .map_err(|e| explain(Operation::UpdateAccount, e))?;
            success(Operation::UpdateAccount);
        }
        AccountCommand::Status { id, status } => {
            let status: AccountStatus = status.parse()?;
            ctx.accounts
                .set_status(id, status)
                .await
                .map_err(|e| explain(Operation::UpdateAccountStatus, e))?;
            success(Operation::UpdateAccountStatus);
        }
    }

    Ok(())
}

fn success(operation: Operation) {
    if let Some(message) = operation.success_message() {
        output::print_success(message);
    }
}
