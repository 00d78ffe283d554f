//! Product management CLI commands.

use clap::{Args, Subcommand};

use backoffice_core::error::AppError;
use backoffice_core::types::{PageRequest, SortDirection, SortField};
use backoffice_entity::{NewProduct, ProductPatch};
use backoffice_state::{AppContext, Operation, ProductRow};

use super::explain;
use crate::output::{self, OutputFormat};

/// Arguments for product commands
#[derive(Debug, Args)]
pub struct ProductArgs {
    /// Product subcommand
    #[command(subcommand)]
    pub command: ProductCommand,
}

/// Product subcommands
#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// List products one page at a time
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u64,
        #[arg(short, long)]
        size: Option<u64>,
        #[arg(long, default_value = "id")]
        sort_by: String,
        #[arg(long)]
        desc: bool,
    },
    /// Show one product
    Show {
        /// Product ID
        id: String,
    },
    /// Create a product
    Create {
        /// Name (will prompt if not provided)
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long)]
        price: f64,
        #[arg(short, long, default_value_t = 0)]
        quantity: i64,
    },
    /// Update a product
    Update {
        /// Product ID
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        price: Option<f64>,
        #[arg(short, long)]
        quantity: Option<i64>,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Execute product commands
pub async fn execute(
    args: &ProductArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    super::require_token(ctx)?;

    match &args.command {
        ProductCommand::List {
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
                .products
                .list(request, &SortField::new(sort_by, direction))
                .await
                .map_err(|e| explain(Operation::ListProducts, e))?;

            let rows = ProductRow::numbered(request.first_row_number(), &data.content);
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                output::print_page(
                    request.page,
                    data.total_pages(request.page_size),
                    data.total_elements,
                );
            }
        }
        ProductCommand::Show { id } => {
            let product = ctx
                .products
                .get(id)
                .await
                .map_err(|e| explain(Operation::ViewProduct, e))?;
            output::print_item(&ProductRow::new(1, &product), format);
            if format == OutputFormat::Table && !product.description.is_empty() {
                output::print_kv("Description", &product.description);
            }
        }
        ProductCommand::Create {
            name,
            description,
            price,
            quantity,
        } => {
            let form = NewProduct {
                name: super::prompt("Name", name)?,
                description: description.clone(),
                price: *price,
                quantity: *quantity,
            };
            ctx.products
                .create(&form)
                .await
                .map_err(|e| explain(Operation::CreateProduct, e))?;
            success(Operation::CreateProduct);
        }
        ProductCommand::Update {
            id,
            name,
            description,
            price,
            quantity,
        } => {
            let patch = ProductPatch {
                name: name.clone(),
                description: description.clone(),
                price: *price,
                quantity: *quantity,
            };
            if patch.is_empty() {
                return Err(AppError::validation("Nothing to update"));
            }
            ctx.products
                .update(id, &patch)
                .await
                .map_err(|e| explain(Operation::UpdateProduct, e))?;
            success(Operation::UpdateProduct);
        }
        ProductCommand::Delete { id, yes } => {
            if !*yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete product '{id}'?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
                if !confirmed {
                    println!("Aborted.");
                    return Ok(());
                }
            }
            ctx.products
                .delete(id)
                .await
                .map_err(|e| explain(Operation::DeleteProduct, e))?;
            success(Operation::DeleteProduct);
        }
    }

    Ok(())
}

fn success(operation: Operation) {
    if let Some(message) = operation.success_message() {
        output::print_success(message);
    }
}
