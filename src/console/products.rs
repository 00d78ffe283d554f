//! Product pages of the management shell.

use tabled::Table;

use backoffice_core::error::AppError;
use backoffice_entity::{NewProduct, ProductPatch};
use backoffice_state::{ProductRow, Route};

use super::prompt::{self, changed};
use super::{Console, Nav, pick, print_pager};

const LIST_ACTIONS: [&str; 5] = [
    "Next page",
    "Previous page",
    "Create product",
    "Edit product",
    "Delete product",
];

pub async fn list(console: &mut Console) -> Result<Nav, AppError> {
    if console.stale {
        console.products.fetch().await;
        console.stale = false;
    }

    let view = console.products.view();
    let page = view.page().page;
    let total_pages = view.total_pages();
    let rows = ProductRow::numbered(view.page().first_row_number(), view.rows());
    let labels: Vec<String> = view
        .rows()
        .iter()
        .map(|p| format!("{} ({} × {})", p.name, p.quantity, p.price))
        .collect();
    let ids: Vec<String> = view.rows().iter().map(|p| p.id.clone()).collect();

    println!("Products");
    if rows.is_empty() {
        println!("No products.");
    } else {
        println!("{}", Table::new(&rows));
    }
    print_pager(page, total_pages, view.total());

    let mut nav = Nav::Stay;
    let Some(action) = console.choose(&LIST_ACTIONS, &mut nav)? else {
        return Ok(nav);
    };

    match action {
        0 if page < total_pages => {
            console.products.go_to(page + 1).await;
        }
        1 if page > 1 => {
            console.products.go_to(page - 1).await;
        }
        2 => return Ok(Nav::Go(Route::ProductCreate)),
        3 => {
            if let Some(id) = pick(&labels, &ids)? {
                return Ok(Nav::Go(Route::ProductUpdate(id)));
            }
        }
        4 => {
            if let Some(id) = pick(&labels, &ids)? {
                if prompt::confirm(&format!("Delete product '{id}'?"))? {
                    console.products.delete(&id).await;
                }
            }
        }
        _ => {}
    }
    Ok(Nav::Stay)
}

pub async fn create(console: &mut Console) -> Result<Nav, AppError> {
    println!("New product");
    let form = NewProduct {
        name: prompt::text("Name", "")?,
        description: prompt::text("Description", "")?,
        price: prompt::value("Price", 0.0)?,
        quantity: prompt::value("Quantity", 0)?,
    };

    if console.products.create(&form).await {
        return Ok(Nav::Go(Route::Products));
    }
    retry_or_back()
}

pub async fn update(console: &mut Console, id: &str) -> Result<Nav, AppError> {
    let Some(product) = console.products.load(id).await else {
        return Ok(Nav::Go(Route::Products));
    };

    println!("Edit product {}", product.id);
    let name = prompt::text("Name", &product.name)?;
    let description = prompt::text("Description", &product.description)?;
    let price: f64 = prompt::value("Price", product.price)?;
    let quantity: i64 = prompt::value("Quantity", product.quantity)?;

    let patch = ProductPatch {
        name: changed(&product.name, name),
        description: changed(&product.description, description),
        price: (price != product.price).then_some(price),
        quantity: (quantity != product.quantity).then_some(quantity),
    };
    if patch.is_empty() {
        println!("Nothing changed.");
        return Ok(Nav::Go(Route::Products));
    }

    if console.products.update(&product.id, &patch).await {
        return Ok(Nav::Go(Route::Products));
    }
    retry_or_back()
}

fn retry_or_back() -> Result<Nav, AppError> {
    if prompt::confirm("Try again?")? {
        Ok(Nav::Stay)
    } else {
        Ok(Nav::Go(Route::Products))
    }
}
