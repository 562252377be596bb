use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use crate::{
    dto::sales::{CreateSaleRequest, SaleItemRequest, SaleList, SaleWithItems},
    entity::{
        products::{Column as ProdCol, Entity as Products},
        sale_items::{ActiveModel as SaleItemActive, Column as SaleItemCol, Entity as SaleItems},
        sales::{ActiveModel as SaleActive, Column as SaleCol, Entity as Sales},
    },
    error::{AppError, AppResult},
    models::{Sale, SaleItem},
    pricing::{self, LineItem, SaleTotals},
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Records a sale header and all of its lines in a single transaction.
///
/// Totals are computed from the request lines before anything is written.
/// The first statement inside the transaction is the header insert, so the
/// transaction takes SQLite's write lock up front and concurrent checkouts
/// queue on the busy timeout rather than failing a read-to-write upgrade.
/// Any failure after the transaction opens rolls back both the header and
/// the lines, so a sale is either stored complete or not at all.
pub async fn create_sale(
    state: &AppState,
    payload: CreateSaleRequest,
) -> AppResult<ApiResponse<SaleWithItems>> {
    if payload.items.is_empty() {
        return Err(AppError::Validation(
            "sale must contain at least one item".into(),
        ));
    }

    let lines: Vec<LineItem> = payload
        .items
        .iter()
        .map(|item| LineItem {
            quantity: item.quantity,
            unit_price: item.unit_price,
        })
        .collect();
    let totals = pricing::calculate_totals(&lines, payload.discount_amount)?;

    let txn = state.orm.begin().await?;
    let data = match write_sale(&txn, &payload, &lines, &totals).await {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!(error = %err, "sale write failed, rolling back");
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!(error = %rollback_err, "sale rollback failed");
            }
            return Err(err);
        }
    };
    txn.commit().await?;

    tracing::info!(
        sale_id = data.sale.id,
        items = data.items.len(),
        subtotal = totals.subtotal,
        total_amount = totals.total_amount,
        "sale recorded"
    );

    Ok(ApiResponse::success(
        "Sale recorded",
        data,
        Some(Meta::empty()),
    ))
}

async fn write_sale(
    txn: &DatabaseTransaction,
    payload: &CreateSaleRequest,
    lines: &[LineItem],
    totals: &SaleTotals,
) -> AppResult<SaleWithItems> {
    let customer_name = payload
        .customer_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    let sale = SaleActive {
        total_amount: Set(totals.total_amount),
        discount_amount: Set(pricing::round_cents(payload.discount_amount)),
        vat_amount: Set(totals.vat_amount),
        payment_method: Set(payload.payment_method.unwrap_or_default()),
        sale_date: Set(Utc::now()),
        customer_name: Set(customer_name),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    // The header insert holds the write lock, so this read cannot go stale.
    ensure_products_exist(txn, &payload.items).await?;

    let mut items: Vec<SaleItem> = Vec::with_capacity(lines.len());
    for (line, request) in lines.iter().zip(&payload.items) {
        let item = SaleItemActive {
            sale_id: Set(sale.id),
            product_id: Set(request.product_id),
            quantity: Set(line.quantity),
            unit_price: Set(line.unit_price),
            total_price: Set(pricing::line_total(line)),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        items.push(SaleItem::from(item));
    }

    Ok(SaleWithItems {
        sale: Sale::from(sale),
        subtotal: totals.subtotal,
        items,
    })
}

async fn ensure_products_exist(
    txn: &DatabaseTransaction,
    items: &[SaleItemRequest],
) -> AppResult<()> {
    let wanted: BTreeSet<i32> = items.iter().map(|item| item.product_id).collect();

    let found: BTreeSet<i32> = Products::find()
        .select_only()
        .column(ProdCol::Id)
        .filter(ProdCol::Id.is_in(wanted.iter().copied()))
        .into_tuple::<i32>()
        .all(txn)
        .await?
        .into_iter()
        .collect();

    match wanted.difference(&found).next() {
        Some(missing) => Err(AppError::NotFound(format!("Product {missing}"))),
        None => Ok(()),
    }
}

pub async fn list_sales(state: &AppState) -> AppResult<ApiResponse<SaleList>> {
    let items: Vec<Sale> = Sales::find()
        .order_by_asc(SaleCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Sale::from)
        .collect();

    let meta = Meta::total(items.len() as u64);
    Ok(ApiResponse::success("Sales", SaleList { items }, Some(meta)))
}

pub async fn get_sale(state: &AppState, id: i32) -> AppResult<ApiResponse<SaleWithItems>> {
    let sale = Sales::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Sale {id}")))?;

    let items: Vec<SaleItem> = SaleItems::find()
        .filter(SaleItemCol::SaleId.eq(sale.id))
        .order_by_asc(SaleItemCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(SaleItem::from)
        .collect();

    let subtotal = pricing::round_cents(items.iter().map(|item| item.total_price).sum());

    Ok(ApiResponse::success(
        "Sale",
        SaleWithItems {
            sale: Sale::from(sale),
            subtotal,
            items,
        },
        Some(Meta::empty()),
    ))
}
