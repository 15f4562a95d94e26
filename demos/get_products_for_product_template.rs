//! # Products for a Product Template
//!
//! This demo pages through every product created from one product template:
//! - Building a statement with a filter, ordering and a bind variable
//! - Running a paging session through the AdPager coordinator
//! - Printing each product with its position in the result set
//!
//! An in-memory product service stands in for the remote one. Pass a
//! template id as the first argument (default 42); set `ADPAGER_CONFIG` to
//! a TOML file to override the paging defaults.

use adpager::prelude::*;
use std::sync::Arc;

const DEFAULT_PRODUCT_TEMPLATE_ID: i64 = 42;

fn sample_products() -> Vec<Product> {
    (1..=1_200)
        .map(|id| {
            let template = if id % 4 == 0 { 7 } else { DEFAULT_PRODUCT_TEMPLATE_ID };
            Product::new(id, format!("Product #{}", id), Some(template))
        })
        .collect()
}

fn product_service() -> MemoryService<Product> {
    MemoryService::new(sample_products()).with_matcher(|product, statement| {
        match statement.value("productTemplateId") {
            Some(BindValue::Number(template)) => product.product_template_id == Some(*template),
            _ => false,
        }
    })
}

fn paging_config() -> PagingConfig {
    match AppConfig::load() {
        Ok(config) => config.paging,
        Err(e) => {
            tracing::info!("using default paging settings: {}", e);
            PagingConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let product_template_id = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<i64>()?,
        None => DEFAULT_PRODUCT_TEMPLATE_ID,
    };

    let mut pager = AdPager::new(paging_config())?;
    pager.register_service::<Product>("ProductService".to_string(), Arc::new(product_service()))?;

    let statement = StatementBuilder::new()
        .where_clause("productTemplateId = :productTemplateId")
        .order_by("id ASC")
        .with_bind_variable_value("productTemplateId", product_template_id);

    let summary = pager
        .session::<Product>("ProductService", statement)?
        .for_each_item(|index, product| {
            println!(
                "{}) Product with ID {} and name '{}' was found.",
                index, product.id, product.name
            );
        })
        .await?;

    println!("Number of results found: {}", summary.total_result_set_size);
    Ok(())
}
