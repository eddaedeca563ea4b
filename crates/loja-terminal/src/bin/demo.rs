//! # Demo Driver
//!
//! Seeds a store with a small catalog and one operator, then drives a full
//! shift: open the drawer, ring up a sale, close the drawer, print the
//! month's figures.
//!
//! ## Usage
//! ```bash
//! cargo run -p loja-terminal --bin demo
//!
//! # With verbose logging
//! RUST_LOG=debug cargo run -p loja-terminal --bin demo
//! ```

use chrono::{Datelike, Utc};
use tracing_subscriber::EnvFilter;

use loja_core::{Employee, Money, PaymentMethod, Product, Role};
use loja_store::Store;
use loja_terminal::{Terminal, TerminalError};

fn main() -> Result<(), TerminalError> {
    init_tracing();

    let store = Store::new();
    let operator_id = seed(&store)?;
    let terminal = Terminal::new(store.clone(), operator_id);

    // Shift start: drawer opens with R$ 100,00
    let session = terminal.open_cash_session(Money::from_major_minor(100, 0))?;
    println!("Caixa aberto com {}", session.initial());

    // Ring up three colas and a bag of rice
    let (coke_id, rice_id) = store.with(|tables| {
        let coke_id = tables.find_products("coca")[0].id.clone();
        let rice_id = tables.find_products("arroz")[0].id.clone();
        (coke_id, rice_id)
    });
    terminal.add_to_cart(&coke_id)?;
    terminal.set_cart_quantity(&coke_id, 3)?;
    terminal.add_to_cart(&rice_id)?;
    println!("Total do carrinho: {}", terminal.cart_total());

    let sale = terminal.complete_sale(PaymentMethod::Pix)?;
    println!("Venda {} concluída: {}", sale.id, sale.total());

    // Shift end: the drawer count matches exactly
    let expected = terminal
        .current_session()
        .map(|s| s.expected())
        .unwrap_or_else(Money::zero);
    let closed = terminal.close_cash_session(expected)?;
    println!(
        "Caixa fechado; diferença: {}",
        closed.variance().unwrap_or_else(Money::zero)
    );

    let now = Utc::now();
    let report = terminal.monthly_report(now.month(), now.year());
    println!(
        "Relatório {:02}/{}: {} vendas, receita {}, ticket médio {}",
        report.month,
        report.year,
        report.count,
        report.revenue(),
        report.average_ticket()
    );

    Ok(())
}

/// Seeds the catalog and the admin operator; returns the operator id.
fn seed(store: &Store) -> Result<String, TerminalError> {
    let admin = Employee::new("Administrador", "admin@loja.com", Role::Admin);
    let operator_id = admin.id.clone();

    store.with_mut(|tables| {
        tables.insert_employee(admin)?;
        tables.insert_product(Product::new(
            "Coca-Cola 2L",
            Money::from_cents(999),
            24,
            "Bebidas",
        ))?;
        tables.insert_product(Product::new(
            "Arroz 5kg",
            Money::from_cents(2490),
            10,
            "Mercearia",
        ))?;
        tables.insert_product(Product::by_weight(
            "Queijo Minas",
            Money::from_cents(450),
            Money::from_cents(4500),
            8,
            "Frios",
        ))?;
        Ok::<(), TerminalError>(())
    })?;

    Ok(operator_id)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
