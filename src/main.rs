use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn, Instrument};

use store_cart::{
    setup_tracing, CartLine, CellData, CheckoutOutcome, Directive, LoadOutcome, SectionHeader, StoreArgs, StoreSystem,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = StoreArgs::parse();

    // Setup tracing once for the entire application
    setup_tracing(args.verbose);

    let config = args.load_config()?;

    info!(data_source = ?config.data_source, "Starting store");
    let (system, mut directives) = StoreSystem::start(&config)?;

    // The presentation layer: applies directives in order on its own task
    // and keeps the rows currently on screen.
    let (rows_tx, mut rows_rx) = tokio::sync::watch::channel(Vec::<Arc<CartLine>>::new());
    let presenter = tokio::spawn(
        async move {
            while let Some(directive) = directives.recv().await {
                match directive {
                    Directive::ShowLoading(visible) => info!(visible, "Loading indicator"),
                    Directive::ReplaceList(lines) => {
                        info!(line_count = lines.len(), "Showing catalog");
                        let _ = rows_tx.send(lines);
                    }
                    Directive::ShowError(kind) => warn!(message = %kind, "Showing error"),
                    Directive::ShowEmptyCartWarning => warn!("Cart is empty"),
                    Directive::NavigateToCheckout(snapshot) => info!(
                        line_count = snapshot.len(),
                        total_items = snapshot.total_items(),
                        subtotal = snapshot.subtotal(),
                        "Navigating to checkout"
                    ),
                }
            }
        }
        .instrument(tracing::info_span!("presenter")),
    );

    if system.cart_client.on_view_ready().await? == LoadOutcome::Failed {
        warn!("Catalog unavailable, nothing to browse");
        system.shutdown().await?;
        presenter.await?;
        return Ok(());
    }
    rows_rx.changed().await?;
    let lines = rows_rx.borrow_and_update().clone();

    // Rapid taps from several tasks at once
    let span = tracing::info_span!("taps");
    async {
        let taps: Vec<_> = lines
            .iter()
            .enumerate()
            .flat_map(|(i, line)| (0..=i).map(move |_| Arc::clone(line)))
            .map(|line| tokio::spawn(async move { line.increase() }))
            .collect();
        for tap in taps {
            tap.await?;
        }
        if let Some(first) = lines.first() {
            first.decrease();
        }
        Ok::<_, tokio::task::JoinError>(())
    }
    .instrument(span)
    .await?;

    let mut screen: Vec<Arc<dyn CellData>> = vec![Arc::new(SectionHeader::new("Store"))];
    screen.extend(lines.iter().map(|line| Arc::clone(line) as Arc<dyn CellData>));

    match system.cart_client.on_checkout(screen).await {
        Ok(CheckoutOutcome::Ready(snapshot)) => {
            for line in snapshot.lines() {
                info!(code = %line.product.code(), quantity = line.quantity, "Checked out");
            }
        }
        Ok(CheckoutOutcome::EmptyCart) => info!("Nothing to check out"),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;
    presenter.await?;

    info!("Application completed successfully");
    Ok(())
}
