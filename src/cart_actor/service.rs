use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn, Span};

use super::directives::{Directive, DirectiveSink, FriendlyError};
use crate::catalog::ProductSource;
use crate::cell::CellData;
use crate::clients::CartClient;
use crate::domain::{CartLine, CheckoutSnapshot};
use crate::messages::{CartRequest, CheckoutOutcome, LoadOutcome};

/// Owns one catalog-browsing session: loads the catalog, keeps the current
/// cart lines and assembles checkout snapshots.
///
/// Requests are handled one at a time. A reload requested while another is
/// in flight starts only after the first has delivered its directives, so
/// the two streams never interleave and the later result is applied last.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    source: Arc<dyn ProductSource>,
    sink: DirectiveSink,
    lines: Vec<Arc<CartLine>>,
}

impl CartService {
    pub fn new(buffer_size: usize, source: Arc<dyn ProductSource>, sink: DirectiveSink) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            source,
            sink,
            lines: Vec::new(),
        };
        (service, CartClient::new(sender))
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::ViewReady { respond_to } => {
                    let outcome = self.handle_view_ready().await;
                    let _ = respond_to.send(Ok(outcome));
                }
                CartRequest::Checkout { lines, respond_to } => {
                    let outcome = self.handle_checkout(lines);
                    let _ = respond_to.send(Ok(outcome));
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }
        info!("CartService stopped");
    }

    /// Nothing is kept between loads except the latest lines, so a failed
    /// load never blocks the next one.
    #[instrument(skip(self), fields(outcome))]
    async fn handle_view_ready(&mut self) -> LoadOutcome {
        info!("Loading catalog");
        self.sink.emit(Directive::ShowLoading(true));

        let outcome = match self.source.products().await {
            Ok(products) => {
                let lines: Vec<Arc<CartLine>> = products
                    .into_iter()
                    .map(|product| Arc::new(CartLine::new(product)))
                    .collect();
                self.lines = lines.clone();

                self.sink.emit(Directive::ShowLoading(false));
                self.sink.emit(Directive::ReplaceList(lines));
                info!(line_count = self.lines.len(), "Catalog loaded");
                LoadOutcome::Loaded {
                    line_count: self.lines.len(),
                }
            }
            Err(e) => {
                error!(error = %e, "Catalog load failed");
                self.sink.emit(Directive::ShowLoading(false));
                self.sink.emit(Directive::ShowError(FriendlyError::Generic));
                LoadOutcome::Failed
            }
        };

        Span::current().record("outcome", tracing::field::debug(&outcome));
        outcome
    }

    #[instrument(fields(row_count = rows.len()), skip(self, rows))]
    fn handle_checkout(&self, rows: Vec<Arc<dyn CellData>>) -> CheckoutOutcome {
        debug!("Processing checkout request");
        let current: HashSet<&CartLine> = self.lines.iter().map(Arc::as_ref).collect();
        let mut cart_lines = Vec::with_capacity(rows.len());
        for row in rows {
            let identifier = row.cell_identifier().to_string();
            match row.as_cart_line() {
                Some(line) => {
                    if !current.contains(line.as_ref()) {
                        debug!(code = %line.product().code(), "Line is not part of the current catalog");
                    }
                    cart_lines.push(line);
                }
                None => warn!(cell = %identifier, "Skipping non-cart row"),
            }
        }

        let snapshot = CheckoutSnapshot::capture(cart_lines.iter().map(Arc::as_ref));
        if snapshot.is_empty() {
            info!("Cart is empty");
            self.sink.emit(Directive::ShowEmptyCartWarning);
            return CheckoutOutcome::EmptyCart;
        }

        info!(line_count = snapshot.len(), total_items = snapshot.total_items(), "Checkout ready");
        self.sink.emit(Directive::NavigateToCheckout(snapshot.clone()));
        CheckoutOutcome::Ready(snapshot)
    }
}
