//! Page-scoped signal bus
//!
//! Sections, the side navigation and key bindings emit [`PageSignal`]s
//! through cloneable [`SignalSender`] handles; the page controller drains
//! the bus once per loop iteration. The bus lives exactly as long as the
//! page that created it.

use tokio::sync::mpsc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSignal {
    /// Ask the navigator to move to `step`; may be out of range
    GotoStep { step: i64 },
    /// Open the contact form, remembering which part of the page asked
    OpenContact { source: String },
}

/// Emitting half of the bus
#[derive(Debug, Clone)]
pub struct SignalSender {
    tx: mpsc::UnboundedSender<PageSignal>,
}

impl SignalSender {
    pub fn send(&self, signal: PageSignal) {
        if let Err(err) = self.tx.send(signal) {
            debug!("Signal dropped, page is gone: {:?}", err.0);
        }
    }

    pub fn goto_step(&self, step: i64) {
        self.send(PageSignal::GotoStep { step });
    }

    pub fn open_contact(&self, source: impl Into<String>) {
        self.send(PageSignal::OpenContact {
            source: source.into(),
        });
    }
}

pub struct SignalBus {
    tx: mpsc::UnboundedSender<PageSignal>,
    rx: mpsc::UnboundedReceiver<PageSignal>,
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalBus {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> SignalSender {
        SignalSender {
            tx: self.tx.clone(),
        }
    }

    /// Take every pending signal in emission order
    pub fn drain(&mut self) -> Vec<PageSignal> {
        let mut signals = Vec::new();
        while let Ok(signal) = self.rx.try_recv() {
            signals.push(signal);
        }
        signals
    }
}
