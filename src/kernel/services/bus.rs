//! Queue feeding the presentation thread. Anything that should change what
//! the user sees goes through here, in arrival order.

use crate::kernel::services::ports::SearchMessage;
use std::sync::mpsc::{self, Receiver, RecvError, RecvTimeoutError, SendError, Sender, TryRecvError};
use std::time::Duration;

#[derive(Debug)]
pub enum BusMessage {
    /// A new search request from the input side.
    Query(String),
    /// No more requests will arrive.
    InputClosed,
    Search(SearchMessage),
}

#[derive(Clone)]
pub struct BusSender {
    tx: Sender<BusMessage>,
}

pub struct BusReceiver {
    rx: Receiver<BusMessage>,
}

pub fn bus() -> (BusSender, BusReceiver) {
    let (tx, rx) = mpsc::channel();
    (BusSender { tx }, BusReceiver { rx })
}

impl BusSender {
    pub fn send(&self, msg: BusMessage) -> Result<(), SendError<BusMessage>> {
        self.tx.send(msg)
    }

    pub fn send_query(&self, text: impl Into<String>) -> Result<(), SendError<BusMessage>> {
        self.send(BusMessage::Query(text.into()))
    }

    pub fn send_search(&self, msg: SearchMessage) -> Result<(), SendError<BusMessage>> {
        self.send(BusMessage::Search(msg))
    }
}

impl BusReceiver {
    pub fn recv(&self) -> Result<BusMessage, RecvError> {
        self.rx.recv()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<BusMessage, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn try_recv(&mut self) -> Result<BusMessage, TryRecvError> {
        self.rx.try_recv()
    }
}
