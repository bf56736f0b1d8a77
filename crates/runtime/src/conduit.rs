//! One-slot conduit between two strands
//!
//! A conduit is a buffered channel with capacity one, split into a write
//! capability (`ConduitWriter`) and a read capability (`ConduitReader`).
//!
//! ## Slot Credit Design
//!
//! Built from two May MPMC channels:
//!
//! - `data`: carries the values, writer to reader
//! - `slot`: carries a single credit, reader to writer
//!
//! The conduit starts with one credit queued. A write first takes the credit
//! (cooperatively blocking while the reader holds it) and then enqueues the
//! value; a successful read hands the credit back. At most one value can
//! therefore be buffered at any time, and a write into an empty conduit never
//! blocks.
//!
//! ## Non-Blocking Guarantee
//!
//! Inside a strand every wait yields to May's scheduler; on a plain OS thread
//! (such as `main`) the thread parks instead.

use crate::error::ConduitError;
use crate::receiver::bounded_wait;
use may::sync::mpmc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::Duration;

/// Values accepted into any conduit since process start
pub static TOTAL_MESSAGES_SENT: AtomicU64 = AtomicU64::new(0);

/// Values taken out of any conduit since process start
pub static TOTAL_MESSAGES_RECEIVED: AtomicU64 = AtomicU64::new(0);

/// Write capability of a conduit
pub struct ConduitWriter<T> {
    data: mpmc::Sender<T>,
    slot: mpmc::Receiver<()>,
}

/// Read capability of a conduit
pub struct ConduitReader<T> {
    data: mpmc::Receiver<T>,
    slot: mpmc::Sender<()>,
}

/// Create an empty conduit with room for exactly one value
pub fn conduit<T>() -> (ConduitWriter<T>, ConduitReader<T>) {
    let (data_tx, data_rx) = mpmc::channel();
    let (slot_tx, slot_rx) = mpmc::channel();

    // The only credit. Cannot fail: slot_rx is alive right here.
    let _ = slot_tx.send(());

    (
        ConduitWriter {
            data: data_tx,
            slot: slot_rx,
        },
        ConduitReader {
            data: data_rx,
            slot: slot_tx,
        },
    )
}

impl<T> ConduitWriter<T> {
    /// Write a value, waiting for the slot to drain if it is occupied.
    ///
    /// Returns `Closed` once the reader is gone and no credit is left.
    pub fn send(&self, value: T) -> Result<(), ConduitError> {
        self.slot.recv().map_err(|_| ConduitError::Closed)?;
        self.enqueue(value)
    }

    /// Write a value only if the slot is free right now.
    pub fn try_send(&self, value: T) -> Result<(), ConduitError> {
        match self.slot.try_recv() {
            Ok(()) => self.enqueue(value),
            Err(TryRecvError::Empty) => Err(ConduitError::Full),
            Err(TryRecvError::Disconnected) => Err(ConduitError::Closed),
        }
    }

    fn enqueue(&self, value: T) -> Result<(), ConduitError> {
        self.data.send(value).map_err(|_| ConduitError::Closed)?;
        TOTAL_MESSAGES_SENT.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

impl<T> ConduitReader<T> {
    /// Wait for a value.
    ///
    /// Returns `Closed` once the writer is dropped and the slot is empty.
    pub fn recv(&self) -> Result<T, ConduitError> {
        let value = self.data.recv().map_err(|_| ConduitError::Closed)?;
        Ok(self.release(value))
    }

    /// Wait for a value until `timeout` elapses.
    ///
    /// This is the race primitive: whichever comes first, a value or the
    /// deadline, decides the result. Deadlines past `MAX_WAIT` are clamped.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<T, ConduitError> {
        match self.data.recv_timeout(bounded_wait(timeout)) {
            Ok(value) => Ok(self.release(value)),
            Err(RecvTimeoutError::Timeout) => Err(ConduitError::TimedOut),
            Err(RecvTimeoutError::Disconnected) => Err(ConduitError::Closed),
        }
    }

    /// Take the buffered value if there is one.
    pub fn try_recv(&self) -> Result<Option<T>, ConduitError> {
        match self.data.try_recv() {
            Ok(value) => Ok(Some(self.release(value))),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ConduitError::Closed),
        }
    }

    /// Hand the credit back so the writer may fill the slot again.
    fn release(&self, value: T) -> T {
        TOTAL_MESSAGES_RECEIVED.fetch_add(1, Ordering::Relaxed);
        // Writer may already be gone; the credit is simply dropped then
        let _ = self.slot.send(());
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{spawn_strand, wait_all_strands};
    use serial_test::serial;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    #[test]
    fn test_send_then_receive() {
        let (writer, reader) = conduit();
        writer.send(42).unwrap();
        assert_eq!(reader.recv(), Ok(42));
    }

    #[test]
    fn test_capacity_is_one() {
        let (writer, reader) = conduit();
        assert_eq!(writer.try_send("first"), Ok(()));
        assert_eq!(writer.try_send("second"), Err(ConduitError::Full));

        assert_eq!(reader.try_recv(), Ok(Some("first")));
        // Draining frees the slot again
        assert_eq!(writer.try_send("third"), Ok(()));
        assert_eq!(reader.recv(), Ok("third"));
    }

    #[test]
    fn test_try_recv_empty() {
        let (_writer, reader) = conduit::<i64>();
        assert_eq!(reader.try_recv(), Ok(None));
    }

    #[test]
    fn test_recv_timeout_expires() {
        let (_writer, reader) = conduit::<i64>();
        assert_eq!(
            reader.recv_timeout(Duration::from_millis(20)),
            Err(ConduitError::TimedOut)
        );
    }

    #[test]
    fn test_recv_timeout_with_unbounded_deadline() {
        let (writer, reader) = conduit();
        writer.send(3).unwrap();
        assert_eq!(reader.recv_timeout(Duration::MAX), Ok(3));
        drop(writer);
        assert_eq!(
            reader.recv_timeout(Duration::MAX),
            Err(ConduitError::Closed)
        );
    }

    #[test]
    fn test_dropped_writer_closes() {
        let (writer, reader) = conduit::<i64>();
        drop(writer);
        assert_eq!(reader.recv(), Err(ConduitError::Closed));
        assert_eq!(
            reader.recv_timeout(Duration::from_secs(5)),
            Err(ConduitError::Closed)
        );
    }

    #[test]
    fn test_buffered_value_survives_writer_drop() {
        let (writer, reader) = conduit();
        writer.send("last words").unwrap();
        drop(writer);
        assert_eq!(reader.recv(), Ok("last words"));
        assert_eq!(reader.recv(), Err(ConduitError::Closed));
    }

    #[test]
    fn test_dropped_reader_closes_once_credit_spent() {
        let (writer, reader) = conduit();
        writer.send(1).unwrap();
        drop(reader);
        assert_eq!(writer.try_send(2), Err(ConduitError::Closed));
    }

    #[test]
    #[serial]
    fn test_full_slot_blocks_writer_until_drained() {
        let (writer, reader) = conduit();
        let second_sent = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&second_sent);

        spawn_strand(move || {
            writer.send(1).unwrap();
            writer.send(2).unwrap();
            flag.store(true, Ordering::SeqCst);
        });

        // Give the writer time to fill the slot and block on the second send
        std::thread::sleep(Duration::from_millis(50));
        assert!(!second_sent.load(Ordering::SeqCst));

        assert_eq!(reader.recv(), Ok(1));
        assert_eq!(reader.recv(), Ok(2));
        wait_all_strands();
        assert!(second_sent.load(Ordering::SeqCst));
    }

    #[test]
    #[serial]
    fn test_strand_to_strand() {
        let (writer, reader) = conduit();
        let received = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&received);

        spawn_strand(move || {
            may::coroutine::sleep(Duration::from_millis(10));
            writer.send(String::from("hello")).unwrap();
        });
        spawn_strand(move || {
            if reader.recv().as_deref() == Ok("hello") {
                flag.store(true, Ordering::SeqCst);
            }
        });

        wait_all_strands();
        assert!(received.load(Ordering::SeqCst));
    }
}
