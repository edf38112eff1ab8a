//! Marshalling work onto the UI thread.
//!
//! The widget tree is single-threaded. Other threads send closures through a
//! [`UiSender`]; the owner of the tree drains them with [`UiQueue::drain`]
//! before handling input and before painting.

use crate::tree::UiTree;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Work to run against the tree on the UI thread.
pub type UiJob = Box<dyn FnOnce(&mut UiTree) + Send>;

pub struct UiQueue {
    sender: Sender<UiJob>,
    receiver: Receiver<UiJob>,
}

/// Cloneable handle for scheduling UI work from any thread.
#[derive(Clone)]
pub struct UiSender {
    sender: Sender<UiJob>,
}

impl UiSender {
    /// Schedule `job`. Returns `false` if the queue no longer exists.
    pub fn send<F>(&self, job: F) -> bool
    where
        F: FnOnce(&mut UiTree) + Send + 'static,
    {
        self.sender.send(Box::new(job)).is_ok()
    }
}

impl UiQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    pub fn sender(&self) -> UiSender {
        UiSender {
            sender: self.sender.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Run queued jobs in send order. Jobs queued by a running job are run in
    /// the same drain. Returns how many ran.
    pub fn drain(&self, tree: &mut UiTree) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.receiver.try_recv() {
            job(tree);
            ran += 1;
        }
        if ran > 0 {
            tracing::trace!("Ran {} queued UI jobs", ran);
        }
        ran
    }
}

impl Default for UiQueue {
    fn default() -> Self {
        Self::new()
    }
}
