#![forbid(unsafe_code)]

//! Model/update/view loop.
//!
//! A [`Model`] owns application state, folds messages through `update`,
//! and derives a render model with `view`. The [`Program`] wrapper owns
//! the message channel that background timers feed and drains it into the
//! model on demand, so callers control exactly when state advances.

use std::sync::mpsc;

/// Application state driven by messages.
pub trait Model: Sized {
    /// Message type routed through `update`.
    type Message: Send + 'static;

    /// Render model produced by `view`.
    type View;

    /// Command to run before the first update.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Fold one message into the state, optionally emitting follow-ups.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Derive the render model for the current state.
    fn view(&self) -> Self::View;
}

/// A command returned from [`Model::update`].
pub enum Cmd<M> {
    /// Do nothing.
    None,
    /// Stop the program loop.
    Quit,
    /// Feed another message through `update`.
    Msg(M),
    /// Run several commands in order.
    Batch(Vec<Cmd<M>>),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "Cmd::None"),
            Self::Quit => write!(f, "Cmd::Quit"),
            Self::Msg(m) => write!(f, "Cmd::Msg({m:?})"),
            Self::Batch(cmds) => f.debug_tuple("Cmd::Batch").field(cmds).finish(),
        }
    }
}

impl<M> Cmd<M> {
    /// The no-op command.
    #[must_use]
    pub fn none() -> Self {
        Self::None
    }

    /// Stop the program loop.
    #[must_use]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Feed a message back through `update`.
    #[must_use]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Run commands in order. Flattens the trivial cases.
    #[must_use]
    pub fn batch(mut cmds: Vec<Self>) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.remove(0),
            _ => Self::Batch(cmds),
        }
    }
}

/// Owns a model and the channel that delivers its messages.
pub struct Program<M: Model> {
    model: M,
    sender: mpsc::Sender<M::Message>,
    receiver: mpsc::Receiver<M::Message>,
    running: bool,
}

impl<M: Model> Program<M> {
    /// Wrap a model and run its `init` command.
    #[must_use]
    pub fn new(mut model: M) -> Self {
        let (sender, receiver) = mpsc::channel();
        let init = model.init();
        let mut program = Self {
            model,
            sender,
            receiver,
            running: true,
        };
        program.run_cmd(init);
        program
    }

    /// A sender for feeding messages from background threads.
    #[must_use]
    pub fn sender(&self) -> mpsc::Sender<M::Message> {
        self.sender.clone()
    }

    /// The wrapped model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the wrapped model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Whether a `Cmd::Quit` has been processed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Route one message through `update`, then run its commands to
    /// completion. Messages emitted via `Cmd::Msg` are processed in
    /// breadth-first order.
    pub fn send(&mut self, msg: M::Message) {
        if !self.running {
            return;
        }
        let cmd = self.model.update(msg);
        self.run_cmd(cmd);
    }

    /// Drain all messages queued by background timers, in arrival order.
    ///
    /// Returns the number of messages processed.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while self.running {
            match self.receiver.try_recv() {
                Ok(msg) => {
                    processed += 1;
                    self.send(msg);
                }
                Err(_) => break,
            }
        }
        processed
    }

    /// Derive the current render model.
    #[must_use]
    pub fn view(&self) -> M::View {
        self.model.view()
    }

    fn run_cmd(&mut self, cmd: Cmd<M::Message>) {
        let mut queue = std::collections::VecDeque::new();
        queue.push_back(cmd);
        while let Some(cmd) = queue.pop_front() {
            match cmd {
                Cmd::None => {}
                Cmd::Quit => {
                    tracing::debug!("program quit");
                    self.running = false;
                }
                Cmd::Msg(msg) => {
                    if self.running {
                        queue.push_back(self.model.update(msg));
                    }
                }
                Cmd::Batch(cmds) => {
                    // Preserve order ahead of already-queued follow-ups.
                    for cmd in cmds.into_iter().rev() {
                        queue.push_front(cmd);
                    }
                }
            }
        }
    }
}
