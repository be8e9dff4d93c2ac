// statusbar-core/src/message.rs
use crate::dispose::Disposer;
use crate::entry::{Alignment, EntryDescriptor, EntryId};
use crate::schedule::{Scheduler, TaskHandle};
use crate::strip::StripInner;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Lifecycle of the single transient status message.
///
/// `Idle -> Scheduled -> Shown -> Idle`, or `Scheduled -> Idle` when disposed
/// before the show delay elapses. Only one instance is ever non-Idle.
enum MessageState {
    Idle,
    Scheduled {
        show: TaskHandle,
        hide: Option<TaskHandle>,
    },
    Shown {
        entry: EntryId,
        hide: Option<TaskHandle>,
    },
}

/// Runs the "one transient message at a time" lifecycle on top of the entry
/// list: delayed show, optional auto-hide, synchronous supersession.
pub(crate) struct MessageController {
    strip: Weak<RefCell<StripInner>>,
    scheduler: Scheduler,
    active: Option<Rc<RefCell<MessageState>>>,
}

impl MessageController {
    pub(crate) fn new(strip: Weak<RefCell<StripInner>>, scheduler: Scheduler) -> Self {
        Self {
            strip,
            scheduler,
            active: None,
        }
    }

    /// Schedule a transient message.
    ///
    /// The previous message, scheduled or shown, is forced back to Idle
    /// before anything else happens, so two messages never coexist - even
    /// with a zero delay, where the superseded show timer is cancelled before
    /// it can fire. The message renders on the left side with the minimal
    /// priority, placing it after every permanent left entry.
    pub(crate) fn set_message(
        &mut self,
        text: String,
        auto_dispose_after: Option<Duration>,
        delay_by: Duration,
    ) -> Disposer {
        self.dispose_active();

        let slot = Rc::new(RefCell::new(MessageState::Idle));
        let strip = self.strip.clone();

        let show = {
            let slot = Rc::clone(&slot);
            let strip = strip.clone();
            self.scheduler.schedule(delay_by, move || {
                let Some(inner) = strip.upgrade() else { return };
                let entry =
                    inner
                        .borrow_mut()
                        .insert(EntryDescriptor::text(text), Alignment::Left, i32::MIN);

                let mut state = slot.borrow_mut();
                match std::mem::replace(&mut *state, MessageState::Idle) {
                    MessageState::Scheduled { hide, .. } => {
                        *state = MessageState::Shown { entry, hide };
                    }
                    // Disposed between queue removal and this callback; the
                    // freshly inserted entry must not outlive the message.
                    other => {
                        *state = other;
                        drop(state);
                        inner.borrow_mut().remove(entry);
                    }
                }
            })
        };

        let hide = auto_dispose_after.map(|after| {
            let slot = Rc::clone(&slot);
            let strip = strip.clone();
            self.scheduler
                .schedule(delay_by + after, move || dispose_message(&strip, &slot))
        });

        *slot.borrow_mut() = MessageState::Scheduled { show, hide };
        self.active = Some(Rc::clone(&slot));

        Disposer::new(move || dispose_message(&strip, &slot))
    }

    fn dispose_active(&mut self) {
        if let Some(slot) = self.active.take() {
            dispose_message(&self.strip, &slot);
        }
    }
}

/// Force a message slot to Idle: cancel timers that have not fired and remove
/// the rendered entry if it was shown. Safe to call repeatedly; every call
/// past the first finds the slot Idle already.
fn dispose_message(strip: &Weak<RefCell<StripInner>>, slot: &Rc<RefCell<MessageState>>) {
    let state = std::mem::replace(&mut *slot.borrow_mut(), MessageState::Idle);
    match state {
        MessageState::Idle => {}
        MessageState::Scheduled { mut show, hide } => {
            show.cancel();
            if let Some(mut hide) = hide {
                hide.cancel();
            }
        }
        MessageState::Shown { entry, hide } => {
            if let Some(mut hide) = hide {
                hide.cancel();
            }
            if let Some(inner) = strip.upgrade() {
                inner.borrow_mut().remove(entry);
            }
        }
    }
}
