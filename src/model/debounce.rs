//! Cancellable timers for debouncing live input

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// A pending action. Cancelling stops the wait only; an action that has
/// already started runs to completion on its own task.
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }
}

/// Runs `action` once `delay` has elapsed unless the handle is cancelled first.
pub fn schedule<F>(delay: Duration, action: F) -> TimerHandle
where
    F: Future<Output = ()> + Send + 'static,
{
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        tokio::spawn(action);
    });
    TimerHandle { task }
}

/// Keeps at most one pending action; each trigger replaces the previous one.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<TimerHandle>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub async fn trigger<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock().await;
        if let Some(handle) = pending.take() {
            handle.cancel();
        }
        *pending = Some(schedule(self.delay, action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::Notify;

    #[tokio::test(start_paused = true)]
    async fn scheduled_action_fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let handle = schedule(Duration::from_millis(700), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(699)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Too late to matter
        handle.cancel();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_action_never_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let handle = schedule(Duration::from_millis(700), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        handle.cancel();
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_does_not_interrupt_a_running_action() {
        let gate = Arc::new(Notify::new());
        let started = Arc::new(AtomicUsize::new(0));
        let finished = Arc::new(AtomicUsize::new(0));
        let handle = {
            let (gate, started, finished) = (gate.clone(), started.clone(), finished.clone());
            schedule(Duration::from_millis(700), async move {
                started.fetch_add(1, Ordering::SeqCst);
                gate.notified().await;
                finished.fetch_add(1, Ordering::SeqCst);
            })
        };

        tokio::time::sleep(Duration::from_millis(800)).await;
        assert_eq!(started.load(Ordering::SeqCst), 1);

        handle.cancel();
        gate.notify_one();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retrigger_keeps_the_running_action_alive() {
        let debouncer = Debouncer::new(Duration::from_millis(700));
        let gate = Arc::new(Notify::new());
        let finished = Arc::new(AtomicUsize::new(0));
        {
            let (gate, finished) = (gate.clone(), finished.clone());
            debouncer
                .trigger(async move {
                    gate.notified().await;
                    finished.fetch_add(1, Ordering::SeqCst);
                })
                .await;
        }
        tokio::time::sleep(Duration::from_millis(800)).await;

        debouncer.trigger(async {}).await;
        gate.notify_one();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_triggers_runs_only_the_last() {
        let debouncer = Debouncer::new(Duration::from_millis(700));
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));

        for i in 0..5 {
            let seen = seen.clone();
            debouncer
                .trigger(async move {
                    seen.lock().unwrap().push(i);
                })
                .await;
            tokio::time::sleep(Duration::from_millis(200)).await;
        }

        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(*seen.lock().unwrap(), vec![4]);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_quiet_periods_each_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(700));
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let counter = fired.clone();
            debouncer
                .trigger(async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                })
                .await;
            tokio::time::sleep(Duration::from_secs(1)).await;
        }

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
