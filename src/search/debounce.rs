//! Debounced search input

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// An event from the search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Live typing; runs once input has been quiet for a while
    Changed(String),
    /// Enter key or search button; runs immediately
    Submitted(String),
}

/// Turns input events into queries, at most one per quiet period of typing
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    quiet: Duration,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Spawn the debouncing task; the returned channel yields queries to run
    pub fn spawn(self, events: mpsc::Receiver<InputEvent>) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(16);
        tokio::spawn(self.run(events, tx));
        rx
    }

    async fn run(self, mut events: mpsc::Receiver<InputEvent>, queries: mpsc::Sender<String>) {
        let mut pending: Option<(String, Instant)> = None;

        loop {
            let deadline = pending.as_ref().map(|(_, at)| *at);

            let event = match deadline {
                Some(deadline) => tokio::select! {
                    event = events.recv() => event,
                    _ = tokio::time::sleep_until(deadline) => {
                        if let Some((query, _)) = pending.take() {
                            if queries.send(query).await.is_err() {
                                return;
                            }
                        }
                        continue;
                    }
                },
                None => events.recv().await,
            };

            match event {
                Some(InputEvent::Changed(query)) => {
                    pending = Some((query, Instant::now() + self.quiet));
                }
                Some(InputEvent::Submitted(query)) => {
                    pending = None;
                    if queries.send(query).await.is_err() {
                        return;
                    }
                }
                None => {
                    // Input closed: let the last keystroke settle, then stop
                    if let Some((query, at)) = pending.take() {
                        tokio::time::sleep_until(at).await;
                        let _ = queries.send(query).await;
                    }
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn setup() -> (mpsc::Sender<InputEvent>, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(8);
        let out = Debouncer::from_millis(300).spawn(rx);
        (tx, out)
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_coalesces_into_one_search() {
        let (tx, mut out) = setup();

        tx.send(InputEvent::Changed("g".into())).await.unwrap();
        sleep(Duration::from_millis(100)).await;
        tx.send(InputEvent::Changed("go".into())).await.unwrap();

        sleep(Duration::from_millis(200)).await;
        assert!(out.try_recv().is_err());

        sleep(Duration::from_millis(150)).await;
        assert_eq!(out.recv().await.as_deref(), Some("go"));
        assert!(out.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_bypasses_and_cancels_pending() {
        let (tx, mut out) = setup();

        tx.send(InputEvent::Changed("ru".into())).await.unwrap();
        tx.send(InputEvent::Submitted("rust".into())).await.unwrap();
        assert_eq!(out.recv().await.as_deref(), Some("rust"));

        sleep(Duration::from_secs(1)).await;
        assert!(out.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_query_flushed_on_close() {
        let (tx, mut out) = setup();

        tx.send(InputEvent::Changed("rust".into())).await.unwrap();
        drop(tx);
        assert_eq!(out.recv().await.as_deref(), Some("rust"));
        assert_eq!(out.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_pauses_give_separate_searches() {
        let (tx, mut out) = setup();

        tx.send(InputEvent::Changed("a".into())).await.unwrap();
        sleep(Duration::from_millis(400)).await;
        tx.send(InputEvent::Changed("ab".into())).await.unwrap();
        sleep(Duration::from_millis(400)).await;

        assert_eq!(out.recv().await.as_deref(), Some("a"));
        assert_eq!(out.recv().await.as_deref(), Some("ab"));
    }
}
