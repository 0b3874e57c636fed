//! End-to-end flow through the session store, engine, and effect delivery,
//! with a recording Messenger standing in for Telegram.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use caifan_core::{deliver, Chat, Effect, Item, Messenger, Result, MSG_NEXT_ROUND, MSG_STARTED};
use caifan_telegram::SessionStore;

struct RecordingMessenger {
    log: Mutex<Vec<String>>,
}

impl RecordingMessenger {
    fn new() -> Self {
        Self {
            log: Mutex::new(Vec::new()),
        }
    }

    fn lines(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.log.lock().unwrap().push(format!("text {}", text));
        Ok(())
    }

    async fn present_choice(&self, _chat: &Chat, a: &Item, b: &Item) -> Result<()> {
        self.log.lock().unwrap().push(format!("choice {} {}", a, b));
        Ok(())
    }

    async fn announce_winner(&self, _chat: &Chat, winner: &Item) -> Result<()> {
        self.log.lock().unwrap().push(format!("winner {}", winner));
        Ok(())
    }
}

/// **Test: a four-dish tournament plays through the store to a single winner.**
///
/// **Setup:** One chat's session from the store; a recording Messenger.
/// **Action:** Begin with four dishes, then always pick the first offered item,
/// delivering every effect batch while holding the session lock.
/// **Expected:** Start notification, three choices, two round notifications,
/// exactly one winner line, in that overall order.
#[tokio::test]
async fn test_full_tournament_through_store() {
    let store = SessionStore::new(Duration::from_secs(3600));
    let messenger = RecordingMessenger::new();
    let chat = Chat { id: 99 };
    let dishes: Vec<Item> = ["Pizza", "Sushi", "Ramen", "Tacos"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let entry = store.entry(chat.id).await;
    let mut guard = entry.lock().await;

    let mut effects = guard.session.begin(dishes.clone());
    deliver(&messenger, &chat, &effects).await.unwrap();

    while let Some(Effect::PresentChoice(a, _)) = effects.last().cloned() {
        effects = guard.session.resolve_pick(&a);
        guard.touch();
        deliver(&messenger, &chat, &effects).await.unwrap();
    }

    let lines = messenger.lines();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], format!("text {}", MSG_STARTED));
    assert_eq!(
        lines.iter().filter(|l| l.starts_with("choice ")).count(),
        3
    );
    assert_eq!(
        lines
            .iter()
            .filter(|l| **l == format!("text {}", MSG_NEXT_ROUND))
            .count(),
        2
    );
    let winners: Vec<_> = lines.iter().filter(|l| l.starts_with("winner ")).collect();
    assert_eq!(winners.len(), 1);
    assert!(dishes.iter().any(|d| *winners[0] == format!("winner {}", d)));

    // The winner line is the last thing delivered.
    assert!(lines.last().unwrap().starts_with("winner "));
}
