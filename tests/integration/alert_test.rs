//! Integration tests for the alert queue and its display.

mod helpers;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use backoffice_state::{AlertDisplay, AlertEntry, AlertSurface};

#[derive(Debug, Clone, Default)]
struct Screen(Arc<Mutex<Vec<String>>>);

impl Screen {
    fn shown(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl AlertSurface for Screen {
    fn clear(&mut self) {
        self.0.lock().unwrap().clear();
    }

    fn show(&mut self, entry: &AlertEntry) {
        self.0.lock().unwrap().push(entry.message.clone());
    }
}

#[test]
fn test_add_and_positional_remove() {
    let app = helpers::TestApp::new();
    let store = &app.ctx.store;

    store.add_alert("a", "b", 5.0);
    store.add_alert("c", "d", 5.0);
    assert_eq!(app.alert_messages(), vec!["a", "c"]);

    store.remove_alert_at(0);
    assert_eq!(app.alert_messages(), vec!["c"]);

    store.remove_alert_at(5);
    assert_eq!(app.alert_messages(), vec!["c"]);
}

#[test]
fn test_positional_dismissal_captured_before_shift_hits_wrong_entry() {
    let app = helpers::TestApp::new();
    let store = &app.ctx.store;
    store.add_alert("first", "", 5.0);
    store.add_alert("second", "", 5.0);
    store.add_alert("third", "", 5.0);

    // "second" captured index 1 when it was drawn; "first" leaves, then
    // the captured handler fires.
    store.remove_alert_at(0);
    store.remove_alert_at(1);
    assert_eq!(app.alert_messages(), vec!["second"]);
}

#[test]
fn test_id_dismissal_is_unaffected_by_earlier_removals() {
    let app = helpers::TestApp::new();
    let store = &app.ctx.store;
    let first = store.add_alert("first", "", 5.0);
    let second = store.add_alert("second", "", 5.0);
    store.add_alert("third", "", 5.0);

    store.dismiss_alert(first);
    store.dismiss_alert(second);
    assert_eq!(app.alert_messages(), vec!["third"]);

    assert!(!store.dismiss_alert(second));
    assert_eq!(app.alert_messages(), vec!["third"]);
}

#[tokio::test(start_paused = true)]
async fn test_display_mirrors_queue_and_expires_entries() {
    let app = helpers::TestApp::new();
    let screen = Screen::default();
    let display = AlertDisplay::new(app.ctx.store.clone(), screen.clone()).spawn();

    app.ctx.store.add_alert("timed", "", 2.0);
    app.ctx.store.add_alert("sticky", "", 0.0);
    app.ctx.store.add_alert("later", "", 4.0);
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(screen.shown(), vec!["timed", "sticky", "later"]);

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(screen.shown(), vec!["sticky", "later"]);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(screen.shown(), vec!["sticky"]);
    assert_eq!(app.alert_messages(), vec!["sticky"]);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(screen.shown(), vec!["sticky"]);

    display.abort();
}
