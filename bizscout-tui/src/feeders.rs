use crate::tui::TuiMsg;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::time;

/// Spawn the input reader and the spinner tick as background feeders.
///
/// Both exit once the UI loop drops its receiver.
pub fn spawn(tx: Sender<TuiMsg>) {
    let input_tx = tx.clone();
    tokio::spawn(async move {
        loop {
            match tokio::task::spawn_blocking(crossterm::event::read).await {
                Ok(Ok(ev)) => {
                    if input_tx.send(TuiMsg::InputEvent(ev)).await.is_err() {
                        break;
                    }
                }
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, "terminal input read failed");
                    break;
                }
                Err(_) => break,
            }
        }
    });

    tokio::spawn(async move {
        let mut interval = time::interval(Duration::from_millis(80));
        loop {
            interval.tick().await;
            if tx.is_closed() {
                break;
            }
            // Ticks are droppable; never let them back up the mailbox.
            let _ = tx.try_send(TuiMsg::Tick);
        }
    });
}
