//! Browser timer for request timeouts

use std::time::Duration;

use async_trait::async_trait;
use board_sync::Timer;

pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
