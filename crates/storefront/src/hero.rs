use std::time::Duration;

use shared::{domain::HeroSlide, protocol::HeroFrame};
use tokio::{
    sync::watch,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{error::RotatorError, task::ScheduledTask};

/// Index bookkeeping for the crossfading hero carousel.
///
/// Only `active` is fully visible while idle. During a fade the `next`
/// slide is faded in over it; `commit` then promotes it and advances `next`
/// cyclically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlider {
    len: usize,
    active: usize,
    next: usize,
    transitioning: bool,
}

impl HeroSlider {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            next: if len > 1 { 1 } else { 0 },
            transitioning: false,
        }
    }

    pub fn rotates(&self) -> bool {
        self.len > 1
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn next_index(&self) -> usize {
        self.next
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn begin_transition(&mut self) {
        if self.rotates() {
            self.transitioning = true;
        }
    }

    pub fn commit(&mut self) {
        if !self.rotates() {
            return;
        }
        self.active = self.next;
        self.next = (self.next + 1) % self.len;
        self.transitioning = false;
    }

    pub fn frame(&self, slides: &[HeroSlide]) -> Option<HeroFrame> {
        let active = slides.get(self.active)?.clone();
        let next = if self.rotates() {
            slides.get(self.next).cloned()
        } else {
            None
        };
        Some(HeroFrame {
            active_index: self.active,
            next_index: self.next,
            transitioning: self.transitioning,
            active,
            next,
        })
    }
}

/// Drives a [`HeroSlider`] on a fixed interval and publishes every frame.
///
/// Must be started inside a tokio runtime. Lists with fewer than two slides
/// never schedule a timer.
#[derive(Debug)]
pub struct HeroRotator {
    frames: watch::Receiver<Option<HeroFrame>>,
    task: Option<ScheduledTask>,
}

impl HeroRotator {
    pub fn start(
        slides: Vec<HeroSlide>,
        interval: Duration,
        fade: Duration,
    ) -> Result<Self, RotatorError> {
        if fade >= interval {
            return Err(RotatorError::FadeTooLong { fade, interval });
        }

        let slider = HeroSlider::new(slides.len());
        let (tx, rx) = watch::channel(slider.frame(&slides));
        if !slider.rotates() {
            debug!(slides = slides.len(), "hero rotation disabled");
            return Ok(Self {
                frames: rx,
                task: None,
            });
        }

        info!(
            slides = slides.len(),
            interval_ms = interval.as_millis() as u64,
            fade_ms = fade.as_millis() as u64,
            "starting hero rotation"
        );
        let task = ScheduledTask::spawn(rotate(slider, slides, interval, fade, tx));
        Ok(Self {
            frames: rx,
            task: Some(task),
        })
    }

    pub fn current(&self) -> Option<HeroFrame> {
        self.frames.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<HeroFrame>> {
        self.frames.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
            debug!("hero rotation stopped");
        }
    }
}

async fn rotate(
    mut slider: HeroSlider,
    slides: Vec<HeroSlide>,
    interval: Duration,
    fade: Duration,
    tx: watch::Sender<Option<HeroFrame>>,
) {
    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        slider.begin_transition();
        if tx.send(slider.frame(&slides)).is_err() {
            break;
        }
        time::sleep(fade).await;
        slider.commit();
        if tx.send(slider.frame(&slides)).is_err() {
            break;
        }
    }
}

#[cfg(test)]
#[path = "tests/hero_tests.rs"]
mod tests;
