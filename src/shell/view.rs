use crate::error::Result;
use crate::render::{text, Frame};
use crate::shell::animation::GaugePhase;
use crate::shell::input::ViewEvent;
use crate::shell::state::ViewState;
use crate::shell::ticker::Ticker;
use crate::types::config::AnimationSettings;
use std::io::Write;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawPolicy {
    /// Draw on every gauge frame and rotation tick.
    EveryFrame,
    /// Draw on mount, on input, and when the gauge settles.
    OnChange,
}

/// The mounted presentation shell.
///
/// Owns the view state and its two timers: the gauge ticker runs at frame
/// cadence only while the gauge is settling, the rotation ticker runs at a
/// fixed period until the view is unmounted.
pub struct View<W: Write> {
    state: ViewState,
    gauge_ticker: Ticker,
    rotation_ticker: Ticker,
    out: W,
    policy: RedrawPolicy,
    frames_drawn: usize,
}

impl<W: Write> View<W> {
    /// Must be called inside a tokio runtime.
    pub fn mount(
        state: ViewState,
        settings: &AnimationSettings,
        out: W,
        policy: RedrawPolicy,
    ) -> Result<Self> {
        let mut view = Self {
            state,
            gauge_ticker: Ticker::new("gauge", settings.frame_interval),
            rotation_ticker: Ticker::new("rotation", settings.rotation_interval),
            out,
            policy,
            frames_drawn: 0,
        };
        view.rotation_ticker.start();
        if view.state.gauge().phase() == GaugePhase::Settling {
            view.gauge_ticker.start();
        }
        info!("view mounted");
        view.draw()?;
        Ok(view)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn gauge_running(&self) -> bool {
        self.gauge_ticker.is_running()
    }

    pub fn rotation_running(&self) -> bool {
        self.rotation_ticker.is_running()
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Applies one user event. Returns false when the view should close.
    pub fn apply(&mut self, event: ViewEvent) -> Result<bool> {
        debug!(?event, "view event");
        match event {
            ViewEvent::SetTenure(months) => self.state.set_tenure(months),
            ViewEvent::SetMonthlyCharge(charge) => self.state.set_monthly_charge(charge),
            ViewEvent::SetContract(contract) => self.state.set_contract(contract),
            ViewEvent::Predict => {
                if self.state.predict() == GaugePhase::Settling {
                    self.gauge_ticker.start();
                }
                info!(score = self.state.prediction().score, "prediction updated");
            }
            ViewEvent::Quit => return Ok(false),
        }
        self.draw()?;
        Ok(true)
    }

    /// Services events and both timers until the view closes, then unmounts.
    ///
    /// The view closes on `Quit`, or once the event channel is closed and the
    /// gauge has settled.
    pub async fn run(&mut self, events: &mut mpsc::Receiver<ViewEvent>) -> Result<()> {
        let mut input_open = true;
        let outcome = loop {
            if !input_open && !self.gauge_ticker.is_running() {
                break Ok(());
            }
            tokio::select! {
                event = events.recv(), if input_open => match event {
                    Some(event) => match self.apply(event) {
                        Ok(true) => {}
                        Ok(false) => break Ok(()),
                        Err(err) => break Err(err),
                    },
                    None => {
                        debug!("input closed, waiting for gauge to settle");
                        input_open = false;
                    }
                },
                _ = self.gauge_ticker.tick() => {
                    if let Err(err) = self.on_gauge_frame() {
                        break Err(err);
                    }
                }
                _ = self.rotation_ticker.tick() => {
                    if let Err(err) = self.on_rotation_tick() {
                        break Err(err);
                    }
                }
            }
        };
        self.unmount();
        outcome
    }

    /// Releases both timers. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.gauge_ticker.stop();
        self.rotation_ticker.stop();
        info!(frames = self.frames_drawn, "view unmounted");
    }

    fn on_gauge_frame(&mut self) -> Result<()> {
        match self.state.tick_gauge() {
            GaugePhase::Settled => {
                self.gauge_ticker.stop();
                debug!(settled_at = self.state.gauge().target(), "gauge settled");
                self.draw()
            }
            GaugePhase::Settling if self.policy == RedrawPolicy::EveryFrame => self.draw(),
            GaugePhase::Settling => Ok(()),
        }
    }

    fn on_rotation_tick(&mut self) -> Result<()> {
        self.state.tick_rotation();
        if self.policy == RedrawPolicy::EveryFrame {
            self.draw()?;
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let frame = Frame::capture(&self.state);
        writeln!(self.out, "{}", text::to_text(&frame))?;
        self.out.flush()?;
        self.frames_drawn += 1;
        Ok(())
    }
}
