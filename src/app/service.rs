//! Boot sequencer: the hexagonal core.
//!
//! [`BootSequencer`] owns the lifecycle FSM and the boot configuration.
//! All I/O flows through port traits injected at call sites, so the whole
//! sequence is testable against a mock board with a virtual clock.
//!
//! ```text
//!  ConsolePort  ◀──┐
//!  IndicatorPort ◀─┤  BootSequencer  ──▶ EventSink
//!  DelayNs      ◀──┘  (FSM · config)
//! ```

use log::{debug, info};

use crate::config::BootConfig;
use crate::error::{Error, Result};
use crate::fsm::{Fsm, StateId};

use super::events::{AppEvent, BootReport};
use super::messages;
use super::ports::{ConsolePort, DelayNs, EventSink, IndicatorPort, Level};

// ───────────────────────────────────────────────────────────────
// BootSequencer
// ───────────────────────────────────────────────────────────────

/// Runs the one-shot boot sequence, then parks in the idle loop.
pub struct BootSequencer {
    config: BootConfig,
    fsm: Fsm,
    attempted: bool,
}

impl BootSequencer {
    pub fn new(config: BootConfig) -> Self {
        Self {
            config,
            fsm: Fsm::new(),
            attempted: false,
        }
    }

    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Idle-loop iterations completed so far.
    pub fn idle_ticks(&self) -> u64 {
        self.fsm.idle_ticks()
    }

    // ── Boot ──────────────────────────────────────────────────

    /// Run the boot sequence exactly once.
    ///
    /// 1. open console → settle delay
    /// 2. configure LED output → drive LOW
    /// 3. banner
    /// 4. `blink_count` × (HIGH, on-delay, LOW, off-delay)
    /// 5. status lines → `Idle`
    ///
    /// The first port error aborts the sequence; nothing is retried. A
    /// second call is rejected whether or not the first one succeeded.
    pub fn run<B>(&mut self, board: &mut B, sink: &mut impl EventSink) -> Result<BootReport>
    where
        B: ConsolePort + IndicatorPort + DelayNs,
    {
        if self.attempted {
            return Err(Error::InvalidState("boot sequence already ran"));
        }
        self.attempted = true;
        self.config.validate()?;

        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        let mut report = BootReport::default();

        // 1. Console, then give the host terminal time to attach.
        board.open(self.config.baud_rate)?;
        Self::pause(board, &mut report, self.config.console_settle_ms);

        // 2. LED idles LOW.
        board.configure_output()?;
        Self::drive(board, &mut report, Level::Low)?;

        // 3. Banner.
        Self::say(board, &mut report, "")?;
        Self::say(board, &mut report, messages::BANNER_TITLE)?;
        Self::say(board, &mut report, messages::INITIALIZING)?;

        // 4. Startup flashes.
        for index in 0..self.config.blink_count {
            Self::drive(board, &mut report, Level::High)?;
            Self::pause(board, &mut report, self.config.blink_on_ms);
            Self::drive(board, &mut report, Level::Low)?;
            Self::pause(board, &mut report, self.config.blink_off_ms);
            report.pulses += 1;
            sink.emit(&AppEvent::Pulse { index });
        }

        // 5. Status.
        let ready = messages::ready_line(report.pulses);
        Self::say(board, &mut report, ready.as_str())?;
        Self::say(board, &mut report, messages::INIT_SUCCESS)?;
        Self::say(board, &mut report, messages::READY_FOR_SENSOR)?;

        let from = self.fsm.transition(StateId::Idle)?;
        sink.emit(&AppEvent::StateChanged {
            from,
            to: StateId::Idle,
        });
        info!(
            "Boot complete: {} pulses, {} lines, {} ms scheduled",
            report.pulses, report.lines_written, report.scheduled_ms
        );
        sink.emit(&AppEvent::BootComplete(report.clone()));
        Ok(report)
    }

    // ── Idle ──────────────────────────────────────────────────

    /// One idle-loop iteration: sleep `idle_period_ms`, nothing else.
    pub fn idle_tick(&mut self, delay: &mut impl DelayNs) -> Result<()> {
        self.fsm.tick_idle()?;
        delay.delay_ms(self.config.idle_period_ms);
        Ok(())
    }

    /// One pass of the parked loop.
    ///
    /// If the boot sequence aborted, the FSM never reached `Idle`; the task
    /// still sleeps at the idle cadence so the scheduler keeps running.
    pub fn idle_step(&mut self, delay: &mut impl DelayNs) {
        if self.idle_tick(delay).is_err() {
            delay.delay_ms(self.config.idle_period_ms.max(1));
        }
    }

    /// Park the task forever. Only a reset leaves this loop.
    pub fn idle_forever(&mut self, delay: &mut impl DelayNs) -> ! {
        loop {
            self.idle_step(delay);
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn pause(delay: &mut impl DelayNs, report: &mut BootReport, ms: u32) {
        delay.delay_ms(ms);
        report.scheduled_ms = report.scheduled_ms.saturating_add(ms);
    }

    fn drive(
        led: &mut impl IndicatorPort,
        report: &mut BootReport,
        level: Level,
    ) -> Result<()> {
        led.set_level(level)?;
        report
            .level_trace
            .push(level)
            .map_err(|_| Error::InvalidState("level trace full"))?;
        debug!("LED -> {:?}", level);
        Ok(())
    }

    fn say(console: &mut impl ConsolePort, report: &mut BootReport, line: &str) -> Result<()> {
        console.write_line(line)?;
        report.lines_written += 1;
        Ok(())
    }
}
