//! Display controller
//!
//! Single owner of the render surface, the power state and the composer.
//! Every entry point runs to completion; the firmware calls them from one
//! task so event handlers and deferred tasks never interleave.

use crate::compose::{ImageSet, StatusComposer};
use crate::config::PanelConfig;
use crate::state::{DisplayState, Event, PowerTransition, Timestamp};
use crate::traits::{
    DeferredTask, DeferredTimer, ImageLoader, IndicatorLeds, KeyboardStatus, RenderSurface,
    Reschedule, TaskToken,
};

/// Status display controller
pub struct DisplayController<S: RenderSurface> {
    surface: S,
    state: DisplayState,
    composer: StatusComposer<S::Image>,
    config: PanelConfig,
    idle_task: Option<TaskToken>,
    bar_task: Option<TaskToken>,
    shut_down: bool,
}

impl<S: RenderSurface> DisplayController<S> {
    /// Create a controller around an initialized, powered surface
    ///
    /// Nothing is drawn until [`DisplayController::on_init`].
    pub fn new(surface: S, mut config: PanelConfig, now: Timestamp) -> Self {
        // A zero period would re-arm a task at the instant it ran
        let timing = &mut config.timing;
        timing.sleep_check_interval_ms = timing.sleep_check_interval_ms.max(1);
        timing.bar_redraw_interval_ms = timing.bar_redraw_interval_ms.max(1);

        Self {
            surface,
            state: DisplayState::new(now, &config.timing),
            composer: StatusComposer::new(ImageSet::empty(), &config.wpm),
            config,
            idle_task: None,
            bar_task: None,
            shut_down: false,
        }
    }

    /// Load images, draw the full screen and register the deferred tasks
    pub fn on_init<L, K, T>(&mut self, loader: &mut L, timer: &mut T, status: &K, now: Timestamp)
    where
        L: ImageLoader<S::Image>,
        K: KeyboardStatus,
        T: DeferredTimer,
    {
        let images = ImageSet::load_all(loader);
        info!(
            "status display init: {}/{} images",
            images.loaded(),
            crate::traits::AssetId::COUNT
        );
        self.composer = StatusComposer::new(images, &self.config.wpm);

        // Boot counts as activity
        let transition = self.state.on_activity(now);
        self.apply(transition);
        self.composer.redraw_all(&mut self.surface, status);

        let timing = &self.config.timing;
        self.idle_task =
            timer.register_periodic(DeferredTask::IdleCheck, timing.sleep_check_interval_ms);
        self.bar_task =
            timer.register_periodic(DeferredTask::BarRedraw, timing.bar_redraw_interval_ms);
        if self.idle_task.is_none() || self.bar_task.is_none() {
            warn!("deferred timer full, display tasks missing");
        }
    }

    /// Event bridge entry point
    ///
    /// `status` must already reflect the event.
    pub fn handle_event<K, T, D>(
        &mut self,
        event: Event,
        status: &K,
        timer: &mut T,
        leds: &mut D,
        now: Timestamp,
    ) where
        K: KeyboardStatus,
        T: DeferredTimer,
        D: IndicatorLeds,
    {
        if self.shut_down {
            return;
        }

        if event.is_activity() {
            self.on_activity(now);
        }

        match event {
            Event::Key { .. } => {
                if let Some(token) = self.bar_task {
                    timer.reschedule_soon(token);
                }
            }
            Event::LayerChange(layers) => {
                self.composer.on_layer_change(&mut self.surface, layers);
            }
            Event::DefaultLayerChange(default_layers) => {
                self.composer
                    .on_default_layer_change(&mut self.surface, default_layers);
            }
            Event::LockChange(locks) => {
                self.composer.on_lock_state_change(&mut self.surface, locks);
            }
            Event::RgbChange(rgb) => {
                self.composer.on_rgb_change(&mut self.surface, rgb);
            }
            Event::Suspend => self.on_suspend(),
            Event::Wake => self.on_wake(),
            Event::Shutdown => self.on_shutdown(leds),
        }
    }

    /// Record user activity, re-powering the panel if it slept
    pub fn on_activity(&mut self, now: Timestamp) {
        if self.shut_down {
            return;
        }
        let transition = self.state.on_activity(now);
        self.apply(transition);
    }

    /// Idle check callback; returns the delay until the next check
    pub fn on_idle_check_tick(&mut self, now: Timestamp) -> Reschedule {
        if self.shut_down {
            return Reschedule::Cancel;
        }
        let transition = self.state.on_idle_check_tick(now);
        if transition == PowerTransition::PowerOff {
            info!("display idle for {} ms, sleeping", self.state.idle_for(now));
        }
        self.apply(transition);
        Reschedule::After(self.state.check_interval_ms())
    }

    /// Bar redraw callback; returns the delay until the next redraw
    pub fn on_periodic_bar_tick<K: KeyboardStatus>(&mut self, status: &K) -> Reschedule {
        if self.shut_down {
            return Reschedule::Cancel;
        }
        if self.state.is_powered() {
            self.composer.on_periodic_bar_tick(&mut self.surface, status);
        }
        Reschedule::After(self.config.timing.bar_redraw_interval_ms)
    }

    /// Dispatch a due deferred task
    pub fn run_deferred<K: KeyboardStatus>(
        &mut self,
        task: DeferredTask,
        status: &K,
        now: Timestamp,
    ) -> Reschedule {
        match task {
            DeferredTask::IdleCheck => self.on_idle_check_tick(now),
            DeferredTask::BarRedraw => self.on_periodic_bar_tick(status),
        }
    }

    /// Host suspend: power the panel off
    pub fn on_suspend(&mut self) {
        if self.shut_down {
            return;
        }
        info!("host suspend");
        let transition = self.state.on_suspend();
        self.apply(transition);
    }

    /// Host wake: power the panel back on
    ///
    /// Nothing is redrawn; the panel keeps its RAM while off. The activity
    /// timestamp is left alone, so a long suspend can be followed by the
    /// next idle check powering off again.
    pub fn on_wake(&mut self) {
        if self.shut_down {
            return;
        }
        info!("host wake");
        let transition = self.state.on_wake();
        self.apply(transition);
    }

    /// Imminent power loss: panel off, indicators dark, ignore everything after
    pub fn on_shutdown<D: IndicatorLeds>(&mut self, leds: &mut D) {
        if self.shut_down {
            return;
        }
        info!("display shutdown");
        self.shut_down = true;
        self.state.on_suspend();
        // Sent whatever the logical power state
        if let Err(e) = self.surface.power(false) {
            warn!("power off failed: {}", e);
        }
        leds.blank_all();
    }

    /// Whether the panel is considered powered
    pub fn is_powered(&self) -> bool {
        self.state.is_powered()
    }

    /// Whether [`DisplayController::on_shutdown`] ran
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Power and activity bookkeeping
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Render surface, for inspection
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Render surface, for direct access outside the status screen
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Tokens of the idle check and bar redraw tasks
    pub fn task_tokens(&self) -> (Option<TaskToken>, Option<TaskToken>) {
        (self.idle_task, self.bar_task)
    }

    fn apply(&mut self, transition: PowerTransition) {
        let on = match transition {
            PowerTransition::None => return,
            PowerTransition::PowerOn => true,
            PowerTransition::PowerOff => false,
        };
        debug!("display power {}", on);
        // Logical state has already moved on; a failed command is only logged
        if let Err(e) = self.surface.power(on) {
            warn!("display power command failed: {}", e);
        }
    }
}
