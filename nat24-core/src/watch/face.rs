//! The watch face state owner

use crate::anim::{
    percentage_of, Activity, AnimationError, AnimationHandler, AnimationProgress, Animator,
};
use crate::angle::{ClockTime, WallTime};
use crate::config::FaceConfig;
use crate::geometry::Rect;
use crate::render::{render_face, render_indicators, RenderScale};
use crate::traits::Canvas;

use super::events::{FaceEvent, Layers};

/// Animation slots; the entrance uses three
pub const MAX_ANIMATIONS: usize = 4;

/// Entrance animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Entrance {
    /// Face grows from the start radius to full size
    Radius,
    /// Notches spread out from the center
    NotchSpacing,
    /// Hour indicator sweeps from noon to the current hour
    HourSweep,
}

/// Screen areas derived from the display size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    /// Square face area, `side × side` with `side = min(width, height)`,
    /// centered horizontally
    pub face: Rect,
    /// Remainder below the face
    pub label: Rect,
}

impl Layout {
    pub const fn new(width: u32, height: u32) -> Self {
        let side = if width < height { width } else { height };
        Self {
            face: Rect::new(((width - side) / 2) as i32, 0, side, side),
            label: Rect::new(0, side as i32, width, height - side),
        }
    }
}

/// Everything the animation callbacks write to
struct FaceState {
    time: ClockTime,
    scale: RenderScale,
    animated_hour_angle: i32,
    dirty: Layers,
}

impl AnimationHandler<Entrance> for FaceState {
    fn update(&mut self, key: Entrance, progress: AnimationProgress) {
        match key {
            Entrance::Radius => {
                self.scale.apply_radius(progress);
                self.dirty.base = true;
                self.dirty.indicators = true;
            }
            Entrance::NotchSpacing => {
                self.scale.apply_notch_spacing(progress);
                self.dirty.base = true;
            }
            Entrance::HourSweep => {
                self.animated_hour_angle = percentage_of(progress, self.time.hour_angle);
                self.dirty.indicators = true;
            }
        }
    }

    // The indicator switches between live and animated angle
    fn started(&mut self, _key: Entrance) {
        self.dirty.indicators = true;
    }

    fn stopped(&mut self, _key: Entrance) {
        self.dirty.indicators = true;
    }
}

/// Watch face
///
/// Owns the clock state, the render scale and the entrance animator.
/// Events only mark layers dirty; `render` repaints once per batch.
pub struct WatchFace {
    config: FaceConfig,
    layout: Layout,
    state: FaceState,
    animator: Animator<Entrance, MAX_ANIMATIONS>,
}

impl WatchFace {
    /// Create a face for a `width × height` display showing `now`
    ///
    /// With the entrance enabled the face starts collapsed and waits for
    /// [`start_entrance`](Self::start_entrance).
    pub fn new(width: u32, height: u32, config: FaceConfig, now: WallTime) -> Self {
        let layout = Layout::new(width, height);
        let scale = if config.entrance.enabled {
            RenderScale::entrance(layout.face.width)
        } else {
            RenderScale::settled(layout.face.width)
        };

        Self {
            config,
            layout,
            state: FaceState {
                time: ClockTime::at(now, config.tick_unit, config.clock_style),
                scale,
                animated_hour_angle: 0,
                dirty: Layers::ALL,
            },
            animator: Animator::new(config.activity),
        }
    }

    /// Schedule the entrance animations at `now_ms`
    ///
    /// Does nothing when the entrance is disabled.
    pub fn start_entrance(&mut self, now_ms: u64) -> Result<(), AnimationError> {
        let entrance = self.config.entrance;
        if !entrance.enabled {
            return Ok(());
        }

        self.animator.schedule(Entrance::Radius, entrance.radius, now_ms)?;
        self.animator
            .schedule(Entrance::NotchSpacing, entrance.notch_spacing, now_ms)?;
        self.animator
            .schedule(Entrance::HourSweep, entrance.hour_sweep, now_ms)
    }

    /// Route an event
    pub fn handle(&mut self, event: FaceEvent) {
        match event {
            FaceEvent::Tick(time) => self.on_tick(time),
            FaceEvent::Frame(now_ms) => {
                self.on_frame(now_ms);
            }
        }
    }

    /// New time from the tick source
    pub fn on_tick(&mut self, time: WallTime) {
        self.state.time = ClockTime::at(time, self.config.tick_unit, self.config.clock_style);
        self.state.dirty.indicators = true;
        self.state.dirty.label = true;
    }

    /// Advance animations to `now_ms`
    ///
    /// Returns the number of animation updates applied.
    pub fn on_frame(&mut self, now_ms: u64) -> usize {
        self.animator.advance(now_ms, &mut self.state)
    }

    /// Repaint dirty content onto a single framebuffer
    ///
    /// A framebuffer cannot composite, so the indicators are always drawn
    /// over a freshly painted face. The label is left to the host; the
    /// returned set tells it whether to redraw.
    pub fn render<C: Canvas>(&mut self, canvas: &mut C) -> Result<Layers, C::Error> {
        let dirty = self.state.dirty;
        if !dirty.any() {
            return Ok(Layers::NONE);
        }

        if dirty.base || dirty.indicators {
            self.draw_face(canvas)?;
            self.draw_indicators(canvas)?;
        }

        self.state.dirty = Layers::NONE;
        Ok(dirty)
    }

    /// Repaint dirty layers onto separate canvases
    ///
    /// For hosts that composite the face and indicators themselves.
    pub fn render_layers<B, I>(
        &mut self,
        base: &mut B,
        indicators: &mut I,
    ) -> Result<Layers, LayerError<B::Error, I::Error>>
    where
        B: Canvas,
        I: Canvas,
    {
        let dirty = self.state.dirty;
        if dirty.base {
            self.draw_face(base).map_err(LayerError::Base)?;
        }
        if dirty.indicators {
            self.draw_indicators(indicators)
                .map_err(LayerError::Indicators)?;
        }

        self.state.dirty = Layers::NONE;
        Ok(dirty)
    }

    fn draw_face<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        render_face(
            canvas,
            self.layout.face.center(),
            &self.state.scale,
            self.config.notch_style,
        )
    }

    fn draw_indicators<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        render_indicators(
            canvas,
            self.layout.face.center(),
            &self.state.time,
            &self.state.scale,
            self.state.animated_hour_angle,
            self.animator.activity(),
        )
    }

    /// Layers marked since the last render
    pub fn dirty(&self) -> Layers {
        self.state.dirty
    }

    /// Check if animations are still scheduled (frames needed)
    pub fn needs_frames(&self) -> bool {
        self.animator.is_running()
    }

    /// Check if a lifecycle-tracked animation is active
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn activity(&self) -> Activity {
        self.animator.activity()
    }

    pub fn time(&self) -> &ClockTime {
        &self.state.time
    }

    /// Current time label
    pub fn label(&self) -> &str {
        self.state.time.label()
    }

    pub fn scale(&self) -> &RenderScale {
        &self.state.scale
    }

    pub fn animated_hour_angle(&self) -> i32 {
        self.state.animated_hour_angle
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }
}

/// Failure of one of the layer canvases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerError<B, I> {
    Base(B),
    Indicators(I),
}
