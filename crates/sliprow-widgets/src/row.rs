#![forbid(unsafe_code)]

//! Swipeable task row.
//!
//! A [`SwipeRow`] is one row of a task list: a draggable content layer
//! showing the task title over a backing surface that reveals a completion
//! tick at the left edge and a deletion cross at the right edge. Dragging
//! horizontally past the swipe threshold and releasing commits the
//! corresponding action; releasing short of it settles the row back to
//! rest. The title is editable in place through a [`LineEditor`].
//!
//! # Gesture lifecycle
//!
//! ```text
//! Idle → Armed → Dragging → Settling{Rest, Complete, Delete} → Idle
//!          ↘ Rejected (vertical-dominant or edit in progress)
//! ```
//!
//! A press arms the gesture. The first drag sample claims it only when the
//! movement is horizontal-dominant (`|dx| > |dy|`) and the text surface is
//! not focused; otherwise the gesture is rejected until release. The
//! release intent is recomputed from the cumulative translation on every
//! sample and committed only when the button is released.
//!
//! # Invariants
//!
//! 1. Intent is `Complete` iff `tx >= SWIPE_THRESHOLD` at release,
//!    `Delete` iff `tx <= -SWIPE_THRESHOLD`, `None` otherwise. The
//!    boundary uses `>=`, never float equality.
//! 2. Intent is never latched mid-gesture; every move sample recomputes it
//!    from scratch.
//! 3. Delegate callbacks fire at most once per settled gesture, inside
//!    [`SwipeRow::tick`].
//! 4. A new press supersedes any in-flight settle.

use std::time::Duration;

use sliprow_core::animation::{Animation, Fade, Parallel, Slide, ease_in_out};
use sliprow_core::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use sliprow_core::geometry::{Position, Rect};
use sliprow_render::cell::{Cell, PackedRgba, StyleFlags};
use sliprow_render::frame::Frame;
use sliprow_render::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::Widget;
use crate::editor::LineEditor;
use crate::theme::{RowIcon, RowTheme};

/// Affordance icon width in cells.
pub const ICON_WIDTH: u16 = 4;

/// Resting inset of an affordance icon from its row edge.
pub const ICON_OFFSET: u16 = ICON_WIDTH / 2;

/// Horizontal translation (cells) at which a release commits an action.
pub const SWIPE_THRESHOLD: f32 = (ICON_WIDTH * 2) as f32;

/// Duration of the settle animation after a release.
pub const SETTLE_DURATION: Duration = Duration::from_millis(200);

/// Duration of the strike/opacity transition when `completed` toggles.
pub const TOGGLE_DURATION: Duration = Duration::from_millis(150);

const COMPLETED_TEXT_OPACITY: f32 = 0.3;

/// Identifies a row to its delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(pub u64);

/// Snapshot of the task a row displays.
///
/// The owning list holds the authoritative task data; rows only ever see
/// snapshots through [`SwipeRow::configure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Task title.
    pub title: String,
    /// Whether the task is done.
    pub completed: bool,
}

impl Task {
    /// Create a pending task.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }

    /// Mark the task completed (builder).
    #[must_use]
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Observer for row outcomes and editing lifecycle.
///
/// All methods have default no-op bodies; implement only what the owner
/// cares about. The delegate is borrowed per call and never stored, so the
/// row cannot outlive its owner's interest in it. `()` implements the
/// trait for delegate-less use.
pub trait RowDelegate {
    /// Completion was toggled via swipe. `completed` is the new state.
    fn on_complete(&mut self, _row: RowId, _completed: bool) {}

    /// The row was swiped past the delete threshold and has settled
    /// off-screen; the owner should remove it.
    fn on_delete_requested(&mut self, _row: RowId) {}

    /// The text surface acquired focus.
    fn on_edit_begin(&mut self, _row: RowId) {}

    /// The title changed while editing.
    fn on_text_changed(&mut self, _row: RowId, _text: &str) {}

    /// The text surface lost focus.
    fn on_edit_end(&mut self, _row: RowId) {}
}

impl RowDelegate for () {}

/// The action a release would commit, recomputed on every drag sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseIntent {
    /// Toggle completion.
    Complete,
    /// Remove the row.
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettleKind {
    Rest,
    Complete,
    Delete,
}

#[derive(Debug, Clone, Copy)]
struct SettleState {
    kind: SettleKind,
    anim: Parallel<Slide, Fade>,
}

impl SettleState {
    fn new(kind: SettleKind, from: f32, to: f32) -> Self {
        Self {
            kind,
            anim: Parallel::new(Slide::new(from, to, SETTLE_DURATION), Fade::new(SETTLE_DURATION)),
        }
    }

    fn position(&self) -> f32 {
        self.anim.first().position()
    }

    fn fade_value(&self) -> f32 {
        self.anim.second().value()
    }
}

#[derive(Debug, Clone, Copy)]
enum GesturePhase {
    Idle,
    Armed { origin: Position },
    Rejected,
    Dragging { origin_x: u16, tx: f32 },
    Settling(SettleState),
}

/// Normalized swipe progress for a translation: `min(1, |tx| / threshold)`.
fn fraction_for(tx: f32) -> f32 {
    (tx.abs() / SWIPE_THRESHOLD).min(1.0)
}

/// Release intent for a translation. `>=` at the boundary.
fn intent_for(tx: f32) -> Option<ReleaseIntent> {
    if tx >= SWIPE_THRESHOLD {
        Some(ReleaseIntent::Complete)
    } else if tx <= -SWIPE_THRESHOLD {
        Some(ReleaseIntent::Delete)
    } else {
        None
    }
}

/// Strike preview while dragging.
///
/// Rightward drags strike (or un-strike, when already completed) the text
/// proportionally; leftward drags snap to the committed end state.
fn preview_strike(completed: bool, tx: f32, intent: Option<ReleaseIntent>) -> f32 {
    let fraction = fraction_for(tx);
    if !completed {
        if tx > 0.0 {
            fraction
        } else if intent == Some(ReleaseIntent::Complete) {
            0.0
        } else {
            1.0
        }
    } else if tx > 0.0 {
        1.0 - fraction
    } else if intent == Some(ReleaseIntent::Complete) {
        1.0
    } else {
        0.0
    }
}

/// A swipeable, inline-editable task row.
pub struct SwipeRow {
    id: RowId,
    text: String,
    completed: bool,
    editable: bool,
    background: Option<PackedRgba>,
    theme: RowTheme,
    editor: LineEditor,
    phase: GesturePhase,
    intent: Option<ReleaseIntent>,
    row_opacity: f32,
    toggle: Option<Fade>,
    focus_override: bool,
}

impl SwipeRow {
    /// Create a row with the default theme.
    pub fn new(id: RowId) -> Self {
        let theme = RowTheme::default();
        let mut row = Self {
            id,
            text: String::new(),
            completed: false,
            editable: false,
            background: None,
            theme,
            editor: LineEditor::new(),
            phase: GesturePhase::Idle,
            intent: None,
            row_opacity: 1.0,
            toggle: None,
            focus_override: false,
        };
        row.sync_editor_styles();
        row
    }

    /// Set the theme (builder).
    #[must_use]
    pub fn with_theme(mut self, theme: RowTheme) -> Self {
        self.theme = theme;
        self.sync_editor_styles();
        self
    }

    /// Set the editor placeholder shown while the title is empty (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        let placeholder_style = Style::new().fg(self.theme.text_placeholder);
        self.editor = std::mem::take(&mut self.editor)
            .with_placeholder(placeholder)
            .with_placeholder_style(placeholder_style);
        self
    }

    fn sync_editor_styles(&mut self) {
        self.editor = std::mem::take(&mut self.editor)
            .with_style(Style::new().fg(self.theme.text))
            .with_placeholder_style(Style::new().fg(self.theme.text_placeholder));
    }

    // --- Accessors ---

    /// The row's identifier.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Current title text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the task is completed.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Effective editability (`requested && !completed`).
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Whether the text surface currently has focus.
    pub fn is_editing(&self) -> bool {
        self.editor.focused()
    }

    /// Background color override for the content layer.
    pub fn background(&self) -> Option<PackedRgba> {
        self.background
    }

    /// Override the content layer background color.
    pub fn set_background(&mut self, color: PackedRgba) {
        self.background = Some(color);
    }

    // --- Owner-facing lifecycle ---

    /// Overwrite `text` and `completed` from a task snapshot.
    ///
    /// Pure visual sync: no delegate notifications, no animation.
    pub fn configure(&mut self, task: &Task) {
        self.text = task.title.clone();
        self.editor.set_value(task.title.as_str());
        self.editor.set_focused(false);
        self.completed = task.completed;
        if task.completed {
            self.editable = false;
        }
        self.toggle = None;
    }

    /// Set the completed state directly.
    ///
    /// Idempotent state→visual mapping: strikethrough, overlay visibility,
    /// and text opacity follow; editing is disabled while completed. No
    /// transition animation and no delegate notification.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        if completed {
            self.editable = false;
            self.editor.set_focused(false);
        }
        self.toggle = None;
    }

    /// Request editability. The effective value is
    /// `requested && !completed`.
    pub fn set_editable(&mut self, requested: bool) {
        self.editable = requested && !self.completed;
    }

    /// Reset transient visual state before this row instance is reused for
    /// a different task.
    ///
    /// Restores opacity to 1 and the content offset to 0 regardless of any
    /// drag or settle in progress; stale offsets must not leak into the
    /// next task's initial display.
    pub fn prepare_for_reuse(&mut self) {
        self.row_opacity = 1.0;
        self.phase = GesturePhase::Idle;
        self.intent = None;
        self.toggle = None;
        self.focus_override = false;
        self.editor.set_focused(false);
    }

    // --- Editing lifecycle ---

    /// Begin editing the title.
    ///
    /// Requires effective editability (or the one-shot focus override).
    /// Fires `on_edit_begin` when focus is acquired. Returns whether the
    /// editor is focused afterwards.
    pub fn begin_editing(&mut self, delegate: &mut dyn RowDelegate) -> bool {
        if self.editor.focused() {
            return true;
        }
        if !(self.editable || self.focus_override) {
            return false;
        }
        self.editor.set_value(self.text.as_str());
        self.editor.set_focused(true);
        #[cfg(feature = "tracing")]
        tracing::debug!(row = self.id.0, "edit begin");
        delegate.on_edit_begin(self.id);
        true
    }

    /// End editing, committing the editor's value to the title.
    ///
    /// Fires `on_edit_end` if editing was active; no-op otherwise.
    pub fn end_editing(&mut self, delegate: &mut dyn RowDelegate) {
        if !self.editor.focused() {
            return;
        }
        self.editor.set_focused(false);
        self.text = self.editor.value().to_string();
        #[cfg(feature = "tracing")]
        tracing::debug!(row = self.id.0, "edit end");
        delegate.on_edit_end(self.id);
    }

    /// Temporarily permit focus acquisition even when not editable, then
    /// revert immediately.
    ///
    /// Returns whether editing began.
    pub fn request_focus_override(&mut self, delegate: &mut dyn RowDelegate) -> bool {
        self.focus_override = true;
        let began = self.begin_editing(delegate);
        self.focus_override = false;
        began
    }

    // --- Event handling ---

    /// Handle a terminal event delivered by the owner.
    ///
    /// `area` is the row's current on-screen rectangle. Returns `true` if
    /// the row's state changed and it should be redrawn.
    pub fn handle_event(
        &mut self,
        event: &Event,
        area: Rect,
        delegate: &mut dyn RowDelegate,
    ) -> bool {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(*mouse, area, delegate),
            Event::Focus(false) => {
                if self.editor.focused() {
                    self.end_editing(delegate);
                    true
                } else {
                    false
                }
            }
            Event::Key(_) | Event::Paste(_) if self.editor.focused() => {
                self.handle_edit_event(event, delegate)
            }
            _ => false,
        }
    }

    fn handle_edit_event(&mut self, event: &Event, delegate: &mut dyn RowDelegate) -> bool {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && matches!(key.code, KeyCode::Enter | KeyCode::Escape)
        {
            self.end_editing(delegate);
            return true;
        }
        let changed = self.editor.handle_event(event);
        if changed && self.editor.value() != self.text {
            self.text = self.editor.value().to_string();
            delegate.on_text_changed(self.id, &self.text);
        }
        changed
    }

    fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        area: Rect,
        delegate: &mut dyn RowDelegate,
    ) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !area.contains(mouse.x, mouse.y) {
                    return false;
                }
                // A new press supersedes any in-flight settle.
                self.intent = None;
                self.phase = GesturePhase::Armed {
                    origin: Position::new(mouse.x, mouse.y),
                };
                true
            }
            MouseEventKind::Drag(MouseButton::Left) => self.handle_drag(mouse, delegate),
            MouseEventKind::Up(MouseButton::Left) => self.handle_release(area, delegate),
            _ => false,
        }
    }

    fn handle_drag(&mut self, mouse: MouseEvent, delegate: &mut dyn RowDelegate) -> bool {
        match self.phase {
            GesturePhase::Armed { origin } => {
                let (dx, dy) = origin.delta_to(Position::new(mouse.x, mouse.y));
                if dx.abs() <= dy.abs() || self.editor.focused() {
                    self.phase = GesturePhase::Rejected;
                    return false;
                }
                self.end_editing(delegate);
                self.intent = None;
                #[cfg(feature = "tracing")]
                tracing::debug!(row = self.id.0, dx, dy, "swipe claimed");
                self.apply_translation(origin.x, dx as f32);
                true
            }
            GesturePhase::Dragging { origin_x, .. } => {
                let tx = mouse.x as f32 - origin_x as f32;
                self.apply_translation(origin_x, tx);
                true
            }
            _ => false,
        }
    }

    fn apply_translation(&mut self, origin_x: u16, tx: f32) {
        self.intent = intent_for(tx);
        self.phase = GesturePhase::Dragging { origin_x, tx };
        #[cfg(feature = "tracing")]
        tracing::trace!(row = self.id.0, tx, intent = ?self.intent, "swipe sample");
    }

    fn handle_release(&mut self, area: Rect, delegate: &mut dyn RowDelegate) -> bool {
        match self.phase {
            GesturePhase::Armed { .. } => {
                // Press released without movement: a tap begins editing.
                self.phase = GesturePhase::Idle;
                if self.editable && !self.editor.focused() {
                    self.begin_editing(delegate)
                } else {
                    false
                }
            }
            GesturePhase::Rejected => {
                self.phase = GesturePhase::Idle;
                false
            }
            GesturePhase::Dragging { tx, .. } => {
                self.settle(tx, area);
                true
            }
            _ => false,
        }
    }

    fn settle(&mut self, tx: f32, area: Rect) {
        let intent = intent_for(tx);
        self.intent = intent;
        let settle = match intent {
            Some(ReleaseIntent::Complete) => SettleState::new(SettleKind::Complete, tx, 0.0),
            Some(ReleaseIntent::Delete) => {
                let offscreen = -((area.width.max(1) + ICON_WIDTH) as f32);
                SettleState::new(SettleKind::Delete, tx, offscreen)
            }
            None => SettleState::new(SettleKind::Rest, tx, 0.0),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(row = self.id.0, tx, kind = ?settle.kind, "swipe released");
        self.phase = GesturePhase::Settling(settle);
    }

    /// Advance settle and toggle animations by `dt`.
    ///
    /// Outcome callbacks (`on_complete`, `on_delete_requested`) fire here,
    /// once, when the corresponding settle finishes.
    pub fn tick(&mut self, dt: Duration, delegate: &mut dyn RowDelegate) {
        if let Some(toggle) = &mut self.toggle {
            toggle.tick(dt);
        }
        if self.toggle.is_some_and(|t| t.is_complete()) {
            self.toggle = None;
        }

        let GesturePhase::Settling(mut settle) = self.phase else {
            return;
        };
        settle.anim.tick(dt);
        let done = settle.anim.is_complete();
        self.phase = GesturePhase::Settling(settle);
        if !done {
            return;
        }

        // Settle finished: icons return to resting offsets with the phase.
        self.phase = GesturePhase::Idle;
        self.intent = None;
        match settle.kind {
            SettleKind::Rest => {}
            SettleKind::Complete => {
                self.completed = !self.completed;
                if self.completed {
                    self.editable = false;
                }
                self.toggle = Some(Fade::new(TOGGLE_DURATION).easing(ease_in_out));
                #[cfg(feature = "tracing")]
                tracing::debug!(row = self.id.0, completed = self.completed, "completion toggled");
                delegate.on_complete(self.id, self.completed);
            }
            SettleKind::Delete => {
                self.row_opacity = 0.0;
                #[cfg(feature = "tracing")]
                tracing::debug!(row = self.id.0, "delete requested");
                delegate.on_delete_requested(self.id);
            }
        }
    }

    // --- Visual state queries ---

    /// Horizontal offset of the content layer in cells.
    pub fn content_offset(&self) -> f32 {
        match self.phase {
            GesturePhase::Dragging { tx, .. } => tx,
            GesturePhase::Settling(settle) => settle.position(),
            _ => 0.0,
        }
    }

    /// Normalized swipe progress, `min(1, |offset| / threshold)`.
    pub fn swipe_fraction(&self) -> f32 {
        match self.phase {
            GesturePhase::Dragging { .. } | GesturePhase::Settling(_) => {
                fraction_for(self.content_offset())
            }
            _ => 0.0,
        }
    }

    /// The action a release would commit right now.
    pub fn release_intent(&self) -> Option<ReleaseIntent> {
        self.intent
    }

    /// Affordance icon opacity; follows the swipe fraction.
    pub fn icon_opacity(&self) -> f32 {
        self.swipe_fraction()
    }

    /// Extra outward icon travel beyond the resting offset, in cells.
    pub fn icon_travel(&self) -> u16 {
        let excess = self.content_offset().abs() - SWIPE_THRESHOLD;
        if excess > 0.0 { excess.round() as u16 } else { 0 }
    }

    /// Whether the completion overlay is visible.
    pub fn overlay_visible(&self) -> bool {
        if self.completed {
            self.intent != Some(ReleaseIntent::Complete)
        } else {
            self.intent == Some(ReleaseIntent::Complete)
        }
    }

    fn previewing(&self) -> bool {
        match self.phase {
            GesturePhase::Dragging { .. } => true,
            GesturePhase::Settling(settle) => settle.kind != SettleKind::Rest,
            _ => false,
        }
    }

    /// Fraction of the title currently struck through, in [0, 1].
    pub fn strike_fraction(&self) -> f32 {
        // The drag preview already left the strike at its committed value,
        // so the toggle transition holds it there.
        if self.toggle.is_some() {
            return if self.completed { 1.0 } else { 0.0 };
        }
        let at_rest = if self.completed { 1.0 } else { 0.0 };
        match self.phase {
            GesturePhase::Dragging { tx, .. } => preview_strike(self.completed, tx, self.intent),
            // A committed settle keeps the preview frozen at its end state
            // until the toggle transition takes over.
            GesturePhase::Settling(settle) => match settle.kind {
                SettleKind::Rest => at_rest,
                SettleKind::Complete | SettleKind::Delete => {
                    if self.completed {
                        0.0
                    } else {
                        1.0
                    }
                }
            },
            _ => at_rest,
        }
    }

    /// Title opacity: 0.3 while completed, 1.0 otherwise, with previews
    /// while a swipe is in flight and interpolation while toggling.
    pub fn text_opacity(&self) -> f32 {
        if let Some(toggle) = self.toggle {
            // Completing dims the title from 1.0 to 0.3 over the toggle;
            // un-completing was already previewed at full opacity.
            let t = toggle.value();
            return if self.completed {
                1.0 + (COMPLETED_TEXT_OPACITY - 1.0) * t
            } else {
                1.0
            };
        }
        if self.completed && self.previewing() {
            if self.intent == Some(ReleaseIntent::Complete) {
                1.0
            } else {
                COMPLETED_TEXT_OPACITY
            }
        } else if self.completed {
            COMPLETED_TEXT_OPACITY
        } else {
            1.0
        }
    }

    /// Whole-row opacity; fades to 0 during the delete settle.
    pub fn row_opacity(&self) -> f32 {
        if let GesturePhase::Settling(settle) = self.phase
            && settle.kind == SettleKind::Delete
        {
            return 1.0 - settle.fade_value();
        }
        self.row_opacity
    }

    /// Whether a settle animation is in flight.
    pub fn is_settling(&self) -> bool {
        matches!(self.phase, GesturePhase::Settling(_))
    }

    // --- Rendering ---

    fn render_icons(&self, area: Rect, y: u16, frame: &mut Frame) {
        let opacity = self.icon_opacity();
        if opacity <= 0.0 {
            return;
        }
        let travel = self.icon_travel();
        let theme = &self.theme;

        let tick_x = area.x.saturating_add(ICON_OFFSET).saturating_add(travel);
        if area.contains(tick_x, y) {
            let color = if self.intent == Some(ReleaseIntent::Complete) {
                theme.icon_accent(RowIcon::Complete)
            } else {
                theme.icon
            };
            frame.buffer.set(
                tick_x,
                y,
                Cell::styled(
                    theme.icon_char(RowIcon::Complete),
                    color.with_opacity(opacity),
                    theme.background,
                ),
            );
        }

        let cross_x = area
            .right()
            .saturating_sub(1)
            .saturating_sub(ICON_OFFSET)
            .saturating_sub(travel);
        if area.contains(cross_x, y) {
            let color = if self.intent == Some(ReleaseIntent::Delete) {
                theme.icon_accent(RowIcon::Delete)
            } else {
                theme.icon
            };
            frame.buffer.set(
                cross_x,
                y,
                Cell::styled(
                    theme.icon_char(RowIcon::Delete),
                    color.with_opacity(opacity),
                    theme.background,
                ),
            );
        }
    }

    fn render_content(&self, area: Rect, y: u16, frame: &mut Frame) {
        let offset = self.content_offset().round() as i32;
        let left = area.x as i32 + offset;
        let right = left + area.width as i32;
        let clip_left = left.max(area.x as i32);
        let clip_right = right.min(area.right() as i32);
        if clip_left >= clip_right {
            return;
        }

        let surface = if self.overlay_visible() {
            self.theme.complete
        } else {
            self.background.unwrap_or(self.theme.surface)
        };
        let content_area = Rect::new(
            clip_left as u16,
            area.y,
            (clip_right - clip_left) as u16,
            area.height,
        );
        frame
            .buffer
            .fill_rect(content_area, Cell::styled(' ', self.theme.text, surface));

        // One cell of padding from the content layer's left edge.
        let text_origin = left + 1;
        if self.editor.focused() {
            let editor_x = text_origin.clamp(clip_left, clip_right);
            let editor_area = Rect::new(editor_x as u16, y, (clip_right - editor_x) as u16, 1);
            self.editor.render(editor_area, frame);
            return;
        }

        let text_opacity = self.text_opacity();
        let fg = self.theme.text.with_opacity(text_opacity);
        let graphemes: Vec<&str> = self.text.graphemes(true).collect();
        let struck = (self.strike_fraction() * graphemes.len() as f32).ceil() as usize;

        let mut x = text_origin;
        for (i, g) in graphemes.iter().enumerate() {
            let w = UnicodeWidthStr::width(*g) as i32;
            if w == 0 {
                continue;
            }
            if x + w > clip_right {
                break;
            }
            if x >= clip_left
                && let Some(c) = g.chars().next()
            {
                let mut cell = Cell::styled(c, fg, surface);
                if i < struck {
                    cell.attrs |= StyleFlags::STRIKETHROUGH;
                }
                frame.buffer.set(x as u16, y, cell);
            }
            x += w;
        }

        if text_opacity < 1.0 {
            crate::set_style_area(
                &mut frame.buffer,
                content_area,
                Style::new().attrs(StyleFlags::DIM),
            );
        }
    }
}

impl Widget for SwipeRow {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "SwipeRow",
            row = self.id.0,
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let opacity = self.row_opacity();
        if opacity <= 0.0 {
            return;
        }

        frame.buffer.push_opacity(opacity);
        let y = area.y + area.height / 2;
        frame.buffer.fill_rect(
            area,
            Cell::styled(' ', self.theme.text, self.theme.background),
        );
        self.render_icons(area, y, frame);
        self.render_content(area, y, frame);
        frame.buffer.pop_opacity();
    }
}
