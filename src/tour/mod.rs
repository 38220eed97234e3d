// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

//! The tour state machine.
//!
//! Owns the ordered step list and the persisted cursor, and drives the
//! dialog/banner/tooltip presenters through [`TourSurface`]. The machine is
//! the only writer of the cursor and the only owner of the single open
//! dialog slot; every teardown here is total and safe to repeat.
//!
//! States: idle (never started) → running at some step index → complete
//! (`index == steps.len()`). Navigation past either end is defined as
//! `end()`, never an error.

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::model::{HostEvent, Skin, Step, TourConfig};
use crate::store::CursorStore;
use crate::ui::{
    BannerContext, BannerId, BannerSpec, ButtonAction, DialogBody, DialogButton, DialogId,
    DialogSpec, TooltipId, TooltipTheme, TooltipView,
};


const COMPLETED_TEXT: &str = "Congratulations, you've completed the tour!";
const WELCOME_TEXT: &str = "Welcome to the tour!";
const LEAVE_TITLE: &str = "Are you sure you want to leave the tour?";
const LEAVE_BODY: &str = "Your progress will be lost if you continue!";

/// Presenter seam the machine drives. Implemented by the terminal shell and
/// by a recording fake in tests; implementations never call back into the
/// machine.
pub trait TourSurface {
    fn render_banner(&mut self, spec: BannerSpec) -> BannerId;
    fn update_banner(&mut self, id: BannerId, text: String, context: BannerContext);
    fn remove_banner(&mut self, id: BannerId);

    fn open_dialog(&mut self, spec: DialogSpec) -> DialogId;
    /// Idempotent: closing an unknown or already-closed dialog is a no-op.
    fn close_dialog(&mut self, id: DialogId);

    fn show_tooltip(&mut self, spec: TooltipView) -> TooltipId;
    fn retheme_tooltip(&mut self, id: TooltipId, theme: TooltipTheme);
    /// Idempotent, like `close_dialog`.
    fn close_tooltip(&mut self, id: TooltipId);
}

/// Which flow the currently open machine-owned dialog belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogRole {
    Step,
    LeaveConfirm,
}

#[derive(Debug)]
pub struct Tour<S: TourSurface> {
    config: TourConfig,
    store: CursorStore,
    surface: S,
    active_step_index: usize,
    running: bool,
    current_skin: Skin,
    banner: Option<BannerId>,
    active_dialog: Option<(DialogId, DialogRole)>,
    active_tooltips: SmallVec<[TooltipId; 4]>,
}

impl<S: TourSurface> Tour<S> {
    pub fn new(config: TourConfig, store: CursorStore, surface: S) -> Self {
        let current_skin = config.skin();
        Self {
            config,
            store,
            surface,
            active_step_index: 0,
            running: false,
            current_skin,
            banner: None,
            active_dialog: None,
            active_tooltips: SmallVec::new(),
        }
    }

    pub fn steps(&self) -> &[Step] {
        self.config.steps()
    }

    pub fn active_step_index(&self) -> usize {
        self.active_step_index
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn current_skin(&self) -> Skin {
        self.current_skin
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn step_count(&self) -> usize {
        self.config.steps().len()
    }

    fn is_complete(&self, step_index: usize) -> bool {
        step_index >= self.step_count()
    }

    fn has_next_step(&self, step_index: usize) -> bool {
        step_index + 1 < self.step_count()
    }

    fn has_prev_step(&self, step_index: usize) -> bool {
        step_index > 0
    }

    /// Starts the tour: renders the banner and shows the resolved step.
    ///
    /// An explicit non-zero `step_index` wins; otherwise the last persisted
    /// cursor (clamped to the step range) is used. A resolved index at the
    /// completion boundary only updates the banner.
    pub fn start(&mut self, step_index: Option<usize>) {
        self.running = true;
        if self.banner.is_none() {
            self.banner = Some(self.surface.render_banner(BannerSpec {
                text: WELCOME_TEXT.to_owned(),
                context: BannerContext::NeedHelp,
            }));
        }

        let persisted = self.store.load().min(self.step_count());
        let index = step_index.filter(|&index| index != 0).unwrap_or(persisted);
        debug!(index, persisted, "tour started");

        if self.is_complete(index) {
            self.active_step_index = index;
            self.update_banner(index);
        } else {
            self.show_step(index);
        }
    }

    /// Proceed to the next step; at the last step this ends the tour.
    pub fn next(&mut self) {
        if self.has_next_step(self.active_step_index) {
            self.show_step(self.active_step_index + 1);
        } else {
            self.end();
        }
    }

    /// Move to the previous step; at the first step this ends the tour.
    pub fn prev(&mut self) {
        if self.has_prev_step(self.active_step_index) {
            self.show_step(self.active_step_index - 1);
        } else {
            self.end();
        }
    }

    /// Ends the tour: tears down step UI, persists the completion cursor,
    /// and flips the banner to its completed message. Idempotent.
    pub fn end(&mut self) {
        self.close_open_items();
        self.update_active_step(self.step_count());
        self.running = false;
        self.update_banner(self.active_step_index);
        debug!("tour ended");
    }

    /// Restarts from the first step.
    pub fn restart(&mut self) {
        self.running = true;
        self.show_step(0);
    }

    /// Re-renders the current step, or restarts when already complete.
    pub fn resume(&mut self) {
        if self.is_complete(self.active_step_index) {
            self.restart();
        } else if self.running {
            self.show_step(self.active_step_index);
        }
    }

    /// Host notification: advances only when running, a next step exists,
    /// and the *current* step's gate matches `event`. At most one advance
    /// per call; repeated events past the gated step are no-ops.
    pub fn notify(&mut self, event: HostEvent) {
        if !self.running || !self.has_next_step(self.active_step_index) {
            return;
        }
        let step = &self.config.steps()[self.active_step_index];
        if step.proceed_on_event() == Some(&event) {
            debug!(event = %event, index = self.active_step_index, "gate satisfied");
            self.next();
        }
    }

    /// Swaps the skin and re-themes any visible tooltips in place. Open
    /// dialogs are not rebuilt.
    pub fn change_skin(&mut self, skin: Skin) {
        self.current_skin = skin;
        let theme = TooltipTheme::for_skin(skin);
        for &tooltip in &self.active_tooltips {
            self.surface.retheme_tooltip(tooltip, theme);
        }
    }

    /// Routes a button press from the currently open machine-owned dialog.
    /// Unknown combinations are no-ops.
    pub fn dialog_action(&mut self, action: ButtonAction) {
        let Some((_, role)) = self.active_dialog else {
            return;
        };
        match (role, action) {
            (DialogRole::Step, ButtonAction::Next) => self.next(),
            (DialogRole::Step, ButtonAction::Prev) => self.prev(),
            (DialogRole::Step, ButtonAction::End) => self.end(),
            (DialogRole::Step, ButtonAction::TryItOut) => self.try_it_out(),
            (DialogRole::LeaveConfirm, ButtonAction::Leave) => {
                self.end();
                self.teardown_banner();
            }
            (DialogRole::LeaveConfirm, ButtonAction::Stay) => {
                // Declining leaves the tour untouched; re-show the step the
                // confirmation displaced.
                self.resume();
            }
            _ => {}
        }
    }

    /// The shell dismissed the machine's dialog directly (e.g. Escape).
    pub fn dialog_dismissed(&mut self) {
        self.active_dialog = None;
    }

    /// Banner context button: restart once complete, otherwise resume.
    pub fn banner_context_pressed(&mut self) {
        if self.is_complete(self.active_step_index) {
            self.restart();
        } else if self.running {
            self.resume();
        }
    }

    /// Banner close control. An incomplete tour asks for confirmation; a
    /// completed one tears the banner down immediately.
    pub fn banner_close_requested(&mut self) {
        if self.is_complete(self.active_step_index) {
            self.teardown_banner();
            return;
        }

        self.close_open_items();
        let spec = DialogSpec {
            title: LEAVE_TITLE.to_owned(),
            body: DialogBody {
                help_url: None,
                help_html: Some(LEAVE_BODY.to_owned()),
                wizard: None,
            },
            buttons: vec![
                DialogButton::primary(ButtonAction::Leave, "Leave tour"),
                DialogButton::new(ButtonAction::Stay, "Cancel"),
            ],
        };
        let id = self.surface.open_dialog(spec);
        self.active_dialog = Some((id, DialogRole::LeaveConfirm));
    }

    /// Shows step `step_index` and marks it active. Total: a completion
    /// index only refreshes the banner.
    fn show_step(&mut self, step_index: usize) {
        self.close_open_items();
        self.update_active_step(step_index);
        self.update_banner(step_index);

        if self.is_complete(step_index) {
            return;
        }

        let step = &self.config.steps()[step_index];
        let spec = DialogSpec {
            title: step.title().to_owned(),
            body: DialogBody {
                help_url: step
                    .content()
                    .doc_url()
                    .map(|url| doc_url_with_skin(url, self.current_skin)),
                help_html: step.content().inline_html().map(str::to_owned),
                wizard: Some(wizard_markers(self.step_count(), step_index)),
            },
            buttons: step_buttons(step_index, self.config.steps()),
        };
        let id = self.surface.open_dialog(spec);
        self.active_dialog = Some((id, DialogRole::Step));
    }

    /// Closes the dialog and reveals the current step's tooltips over the
    /// live page so the user can perform the gated action.
    fn try_it_out(&mut self) {
        self.close_open_items();
        if self.is_complete(self.active_step_index) {
            return;
        }

        let theme = TooltipTheme::for_skin(self.current_skin);
        let views: Vec<TooltipView> = self.config.steps()[self.active_step_index]
            .tooltips()
            .iter()
            .map(|tooltip| TooltipView {
                target: tooltip.target().clone(),
                content: tooltip.content().to_owned(),
                placement: tooltip.placement(),
                theme,
            })
            .collect();
        for view in views {
            let id = self.surface.show_tooltip(view);
            self.active_tooltips.push(id);
        }
    }

    fn update_active_step(&mut self, step_index: usize) {
        self.active_step_index = step_index;
        if let Err(err) = self.store.save(step_index) {
            // Navigation must keep working on a read-only state dir.
            warn!(error = %err, "failed to persist tour cursor");
        }
    }

    fn update_banner(&mut self, step_index: usize) {
        let Some(banner) = self.banner else {
            return;
        };
        let (text, context) = if self.is_complete(step_index) {
            (COMPLETED_TEXT.to_owned(), BannerContext::Restart)
        } else {
            let step = &self.config.steps()[step_index];
            (
                format!("Step {}: {}", step_index + 1, step.banner_text()),
                BannerContext::Resume,
            )
        };
        self.surface.update_banner(banner, text, context);
    }

    /// Closes any open dialog and clears all tooltips. Safe with nothing
    /// open.
    fn close_open_items(&mut self) {
        if let Some((dialog, _)) = self.active_dialog.take() {
            self.surface.close_dialog(dialog);
        }
        for tooltip in std::mem::take(&mut self.active_tooltips) {
            self.surface.close_tooltip(tooltip);
        }
    }

    fn teardown_banner(&mut self) {
        if let Some(banner) = self.banner.take() {
            self.surface.remove_banner(banner);
        }
    }
}

/// Appends the active skin to a help-document reference so the embedded
/// document renders in the matching theme.
fn doc_url_with_skin(url: &str, skin: Skin) -> String {
    format!("{url}?skin={skin}")
}

/// Step-position indicator: one marker per step, the active one bracketed.
/// `wizard_markers(5, 2)` renders `1 2 [3] 4 5`.
pub fn wizard_markers(total: usize, current: usize) -> String {
    (0..total)
        .map(|index| {
            if index == current {
                format!("[{}]", index + 1)
            } else {
                (index + 1).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deterministic button set for a step:
///
///  - Previous, iff a previous step exists
///  - Next (primary) when a next step exists and the step has no gate, or
///    Try it out (primary) when it does
///  - End tour (primary) on the last step
pub fn step_buttons(step_index: usize, steps: &[Step]) -> Vec<DialogButton> {
    let mut buttons = Vec::new();
    let has_prev = step_index > 0;
    let has_next = step_index + 1 < steps.len();

    if has_prev {
        buttons.push(DialogButton::new(ButtonAction::Prev, "Previous"));
    }

    if has_next {
        if steps[step_index].proceed_on_event().is_some() {
            buttons.push(DialogButton::primary(ButtonAction::TryItOut, "Try it out"));
        } else {
            buttons.push(DialogButton::primary(ButtonAction::Next, "Next"));
        }
    } else {
        buttons.push(DialogButton::primary(ButtonAction::End, "End tour"));
    }

    buttons
}
