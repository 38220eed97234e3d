// SPDX-FileCopyrightText: 2026 Guidepost Contributors
// SPDX-License-Identifier: MIT

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm): it hosts a small demo blog
//! page, implements [`TourSurface`] for the tour's banner, dialogs, and
//! tooltips, and wires mouse clicks into the overlay engine.

use std::error::Error;
use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::model::{
    ConfigError, ElementKey, HostEvent, Page, PageElement, Placement, Region, Selector,
    SelectorError, Skin, Step, StepContent, TooltipSpec, TourConfig,
};
use crate::overlay::{
    ActionBindings, ElementHelp, OverlayButton, OverlayConfig, OverlayEngine, OverlaySession,
};
use crate::store::CursorStore;
use crate::tour::{Tour, TourSurface};
use crate::ui::{
    BannerContext, BannerId, BannerSpec, ButtonAction, DialogButton, DialogId, DialogSpec,
    TooltipId, TooltipTheme, TooltipView,
};

use self::theme::{parse_inline_style, TuiTheme};

mod theme;

const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const SCRIM_CLOSE_LABEL: &str = "[x close]";

/// Runs the shell with the built-in demo blog tour.
pub fn run_demo(store: CursorStore) -> Result<(), Box<dyn Error>> {
    run(demo_tour()?, demo_overlays()?, store)
}

/// Runs the shell with a caller-supplied tour and overlay configuration.
pub fn run(
    config: TourConfig,
    overlays: OverlayConfig,
    store: CursorStore,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(config, overlays, store);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Banner state held by the shell on the tour's behalf.
#[derive(Debug)]
struct BannerView {
    id: BannerId,
    text: String,
    context: BannerContext,
}

/// The shell's presenter half: retained view state the draw path reads.
#[derive(Debug, Default)]
struct TuiSurface {
    next_id: u64,
    banner: Option<BannerView>,
    dialog: Option<(DialogId, DialogSpec)>,
    tooltips: Vec<(TooltipId, TooltipView)>,
}

impl TuiSurface {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn banner(&self) -> Option<&BannerView> {
        self.banner.as_ref()
    }

    fn dialog(&self) -> Option<&(DialogId, DialogSpec)> {
        self.dialog.as_ref()
    }

    fn take_dialog(&mut self) {
        self.dialog = None;
    }

    fn tooltips(&self) -> &[(TooltipId, TooltipView)] {
        &self.tooltips
    }
}

impl TourSurface for TuiSurface {
    fn render_banner(&mut self, spec: BannerSpec) -> BannerId {
        let id = BannerId(self.next_id());
        self.banner = Some(BannerView { id, text: spec.text, context: spec.context });
        id
    }

    fn update_banner(&mut self, id: BannerId, text: String, context: BannerContext) {
        if let Some(banner) = self.banner.as_mut().filter(|banner| banner.id == id) {
            banner.text = text;
            banner.context = context;
        }
    }

    fn remove_banner(&mut self, id: BannerId) {
        if self.banner.as_ref().is_some_and(|banner| banner.id == id) {
            self.banner = None;
        }
    }

    fn open_dialog(&mut self, spec: DialogSpec) -> DialogId {
        let id = DialogId(self.next_id());
        self.dialog = Some((id, spec));
        id
    }

    fn close_dialog(&mut self, id: DialogId) {
        if self.dialog.as_ref().is_some_and(|(open, _)| *open == id) {
            self.dialog = None;
        }
    }

    fn show_tooltip(&mut self, spec: TooltipView) -> TooltipId {
        let id = TooltipId(self.next_id());
        self.tooltips.push((id, spec));
        id
    }

    fn retheme_tooltip(&mut self, id: TooltipId, theme: TooltipTheme) {
        if let Some((_, view)) = self.tooltips.iter_mut().find(|(open, _)| *open == id) {
            view.theme = theme;
        }
    }

    fn close_tooltip(&mut self, id: TooltipId) {
        self.tooltips.retain(|(open, _)| *open != id);
    }
}

/// Identity of the dialog currently owning keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogKey {
    Overlay,
    Tour(DialogId),
}

/// The demo blog the tour walks through.
#[derive(Debug)]
struct BlogState {
    posts: Vec<String>,
    status: String,
}

impl Default for BlogState {
    fn default() -> Self {
        Self {
            posts: vec!["Hello world".to_owned(), "Second post".to_owned()],
            status: String::new(),
        }
    }
}

struct App {
    page: Page,
    tour: Tour<TuiSurface>,
    overlay_engine: OverlayEngine,
    bindings: ActionBindings,
    overlay_session: Option<OverlaySession>,
    overlay_dialog: Option<DialogSpec>,
    button_focus: usize,
    focused_dialog: Option<DialogKey>,
    scrim_close: Option<Region>,
    theme: TuiTheme,
    blog: BlogState,
    should_quit: bool,
}

impl App {
    fn new(config: TourConfig, overlays: OverlayConfig, store: CursorStore) -> Self {
        let page = blog_page();
        let overlay_engine = OverlayEngine::new(overlays);
        let bindings = overlay_engine.bind_action_overlays(&page);

        let mut tour = Tour::new(config, store, TuiSurface::default());
        let theme = TuiTheme::new(tour.current_skin());
        tour.start(None);

        Self {
            page,
            tour,
            overlay_engine,
            bindings,
            overlay_session: None,
            overlay_dialog: None,
            button_focus: 0,
            focused_dialog: None,
            scrim_close: None,
            theme,
            blog: BlogState::default(),
            should_quit: false,
        }
    }

    fn current_dialog(&self) -> Option<(&DialogSpec, DialogKey)> {
        if let Some(spec) = self.overlay_dialog.as_ref() {
            return Some((spec, DialogKey::Overlay));
        }
        self.tour
            .surface()
            .dialog()
            .map(|(id, spec)| (spec, DialogKey::Tour(*id)))
    }

    /// Resets button focus whenever a different dialog takes over.
    fn sync_button_focus(&mut self) {
        let key = self.current_dialog().map(|(_, key)| key);
        if key != self.focused_dialog {
            self.focused_dialog = key;
            self.button_focus = 0;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.sync_button_focus();

        if let Some(count) = self.current_dialog().map(|(spec, _)| spec.buttons.len()) {
            match key.code {
                KeyCode::Tab | KeyCode::Right => {
                    if count > 0 {
                        self.button_focus = (self.button_focus + 1) % count;
                    }
                }
                KeyCode::BackTab | KeyCode::Left => {
                    if count > 0 {
                        self.button_focus = (self.button_focus + count - 1) % count;
                    }
                }
                KeyCode::Enter => self.activate_button(),
                KeyCode::Esc => self.dismiss_dialog(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('s') => self.save_post(),
            KeyCode::Char('e') => self.edit_post(),
            KeyCode::Char('k') => self.toggle_skin(),
            KeyCode::Char('o') => self.toggle_spotlights(),
            KeyCode::Char('h') => self.tour.banner_context_pressed(),
            KeyCode::Char('c') => self.tour.banner_close_requested(),
            KeyCode::Esc => {
                if self.overlay_session.is_some() {
                    self.toggle_spotlights();
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.current_dialog().is_some() {
            return;
        }
        let (x, y) = (mouse.column, mouse.row);

        if self.overlay_session.is_some() {
            if self.scrim_close.is_some_and(|region| region.contains(x, y)) {
                self.toggle_spotlights();
                return;
            }
            let spec = self
                .overlay_session
                .as_ref()
                .and_then(|session| session.hit(&self.page, x, y))
                .map(ElementHelp::dialog_spec);
            if spec.is_some() {
                self.overlay_dialog = spec;
            }
            return;
        }

        let spec = self.bindings.hit(&self.page, x, y).map(ElementHelp::dialog_spec);
        if spec.is_some() {
            self.overlay_dialog = spec;
        }
    }

    fn activate_button(&mut self) {
        let action = match self.current_dialog() {
            Some((spec, _)) => spec.buttons.get(self.button_focus).map(|button| button.action),
            None => return,
        };
        let Some(action) = action else {
            return;
        };

        if self.overlay_dialog.is_some() {
            self.overlay_dialog = None;
            if action == ButtonAction::Submit {
                self.save_post();
            }
        } else {
            self.tour.dialog_action(action);
        }
    }

    fn dismiss_dialog(&mut self) {
        if self.overlay_dialog.take().is_some() {
            return;
        }
        self.tour.surface_mut().take_dialog();
        self.tour.dialog_dismissed();
    }

    fn save_post(&mut self) {
        let title = format!("Post {}", self.blog.posts.len() + 1);
        self.blog.status = format!("Saved \"{title}\"");
        self.blog.posts.push(title);
        self.tour.notify(HostEvent::Save);
    }

    fn edit_post(&mut self) {
        if let Some(title) = self.blog.posts.first() {
            self.blog.status = format!("Editing \"{title}\"");
        }
        self.tour.notify(HostEvent::Edit);
    }

    fn toggle_skin(&mut self) {
        let skin = if self.tour.current_skin().is_dark() {
            Skin::Default
        } else {
            Skin::Dark
        };
        self.theme = TuiTheme::new(skin);
        self.tour.change_skin(skin);
        self.tour.notify(HostEvent::SkinChange);
    }

    fn toggle_spotlights(&mut self) {
        if let Some(mut session) = self.overlay_session.take() {
            session.close(&mut self.page);
            self.overlay_dialog = None;
        } else {
            self.overlay_session = Some(self.overlay_engine.show_help_overlays(&mut self.page));
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    frame.render_widget(Block::default().style(app.theme.base_style()), area);

    let banner_height = u16::from(app.tour.surface().banner().is_some());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    let (banner_area, main, footer) = (chunks[0], chunks[1], chunks[2]);

    if let Some(banner) = app.tour.surface().banner() {
        frame.render_widget(
            Paragraph::new(banner_line(banner, app.theme, banner_area.width)),
            banner_area,
        );
    }

    layout_page(&mut app.page, main);
    for key in app.page.keys().collect::<Vec<_>>() {
        render_element(frame, app, key);
    }

    app.scrim_close = None;
    if let Some(session) = app.overlay_session.as_ref().filter(|session| session.is_open()) {
        frame.render_widget(Clear, main);
        frame.render_widget(Block::default().style(app.theme.scrim_style()), main);

        let spotlit: Vec<_> = session.elements().collect();
        for key in spotlit {
            render_element(frame, app, key);
        }

        let close = Rect {
            x: (main.x + main.width).saturating_sub(SCRIM_CLOSE_LABEL.len() as u16 + 1),
            y: main.y,
            width: SCRIM_CLOSE_LABEL.len() as u16,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(SCRIM_CLOSE_LABEL).style(app.theme.banner_style()),
            close,
        );
        app.scrim_close = Some(rect_region(close));
    }

    for (_, view) in app.tour.surface().tooltips() {
        let Some(key) = app.page.select_first(&view.target) else {
            continue;
        };
        let Some(target) = app.page.element(key).map(PageElement::region) else {
            continue;
        };
        let width = view.content.chars().count() as u16 + 2;
        let rect = tooltip_rect(target, view.placement, width, area);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(format!(" {} ", view.content))
                .style(app.theme.tooltip_style(view.theme)),
            rect,
        );
    }

    if let Some((spec, _)) = app.current_dialog() {
        let rect = centered_rect(60, 50, area);
        frame.render_widget(Clear, rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.dialog_border_style())
            .title(format!(" {} ", spec.title));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let mut lines = Vec::new();
        if let Some(wizard) = spec.body.wizard.as_deref() {
            lines.push(Line::styled(wizard.to_owned(), Style::default().fg(Color::Gray)));
            lines.push(Line::raw(""));
        }
        if let Some(url) = spec.body.help_url.as_deref() {
            lines.push(Line::raw(format!("See: {url}")));
        } else if let Some(html) = spec.body.help_html.as_deref() {
            lines.push(Line::raw(html_text(html)));
        }
        lines.push(Line::raw(""));
        lines.push(dialog_button_line(&spec.buttons, app.button_focus, app.theme));

        frame.render_widget(
            Paragraph::new(lines)
                .style(app.theme.base_style())
                .wrap(Wrap { trim: false }),
            inner,
        );
    }

    let mut spans = Vec::new();
    push_footer_entry(&mut spans, "s", "save");
    push_footer_entry(&mut spans, "e", "edit");
    push_footer_entry(&mut spans, "k", "skin");
    push_footer_entry(&mut spans, "o", "spotlights");
    push_footer_entry(&mut spans, "h", "tour");
    push_footer_entry(&mut spans, "c", "close tour");
    push_footer_entry(&mut spans, "q", "quit");
    if !app.blog.status.is_empty() {
        spans.push(Span::styled(
            format!("  {}", app.blog.status),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), footer);
}

/// Assigns screen regions to the demo page's elements for the current frame.
/// Mouse hit-testing reads the same regions, so clicks and pixels agree.
fn layout_page(page: &mut Page, main: Rect) {
    let x = main.x + 1;
    let y = main.y;
    let width = main.width.saturating_sub(2);
    let posts = Region::new(x, y + 10, width, main.height.saturating_sub(11));

    let mut edit_row = 0;
    for key in page.keys().collect::<Vec<_>>() {
        let Some(element) = page.element_mut(key) else {
            continue;
        };
        let region = match element.id() {
            Some("post-title") => Region::new(x, y, width.min(42), 3),
            Some("editor") => Region::new(x, y + 3, width, 5),
            Some("save") => Region::new(x, y + 8, 12, 1),
            Some("skin-toggle") => Region::new(x + 14, y + 8, 12, 1),
            Some("posts") => posts,
            _ if element.classes().iter().any(|class| class == "post-edit") => {
                edit_row += 1;
                Region::new(
                    (posts.x + posts.width).saturating_sub(11),
                    posts.y + edit_row,
                    10,
                    1,
                )
            }
            _ => continue,
        };
        element.set_region(region);
    }
}

fn render_element(frame: &mut Frame<'_>, app: &App, key: ElementKey) {
    let Some(element) = app.page.element(key) else {
        return;
    };
    let rect = region_rect(element.region());
    if rect.width == 0 || rect.height == 0 {
        return;
    }

    let mut style = app.theme.base_style();
    if let Some(inline) = element.inline_style() {
        style = style.patch(parse_inline_style(inline));
    }

    match element.id() {
        Some("post-title") => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.panel_border_style())
                .title(" Title ");
            let inner = block.inner(rect);
            frame.render_widget(block.style(style), rect);
            frame.render_widget(Paragraph::new("My first post").style(style), inner);
        }
        Some("editor") => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.panel_border_style())
                .title(" Content ");
            let inner = block.inner(rect);
            frame.render_widget(block.style(style), rect);
            frame.render_widget(
                Paragraph::new("Write something worth reading.")
                    .style(style)
                    .wrap(Wrap { trim: false }),
                inner,
            );
        }
        Some("save") => {
            frame.render_widget(Paragraph::new("[ Save (s) ]").style(style), rect);
        }
        Some("skin-toggle") => {
            frame.render_widget(Paragraph::new("[ Skin (k) ]").style(style), rect);
        }
        Some("posts") => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.panel_border_style())
                .title(" Posts ");
            let inner = block.inner(rect);
            frame.render_widget(block.style(style), rect);
            let lines: Vec<Line> =
                app.blog.posts.iter().map(|title| Line::raw(title.clone())).collect();
            frame.render_widget(Paragraph::new(lines).style(style), inner);
        }
        _ if element.classes().iter().any(|class| class == "post-edit") => {
            frame.render_widget(Paragraph::new("[ Edit (e) ]").style(style), rect);
        }
        _ => {}
    }
}

/// The demo blog page: a title input, an editor, a toolbar, and a post list
/// with per-post edit buttons.
fn blog_page() -> Page {
    let mut page = Page::new();
    page.add(PageElement::new("input").with_id("post-title"));
    page.add(PageElement::new("textarea").with_id("editor"));
    page.add(
        PageElement::new("button")
            .with_id("save")
            .with_class("toolbar-button"),
    );
    page.add(
        PageElement::new("button")
            .with_id("skin-toggle")
            .with_class("toolbar-button"),
    );
    page.add(PageElement::new("div").with_id("posts"));
    page.add(PageElement::new("button").with_class("post-edit"));
    page.add(PageElement::new("button").with_class("post-edit"));
    page
}

/// The built-in five-step tour over the demo blog page.
pub fn demo_tour() -> Result<TourConfig, ConfigError> {
    let steps = vec![
        Step::new("Create Content", StepContent::Doc("./tour/create.html".to_owned()))
            .with_details("Enter a title and some content, then save your post.")
            .with_proceed_on_event(HostEvent::Save)
            .with_tooltip(TooltipSpec::new(
                Selector::Id("post-title".into()),
                "Enter a title here",
                Placement::BottomStart,
            ))
            .with_tooltip(TooltipSpec::new(
                Selector::Id("save".into()),
                "Then save it",
                Placement::Top,
            )),
        Step::new("Save", StepContent::Doc("./tour/save.html".to_owned()))
            .with_details("Saved posts appear in the list below the editor."),
        Step::new("Edit Content", StepContent::Doc("./tour/edit.html".to_owned()))
            .with_details("Pick a post, change it, and save it again.")
            .with_proceed_on_event(HostEvent::Save)
            .with_tooltip(TooltipSpec::new(
                Selector::Class("post-edit".into()),
                "Edit a saved post",
                Placement::Right,
            )),
        Step::new(
            "More features",
            StepContent::Inline("<p>There is a lot more to discover on your own.</p>".to_owned()),
        ),
        Step::new("Skinning", StepContent::Doc("./tour/skin.html".to_owned()))
            .with_details("Switch the skin and watch the tour follow."),
    ];
    TourConfig::new(steps, Skin::Default)
}

/// Overlay help bound to the demo blog page.
pub fn demo_overlays() -> Result<OverlayConfig, SelectorError> {
    Ok(OverlayConfig::new()
        .bind(
            Selector::parse("#posts")?,
            ElementHelp::default().with_html("<p>Your published posts live here.</p>"),
        )
        .help(
            Selector::parse("#post-title")?,
            ElementHelp::default().with_html("<p>Give your post a short, clear title.</p>"),
        )
        .help(
            Selector::parse("#editor")?,
            ElementHelp::default()
                .with_url("./help/editor.html")
                .with_button(OverlayButton::Cancel)
                .with_button(OverlayButton::Submit),
        )
        .help(
            Selector::parse(".toolbar-button")?,
            ElementHelp::default().with_html("<p>Save your draft or switch the skin.</p>"),
        ))
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = disable_raw_mode();
}

include!("chrome.rs");

#[cfg(test)]
mod tests;
