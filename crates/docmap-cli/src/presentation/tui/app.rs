//! Interactive explorer state on top of the headless [`Explorer`].
//!
//! The app owns UI-only state (focus, cursors, scroll, the in-progress mouse
//! gesture) and turns terminal input into `UiEvent`s. Everything that
//! affects the data goes through `Explorer::dispatch`.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use docmap_engine::{DragTarget, Effect, Emphasis, Explorer, Rect as Bounds, UiEvent};
use docmap_types::DocumentId;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::{Block, Borders},
};
use tracing::debug;

use super::hit::{Hit, HitMap};
use crate::presentation::views::tui::{
    ClusterListWidget, ListRow, PanelsWidget, PlotViewport, ScatterWidget, StatusBarModel,
    StatusBarWidget, list_rows, panel_areas,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Panels,
}

/// Mouse gesture between button press and release
#[derive(Debug, Clone)]
struct PointerDrag {
    target: DragTarget,
    last_row: u16,
    moving_up: bool,
    moved: bool,
}

impl PointerDrag {
    /// Terminal rows have no sub-cell precision; the direction of travel
    /// stands in for which half of the row the pointer is in.
    fn pointer_y(&self, row: u16) -> f64 {
        f64::from(row) + if self.moving_up { 0.25 } else { 0.75 }
    }
}

pub struct ExplorerApp {
    explorer: Explorer,
    origin: String,
    log_hint: Option<String>,
    focus: Focus,
    list_cursor: usize,
    list_offset: usize,
    panel_cursor: usize,
    panel_scroll: u16,
    editing: bool,
    drag: Option<PointerDrag>,
    hits: HitMap,
    should_quit: bool,
}

impl ExplorerApp {
    pub fn new(explorer: Explorer, origin: impl Into<String>) -> Self {
        Self {
            explorer,
            origin: origin.into(),
            log_hint: None,
            focus: Focus::List,
            list_cursor: 0,
            list_offset: 0,
            panel_cursor: 0,
            panel_scroll: 0,
            editing: false,
            drag: None,
            hits: HitMap::default(),
            should_quit: false,
        }
    }

    /// Where diagnostics go while the terminal is taken over
    pub fn set_log_hint(&mut self, hint: impl Into<String>) {
        self.log_hint = Some(hint.into());
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn hit_map(&self) -> &HitMap {
        &self.hits
    }

    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    pub fn start(&self) -> Vec<Effect> {
        self.explorer.start()
    }

    /// Feed a fetch result back into the explorer. Failures are logged by
    /// the explorer and never reach the screen.
    pub fn on_event(&mut self, event: UiEvent) -> Vec<Effect> {
        self.dispatch(event)
    }

    fn dispatch(&mut self, event: UiEvent) -> Vec<Effect> {
        let effects = self.explorer.dispatch(event);
        self.clamp();
        effects
    }

    fn clamp(&mut self) {
        let rows = self.explorer.list().blocks().len() + self.explorer.list().item_count();
        self.list_cursor = self.list_cursor.min(rows.saturating_sub(1));

        let panels = self.explorer.panels().panels().len();
        if panels == 0 {
            self.panel_cursor = 0;
            self.editing = false;
            if self.focus == Focus::Panels {
                self.focus = Focus::List;
            }
        } else if self.panel_cursor >= panels {
            self.panel_cursor = panels - 1;
            self.panel_scroll = 0;
        }
    }

    fn rows(&self) -> Vec<ListRow> {
        list_rows(self.explorer.list())
    }

    fn focused_panel_id(&self) -> Option<DocumentId> {
        self.explorer
            .panels()
            .panels()
            .get(self.panel_cursor)
            .map(|p| p.id.clone())
    }

    fn follow_list_target(&mut self, target: &DragTarget) {
        if let Some(index) = self.rows().iter().position(|r| r.drag_target() == *target) {
            self.list_cursor = index;
        }
    }

    fn follow_panel(&mut self, id: &DocumentId) {
        if let Some(index) = self.explorer.panels().panels().iter().position(|p| p.id == *id) {
            self.panel_cursor = index;
        }
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Vec::new();
        }

        if self.editing {
            self.handle_edit_key(key);
            return Vec::new();
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Vec::new()
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::List if !self.explorer.panels().panels().is_empty() => Focus::Panels,
                    _ => Focus::List,
                };
                Vec::new()
            }
            _ => match self.focus {
                Focus::List => self.handle_list_key(key),
                Focus::Panels => {
                    self.handle_panel_key(key);
                    Vec::new()
                }
            },
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        let rows = self.rows();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.list_cursor + 1 < rows.len() {
                    self.list_cursor += 1;
                }
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => match rows.get(self.list_cursor) {
                Some(ListRow::File { id, .. }) => self.dispatch(UiEvent::ItemSelected(id.clone())),
                _ => Vec::new(),
            },
            KeyCode::Char('J') => {
                self.move_list_row(&rows, true);
                Vec::new()
            }
            KeyCode::Char('K') => {
                self.move_list_row(&rows, false);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Keyboard reorder, expressed as a one-step drag so it follows the same
    /// rules as the mouse.
    fn move_list_row(&mut self, rows: &[ListRow], down: bool) {
        let Some(current) = rows.get(self.list_cursor) else {
            return;
        };
        let same_kind = |row: &ListRow| {
            matches!(
                (current, row),
                (ListRow::Header(_), ListRow::Header(_)) | (ListRow::File { .. }, ListRow::File { .. })
            )
        };

        let neighbour = if down {
            (self.list_cursor + 1..rows.len()).find(|&i| same_kind(&rows[i]))
        } else {
            (0..self.list_cursor).rev().find(|&i| same_kind(&rows[i]))
        };
        let Some(neighbour) = neighbour else {
            return;
        };

        // A file stepping over a cluster header lands at the near edge of
        // the next cluster instead of skipping its first entry.
        let (low, high) = if down {
            (self.list_cursor, neighbour)
        } else {
            (neighbour, self.list_cursor)
        };
        let crosses_header = matches!(current, ListRow::File { .. })
            && rows[low + 1..high]
                .iter()
                .any(|r| matches!(r, ListRow::Header(_)));
        let after = down != crosses_header;

        let target = current.drag_target();
        let unit = Bounds::new(0.0, 0.0, 1.0, 1.0);
        self.dispatch(UiEvent::DragStarted(target.clone()));
        self.dispatch(UiEvent::DragOver {
            candidate: rows[neighbour].drag_target(),
            pointer_y: if after { 0.75 } else { 0.25 },
            bounds: unit,
        });
        self.dispatch(UiEvent::DragEnded);
        self.follow_list_target(&target);
    }

    fn handle_panel_key(&mut self, key: KeyEvent) {
        let Some(id) = self.focused_panel_id() else {
            return;
        };
        let count = self.explorer.panels().panels().len();

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.panel_cursor + 1 < count {
                    self.panel_cursor += 1;
                    self.panel_scroll = 0;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.panel_cursor > 0 {
                    self.panel_cursor -= 1;
                    self.panel_scroll = 0;
                }
            }
            KeyCode::PageDown => self.panel_scroll = self.panel_scroll.saturating_add(5),
            KeyCode::PageUp => self.panel_scroll = self.panel_scroll.saturating_sub(5),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('x') => {
                // Closing never fetches
                self.dispatch(UiEvent::ItemSelected(id));
            }
            KeyCode::Char('J') => self.move_panel(&id, true),
            KeyCode::Char('K') => self.move_panel(&id, false),
            KeyCode::Char('e') => self.editing = true,
            _ => {}
        }
    }

    /// Keyboard reorder, expressed as a drop onto the neighbouring panel in
    /// a one-row-per-panel layout so it follows the same rules as the mouse.
    fn move_panel(&mut self, id: &DocumentId, down: bool) {
        let anchor = if down {
            self.panel_cursor + 1
        } else {
            self.panel_cursor.wrapping_sub(1)
        };
        if anchor >= self.explorer.panels().panels().len() {
            return;
        }

        let layout: Vec<(DocumentId, Bounds)> = self
            .explorer
            .panels()
            .panels()
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), Bounds::new(0.0, i as f64, 1.0, 1.0)))
            .collect();
        let offset = if down { 0.75 } else { 0.25 };

        self.dispatch(UiEvent::DragStarted(DragTarget::Panel(id.clone())));
        self.dispatch(UiEvent::PanelDropped {
            point: (0.5, anchor as f64 + offset),
            layout,
        });
        self.dispatch(UiEvent::DragEnded);
        self.follow_panel(id);
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(id) = self.focused_panel_id() else {
            self.editing = false;
            return;
        };
        let Some(panel) = self.explorer.panels_mut().panel_mut(&id) else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.editing = false,
            KeyCode::Enter => panel.push_newline(),
            KeyCode::Backspace => {
                panel.pop_char();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                panel.push_char(c)
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Mouse
    // ------------------------------------------------------------------

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<Effect> {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                self.track_hover(column, row);
                Vec::new()
            }
            MouseEventKind::Down(MouseButton::Left) => self.press(column, row),
            MouseEventKind::Drag(MouseButton::Left) => {
                self.drag_to(column, row);
                Vec::new()
            }
            MouseEventKind::Up(MouseButton::Left) => self.release(column, row),
            MouseEventKind::ScrollDown => {
                if let Some(Hit::PanelBody(id) | Hit::PanelTitle(id)) = self.hits.hit(column, row) {
                    self.focus_panel(&id);
                    self.panel_scroll = self.panel_scroll.saturating_add(1);
                }
                Vec::new()
            }
            MouseEventKind::ScrollUp => {
                if let Some(Hit::PanelBody(id) | Hit::PanelTitle(id)) = self.hits.hit(column, row) {
                    self.focus_panel(&id);
                    self.panel_scroll = self.panel_scroll.saturating_sub(1);
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn hover_tolerance(plot: &PlotViewport) -> f64 {
        plot.cell_extent()
    }

    fn track_hover(&mut self, column: u16, row: u16) {
        let Some(plot) = self.hits.plot().cloned() else {
            return;
        };
        let transition = match plot.cell_to_plot(column, row) {
            Some((x, y)) => {
                self.explorer
                    .scatter_mut()
                    .track_pointer(x, y, Self::hover_tolerance(&plot))
            }
            None => self.explorer.scatter_mut().pointer_left(),
        };
        for event in transition.into_events() {
            self.dispatch(event);
        }
    }

    fn focus_panel(&mut self, id: &DocumentId) {
        if self.focused_panel_id().as_ref() != Some(id) {
            self.panel_scroll = 0;
        }
        self.focus = Focus::Panels;
        self.follow_panel(id);
    }

    fn press(&mut self, column: u16, row: u16) -> Vec<Effect> {
        let Some(hit) = self.hits.hit(column, row) else {
            return Vec::new();
        };

        match hit {
            Hit::Plot { x, y } => {
                let tolerance = self.hits.plot().map(Self::hover_tolerance).unwrap_or(0.0);
                match self.explorer.scatter().mark_at(x, y, tolerance).cloned() {
                    Some(id) => self.dispatch(UiEvent::PointSelected(id)),
                    None => Vec::new(),
                }
            }
            Hit::Row { index, target } => {
                self.focus = Focus::List;
                self.list_cursor = index;
                self.begin_drag(target, row);
                Vec::new()
            }
            Hit::PanelTitle(id) => {
                self.focus_panel(&id);
                self.begin_drag(DragTarget::Panel(id), row);
                Vec::new()
            }
            Hit::PanelBody(id) => {
                self.focus_panel(&id);
                Vec::new()
            }
        }
    }

    fn begin_drag(&mut self, target: DragTarget, row: u16) {
        self.dispatch(UiEvent::DragStarted(target.clone()));
        self.drag = Some(PointerDrag {
            target,
            last_row: row,
            moving_up: false,
            moved: false,
        });
    }

    fn drag_to(&mut self, column: u16, row: u16) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if row != drag.last_row {
            drag.moving_up = row < drag.last_row;
            drag.last_row = row;
            drag.moved = true;
        }
        let drag = drag.clone();

        // Panels reorder once, on release
        if matches!(drag.target, DragTarget::Panel(_)) {
            return;
        }

        if let Some(Hit::Row { target, .. }) = self.hits.hit(column, row) {
            let bounds = self.hits.list_row_bounds(row);
            self.dispatch(UiEvent::DragOver {
                candidate: target,
                pointer_y: drag.pointer_y(row),
                bounds,
            });
            self.follow_list_target(&drag.target);
        }
    }

    fn release(&mut self, column: u16, row: u16) -> Vec<Effect> {
        let Some(drag) = self.drag.take() else {
            return Vec::new();
        };

        let mut effects = Vec::new();
        match &drag.target {
            DragTarget::File(id) if !drag.moved => {
                effects = self.dispatch(UiEvent::ItemSelected(id.clone()));
            }
            DragTarget::Panel(id) if drag.moved => {
                let layout = self.hits.panel_layout();
                self.dispatch(UiEvent::PanelDropped {
                    point: (f64::from(column) + 0.5, drag.pointer_y(row)),
                    layout,
                });
                self.follow_panel(id);
            }
            _ => {}
        }

        self.dispatch(UiEvent::DragEnded);
        debug!(dragged = ?drag.target, moved = drag.moved, "drag ended");
        effects
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    pub fn render(&mut self, f: &mut Frame) {
        let [main, status] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(f.area());
        let [list_area, plot_area, panel_area] = Layout::horizontal([
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Percentage(30),
        ])
        .areas(main);

        self.hits.clear();
        let frame_block = Block::default().borders(Borders::ALL);

        // List, keeping the cursor in view
        let rows = self.rows();
        let list_inner = frame_block.inner(list_area);
        let visible = usize::from(list_inner.height).max(1);
        if self.list_cursor < self.list_offset {
            self.list_offset = self.list_cursor;
        } else if self.list_cursor >= self.list_offset + visible {
            self.list_offset = self.list_cursor + 1 - visible;
        }
        self.list_offset = self.list_offset.min(rows.len().saturating_sub(1));
        self.hits.record_list(
            list_inner,
            self.list_offset,
            rows.iter().map(ListRow::drag_target).collect(),
        );
        f.render_widget(
            ClusterListWidget::new(&rows)
                .cursor(Some(self.list_cursor))
                .offset(self.list_offset)
                .focused(self.focus == Focus::List),
            list_area,
        );

        // Scatterplot; the ring follows the list emphasis
        let scatter = self.explorer.scatter();
        let selected = self.explorer.selected().filter(|id| {
            self.explorer
                .list()
                .item(id)
                .is_some_and(|item| item.emphasis == Emphasis::Selected)
        });
        self.hits.record_plot(PlotViewport::new(
            frame_block.inner(plot_area),
            scatter.config(),
        ));
        f.render_widget(ScatterWidget::new(scatter).selected(selected), plot_area);

        // Panels
        let panels = self.explorer.panels().panels();
        for (panel, area) in panels.iter().zip(panel_areas(panel_area, panels.len())) {
            self.hits.record_panel(panel.id.clone(), area);
        }
        let panel_cursor = (self.focus == Focus::Panels).then_some(self.panel_cursor);
        f.render_widget(
            PanelsWidget::new(panels)
                .cursor(panel_cursor)
                .editing(self.editing)
                .scroll(self.panel_scroll)
                .loading(self.explorer.panels().loading_count()),
            panel_area,
        );

        let model = StatusBarModel {
            origin: self.origin.clone(),
            clusters: self.explorer.list().blocks().len(),
            files: self.explorer.list().item_count(),
            points: self.explorer.scatter().marks().len(),
            open_panels: panels.len(),
            loading: self.explorer.panels().loading_count(),
            editing: self.editing,
            log_path: self.log_hint.clone(),
        };
        f.render_widget(StatusBarWidget::new(&model), status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use docmap_types::{Cluster, ClusterSet, LoadError, Point};
    use ratatui::{Terminal, backend::TestBackend};

    fn loaded_app() -> ExplorerApp {
        let mut app = ExplorerApp::new(Explorer::default(), "fixtures");
        let set = ClusterSet::new()
            .with_cluster("C1", Cluster::new(["a.txt", "b.txt"]))
            .with_cluster("C2", Cluster::new(["c.txt"]));
        assert_eq!(
            app.on_event(UiEvent::ClusterSetLoaded(Ok(set))),
            vec![Effect::FetchPoints]
        );
        app.on_event(UiEvent::PointsLoaded(Ok(vec![
            Point::new("a.txt", 0.0, 0.0),
            Point::new("b.txt", 12.0, -15.0),
            Point::new("c.txt", -10.0, 10.0),
        ])));
        app
    }

    fn draw(app: &mut ExplorerApp) {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn mark_cell(app: &ExplorerApp, name: &str) -> (u16, u16) {
        let mark = app
            .explorer()
            .scatter()
            .marks()
            .iter()
            .find(|m| m.id.as_str() == name)
            .unwrap()
            .clone();
        app.hit_map()
            .plot()
            .unwrap()
            .plot_to_cell(mark.cx, mark.cy)
            .unwrap()
    }

    fn files(app: &ExplorerApp, block: usize) -> Vec<String> {
        app.explorer().list().blocks()[block]
            .items
            .iter()
            .map(|i| i.id.as_str().to_string())
            .collect()
    }

    fn emphasis_of(app: &ExplorerApp, name: &str) -> Emphasis {
        app.explorer()
            .list()
            .item(&DocumentId::from(name))
            .unwrap()
            .emphasis
    }

    #[test]
    fn test_click_row_requests_document() {
        let mut app = loaded_app();
        draw(&mut app);

        // Rows: C1, a.txt, b.txt, C2, c.txt
        let row = app.hit_map().list_row_of(1).unwrap();
        assert!(app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, row)).is_empty());
        let effects = app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 2, row));

        assert_eq!(effects, vec![Effect::FetchDocument("a.txt".into())]);
        assert_eq!(emphasis_of(&app, "a.txt"), Emphasis::Selected);

        app.on_event(UiEvent::DocumentLoaded {
            id: "a.txt".into(),
            result: Ok("alpha".to_string()),
        });
        draw(&mut app);
        assert_eq!(app.hit_map().panel_layout().len(), 1);
    }

    #[test]
    fn test_hover_over_point_emphasizes_list_item() {
        let mut app = loaded_app();
        draw(&mut app);

        let (column, row) = mark_cell(&app, "b.txt");
        app.handle_mouse(mouse(MouseEventKind::Moved, column, row));
        assert_eq!(emphasis_of(&app, "b.txt"), Emphasis::Selected);
        assert_eq!(emphasis_of(&app, "a.txt"), Emphasis::Default);

        // Leaving the plot clears it again
        app.handle_mouse(mouse(MouseEventKind::Moved, 2, 1));
        assert_eq!(emphasis_of(&app, "b.txt"), Emphasis::Default);
    }

    #[test]
    fn test_click_point_requests_document() {
        let mut app = loaded_app();
        draw(&mut app);

        let (column, row) = mark_cell(&app, "c.txt");
        let effects = app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
        assert_eq!(effects, vec![Effect::FetchDocument("c.txt".into())]);
    }

    #[test]
    fn test_drag_file_into_other_cluster() {
        let mut app = loaded_app();
        draw(&mut app);

        let from = app.hit_map().list_row_of(4).unwrap();
        let to = app.hit_map().list_row_of(1).unwrap();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, from));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 2, to));
        let effects = app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 2, to));

        assert!(effects.is_empty(), "a drag is not a click");
        assert_eq!(files(&app, 0), vec!["c.txt", "a.txt", "b.txt"]);
        assert!(files(&app, 1).is_empty());
        assert_eq!(app.list_cursor(), 1);
        assert!(!app.explorer().drag().is_dragging());
    }

    #[test]
    fn test_keyboard_move_steps_into_next_cluster() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.list_cursor(), 2);

        app.handle_key(key(KeyCode::Char('J')));
        assert_eq!(files(&app, 0), vec!["a.txt"]);
        assert_eq!(files(&app, 1), vec!["b.txt", "c.txt"]);
        assert_eq!(app.list_cursor(), 3);

        app.handle_key(key(KeyCode::Char('K')));
        assert_eq!(files(&app, 0), vec!["a.txt", "b.txt"]);
        assert_eq!(files(&app, 1), vec!["c.txt"]);
    }

    #[test]
    fn test_edit_and_close_panel_from_keyboard() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Down));
        let effects = app.handle_key(key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::FetchDocument("a.txt".into())]);
        app.on_event(UiEvent::DocumentLoaded {
            id: "a.txt".into(),
            result: Ok("alpha".to_string()),
        });

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Panels);
        app.handle_key(key(KeyCode::Char('e')));
        assert!(app.is_editing());
        app.handle_key(key(KeyCode::Char('!')));
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.is_editing());
        assert!(!app.should_quit(), "Esc leaves edit mode first");

        let panel = app.explorer().panels().panel(&"a.txt".into()).unwrap();
        assert_eq!(panel.text(), "alpha!");
        assert!(panel.is_edited());

        assert!(app.handle_key(key(KeyCode::Char('x'))).is_empty());
        assert!(app.explorer().panels().panels().is_empty());
        assert_eq!(app.focus(), Focus::List);
    }

    fn screen_text(app: &mut ExplorerApp, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_load_failures_stay_off_screen() {
        let mut app = ExplorerApp::new(Explorer::default(), "fixtures");
        app.set_log_hint("/tmp/docmap.log");
        let effects = app.on_event(UiEvent::ClusterSetLoaded(Err(LoadError::Status {
            resource: "clustering_results.json".to_string(),
            status: 500,
        })));
        assert!(effects.is_empty());

        let screen = screen_text(&mut app, 200);
        assert!(!screen.contains("HTTP status 500"));
        assert!(!screen.contains("clustering_results.json"));
        assert!(screen.contains("log: /tmp/docmap.log"));
    }

    #[test]
    fn test_failed_document_load_stays_off_screen() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        app.on_event(UiEvent::DocumentLoaded {
            id: "a.txt".into(),
            result: Err(LoadError::NotFound {
                resource: "dataset/a.txt".to_string(),
            }),
        });

        let screen = screen_text(&mut app, 200);
        assert!(!screen.contains("Resource not found"));
        assert!(app.explorer().panels().panels().is_empty());
    }

    #[test]
    fn test_keyboard_panel_move_uses_drop_rules() {
        let mut app = loaded_app();
        for name in ["a.txt", "b.txt", "c.txt"] {
            app.dispatch(UiEvent::ItemSelected(name.into()));
            app.on_event(UiEvent::DocumentLoaded {
                id: name.into(),
                result: Ok(name.to_string()),
            });
        }
        let order = |app: &ExplorerApp| -> Vec<String> {
            app.explorer()
                .panels()
                .panels()
                .iter()
                .map(|p| p.id.as_str().to_string())
                .collect()
        };

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('J')));
        assert_eq!(order(&app), vec!["b.txt", "a.txt", "c.txt"]);
        assert!(!app.explorer().drag().is_dragging());

        // Cursor followed a.txt to index 1
        app.handle_key(key(KeyCode::Char('J')));
        assert_eq!(order(&app), vec!["b.txt", "c.txt", "a.txt"]);

        // Already last
        app.handle_key(key(KeyCode::Char('J')));
        assert_eq!(order(&app), vec!["b.txt", "c.txt", "a.txt"]);

        app.handle_key(key(KeyCode::Char('K')));
        app.handle_key(key(KeyCode::Char('K')));
        assert_eq!(order(&app), vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = loaded_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}
