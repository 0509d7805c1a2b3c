//! Interactive shell using ratatui
//!
//! Presents the main menu (run, pick input, pick output, clear, about,
//! exit) with a status line. The prediction run itself happens outside
//! the alternate screen so spinners and tables print normally; the shell
//! redraws afterwards.

use std::io::{stdout, Stdout};
use std::path::PathBuf;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::cli::prompts::acknowledge;
use crate::cli::run::{run_prediction, RunOptions, RunOutcome};
use crate::utils::styling::print_error;

const MENU_ITEMS: [&str; 6] = [
    "Run Prediction",
    "Select Input File",
    "Select Output File",
    "Clear Selections",
    "About",
    "Exit",
];

/// A file or directory entry in the file browser
struct FileEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// State for the file selector
struct FileSelectorState {
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    selected: usize,
    search: String,
    filtered: Vec<usize>,
}

impl FileSelectorState {
    fn new(start_dir: PathBuf) -> Self {
        let entries = list_directory(&start_dir);
        let filtered: Vec<usize> = (0..entries.len()).collect();
        Self {
            current_dir: start_dir,
            entries,
            selected: 0,
            search: String::new(),
            filtered,
        }
    }

    fn refresh(&mut self) {
        self.entries = list_directory(&self.current_dir);
        self.search.clear();
        self.filtered = (0..self.entries.len()).collect();
        self.selected = 0;
    }

    fn navigate_to(&mut self, path: PathBuf) {
        self.current_dir = path;
        self.refresh();
    }

    fn update_filter(&mut self) {
        let search_lower = self.search.to_lowercase();
        self.filtered = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.name.to_lowercase().contains(&search_lower))
            .map(|(i, _)| i)
            .collect();
        self.selected = 0;
    }
}

/// The current state of the shell
enum ShellView {
    Main,
    SelectInput(FileSelectorState),
    EditOutput { input: String },
    About,
}

/// Mutable shell state: the selections, the menu cursor, and the status
/// line shown under the menu.
struct ShellState {
    options: RunOptions,
    selected: usize,
    status: String,
    needs_redraw: bool,
}

/// Run the interactive shell until the user exits.
pub fn run_shell(options: RunOptions) -> Result<()> {
    let mut state = ShellState {
        options,
        selected: 0,
        status: "Ready. Select an input file to begin.".to_string(),
        needs_redraw: false,
    };
    if state.options.input.is_some() {
        state.status = "Ready.".to_string();
    }

    let mut terminal = setup_terminal()?;
    let result = run_shell_loop(&mut terminal, &mut state);
    teardown_terminal();
    result
}

/// Setup terminal for TUI rendering with panic-safe cleanup
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

fn run_shell_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut ShellState,
) -> Result<()> {
    let mut view = ShellView::Main;

    loop {
        // Force full redraw if terminal was torn down (e.g. after a run)
        if state.needs_redraw {
            terminal.clear()?;
            state.needs_redraw = false;
        }

        terminal.draw(|frame| draw_ui(frame, state, &view))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match &mut view {
                ShellView::Main => match key.code {
                    KeyCode::Enter => match state.selected {
                        0 => {
                            run_from_shell(terminal, state)?;
                        }
                        1 => {
                            let start = state
                                .options
                                .input
                                .as_ref()
                                .and_then(|p| p.parent().map(|d| d.to_path_buf()))
                                .or_else(dirs::home_dir)
                                .unwrap_or_else(|| PathBuf::from("."));
                            view = ShellView::SelectInput(FileSelectorState::new(start));
                        }
                        2 => {
                            let current = default_output_text(state);
                            view = ShellView::EditOutput { input: current };
                        }
                        3 => {
                            state.options.input = None;
                            state.options.output = None;
                            state.status = "Selections cleared.".to_string();
                        }
                        4 => {
                            view = ShellView::About;
                        }
                        _ => return Ok(()),
                    },
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(());
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        if state.selected > 0 {
                            state.selected -= 1;
                        }
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        if state.selected + 1 < MENU_ITEMS.len() {
                            state.selected += 1;
                        }
                    }
                    KeyCode::Home => {
                        state.selected = 0;
                    }
                    KeyCode::End => {
                        state.selected = MENU_ITEMS.len() - 1;
                    }
                    _ => {}
                },
                ShellView::SelectInput(selector) => match key.code {
                    KeyCode::Enter => {
                        if !selector.filtered.is_empty() {
                            let idx = selector.filtered[selector.selected];
                            let entry = &selector.entries[idx];
                            if entry.is_dir {
                                let path = entry.path.clone();
                                selector.navigate_to(path);
                            } else {
                                state.options.input = Some(entry.path.clone());
                                state.status = format!(
                                    "Input selected: {}",
                                    entry.path.display()
                                );
                                view = ShellView::Main;
                            }
                        }
                    }
                    KeyCode::Backspace => {
                        if selector.search.is_empty() {
                            if let Some(parent) = selector.current_dir.parent() {
                                selector.navigate_to(parent.to_path_buf());
                            }
                        } else {
                            selector.search.pop();
                            selector.update_filter();
                        }
                    }
                    KeyCode::Esc => {
                        if selector.search.is_empty() {
                            view = ShellView::Main;
                        } else {
                            selector.search.clear();
                            selector.update_filter();
                        }
                    }
                    KeyCode::Up => {
                        if selector.selected > 0 {
                            selector.selected -= 1;
                        }
                    }
                    KeyCode::Down => {
                        if selector.selected + 1 < selector.filtered.len() {
                            selector.selected += 1;
                        }
                    }
                    KeyCode::PageUp => {
                        selector.selected = selector.selected.saturating_sub(10);
                    }
                    KeyCode::PageDown => {
                        selector.selected =
                            (selector.selected + 10).min(selector.filtered.len().saturating_sub(1));
                    }
                    KeyCode::Char(c) if !c.is_control() => {
                        selector.search.push(c);
                        selector.update_filter();
                    }
                    _ => {}
                },
                ShellView::EditOutput { input } => match key.code {
                    KeyCode::Enter => {
                        let trimmed = input.trim();
                        if !trimmed.is_empty() {
                            let mut path = PathBuf::from(trimmed);
                            if path.extension().is_none() {
                                path.set_extension("csv");
                            }
                            state.status =
                                format!("Output selected: {}", path.display());
                            state.options.output = Some(path);
                        }
                        view = ShellView::Main;
                    }
                    KeyCode::Esc => {
                        view = ShellView::Main;
                    }
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Char(c) if !c.is_control() => {
                        input.push(c);
                    }
                    _ => {}
                },
                ShellView::About => match key.code {
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                        view = ShellView::Main;
                    }
                    _ => {}
                },
            }
        }
    }
}

/// Leave the alternate screen, run the prediction sequence with normal
/// terminal output, wait for acknowledgement, then restore the shell.
fn run_from_shell(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut ShellState,
) -> Result<()> {
    teardown_terminal();
    println!();

    let outcome = run_prediction(&state.options);
    state.status = match &outcome {
        Ok(RunOutcome::Completed) => "Prediction complete.".to_string(),
        Ok(RunOutcome::MissingInput) => {
            "Model trained. Select an input file to score it.".to_string()
        }
        Ok(RunOutcome::MissingOutput) => {
            "Model trained. Select an output file to save predictions.".to_string()
        }
        Err(err) => {
            print_error(&format!("{:#}", err));
            "Error occurred. See message above.".to_string()
        }
    };

    println!();
    acknowledge("Press Enter to return to the menu")?;

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    state.needs_redraw = true;
    terminal.clear()?;
    Ok(())
}

/// Prefill for the output editor: current selection, else derived from
/// the input with a '_predictions' suffix.
fn default_output_text(state: &ShellState) -> String {
    if let Some(output) = &state.options.output {
        return output.display().to_string();
    }
    if let Some(input) = &state.options.input {
        let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        return parent
            .join(format!("{}_predictions.csv", stem))
            .display()
            .to_string();
    }
    String::new()
}

/// List directory contents, filtered for CSV/Parquet files and directories
fn list_directory(path: &std::path::Path) -> Vec<FileEntry> {
    let mut entries = Vec::new();

    if let Some(parent) = path.parent() {
        if parent != path {
            entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
            });
        }
    }

    if let Ok(read_dir) = std::fs::read_dir(path) {
        for entry in read_dir.flatten() {
            let entry_path = entry.path();
            let is_dir = entry_path.is_dir();
            let name = entry.file_name().to_string_lossy().to_string();

            // Skip hidden files/directories (starting with .)
            if name.starts_with('.') {
                continue;
            }

            if is_dir || is_valid_data_file(&entry_path) {
                entries.push(FileEntry {
                    name,
                    path: entry_path,
                    is_dir,
                });
            }
        }
    }

    // Sort: ".." first, then directories, then files alphabetically
    entries.sort_by(|a, b| {
        if a.name == ".." {
            return std::cmp::Ordering::Less;
        }
        if b.name == ".." {
            return std::cmp::Ordering::Greater;
        }
        match (a.is_dir, b.is_dir) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    });

    entries
}

/// Check if a file is a valid data file (CSV or Parquet)
fn is_valid_data_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv") || e.eq_ignore_ascii_case("parquet"))
        .unwrap_or(false)
}

fn logo_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "     ██╗ ██████╗ ██████╗ ███████╗██╗████████╗",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "     ██║██╔═══██╗██╔══██╗██╔════╝██║╚══██╔══╝",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "     ██║██║   ██║██████╔╝█████╗  ██║   ██║",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "██   ██║██║   ██║██╔══██╗██╔══╝  ██║   ██║",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "╚█████╔╝╚██████╔╝██████╔╝██║     ██║   ██║",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            " ╚════╝  ╚═════╝ ╚═════╝ ╚═╝     ╚═╝   ╚═╝",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("◆ ", Style::default().fg(Color::Magenta).bold()),
            Span::styled(
                "Employee attrition prediction",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ]
}

fn draw_ui(frame: &mut Frame, state: &ShellState, view: &ShellView) {
    let area = frame.area();

    let logo_height = 9u16;
    let menu_width = 66u16;
    let menu_height = 18u16.min(area.height.saturating_sub(logo_height + 2));
    let total_height = logo_height + menu_height;

    let x = area.width.saturating_sub(menu_width) / 2;
    let y = area.height.saturating_sub(total_height) / 2;

    let logo_area = Rect::new(x, y, menu_width.min(area.width), logo_height);
    let logo_paragraph = Paragraph::new(logo_lines()).alignment(Alignment::Center);
    frame.render_widget(logo_paragraph, logo_area);

    let menu_y = y + logo_height;
    let menu_area = Rect::new(x, menu_y, menu_width.min(area.width), menu_height.max(10));

    frame.render_widget(Clear, menu_area);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Jobfit ")
        .title_style(Style::default().fg(Color::Cyan).bold());

    let inner_area = outer_block.inner(menu_area);
    frame.render_widget(outer_block, menu_area);

    let content = build_main_content(state, inner_area.width as usize);
    frame.render_widget(Paragraph::new(content), inner_area);

    match view {
        ShellView::Main => {}
        ShellView::SelectInput(selector) => draw_file_selector(frame, selector),
        ShellView::EditOutput { input } => draw_output_editor(frame, input),
        ShellView::About => draw_about(frame),
    }
}

fn build_main_content(state: &ShellState, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![];
    let max_path_len = width.saturating_sub(14);

    let input_display = state
        .options
        .input
        .as_ref()
        .map(|p| truncate_path_start(&p.display().to_string(), max_path_len))
        .unwrap_or_else(|| "⚠ Not selected".to_string());
    let input_style = if state.options.input.is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Input:  ", Style::default().fg(Color::DarkGray)),
        Span::styled(input_display, input_style),
    ]));

    let output_display = state
        .options
        .output
        .as_ref()
        .map(|p| truncate_path_start(&p.display().to_string(), max_path_len))
        .unwrap_or_else(|| "⚠ Not selected".to_string());
    let output_style = if state.options.output.is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };
    lines.push(Line::from(vec![
        Span::styled("  Output: ", Style::default().fg(Color::DarkGray)),
        Span::styled(output_display, output_style),
    ]));

    lines.push(Line::from(Span::styled(
        "  ───────────────────────────────────────────────────────────",
        Style::default().fg(Color::DarkGray),
    )));

    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let style = if i == state.selected {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if i == state.selected { "▸" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", marker), Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {} ", item), style),
        ]));
    }

    lines.push(Line::from(Span::styled(
        "  ───────────────────────────────────────────────────────────",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(vec![
        Span::styled("  Status: ", Style::default().fg(Color::DarkGray)),
        Span::styled(state.status.clone(), Style::default().fg(Color::Green)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  ↑/↓", Style::default().fg(Color::Cyan)),
        Span::styled(" move  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Q", Style::default().fg(Color::Cyan)),
        Span::styled(" quit", Style::default().fg(Color::DarkGray)),
    ]));

    lines
}

/// Draw the file selector UI
fn draw_file_selector(frame: &mut Frame, state: &FileSelectorState) {
    let area = frame.area();

    let popup_width = 66u16;
    let popup_height = 22u16;
    let x = area.width.saturating_sub(popup_width) / 2;
    let y = area.height.saturating_sub(popup_height) / 2;

    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Select Input File ")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .title_alignment(Alignment::Center);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Current path
            Constraint::Length(3), // Search box
            Constraint::Min(1),    // File list
            Constraint::Length(2), // Help text
        ])
        .split(inner);

    // Current path display (truncated from start if too long)
    let path_str = state.current_dir.display().to_string();
    let max_path_len = (chunks[0].width as usize).saturating_sub(12);
    let display_path = truncate_path_start(&path_str, max_path_len);
    let path_line = Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("Current: ", Style::default().fg(Color::DarkGray)),
        Span::styled(display_path, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(path_line), chunks[0]);

    // Search box
    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Filter ")
        .title_style(Style::default().fg(Color::DarkGray));

    let search_content = if state.search.is_empty() {
        Line::from(vec![
            Span::styled("Type to filter...", Style::default().fg(Color::DarkGray)),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(vec![
            Span::styled(state.search.clone(), Style::default().fg(Color::White)),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ])
    };
    frame.render_widget(Paragraph::new(search_content).block(search_block), chunks[1]);

    // File list with visible window
    let list_height = chunks[2].height as usize;
    let start_idx = if state.selected >= list_height {
        state.selected - list_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = state
        .filtered
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(list_height)
        .map(|(display_idx, &entry_idx)| {
            let entry = &state.entries[entry_idx];
            let icon = if entry.is_dir { "▸ " } else { "  " };
            let suffix = if entry.is_dir && entry.name != ".." {
                "/"
            } else {
                ""
            };

            let style = if display_idx == state.selected {
                if entry.is_dir {
                    Style::default().fg(Color::Black).bg(Color::Cyan).bold()
                } else {
                    Style::default().fg(Color::Black).bg(Color::Green).bold()
                }
            } else if entry.is_dir {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(format!("  {}{}{}", icon, entry.name, suffix)).style(style)
        })
        .collect();

    let list = List::new(items);
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.saturating_sub(start_idx)));
    frame.render_stateful_widget(list, chunks[2], &mut list_state);

    // Help text
    let help_text = Line::from(vec![
        Span::styled("  Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Backspace", Style::default().fg(Color::Cyan)),
        Span::styled(" back  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(help_text), chunks[3]);

    // Count indicator
    if !state.filtered.is_empty() {
        let count_text = format!(" {}/{} ", state.selected + 1, state.filtered.len());
        let text_len = count_text.len();
        let count_span = Span::styled(count_text, Style::default().fg(Color::DarkGray));
        let count_area = Rect::new(
            popup_area.x + popup_area.width - text_len as u16 - 1,
            popup_area.y + popup_area.height - 1,
            text_len as u16,
            1,
        );
        frame.render_widget(Paragraph::new(count_span), count_area);
    }

    // Show "No files found" message if filtered is empty
    if state.filtered.is_empty() {
        let msg = if state.search.is_empty() {
            "No CSV or Parquet files in this directory"
        } else {
            "No matching files"
        };
        let msg_line = Line::from(Span::styled(
            msg,
            Style::default().fg(Color::DarkGray).italic(),
        ));
        let msg_area = Rect::new(
            chunks[2].x + 2,
            chunks[2].y + chunks[2].height / 2,
            chunks[2].width.saturating_sub(4),
            1,
        );
        frame.render_widget(
            Paragraph::new(msg_line).alignment(Alignment::Center),
            msg_area,
        );
    }
}

fn draw_output_editor(frame: &mut Frame, input: &str) {
    let area = frame.area();

    let popup_width = 60u16;
    let popup_height = 7u16;
    let x = area.width.saturating_sub(popup_width) / 2;
    let y = area.height.saturating_sub(popup_height) / 2;

    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Output File Path ")
        .title_style(Style::default().fg(Color::Magenta).bold());

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .split(inner);

    let desc = Paragraph::new(Line::from(Span::styled(
        "  Extension picks the format (.csv or .parquet):",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(desc, chunks[0]);

    let input_line = Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(input.to_string(), Style::default().fg(Color::White)),
        Span::styled("▌", Style::default().fg(Color::Magenta)),
    ]);
    frame.render_widget(Paragraph::new(input_line), chunks[1]);

    let help_text = Line::from(vec![
        Span::styled("  Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(help_text), chunks[2]);
}

fn draw_about(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 56u16;
    let popup_height = 10u16;
    let x = area.width.saturating_sub(popup_width) / 2;
    let y = area.height.saturating_sub(popup_height) / 2;

    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" About Jobfit ")
        .title_style(Style::default().fg(Color::Cyan).bold());

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("  Jobfit v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::White).bold(),
        )]),
        Line::from(""),
        Line::from(Span::styled(
            "  Trains a random forest on historical employee data",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  and predicts which employees are likely to leave.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter/Esc", Style::default().fg(Color::Cyan)),
            Span::styled(" close", Style::default().fg(Color::DarkGray)),
        ]),
    ])
    .block(block);

    frame.render_widget(content, popup_area);
}

/// Truncate a path string from the start to fit within max_len
/// characters. Counts chars so multi-byte paths stay on boundaries.
fn truncate_path_start(path: &str, max_len: usize) -> String {
    let n_chars = path.chars().count();
    if n_chars <= max_len {
        return path.to_string();
    }
    if max_len <= 3 {
        return "...".to_string();
    }
    let keep = max_len - 3;
    let tail: String = path.chars().skip(n_chars - keep).collect();
    format!("...{}", tail)
}
