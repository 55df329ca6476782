//! Wellkit Health Companion — interactive Ratatui TUI
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  Wellkit · <screen title>                         <user · language> │
//!   ├─── body ────────────────────────────────────────────────────────────┤
//!   │  one screen at a time: welcome, login, register, dashboard,         │
//!   │  medicine reminders, hospitals, appointments, health advisor chat   │
//!   │  (settings overlay drawn on top when open)                          │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings / status)                                     │
//!   └─────────────────────────────────────────────────────────────────────┘

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

use wellkit_advisor::RuleAdvisor;
use wellkit_contracts::{
    chat::{AdvisorReply, Sender},
    profile::Language,
    reminder::Frequency,
};
use wellkit_data::{hospital_directory, seed_appointments, seed_reminders, strings_for};
use wellkit_state::{AppointmentBook, ChatLog, ReminderList, Session};

// ── Timing constants ──────────────────────────────────────────────────────────

/// How long the welcome screen lingers before moving to login.
const WELCOME_MS: u64 = 3000;

/// Simulated "advisor is typing" delay before a computed reply is shown.
const TYPING_MS: u64 = 1500;

/// How long a status toast stays in the footer.
const STATUS_MS: u64 = 2500;

// ── Domain types ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Welcome,
    Login,
    Register,
    Dashboard,
    Medicine,
    Hospitals,
    Appointments,
    Chat,
}

/// A single free-text form field.
#[derive(Debug, Default)]
struct FormField {
    value: String,
}

#[derive(Debug, Default)]
struct LoginForm {
    email: FormField,
    password: FormField,
    focus: usize,
}

#[derive(Debug, Default)]
struct RegisterForm {
    name: FormField,
    email: FormField,
    password: FormField,
    focus: usize,
}

#[derive(Debug)]
struct ReminderForm {
    name: FormField,
    dosage: FormField,
    time: FormField,
    frequency: Frequency,
    focus: usize,
}

impl ReminderForm {
    fn new() -> Self {
        Self {
            name: FormField::default(),
            dosage: FormField::default(),
            time: FormField::default(),
            frequency: Frequency::Daily,
            focus: 0,
        }
    }
}

#[derive(Debug, Default)]
struct AppointmentForm {
    doctor: FormField,
    specialty: FormField,
    date: FormField,
    time: FormField,
    location: FormField,
    focus: usize,
}

/// A reply that has been computed but is still being "typed" by the advisor.
#[derive(Debug)]
struct PendingReply {
    ready_at: Instant,
    reply: AdvisorReply,
}

// ── App state ─────────────────────────────────────────────────────────────────

struct App {
    screen: Screen,
    language: Language,
    notifications: bool,
    settings_open: bool,

    session: Session,
    reminders: ReminderList,
    appointments: AppointmentBook,
    chat: ChatLog,
    advisor: RuleAdvisor,

    login_form: LoginForm,
    register_form: RegisterForm,
    reminder_form: Option<ReminderForm>,
    appointment_form: Option<AppointmentForm>,

    selected_reminder: usize,
    selected_appointment: usize,
    selected_hospital: usize,
    location_enabled: bool,

    chat_input: String,
    pending_reply: Option<PendingReply>,

    welcome_since: Instant,
    status: Option<(Instant, String)>,
}

impl App {
    fn new() -> wellkit_contracts::error::WellkitResult<Self> {
        let language = Language::default();
        let greeting = strings_for(language).greeting;

        Ok(Self {
            screen: Screen::Welcome,
            language,
            notifications: true,
            settings_open: false,
            session: Session::new(),
            reminders: ReminderList::with_entries(seed_reminders()),
            appointments: AppointmentBook::with_entries(seed_appointments()),
            chat: ChatLog::seeded(greeting),
            advisor: RuleAdvisor::builtin()?,
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            reminder_form: None,
            appointment_form: None,
            selected_reminder: 0,
            selected_appointment: 0,
            selected_hospital: 0,
            location_enabled: false,
            chat_input: String::new(),
            pending_reply: None,
            welcome_since: Instant::now(),
            status: None,
        })
    }

    fn toast(&mut self, message: impl Into<String>) {
        self.status = Some((Instant::now(), message.into()));
    }

    /// Clear the toast once it has been visible long enough.
    fn tick_status(&mut self) {
        if let Some((since, _)) = &self.status {
            if since.elapsed() >= Duration::from_millis(STATUS_MS) {
                self.status = None;
            }
        }
    }

    /// Reveal the pending advisor reply once the typing delay has elapsed.
    fn tick_pending_reply(&mut self) {
        let ready = self
            .pending_reply
            .as_ref()
            .map(|p| Instant::now() >= p.ready_at)
            .unwrap_or(false);
        if ready {
            if let Some(pending) = self.pending_reply.take() {
                self.chat.push_advisor(pending.reply);
            }
        }
    }

    /// Auto-advance past the welcome screen.
    fn tick_welcome(&mut self) {
        if self.screen == Screen::Welcome
            && self.welcome_since.elapsed() >= Duration::from_millis(WELCOME_MS)
        {
            self.screen = Screen::Login;
        }
    }

    /// Switch language and re-seed the conversation with the new greeting.
    fn cycle_language(&mut self) {
        self.language = self.language.next();
        let greeting = strings_for(self.language).greeting;
        self.chat.reset(greeting);
        self.pending_reply = None;
    }

    fn logout(&mut self) {
        self.session.logout();
        self.settings_open = false;
        self.login_form = LoginForm::default();
        self.register_form = RegisterForm::default();
        self.chat_input.clear();
        self.pending_reply = None;
        let greeting = strings_for(self.language).greeting;
        self.chat.reset(greeting);
        self.screen = Screen::Login;
    }

    /// Send the chat input to the advisor.  The reply is computed
    /// immediately and withheld for the typing delay; a pending reply
    /// blocks further sends until it is revealed.
    fn send_chat_message(&mut self) {
        if self.pending_reply.is_some() {
            return;
        }
        let text = self.chat_input.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.chat.push_user(&text);
        let reply = self.advisor.select(&text, self.session.profile());
        self.pending_reply = Some(PendingReply {
            ready_at: Instant::now() + Duration::from_millis(TYPING_MS),
            reply,
        });
        self.chat_input.clear();
    }
}

// ── Key handling ──────────────────────────────────────────────────────────────

/// Outcome of a key press: keep running or quit.
enum Flow {
    Continue,
    Quit,
}

fn handle_key(app: &mut App, key: KeyEvent) -> Flow {
    // Ctrl-C always quits.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Flow::Quit;
    }

    if app.settings_open {
        handle_settings_key(app, key);
        return Flow::Continue;
    }

    match app.screen {
        Screen::Welcome => {
            // Any key skips the splash.
            app.screen = Screen::Login;
            Flow::Continue
        }
        Screen::Login => handle_login_key(app, key),
        Screen::Register => handle_register_key(app, key),
        Screen::Dashboard => handle_dashboard_key(app, key),
        Screen::Medicine => {
            handle_medicine_key(app, key);
            Flow::Continue
        }
        Screen::Hospitals => {
            handle_hospitals_key(app, key);
            Flow::Continue
        }
        Screen::Appointments => {
            handle_appointments_key(app, key);
            Flow::Continue
        }
        Screen::Chat => {
            handle_chat_key(app, key);
            Flow::Continue
        }
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.settings_open = false,
        KeyCode::Char('l') | KeyCode::Char('L') => app.cycle_language(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.notifications = !app.notifications,
        KeyCode::Char('o') | KeyCode::Char('O') => app.logout(),
        _ => {}
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) -> Flow {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.login_form.focus = (app.login_form.focus + 1) % 2;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.login_form.focus = (app.login_form.focus + 1) % 2;
        }
        KeyCode::F(2) => {
            app.screen = Screen::Register;
        }
        KeyCode::Enter => {
            let email = app.login_form.email.value.clone();
            let password = app.login_form.password.value.clone();
            match app.session.login(&email, &password) {
                Ok(()) => {
                    app.screen = Screen::Dashboard;
                    app.toast("Logged in");
                }
                Err(e) => app.toast(e.to_string()),
            }
        }
        KeyCode::Backspace => {
            login_focused_field(&mut app.login_form).value.pop();
        }
        KeyCode::Char(c) => {
            login_focused_field(&mut app.login_form).value.push(c);
        }
        _ => {}
    }
    Flow::Continue
}

fn login_focused_field(form: &mut LoginForm) -> &mut FormField {
    match form.focus {
        0 => &mut form.email,
        _ => &mut form.password,
    }
}

fn handle_register_key(app: &mut App, key: KeyEvent) -> Flow {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.register_form.focus = (app.register_form.focus + 1) % 3;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.register_form.focus = (app.register_form.focus + 2) % 3;
        }
        KeyCode::F(2) | KeyCode::Esc => {
            app.screen = Screen::Login;
        }
        KeyCode::Enter => {
            let name = app.register_form.name.value.clone();
            let email = app.register_form.email.value.clone();
            let password = app.register_form.password.value.clone();
            match app.session.register(&name, &email, &password) {
                Ok(()) => {
                    app.screen = Screen::Dashboard;
                    app.toast("Account created");
                }
                Err(e) => app.toast(e.to_string()),
            }
        }
        KeyCode::Backspace => {
            register_focused_field(&mut app.register_form).value.pop();
        }
        KeyCode::Char(c) => {
            register_focused_field(&mut app.register_form).value.push(c);
        }
        _ => {}
    }
    Flow::Continue
}

fn register_focused_field(form: &mut RegisterForm) -> &mut FormField {
    match form.focus {
        0 => &mut form.name,
        1 => &mut form.email,
        _ => &mut form.password,
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Flow {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Flow::Quit,
        KeyCode::Char('1') => app.screen = Screen::Medicine,
        KeyCode::Char('2') => app.screen = Screen::Hospitals,
        KeyCode::Char('3') => app.screen = Screen::Appointments,
        KeyCode::Char('4') => app.screen = Screen::Chat,
        KeyCode::Char('s') | KeyCode::Char('S') => app.settings_open = true,
        _ => {}
    }
    Flow::Continue
}

fn handle_medicine_key(app: &mut App, key: KeyEvent) {
    // Form mode captures all input until saved or cancelled.
    if let Some(form) = &mut app.reminder_form {
        match key.code {
            KeyCode::Esc => app.reminder_form = None,
            KeyCode::Tab | KeyCode::Down => form.focus = (form.focus + 1) % 4,
            KeyCode::BackTab | KeyCode::Up => form.focus = (form.focus + 3) % 4,
            KeyCode::Left | KeyCode::Right if form.focus == 3 => {
                form.frequency = form.frequency.next();
            }
            KeyCode::Enter => {
                let (name, dosage, time, frequency) = (
                    form.name.value.clone(),
                    form.dosage.value.clone(),
                    form.time.value.clone(),
                    form.frequency,
                );
                match app.reminders.add(&name, &dosage, &time, frequency) {
                    Ok(_) => {
                        app.reminder_form = None;
                        app.toast("Reminder added");
                    }
                    Err(e) => app.toast(e.to_string()),
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = reminder_focused_field(form) {
                    field.value.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = reminder_focused_field(form) {
                    field.value.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.screen = Screen::Dashboard,
        KeyCode::Char('s') | KeyCode::Char('S') => app.settings_open = true,
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.reminder_form = Some(ReminderForm::new());
        }
        KeyCode::Up => {
            app.selected_reminder = app.selected_reminder.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.selected_reminder + 1 < app.reminders.len() {
                app.selected_reminder += 1;
            }
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            if let Some(reminder) = app.reminders.entries().get(app.selected_reminder) {
                let id = reminder.id.clone();
                match app.reminders.remove(&id) {
                    Ok(()) => app.toast("Reminder deleted"),
                    Err(e) => app.toast(e.to_string()),
                }
                app.selected_reminder = app
                    .selected_reminder
                    .min(app.reminders.len().saturating_sub(1));
            }
        }
        _ => {}
    }
}

/// The frequency slot (index 3) has no text field.
fn reminder_focused_field(form: &mut ReminderForm) -> Option<&mut FormField> {
    match form.focus {
        0 => Some(&mut form.name),
        1 => Some(&mut form.dosage),
        2 => Some(&mut form.time),
        _ => None,
    }
}

fn handle_hospitals_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.screen = Screen::Dashboard,
        KeyCode::Char('s') | KeyCode::Char('S') => app.settings_open = true,
        KeyCode::Char('l') | KeyCode::Char('L') => app.location_enabled = true,
        KeyCode::Up => app.selected_hospital = app.selected_hospital.saturating_sub(1),
        KeyCode::Down => {
            if app.selected_hospital + 1 < hospital_directory().len() {
                app.selected_hospital += 1;
            }
        }
        _ => {}
    }
}

fn handle_appointments_key(app: &mut App, key: KeyEvent) {
    if let Some(form) = &mut app.appointment_form {
        match key.code {
            KeyCode::Esc => app.appointment_form = None,
            KeyCode::Tab | KeyCode::Down => form.focus = (form.focus + 1) % 5,
            KeyCode::BackTab | KeyCode::Up => form.focus = (form.focus + 4) % 5,
            KeyCode::Enter => {
                let (doctor, specialty, date, time, location) = (
                    form.doctor.value.clone(),
                    form.specialty.value.clone(),
                    form.date.value.clone(),
                    form.time.value.clone(),
                    form.location.value.clone(),
                );
                match app
                    .appointments
                    .book(&doctor, &specialty, &date, &time, &location)
                {
                    Ok(_) => {
                        app.appointment_form = None;
                        app.toast("Appointment booked");
                    }
                    Err(e) => app.toast(e.to_string()),
                }
            }
            KeyCode::Backspace => {
                appointment_focused_field(form).value.pop();
            }
            KeyCode::Char(c) => {
                appointment_focused_field(form).value.push(c);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.screen = Screen::Dashboard,
        KeyCode::Char('s') | KeyCode::Char('S') => app.settings_open = true,
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.appointment_form = Some(AppointmentForm::default());
        }
        KeyCode::Up => {
            app.selected_appointment = app.selected_appointment.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.selected_appointment + 1 < app.appointments.len() {
                app.selected_appointment += 1;
            }
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            if let Some(appointment) = app.appointments.entries().get(app.selected_appointment) {
                let id = appointment.id.clone();
                match app.appointments.cancel(&id) {
                    Ok(()) => app.toast("Appointment cancelled"),
                    Err(e) => app.toast(e.to_string()),
                }
                app.selected_appointment = app
                    .selected_appointment
                    .min(app.appointments.len().saturating_sub(1));
            }
        }
        _ => {}
    }
}

fn appointment_focused_field(form: &mut AppointmentForm) -> &mut FormField {
    match form.focus {
        0 => &mut form.doctor,
        1 => &mut form.specialty,
        2 => &mut form.date,
        3 => &mut form.time,
        _ => &mut form.location,
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.screen = Screen::Dashboard,
        KeyCode::Enter => app.send_chat_message(),
        KeyCode::Backspace => {
            app.chat_input.pop();
        }
        // Quick-question shortcuts, offered while only the greeting is shown.
        KeyCode::F(n @ 1..=4) if app.chat.only_greeting() => {
            let questions = strings_for(app.language).quick_questions;
            app.chat_input = questions[(n - 1) as usize].to_string();
        }
        KeyCode::Char(c) => app.chat_input.push(c),
        _ => {}
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn ui(f: &mut Frame, app: &App) {
    let full = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(8),    // body
            Constraint::Length(3), // footer
        ])
        .split(full);

    render_header(f, outer[0], app);

    match app.screen {
        Screen::Welcome => render_welcome(f, outer[1], app),
        Screen::Login => render_login(f, outer[1], app),
        Screen::Register => render_register(f, outer[1], app),
        Screen::Dashboard => render_dashboard(f, outer[1], app),
        Screen::Medicine => render_medicine(f, outer[1], app),
        Screen::Hospitals => render_hospitals(f, outer[1], app),
        Screen::Appointments => render_appointments(f, outer[1], app),
        Screen::Chat => render_chat(f, outer[1], app),
    }

    render_footer(f, outer[2], app);

    if app.settings_open {
        render_settings_overlay(f, full, app);
    }
}

fn screen_title(app: &App) -> &'static str {
    let t = strings_for(app.language);
    match app.screen {
        Screen::Welcome => "Wellkit",
        Screen::Login => t.login_welcome,
        Screen::Register => t.register_title,
        Screen::Dashboard => t.dashboard_welcome,
        Screen::Medicine => t.medicine,
        Screen::Hospitals => t.hospitals,
        Screen::Appointments => t.appointments,
        Screen::Chat => t.chatbot,
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut spans: Vec<Span> = vec![
        Span::styled("Wellkit", title_style),
        Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
        Span::styled(screen_title(app), Style::default().fg(Color::White)),
    ];

    if let Some(profile) = app.session.profile() {
        spans.push(Span::styled(
            format!("    {} · {}", profile.name, app.language.code()),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            format!("    {}", app.language.code()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn render_welcome(f: &mut Frame, area: Rect, app: &App) {
    let t = strings_for(app.language);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "♥  W E L L K I T  ♥",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(t.tagline, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(
            "press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let splash = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(splash, centered_rect(area, 60, 10));
}

/// One bordered input line; the focused field gets a cyan border and a
/// trailing cursor marker.
fn render_input_line(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool, masked: bool) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let cursor = if focused { "▏" } else { "" };

    let input = Paragraph::new(Line::from(vec![
        Span::raw(format!(" {}{}", shown, cursor)),
    ]))
    .block(
        Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(border),
    );
    f.render_widget(input, area);
}

fn render_login(f: &mut Frame, area: Rect, app: &App) {
    let t = strings_for(app.language);
    let panel = centered_rect(area, 52, 14);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // subtitle
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(2), // register hint
            Constraint::Length(2), // demo hint
            Constraint::Min(0),
        ])
        .split(panel);

    let subtitle = Paragraph::new(Span::styled(
        t.login_subtitle,
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(subtitle, chunks[0]);

    render_input_line(
        f,
        chunks[1],
        t.email,
        &app.login_form.email.value,
        app.login_form.focus == 0,
        false,
    );
    render_input_line(
        f,
        chunks[2],
        t.password,
        &app.login_form.password.value,
        app.login_form.focus == 1,
        true,
    );

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(t.no_account, Style::default().fg(Color::Gray)),
        Span::raw(" "),
        Span::styled("[F2] ", Style::default().fg(Color::Cyan)),
        Span::styled(t.sign_up, Style::default().fg(Color::White)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(hint, chunks[3]);

    let demo = Paragraph::new(Span::styled(
        t.demo_hint,
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(demo, chunks[4]);
}

fn render_register(f: &mut Frame, area: Rect, app: &App) {
    let t = strings_for(app.language);
    let panel = centered_rect(area, 52, 16);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(2), // back hint
            Constraint::Min(0),
        ])
        .split(panel);

    render_input_line(
        f,
        chunks[0],
        t.full_name,
        &app.register_form.name.value,
        app.register_form.focus == 0,
        false,
    );
    render_input_line(
        f,
        chunks[1],
        t.email,
        &app.register_form.email.value,
        app.register_form.focus == 1,
        false,
    );
    render_input_line(
        f,
        chunks[2],
        t.password,
        &app.register_form.password.value,
        app.register_form.focus == 2,
        true,
    );

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(t.have_account, Style::default().fg(Color::Gray)),
        Span::raw(" "),
        Span::styled("[F2] ", Style::default().fg(Color::Cyan)),
        Span::styled(t.login, Style::default().fg(Color::White)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(hint, chunks[3]);
}

fn render_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let t = strings_for(app.language);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(area);

    let mut items: Vec<ListItem> = Vec::new();

    if let Some(profile) = app.session.profile() {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("  {} {}!", t.dashboard_welcome, profile.name),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", t.dashboard_subtitle),
                Style::default().fg(Color::Gray),
            ),
        ])));
        items.push(ListItem::new(""));
    }

    let menu: [(&str, &str, &str); 4] = [
        ("[1]", t.medicine, t.medicine_desc),
        ("[2]", t.hospitals, t.hospitals_desc),
        ("[3]", t.appointments, t.appointments_desc),
        ("[4]", t.chatbot, t.chatbot_desc),
    ];

    for (key, title, desc) in menu {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("  {} ", key), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{:<26}", title),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc, Style::default().fg(Color::Gray)),
        ])));
        items.push(ListItem::new(""));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(list, chunks[0]);

    // Health tip of the day.
    let tip = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("  💡 {}", t.quick_tip),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", t.tip_message),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(tip, chunks[1]);
}

fn render_medicine(f: &mut Frame, area: Rect, app: &App) {
    let t = strings_for(app.language);

    if let Some(form) = &app.reminder_form {
        let panel = centered_rect(area, 52, 17);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(panel);

        render_input_line(f, chunks[0], "Medicine Name", &form.name.value, form.focus == 0, false);
        render_input_line(f, chunks[1], "Dosage", &form.dosage.value, form.focus == 1, false);
        render_input_line(f, chunks[2], "Time", &form.time.value, form.focus == 2, false);

        let freq_border = if form.focus == 3 {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let freq = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
            Span::styled(form.frequency.label(), Style::default().fg(Color::White)),
            Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
        ]))
        .block(
            Block::default()
                .title(" Frequency ")
                .borders(Borders::ALL)
                .border_style(freq_border),
        );
        f.render_widget(freq, chunks[3]);
        return;
    }

    let mut items: Vec<ListItem> = Vec::new();
    items.push(ListItem::new(Span::styled(
        format!("  {}", t.medicine_subtitle),
        Style::default().fg(Color::Gray),
    )));
    items.push(ListItem::new(""));

    if app.reminders.is_empty() {
        items.push(ListItem::new(Span::styled(
            format!("  {}", t.no_reminders),
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        items.push(ListItem::new(Span::styled(
            format!("  {} ({})", t.active_reminders, app.reminders.len()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        for (i, reminder) in app.reminders.entries().iter().enumerate() {
            let selected = i == app.selected_reminder;
            let marker = if selected { "▸" } else { " " };
            let row_style = if selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            let dosage = if reminder.dosage.is_empty() {
                String::new()
            } else {
                format!(" ({})", reminder.dosage)
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!("  {} 💊 ", marker), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{}{}", reminder.name, dosage), row_style),
                Span::styled(
                    format!("   {} · {}", reminder.time, reminder.frequency.label()),
                    Style::default().fg(Color::Gray),
                ),
            ])));
        }
    }

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", t.medicine))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(list, area);
}

fn render_hospitals(f: &mut Frame, area: Rect, app: &App) {
    let t = strings_for(app.language);
    let hospitals = hospital_directory();
    let mut items: Vec<ListItem> = Vec::new();

    if !app.location_enabled {
        items.push(ListItem::new(""));
        items.push(ListItem::new(Span::styled(
            format!("  📍 {}", t.location_prompt),
            Style::default().fg(Color::Yellow),
        )));
        items.push(ListItem::new(""));
        items.push(ListItem::new(Line::from(vec![
            Span::styled("  [l] ", Style::default().fg(Color::Cyan)),
            Span::raw("Enable location"),
        ])));
    } else {
        items.push(ListItem::new(Span::styled(
            format!("  {}", t.hospitals_list),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        items.push(ListItem::new(""));

        for (i, hospital) in hospitals.iter().enumerate() {
            let selected = i == app.selected_hospital;
            let marker = if selected { "▸" } else { " " };
            let name_style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!("  {} 🏥 ", marker), Style::default().fg(Color::Red)),
                Span::styled(format!("{:<26}", hospital.name), name_style),
                Span::styled(
                    format!("{:>7}  {:.1}★", hospital.distance, hospital.rating),
                    Style::default().fg(Color::Gray),
                ),
            ])));
            items.push(ListItem::new(Line::from(vec![
                Span::raw("       "),
                Span::styled(
                    format!("{:<26}", hospital.specialty),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(hospital.phone.as_str(), Style::default().fg(Color::DarkGray)),
                if hospital.emergency {
                    Span::styled("   24/7 ER", Style::default().fg(Color::Red))
                } else {
                    Span::raw("")
                },
            ])));
            items.push(ListItem::new(""));
        }
    }

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", t.hospitals))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(list, area);
}

fn render_appointments(f: &mut Frame, area: Rect, app: &App) {
    let t = strings_for(app.language);

    if let Some(form) = &app.appointment_form {
        let panel = centered_rect(area, 52, 19);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(panel);

        render_input_line(f, chunks[0], "Doctor Name", &form.doctor.value, form.focus == 0, false);
        render_input_line(f, chunks[1], "Specialty", &form.specialty.value, form.focus == 1, false);
        render_input_line(f, chunks[2], "Date", &form.date.value, form.focus == 2, false);
        render_input_line(f, chunks[3], "Time", &form.time.value, form.focus == 3, false);
        render_input_line(f, chunks[4], "Location", &form.location.value, form.focus == 4, false);
        return;
    }

    let mut items: Vec<ListItem> = Vec::new();
    items.push(ListItem::new(Span::styled(
        format!("  {}", t.appointments_subtitle),
        Style::default().fg(Color::Gray),
    )));
    items.push(ListItem::new(""));

    if app.appointments.is_empty() {
        items.push(ListItem::new(Span::styled(
            format!("  {}", t.no_appointments),
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        items.push(ListItem::new(Span::styled(
            format!("  {} ({})", t.your_appointments, app.appointments.len()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        for (i, appointment) in app.appointments.entries().iter().enumerate() {
            let selected = i == app.selected_appointment;
            let marker = if selected { "▸" } else { " " };
            let name_style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!("  {} 🩺 ", marker), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<24}", appointment.doctor), name_style),
                Span::styled(
                    appointment.specialty.as_str(),
                    Style::default().fg(Color::Gray),
                ),
            ])));
            items.push(ListItem::new(Line::from(vec![
                Span::raw("       "),
                Span::styled(
                    format!("{} {}  ", appointment.date, appointment.time),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    appointment.location.as_str(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("   [{}]", appointment.status.label()),
                    Style::default().fg(Color::Green),
                ),
            ])));
            items.push(ListItem::new(""));
        }
    }

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", t.appointments))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(list, area);
}

fn render_chat(f: &mut Frame, area: Rect, app: &App) {
    let t = strings_for(app.language);

    // Reserve the quick-question row only while it is offered.
    let show_quick = app.chat.only_greeting() && app.pending_reply.is_none();
    let constraints: Vec<Constraint> = if show_quick {
        vec![Constraint::Min(4), Constraint::Length(3), Constraint::Length(3)]
    } else {
        vec![Constraint::Min(4), Constraint::Length(3)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // ── Transcript ────────────────────────────────────────────────────────────
    let mut lines: Vec<Line> = Vec::new();
    for message in app.chat.messages() {
        let (who, who_style) = match message.sender {
            Sender::User => ("You", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Sender::Advisor => ("Advisor", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        };
        lines.push(Line::from(Span::styled(format!("{}:", who), who_style)));
        for text_line in message.text.lines() {
            lines.push(Line::from(Span::styled(
                format!("  {}", text_line),
                Style::default().fg(Color::White),
            )));
        }
        if !message.items.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  🥗 {}:", t.food_recommended),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )));
            for item in &message.items {
                lines.push(Line::from(vec![
                    Span::raw(format!("    {} ", item.symbol)),
                    Span::styled(
                        format!("{:<16}", item.name),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(item.benefit.as_str(), Style::default().fg(Color::Gray)),
                ]));
            }
        }
        lines.push(Line::from(""));
    }

    if app.pending_reply.is_some() {
        lines.push(Line::from(Span::styled(
            format!("{}...", t.typing),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    // Stick to the bottom of the transcript.
    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let transcript = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} — {} ", t.chatbot, t.chat_subtitle))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(transcript, chunks[0]);

    // ── Quick questions ───────────────────────────────────────────────────────
    if show_quick {
        let mut spans: Vec<Span> = vec![Span::styled(
            " 💡 ",
            Style::default().fg(Color::Yellow),
        )];
        for (i, question) in t.quick_questions.iter().enumerate() {
            spans.push(Span::styled(
                format!("[F{}] ", i + 1),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw(format!("{}  ", question)));
        }
        let quick = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(quick, chunks[1]);
    }

    // ── Input ─────────────────────────────────────────────────────────────────
    let input_area = chunks[chunks.len() - 1];
    let shown = if app.chat_input.is_empty() {
        Span::styled(
            format!(" {}", t.chat_placeholder),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            format!(" {}▏", app.chat_input),
            Style::default().fg(Color::White),
        )
    };
    let input = Paragraph::new(Line::from(shown)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(input, input_area);
}

fn render_settings_overlay(f: &mut Frame, full: Rect, app: &App) {
    let t = strings_for(app.language);
    let panel = centered_rect(full, 46, 10);

    f.render_widget(Clear, panel);

    let notif_label = if app.notifications { "ON" } else { "OFF" };
    let notif_color = if app.notifications { Color::Green } else { Color::Red };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  [l] ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{:<16}", t.language_label),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{} ({})", app.language.native_name(), app.language.code()),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::styled("  [n] ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{:<16}", t.notifications),
                Style::default().fg(Color::White),
            ),
            Span::styled(notif_label, Style::default().fg(notif_color)),
        ]),
        Line::from(vec![
            Span::styled("  [o] ", Style::default().fg(Color::Cyan)),
            Span::styled(t.logout, Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Esc closes settings",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let overlay = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", t.settings))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(overlay, panel);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    // A toast takes over the footer while it is fresh.
    if let Some((_, message)) = &app.status {
        let toast = Paragraph::new(Span::styled(
            format!(" ✨ {}", truncate(message, 100)),
            Style::default().fg(Color::Yellow),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(toast, area);
        return;
    }

    let bindings: &[(&str, &str)] = if app.settings_open {
        &[("[l]", "Language"), ("[n]", "Notifications"), ("[o]", "Logout"), ("[Esc]", "Close")]
    } else {
        match app.screen {
            Screen::Welcome => &[("[any key]", "Continue")],
            Screen::Login => &[("[Tab]", "Next field"), ("[Enter]", "Login"), ("[F2]", "Sign up"), ("[Ctrl-C]", "Quit")],
            Screen::Register => &[("[Tab]", "Next field"), ("[Enter]", "Create account"), ("[F2]", "Back"), ("[Ctrl-C]", "Quit")],
            Screen::Dashboard => &[("[1-4]", "Open"), ("[s]", "Settings"), ("[q]", "Quit")],
            Screen::Medicine => {
                if app.reminder_form.is_some() {
                    &[("[Tab]", "Next field"), ("[◂▸]", "Frequency"), ("[Enter]", "Save"), ("[Esc]", "Cancel")]
                } else {
                    &[("[a]", "Add"), ("[d]", "Delete"), ("[↑↓]", "Select"), ("[s]", "Settings"), ("[Esc]", "Back")]
                }
            }
            Screen::Hospitals => &[("[l]", "Enable location"), ("[↑↓]", "Select"), ("[s]", "Settings"), ("[Esc]", "Back")],
            Screen::Appointments => {
                if app.appointment_form.is_some() {
                    &[("[Tab]", "Next field"), ("[Enter]", "Book"), ("[Esc]", "Cancel")]
                } else {
                    &[("[a]", "Book"), ("[d]", "Cancel visit"), ("[↑↓]", "Select"), ("[s]", "Settings"), ("[Esc]", "Back")]
                }
            }
            Screen::Chat => {
                if app.chat.only_greeting() {
                    &[("[Enter]", "Send"), ("[F1-F4]", "Quick question"), ("[Esc]", "Back")]
                } else {
                    &[("[Enter]", "Send"), ("[Esc]", "Back")]
                }
            }
        }
    };

    let mut spans: Vec<Span> = Vec::new();
    for (key, label) in bindings {
        spans.push(Span::styled(format!(" {} ", key), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!("{}  ", label)));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Utility helpers ───────────────────────────────────────────────────────────

/// Truncate a string to at most `max` chars, appending "…" if truncated.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// A rect of `width` x `height` centered inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect { x, y, width, height }
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    let mut app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("failed to start wellkit-tui: {}", e);
            std::process::exit(1);
        }
    };

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Best-effort terminal restore on panic.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    loop {
        terminal.draw(|f| ui(f, &app))?;

        // Short ticks while something is animating (welcome timer, typing
        // indicator, toast); otherwise a long poll to avoid burning CPU.
        let animating = app.screen == Screen::Welcome
            || app.pending_reply.is_some()
            || app.status.is_some();
        let timeout = if animating {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(200)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match handle_key(&mut app, key) {
                    Flow::Quit => break,
                    Flow::Continue => {}
                }
            }
        }

        app.tick_welcome();
        app.tick_pending_reply();
        app.tick_status();
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}
