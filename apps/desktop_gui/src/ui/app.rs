use std::time::Duration;

use client_core::{ActivityCard, ParticipantList, StatusKind, StatusMessage};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

pub const INCOMPLETE_FORM_NOTICE: &str = "Enter an email and choose an activity first";

const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(0x2e, 0x7d, 0x32);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(0xc6, 0x28, 0x28);

pub struct RosterApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    cards: Vec<ActivityCard>,
    load_failure: Option<String>,
    activity_options: Vec<String>,
    selected_activity: Option<String>,
    email_input: String,
    status: Option<StatusMessage>,
    /// Local notices (form validation, queue problems); not part of the
    /// auto-hiding status area.
    notice: Option<String>,
    loading: bool,
}

impl RosterApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            cards: Vec::new(),
            load_failure: None,
            activity_options: Vec::new(),
            selected_activity: None,
            email_input: String::new(),
            status: None,
            notice: None,
            loading: true,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::ActivitiesReplaced(cards) => {
                self.loading = false;
                self.load_failure = None;
                self.cards = cards;
            }
            UiEvent::ActivityOptionsReplaced(options) => {
                if self
                    .selected_activity
                    .as_ref()
                    .is_some_and(|selected| !options.contains(selected))
                {
                    self.selected_activity = None;
                }
                self.activity_options = options;
            }
            UiEvent::LoadFailed(message) => {
                self.loading = false;
                self.cards.clear();
                self.load_failure = Some(message);
            }
            UiEvent::StatusShown(status) => self.status = Some(status),
            UiEvent::StatusHidden => self.status = None,
            UiEvent::SignupFormReset => {
                self.email_input.clear();
                self.selected_activity = None;
            }
            UiEvent::BackendUnavailable(message) => {
                self.loading = false;
                self.notice = Some(message);
            }
        }
    }

    fn refresh(&mut self) {
        self.loading = true;
        dispatch_backend_command(&self.cmd_tx, BackendCommand::LoadActivities, &mut self.notice);
    }

    fn remove_participant(&mut self, activity: String, email: String) {
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::RemoveParticipant { activity, email },
            &mut self.notice,
        );
    }

    fn submit_signup(&mut self) {
        let email = self.email_input.trim().to_string();
        let Some(activity) = self.selected_activity.clone() else {
            self.notice = Some(INCOMPLETE_FORM_NOTICE.to_string());
            return;
        };
        if email.is_empty() {
            self.notice = Some(INCOMPLETE_FORM_NOTICE.to_string());
            return;
        }
        self.notice = None;
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SubmitSignup { activity, email },
            &mut self.notice,
        );
    }

    fn show_activities(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Available Activities");
            if ui.small_button("Refresh").clicked() {
                self.refresh();
            }
        });
        ui.separator();

        if let Some(message) = &self.load_failure {
            ui.label(message.as_str());
            return;
        }
        if self.loading && self.cards.is_empty() {
            ui.label("Loading activities...");
            return;
        }

        let mut removal = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for card in &self.cards {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(card.name.as_str()).strong().size(16.0));
                    ui.label(card.description.as_str());
                    ui.label(format!("Schedule: {}", card.schedule));
                    ui.label(format!("Availability: {}", card.availability()));
                    ui.label(egui::RichText::new("Participants:").strong());
                    match &card.participants {
                        ParticipantList::Placeholder => {
                            ui.weak(client_core::render::NO_PARTICIPANTS_PLACEHOLDER);
                        }
                        ParticipantList::Rows(rows) => {
                            for row in rows {
                                ui.horizontal(|ui| {
                                    ui.monospace(format!("[{}]", row.initial));
                                    ui.label(row.email.as_str());
                                    if ui
                                        .small_button("Remove")
                                        .on_hover_text("Unregister participant")
                                        .clicked()
                                    {
                                        removal = Some(card.removal_request(row));
                                    }
                                });
                            }
                        }
                    }
                });
                ui.add_space(6.0);
            }
        });

        if let Some(request) = removal {
            self.remove_participant(request.activity, request.email);
        }
    }

    fn show_signup_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Sign Up for an Activity");
        ui.separator();

        ui.label("Student Email:");
        let email_resp = ui.add(
            egui::TextEdit::singleline(&mut self.email_input)
                .hint_text("your-email@mergington.edu"),
        );

        ui.label("Select Activity:");
        let selected_text = self
            .selected_activity
            .as_deref()
            .unwrap_or("-- Select an activity --")
            .to_string();
        egui::ComboBox::from_id_salt("signup_activity")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for name in &self.activity_options {
                    ui.selectable_value(
                        &mut self.selected_activity,
                        Some(name.clone()),
                        name.as_str(),
                    );
                }
            });

        let submitted = email_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Sign Up").clicked() || submitted {
            self.submit_signup();
        }

        ui.add_space(8.0);
        if let Some(status) = &self.status {
            let color = match status.kind {
                StatusKind::Success => SUCCESS_COLOR,
                StatusKind::Error => ERROR_COLOR,
            };
            egui::Frame::group(ui.style())
                .stroke(egui::Stroke::new(1.0, color))
                .show(ui, |ui| {
                    ui.colored_label(color, status.text.as_str());
                });
        }
        if let Some(notice) = &self.notice {
            ui.weak(notice.as_str());
        }
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::SidePanel::right("signup_panel")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| self.show_signup_form(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.show_activities(ui));

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
