use shipview_states::Time;

use crate::{state::State, widgets};

pub struct ShipviewApp {
    pub state: State,
}

impl ShipviewApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for ShipviewApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Results land off the UI thread; wake egui when they do.
        if !self.state.ctx.has_waker() {
            let repaint = ctx.clone();
            self.state.ctx.install_waker(move || repaint.request_repaint());
        }

        self.state.ctx.state_mut::<Time>().tick();
        // Sync Compute for render
        self.state.ctx.sync_computes();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Shipments");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::records_panel(&mut self.state.ctx, ui);
        });

        // Run background jobs
        self.state.ctx.flush_commands();
    }
}
