use crate::interfaces::feed_interface::FeedInterface;
use eframe::{egui, epi};
use flume::Receiver;
use helpers::buffer::RingBuffer;
use helpers::geometry::Point2d;
use std::fmt::Write;
use std::time::Instant;
use trackmap::core::render::render_track_map;
use trackmap::core::surface::{RgbColor, Shape, Surface};
use trackmap::interfaces::gui_interface::TrackSnapshot;
use trackmap::pre::theme::Theme;

#[derive(Debug)]
pub struct TrackMapPlot {
    pub feed_interface: FeedInterface,
    pub theme: Theme,
    pub prev_update: Instant,
    pub prev_update_durations: RingBuffer<u32>,
}

impl TrackMapPlot {
    pub fn new(rx: Receiver<TrackSnapshot>, theme: Theme) -> TrackMapPlot {
        // set up interface
        let feed_interface = FeedInterface {
            rx,
            snapshot: Default::default(),
        };

        // create track map plot
        TrackMapPlot {
            feed_interface,
            theme,
            prev_update: Instant::now(),
            prev_update_durations: RingBuffer::new(10),
        }
    }

    pub fn set_ui_content(&mut self, ui: &mut egui::Ui) -> egui::Response {
        // PREPARATIONS ----------------------------------------------------------------------------
        // get UI handles
        let (response, painter) =
            ui.allocate_painter(ui.available_size_before_wrap_finite(), egui::Sense::drag());

        // let the core render the current snapshot into an offscreen surface of matching size
        let mut surface = Surface::new(
            response.rect.width() as f64,
            response.rect.height() as f64,
        );
        let status = render_track_map(
            Some(&mut surface),
            &self.theme,
            &self.feed_interface.snapshot,
        );

        // MAP DRAWING -----------------------------------------------------------------------------
        // convert the surface shapes into egui shapes (surface coordinates are relative to the
        // top left corner of the allocated rect)
        let origin = response.rect.min;
        let mut shapes = vec![];

        for shape in surface.shapes().iter() {
            match shape {
                Shape::Rect { min, max, color } => shapes.push(egui::Shape::rect_filled(
                    egui::Rect::from_min_max(to_pos2(origin, min), to_pos2(origin, max)),
                    0.0,
                    to_color32(color),
                )),
                Shape::Polyline {
                    points,
                    stroke_width,
                    color,
                } => shapes.push(egui::Shape::line(
                    points.iter().map(|p| to_pos2(origin, p)).collect(),
                    egui::Stroke::new(*stroke_width, to_color32(color)),
                )),
                Shape::Segment {
                    start,
                    end,
                    stroke_width,
                    color,
                } => shapes.push(egui::Shape::line_segment(
                    [to_pos2(origin, start), to_pos2(origin, end)],
                    egui::Stroke::new(*stroke_width, to_color32(color)),
                )),
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => shapes.push(egui::Shape::circle_filled(
                    to_pos2(origin, center),
                    *radius,
                    to_color32(color),
                )),
                Shape::Ring {
                    center,
                    radius,
                    stroke_width,
                    color,
                } => shapes.push(egui::Shape::circle_stroke(
                    to_pos2(origin, center),
                    *radius,
                    egui::Stroke::new(*stroke_width, to_color32(color)),
                )),
            }
        }

        // UPDATE GENERAL INFORMATION TEXT IN GUI --------------------------------------------------
        // add render mode status and current tick information
        let snapshot = &self.feed_interface.snapshot;
        let mut gen_info_text = format!("Mode: {}\n", status);

        writeln!(
            &mut gen_info_text,
            "Track: {}",
            snapshot.track_name.as_deref().unwrap_or("-")
        )
        .unwrap();

        writeln!(
            &mut gen_info_text,
            "Lap: {} | Sector: {} | Speed: {:.1} km/h",
            snapshot.lap_count,
            snapshot.last_tick.sector.unwrap_or(0),
            snapshot.last_tick.speed_kmh.unwrap_or(0.0)
        )
        .unwrap();

        // calculate current UI update duration, append it to the buffer, and set update time
        self.prev_update_durations
            .push(self.prev_update.elapsed().as_millis() as u32);
        self.prev_update = Instant::now();

        // add update frequency
        write!(
            &mut gen_info_text,
            "GUI update frequency: {:.0} Hz",
            1000.0 / self.prev_update_durations.get_avg().unwrap()
        )
        .unwrap();

        // show general informations text in the GUI
        shapes.push(egui::Shape::text(
            ui.fonts(),
            origin,
            egui::Align2::LEFT_TOP,
            &gen_info_text,
            egui::TextStyle::Body,
            to_color32(&self.theme.line),
        ));

        // DRAWING ---------------------------------------------------------------------------------
        // update shapes in UI painter and return response
        painter.extend(shapes);
        response
    }
}

fn to_pos2(origin: egui::Pos2, point: &Point2d) -> egui::Pos2 {
    egui::Pos2 {
        x: origin.x + point.x as f32,
        y: origin.y + point.y as f32,
    }
}

fn to_color32(color: &RgbColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

impl epi::App for TrackMapPlot {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::CtxRef, _frame: &mut epi::Frame) {
        // update feed interface
        self.feed_interface.update();

        // update UI content
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::dark_canvas(ui.style()).show(ui, |ui| {
                self.set_ui_content(ui);
            });
        });

        // request repaint of the UI
        ctx.request_repaint();
    }

    fn name(&self) -> &str {
        "Track Map"
    }
}
